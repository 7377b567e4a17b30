use tracing::debug;

use crate::{index::PrunedIndex, location::GuideRecord};

/// Spacers present in both pruned indexes, reported with the genome's location.
///
/// Only sequences that are unique genome-wide and unique within the target,
/// and identical between the two, survive. Records are sorted by spacer.
pub fn intersect_by_key(genome: &PrunedIndex, target: &PrunedIndex) -> Vec<GuideRecord> {
    // Walk the smaller side, look up in the larger one.
    let mut matches: Vec<GuideRecord> = if target.len() <= genome.len() {
        target
            .iter()
            .filter_map(|(spacer, _)| genome.get(spacer).map(|loc| GuideRecord::new(spacer, loc.clone())))
            .collect()
    } else {
        genome
            .iter()
            .filter(|(spacer, _)| target.contains(spacer))
            .map(|(spacer, loc)| GuideRecord::new(spacer, loc.clone()))
            .collect()
    };
    matches.sort_by(|a, b| a.spacer.cmp(&b.spacer));

    debug!(genome = genome.len(), target = target.len(), shared = matches.len(), "intersected indexes");
    matches
}
