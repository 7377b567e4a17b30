//! Catalog of accepted spacers with seed-region uniqueness tracking.
//!
//! A [`SpecificityIndex`] is filled during scanning, then consumed by
//! [`SpecificityIndex::prune`] into a read-only [`PrunedIndex`] holding only
//! genome-unique entries.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    constants::SPACER_LEN,
    location::{GuideRecord, SiteStatus, SpacerLocation},
    params::Parameters,
};

/// Spacers keyed by exact sequence, plus a secondary map from seed region to
/// the full-length keys carrying it.
#[derive(Debug, Clone)]
pub struct SpecificityIndex {
    entries:  HashMap<String, SpacerLocation>,
    seeds:    HashMap<String, Vec<String>>, // seed region → keys of length ≥ SPACER_LEN
    seed_len: usize,
}

impl SpecificityIndex {
    /// Empty index comparing the last `params.seed_len()` bases of each spacer.
    pub fn new(params: &Parameters) -> Self {
        Self::with_seed_len(params.seed_len())
    }

    pub fn with_seed_len(seed_len: usize) -> Self {
        Self {
            entries: HashMap::new(),
            seeds: HashMap::new(),
            seed_len,
        }
    }

    /// Index seeded with one empty-key placeholder, removed again by pruning.
    pub fn with_placeholder(params: &Parameters) -> Self {
        let mut index = Self::new(params);
        index.entries.insert(String::new(), SpacerLocation::placeholder());
        index
    }

    pub fn seed_len(&self) -> usize {
        self.seed_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, spacer: &str) -> Option<&SpacerLocation> {
        self.entries.get(spacer)
    }

    /// Seed region of `spacer`, or `None` when it is shorter than the seed.
    fn seed_of<'s>(&self, spacer: &'s str) -> Option<&'s str> {
        spacer
            .len()
            .checked_sub(self.seed_len)
            .and_then(|start| spacer.get(start..))
    }

    /// `true` if a stored full-length spacer shares the seed region of `spacer`.
    pub fn seed_collides(&self, spacer: &str) -> bool {
        self.seed_of(spacer)
            .and_then(|seed| self.seeds.get(seed))
            .is_some_and(|keys| !keys.is_empty())
    }

    /// Records `spacer` at `location` and reports the status it was stored with.
    ///
    /// When a stored full-length spacer (this one included, if seen before)
    /// shares the seed region, the new entry and every entry sharing that seed
    /// are flagged [`SiteStatus::NonUnique`]. Otherwise the entry is stored as
    /// [`SiteStatus::Unique`]. The same key inserted twice keeps the later
    /// location.
    ///
    /// Stored entries are flagged too, so the first copy of a repeated seed is
    /// dropped along with the later one rather than kept as the sole survivor.
    pub fn query_and_insert(&mut self, spacer: impl Into<String>, mut location: SpacerLocation) -> SiteStatus {
        let spacer = spacer.into();
        let seed = self.seed_of(&spacer).map(str::to_owned);

        location.status = SiteStatus::Unique;
        let (seeds, entries) = (&self.seeds, &mut self.entries);
        if let Some(keys) = seed.as_deref().and_then(|s| seeds.get(s)) {
            if !keys.is_empty() {
                for key in keys {
                    if let Some(prior) = entries.get_mut(key) {
                        prior.status = SiteStatus::NonUnique;
                    }
                }
                location.status = SiteStatus::NonUnique;
            }
        }
        let status = location.status;

        if let Some(seed) = seed.filter(|_| spacer.len() >= SPACER_LEN) {
            let keys = self.seeds.entry(seed).or_default();
            if !keys.contains(&spacer) {
                keys.push(spacer.clone());
            }
        }
        self.entries.insert(spacer, location);
        status
    }

    /// Folds a separately built partial index into this one, key by key,
    /// applying the same seed rule. Entries already flagged stay flagged.
    pub fn merge(&mut self, other: SpecificityIndex) {
        for (spacer, location) in other.entries {
            match location.status {
                SiteStatus::Placeholder => continue,
                SiteStatus::NonUnique => {
                    self.query_and_insert(spacer.clone(), location);
                    if let Some(stored) = self.entries.get_mut(&spacer) {
                        stored.status = SiteStatus::NonUnique;
                    }
                }
                SiteStatus::Unique => {
                    self.query_and_insert(spacer, location);
                }
            }
        }
    }

    /// Drops every non-unique and placeholder entry.
    ///
    /// Consumes the index: pruning happens once, after all scanning for it.
    pub fn prune(self) -> PrunedIndex {
        let before = self.entries.len();
        let entries: HashMap<_, _> = self
            .entries
            .into_iter()
            .filter(|(_, loc)| loc.is_unique())
            .collect();
        debug!(kept = entries.len(), removed = before - entries.len(), "pruned specificity index");
        PrunedIndex { entries }
    }
}

/// Read-only set of unique spacers left after pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrunedIndex {
    entries: HashMap<String, SpacerLocation>,
}

impl PrunedIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, spacer: &str) -> Option<&SpacerLocation> {
        self.entries.get(spacer)
    }

    pub fn contains(&self, spacer: &str) -> bool {
        self.entries.contains_key(spacer)
    }

    /// `(spacer, location)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpacerLocation)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every entry as a [`GuideRecord`], sorted by spacer.
    pub fn records(&self) -> Vec<GuideRecord> {
        let mut out: Vec<_> = self
            .iter()
            .map(|(spacer, loc)| GuideRecord::new(spacer, loc.clone()))
            .collect();
        out.sort_by(|a, b| a.spacer.cmp(&b.spacer));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Strand;

    fn loc(offset: usize) -> SpacerLocation {
        SpacerLocation::new(Strand::Forward, "TGG", offset, "chr1")
    }

    #[test]
    fn distinct_seeds_stay_unique() {
        let mut index = SpecificityIndex::new(&Parameters::default());
        assert_eq!(index.query_and_insert("AAAAAAAAAAAAAAAACCCC", loc(30)), SiteStatus::Unique);
        assert_eq!(index.query_and_insert("AAAAAAAAAAAAAAAACCCG", loc(60)), SiteStatus::Unique);
        assert_eq!(index.prune().len(), 2);
    }

    #[test]
    fn seed_collision_flags_both_entries() {
        let mut index = SpecificityIndex::new(&Parameters::default());
        assert_eq!(index.query_and_insert("GGGGGGGGGGGGGGGGACGT", loc(30)), SiteStatus::Unique);
        // PAM-distal end differs, last four bases match
        let status = index.query_and_insert("TTTTTTTTTTTTTTTTACGT", loc(90));
        assert_eq!(status, SiteStatus::NonUnique);
        assert_eq!(index.get("GGGGGGGGGGGGGGGGACGT").map(|l| l.status), Some(SiteStatus::NonUnique));
        assert!(index.prune().is_empty());
    }

    #[test]
    fn repeated_key_is_non_unique() {
        let mut index = SpecificityIndex::new(&Parameters::default());
        index.query_and_insert("ACGTACGTACGTACGTACGT", loc(30));
        index.query_and_insert("ACGTACGTACGTACGTACGT", loc(90));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("ACGTACGTACGTACGTACGT").map(|l| l.start_offset), Some(90));
        assert!(index.prune().is_empty());
    }

    #[test]
    fn short_keys_are_not_seed_sources() {
        let mut index = SpecificityIndex::new(&Parameters::default());
        // 19 nt key (a dropped symbol) does not count as a stored seed
        index.query_and_insert("AAAAAAAAAAAAAAAACGT", loc(30));
        assert!(!index.seed_collides("TTTTTTTTTTTTTTTTACGT"));
        assert_eq!(index.query_and_insert("TTTTTTTTTTTTTTTTACGT", loc(60)), SiteStatus::Unique);
    }

    #[test]
    fn placeholder_is_pruned() {
        let index = SpecificityIndex::with_placeholder(&Parameters::default());
        assert_eq!(index.len(), 1);
        assert!(index.prune().is_empty());
    }

    #[test]
    fn merge_applies_seed_rule_across_partitions() {
        let params = Parameters::default();
        let mut a = SpecificityIndex::new(&params);
        let mut b = SpecificityIndex::with_placeholder(&params);
        a.query_and_insert("GGGGGGGGGGGGGGGGACGT", loc(30));
        b.query_and_insert("TTTTTTTTTTTTTTTTACGT", loc(40));
        b.query_and_insert("CCCCCCCCCCCCCCCCTTTT", loc(50));
        a.merge(b);
        let pruned = a.prune();
        assert_eq!(pruned.len(), 1);
        assert!(pruned.contains("CCCCCCCCCCCCCCCCTTTT"));
    }

    #[test]
    fn records_are_sorted() {
        let mut index = SpecificityIndex::new(&Parameters::default());
        index.query_and_insert("TTTTTTTTTTTTTTTTTTTA", loc(1));
        index.query_and_insert("AAAAAAAAAAAAAAAAAAAC", loc(2));
        let spacers: Vec<_> = index.prune().records().into_iter().map(|r| r.spacer).collect();
        assert_eq!(spacers, ["AAAAAAAAAAAAAAAAAAAC", "TTTTTTTTTTTTTTTTTTTA"]);
    }
}
