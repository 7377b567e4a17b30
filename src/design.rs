//! End-to-end guide design over a genome and an optional target.
//!
//! Every chromosome is scanned into the genome index; target sequences, if
//! any, into a separate target index. [`GuideDesigner::finish`] prunes both
//! and either intersects them or reports the whole pruned genome.

use tracing::info;

use crate::{
    index::{PrunedIndex, SpecificityIndex},
    location::GuideRecord,
    matcher::intersect_by_key,
    params::Parameters,
    scanner::{ScanStats, scan_sources},
};

/// Outcome of a design run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignReport {
    /// A target was supplied: guides unique in both genome and target.
    TargetMatches(Vec<GuideRecord>),
    /// No target: every genome-unique guide.
    AllSites(Vec<GuideRecord>),
}

impl DesignReport {
    pub fn records(&self) -> &[GuideRecord] {
        match self {
            DesignReport::TargetMatches(r) | DesignReport::AllSites(r) => r,
        }
    }

    pub fn into_records(self) -> Vec<GuideRecord> {
        match self {
            DesignReport::TargetMatches(r) | DesignReport::AllSites(r) => r,
        }
    }
}

/// Owns the parameters and both indexes for one design run.
#[derive(Debug, Clone)]
pub struct GuideDesigner {
    params:       Parameters,
    genome:       SpecificityIndex,
    target:       SpecificityIndex,
    has_target:   bool,
    genome_stats: ScanStats,
    target_stats: ScanStats,
}

impl GuideDesigner {
    pub fn new(params: Parameters) -> Self {
        Self {
            genome: SpecificityIndex::with_placeholder(&params),
            target: SpecificityIndex::with_placeholder(&params),
            params,
            has_target: false,
            genome_stats: ScanStats::default(),
            target_stats: ScanStats::default(),
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Scans chromosome sequences, keyed by name, into the genome index.
    pub fn scan_genome<I, K, V>(&mut self, chromosomes: I) -> &ScanStats
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<[u8]>,
    {
        let stats = scan_sources(&mut self.genome, chromosomes, &self.params);
        self.genome_stats += &stats;
        &self.genome_stats
    }

    /// Scans target sequences into the target index.
    ///
    /// An empty mapping leaves the run in whole-genome mode.
    pub fn scan_target<I, K, V>(&mut self, targets: I) -> &ScanStats
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<[u8]>,
    {
        let mut seen = false;
        let targets = targets.into_iter().inspect(|_| seen = true);
        let stats = scan_sources(&mut self.target, targets, &self.params);
        self.has_target |= seen;
        self.target_stats += &stats;
        &self.target_stats
    }

    pub fn genome_stats(&self) -> &ScanStats {
        &self.genome_stats
    }

    pub fn target_stats(&self) -> &ScanStats {
        &self.target_stats
    }

    /// Prunes both indexes and produces the report.
    pub fn finish(self) -> DesignReport {
        let (genome, target) = self.prune();
        match target {
            Some(target) => {
                let matches = intersect_by_key(&genome, &target);
                info!(guides = matches.len(), "target guides found");
                DesignReport::TargetMatches(matches)
            }
            None => {
                let all = genome.records();
                info!(guides = all.len(), "genome-unique guides found");
                DesignReport::AllSites(all)
            }
        }
    }

    /// Pruned genome index and, when a target was scanned, pruned target index.
    pub fn prune(self) -> (PrunedIndex, Option<PrunedIndex>) {
        let genome = self.genome.prune();
        let target = self.has_target.then(|| self.target.prune());
        (genome, target)
    }
}
