use std::ops::AddAssign;

use tracing::{info, trace};

use crate::{
    constants::{PAM_LEN, SPACER_LEN},
    filter::Rejection,
    index::SpecificityIndex,
    location::{SiteStatus, SpacerLocation, Strand},
    params::Parameters,
    util::{complement_base, opposite_strand},
};

/// A PAM hit with its candidate spacer, before any filtering.
///
/// `spacer` and `pam` are read 5'→3' on `strand`; `trailing` is the base
/// 3' of the PAM on that strand, `None` when it falls outside the source.
/// `foreign` is set when the spacer + PAM window of the source holds a
/// non-ASCII byte; such a site is rejected as [`Rejection::ForeignSymbol`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PamSite {
    pub strand:   Strand,
    pub spacer:   String,
    pub pam:      String,
    pub trailing: Option<u8>,
    pub offset:   usize,
    pub foreign:  bool,
}

/// Iterator over every `NGG` site on both strands of one sequence.
///
/// Walks the sequence once, left to right, looking at two bases at a time:
/// `GG` marks a forward-strand PAM (`NGG` at `[i-1, i+2)`, spacer at
/// `[i-21, i-1)`), `CC` marks a reverse-strand PAM (`CCN` at `[i, i+3)`,
/// spacer complement at `[i+3, i+23)`). Hits whose spacer would run off either
/// end are skipped. Overlapping hits are all reported.
#[derive(Debug, Clone)]
pub struct PamScanner {
    seq: Vec<u8>, // Upper-cased copy of the source
    idx: usize,   // Next window start
}

impl PamScanner {
    /// Prepares a scan over the raw bytes of `seq`, matched
    /// case-insensitively. Any byte is accepted; an empty or short sequence
    /// yields nothing.
    pub fn new(seq: &[u8]) -> Self {
        Self {
            seq: seq.to_ascii_uppercase(),
            idx: 0,
        }
    }

    fn forward_site(&self, i: usize) -> PamSite {
        let window = &self.seq[i - SPACER_LEN - 1..i + PAM_LEN - 1];
        let (spacer, pam) = window.split_at(SPACER_LEN);
        PamSite {
            strand: Strand::Forward,
            spacer: ascii_string(spacer),
            pam: ascii_string(pam),
            trailing: self.seq.get(i + PAM_LEN - 1).copied(),
            offset: i,
            foreign: !window.is_ascii(),
        }
    }

    fn reverse_site(&self, i: usize) -> PamSite {
        let window = &self.seq[i..i + PAM_LEN + SPACER_LEN];
        let (pam, spacer) = window.split_at(PAM_LEN);
        PamSite {
            strand: Strand::Reverse,
            spacer: ascii_string(&opposite_strand(spacer)),
            pam: ascii_string(&opposite_strand(pam)),
            trailing: i
                .checked_sub(1)
                .and_then(|p| self.seq.get(p))
                .and_then(|&b| complement_base(b)),
            offset: i,
            foreign: !window.is_ascii(),
        }
    }
}

impl Iterator for PamScanner {
    type Item = PamSite;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx + 1 < self.seq.len() {
            let i = self.idx;
            self.idx += 1;

            match &self.seq[i..i + 2] {
                b"GG" if i > SPACER_LEN => return Some(self.forward_site(i)),
                b"CC" if i + SPACER_LEN + PAM_LEN - 1 < self.seq.len() => {
                    return Some(self.reverse_site(i));
                }
                _ => {}
            }
        }
        None
    }
}

fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Counters gathered while scanning one or more sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub pam_sites:  usize,
    pub accepted:   usize,
    pub unique:     usize,
    pub non_unique: usize,
    rejected:       [usize; Rejection::ALL.len()],
}

impl ScanStats {
    /// Candidates turned down for `reason`.
    pub fn rejected(&self, reason: Rejection) -> usize {
        self.rejected[reason as usize]
    }

    pub fn total_rejected(&self) -> usize {
        self.rejected.iter().sum()
    }

    fn reject(&mut self, reason: Rejection) {
        self.rejected[reason as usize] += 1;
    }
}

impl AddAssign<&ScanStats> for ScanStats {
    fn add_assign(&mut self, other: &ScanStats) {
        self.pam_sites += other.pam_sites;
        self.accepted += other.accepted;
        self.unique += other.unique;
        self.non_unique += other.non_unique;
        for (mine, theirs) in self.rejected.iter_mut().zip(other.rejected) {
            *mine += theirs;
        }
    }
}

/// Scans one source sequence and records every accepted spacer in `index`.
///
/// Each PAM site goes through the non-ASCII check, the spacer rules, then
/// the trailing-G rule, then the index's seed-uniqueness test. Nothing in
/// the source can fail the scan as a whole.
pub fn scan_into(index: &mut SpecificityIndex, source_id: &str, seq: impl AsRef<[u8]>, params: &Parameters) -> ScanStats {
    let seq = seq.as_ref();
    let mut stats = ScanStats::default();

    for site in PamScanner::new(seq) {
        stats.pam_sites += 1;

        let verdict = if site.foreign {
            Err(Rejection::ForeignSymbol)
        } else {
            params.check_spacer(site.spacer.as_bytes()).and_then(|()| {
                if params.rejects_trailing(site.trailing) {
                    Err(Rejection::TrailingG)
                } else {
                    Ok(())
                }
            })
        };
        if let Err(reason) = verdict {
            trace!(source = source_id, offset = site.offset, strand = %site.strand, %reason, "candidate rejected");
            stats.reject(reason);
            continue;
        }

        stats.accepted += 1;
        let location = SpacerLocation::new(site.strand, site.pam, site.offset, source_id);
        match index.query_and_insert(site.spacer, location) {
            SiteStatus::Unique => stats.unique += 1,
            _ => stats.non_unique += 1,
        }
    }

    info!(
        source = source_id,
        len = seq.len(),
        pam_sites = stats.pam_sites,
        accepted = stats.accepted,
        non_unique = stats.non_unique,
        "scanned source"
    );
    stats
}

/// Scans every `(source_id, sequence)` pair into the same index, in the
/// order given.
///
/// The pruned result does not depend on the order of `sources`.
pub fn scan_sources<I, K, V>(index: &mut SpecificityIndex, sources: I, params: &Parameters) -> ScanStats
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[u8]>,
{
    let mut total = ScanStats::default();
    for (id, seq) in sources {
        total += &scan_into(index, id.as_ref(), seq, params);
    }
    total
}
