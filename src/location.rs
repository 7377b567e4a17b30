use std::{fmt, ops::Range};

use crate::{
    constants::{PAM_LEN, SPACER_LEN, SYNTHESIS_SCAFFOLD},
    util::reverse_complement,
};

/// Strand a PAM was found on, relative to the source sequence as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => f.pad("+"),
            Strand::Reverse => f.pad("-"),
        }
    }
}

/// Uniqueness state of an index entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteStatus {
    /// No other spacer seen so far shares its seed region.
    Unique,
    /// Its seed region collided with another spacer; dropped at prune time.
    NonUnique,
    /// Throwaway entry left by index initialisation; dropped at prune time.
    Placeholder,
}

/// Where a candidate spacer was found.
///
/// `start_offset` is the scanner position that triggered the hit: the first
/// `G` of the `GG` on the forward strand, the first `C` of the `CC` on the
/// reverse strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacerLocation {
    pub strand:       Strand,
    pub pam:          String, // NGG read on the spacer's strand
    pub status:       SiteStatus,
    pub start_offset: usize,
    pub source_id:    String,
}

impl SpacerLocation {
    /// Fresh unique location as produced by the scanner.
    pub fn new(strand: Strand, pam: impl Into<String>, start_offset: usize, source_id: impl Into<String>) -> Self {
        Self {
            strand,
            pam: pam.into(),
            status: SiteStatus::Unique,
            start_offset,
            source_id: source_id.into(),
        }
    }

    /// Empty-PAM entry used to seed an index.
    pub fn placeholder() -> Self {
        Self {
            strand: Strand::Forward,
            pam: String::new(),
            status: SiteStatus::Placeholder,
            start_offset: 0,
            source_id: String::new(),
        }
    }

    pub fn is_unique(&self) -> bool {
        self.status == SiteStatus::Unique
    }

    /// Plus-strand, half-open coordinates of the 20 nt protospacer.
    ///
    /// Forward hits read `[i-21, i-1)`; reverse hits read the complement of
    /// `[i+3, i+23)`, which is the minus-strand spacer sitting 5' of the
    /// minus-strand `NGG`.
    pub fn spacer_span(&self) -> Range<usize> {
        let i = self.start_offset;
        match self.strand {
            Strand::Forward => i.saturating_sub(SPACER_LEN + 1)..i.saturating_sub(1),
            Strand::Reverse => i + PAM_LEN..i + PAM_LEN + SPACER_LEN,
        }
    }

    /// Plus-strand, half-open coordinates of the PAM.
    pub fn pam_span(&self) -> Range<usize> {
        let i = self.start_offset;
        match self.strand {
            Strand::Forward => i.saturating_sub(1)..i + PAM_LEN - 1,
            Strand::Reverse => i..i + PAM_LEN,
        }
    }
}

/// A spacer sequence together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRecord {
    pub spacer:   String,
    pub location: SpacerLocation,
}

impl GuideRecord {
    pub fn new(spacer: impl Into<String>, location: SpacerLocation) -> Self {
        Self {
            spacer: spacer.into(),
            location,
        }
    }

    /// Spacer followed by its PAM, the full 23 nt target site.
    pub fn target_site(&self) -> String {
        format!("{}{}", self.spacer, self.location.pam)
    }

    /// Ordering-ready oligo: the reverse complement of spacer + PAM followed
    /// by the fixed synthesis scaffold.
    pub fn ordering_oligo(&self) -> String {
        let mut oligo = reverse_complement(&self.target_site());
        oligo.push_str(SYNTHESIS_SCAFFOLD);
        oligo
    }
}
