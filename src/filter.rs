//! Biochemical design rules applied to each candidate spacer.
//!
//! The four spacer rules run in a fixed order and the first failure wins:
//! ambiguous bases, GC-content window, poly-A run, self-complementary fold.
//! The trailing-G rule looks at the base after the PAM and is checked
//! separately by the scanner, as is the non-ASCII check that precedes them
//! all.

use std::fmt;

use crate::{constants::MIN_HAIRPIN_LOOP, params::Parameters, util::is_watson_crick};

/// Reason a candidate was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Spacer or PAM window holds a non-ASCII byte.
    ForeignSymbol,
    /// Spacer contains an `N`.
    Ambiguous,
    /// GC fraction outside the inclusive window.
    GcContent,
    /// Run of `A`s that would become a Pol III terminating `U` run.
    PolyARun,
    /// Self-complementary fold at or above the threshold.
    Hairpin,
    /// Extra `G` directly 3' of the PAM while not allowed.
    TrailingG,
}

impl Rejection {
    pub const ALL: [Rejection; 6] = [
        Rejection::ForeignSymbol,
        Rejection::Ambiguous,
        Rejection::GcContent,
        Rejection::PolyARun,
        Rejection::Hairpin,
        Rejection::TrailingG,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::ForeignSymbol => "non-ASCII byte",
            Rejection::Ambiguous => "ambiguous base",
            Rejection::GcContent => "gc content",
            Rejection::PolyARun => "poly-A run",
            Rejection::Hairpin => "hairpin",
            Rejection::TrailingG => "trailing G",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Parameters {
    /// Runs the four spacer rules in order, stopping at the first failure.
    ///
    /// # Returns
    ///
    /// * `Ok(())` – the candidate passes every rule.
    /// * `Err(Rejection)` – the first rule it failed.
    pub fn check_spacer(&self, spacer: &[u8]) -> Result<(), Rejection> {
        if is_ambiguous(spacer) {
            return Err(Rejection::Ambiguous);
        }
        if !self.gc_in_window(spacer) {
            return Err(Rejection::GcContent);
        }
        if self.has_poly_a_run(spacer) {
            return Err(Rejection::PolyARun);
        }
        if self.folds(spacer) {
            return Err(Rejection::Hairpin);
        }
        Ok(())
    }

    /// `true` when [`check_spacer`](Self::check_spacer) accepts the candidate.
    pub fn accepts(&self, spacer: &[u8]) -> bool {
        self.check_spacer(spacer).is_ok()
    }

    /// GC fraction within `[gc_min/100, gc_max/100]`, both ends inclusive.
    ///
    /// Compared as integers (`count * 100` against `bound * len`) so the
    /// boundaries are exact.
    pub fn gc_in_window(&self, spacer: &[u8]) -> bool {
        let gc = gc_count(spacer) as u64 * 100;
        let len = spacer.len() as u64;
        gc >= self.gc_min() as u64 * len && gc <= self.gc_max() as u64 * len
    }

    /// `true` when a run of `A`s reaches `max_run_length`. Always `false` when
    /// the limit is 0.
    pub fn has_poly_a_run(&self, spacer: &[u8]) -> bool {
        match self.max_run_length() {
            0 => false,
            limit => longest_a_run(spacer) >= limit,
        }
    }

    /// `true` when the longest self-complementary fold reaches the threshold.
    pub fn folds(&self, spacer: &[u8]) -> bool {
        hairpin(spacer) >= self.hairpin_threshold()
    }

    /// Trailing-G rule for the base 3' of the PAM, already read on the
    /// spacer's strand. `None` (past the end of the source) never rejects.
    pub fn rejects_trailing(&self, base: Option<u8>) -> bool {
        !self.allow_trailing_g() && matches!(base, Some(b'G' | b'g'))
    }
}

/// `true` if the candidate holds an `N`, in either case.
pub fn is_ambiguous(spacer: &[u8]) -> bool {
    spacer.iter().any(|b| b.eq_ignore_ascii_case(&b'N'))
}

/// Number of `G`/`C` bases.
pub fn gc_count(spacer: &[u8]) -> usize {
    spacer
        .iter()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count()
}

/// Length of the longest stretch of consecutive `A`s.
pub fn longest_a_run(spacer: &[u8]) -> usize {
    let (mut run, mut longest) = (0usize, 0usize);
    for b in spacer {
        if b.eq_ignore_ascii_case(&b'A') {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// Longest self-complementary fold of `seq`.
///
/// Every seed pair `(i, j)` with at least [`MIN_HAIRPIN_LOOP`] bases between
/// them is extended outward while the bases pair. The first and last base of
/// the sequence never take part in a fold. Unweighted: this counts stacked
/// pairs, it does not compute free energy.
pub fn hairpin(seq: &[u8]) -> usize {
    let last = seq.len().saturating_sub(1);
    let mut longest = 0;
    for i in 1..last {
        for j in (i + MIN_HAIRPIN_LOOP + 1)..last {
            longest = longest.max(fold_length(seq, i, j));
        }
    }
    longest
}

/// Number of consecutive pairs stacking outward from `(i, j)`.
fn fold_length(seq: &[u8], mut i: usize, mut j: usize) -> usize {
    let last = seq.len() - 1;
    let mut len = 0;
    while i > 0 && j < last && is_watson_crick(seq[i], seq[j]) {
        len += 1;
        i -= 1;
        j += 1;
    }
    len
}
