use std::fmt;

use crate::{Result, constants::SPACER_LEN};

/// Design rules shared read-only by the scanner, the filter and the index.
///
/// Built once, either through [`Parameters::new`] or from the permissive
/// [`Default`] profile adjusted with the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    gc_min:             u32,  // Inclusive lower GC bound, percent
    gc_max:             u32,  // Inclusive upper GC bound, percent
    hairpin_threshold:  usize, // Fold length that disqualifies a candidate
    upstream_tolerance: usize, // PAM-proximal bases compared for uniqueness, minus one
    max_run_length:     usize, // Longest allowed poly-A run; 0 disables the check
    allow_trailing_g:   bool, // Whether a G right after the PAM is tolerated
}

impl Default for Parameters {
    /// Permissive profile: every GC content accepted, hairpin check effectively
    /// off, a 4-base seed region, no poly-A limit and trailing G allowed.
    fn default() -> Self {
        Self {
            gc_min: 0,
            gc_max: 100,
            hairpin_threshold: SPACER_LEN,
            upstream_tolerance: 3,
            max_run_length: 0,
            allow_trailing_g: true,
        }
    }
}

impl Parameters {
    /// Constructs a validated parameter set.
    ///
    /// # Arguments
    ///
    /// * `gc_min`, `gc_max` – Inclusive GC-content window in percent. Not
    ///   checked: `gc_min > gc_max` is accepted and rejects everything.
    /// * `hairpin_threshold` – Minimum fold length that rejects a candidate.
    /// * `upstream_tolerance` – Seed region is the last `upstream_tolerance + 1`
    ///   spacer bases; must be below the spacer length.
    /// * `max_run_length` – Poly-A run length that rejects a candidate (0 = off).
    /// * `allow_trailing_g` – Whether an extra G 3' of the PAM is permitted.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` on success.
    /// * `Err(GuideError::SeedRegionTooLong)` if the seed would exceed the spacer.
    pub fn new(
        gc_min: u32,
        gc_max: u32,
        hairpin_threshold: usize,
        upstream_tolerance: usize,
        max_run_length: usize,
        allow_trailing_g: bool,
    ) -> Result<Self> {
        validate_params!(upstream_tolerance);

        Ok(Self {
            gc_min,
            gc_max,
            hairpin_threshold,
            upstream_tolerance,
            max_run_length,
            allow_trailing_g,
        })
    }

    /// Replaces the GC-content window.
    pub fn with_gc_window(mut self, gc_min: u32, gc_max: u32) -> Self {
        self.gc_min = gc_min;
        self.gc_max = gc_max;
        self
    }

    pub fn with_hairpin_threshold(mut self, threshold: usize) -> Self {
        self.hairpin_threshold = threshold;
        self
    }

    /// Replaces the seed tolerance, re-validating the seed length.
    pub fn with_upstream_tolerance(mut self, tolerance: usize) -> Result<Self> {
        validate_params!(tolerance);
        self.upstream_tolerance = tolerance;
        Ok(self)
    }

    pub fn with_max_run_length(mut self, run: usize) -> Self {
        self.max_run_length = run;
        self
    }

    pub fn with_trailing_g(mut self, allow: bool) -> Self {
        self.allow_trailing_g = allow;
        self
    }

    pub fn gc_min(&self) -> u32 {
        self.gc_min
    }

    pub fn gc_max(&self) -> u32 {
        self.gc_max
    }

    pub fn hairpin_threshold(&self) -> usize {
        self.hairpin_threshold
    }

    pub fn upstream_tolerance(&self) -> usize {
        self.upstream_tolerance
    }

    pub fn max_run_length(&self) -> usize {
        self.max_run_length
    }

    pub fn allow_trailing_g(&self) -> bool {
        self.allow_trailing_g
    }

    /// Number of PAM-proximal spacer bases compared for uniqueness.
    pub fn seed_len(&self) -> usize {
        self.upstream_tolerance + 1
    }
}

impl fmt::Display for Parameters {
    /// Human-readable settings block, one rule per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parameters")?;
        writeln!(f, "Minimum GC content = {}", self.gc_min)?;
        writeln!(f, "Maximum GC content = {}", self.gc_max)?;
        writeln!(f, "Number of bases for secondary structure = {}", self.hairpin_threshold)?;
        writeln!(f, "Position at which mismatch is allowed = {}", self.upstream_tolerance)?;
        writeln!(f, "Maximum number of continuous U's allowed = {}", self.max_run_length)?;
        write!(f, "Additional G's after PAM site allowed? = {}", self.allow_trailing_g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuideError;

    #[test]
    fn default_is_permissive() {
        let p = Parameters::default();
        assert_eq!((p.gc_min(), p.gc_max()), (0, 100));
        assert_eq!(p.seed_len(), 4);
        assert_eq!(p.max_run_length(), 0);
        assert!(p.allow_trailing_g());
    }

    #[test]
    fn seed_must_fit_in_spacer() {
        assert!(Parameters::new(40, 60, 5, 19, 4, false).is_ok());
        assert_eq!(
            Parameters::new(40, 60, 5, 20, 4, false),
            Err(GuideError::SeedRegionTooLong { tolerance: 20 })
        );
        assert!(Parameters::default().with_upstream_tolerance(25).is_err());
    }

    #[test]
    fn inverted_gc_window_is_not_rejected() {
        assert!(Parameters::new(80, 20, 5, 3, 0, true).is_ok());
    }

    #[test]
    fn summary_lists_every_rule() {
        let text = Parameters::default().to_string();
        assert!(text.starts_with("Parameters\n"));
        assert!(text.contains("Position at which mismatch is allowed = 3"));
        assert!(text.ends_with("Additional G's after PAM site allowed? = true"));
    }
}
