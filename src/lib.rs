mod constants;
#[macro_use]
mod util;
mod params;
mod filter;
mod location;
mod index;
mod scanner;
mod matcher;
mod design;

pub use constants::*;
pub use design::{DesignReport, GuideDesigner};
pub use filter::{Rejection, gc_count, hairpin, is_ambiguous, longest_a_run};
pub use index::{PrunedIndex, SpecificityIndex};
pub use location::{GuideRecord, SiteStatus, SpacerLocation, Strand};
pub use matcher::intersect_by_key;
pub use params::Parameters;
pub use scanner::{PamScanner, PamSite, ScanStats, scan_into, scan_sources};
pub use util::*;

/// Common `Result` type for all library operations, using `GuideError` for errors.
pub type Result<T, E = GuideError> = core::result::Result<T, E>;

/// Error variants for guide design.
///
/// Only parameter validation fails. Candidate rejections (malformed bytes
/// included) and uniqueness collisions are reported through [`Rejection`]
/// and [`SiteStatus`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// Thrown when the seed region (`upstream_tolerance + 1` bases) would not
    /// fit inside a 20 nt spacer.
    #[error("seed region of {} bases exceeds the spacer length (upstream tolerance must be < 20)", .tolerance + 1)]
    SeedRegionTooLong { tolerance: usize },
}
