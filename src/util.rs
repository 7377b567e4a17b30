use crate::constants::{COMPL_BASES, NO_COMPLEMENT};

/// Returns the complementary DNA base for the given ASCII byte.
///
/// Looks up the byte in the `COMPL_BASES` table, which maps:
/// `A ↔ T`, `C ↔ G`, `N ↔ N` (uppercase and lowercase). The answer is always
/// uppercase.
///
/// # Arguments
///
/// * `b` – An ASCII byte representing a nucleotide.
///
/// # Returns
///
/// * `Some(base)` for A/C/G/T/N, `None` for any other byte. Callers building a
///   strand drop the `None`s, so unrecognised symbols silently vanish from the
///   output rather than raising an error.
#[inline(always)]
pub const fn complement_base(b: u8) -> Option<u8> {
    match COMPL_BASES[b as usize] {
        NO_COMPLEMENT => None,
        c => Some(c),
    }
}

/// Reads a plus-strand window as the minus strand, 5'→3'.
///
/// Walks `window` from its last byte to its first and appends the complement
/// of each base. Symbols outside A/C/G/T/N are dropped, so the result may be
/// shorter than the input.
///
/// # Examples
///
/// ```
/// assert_eq!(guidescan::opposite_strand(b"AACGN"), b"NCGTT".to_vec());
/// ```
pub fn opposite_strand(window: &[u8]) -> Vec<u8> {
    window.iter().rev().filter_map(|&b| complement_base(b)).collect()
}

/// Reverse complement of a nucleotide string.
///
/// Same transform as [`opposite_strand`], for callers holding text rather than
/// a byte window. Applying it twice to an A/C/G/T/N sequence yields the
/// upper-cased input.
///
/// # Examples
///
/// ```
/// assert_eq!(guidescan::reverse_complement("ACCGGN"), "NCCGGT");
/// ```
pub fn reverse_complement(seq: &str) -> String {
    seq.bytes()
        .rev()
        .filter_map(complement_base)
        .map(char::from)
        .collect()
}

/// `true` when `a` and `b` form a Watson–Crick pair (A·T or C·G, either order,
/// case-insensitive). `N` pairs with nothing.
#[inline(always)]
pub fn is_watson_crick(a: u8, b: u8) -> bool {
    matches!(
        (a.to_ascii_uppercase(), b.to_ascii_uppercase()),
        (b'A', b'T') | (b'T', b'A') | (b'C', b'G') | (b'G', b'C')
    )
}

/// Validates design parameters and returns early on error.
///
/// Only structural limits are enforced here: the seed region
/// (`upstream_tolerance + 1` bases) must fit inside a spacer. GC bounds are
/// passed through untouched; inverted or out-of-range bounds simply reject
/// every candidate.
///
/// Returns `GuideError::SeedRegionTooLong` on failure.
///
/// # Example
///
/// ```ignore
/// validate_params!(upstream_tolerance);
/// ```
macro_rules! validate_params {
    ($upstream:expr) => {{
        // Seed region must fit inside the spacer
        if $upstream >= $crate::constants::SPACER_LEN {
            return Err($crate::GuideError::SeedRegionTooLong {
                tolerance: $upstream,
            });
        }
    }};
}
