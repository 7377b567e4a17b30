#![allow(clippy::unreadable_literal)]

// Global constants used throughout the product code.

// `SPACER_LEN` – Length of the guide-binding protospacer immediately 5' of the PAM.
pub const SPACER_LEN: usize = 20;

// `PAM_LEN` – Length of the SpCas9 NGG motif.
pub const PAM_LEN: usize = 3;

// `MIN_HAIRPIN_LOOP` – Smallest loop a self-complementary fold may close around.
pub const MIN_HAIRPIN_LOOP: usize = 4;

// `ASCII_SIZE` – Number of possible ASCII values (0..255).
pub const ASCII_SIZE: usize = 256;

/// Marker stored in [`COMPL_BASES`] for bytes that have no complement.
pub const NO_COMPLEMENT: u8 = 0;

/// Complement base lookup table. Maps ASCII nucleotide characters to their
/// complementary DNA base: `A ↔ T`, `C ↔ G`, `N ↔ N`, case-insensitive, always
/// answering in uppercase. Every other byte maps to [`NO_COMPLEMENT`] and is
/// dropped by the strand transforms.
pub const COMPL_BASES: [u8; ASCII_SIZE] = {
    let mut tbl = [NO_COMPLEMENT; ASCII_SIZE];

    // DNA (uppercase)
    tbl[b'A' as usize] = b'T'; // A → T
    tbl[b'C' as usize] = b'G'; // C → G
    tbl[b'G' as usize] = b'C'; // G → C
    tbl[b'T' as usize] = b'A'; // T → A
    tbl[b'N' as usize] = b'N'; // ambiguity propagates

    // DNA (lowercase)
    tbl[b'a' as usize] = b'T';
    tbl[b'c' as usize] = b'G';
    tbl[b'g' as usize] = b'C';
    tbl[b't' as usize] = b'A';
    tbl[b'n' as usize] = b'N';

    tbl
};

/// Fixed template appended to the antisense guide when producing an
/// ordering-ready oligo (two copies of the tracrRNA template followed by the
/// T7 promoter, written antisense).
pub const SYNTHESIS_SCAFFOLD: &str = concat!(
    "ACTTTTTCAAGTTGATAACGGACTAGCCTTATTTAAACTTGCTATGCTGTTTCCAGCATAGCTCTTAAACATTTGTGTCCAAGAATGTTTCCCTATAGTGAGTCGTATTA",
    "ACTTTTTCAAGTTGATAACGGACTAGCCTTATTTAAACTTGCTATGCTGTTTCCAGCATAGCTCTTAAACATTTGTGTCCAAGAATGTTTCCCTATAGTGAGTCGTATTA",
);
