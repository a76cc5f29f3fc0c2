//! This module contains constants used throughout the code. Most of them are
//! defaults for the options in `AlignParams`.

/// Maximum number of insertions/deletions the banded aligner tolerates.
pub const MAX_INDELS: usize = 3;

/// Number of cells per row of a banded table.
pub const BANDWIDTH: usize = 2 * MAX_INDELS + 1;

/// Sequences are truncated to this many symbols before aligning.
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Aligned strings are clipped to this many characters for display.
pub const DISPLAY_LENGTH: usize = 100;

/// Reported in place of both aligned strings when the band cannot reach the end.
pub const NO_ALIGNMENT: &str = "No Alignment Possible";

/// The gap marker in aligned strings.
pub const GAP: u8 = b'-';

/// Symbols accepted by `sequence::validate` when no alphabet is given.
pub const DNA: &[u8] = b"ACGT";
