//! Global pairwise alignment of two short symbol sequences under a linear cost
//! model, either over the full DP table or restricted to a fixed-width band
//! around the main diagonal.
//!
//! ```
//! use banded_aligner::prelude::*;
//!
//! let r = align(b"AATAT", b"AAATT", false, 1000);
//! assert_eq!(r.cost, AlignmentCost::Finite(-7));
//! assert_eq!(r.aligned_a, "AATAT");
//! ```

pub mod align;
pub mod aligners;
pub mod cli;
pub mod config;
pub mod cost_model;
pub mod error;
pub mod generate;
pub mod sequence;
pub mod stats;

pub mod prelude {
    pub use crate::align::{align, AlignParams, AlignResult, Aligner, AlignmentCost};
    pub use crate::aligners::banded::{Band, BandEdge, BandedTable};
    pub use crate::aligners::cigar::{Cigar, CigarOp};
    pub use crate::aligners::nw::FullTable;
    pub use crate::aligners::{trace, Alignment, Direction, Pos, TraceTable};
    pub use crate::cost_model::{Cost, LinearCost};
    pub use crate::error::{Error, Result};
    pub use crate::sequence::{prepare, seq_to_string, validate, Seq, Sequence};
}
