//! The entry point: truncate both sequences, pick the full or banded table,
//! trace back, and package the result.

use crate::aligners::{
    banded::{Band, BandedTable},
    cigar::Cigar,
    nw::FullTable,
    trace, Alignment, TraceTable,
};
use crate::config::{DEFAULT_MAX_LENGTH, DISPLAY_LENGTH, MAX_INDELS, NO_ALIGNMENT};
use crate::cost_model::{Cost, LinearCost};
use crate::sequence::{prepare, seq_to_string, Seq};
use crate::stats::{AlignStats, Timing};
use clap::{builder::RangedU64ValueParser, Args};
use log::{debug, info};
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, time::Instant};

/// Parameters for `Aligner`.
#[derive(Args, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[clap(next_help_heading = "Alignment")]
#[serde(default)]
pub struct AlignParams {
    /// Only compute cells within `max-indels` of the main diagonal.
    #[clap(short, long)]
    pub banded: bool,

    /// Truncate both sequences to this length before aligning.
    #[clap(
        short = 'l',
        long,
        default_value_t = DEFAULT_MAX_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_length: usize,

    /// Half the band width: the number of indels the banded aligner tolerates.
    #[clap(long, default_value_t = MAX_INDELS, hide_short_help = true)]
    pub max_indels: usize,

    /// Clip the aligned strings to this many characters.
    #[clap(long, default_value_t = DISPLAY_LENGTH, hide_short_help = true)]
    pub display_length: usize,

    #[clap(flatten)]
    pub cost_model: LinearCost,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            banded: false,
            max_length: DEFAULT_MAX_LENGTH,
            max_indels: MAX_INDELS,
            display_length: DISPLAY_LENGTH,
            cost_model: LinearCost::default(),
        }
    }
}

/// The cost of an alignment. `Infinite` when the band does not reach the end
/// of the table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum AlignmentCost {
    Finite(Cost),
    Infinite,
}

impl AlignmentCost {
    pub fn is_finite(&self) -> bool {
        matches!(self, AlignmentCost::Finite(_))
    }

    pub fn finite(&self) -> Option<Cost> {
        match *self {
            AlignmentCost::Finite(c) => Some(c),
            AlignmentCost::Infinite => None,
        }
    }
}

impl fmt::Display for AlignmentCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentCost::Finite(c) => fmt::Display::fmt(c, f),
            AlignmentCost::Infinite => f.pad("inf"),
        }
    }
}

impl Serialize for AlignmentCost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            AlignmentCost::Finite(c) => serializer.serialize_i32(c),
            AlignmentCost::Infinite => serializer.serialize_str("inf"),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AlignResult {
    /// Length of `a` after truncation.
    pub len_a: usize,
    /// Length of `b` after truncation.
    pub len_b: usize,
    pub banded: bool,
    pub cost: AlignmentCost,
    /// `a` with gaps, clipped to the display length.
    pub aligned_a: String,
    /// `b` with gaps, clipped to the display length.
    pub aligned_b: String,
    /// The complete alignment. Empty when infeasible.
    pub cigar: Cigar,
}

impl AlignResult {
    fn infeasible(a: Seq, b: Seq, banded: bool) -> Self {
        Self {
            len_a: a.len(),
            len_b: b.len(),
            banded,
            cost: AlignmentCost::Infinite,
            aligned_a: NO_ALIGNMENT.to_string(),
            aligned_b: NO_ALIGNMENT.to_string(),
            cigar: Cigar::default(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}

impl fmt::Display for AlignResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "cost {:>6}  |a| {:>5}  |b| {:>5}  {}",
            self.cost,
            self.len_a,
            self.len_b,
            if self.banded { "banded" } else { "full" }
        )?;
        writeln!(f, "  {}", self.aligned_a)?;
        writeln!(f, "  {}", self.aligned_b)?;
        if !self.cigar.is_empty() {
            writeln!(f, "  cigar {}", self.cigar)?;
        }
        Ok(())
    }
}

/// Aligns pairs of sequences using fixed `AlignParams`.
///
/// Holds no per-call state: every call builds and drops its own table, so a
/// single `Aligner` can be shared between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aligner {
    pub params: AlignParams,
}

impl Aligner {
    pub fn new(params: AlignParams) -> Self {
        Self { params }
    }

    pub fn align(&self, a: Seq, b: Seq) -> AlignResult {
        self.align_with_stats(a, b).0
    }

    /// Aligns `a` and `b`, also returning counters and timings for this pair.
    pub fn align_with_stats(&self, a: Seq, b: Seq) -> (AlignResult, AlignStats) {
        let start = Instant::now();
        let params = &self.params;
        let a = prepare(a, params.max_length);
        let b = prepare(b, params.max_length);
        let mut stats = AlignStats::init(a, b);
        debug!(
            "Aligning |a| = {} and |b| = {} ({})",
            a.len(),
            b.len(),
            if params.banded { "banded" } else { "full" }
        );

        let (cost, alignment, fill) = if params.banded {
            // A band wider than both sequences covers the whole table.
            let band = Band::new(params.max_indels.min(a.len().max(b.len())));
            if !band.is_feasible(a.len(), b.len()) {
                info!(
                    "Length difference {} exceeds the band of {} indels; no alignment possible",
                    a.len().abs_diff(b.len()),
                    band.max_indels
                );
                stats.infeasible = 1;
                stats.timing.total = start.elapsed().as_secs_f64();
                return (AlignResult::infeasible(a, b, true), stats);
            }
            let table = BandedTable::build(a, b, &params.cost_model, band);
            let fill = start.elapsed().as_secs_f64();
            stats.cells = (a.len() + 1) * band.width();
            // The end cell is in the band once the lengths are feasible.
            let cost = table[table.end()].cost;
            (cost, trace(&table, a, b), fill)
        } else {
            let table = FullTable::build(a, b, &params.cost_model);
            let fill = start.elapsed().as_secs_f64();
            stats.cells = (a.len() + 1) * (b.len() + 1);
            (table.score(), trace(&table, a, b), fill)
        };

        let result = self.result(a, b, cost, alignment);
        stats.cost = cost as i64;
        stats.timing = Timing {
            total: start.elapsed().as_secs_f64(),
            fill,
            traceback: start.elapsed().as_secs_f64() - fill,
        };
        (result, stats)
    }

    fn result(&self, a: Seq, b: Seq, cost: Cost, alignment: Alignment) -> AlignResult {
        let clip = |s: &[u8]| seq_to_string(&s[..s.len().min(self.params.display_length)]);
        AlignResult {
            len_a: a.len(),
            len_b: b.len(),
            banded: self.params.banded,
            cost: AlignmentCost::Finite(cost),
            aligned_a: clip(&alignment.a),
            aligned_b: clip(&alignment.b),
            cigar: alignment.cigar,
        }
    }

    /// Checks that `result` is a valid alignment of (the truncated) `a` and `b`
    /// of the reported cost. Panics otherwise.
    ///
    /// Meant for tests and debugging.
    pub fn verify(&self, a: Seq, b: Seq, result: &AlignResult) {
        let a = prepare(a, self.params.max_length);
        let b = prepare(b, self.params.max_length);
        assert_eq!((result.len_a, result.len_b), (a.len(), b.len()));
        let Some(cost) = result.cost.finite() else {
            assert!(self.params.banded, "Only banded alignments can be infeasible");
            assert!(!Band::new(self.params.max_indels).is_feasible(a.len(), b.len()));
            assert_eq!(result.aligned_a, NO_ALIGNMENT);
            assert_eq!(result.aligned_b, NO_ALIGNMENT);
            assert!(result.cigar.is_empty());
            return;
        };
        assert_eq!(result.aligned_a.len(), result.aligned_b.len());
        assert_eq!(
            result.aligned_a.len(),
            result.cigar.len().min(self.params.display_length)
        );
        for (aligned, seq) in [(&result.aligned_a, a), (&result.aligned_b, b)] {
            let degapped: Vec<u8> = aligned.bytes().filter(|&c| c != b'-').collect();
            assert!(
                seq.starts_with(&degapped),
                "{aligned} is not a gapped prefix of {}",
                seq_to_string(seq)
            );
        }
        assert_eq!(result.cigar.verify(&self.params.cost_model, a, b), cost);
    }
}

/// Aligns `a` and `b` with the default cost model, band and display length.
pub fn align(a: Seq, b: Seq, banded: bool, max_length: usize) -> AlignResult {
    Aligner::new(AlignParams {
        banded,
        max_length,
        ..AlignParams::default()
    })
    .align(a, b)
}
