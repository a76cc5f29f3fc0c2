//! This module contains the two DP aligners and the traceback they share.
//!
//! Both aligners fill a table of `(cost, direction)` cells for prefixes of
//! `a` (rows, `i`) and `b` (columns, `j`). The traceback only needs the
//! direction of each cell on the optimal path, which is what `TraceTable`
//! exposes.
//!
//! Note that insertions are when `b` has more characters than `a`, and
//! deletions are when `b` has less characters than `a`.

use self::cigar::{Cigar, CigarOp};
use crate::config::GAP;
use crate::cost_model::Cost;
use crate::sequence::{Seq, Sequence};
use serde::Serialize;
use std::fmt;

pub mod banded;
pub mod cigar;
pub mod nw;

/// A cell of a DP table in true coordinates: row `i` in `0..=a.len()`,
/// column `j` in `0..=b.len()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct Pos(pub usize, pub usize);

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The step that led to the minimal cost of a cell.
///
/// Named by the direction the traceback moves in, not by the edit operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// From `(i-1, j-1)`: a match or substitution.
    Diagonal,
    /// From `(i-1, j)`: `a[i-1]` against a gap.
    Top,
    /// From `(i, j-1)`: a gap against `b[j-1]`.
    Left,
}

/// Returns the first candidate with minimal cost.
///
/// Candidates are considered in the order diagonal, top, left: a later
/// candidate only wins when it is strictly cheaper.
fn first_min(
    diagonal: (Cost, Direction),
    others: impl IntoIterator<Item = (Cost, Direction)>,
) -> (Cost, Direction) {
    let mut best = diagonal;
    for candidate in others {
        if candidate.0 < best.0 {
            best = candidate;
        }
    }
    best
}

/// A filled DP table that can be traced back.
pub trait TraceTable {
    /// The cell holding the final score.
    fn end(&self) -> Pos;

    /// The direction stored at `pos`.
    ///
    /// Only called for cells on the optimal path, which are always present.
    fn direction(&self, pos: Pos) -> Direction;
}

/// The two gapped sequences and the corresponding cigar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    pub a: Sequence,
    pub b: Sequence,
    pub cigar: Cigar,
}

/// Walks the table back from `table.end()` to `(0, 0)`.
pub fn trace(table: &impl TraceTable, a: Seq, b: Seq) -> Alignment {
    let Pos(mut i, mut j) = table.end();
    let mut alignment = Alignment {
        a: Vec::with_capacity(i + j),
        b: Vec::with_capacity(i + j),
        cigar: Cigar::default(),
    };
    while i > 0 || j > 0 {
        match table.direction(Pos(i, j)) {
            Direction::Diagonal => {
                let (ca, cb) = (a[i - 1], b[j - 1]);
                alignment.a.push(ca);
                alignment.b.push(cb);
                alignment.cigar.push(if ca == cb {
                    CigarOp::Match
                } else {
                    CigarOp::Mismatch
                });
                i -= 1;
                j -= 1;
            }
            Direction::Top => {
                alignment.a.push(a[i - 1]);
                alignment.b.push(GAP);
                alignment.cigar.push(CigarOp::Deletion);
                i -= 1;
            }
            Direction::Left => {
                alignment.a.push(GAP);
                alignment.b.push(b[j - 1]);
                alignment.cigar.push(CigarOp::Insertion);
                j -= 1;
            }
        }
    }
    // Built from the end backwards.
    alignment.a.reverse();
    alignment.b.reverse();
    alignment.cigar.reverse();
    alignment
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A table storing only directions, for testing the traceback in isolation.
    struct Directions(Vec<Vec<Direction>>);

    impl TraceTable for Directions {
        fn end(&self) -> Pos {
            Pos(self.0.len() - 1, self.0[0].len() - 1)
        }
        fn direction(&self, Pos(i, j): Pos) -> Direction {
            self.0[i][j]
        }
    }

    #[test]
    fn first_min_prefers_earlier_candidates() {
        use Direction::*;
        assert_eq!(first_min((2, Diagonal), [(2, Top), (2, Left)]), (2, Diagonal));
        assert_eq!(first_min((3, Diagonal), [(1, Top), (1, Left)]), (1, Top));
        assert_eq!(first_min((3, Diagonal), [(3, Top), (-1, Left)]), (-1, Left));
        assert_eq!(first_min((3, Diagonal), []), (3, Diagonal));
    }

    #[test]
    fn trace_reverses_output() {
        use Direction::*;
        // a = "AC", b = "ACG": two diagonal steps, then one trailing insertion.
        let table = Directions(vec![
            vec![Left, Left, Left, Left],
            vec![Top, Diagonal, Left, Left],
            vec![Top, Top, Diagonal, Left],
        ]);
        let alignment = trace(&table, b"AC", b"ACG");
        assert_eq!(alignment.a, b"AC-");
        assert_eq!(alignment.b, b"ACG");
        assert_eq!(alignment.cigar.to_string(), "2M1I");
    }

    #[test]
    fn trace_emits_leading_gaps() {
        use Direction::*;
        let table = Directions(vec![
            vec![Left, Left],
            vec![Top, Left],
            vec![Top, Diagonal],
        ]);
        let alignment = trace(&table, b"GT", b"T");
        assert_eq!(alignment.a, b"GT");
        assert_eq!(alignment.b, b"-T");
        assert_eq!(alignment.cigar.to_string(), "1D1M");
    }
}
