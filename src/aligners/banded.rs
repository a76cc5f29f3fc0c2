//! Needleman-Wunsch restricted to a band of `2*max_indels + 1` diagonals
//! around the main diagonal.
//!
//! Row `i` stores the window of true columns `i - max_indels ..= i + max_indels`
//! at local indices `0 ..= 2*max_indels`. Cells whose true column falls outside
//! `0..=b.len()` are absent. All conversions between local and true columns go
//! through `Band`.
//!
//! Moving to a neighbour in the band:
//! - diagonal `(i-1, j-1)`: same local index in the previous row,
//! - top `(i-1, j)`: local index `k+1` in the previous row,
//! - left `(i, j-1)`: local index `k-1` in the same row.

use super::{first_min, Direction, Pos, TraceTable};
use crate::config::MAX_INDELS;
use crate::cost_model::{Cost, LinearCost};
use crate::sequence::Seq;
use log::trace;
use serde::{Deserialize, Serialize};

/// Where a local index lies within its row of the band.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BandEdge {
    /// First cell of the row: there is no left neighbour in the band.
    Front,
    /// Last cell of the row: the cell above is outside the band.
    Back,
    /// Both neighbours are in the band.
    Interior,
    /// The band is a single diagonal: only the diagonal neighbour exists.
    Single,
}

impl BandEdge {
    pub fn has_top(self) -> bool {
        matches!(self, BandEdge::Front | BandEdge::Interior)
    }

    pub fn has_left(self) -> bool {
        matches!(self, BandEdge::Back | BandEdge::Interior)
    }
}

/// The layout of a band: which true columns each row covers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Band {
    pub max_indels: usize,
}

impl Default for Band {
    fn default() -> Self {
        Self {
            max_indels: MAX_INDELS,
        }
    }
}

impl Band {
    pub fn new(max_indels: usize) -> Self {
        Self { max_indels }
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        2 * self.max_indels + 1
    }

    /// The true column of local index `k` in row `row`.
    /// Negative for the clipped cells at the start of the first rows.
    pub fn true_column(&self, row: usize, k: usize) -> isize {
        row as isize + k as isize - self.max_indels as isize
    }

    /// The local index of true column `j` in row `row`, if it is in the band.
    pub fn local_index(&self, row: usize, j: usize) -> Option<usize> {
        let k = j as isize - row as isize + self.max_indels as isize;
        if 0 <= k && (k as usize) < self.width() {
            Some(k as usize)
        } else {
            None
        }
    }

    pub fn edge(&self, k: usize) -> BandEdge {
        match (k == 0, k + 1 == self.width()) {
            (true, true) => BandEdge::Single,
            (true, false) => BandEdge::Front,
            (false, true) => BandEdge::Back,
            (false, false) => BandEdge::Interior,
        }
    }

    /// Whether the end cell `(m, n)` lies within the band.
    pub fn is_feasible(&self, m: usize, n: usize) -> bool {
        m.abs_diff(n) <= self.max_indels
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BandCell {
    /// Minimal cost of aligning `a[..i]` and `b[..j]`.
    pub cost: Cost,
    pub direction: Direction,
    /// The true column of this cell.
    pub j: usize,
}

/// A banded DP table of `a.len()+1` rows of `band.width()` cells.
/// Takes `O(|a| * width)` time and memory.
#[derive(Clone, Debug)]
pub struct BandedTable {
    band: Band,
    rows: Vec<Vec<Option<BandCell>>>,
    n: usize,
}

impl BandedTable {
    /// Fills the band for `a` and `b`.
    ///
    /// When `band.is_feasible(a.len(), b.len())` is false the end cell is not
    /// in the band and `score` returns `None`.
    pub fn build(a: Seq, b: Seq, cm: &LinearCost, band: Band) -> Self {
        trace!(
            "Filling banded table of {}x{} cells",
            a.len() + 1,
            band.width()
        );
        let n = b.len();
        let mut rows: Vec<Vec<Option<BandCell>>> = Vec::with_capacity(a.len() + 1);
        for i in 0..=a.len() {
            let mut row: Vec<Option<BandCell>> = Vec::with_capacity(band.width());
            for k in 0..band.width() {
                let j = band.true_column(i, k);
                let cell = if j < 0 || j > n as isize {
                    None
                } else if i == 0 {
                    let j = j as usize;
                    Some(BandCell {
                        cost: cm.gap(j),
                        direction: Direction::Left,
                        j,
                    })
                } else if j == 0 {
                    // Only in the first `max_indels` rows.
                    Some(BandCell {
                        cost: cm.gap(i),
                        direction: Direction::Top,
                        j: 0,
                    })
                } else {
                    let j = j as usize;
                    Self::next_cell(
                        &rows[i - 1],
                        &row,
                        band.edge(k),
                        k,
                        j,
                        cm.diagonal(a[i - 1], b[j - 1]),
                        cm.indel,
                    )
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Self { band, rows, n }
    }

    /// Computes cell `k` of the current row from the available neighbours.
    /// `row` holds the cells `0..k` of the current row.
    fn next_cell(
        prev: &[Option<BandCell>],
        row: &[Option<BandCell>],
        edge: BandEdge,
        k: usize,
        j: usize,
        diagonal_cost: Cost,
        indel: Cost,
    ) -> Option<BandCell> {
        let diagonal = prev[k].map(|c| (c.cost + diagonal_cost, Direction::Diagonal));
        let top = if edge.has_top() {
            prev[k + 1].map(|c| (c.cost + indel, Direction::Top))
        } else {
            None
        };
        let left = if edge.has_left() {
            row[k - 1].map(|c| (c.cost + indel, Direction::Left))
        } else {
            None
        };
        diagonal.map(|diagonal| {
            let (cost, direction) = first_min(diagonal, top.into_iter().chain(left));
            BandCell { cost, direction, j }
        })
    }

    pub fn band(&self) -> Band {
        self.band
    }

    /// The cell at true position `pos`, if it is present in the band.
    pub fn get(&self, Pos(i, j): Pos) -> Option<&BandCell> {
        let k = self.band.local_index(i, j)?;
        self.rows.get(i)?.get(k)?.as_ref()
    }

    /// The cost of aligning both full sequences, or `None` when the band does
    /// not reach the end.
    pub fn score(&self) -> Option<Cost> {
        self.get(self.end()).map(|c| c.cost)
    }
}

impl std::ops::Index<Pos> for BandedTable {
    type Output = BandCell;

    fn index(&self, pos: Pos) -> &BandCell {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!("Cell {pos} is not in the band"),
        }
    }
}

impl TraceTable for BandedTable {
    fn end(&self) -> Pos {
        Pos(self.rows.len() - 1, self.n)
    }

    fn direction(&self, pos: Pos) -> Direction {
        self[pos].direction
    }
}
