//! Needleman-Wunsch over the full `(a.len()+1) x (b.len()+1)` table.

use super::{first_min, Direction, Pos, TraceTable};
use crate::cost_model::{Cost, LinearCost};
use crate::sequence::Seq;
use log::trace;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    /// Minimal cost of aligning `a[..i]` and `b[..j]`.
    pub cost: Cost,
    pub direction: Direction,
}

/// The complete DP table, stored row by row.
///
/// Row `i` corresponds to the prefix `a[..i]`, column `j` to `b[..j]`.
/// Takes `O(|a|*|b|)` time and memory.
#[derive(Clone, Debug)]
pub struct FullTable {
    rows: Vec<Vec<Cell>>,
}

impl FullTable {
    pub fn build(a: Seq, b: Seq, cm: &LinearCost) -> Self {
        trace!("Filling full table of {}x{} cells", a.len() + 1, b.len() + 1);
        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(a.len() + 1);
        rows.push(
            (0..=b.len())
                .map(|j| Cell {
                    cost: cm.gap(j),
                    direction: Direction::Left,
                })
                .collect(),
        );

        for (i0, &ca) in a.iter().enumerate() {
            // Change from 0 to 1 based indexing.
            let i = i0 + 1;
            let prev = &rows[i0];
            let mut next = Vec::with_capacity(b.len() + 1);
            next.push(Cell {
                cost: cm.gap(i),
                direction: Direction::Top,
            });
            for (j0, &cb) in b.iter().enumerate() {
                let j = j0 + 1;
                let left: &Cell = &next[j0];
                let (cost, direction) = first_min(
                    (prev[j0].cost + cm.diagonal(ca, cb), Direction::Diagonal),
                    [
                        (prev[j].cost + cm.indel, Direction::Top),
                        (left.cost + cm.indel, Direction::Left),
                    ],
                );
                next.push(Cell { cost, direction });
            }
            rows.push(next);
        }
        Self { rows }
    }

    pub fn get(&self, Pos(i, j): Pos) -> Option<&Cell> {
        self.rows.get(i)?.get(j)
    }

    /// The cost of aligning both full sequences.
    pub fn score(&self) -> Cost {
        self[self.end()].cost
    }
}

impl std::ops::Index<Pos> for FullTable {
    type Output = Cell;

    fn index(&self, Pos(i, j): Pos) -> &Cell {
        &self.rows[i][j]
    }
}

impl TraceTable for FullTable {
    fn end(&self) -> Pos {
        Pos(self.rows.len() - 1, self.rows[0].len() - 1)
    }

    fn direction(&self, pos: Pos) -> Direction {
        self[pos].direction
    }
}
