use crate::cost_model::{Cost, LinearCost};
use crate::sequence::{seq_to_string, Seq};
use serde::{Serialize, Serializer};
use std::fmt::{self, Write};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CigarOp {
    Match,
    Mismatch,
    /// A symbol of `b` against a gap.
    Insertion,
    /// A symbol of `a` against a gap.
    Deletion,
}

impl CigarOp {
    fn get_char(&self) -> char {
        match self {
            CigarOp::Match => 'M',
            CigarOp::Mismatch => 'X',
            CigarOp::Insertion => 'I',
            CigarOp::Deletion => 'D',
        }
    }

    fn cost(&self, cm: &LinearCost) -> Cost {
        match self {
            CigarOp::Match => cm.r#match,
            CigarOp::Mismatch => cm.sub,
            CigarOp::Insertion | CigarOp::Deletion => cm.indel,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CigarElement {
    pub op: CigarOp,
    pub length: usize,
}

/// A run-length encoded alignment, e.g. `3M1X2I`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Cigar {
    pub ops: Vec<CigarElement>,
}

impl Cigar {
    /// Appends `op`, extending the last run when it has the same operation.
    pub fn push(&mut self, op: CigarOp) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.length += 1;
                return;
            }
        }
        self.ops.push(CigarElement { op, length: 1 });
    }

    pub fn reverse(&mut self) {
        self.ops.reverse();
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The number of aligned columns.
    pub fn len(&self) -> usize {
        self.ops.iter().map(|e| e.length).sum()
    }

    /// The total cost of the operations under `cm`.
    pub fn cost(&self, cm: &LinearCost) -> Cost {
        self.ops
            .iter()
            .map(|e| e.length as Cost * e.op.cost(cm))
            .sum()
    }

    /// Checks that the cigar is a valid global alignment of `a` and `b` and
    /// returns its cost. Panics otherwise.
    pub fn verify(&self, cm: &LinearCost, a: Seq, b: Seq) -> Cost {
        let (mut i, mut j) = (0, 0);
        for e in &self.ops {
            for _ in 0..e.length {
                match e.op {
                    CigarOp::Match | CigarOp::Mismatch => {
                        assert!(i < a.len() && j < b.len(), "Cigar {self} is too long");
                        assert_eq!(
                            a[i] == b[j],
                            e.op == CigarOp::Match,
                            "Cigar {self} has a wrong match/mismatch at ({i}, {j})"
                        );
                        i += 1;
                        j += 1;
                    }
                    CigarOp::Deletion => i += 1,
                    CigarOp::Insertion => j += 1,
                }
            }
        }
        assert_eq!(
            (i, j),
            (a.len(), b.len()),
            "Cigar {self} does not align {} and {}",
            seq_to_string(a),
            seq_to_string(b)
        );
        self.cost(cm)
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.ops {
            write!(f, "{}", e.length)?;
            f.write_char(e.op.get_char())?;
        }
        Ok(())
    }
}

impl Serialize for Cigar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
