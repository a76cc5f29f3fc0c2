//! This module contains the `LinearCost` cost model.
//!
//! Unlike an edit distance, matches have a negative cost so that long runs of
//! identical symbols are rewarded. The aligners minimize the total cost.

use clap::Args;
use serde::{Deserialize, Serialize};

/// Type for storing costs. Signed, since matches are rewarded.
pub type Cost = i32;

/// A linear cost model: every match, substitution and indel has a fixed cost.
#[derive(Args, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[clap(next_help_heading = "Cost model")]
#[serde(default)]
pub struct LinearCost {
    /// Cost of aligning two equal symbols.
    #[clap(long = "match", default_value_t = -3, allow_hyphen_values = true, hide_short_help = true)]
    #[serde(rename = "match")]
    pub r#match: Cost,

    /// Cost of aligning two different symbols.
    #[clap(long, default_value_t = 1, allow_hyphen_values = true, hide_short_help = true)]
    pub sub: Cost,

    /// Cost of a single inserted or deleted symbol.
    #[clap(long, default_value_t = 5, allow_hyphen_values = true, hide_short_help = true)]
    pub indel: Cost,
}

impl Default for LinearCost {
    fn default() -> Self {
        Self {
            r#match: -3,
            sub: 1,
            indel: 5,
        }
    }
}

impl LinearCost {
    pub fn new(r#match: Cost, sub: Cost, indel: Cost) -> Self {
        Self {
            r#match,
            sub,
            indel,
        }
    }

    /// The cost of the diagonal step aligning `ca` with `cb`.
    #[inline]
    pub fn diagonal(&self, ca: u8, cb: u8) -> Cost {
        if ca == cb {
            self.r#match
        } else {
            self.sub
        }
    }

    /// The cost of `len` consecutive indels.
    #[inline]
    pub fn gap(&self, len: usize) -> Cost {
        len as Cost * self.indel
    }
}
