use crate::sequence::Seq;
use derive_more::AddAssign;
use serde::Serialize;
use std::{
    fmt::Display,
    io::{stdout, Write},
    sync::atomic::{AtomicBool, Ordering},
};

#[derive(Default, Clone, Copy, AddAssign, Debug, Serialize)]
pub struct Timing {
    /// fill + traceback
    pub total: f64,
    /// filling the table
    pub fill: f64,
    pub traceback: f64,
}

/// Counters for one aligned pair, or summed over many pairs.
#[derive(Default, Clone, AddAssign, Debug, Serialize)]
pub struct AlignStats {
    pub len_a: usize,
    pub len_b: usize,
    /// Sum of the finite costs.
    pub cost: i64,
    /// Number of pairs for which no banded alignment exists.
    pub infeasible: usize,
    /// Number of table cells allocated.
    pub cells: usize,
    pub timing: Timing,
    pub sample_size: usize,
}

static PRINTED_HEADER: AtomicBool = AtomicBool::new(false);

impl AlignStats {
    pub fn init(a: Seq, b: Seq) -> Self {
        Self {
            len_a: a.len(),
            len_b: b.len(),
            sample_size: 1,
            ..Default::default()
        }
    }

    pub fn print(&self) {
        self.print_internal(true);
    }
    pub fn print_no_newline(&self) {
        self.print_internal(false);
    }

    fn format_raw<T: Display>(width: usize, title: &str, val: T) -> (String, String) {
        (format!("{:>width$}", title), format!("{:>width$}", val))
    }

    fn format_avg(&self, width: usize, precision: usize, title: &str, val: f64) -> (String, String) {
        let avg = if self.sample_size == 0 {
            0.
        } else {
            val / self.sample_size as f64
        };
        (
            format!("{:>width$}", title),
            format!("{:>width$.precision$}", avg),
        )
    }

    /// Column headers and averaged values.
    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        let feasible = self.sample_size - self.infeasible;
        [
            Self::format_raw(7, "nr", self.sample_size),
            Self::format_raw(5, "inf", self.infeasible),
            self.format_avg(8, 1, "|a|", self.len_a as f64),
            self.format_avg(8, 1, "|b|", self.len_b as f64),
            self.format_avg(10, 0, "cells", self.cells as f64),
            (
                format!("{:>8}", "cost"),
                if feasible == 0 {
                    format!("{:>8}", "-")
                } else {
                    format!("{:>8.1}", self.cost as f64 / feasible as f64)
                },
            ),
            self.format_avg(8, 3, "t", 1000. * self.timing.total),
            self.format_avg(8, 3, "fill", 1000. * self.timing.fill),
            self.format_avg(8, 3, "trace", 1000. * self.timing.traceback),
        ]
        .into_iter()
        .unzip()
    }

    fn print_internal(&self, newline: bool) {
        let (header, values) = self.values();
        if !PRINTED_HEADER.swap(true, Ordering::Relaxed) {
            println!("{}", header.join(" "));
        }
        print!("{}", values.join(" "));
        if newline {
            println!();
        } else {
            // Nothing useful to do when stdout is gone.
            let _ = stdout().flush();
        }
    }
}
