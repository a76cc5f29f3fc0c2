//! Properties that hold for all inputs, checked on seeded random pairs.

use banded_aligner::{
    config::{MAX_INDELS, NO_ALIGNMENT},
    generate::{generate_pair, ErrorModel, GenerateOptions},
    prelude::*,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn full() -> Aligner {
    Aligner::default()
}

fn banded() -> Aligner {
    Aligner::new(AlignParams {
        banded: true,
        ..AlignParams::default()
    })
}

/// Random pairs of length up to 60, with lengths differing by at most a few
/// symbols most of the time.
fn random_pairs(seed: u64, cnt: usize) -> Vec<(Sequence, Sequence)> {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    (0..cnt)
        .map(|_| {
            let options = GenerateOptions {
                length: rng.gen_range(0..60),
                error_rate: rng.gen_range(0.0..0.3),
                error_model: if rng.gen_bool(0.8) {
                    ErrorModel::Uniform
                } else {
                    ErrorModel::Gap
                },
            };
            generate_pair(&options, rng)
        })
        .collect()
}

#[test]
fn full_never_worse_than_banded() {
    let (mut feasible, mut infeasible) = (0, 0);
    for (a, b) in random_pairs(1, 500) {
        let f = full().align(&a, &b);
        let r = banded().align(&a, &b);
        full().verify(&a, &b, &f);
        banded().verify(&a, &b, &r);
        assert!(f.is_feasible());
        assert!(f.cost <= r.cost, "{f}{r}");
        if r.is_feasible() {
            feasible += 1;
        } else {
            infeasible += 1;
        }
    }
    // Both branches are exercised.
    assert!(feasible > 0 && infeasible > 0);
}

#[test]
fn self_alignment() {
    let rng = &mut ChaCha8Rng::seed_from_u64(2);
    for len in 1..=100 {
        let a: Sequence = (0..len).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();
        for aligner in [full(), banded()] {
            let r = aligner.align(&a, &a);
            assert_eq!(r.cost, AlignmentCost::Finite(-3 * len as Cost));
            assert_eq!(r.aligned_a.as_bytes(), &a[..]);
            assert_eq!(r.aligned_b.as_bytes(), &a[..]);
            assert_eq!(r.cigar.to_string(), format!("{len}M"));
        }
    }
}

#[test]
fn symmetric() {
    for (a, b) in random_pairs(3, 300) {
        for aligner in [full(), banded()] {
            let ab = aligner.align(&a, &b);
            let ba = aligner.align(&b, &a);
            assert_eq!(ab.cost, ba.cost);
        }
    }
}

#[test]
fn banded_infeasible_iff_lengths_differ_too_much() {
    let rng = &mut ChaCha8Rng::seed_from_u64(4);
    for _ in 0..200 {
        let m: usize = rng.gen_range(0..30);
        let n: usize = rng.gen_range(0..30);
        let a: Sequence = (0..m).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();
        let b: Sequence = (0..n).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();
        let r = banded().align(&a, &b);
        if m.abs_diff(n) > MAX_INDELS {
            assert_eq!(r.cost, AlignmentCost::Infinite);
            assert_eq!(r.aligned_a, NO_ALIGNMENT);
            assert_eq!(r.aligned_b, NO_ALIGNMENT);
        } else {
            assert!(r.is_feasible());
        }
    }
}

#[test]
fn aligned_strings_degap_to_inputs() {
    for (a, b) in random_pairs(5, 300) {
        for aligner in [full(), banded()] {
            let r = aligner.align(&a, &b);
            if !r.is_feasible() {
                continue;
            }
            assert_eq!(r.aligned_a.len(), r.aligned_b.len());
            let degap = |s: &str| s.bytes().filter(|&c| c != b'-').collect::<Sequence>();
            // Inputs are short enough that nothing is clipped.
            assert_eq!(degap(&r.aligned_a), a);
            assert_eq!(degap(&r.aligned_b), b);
            assert!(!r
                .aligned_a
                .bytes()
                .zip(r.aligned_b.bytes())
                .any(|(x, y)| x == b'-' && y == b'-'));
        }
    }
}

#[test]
fn banded_matches_full_when_band_is_wide_enough() {
    // With a band as wide as the longest sequence, every cell is in the band.
    for (a, b) in random_pairs(6, 200) {
        let wide = Aligner::new(AlignParams {
            banded: true,
            max_indels: a.len().max(b.len()),
            ..AlignParams::default()
        });
        let r = wide.align(&a, &b);
        let f = full().align(&a, &b);
        assert_eq!(r.cost, f.cost);
        assert_eq!(r.aligned_a, f.aligned_a);
        assert_eq!(r.aligned_b, f.aligned_b);
    }
}

#[test]
fn truncation() {
    for (a, b) in random_pairs(7, 100) {
        for max_length in [1, 5, 20] {
            let aligner = Aligner::new(AlignParams {
                max_length,
                ..AlignParams::default()
            });
            let r = aligner.align(&a, &b);
            assert_eq!(r.len_a, a.len().min(max_length));
            assert_eq!(r.len_b, b.len().min(max_length));
            assert_eq!(r, full().align(prepare(&a, max_length), prepare(&b, max_length)));
        }
    }
}
