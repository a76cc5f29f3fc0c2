//! Random sequence pairs, for the binary when no input file is given and for
//! tests and benchmarks.

use crate::sequence::Sequence;
use clap::{Args, ValueEnum};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorModel {
    #[default]
    Uniform,
    /// Make a single gap (insertion or deletion) of size e*n.
    Gap,
    /// Delete a region of size e*n and insert it elsewhere.
    Move,
}

#[derive(Args, Clone, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Generated input")]
pub struct GenerateArgs {
    /// The number of sequence pairs to generate
    #[clap(short = 'x', long, default_value_t = 1, display_order = 2)]
    pub cnt: usize,

    /// Length of generated sequences
    #[clap(short = 'n', long, default_value_t = 100, display_order = 3)]
    pub length: usize,

    /// Input error rate, in `[0, 1]`
    #[clap(short, long, default_value_t = 0.05, display_order = 4)]
    pub error_rate: f32,

    #[clap(
        long,
        value_enum,
        default_value_t,
        value_name = "MODEL",
        hide_short_help = true
    )]
    pub error_model: ErrorModel,

    /// Seed to initialize RNG for reproducability
    #[clap(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn to_generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            length: self.length,
            error_rate: self.error_rate,
            error_model: self.error_model,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GenerateOptions {
    pub length: usize,
    pub error_rate: f32,
    pub error_model: ErrorModel,
}

const ALPH: [char; 4] = ['A', 'C', 'G', 'T'];

enum Mutation {
    // Replace char at pos.
    Substitution(usize, char),
    // Insert char before pos.
    Insertion(usize, char),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_char(rng: &mut impl Rng) -> char {
    ALPH[rng.gen_range(0..4)]
}

fn random_mutation(len_b: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For length 0 sequences, only generate insertions.
    match if len_b == 0 {
        1
    } else {
        rng.gen_range(0..3usize)
    } {
        0 => Mutation::Substitution(rng.gen_range(0..len_b), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len_b + 1), rand_char(rng)),
        _ => Mutation::Deletion(rng.gen_range(0..len_b)),
    }
}

/// Generates a random sequence `a` and a mutated copy `b`.
pub fn generate_pair(opt: &GenerateOptions, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let a: String = (0..opt.length).map(|_| rand_char(rng)).collect();
    let num_mutations = ((opt.error_rate.clamp(0., 1.) * opt.length as f32).ceil() as usize)
        .min(opt.length);
    let mut b = ropey::Rope::from_str(&a);
    match opt.error_model {
        ErrorModel::Uniform => {
            for _ in 0..num_mutations {
                match random_mutation(b.len_chars(), rng) {
                    Mutation::Substitution(i, c) => {
                        b.remove(i..=i);
                        b.insert_char(i, c);
                    }
                    Mutation::Insertion(i, c) => b.insert_char(i, c),
                    Mutation::Deletion(i) => b.remove(i..=i),
                }
            }
        }
        ErrorModel::Gap => {
            if rng.gen_bool(0.5) {
                // deletion
                let start = rng.gen_range(0..=b.len_chars() - num_mutations);
                b.remove(start..start + num_mutations);
            } else {
                // insertion
                let start = rng.gen_range(0..=b.len_chars());
                let text: String = (0..num_mutations).map(|_| rand_char(rng)).collect();
                b.insert(start, &text);
            }
        }
        ErrorModel::Move => {
            // deletion
            let start = rng.gen_range(0..=b.len_chars() - num_mutations);
            let piece = b.slice(start..start + num_mutations).to_string();
            b.remove(start..start + num_mutations);
            // insertion
            let start = rng.gen_range(0..=b.len_chars());
            b.insert(start, &piece);
        }
    }
    (a.into_bytes(), b.to_string().into_bytes())
}

pub fn setup_sequences(n: usize, e: f32) -> (Sequence, Sequence) {
    setup_sequences_with_seed(31415, n, e)
}

pub fn setup_sequences_with_seed(seed: u64, n: usize, e: f32) -> (Sequence, Sequence) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    generate_pair(
        &GenerateOptions {
            length: n,
            error_rate: e,
            error_model: ErrorModel::Uniform,
        },
        &mut rng,
    )
}
