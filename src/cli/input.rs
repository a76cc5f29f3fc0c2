use crate::{
    error::{Error, Result},
    generate::{generate_pair, GenerateArgs},
    sequence::{Seq, Sequence},
};
use bio::io::fasta;
use clap::{value_parser, Args};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::ControlFlow,
    path::{Path, PathBuf},
};

#[derive(Args, Serialize, Deserialize)]
#[clap(next_help_heading = "Input")]
pub struct Input {
    /// The .seq, .txt, or Fasta file with sequence pairs to align, or a directory of such files.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    /// Options to generate input pairs.
    #[clap(flatten)]
    pub generate: GenerateArgs,
}

impl Input {
    /// Call the given function for each pair in the input, until it breaks or
    /// fails.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(Seq, Seq) -> Result<ControlFlow<()>>,
    ) -> Result<()> {
        let Some(input) = &self.input else {
            // Generate random input.
            let seed = self.generate.seed.unwrap_or_else(|| {
                let seed = ChaCha8Rng::from_entropy().gen_range(0..u64::MAX);
                log::warn!("Seed: {seed}");
                seed
            });
            let rng = &mut ChaCha8Rng::seed_from_u64(seed);
            let options = self.generate.to_generate_options();
            for _ in 0..self.generate.cnt {
                let (a, b) = generate_pair(&options, rng);
                if run_pair(&a, &b)?.is_break() {
                    break;
                }
            }
            return Ok(());
        };

        let files = if input.is_dir() {
            let mut files = input
                .read_dir()
                .map_err(|e| Error::io(input, e))?
                .map_ok(|entry| entry.path())
                .collect::<std::io::Result<Vec<_>>>()
                .map_err(|e| Error::io(input, e))?;
            files.sort();
            files
        } else {
            vec![input.clone()]
        };

        for f in files {
            for (a, b) in read_pairs(&f)? {
                if run_pair(&a, &b)?.is_break() {
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}

/// Reads all pairs from a single file, dispatching on its extension.
pub fn read_pairs(path: &Path) -> Result<Vec<(Sequence, Sequence)>> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();
    match ext.as_str() {
        "seq" | "txt" => read_line_pairs(path, ext == "seq"),
        "fna" | "fa" | "fasta" => read_fasta_pairs(path),
        _ => Err(Error::UnknownExtension {
            path: path.to_owned(),
            extension: ext,
        }),
    }
}

/// Consecutive lines form a pair. In `.seq` files, the first line of a pair
/// starts with `>` and the second with `<`.
fn read_line_pairs(path: &Path, markers: bool) -> Result<Vec<(Sequence, Sequence)>> {
    let f = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut lines = BufReader::new(f)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(path, e))?;
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.len() % 2 != 0 {
        return Err(Error::OddRecordCount {
            path: path.to_owned(),
        });
    }

    let strip = |idx: usize, expected: char| -> Result<Sequence> {
        let line = lines[idx].trim_end();
        if !markers {
            return Ok(line.as_bytes().to_vec());
        }
        match line.strip_prefix(expected) {
            Some(seq) => Ok(seq.as_bytes().to_vec()),
            None => Err(Error::MissingMarker {
                path: path.to_owned(),
                line: idx + 1,
                expected,
            }),
        }
    };
    (0..lines.len())
        .step_by(2)
        .map(|i| -> Result<(Sequence, Sequence)> { Ok((strip(i, '>')?, strip(i + 1, '<')?)) })
        .collect()
}

/// Consecutive records form a pair.
fn read_fasta_pairs(path: &Path) -> Result<Vec<(Sequence, Sequence)>> {
    let f = File::open(path).map_err(|e| Error::io(path, e))?;
    let records = fasta::Reader::new(BufReader::new(f))
        .records()
        .map(|record| -> Result<Sequence> {
            let record = record.map_err(|e| Error::fasta(path, e.to_string()))?;
            record.check().map_err(|e| Error::fasta(path, e))?;
            Ok(record.seq().to_vec())
        })
        .collect::<Result<Vec<_>>>()?;
    if records.len() % 2 != 0 {
        return Err(Error::OddRecordCount {
            path: path.to_owned(),
        });
    }
    Ok(records.into_iter().tuples().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("banded-aligner-input-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        File::create(&path)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn seq_file() {
        let path = write_file("pairs.seq", ">AATAT\n<AAATT\n>A\n<A\n\n");
        assert_eq!(
            read_pairs(&path).unwrap(),
            vec![
                (b"AATAT".to_vec(), b"AAATT".to_vec()),
                (b"A".to_vec(), b"A".to_vec())
            ]
        );
    }

    #[test]
    fn seq_file_without_markers() {
        let path = write_file("nomarkers.seq", ">AATAT\nAAATT\n");
        assert!(matches!(
            read_pairs(&path),
            Err(Error::MissingMarker {
                line: 2,
                expected: '<',
                ..
            })
        ));
    }

    #[test]
    fn txt_file() {
        let path = write_file("pairs.txt", "ACGT\nAGT\n");
        assert_eq!(
            read_pairs(&path).unwrap(),
            vec![(b"ACGT".to_vec(), b"AGT".to_vec())]
        );
        let path = write_file("odd.txt", "ACGT\nAGT\nA\n");
        assert!(matches!(read_pairs(&path), Err(Error::OddRecordCount { .. })));
    }

    #[test]
    fn fasta_file() {
        let path = write_file("pairs.fa", ">a\nACGT\nAC\n>b\nAGT\n");
        assert_eq!(
            read_pairs(&path).unwrap(),
            vec![(b"ACGTAC".to_vec(), b"AGT".to_vec())]
        );
        let path = write_file("odd.fasta", ">a\nACGT\n");
        assert!(matches!(read_pairs(&path), Err(Error::OddRecordCount { .. })));
    }

    #[test]
    fn unknown_extension() {
        let path = write_file("pairs.csv", "A,A\n");
        assert!(matches!(
            read_pairs(&path),
            Err(Error::UnknownExtension { extension, .. }) if extension == "csv"
        ));
        assert!(matches!(
            read_pairs(Path::new("/nonexistent/pairs.seq")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn generated_pairs_stop_on_break() {
        let input = Input {
            input: None,
            generate: GenerateArgs {
                cnt: 5,
                length: 20,
                error_rate: 0.1,
                error_model: Default::default(),
                seed: Some(1),
            },
        };
        let mut count = 0;
        input
            .process_input_pairs(|a, _b| {
                assert_eq!(a.len(), 20);
                count += 1;
                Ok(if count == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                })
            })
            .unwrap();
        assert_eq!(count, 3);
    }
}
