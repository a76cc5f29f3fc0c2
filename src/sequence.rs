//! Sequence types, truncation to the alignment length, and input validation.

use crate::error::{Error, Result};

/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

/// Returns the prefix of `seq` of length at most `max_length`.
///
/// A bound of 0 yields the empty sequence.
pub fn prepare(seq: Seq, max_length: usize) -> Seq {
    &seq[..seq.len().min(max_length)]
}

/// Checks that `seq` is non-empty and only contains symbols from `alphabet`.
///
/// The aligners never call this; it is meant for callers reading sequences
/// from untrusted input.
pub fn validate(seq: Seq, alphabet: &[u8]) -> Result<()> {
    if seq.is_empty() {
        return Err(Error::EmptySequence);
    }
    match seq.iter().position(|c| !alphabet.contains(c)) {
        Some(position) => Err(Error::InvalidSymbol {
            symbol: seq[position] as char,
            position,
        }),
        None => Ok(()),
    }
}

pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DNA;

    #[test]
    fn prepare_truncates() {
        assert_eq!(prepare(b"ACGTACGT", 3), b"ACG");
        assert_eq!(prepare(b"ACG", 3), b"ACG");
        assert_eq!(prepare(b"AC", 1000), b"AC");
        assert_eq!(prepare(b"ACGT", 0), b"");
    }

    #[test]
    fn validate_rejects_bad_input() {
        assert!(validate(b"ACGT", DNA).is_ok());
        assert!(matches!(validate(b"", DNA), Err(Error::EmptySequence)));
        assert!(matches!(
            validate(b"ACNT", DNA),
            Err(Error::InvalidSymbol {
                symbol: 'N',
                position: 2
            })
        ));
    }
}
