use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,
    #[error("Invalid nucleotide '{0}' in sequence")]
    InvalidBase(char),
}

/// A validated DNA sequence. Stored uppercase; only A, C, G and T are
/// accepted (sticky ends carry no ambiguity codes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DnaSequence(String);

impl DnaSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Base-wise Watson-Crick complement, same 5'->3' reading direction.
    pub fn complement(&self) -> DnaSequence {
        DnaSequence(self.0.bytes().map(|b| complement_base(b) as char).collect())
    }

    /// The physical complementary strand, read 5'->3'.
    pub fn reverse_complement(&self) -> DnaSequence {
        DnaSequence(
            self.0
                .bytes()
                .rev()
                .map(|b| complement_base(b) as char)
                .collect(),
        )
    }
}

pub(crate) fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        _ => unreachable!("DnaSequence only stores ACGT"),
    }
}

pub(crate) fn bases_pair(a: u8, b: u8) -> bool {
    complement_base(a) == b
}

impl FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SequenceError::Empty);
        }
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c.to_ascii_uppercase() {
                b @ ('A' | 'C' | 'G' | 'T') => out.push(b),
                other => return Err(SequenceError::InvalidBase(other)),
            }
        }
        Ok(DnaSequence(out))
    }
}

impl TryFrom<String> for DnaSequence {
    type Error = SequenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DnaSequence> for String {
    fn from(seq: DnaSequence) -> Self {
        seq.0
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
