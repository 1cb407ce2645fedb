use deepmorph_core::{DeepmorphError, DeepmorphResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Demonstration read loaded by the dashboard's "Load Sample" action (207 nt)
pub const SAMPLE_SEQUENCE: &str = "ATGCGATCGATCGATCGTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTA\
GCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTA\
GCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTA\
ATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCG";

const ALPHABET: &[u8] = b"ACGT";

/// A cleaned DNA string: uppercase, whitespace-free, non-empty, only A/C/G/T.
///
/// The only ways to build one go through [`NucleotideSequence::parse`] or
/// [`NucleotideSequence::from_bytes`], so every value carries the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NucleotideSequence {
    residues: String,
}

impl NucleotideSequence {
    /// Strip whitespace, uppercase, then check the alphabet
    pub fn parse(raw: &str) -> DeepmorphResult<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    pub fn from_bytes(raw: &[u8]) -> DeepmorphResult<Self> {
        let mut residues = String::with_capacity(raw.len());

        for (position, &byte) in raw.iter().filter(|b| !b.is_ascii_whitespace()).enumerate() {
            let upper = byte.to_ascii_uppercase();
            if !ALPHABET.contains(&upper) {
                return Err(DeepmorphError::InvalidInput(format!(
                    "invalid nucleotide {:?} at position {}; sequence must contain only A, G, C, T",
                    byte as char,
                    position + 1
                )));
            }
            residues.push(upper as char);
        }

        if residues.is_empty() {
            return Err(DeepmorphError::InvalidInput(
                "sequence is empty".to_string(),
            ));
        }

        Ok(Self { residues })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.residues.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.residues)
    }
}

impl std::str::FromStr for NucleotideSequence {
    type Err = DeepmorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NucleotideSequence {
    type Error = DeepmorphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NucleotideSequence> for String {
    fn from(value: NucleotideSequence) -> Self {
        value.residues
    }
}

impl AsRef<[u8]> for NucleotideSequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
