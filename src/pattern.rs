//! Binary input patterns.
//!
//! ART1 only accepts vectors whose attributes are 0 or 1. A
//! [`BinaryPattern`] can only be built from data that passes that check, so
//! the rest of the crate never has to re-validate attribute values.

use std::fmt;
use std::ops::Index;

use crate::error::{ArtError, Result};

/// A fixed-length vector of binary attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryPattern {
    /// Attribute values, each 0 or 1
    bits: Vec<u8>,
}

impl BinaryPattern {
    /// Create a pattern from raw attribute values.
    ///
    /// Fails with [`ArtError::NonBinary`] on the first value that is not 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if let Some((index, &value)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(ArtError::NonBinary {
                index,
                value: value.to_string(),
            });
        }
        Ok(Self { bits })
    }

    /// Create a pattern from booleans (`true` = 1).
    pub fn from_bools(values: &[bool]) -> Self {
        Self {
            bits: values.iter().map(|&v| v as u8).collect(),
        }
    }

    /// Parse one row of whitespace-separated `0`/`1` tokens, e.g. `"0 1 1 0 1"`.
    pub fn parse_row(row: &str) -> Result<Self> {
        let bits = row
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| match token {
                "0" => Ok(0),
                "1" => Ok(1),
                other => Err(ArtError::NonBinary {
                    index,
                    value: other.to_string(),
                }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bits })
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the pattern has no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Attribute values as a slice.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of set attributes (the sum of the vector).
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }
}

impl TryFrom<Vec<u8>> for BinaryPattern {
    type Error = ArtError;

    fn try_from(bits: Vec<u8>) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl Index<usize> for BinaryPattern {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl fmt::Display for BinaryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
