//! Core data types: [`Chromosome`] and [`Domain`].

use super::error::ChromosomeError;
use std::fmt;
use std::str::FromStr;

/// Longest supported gene, in bits.
///
/// Genes are decoded through a `u64`.
pub const MAX_GENE_LENGTH: usize = 63;

/// Fixed-length bit string encoding one candidate `(x1, x2)`.
///
/// The first half encodes `x1`, the second half `x2`, each most significant
/// bit first. Chromosomes are immutable once built by the operators; the
/// fitness is never stored on them.
///
/// The text form is a string of `'0'` and `'1'`:
///
/// ```
/// use u_bitga::ga::Chromosome;
///
/// let c: Chromosome = "0110".parse().unwrap();
/// assert_eq!(c.len(), 4);
/// assert_eq!(c.to_string(), "0110");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from raw bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the chromosome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, most significant first within each gene.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Consumes the chromosome, returning its bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Splits into the `x1` and `x2` genes.
    ///
    /// # Panics
    /// Panics if `gene_length` exceeds the chromosome length.
    pub fn genes(&self, gene_length: usize) -> (&[bool], &[bool]) {
        self.bits.split_at(gene_length)
    }

    /// Checks the length against the configured chromosome length.
    pub fn check_len(&self, expected: usize) -> Result<(), ChromosomeError> {
        if self.bits.len() != expected {
            return Err(ChromosomeError::LengthMismatch {
                expected,
                actual: self.bits.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = ChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ChromosomeError::InvalidBit {
                    position,
                    character,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

/// Closed real interval `[min, max]` a gene is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Creates a domain. Validity is checked by [`GaConfig::validate`].
    ///
    /// [`GaConfig::validate`]: super::GaConfig::validate
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the interval is finite and non-empty.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps `value` into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Distance between adjacent representable values for `bits` bits.
    pub fn resolution(&self, bits: usize) -> f64 {
        self.span() / max_gene_value(bits) as f64
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}

/// `2^bits - 1`, the largest integer a gene of `bits` bits can hold.
pub(crate) fn max_gene_value(bits: usize) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
