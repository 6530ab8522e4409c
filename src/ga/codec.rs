//! Chromosome ⇄ `(x1, x2)` mapping.
//!
//! Each gene of `L` bits is read as an unsigned integer `n` (most
//! significant bit first) and mapped affinely onto its domain:
//!
//! ```text
//! value = min + (max - min) · n / (2^L - 1)
//! ```
//!
//! so all-zeros decodes to `min` and all-ones to `max`. Encoding rounds to
//! the nearest representable value; a round trip is off by at most one
//! quantisation step `(max - min) / (2^L - 1)`.

use super::types::{max_gene_value, Chromosome, Domain};

/// Decodes one gene onto `domain`.
///
/// The result is clamped, since `min + (max - min)` can round past `max`
/// when the bounds differ widely in magnitude.
///
/// # Panics
/// Panics if `domain.min > domain.max` or either bound is NaN.
pub fn decode_gene(bits: &[bool], domain: Domain) -> f64 {
    let integer = bits
        .iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
    let t = integer as f64 / max_gene_value(bits.len()) as f64;
    domain.clamp(domain.min + domain.span() * t)
}

/// Encodes `value` as a gene of `length` bits.
///
/// Values outside `domain` are clamped first.
pub fn encode_gene(value: f64, domain: Domain, length: usize) -> Vec<bool> {
    let max_int = max_gene_value(length);
    let scaled = (domain.clamp(value) - domain.min) * max_int as f64 / domain.span();
    let integer = (scaled.round() as u64).min(max_int);
    (0..length)
        .rev()
        .map(|shift| (integer >> shift) & 1 == 1)
        .collect()
}

/// Maps chromosomes of `2 × gene_length` bits to `(x1, x2)` pairs.
///
/// ```
/// use u_bitga::ga::{Domain, GeneCodec};
///
/// let codec = GeneCodec::new(10, Domain::new(-10.0, 10.0), Domain::new(-10.0, 10.0));
/// let c = codec.encode(1.5, -3.0);
/// let (x1, x2) = codec.decode(&c);
/// assert!((x1 - 1.5).abs() <= 20.0 / 1023.0);
/// assert!((x2 + 3.0).abs() <= 20.0 / 1023.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneCodec {
    gene_length: usize,
    x1: Domain,
    x2: Domain,
}

impl GeneCodec {
    /// Creates a codec. Parameters are assumed validated.
    pub fn new(gene_length: usize, x1: Domain, x2: Domain) -> Self {
        Self {
            gene_length,
            x1,
            x2,
        }
    }

    /// Bits per gene.
    pub fn gene_length(&self) -> usize {
        self.gene_length
    }

    /// Bits per chromosome.
    pub fn chromosome_length(&self) -> usize {
        2 * self.gene_length
    }

    /// Decodes a chromosome into `(x1, x2)`.
    ///
    /// # Panics
    /// Panics if the chromosome is shorter than one gene.
    pub fn decode(&self, chromosome: &Chromosome) -> (f64, f64) {
        let (g1, g2) = chromosome.genes(self.gene_length);
        (decode_gene(g1, self.x1), decode_gene(g2, self.x2))
    }

    /// Encodes `(x1, x2)` into a chromosome, clamping into the domains.
    pub fn encode(&self, x1: f64, x2: f64) -> Chromosome {
        let mut bits = encode_gene(x1, self.x1, self.gene_length);
        bits.extend(encode_gene(x2, self.x2, self.gene_length));
        Chromosome::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Domain {
        Domain::new(-10.0, 10.0)
    }

    #[test]
    fn test_decode_extremes() {
        assert_eq!(decode_gene(&[false; 10], domain()), -10.0);
        assert_eq!(decode_gene(&[true; 10], domain()), 10.0);
    }

    #[test]
    fn test_decode_known_value() {
        // 1000000000 = 512 → -10 + 20·512/1023
        let mut bits = vec![false; 10];
        bits[0] = true;
        let expected = -10.0 + 20.0 * 512.0 / 1023.0;
        assert!((decode_gene(&bits, domain()) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_encode_extremes() {
        assert_eq!(encode_gene(-10.0, domain(), 4), vec![false; 4]);
        assert_eq!(encode_gene(10.0, domain(), 4), vec![true; 4]);
    }

    #[test]
    fn test_encode_rounds_to_nearest() {
        // Domain [0, 15] with 4 bits has unit steps.
        let d = Domain::new(0.0, 15.0);
        assert_eq!(encode_gene(5.4, d, 4), vec![false, true, false, true]);
        assert_eq!(encode_gene(5.6, d, 4), vec![false, true, true, false]);
    }

    #[test]
    fn test_encode_clamps() {
        assert_eq!(encode_gene(99.0, domain(), 6), vec![true; 6]);
        assert_eq!(encode_gene(-99.0, domain(), 6), vec![false; 6]);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        let d = domain();
        let step = d.resolution(10);
        for i in 0..=200 {
            let v = -10.0 + i as f64 * 0.1;
            let back = decode_gene(&encode_gene(v, d, 10), d);
            assert!((back - v).abs() <= step, "v = {v}, back = {back}");
        }
    }

    #[test]
    fn test_codec_split() {
        let codec = GeneCodec::new(3, Domain::new(0.0, 7.0), Domain::new(0.0, 70.0));
        let c: Chromosome = "001111".parse().unwrap();
        assert_eq!(codec.decode(&c), (1.0, 70.0));
        assert_eq!(codec.chromosome_length(), 6);
    }

    #[test]
    fn test_codec_encode_layout() {
        let codec = GeneCodec::new(3, Domain::new(0.0, 7.0), Domain::new(0.0, 7.0));
        assert_eq!(codec.encode(6.0, 1.0).to_string(), "110001");
    }

    #[test]
    fn test_decoded_values_stay_in_domain() {
        let codec = GeneCodec::new(5, domain(), Domain::new(0.5, 0.75));
        for n in 0u32..1024 {
            let bits: Vec<bool> = (0..10).rev().map(|s| (n >> s) & 1 == 1).collect();
            let (x1, x2) = codec.decode(&Chromosome::new(bits));
            assert!(domain().contains(x1));
            assert!((0.5..=0.75).contains(&x2));
        }
    }

    #[test]
    fn test_decode_extremes_with_lopsided_bounds() {
        // min + (max - min) rounds above max for these bounds.
        let d = Domain::new(-8581.360581401848, 0.4582775005363171);
        let top = decode_gene(&[true; 10], d);
        assert!(d.contains(top), "decoded {top} outside [{}, {}]", d.min, d.max);
        assert_eq!(top, d.max);
        assert_eq!(decode_gene(&[false; 10], d), d.min);
    }

    #[test]
    fn test_runner_reports_stay_in_lopsided_domain() {
        use crate::ga::{GaConfig, GaRunner};

        let d = Domain::new(-8581.360581401848, 0.4582775005363171);
        let config = GaConfig::reference().with_domain(d.min, d.max);
        let result = GaRunner::new(config).expect("valid config").run();
        for report in &result.reports {
            assert!(d.contains(report.x1), "x1 = {}", report.x1);
            assert!(d.contains(report.x2), "x2 = {}", report.x2);
        }
        assert!(d.contains(result.x1) && d.contains(result.x2));
    }
}
