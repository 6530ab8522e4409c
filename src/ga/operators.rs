//! Bit-string variation operators.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point, applied with probability `pc`
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-bit flip with probability `pm`
//!
//! Both preserve chromosome length. Draw order is fixed: crossover consumes
//! one draw for the coin and, when it fires, one for the cut point; mutation
//! consumes exactly one draw per bit.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::Chromosome;
use crate::random::RandomSource;

// ============================================================================
// Initialization
// ============================================================================

/// Draws a chromosome of `length` independent bits.
pub fn random_chromosome<R: RandomSource>(length: usize, rng: &mut R) -> Chromosome {
    Chromosome::new((0..length).map(|_| rng.next_bit()).collect())
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// With probability `pc`, picks a cut point uniformly in `1..=len-1` and
/// swaps the tails; otherwise returns clones of the parents.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover<R: RandomSource>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    pc: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if rng.next_f64() >= pc || n < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.next_index(1, n - 1);
    (
        splice(parent1, parent2, point),
        splice(parent2, parent1, point),
    )
}

/// Head of `head` up to `point`, tail of `tail` from `point`.
fn splice(head: &Chromosome, tail: &Chromosome, point: usize) -> Chromosome {
    let mut bits = Vec::with_capacity(head.len());
    bits.extend_from_slice(&head.bits()[..point]);
    bits.extend_from_slice(&tail.bits()[point..]);
    Chromosome::new(bits)
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips each bit independently with probability `pm`.
pub fn mutate<R: RandomSource>(chromosome: Chromosome, pm: f64, rng: &mut R) -> Chromosome {
    let bits = chromosome
        .into_bits()
        .into_iter()
        .map(|bit| if rng.next_f64() < pm { !bit } else { bit })
        .collect();
    Chromosome::new(bits)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Lcg;

    struct Scripted(Vec<f64>);

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.0.remove(0)
        }
    }

    fn chromo(s: &str) -> Chromosome {
        s.parse().expect("valid bit string")
    }

    // ---- Initialization ----

    #[test]
    fn test_random_chromosome_length() {
        let mut rng = Lcg::new(42);
        for len in [1, 2, 20, 64] {
            assert_eq!(random_chromosome(len, &mut rng).len(), len);
        }
    }

    #[test]
    fn test_random_chromosome_follows_bit_draws() {
        let mut rng = Scripted(vec![0.1, 0.7, 0.49, 0.5]);
        assert_eq!(random_chromosome(4, &mut rng).to_string(), "1010");
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_swaps_tails() {
        let p1 = chromo("000000");
        let p2 = chromo("111111");
        // Coin 0.1 < 0.8 fires; cut 0.5 → 1 + floor(0.5·5) = 3.
        let mut rng = Scripted(vec![0.1, 0.5]);
        let (c1, c2) = crossover(&p1, &p2, 0.8, &mut rng);
        assert_eq!(c1.to_string(), "000111");
        assert_eq!(c2.to_string(), "111000");
    }

    #[test]
    fn test_crossover_skipped_returns_parents() {
        let p1 = chromo("0101");
        let p2 = chromo("1100");
        // Coin 0.9 ≥ 0.8: no cut point is drawn.
        let mut rng = Scripted(vec![0.9]);
        let (c1, c2) = crossover(&p1, &p2, 0.8, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_crossover_cut_point_bounds() {
        let p1 = chromo("0000000000");
        let p2 = chromo("1111111111");
        let mut rng = Lcg::new(7);
        for _ in 0..500 {
            let (c1, c2) = crossover(&p1, &p2, 1.0, &mut rng);
            // Cut in 1..=9: first bit from own parent, last from the other.
            assert!(!c1.bits()[0] && c1.bits()[9]);
            assert!(c2.bits()[0] && !c2.bits()[9]);
        }
    }

    #[test]
    fn test_crossover_preserves_length_and_bits() {
        let p1 = chromo("10110010011100101011");
        let p2 = chromo("01001101100011010100");
        let mut rng = Lcg::new(123);
        for _ in 0..100 {
            let (c1, c2) = crossover(&p1, &p2, 0.8, &mut rng);
            assert_eq!(c1.len(), 20);
            assert_eq!(c2.len(), 20);
            // Each locus keeps one allele from each parent across the pair.
            for i in 0..20 {
                let mut pair = [c1.bits()[i], c2.bits()[i]];
                let mut parents = [p1.bits()[i], p2.bits()[i]];
                pair.sort();
                parents.sort();
                assert_eq!(pair, parents);
            }
        }
    }

    #[test]
    fn test_crossover_zero_probability() {
        let p1 = chromo("0000");
        let p2 = chromo("1111");
        let mut rng = Lcg::new(5);
        for _ in 0..100 {
            let (c1, c2) = crossover(&p1, &p2, 0.0, &mut rng);
            assert_eq!((c1, c2), (p1.clone(), p2.clone()));
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = Lcg::new(1);
        crossover(&chromo("01"), &chromo("011"), 1.0, &mut rng);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutate_flips_drawn_bits() {
        let mut rng = Scripted(vec![0.5, 0.001, 0.9, 0.0]);
        let out = mutate(chromo("0000"), 0.01, &mut rng);
        assert_eq!(out.to_string(), "0101");
    }

    #[test]
    fn test_mutate_one_draw_per_bit() {
        let mut rng = Lcg::new(99);
        mutate(chromo("0101010101"), 0.5, &mut rng);
        let mut reference = Lcg::new(99);
        for _ in 0..10 {
            reference.next_f64();
        }
        assert_eq!(rng, reference);
    }

    #[test]
    fn test_mutate_extremes() {
        let mut rng = Lcg::new(3);
        let c = chromo("0110");
        assert_eq!(mutate(c.clone(), 0.0, &mut rng), c);
        assert_eq!(mutate(c, 1.0, &mut rng).to_string(), "1001");
    }

    #[test]
    fn test_mutate_rate_statistics() {
        let mut rng = Lcg::new(2024);
        let c = Chromosome::new(vec![false; 10_000]);
        let flipped = mutate(c, 0.1, &mut rng)
            .bits()
            .iter()
            .filter(|&&b| b)
            .count();
        assert!((800..1200).contains(&flipped), "flipped = {flipped}");
    }
}
