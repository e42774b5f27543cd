//! Crossover operator for the string-evolution algorithm.
//!
//! Single-point recombination: a random midpoint splits both parents, and
//! one of the two possible head/tail splices is returned. Choosing between
//! the two splices uniformly avoids a positional bias toward either parent.

use crate::evo::genome::Genome;
use rand::Rng;

/// Recombine two parents into one child.
///
/// The midpoint is drawn uniformly from `[0, L-1]`. The two candidate
/// children are `parent1[..m] + parent2[m..]` and `parent2[..m] +
/// parent1[m..]`; one is returned with equal probability. Every character of
/// the child originates from one of the parents.
///
/// # Panics
///
/// Panics if the parents have different lengths or are empty. Mismatched
/// parents are a contract violation; the engine only breeds genomes of the
/// target's length.
#[must_use]
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Genome {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "crossover parents must have equal length"
    );

    let midpoint = rng.gen_range(0..parent1.len());

    if rng.gen_bool(0.5) {
        splice(parent1, parent2, midpoint)
    } else {
        splice(parent2, parent1, midpoint)
    }
}

/// Head of one parent followed by the tail of the other.
fn splice(head: &Genome, tail: &Genome, midpoint: usize) -> Genome {
    let mut chars = head.chars()[..midpoint].to_vec();
    chars.extend_from_slice(&tail.chars()[midpoint..]);
    Genome::from_chars(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_child_has_parent_length() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Genome::from("aaaaaa");
        let p2 = Genome::from("bbbbbb");

        for _ in 0..50 {
            let child = crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), 6);
        }
    }

    #[test]
    fn test_every_position_comes_from_a_parent() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p1 = Genome::from("abcdef");
        let p2 = Genome::from("uvwxyz");

        for _ in 0..100 {
            let child = crossover(&p1, &p2, &mut rng);
            for (i, &c) in child.chars().iter().enumerate() {
                assert!(c == p1.chars()[i] || c == p2.chars()[i]);
            }
        }
    }

    #[test]
    fn test_child_is_a_single_point_splice() {
        let mut rng = SmallRng::seed_from_u64(123);
        let p1 = Genome::from("aaaa");
        let p2 = Genome::from("bbbb");

        for _ in 0..100 {
            let child = crossover(&p1, &p2, &mut rng);
            // The child must switch source at most once.
            let switches = child
                .chars()
                .windows(2)
                .filter(|w| w[0] != w[1])
                .count();
            assert!(switches <= 1, "child {child} is not a one-point splice");
        }
    }

    #[test]
    fn test_self_crossover_is_identity() {
        let mut rng = SmallRng::seed_from_u64(9);
        let p = Genome::from("same");

        let child = crossover(&p, &p, &mut rng);
        assert_eq!(child, p);
    }

    #[test]
    #[should_panic(expected = "crossover parents must have equal length")]
    fn test_mismatched_parents_panic() {
        let mut rng = SmallRng::seed_from_u64(0);
        let _ = crossover(&Genome::from("ab"), &Genome::from("abc"), &mut rng);
    }
}
