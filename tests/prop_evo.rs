//! Property-based tests for the evolution operators.
//!
//! Run with: PROPTEST_CASES=10000 cargo test --release prop_evo

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use weasel::evo::{
    crossover, evaluate, max_score, mutate, score, select_parent, Alphabet, Genome,
    MutationConfig, SelectionConfig,
};

const CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', ' ',
];

/// A pair of equal-length random character vectors.
fn genome_pair() -> impl Strategy<Value = (Vec<char>, Vec<char>)> {
    (1usize..24).prop_flat_map(|len| {
        (
            prop::collection::vec(prop::sample::select(CHARS), len),
            prop::collection::vec(prop::sample::select(CHARS), len),
        )
    })
}

/// A population of equal-length random genomes.
fn population() -> impl Strategy<Value = Vec<Vec<char>>> {
    (1usize..12, 1usize..16).prop_flat_map(|(len, size)| {
        prop::collection::vec(prop::collection::vec(prop::sample::select(CHARS), len), size)
    })
}

proptest! {
    /// Fitness is bounded by the square of the length, and only the target
    /// itself reaches the bound.
    #[test]
    fn fitness_is_bounded_and_maximal_iff_target((g, t) in genome_pair()) {
        let genome = Genome::from_chars(&g);
        let target = Genome::from_chars(&t);

        let value = score(&genome, &target);
        prop_assert!(value <= max_score(target.len()));
        prop_assert_eq!(value == max_score(target.len()), genome == target);
    }

    /// The selector never fabricates genomes, whatever the fitness
    /// distribution looks like.
    #[test]
    fn selector_returns_population_member(words in population(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pop: Vec<Genome> = words.iter().map(|w| Genome::from_chars(w)).collect();
        let target = pop[0].clone();
        let (pool, fittest) = evaluate(&pop, &target);
        let config = SelectionConfig::default();

        let parent = select_parent(&pop, &pool, fittest, &config, &mut rng);
        prop_assert!(pop.contains(parent));
    }

    /// All-zero scores degenerate to uniform choice and still return a
    /// member.
    #[test]
    fn selector_handles_all_zero_scores(words in population(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pop: Vec<Genome> = words.iter().map(|w| Genome::from_chars(w)).collect();
        let pool = vec![0u64; pop.len()];
        let config = SelectionConfig::default();

        let parent = select_parent(&pop, &pool, 0, &config, &mut rng);
        prop_assert!(pop.contains(parent));
    }

    /// The child has the parents' length and every position comes from one
    /// of the parents.
    #[test]
    fn crossover_child_originates_from_parents((g1, g2) in genome_pair(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let p1 = Genome::from_chars(&g1);
        let p2 = Genome::from_chars(&g2);

        let child = crossover(&p1, &p2, &mut rng);
        prop_assert_eq!(child.len(), p1.len());
        for (i, &c) in child.chars().iter().enumerate() {
            prop_assert!(c == p1.chars()[i] || c == p2.chars()[i]);
        }
    }

    /// With a zero mutation rate, breeding identical parents is the
    /// identity: no novel characters can appear.
    #[test]
    fn zero_mutation_rate_is_deterministic(g in prop::collection::vec(prop::sample::select(CHARS), 1..24), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let parent = Genome::from_chars(&g);
        let alphabet = Alphabet::new("abcdefghijklmnopqrstuvwxyz ");
        let config = MutationConfig { rate: 0.0 };

        let mut child = crossover(&parent, &parent, &mut rng);
        mutate(&mut child, &alphabet, &config, &mut rng);
        prop_assert_eq!(child, parent);
    }

    /// The evaluated fittest index always points at the pool maximum, and
    /// ties resolve to the lowest index.
    #[test]
    fn fittest_index_is_first_argmax(words in population()) {
        let pop: Vec<Genome> = words.iter().map(|w| Genome::from_chars(w)).collect();
        let target = pop[pop.len() / 2].clone();

        let (pool, fittest) = evaluate(&pop, &target);
        let best = pool.iter().copied().max().unwrap();
        prop_assert_eq!(pool[fittest], best);
        prop_assert_eq!(pool.iter().position(|&v| v == best).unwrap(), fittest);
    }
}
