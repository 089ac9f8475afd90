use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use crate::dataset::Fact;
use crate::error::QuizError;
use crate::quiz::question::Variant;

/// Draws `count` wrong-answer facts for `facts[seed]` without replacement.
///
/// Facts whose quizzed aspect matches the seed's, or repeats an aspect already
/// eligible, are left out so the resulting choices stay pairwise distinct.
pub fn sample_incorrect<R: Rng + ?Sized>(
    rng: &mut R,
    facts: &[Fact],
    seed: usize,
    variant: Variant,
    count: usize,
) -> Result<Vec<Fact>, QuizError> {
    let correct = variant.aspect(&facts[seed]);
    let mut seen = HashSet::new();
    seen.insert(correct);

    let pool = facts
        .iter()
        .enumerate()
        .filter(|&(idx, fact)| idx != seed && seen.insert(variant.aspect(fact)))
        .map(|(_, fact)| fact)
        .collect::<Vec<_>>();

    if pool.len() < count {
        return Err(QuizError::InsufficientPool {
            topic: facts[seed].class_name.clone(),
            needed: count,
            available: pool.len(),
        });
    }

    Ok(index::sample(rng, pool.len(), count)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn planets() -> Vec<Fact> {
        vec![
            Fact::new("planet", "earth", "third"),
            Fact::new("planet", "mars", "fourth"),
            Fact::new("planet", "mercury", "first"),
            Fact::new("planet", "venus", "second"),
        ]
    }

    #[test]
    fn test_never_samples_the_seed() {
        let facts = planets();
        let mut rng = StdRng::seed_from_u64(3);
        for seed in 0..facts.len() {
            for _ in 0..20 {
                let picked = sample_incorrect(&mut rng, &facts, seed, Variant::GuessValue, 3).unwrap();
                assert_eq!(picked.len(), 3);
                assert!(!picked.contains(&facts[seed]));
                let distinct: HashSet<_> = picked.iter().collect();
                assert_eq!(distinct.len(), 3);
            }
        }
    }

    #[test]
    fn test_insufficient_pool_fails() {
        let facts = &planets()[..2];
        let mut rng = StdRng::seed_from_u64(3);
        let err = sample_incorrect(&mut rng, facts, 0, Variant::GuessKeyword, 2).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientPool { needed: 2, available: 1, .. }
        ));
    }

    #[test]
    fn test_duplicate_aspects_are_not_eligible() {
        let facts = vec![
            Fact::new("animal", "cat", "mammal"),
            Fact::new("animal", "dog", "mammal"),
            Fact::new("animal", "whale", "mammal"),
            Fact::new("animal", "eagle", "bird"),
        ];
        let mut rng = StdRng::seed_from_u64(9);

        // only "bird" differs from the seed's value
        let picked = sample_incorrect(&mut rng, &facts, 0, Variant::GuessValue, 1).unwrap();
        assert_eq!(picked, vec![facts[3].clone()]);
        assert!(sample_incorrect(&mut rng, &facts, 0, Variant::GuessValue, 2).is_err());

        // keywords are all distinct
        assert_eq!(
            sample_incorrect(&mut rng, &facts, 0, Variant::GuessKeyword, 3).unwrap().len(),
            3
        );
    }

    #[test]
    fn test_zero_count_is_empty() {
        let facts = &planets()[..1];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_incorrect(&mut rng, facts, 0, Variant::GuessValue, 0)
            .unwrap()
            .is_empty());
    }
}
