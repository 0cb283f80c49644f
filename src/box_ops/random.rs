use rand::Rng;

/// Draws `amount` distinct indices from `0..population` uniformly, returned in
/// ascending order. `amount` is capped at `population`.
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, population: usize, amount: usize) -> Vec<usize> {
    let amount = amount.min(population);
    let mut indices = rand::seq::index::sample(rng, population, amount).into_vec();
    indices.sort_unstable();
    indices
}
