//! Permutation operators for the tour genetic algorithm.
//!
//! Every operator keeps its output a permutation of the input indices. Each
//! one documents the exact random draws it makes, in order, so that runs are
//! reproducible from a seeded generator.

use rand::Rng;

/// A tour paired with its length, as ranked within a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    /// City indices in visiting order.
    pub route: Vec<usize>,
    /// Closed-tour length of `route`.
    pub distance: f64,
}

/// Uniform random permutation of `0..n` by Fisher-Yates.
///
/// Draws `random_range(0..=j)` for `j = n-1` down to `1`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for j in (1..n).rev() {
        let k = rng.random_range(0..=j);
        perm.swap(j, k);
    }
    perm
}

/// Tournament selection with replacement.
///
/// Draws `tournament_size` indices with `random_range(0..population.len())`
/// and returns the entrant with the smallest distance; the earliest draw wins
/// ties. `population` must be non-empty.
pub fn tournament_select<'a, R: Rng + ?Sized>(
    population: &'a [Scored],
    tournament_size: usize,
    rng: &mut R,
) -> &'a Scored {
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..tournament_size {
        let competitor = &population[rng.random_range(0..population.len())];
        if competitor.distance < best.distance {
            best = competitor;
        }
    }
    best
}

/// Order crossover (OX1), producing one child.
///
/// Draws `start = random_range(0..len)` then
/// `end = start + random_range(0..len - start)`, copies `parent1[start..=end]`
/// into the same positions of the child, and fills the remaining positions
/// left to right with `parent2`'s cities in `parent2`'s order, skipping cities
/// already placed.
///
/// Both parents must be permutations of `0..len`. Empty parents yield an
/// empty child without drawing.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::operators::order_crossover;
///
/// let mut rng = u_numflow::random::create_rng(3);
/// let child = order_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &mut rng);
/// let mut sorted = child.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn order_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let len = parent1.len();
    if len == 0 {
        return Vec::new();
    }
    let start = rng.random_range(0..len);
    let end = start + rng.random_range(0..len - start);
    order_crossover_segment(parent1, parent2, start, end)
}

/// OX1 with an explicit inclusive segment `[start, end]` taken from `parent1`.
pub fn order_crossover_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let len = parent1.len();
    let mut child: Vec<Option<usize>> = vec![None; len];
    let mut placed = vec![false; len];

    for i in start..=end {
        child[i] = Some(parent1[i]);
        placed[parent1[i]] = true;
    }

    let mut donor = parent2.iter().copied();
    for slot in child.iter_mut().filter(|s| s.is_none()) {
        if let Some(city) = donor.by_ref().find(|&c| !placed[c]) {
            placed[city] = true;
            *slot = Some(city);
        }
    }

    child.into_iter().flatten().collect()
}

/// Swaps two uniformly random positions (which may coincide).
///
/// Draws `random_range(0..len)` twice. No draw is made for an empty route.
pub fn swap_mutation<R: Rng + ?Sized>(route: &mut [usize], rng: &mut R) {
    if route.is_empty() {
        return;
    }
    let i = rng.random_range(0..route.len());
    let j = rng.random_range(0..route.len());
    route.swap(i, j);
}

/// Rolls `random::<f64>() < rate` and applies [`swap_mutation`] on a hit.
///
/// Returns `true` if the route was mutated.
pub fn maybe_mutate<R: Rng + ?Sized>(route: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random::<f64>() < rate {
        swap_mutation(route, rng);
        true
    } else {
        false
    }
}
