//! Small numeric helpers that commonly sit next to noise sampling:
//! random integers in a range, clamping, range remapping and shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns `floor(u * (n2 - n1) + n1)` for `u` drawn uniformly from `[0, 1)`.
///
/// For `n1 < n2` with integral bounds the result lies in `n1..n2`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, n1: f64, n2: f64) -> f64 {
    let u: f64 = rng.gen();
    (u * (n2 - n1) + n1).floor()
}

/// Limits `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: if `min > max` the result is `max`,
/// and a NaN `value` comes back as `min`.
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Rescales `n` from the range `start1..stop1` to `start2..stop2`.
///
/// The result is constrained to the target range, whichever direction it runs.
///
/// ```
/// use cosiest_lattice::math::map_range;
///
/// assert_eq!(map_range(5., 0., 10., 0., 100.), 50.);
/// assert_eq!(map_range(20., 0., 10., 0., 100.), 100.);
/// assert_eq!(map_range(2.5, 0., 10., 1., 0.), 0.75);
/// ```
pub fn map_range(n: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    let mapped = (n - start1) / (stop1 - start1) * (stop2 - start2) + start2;
    if start2 < stop2 {
        constrain(mapped, start2, stop2)
    } else {
        constrain(mapped, stop2, start2)
    }
}

/// Caps the magnitude of `number` at `limit` while keeping its sign.
pub fn limit_magnitude(number: f64, limit: f64) -> f64 {
    let sign = if number < 0. { -1. } else { 1. };
    let mut magnitude = number.abs();
    if magnitude > limit {
        magnitude = limit;
    }
    magnitude * sign
}

/// `[0, 1, .., len - 1]`
pub fn range(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_random_between_stays_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let value = random_between(&mut rng, -4., 9.);
            assert!((-4. ..9.).contains(&value));
            assert_eq!(value, value.floor());
        }
    }

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(5., 0., 10.), 5.);
        assert_eq!(constrain(-1., 0., 10.), 0.);
        assert_eq!(constrain(11., 0., 10.), 10.);
        assert_eq!(constrain(5., 10., 0.), 0.);
        assert_eq!(constrain(f64::NAN, 0., 10.), 0.);
    }

    #[test]
    fn test_map_range_clamps_both_directions() {
        assert_eq!(map_range(-5., 0., 10., 0., 100.), 0.);
        assert_eq!(map_range(0., 0., 10., 100., 0.), 100.);
        assert_eq!(map_range(15., 0., 10., 100., 0.), 0.);
        assert_eq!(map_range(0.5, 0., 1., -1., 1.), 0.);
    }

    #[test]
    fn test_limit_magnitude_keeps_sign() {
        assert_eq!(limit_magnitude(7., 5.), 5.);
        assert_eq!(limit_magnitude(-7., 5.), -5.);
        assert_eq!(limit_magnitude(-3., 5.), -3.);
        assert_eq!(limit_magnitude(0., 5.), 0.);
    }

    #[test]
    fn test_range() {
        assert_eq!(range(4), vec![0, 1, 2, 3]);
        assert!(range(0).is_empty());
    }

    #[test]
    fn test_shuffle_is_a_permutation_of_a_copy() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let items = range(32);
        let mut shuffled = shuffle(&mut rng, &items);
        assert_eq!(items, range(32));
        assert_ne!(shuffled, items);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_shuffle_is_reproducible_for_a_seed() {
        let items = range(16);
        let a = shuffle(&mut ChaCha20Rng::seed_from_u64(5), &items);
        let b = shuffle(&mut ChaCha20Rng::seed_from_u64(5), &items);
        assert_eq!(a, b);
    }
}
