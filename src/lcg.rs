//! Linear congruential generator used to fill the noise lattice from a seed.
//!
//! Uses the Numerical Recipes constants `z' = (1664525 * z + 1013904223) mod 2^32`.
//! This is not a cryptographic generator; it exists so that a `u32` seed maps to
//! the same lattice on every host.

use rand_chacha::rand_core::{impls, Error, RngCore, SeedableRng};

/// Multiplier `a` of the recurrence.
pub const MULTIPLIER: u32 = 1_664_525;
/// Increment `c` of the recurrence.
pub const INCREMENT: u32 = 1_013_904_223;
/// Modulus `m` of the recurrence, as a float for scaling draws into `[0, 1)`.
pub const MODULUS: f64 = 4_294_967_296.0;

/// Advances the generator state once.
///
/// Returns the draw scaled into `[0, 1)` together with the next state.
///
/// ```
/// let (value, z) = cosiest_lattice::lcg::step(1);
/// assert_eq!(z, 1_015_568_748);
/// assert!((0.0..1.0).contains(&value));
/// ```
#[inline]
pub fn step(z: u32) -> (f64, u32) {
    let next = z.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    (f64::from(next) / MODULUS, next)
}

/// Stateful wrapper around [`step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
    z: u32,
}

impl Lcg {
    /// Constructs a generator whose state starts at `seed`.
    pub fn new(seed: u32) -> Self {
        Self { seed, z: seed }
    }

    /// The seed this generator was constructed with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advances the state and returns it.
    pub fn next_u32(&mut self) -> u32 {
        let (_, z) = step(self.z);
        self.z = z;
        z
    }

    /// Advances the state and returns it scaled into `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let (value, z) = step(self.z);
        self.z = z;
        value
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        Lcg::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        // Truncate like an unsigned 32-bit cast.
        Self::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence_from_seed_one() {
        let mut lcg = Lcg::new(1);
        assert_eq!(lcg.next_u32(), 1_015_568_748);
        assert_eq!(lcg.next_u32(), 1_586_005_467);
        assert_eq!(lcg.next_u32(), 2_165_703_038);
    }

    #[test]
    fn test_float_draws_match_integer_state() {
        let mut ints = Lcg::new(99);
        let mut floats = Lcg::new(99);
        for _ in 0..64 {
            let z = ints.next_u32();
            assert_eq!(floats.next_f64(), f64::from(z) / MODULUS);
        }
        assert_eq!(ints, floats);
    }

    #[test]
    fn test_draws_stay_below_one() {
        // u32::MAX is the largest state the generator can land on.
        assert!(f64::from(u32::MAX) / MODULUS < 1.0);

        let mut lcg = Lcg::new(0);
        for _ in 0..10_000 {
            let value = lcg.next_f64();
            assert!((0.0..1.0).contains(&value), "draw {value} out of range");
        }
    }

    #[test]
    fn test_step_is_pure() {
        assert_eq!(step(7), step(7));
        let mut lcg = Lcg::new(7);
        let (value, z) = step(7);
        assert_eq!(lcg.next_f64(), value);
        assert_eq!(lcg.next_u32(), step(z).1);
    }

    #[test]
    fn test_seed_is_remembered() {
        let mut lcg = Lcg::new(42);
        lcg.next_u32();
        assert_eq!(lcg.seed(), 42);
    }

    #[test]
    fn test_seedable_uses_little_endian_bytes() {
        let mut from_bytes = Lcg::from_seed(1u32.to_le_bytes());
        let mut from_u64 = Lcg::seed_from_u64(1 << 32 | 1);
        assert_eq!(from_bytes.seed(), 1);
        assert_eq!(from_u64.seed(), 1);
        assert_eq!(RngCore::next_u32(&mut from_bytes), 1_015_568_748);
        assert_eq!(RngCore::next_u32(&mut from_u64), 1_015_568_748);
    }
}
