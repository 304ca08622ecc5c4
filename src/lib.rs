#![deny(missing_docs)]
//! # Cosiest Lattice
//!
//! `cosiest_lattice` generates smooth, multi-octave value noise in up to 3 dimensions
//! from a reseedable lattice of 4096 random values.
//! # Examples
//! ```
//! use cosiest_lattice::NoiseEngine;
//!
//! let mut engine = NoiseEngine::new();
//! engine.reseed(Some(1));
//! let noise: f64 = engine.evaluate(1.5, 2.25, 0.75);
//! assert_eq!(noise, engine.evaluate(-1.5, -2.25, -0.75));
//! ```
//!
//! # Crate Features
//! **f32** - Enables using f32 when computing the eased interpolation weights instead of the default f64.
//!

pub mod delimited;
pub mod lcg;
pub mod math;

use cfg_if::cfg_if;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::f64::consts::PI;

pub use lcg::Lcg;

cfg_if! {
    if #[cfg(all(feature="f32"))]{
        type Interpolator = f32;
    }else{
        type Interpolator = f64;
    }
}

/// Number of values in the lattice.
pub const LATTICE_LEN: usize = 4096;
/// Mask applied to every lattice offset. Only valid because [`LATTICE_LEN`] is a power of two.
const LATTICE_MASK: u32 = LATTICE_LEN as u32 - 1;
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: u32 = 1 << Y_WRAP_BITS;
const Z_WRAP_BITS: u32 = 8;
const Z_WRAP: u32 = 1 << Z_WRAP_BITS;
const CELL_MODULUS: f64 = 4_294_967_296.0;

/// Octave count and per-octave amplitude falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseConfig {
    /// How many octaves of noise to sum. Always at least 1.
    pub octaves: usize,
    /// Factor the amplitude is multiplied by after each octave, usually in `(0, 1]`.
    pub falloff: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 4,
            falloff: 0.5,
        }
    }
}

/// The random values noise is interpolated from.
#[derive(Clone, Debug, PartialEq)]
pub enum Lattice {
    /// Nothing has been sampled or seeded yet.
    Uninitialized,
    /// Filled either lazily with random values or by [`NoiseEngine::reseed`].
    Ready(Box<[f64; LATTICE_LEN]>),
}

impl Lattice {
    /// The lattice values, if initialized.
    pub fn values(&self) -> Option<&[f64; LATTICE_LEN]> {
        match self {
            Lattice::Uninitialized => None,
            Lattice::Ready(values) => Some(values),
        }
    }

    /// Whether the lattice has been filled.
    pub fn is_ready(&self) -> bool {
        matches!(self, Lattice::Ready(_))
    }

    fn filled_with(mut next: impl FnMut() -> f64) -> Self {
        let mut values = Box::new([0.; LATTICE_LEN]);
        for value in values.iter_mut() {
            *value = next();
        }
        Lattice::Ready(values)
    }
}

/// A 3D value noise generator over a wrap-around lattice.
///
/// # Examples
/// ```
/// use cosiest_lattice::NoiseEngine;
///
/// let mut engine = NoiseEngine::new();
/// engine.configure(Some(6), Some(0.4));
/// engine.reseed(Some(2));
/// let noise: f64 = engine.evaluate_2d(12.5, 3.25);
/// ```
///
/// The lattice is filled lazily on the first [`evaluate`](Self::evaluate) from the engine's
/// ChaCha20 source unless [`reseed`](Self::reseed) was called first. Noise is symmetric about 0
/// on every axis and is not normalized: with the default configuration it stays within `[0, 1)`,
/// other configurations can exceed it.
#[derive(Clone, Debug)]
pub struct NoiseEngine {
    /// Drawn from for the lazy fill and for seeds when none is given to `reseed`.
    rng: ChaCha20Rng,
    config: NoiseConfig,
    lattice: Lattice,
    seed: Option<u32>,
}

impl Default for NoiseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseEngine {
    /// Constructs a NoiseEngine with a ChaCha20 source seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(ChaCha20Rng::from_entropy())
    }

    /// Constructs a NoiseEngine with a ChaCha20 source seeded with the seed
    ///
    /// This makes the lazy fill, and reseeding without a seed, reproducible.
    pub fn from_u64_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Constructs a NoiseEngine from an existing RNG source
    pub fn from_rng(rng: ChaCha20Rng) -> Self {
        Self {
            rng,
            config: NoiseConfig::default(),
            lattice: Lattice::Uninitialized,
            seed: None,
        }
    }

    /// Replaces the configuration, clamping the octave count to at least 1.
    ///
    /// A non-positive or NaN falloff is ignored, as in [`configure`](Self::configure).
    pub fn with_config(mut self, config: NoiseConfig) -> Self {
        self.config.octaves = config.octaves.max(1);
        if config.falloff > 0. {
            self.config.falloff = config.falloff;
        } else {
            trace!("ignoring non-positive falloff {}", config.falloff);
        }
        self
    }

    /// The current configuration.
    pub fn config(&self) -> NoiseConfig {
        self.config
    }

    /// The lattice and whether it has been initialized.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The seed passed to (or drawn by) the most recent [`reseed`](Self::reseed).
    ///
    /// `None` when the lattice is uninitialized or was filled lazily.
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Updates the octave count and/or the falloff.
    ///
    /// A `None` or non-positive value leaves that parameter untouched. The lattice is never
    /// affected.
    pub fn configure(&mut self, octaves: Option<i32>, falloff: Option<f64>) {
        match octaves {
            Some(octaves) if octaves > 0 => self.config.octaves = octaves as usize,
            Some(octaves) => trace!("ignoring non-positive octave count {octaves}"),
            None => {}
        }
        match falloff {
            Some(falloff) if falloff > 0. => self.config.falloff = falloff,
            Some(falloff) => trace!("ignoring non-positive falloff {falloff}"),
            None => {}
        }
    }

    /// Refills the whole lattice from a [`Lcg`] seeded with `seed`, discarding any previous values.
    ///
    /// When `seed` is `None` one is drawn from the engine's ChaCha20 source. The same seed always
    /// produces the same lattice, and so the same noise.
    pub fn reseed(&mut self, seed: Option<u32>) {
        let seed = seed.unwrap_or_else(|| self.rng.gen());
        debug!("reseeding lattice with seed {seed}");
        let mut lcg = Lcg::new(seed);
        self.lattice = Lattice::filled_with(|| lcg.next_f64());
        self.seed = Some(seed);
    }

    /// Samples noise at `(x, y, z)`, initializing the lattice first if needed.
    ///
    /// Negative coordinates are reflected, so `evaluate(x, y, z) == evaluate(-x, -y, -z)`.
    pub fn evaluate(&mut self, x: f64, y: f64, z: f64) -> f64 {
        let config = self.config;
        sample(self.ready_lattice(), &config, x, y, z)
    }

    /// Samples noise at `(x, y, 0)`.
    pub fn evaluate_2d(&mut self, x: f64, y: f64) -> f64 {
        self.evaluate(x, y, 0.)
    }

    /// Samples noise at `(x, 0, 0)`.
    pub fn evaluate_1d(&mut self, x: f64) -> f64 {
        self.evaluate(x, 0., 0.)
    }

    /// Fills `buffer` with 1D noise sampled at `start`, `start + step`, `start + 2 * step`, ...
    ///
    /// Each value equals the matching [`evaluate_1d`](Self::evaluate_1d).
    pub fn fill_1d(&mut self, start: f64, step: f64, buffer: &mut [f64]) {
        let config = self.config;
        let lattice = self.ready_lattice();
        for (i, value) in buffer.iter_mut().enumerate() {
            *value = sample(lattice, &config, start + i as f64 * step, 0., 0.);
        }
    }

    fn ready_lattice(&mut self) -> &[f64; LATTICE_LEN] {
        match self.lattice {
            Lattice::Ready(ref values) => &**values,
            Lattice::Uninitialized => {
                debug!("lazily filling lattice with random values");
                let rng = &mut self.rng;
                self.lattice = Lattice::filled_with(|| rng.gen());
                self.ready_lattice()
            }
        }
    }
}

/// Cosine easing, `0.5 * (1 - cos(PI * t))`.
#[inline]
fn eased(t: f64) -> f64 {
    let t = t as Interpolator;
    f64::from(0.5 * (1. - (t * PI as Interpolator).cos()))
}

/// Integer lattice cell and fractional offset along one axis.
#[derive(Clone, Copy)]
struct Axis {
    cell: u32,
    frac: f64,
}

impl Axis {
    fn new(coordinate: f64) -> Self {
        let coordinate = coordinate.abs();
        let floor = coordinate.floor();
        Self {
            // Only the low bits survive masking, so keep them rather than saturate.
            cell: floor.rem_euclid(CELL_MODULUS) as u32,
            frac: coordinate - floor,
        }
    }

    /// Doubles the frequency, carrying a fraction that reaches 1 into the cell.
    fn next_octave(&mut self) {
        self.cell <<= 1;
        self.frac *= 2.;
        if self.frac >= 1. {
            self.cell = self.cell.wrapping_add(1);
            self.frac -= 1.;
        }
    }
}

fn sample(lattice: &[f64; LATTICE_LEN], config: &NoiseConfig, x: f64, y: f64, z: f64) -> f64 {
    let at = |offset: u32| lattice[(offset & LATTICE_MASK) as usize];
    let (mut x, mut y, mut z) = (Axis::new(x), Axis::new(y), Axis::new(z));
    let mut result = 0.;
    let mut amplitude = 0.5;

    for _ in 0..config.octaves {
        let mut offset = x
            .cell
            .wrapping_add(y.cell << Y_WRAP_BITS)
            .wrapping_add(z.cell << Z_WRAP_BITS);
        let rx = eased(x.frac);
        let ry = eased(y.frac);

        let mut n1 = at(offset);
        n1 += rx * (at(offset.wrapping_add(1)) - n1);
        let mut n2 = at(offset.wrapping_add(Y_WRAP));
        n2 += rx * (at(offset.wrapping_add(Y_WRAP + 1)) - n2);
        n1 += ry * (n2 - n1);

        offset = offset.wrapping_add(Z_WRAP);
        n2 = at(offset);
        n2 += rx * (at(offset.wrapping_add(1)) - n2);
        let mut n3 = at(offset.wrapping_add(Y_WRAP));
        n3 += rx * (at(offset.wrapping_add(Y_WRAP + 1)) - n3);
        n2 += ry * (n3 - n2);

        n1 += eased(z.frac) * (n2 - n1);

        result += n1 * amplitude;
        amplitude *= config.falloff;
        x.next_octave();
        y.next_octave();
        z.next_octave();
    }
    result
}
