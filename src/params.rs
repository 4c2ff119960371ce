//! Hash function parameters and the neighbourhood move.
//!
//! A [`HashParams`] describes the hash `h(k) = (a * k + b) mod capacity`
//! together with the initial table capacity `m`. Values are immutable:
//! every search step builds a new one through [`perturb`].

use std::fmt;

use rand::Rng;

/// Smallest capacity a table may start with.
pub const MIN_CAPACITY: u64 = 2;

/// Range sampled for `a` and `b` by [`HashParams::random`].
pub const COEFFICIENT_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Range sampled for `m` by [`HashParams::random`].
pub const CAPACITY_RANGE: std::ops::RangeInclusive<u64> = 8..=32;

/// Parameters of a linear-congruential hash for a resizing table.
///
/// `m` is clamped to [`MIN_CAPACITY`] on construction, so no value of this
/// type can make the table's modulo divide by zero. `a` and `b` are free
/// and may drift non-positive during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawParams", into = "RawParams")
)]
pub struct HashParams {
    a: i64,
    b: i64,
    m: u64,
}

impl HashParams {
    /// Creates parameters, flooring `m` at [`MIN_CAPACITY`].
    pub fn new(a: i64, b: i64, m: u64) -> Self {
        Self {
            a,
            b,
            m: m.max(MIN_CAPACITY),
        }
    }

    /// Draws `a, b` from [`COEFFICIENT_RANGE`] and `m` from [`CAPACITY_RANGE`].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let a = rng.random_range(COEFFICIENT_RANGE);
        let b = rng.random_range(COEFFICIENT_RANGE);
        let m = rng.random_range(CAPACITY_RANGE);
        Self::new(a, b, m)
    }

    /// Truncates a real-valued point `[a, b, m]` toward zero.
    ///
    /// `m` is then floored at [`MIN_CAPACITY`] as in [`capacity_from_real`].
    /// Out-of-range values saturate and `NaN` maps to zero.
    pub fn from_point(point: [f64; 3]) -> Self {
        Self::new(point[0] as i64, point[1] as i64, capacity_from_real(point[2]))
    }

    /// The parameters as a real-valued point `[a, b, m]`.
    pub fn to_point(&self) -> [f64; 3] {
        [self.a as f64, self.b as f64, self.m as f64]
    }

    /// Multiplier.
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Additive offset.
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Initial table capacity.
    pub fn m(&self) -> u64 {
        self.m
    }
}

impl fmt::Display for HashParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{a: {}, b: {}, m: {}}}", self.a, self.b, self.m)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawParams {
    a: i64,
    b: i64,
    m: u64,
}

#[cfg(feature = "serde")]
impl From<RawParams> for HashParams {
    fn from(raw: RawParams) -> Self {
        HashParams::new(raw.a, raw.b, raw.m)
    }
}

#[cfg(feature = "serde")]
impl From<HashParams> for RawParams {
    fn from(p: HashParams) -> Self {
        RawParams {
            a: p.a,
            b: p.b,
            m: p.m,
        }
    }
}

/// Integer capacity of a real coordinate: truncated, floored at
/// [`MIN_CAPACITY`].
pub fn capacity_from_real(m: f64) -> u64 {
    (m as u64).max(MIN_CAPACITY)
}

/// Moves each of `a`, `b` and `m` by `+step` or `-step`.
///
/// The sign is a fair coin flipped independently per field, in the order
/// `a`, `b`, `m`. Only `m` is clamped (at [`MIN_CAPACITY`]).
pub fn perturb<R: Rng>(params: &HashParams, step: i64, rng: &mut R) -> HashParams {
    let mut shift = || if rng.random_bool(0.5) { step } else { -step };

    let a = params.a.saturating_add(shift());
    let b = params.b.saturating_add(shift());
    let m = (params.m as i128 + shift() as i128).clamp(MIN_CAPACITY as i128, u64::MAX as i128);

    HashParams::new(a, b, m as u64)
}
