use rand_core::Rng;
use std::{fmt, str::FromStr};

/// Packet emission policy for the simulated sender.
///
/// Each tick the active sender asks this policy whether to put a new
/// data packet on the link. The default draws at the reference rate of
/// 10% per tick; [`SpawnPolicy::Always`] and [`SpawnPolicy::Never`]
/// make a run fully deterministic, which is what scenario tests use to
/// force the buffer into (or keep it out of) congestion.
///
/// # Example
///
/// ```
/// use flowsim_core::SpawnPolicy;
///
/// // reference behavior, 10% per tick
/// let reference = SpawnPolicy::default();
/// assert_eq!(reference.to_string(), "10%");
///
/// // parsed from a percentage
/// let heavy: SpawnPolicy = "75%".parse().unwrap();
/// assert_eq!(heavy, SpawnPolicy::rate(0.75).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnPolicy {
    /// Never emit. The link carries only burst-injected packets.
    Never,
    /// Emit a packet on every tick.
    Always,
    /// Random emission at the given per-tick probability.
    ///
    /// Use [`SpawnPolicy::rate`] to construct this variant — it
    /// validates the value at creation time.
    Rate(SpawnRate),
}

/// A validated per-tick spawn probability in the range `[0.0, 1.0]`.
///
/// Constructed via [`SpawnPolicy::rate`] which rejects NaN, negative,
/// and out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRate(f64);

impl SpawnPolicy {
    /// Create a `SpawnPolicy::Rate` with a validated probability.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is not in `[0.0, 1.0]` (including NaN).
    pub fn rate(rate: f64) -> Result<Self, SpawnRateError> {
        Ok(SpawnPolicy::Rate(SpawnRate::new(rate)?))
    }

    /// Returns `true` if the sender should emit a packet this tick.
    ///
    /// The caller provides `rng` so that all simulation randomness is
    /// drawn from the single seedable generator owned by
    /// [`Simulation`]. Any [`Rng`] works, keeping the policy
    /// independent of the concrete generator.
    ///
    /// [`Simulation`]: crate::Simulation
    pub fn should_spawn<R: Rng>(&self, rng: &mut R) -> bool {
        match self {
            SpawnPolicy::Never => false,
            SpawnPolicy::Always => true,
            SpawnPolicy::Rate(rate) => {
                let bits = rng.next_u64();
                let sample = (bits as f64) * (1.0 / (u64::MAX as f64 + 1.0));
                sample < rate.0
            }
        }
    }
}

impl Default for SpawnPolicy {
    /// The reference emission rate: 10% per tick.
    fn default() -> Self {
        SpawnPolicy::Rate(SpawnRate(crate::defaults::SPAWN_PROBABILITY))
    }
}

impl fmt::Display for SpawnPolicy {
    /// Formats as a percentage with up to 2 decimal places.
    ///
    /// - `SpawnPolicy::Never` → `"0%"`
    /// - `SpawnPolicy::Always` → `"100%"`
    /// - `SpawnPolicy::Rate(0.1)` → `"10%"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnPolicy::Never => write!(f, "0%"),
            SpawnPolicy::Always => write!(f, "100%"),
            SpawnPolicy::Rate(rate) => write!(f, "{rate}"),
        }
    }
}

impl FromStr for SpawnPolicy {
    type Err = SpawnParseError;

    /// Parses a percentage string like `"0%"`, `"10%"`, `"12.30%"`,
    /// `"100%"`. The `%` suffix is required. `"0%"` parses to
    /// [`SpawnPolicy::Never`] and `"100%"` to [`SpawnPolicy::Always`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(num) = s.strip_suffix('%') else {
            return Err(SpawnParseError::MissingSuffix);
        };
        let pct: f64 = num
            .trim()
            .parse()
            .map_err(|_| SpawnParseError::InvalidNumber)?;
        let rate = pct / 100.0;
        if rate == 0.0 {
            return Ok(SpawnPolicy::Never);
        }
        if rate == 1.0 {
            return Ok(SpawnPolicy::Always);
        }
        SpawnPolicy::rate(rate).map_err(SpawnParseError::OutOfRange)
    }
}

impl SpawnRate {
    /// Create a new validated rate.
    ///
    /// # Errors
    ///
    /// Returns [`SpawnRateError`] if `rate` is NaN, negative, or greater
    /// than `1.0`.
    pub fn new(rate: f64) -> Result<Self, SpawnRateError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(SpawnRateError(rate));
        }
        Ok(Self(rate))
    }

    /// Returns the inner `f64` value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SpawnRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = self.0 * 100.0;
        // If the percentage is a whole number, skip decimal places.
        if pct.fract() == 0.0 {
            write!(f, "{}%", pct as u64)
        } else {
            write!(f, "{:.2}%", pct)
        }
    }
}

/// Error returned when constructing a [`SpawnRate`] with a value
/// outside `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("spawn rate must be in [0.0, 1.0], got {0}")]
pub struct SpawnRateError(f64);

/// Error returned when parsing a [`SpawnPolicy`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpawnParseError {
    /// The string does not end with `%`.
    #[error("expected '%' suffix")]
    MissingSuffix,
    /// The numeric part could not be parsed as a float.
    #[error("invalid number before '%'")]
    InvalidNumber,
    /// The parsed percentage is outside `[0, 100]`.
    #[error("{0}")]
    OutOfRange(#[from] SpawnRateError),
}
