/// Receiver ingress buffer occupancy, as a percentage.
///
/// The gauge is clamped to `[0, 100]` on every mutation: no sequence of
/// [`fill`], [`drain`] or [`set_level`] calls can push it outside that
/// range. Unlike a byte-counting gauge there is no reservation step —
/// the simulation fills and drains it directly, and overshoot is simply
/// absorbed by the clamp (a full buffer stays full, an empty one stays
/// empty).
///
/// The gauge is plain owned data, not shared: the [`Simulation`] is the
/// single writer and readers only ever see copied-out snapshots.
///
/// # Example
///
/// ```
/// use flowsim_core::BufferGauge;
///
/// let mut gauge = BufferGauge::new(95.0);
/// gauge.fill(10.0);
/// assert_eq!(gauge.level(), 100.0);
/// gauge.drain(250.0);
/// assert_eq!(gauge.level(), 0.0);
/// ```
///
/// [`fill`]: BufferGauge::fill
/// [`drain`]: BufferGauge::drain
/// [`set_level`]: BufferGauge::set_level
/// [`Simulation`]: crate::Simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferGauge(f64);

/// Full buffer, in percent.
const MAX_LEVEL: f64 = 100.0;

/// Empty buffer, in percent.
const MIN_LEVEL: f64 = 0.0;

impl BufferGauge {
    /// Create a gauge at the given occupancy, clamped to `[0, 100]`.
    pub fn new(level: f64) -> Self {
        Self(level.clamp(MIN_LEVEL, MAX_LEVEL))
    }

    /// Current occupancy in percent, always within `[0, 100]`.
    #[inline]
    pub fn level(&self) -> f64 {
        self.0
    }

    /// Overwrite the occupancy, clamping to `[0, 100]`.
    #[inline]
    pub fn set_level(&mut self, level: f64) {
        self.0 = level.clamp(MIN_LEVEL, MAX_LEVEL);
    }

    /// Add `amount` percent, saturating at a full buffer.
    #[inline]
    pub fn fill(&mut self, amount: f64) {
        self.0 = (self.0 + amount).min(MAX_LEVEL);
    }

    /// Remove `amount` percent, saturating at an empty buffer.
    #[inline]
    pub fn drain(&mut self, amount: f64) {
        self.0 = (self.0 - amount).max(MIN_LEVEL);
    }
}

impl Default for BufferGauge {
    /// An empty gauge.
    fn default() -> Self {
        Self(MIN_LEVEL)
    }
}
