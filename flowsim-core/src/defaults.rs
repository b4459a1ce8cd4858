//! Tuning constants for the flow-control model.
//!
//! The simulation is a teaching aid: how fast the buffer fills, when
//! the pause frame fires and how long the sender stays quiet are all
//! calibrated for a readable animation, not for realism. The values are
//! exposed as named constants so tests can assert against them.

/// Buffer occupancy (percent) above which congestion is flagged and a
/// single [`PacketKind::Control`] pause frame is emitted.
///
/// The comparison is strict: a buffer sitting exactly at the threshold
/// does not trigger.
///
/// [`PacketKind::Control`]: crate::PacketKind
pub const BUFFER_THRESHOLD: f64 = 80.0;

/// Buffer occupancy (percent) below which a paused sender resumes.
///
/// Deliberately much lower than [`BUFFER_THRESHOLD`]: the gap is the
/// hysteresis that keeps the sender from flapping between paused and
/// active around a single threshold.
pub const RESUME_THRESHOLD: f64 = 40.0;

/// Constant buffer drain, in percent per tick. Applied every tick,
/// whether or not anything else happened.
pub const DRAIN_RATE: f64 = 0.5;

/// Position advance per tick for data packets (sender → receiver).
pub const DATA_SPEED: f64 = 1.5;

/// Position advance per tick for control packets (receiver → sender).
/// Control frames travel faster than data so the pause takes effect
/// before the buffer has long overrun the threshold.
pub const CONTROL_SPEED: f64 = 3.0;

/// Per-tick probability that the active sender emits a new data packet.
pub const SPAWN_PROBABILITY: f64 = 0.10;

/// Buffer increment (percent) per data packet that reaches the receiver.
pub const FILL_PER_ARRIVAL: f64 = 5.0;

/// Number of data packets injected by one burst command.
pub const BURST_SIZE: usize = 5;

/// Immediate buffer increment (percent) applied by one burst command.
pub const BURST_FILL: f64 = 20.0;

/// Position of the leading packet of a burst.
pub const BURST_HEAD_POSITION: f64 = 10.0;

/// Gap between consecutive packets of a burst. The tail packets start
/// at negative positions and take a few extra ticks to enter the link.
pub const BURST_SPACING: f64 = 5.0;

/// Position at or beyond which a data packet counts as arrived.
pub const DATA_ARRIVAL_POSITION: f64 = 90.0;

/// Position at or below which a control packet counts as delivered to
/// the sender.
pub const CONTROL_ARRIVAL_POSITION: f64 = 10.0;

/// Position at which freshly spawned data packets appear.
pub const DATA_SPAWN_POSITION: f64 = 5.0;

/// Position at which control packets are emitted by the receiver.
pub const CONTROL_SPAWN_POSITION: f64 = 90.0;

/// Buffer occupancy (percent) of a freshly created or reset simulation.
pub const INITIAL_BUFFER_LEVEL: f64 = 20.0;
