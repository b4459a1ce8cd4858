//! Observability types for the simulation.
//!
//! [`Snapshot`] is a point-in-time copy of the full simulation state.
//! Obtain one via [`Simulation::snapshot`](crate::Simulation::snapshot).

use crate::simulation::Packet;

/// Point-in-time, owned copy of the simulation state.
///
/// Handed to the rendering layer after every step. The snapshot shares
/// nothing with the live simulation: a renderer can hold it across
/// further ticks, compare successive snapshots, or read it from another
/// thread without ever observing a partially updated state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Receiver buffer occupancy in percent, always within `[0, 100]`.
    pub buffer_level: f64,
    /// `true` while the buffer sits above the congestion threshold and
    /// a pause frame has been signalled for the current excursion.
    pub congested: bool,
    /// `true` once a pause frame has reached the sender, until the
    /// buffer has drained below the resume threshold.
    ///
    /// Independent of `congested`: while a control frame is still in
    /// flight the buffer can be congested with the sender not yet
    /// paused.
    pub sender_paused: bool,
    /// Every packet currently on the link, in insertion order.
    pub packets: Vec<Packet>,
}
