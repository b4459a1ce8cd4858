use std::fmt;

/// A generator for monotonically increasing **unique** [`PacketId`]s.
///
/// Owned by the [`Simulation`] and deliberately *not* reset by
/// [`Simulation::reset`]: identifiers are never reused across the
/// lifetime of a simulation, even across resets, so a renderer keying
/// animations on packet identity never sees a stale entity come back.
///
/// [`Simulation`]: crate::Simulation
/// [`Simulation::reset`]: crate::Simulation::reset
#[derive(Debug, Default)]
pub struct PacketIdGenerator(u64);

/// # [`Packet`] identifier
///
/// Uniquely identifies a packet for the lifetime of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PacketId(u64);

/// The direction and meaning of a simulated packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// A payload unit flowing sender → receiver: its position strictly
    /// increases every tick until it arrives.
    Data,
    /// A pause frame flowing receiver → sender: its position strictly
    /// decreases every tick until it is delivered. Modeled loosely
    /// after a priority-flow-control frame.
    Control,
}

/// One packet in flight on the simulated link.
///
/// `position` is the horizontal progress along the link in `[0, 100]`
/// where 0 is the sender side and 100 the receiver side. Burst-injected
/// packets may transiently sit at negative positions — they are queued
/// behind the sender and take a few extra ticks to enter the link.
///
/// Packets are plain `Copy` values: snapshots hand the renderer its own
/// copies, never references into simulation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packet {
    id: PacketId,
    position: f64,
    kind: PacketKind,
}

impl PacketIdGenerator {
    pub fn new() -> Self {
        // identifier 0 is never handed out, it reads as "no packet"
        // in debug output
        Self(0)
    }

    /// generate a new unique identifier
    pub fn generate(&mut self) -> PacketId {
        self.0 += 1;
        PacketId(self.0)
    }
}

impl PacketId {
    pub fn into_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Packet {
    pub(crate) fn new(id: PacketId, position: f64, kind: PacketKind) -> Self {
        Self { id, position, kind }
    }

    #[inline]
    pub fn id(&self) -> PacketId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn kind(&self) -> PacketKind {
        self.kind
    }

    /// Move the packet one tick along the link, in the direction its
    /// kind dictates.
    pub(crate) fn advance(&mut self) {
        match self.kind {
            PacketKind::Data => self.position += crate::defaults::DATA_SPEED,
            PacketKind::Control => self.position -= crate::defaults::CONTROL_SPEED,
        }
    }

    /// A data packet at or past the receiver, or a control frame at or
    /// past the sender, leaves the link on this tick.
    pub(crate) fn arrived(&self) -> bool {
        match self.kind {
            PacketKind::Data => self.position >= crate::defaults::DATA_ARRIVAL_POSITION,
            PacketKind::Control => self.position <= crate::defaults::CONTROL_ARRIVAL_POSITION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_monotonic() {
        let mut generator = PacketIdGenerator::new();
        let a = generator.generate();
        let b = generator.generate();
        let c = generator.generate();
        assert!(a < b && b < c);
    }

    #[test]
    fn data_advances_forward() {
        let mut generator = PacketIdGenerator::new();
        let mut packet = Packet::new(generator.generate(), 5.0, PacketKind::Data);
        packet.advance();
        assert_eq!(packet.position(), 5.0 + crate::defaults::DATA_SPEED);
    }

    #[test]
    fn control_advances_backward() {
        let mut generator = PacketIdGenerator::new();
        let mut packet = Packet::new(generator.generate(), 90.0, PacketKind::Control);
        packet.advance();
        assert_eq!(packet.position(), 90.0 - crate::defaults::CONTROL_SPEED);
    }

    #[test]
    fn arrival_thresholds_are_inclusive() {
        let mut generator = PacketIdGenerator::new();
        let data = Packet::new(generator.generate(), 90.0, PacketKind::Data);
        assert!(data.arrived());
        let data = Packet::new(generator.generate(), 89.9, PacketKind::Data);
        assert!(!data.arrived());

        let control = Packet::new(generator.generate(), 10.0, PacketKind::Control);
        assert!(control.arrived());
        let control = Packet::new(generator.generate(), 10.1, PacketKind::Control);
        assert!(!control.arrived());
    }
}
