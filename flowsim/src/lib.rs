/*!
# Flow-control teaching simulator

`flowsim` wraps the deterministic model from [`flowsim_core`] with the
pieces a front-end needs:

- [`SimDriver`] — a background thread ticking the simulation at a fixed
  cadence, with play/pause, burst and reset commands and snapshot
  queries over a channel;
- [`content`] — the editable site content (glossary, platforms, chart
  series, ...), persisted slice by slice with versioned fallback to
  compiled-in defaults;
- [`admin`] — the PIN gate in front of the content editors.

See the `examples/` directory for complete terminal front-ends.
*/

pub mod admin;
pub mod content;
mod driver;

// convenient re-export of `flowsim_core` core objects
pub use flowsim_core::{
    Packet, PacketId, PacketKind, Simulation, Snapshot, SpawnPolicy, TickInterval,
};

pub use self::driver::SimDriver;
