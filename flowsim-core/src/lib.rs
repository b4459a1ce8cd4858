/*!
# Flow-control simulation primitives

`flowsim-core` models a single lossless link: a sender emitting data
packets, a receiver with a finite ingress buffer, and a pause signal
travelling back from the receiver to the sender once the buffer crosses
a congestion threshold. The model is intentionally illustrative — it
animates how priority-flow-control style back-pressure behaves, it does
not reproduce any real protocol's timing.

The simulation is a discrete-step state machine: one call to
[`Simulation::tick`] is one fixed step, regardless of wall-clock time.
All randomness is drawn from a single seedable ChaCha generator so any
run can be reproduced exactly.

```
use flowsim_core::{Simulation, SpawnPolicy};

let mut sim = Simulation::builder()
    .set_seed(42)
    .set_spawn_policy(SpawnPolicy::Always)
    .build();

for _ in 0..100 {
    sim.tick();
}

let snapshot = sim.snapshot();
assert!(snapshot.buffer_level <= 100.0);
```
*/

pub mod defaults;
pub mod measure;
pub mod simulation;
mod stats;
mod time;

pub use self::{
    measure::{BufferGauge, SpawnPolicy, SpawnRate},
    simulation::{Packet, PacketId, PacketKind, Simulation, SimulationBuilder},
    stats::Snapshot,
    time::TickInterval,
};
