//! Measured quantities of the simulated link: buffer occupancy and the
//! sender's packet emission policy.

mod gauge;
mod spawn;

pub use self::{
    gauge::BufferGauge,
    spawn::{SpawnParseError, SpawnPolicy, SpawnRate, SpawnRateError},
};
