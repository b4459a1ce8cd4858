//! Live example: run the simulation on the background driver.
//!
//! Starts the driver at its default 16ms cadence, plays for a while,
//! injects a burst to trigger congestion, then pauses, resets and shuts
//! down — the command set a front-end's transport controls map onto.
//!
//! Run with:
//!   cargo run --example live -p flowsim

use anyhow::Result;
use flowsim::{SimDriver, Simulation, TickInterval};
use std::{thread, time::Duration};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let driver = SimDriver::new(Simulation::builder().set_seed(7).build(), TickInterval::default())?;

    driver.set_playing(true)?;
    println!("playing at {}...", TickInterval::default());

    for second in 1..=5u32 {
        thread::sleep(Duration::from_secs(1));
        if second == 2 {
            driver.inject_burst()?;
            println!("burst injected");
        }
        let snapshot = driver.snapshot()?;
        println!(
            "t+{second}s: buffer {:>5.1}% | {} packets in flight | congested: {} | paused: {}",
            snapshot.buffer_level,
            snapshot.packets.len(),
            snapshot.congested,
            snapshot.sender_paused,
        );
    }

    driver.set_playing(false)?;
    driver.reset()?;
    println!("reset: {:?}", driver.snapshot()?);

    driver.shutdown()
}
