//! Flow-control example: run the simulation headless and chart the buffer.
//!
//! Steps the simulation tick by tick, prints an ASCII view of the link and
//! the receive buffer at a configurable interval, and reports every pause
//! and resume transition of the sender.
//!
//! Run with:
//!   cargo run --example flow_control -p flowsim -- --ticks 600 --burst-at 120
//!
//! Inject several bursts to force a pause/resume cycle:
//!   cargo run --example flow_control -p flowsim -- --burst-at 60 --burst-at 65 --burst-at 70

use anyhow::Result;
use clap::Parser;
use flowsim::{PacketKind, Simulation, SpawnPolicy};

const LINK_WIDTH: usize = 50;
const BAR_WIDTH: usize = 20;

#[derive(Parser)]
struct Args {
    /// How many ticks to run.
    #[arg(long, default_value_t = 400)]
    ticks: u64,

    /// Seed for the spawn RNG; same seed, same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Probability of spawning a data packet each tick, e.g. "10%".
    #[arg(long, default_value = "10%")]
    spawn_rate: SpawnPolicy,

    /// Inject a burst at this tick (repeatable).
    #[arg(long = "burst-at")]
    burst_at: Vec<u64>,

    /// Print a frame every this many ticks.
    #[arg(long, default_value_t = 20)]
    sample: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut simulation = Simulation::builder()
        .set_seed(args.seed)
        .set_spawn_policy(args.spawn_rate)
        .build();

    println!(
        "sender ---[{LINK_WIDTH} units]---> receiver | {} ticks, seed {}",
        args.ticks, args.seed
    );
    println!();

    let mut paused = simulation.is_sender_paused();
    for tick in 1..=args.ticks {
        if args.burst_at.contains(&tick) {
            simulation.inject_burst();
            println!("tick {tick:>4}: >>> burst injected");
        }

        simulation.tick();

        if simulation.is_sender_paused() != paused {
            paused = simulation.is_sender_paused();
            if paused {
                println!("tick {tick:>4}: ### sender PAUSED (pause frame received)");
            } else {
                println!("tick {tick:>4}: ### sender RESUMED (buffer drained)");
            }
        }

        if tick % args.sample == 0 {
            print_frame(tick, &simulation);
        }
    }

    println!();
    println!(
        "done: {} packets in flight, buffer at {:.1}%",
        simulation.packets_in_flight(),
        simulation.buffer_level()
    );

    Ok(())
}

fn print_frame(tick: u64, simulation: &Simulation) {
    // Data packets travel left to right, pause frames right to left.
    let mut link = vec![' '; LINK_WIDTH + 1];
    for packet in simulation.snapshot().packets {
        let cell = (packet.position().clamp(0.0, 100.0) / 100.0 * LINK_WIDTH as f64) as usize;
        link[cell] = match packet.kind() {
            PacketKind::Data => '>',
            PacketKind::Control => '<',
        };
    }
    let link: String = link.into_iter().collect();

    let filled = (simulation.buffer_level() / 100.0 * BAR_WIDTH as f64).round() as usize;
    let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);

    let mut flags = String::new();
    if simulation.is_congested() {
        flags.push_str(" CONGESTED");
    }
    if simulation.is_sender_paused() {
        flags.push_str(" PAUSED");
    }

    println!(
        "tick {tick:>4}: [{link}] buf [{bar}] {:>5.1}%{flags}",
        simulation.buffer_level()
    );
}
