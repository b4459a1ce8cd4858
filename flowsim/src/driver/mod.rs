//! Fixed-cadence driver for a [`Simulation`].
//!
//! The core model has no clock of its own: one call to
//! [`Simulation::tick`] is one step, whoever owns it decides when to
//! call it. This module supplies the standard owner — a background
//! thread invoking `tick` at a fixed [`TickInterval`] while "playing",
//! controlled through a small command channel. Manual stepping (tests,
//! deterministic renders) keeps using [`Simulation`] directly and never
//! needs a driver.
//!
//! [`Simulation`]: flowsim_core::Simulation
//! [`Simulation::tick`]: flowsim_core::Simulation::tick

pub(crate) mod command;
mod stop;

use self::{
    command::{Command, CommandReceiver, CommandSender, command_channel},
    stop::Stop,
};
use anyhow::{Context, Result, bail};
use flowsim_core::{Simulation, Snapshot, TickInterval};
use std::{
    sync::{Arc, mpsc::TryRecvError},
    thread::JoinHandle,
    time::{Duration, Instant},
};
use tracing::{debug, info};

/// Handle to a simulation running on its own ticker thread.
///
/// Dropping the handle without calling [`shutdown`](SimDriver::shutdown)
/// leaks the thread until process exit; call `shutdown` for a clean
/// join.
///
/// # Example
///
/// ```no_run
/// use flowsim::SimDriver;
/// use flowsim_core::{Simulation, TickInterval};
///
/// # fn main() -> anyhow::Result<()> {
/// let driver = SimDriver::new(Simulation::default(), TickInterval::DEFAULT)?;
/// driver.set_playing(true)?;
/// driver.inject_burst()?;
/// let snapshot = driver.snapshot()?;
/// println!("buffer at {:.1}%", snapshot.buffer_level);
/// driver.shutdown()?;
/// # Ok(())
/// # }
/// ```
pub struct SimDriver {
    commands: CommandSender,

    stop: Arc<Stop>,

    thread: JoinHandle<Result<()>>,
}

/// Thread-side state: the simulation plus the playing flag that gates
/// the cadence.
struct Ticker {
    simulation: Simulation,

    commands: CommandReceiver,

    playing: bool,

    stop: Arc<Stop>,
}

impl SimDriver {
    /// Spawn the ticker thread around `simulation`.
    ///
    /// The driver starts **paused** — the renderer gets its initial
    /// frame from [`snapshot`](SimDriver::snapshot) and nothing moves
    /// until [`set_playing(true)`](SimDriver::set_playing).
    pub fn new(simulation: Simulation, interval: TickInterval) -> Result<Self> {
        let stop = Arc::new(Stop::new());
        let (commands, receiver) = command_channel();

        let ticker = Ticker {
            simulation,
            commands: receiver,
            playing: false,
            stop: Arc::clone(&stop),
        };

        let thread = std::thread::spawn(move || ticker_run(ticker, interval));

        Ok(Self {
            commands,
            stop,
            thread,
        })
    }

    /// Start or stop the tick cadence. Pausing never mutates the model:
    /// the in-flight packets and buffer level freeze where they are.
    pub fn set_playing(&self, playing: bool) -> Result<()> {
        self.commands.send(Command::SetPlaying(playing))
    }

    /// Inject a traffic burst, whether or not the cadence is running.
    pub fn inject_burst(&self) -> Result<()> {
        self.commands.send(Command::InjectBurst)
    }

    /// Restore the initial simulation state and stop the cadence.
    pub fn reset(&self) -> Result<()> {
        self.commands.send(Command::Reset)
    }

    /// Fetch an owned snapshot of the current state.
    ///
    /// The reply is produced between ticks, never mid-step.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.commands.request_snapshot()
    }

    /// Stop the ticker thread and join it.
    pub fn shutdown(self) -> Result<()> {
        self.stop.toggle();

        match self.thread.join() {
            Err(join_error) => {
                bail!("Simulation driver failed to clean shutdown: {join_error:?}")
            }
            Ok(result) => result.context("Simulation driver failed with error"),
        }
    }
}

impl Ticker {
    fn stopped(&self) -> bool {
        self.stop.get()
    }

    fn inbound(&mut self, command: Command) {
        match command {
            Command::SetPlaying(playing) => {
                debug!(playing, "cadence toggled");
                self.playing = playing;
            }
            Command::InjectBurst => {
                debug!("burst injected");
                self.simulation.inject_burst();
            }
            Command::Reset => {
                debug!("simulation reset");
                self.playing = false;
                self.simulation.reset();
            }
            Command::Snapshot(reply) => {
                // the requester may have already given up waiting, in
                // which case there is nobody left to care about the
                // snapshot either
                let _ = reply.try_send(self.simulation.snapshot());
            }
        }
    }

    fn inbounds(&mut self) {
        loop {
            match self.commands.try_recv() {
                Err(TryRecvError::Disconnected) => {
                    // the handle is gone, no further commands can ever
                    // arrive: wind the thread down
                    self.stop.toggle();

                    break;
                }
                Err(TryRecvError::Empty) => break,
                Ok(command) => self.inbound(command),
            }
        }
    }

    /// One cadence slot: drain pending commands, then advance the model
    /// by exactly one step if the cadence is running.
    fn step(&mut self) {
        self.inbounds();

        if self.playing {
            self.simulation.tick();
        }
    }
}

fn ticker_run(mut ticker: Ticker, interval: TickInterval) -> Result<()> {
    let target = interval.into_duration();

    info!(interval = %interval, "simulation driver started");

    let mut instant = Instant::now();

    // If a step overruns its slot we shorten the following sleep rather
    // than ticking twice: a slow host runs the animation slower instead
    // of jumping ahead.
    let mut adjustment = Duration::ZERO;

    while !ticker.stopped() {
        ticker.step();

        let elapsed = instant.elapsed() + adjustment;

        let sleep_duration = target.saturating_sub(elapsed);
        adjustment = elapsed.saturating_sub(target).min(target);

        std::thread::sleep(sleep_duration);

        instant = Instant::now();
    }

    info!("simulation driver stopped");

    Ok(())
}
