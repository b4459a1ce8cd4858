use anyhow::{Context, Result, anyhow};
use flowsim_core::Snapshot;
use std::sync::mpsc::{Receiver, SyncSender, TryRecvError, TrySendError, sync_channel};

/// Control-plane messages from the [`SimDriver`] handle to the ticker
/// thread. All simulation mutation happens on the ticker thread, so the
/// handle only ever queues intents.
///
/// [`SimDriver`]: super::SimDriver
pub(crate) enum Command {
    /// Start or stop the tick cadence. Does not touch simulation state:
    /// pausing simply stops calling `tick`.
    SetPlaying(bool),
    /// Queue a traffic burst onto the model.
    InjectBurst,
    /// Restore the initial simulation state and stop the cadence.
    Reset,
    /// Copy the current state out and reply with it.
    Snapshot(SyncSender<Snapshot>),
}

pub(crate) struct CommandSender(SyncSender<Command>);

pub(crate) struct CommandReceiver(Receiver<Command>);

pub(crate) fn command_channel() -> (CommandSender, CommandReceiver) {
    // commands are tiny and rare (user interactions), a small bound is
    // plenty and keeps a runaway caller from queueing unbounded work
    let (sender, receiver) = sync_channel(1_024);

    (CommandSender(sender), CommandReceiver(receiver))
}

impl CommandSender {
    pub(crate) fn send(&self, command: Command) -> Result<()> {
        self.0.try_send(command).map_err(|error| match error {
            TrySendError::Full(_) => anyhow!("Simulation driver command queue is full"),
            TrySendError::Disconnected(_) => {
                anyhow!("Simulation driver is no longer running")
            }
        })
    }

    /// Round-trip: ask the ticker thread for a state snapshot and wait
    /// for the reply.
    pub(crate) fn request_snapshot(&self) -> Result<Snapshot> {
        let (reply, answer) = sync_channel(1);

        self.send(Command::Snapshot(reply))?;

        answer
            .recv()
            .context("Failed to receive snapshot from the simulation driver")
    }
}

impl Clone for CommandSender {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl CommandReceiver {
    pub(crate) fn try_recv(&mut self) -> Result<Command, TryRecvError> {
        self.0.try_recv()
    }
}
