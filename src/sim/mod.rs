use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use crate::game::{Game, SimCommand, Snapshot};

/// UI-side handle to the simulation worker thread.
pub struct SimHandle {
    commands: Sender<SimCommand>,
    snapshots: Receiver<Snapshot>,
    worker: Option<JoinHandle<()>>,
}

/// Moves `game` onto a dedicated thread that steps it every `interval` while running.
/// The worker publishes an initial snapshot and then one after every change.
pub fn spawn_simulation(game: Game, interval: Duration) -> SimHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (snap_tx, snap_rx) = mpsc::channel();
    let worker = thread::spawn(move || run_worker(game, interval, cmd_rx, snap_tx));
    SimHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        worker: Some(worker),
    }
}

impl SimHandle {
    pub fn send(&self, cmd: SimCommand) -> Result<()> {
        self.commands
            .send(cmd)
            .map_err(|_| anyhow!("simulation worker has stopped"))
    }

    /// Latest snapshot published since the last call, if any.
    pub fn latest(&self) -> Option<Snapshot> {
        self.snapshots.try_iter().last()
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Snapshot> {
        self.snapshots.recv_timeout(timeout).ok()
    }

    pub fn shutdown(mut self) {
        self.stop_worker();
    }

    fn stop_worker(&mut self) {
        let _ = self.commands.send(SimCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for SimHandle {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

fn run_worker(
    mut game: Game,
    interval: Duration,
    commands: Receiver<SimCommand>,
    snapshots: Sender<Snapshot>,
) {
    info!(interval_ms = interval.as_millis() as u64, "simulation worker started");
    if snapshots.send(game.snapshot()).is_err() {
        return;
    }
    let mut next_tick = Instant::now() + interval;

    loop {
        let received = if game.is_running() {
            let wait = next_tick.saturating_duration_since(Instant::now());
            match commands.recv_timeout(wait) {
                Ok(cmd) => Some(cmd),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match commands.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            }
        };

        if let Some(cmd) = received {
            if cmd == SimCommand::Shutdown {
                break;
            }
            let was_running = game.is_running();
            if game.handle_command(cmd) {
                if !was_running && game.is_running() {
                    next_tick = Instant::now() + interval;
                }
                if snapshots.send(game.snapshot()).is_err() {
                    break;
                }
            }
        }

        // The flag is read here, after any pending stop has been applied.
        let now = Instant::now();
        if game.is_running() && now >= next_tick {
            game.tick();
            next_tick += interval;
            if next_tick < now {
                next_tick = now + interval;
            }
            if snapshots.send(game.snapshot()).is_err() {
                break;
            }
        }
    }
    debug!(generation = game.generation, "simulation worker exiting");
}
