//! Single-consumer update loop around [`PlaybackController`].
//!
//! Every command and player event goes through one mpsc channel, so no two
//! handlers ever interleave mid-update and a seek always commits before the
//! timeupdates it provokes. Settle windows are plain sleep tasks that post
//! their epoch back into the same channel; the controller discards stale
//! epochs, so a superseded timer needs no cancellation.

use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::controller::{
    Command, Effect, PlayError, PlaybackController, PlaybackState, PlayerEvent,
};

/// How long a seek is given to settle before timeupdates are trusted again.
pub const SEEK_SETTLE: Duration = Duration::from_millis(100);

/// The seam to the real media element. `play` resolves when the element
/// accepts or rejects the request; the other operations are fire-and-settle.
pub trait MediaPlayer: Send + 'static {
    fn play(&mut self) -> impl Future<Output = Result<(), PlayError>> + Send;
    fn pause(&mut self) -> impl Future<Output = ()> + Send;
    fn set_time(&mut self, seconds: f64) -> impl Future<Output = ()> + Send;
    fn set_rate(&mut self, rate: f64) -> impl Future<Output = ()> + Send;
}

#[derive(Debug)]
enum Update {
    Command(Command),
    Event(PlayerEvent),
    SeekSettled(u64),
}

/// Handle onto the update loop. Cheap to clone; dropping every clone stops
/// the loop.
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    tx: mpsc::UnboundedSender<Update>,
    state: watch::Receiver<PlaybackState>,
}

impl PlaybackHandle {
    /// Spawns the update loop around `player`. Non-benign play failures are
    /// delivered on the returned receiver.
    pub fn spawn<P: MediaPlayer>(
        player: P,
    ) -> (Self, mpsc::UnboundedReceiver<PlayError>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (error_tx, error_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(PlaybackState::default());

        tokio::spawn(run_loop(player, rx, tx.clone(), state_tx, error_tx));

        (
            Self {
                tx,
                state: state_rx,
            },
            error_rx,
        )
    }

    pub fn play(&self) {
        self.send(Update::Command(Command::Play));
    }

    pub fn pause(&self) {
        self.send(Update::Command(Command::Pause));
    }

    pub fn seek(&self, seconds: f64) {
        self.send(Update::Command(Command::Seek(seconds)));
    }

    pub fn set_speed(&self, rate: f64) {
        self.send(Update::Command(Command::SetSpeed(rate)));
    }

    /// Forward an event observed on the media element.
    pub fn player_event(&self, event: PlayerEvent) {
        self.send(Update::Event(event));
    }

    /// Latest committed mirror state.
    pub fn state(&self) -> PlaybackState {
        *self.state.borrow()
    }

    /// Watch channel for renderers that want to react to every commit.
    pub fn watch(&self) -> watch::Receiver<PlaybackState> {
        self.state.clone()
    }

    fn send(&self, update: Update) {
        if self.tx.send(update).is_err() {
            tracing::warn!("playback_loop_gone");
        }
    }
}

async fn run_loop<P: MediaPlayer>(
    mut player: P,
    mut rx: mpsc::UnboundedReceiver<Update>,
    tx: mpsc::UnboundedSender<Update>,
    state_tx: watch::Sender<PlaybackState>,
    error_tx: mpsc::UnboundedSender<PlayError>,
) {
    let mut controller = PlaybackController::new();

    while let Some(update) = rx.recv().await {
        let effects = match update {
            Update::Command(command) => controller.handle_command(command),
            Update::Event(event) => controller.handle_event(event),
            Update::SeekSettled(epoch) => {
                controller.seek_settled(epoch);
                vec![]
            }
        };

        apply_effects(&mut player, &mut controller, effects, &tx, &error_tx).await;

        let _ = state_tx.send(controller.state());
    }
}

async fn apply_effects<P: MediaPlayer>(
    player: &mut P,
    controller: &mut PlaybackController,
    effects: Vec<Effect>,
    tx: &mpsc::UnboundedSender<Update>,
    error_tx: &mpsc::UnboundedSender<PlayError>,
) {
    let mut queue: VecDeque<Effect> = effects.into();

    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::Play => {
                let result = player.play().await;
                match controller.play_settled(result) {
                    Ok(more) => queue.extend(more),
                    Err(error) => {
                        tracing::error!(error = %error, "playback_start_failed");
                        let _ = error_tx.send(error);
                    }
                }
            }
            Effect::Pause => player.pause().await,
            Effect::SetTime(seconds) => player.set_time(seconds).await,
            Effect::SetRate(rate) => player.set_rate(rate).await,
            Effect::ScheduleSettle { epoch } => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(SEEK_SETTLE).await;
                    let _ = tx.send(Update::SeekSettled(epoch));
                });
            }
        }
    }
}
