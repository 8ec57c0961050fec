use debrief_facts::{ACTIVE_WINDOW_SECS, Fact};
use debrief_transcript::TranscriptSegment;

/// Who initiated the in-flight play/pause transition. Event handlers check
/// this before acting so a command's own echo from the element is never
/// misread as a new user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSource {
    /// A command is executing; the next matching player event is its echo.
    User,
    /// The element changed state on its own (native controls, end of media).
    Player,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Seek(f64),
    SetSpeed(f64),
}

/// Events emitted by the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    TimeUpdate(f64),
    Play,
    Pause,
}

/// Instructions for the embedding layer to apply to the real player. The
/// controller never touches the element directly; these are the only channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Play,
    Pause,
    SetTime(f64),
    SetRate(f64),
    /// Start the settling window for this seek; call
    /// [`PlaybackController::seek_settled`] with the same epoch once it
    /// elapses. Superseded epochs are ignored there, so timers never need
    /// explicit cancellation.
    ScheduleSettle { epoch: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The element rejected `play()` because a pause arrived before it
    /// resolved. Benign; swallowed.
    #[error("play request interrupted by pause")]
    Interrupted,
    #[error("player failed to start playback: {0}")]
    Failed(String),
}

/// Mirrored view of the player for rendering. Never durably diverges from
/// the element's own clock: during playback only `TimeUpdate` writes
/// `current_time`, and a seek's immediate write is reconciled when the
/// settling window closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub current_time: f64,
    pub speed: f64,
    pub seeking: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            speed: 1.0,
            seeking: false,
        }
    }
}

#[derive(Debug)]
pub struct PlaybackController {
    playing: bool,
    current_time: f64,
    speed: f64,
    control: ControlSource,
    seeking: bool,
    seek_epoch: u64,
    pending_play: bool,
    pause_queued: bool,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            speed: 1.0,
            control: ControlSource::None,
            seeking: false,
            seek_epoch: 0,
            pending_play: false,
            pause_queued: false,
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Play => self.command_play(),
            Command::Pause => self.command_pause(),
            Command::Seek(time) => self.command_seek(time),
            Command::SetSpeed(rate) => self.command_set_speed(rate),
        }
    }

    pub fn handle_event(&mut self, event: PlayerEvent) -> Vec<Effect> {
        match event {
            PlayerEvent::TimeUpdate(time) => {
                // While a seek settles, the element still reports positions
                // from before the jump; writing them through would make the
                // playhead visibly snap back.
                if !self.seeking {
                    self.current_time = time;
                }
            }
            PlayerEvent::Play => {
                if self.control == ControlSource::User {
                    // Echo of our own Play effect; consume the guard.
                    self.control = ControlSource::None;
                } else {
                    // Element-initiated (native controls); adopt the state.
                    self.control = ControlSource::Player;
                    self.playing = true;
                }
            }
            PlayerEvent::Pause => {
                if self.control == ControlSource::User {
                    self.control = ControlSource::None;
                } else {
                    self.control = ControlSource::Player;
                    self.playing = false;
                }
            }
        }
        vec![]
    }

    /// The element accepted or rejected a previously issued [`Effect::Play`].
    /// A queued pause drains here; the interrupted-by-pause rejection is
    /// swallowed, anything else is returned for the caller to report.
    pub fn play_settled(&mut self, result: Result<(), PlayError>) -> Result<Vec<Effect>, PlayError> {
        self.pending_play = false;

        match result {
            Ok(()) => {
                if self.pause_queued {
                    self.pause_queued = false;
                    self.control = ControlSource::User;
                    return Ok(vec![Effect::Pause]);
                }
                Ok(vec![])
            }
            Err(PlayError::Interrupted) => {
                tracing::debug!("play_interrupted_by_pause");
                self.pause_queued = false;
                Ok(vec![])
            }
            Err(error) => {
                self.playing = false;
                self.pause_queued = false;
                Err(error)
            }
        }
    }

    /// The settling window for `epoch` elapsed. Stale epochs belong to seeks
    /// that were superseded and are ignored, which is what makes the settle
    /// timer idempotent and self-cancelling.
    pub fn seek_settled(&mut self, epoch: u64) {
        if epoch == self.seek_epoch {
            self.seeking = false;
        }
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            playing: self.playing,
            current_time: self.current_time,
            speed: self.speed,
            seeking: self.seeking,
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Origin of the most recent play/pause transition.
    pub fn control_source(&self) -> ControlSource {
        self.control
    }

    /// Segment under the playhead: `start <= t <= end`, first match wins.
    pub fn active_segment<'a>(
        &self,
        segments: &'a [TranscriptSegment],
    ) -> Option<&'a TranscriptSegment> {
        segments
            .iter()
            .find(|s| s.start <= self.current_time && self.current_time <= s.end)
    }

    /// Facts carry one timestamp, not a range, so "active" means within the
    /// fixed proximity window.
    pub fn is_fact_active(&self, fact: &Fact) -> bool {
        (self.current_time - fact.seconds()).abs() <= ACTIVE_WINDOW_SECS
    }

    fn command_play(&mut self) -> Vec<Effect> {
        self.playing = true;
        self.control = ControlSource::User;
        self.pending_play = true;
        self.pause_queued = false;
        vec![Effect::Play]
    }

    fn command_pause(&mut self) -> Vec<Effect> {
        self.playing = false;

        if self.pending_play {
            // Pausing mid-play() would make the element reject the play
            // request; hold the pause until it resolves.
            self.pause_queued = true;
            return vec![];
        }

        self.control = ControlSource::User;
        vec![Effect::Pause]
    }

    fn command_seek(&mut self, time: f64) -> Vec<Effect> {
        // Mirror immediately so the UI tracks the click; the element catches
        // up once the settling window closes.
        self.current_time = time;
        self.seeking = true;
        self.seek_epoch += 1;

        vec![
            Effect::SetTime(time),
            Effect::ScheduleSettle {
                epoch: self.seek_epoch,
            },
        ]
    }

    fn command_set_speed(&mut self, rate: f64) -> Vec<Effect> {
        self.speed = rate;
        vec![Effect::SetRate(rate)]
    }
}
