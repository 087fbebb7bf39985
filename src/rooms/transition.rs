//! Rooms domain: timed fade-out / move / fade-in state machine for door use.

use crate::content::Direction;
use crate::rooms::RoomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    None,
    FadingOut,
    Moving,
    FadingIn,
}

/// What the owner has to do after advancing the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Fade-out finished: swap to `target` and place the player at the
    /// wall opposite to `direction`.
    Arrive {
        target: RoomId,
        direction: Direction,
    },
    /// Fade-in finished, the transition is over.
    Finished,
}

/// One transition at a time. Progress runs 0..1 per phase and is reset on
/// every phase change; time left over at a phase boundary carries into the
/// next phase.
#[derive(Debug, Clone)]
pub struct TransitionController {
    state: TransitionState,
    progress: f32,
    duration: f32,
    direction: Option<Direction>,
    target: Option<RoomId>,
}

impl TransitionController {
    pub fn new(duration: f32) -> Self {
        Self {
            state: TransitionState::None,
            progress: 0.0,
            duration,
            direction: None,
            target: None,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn target(&self) -> Option<RoomId> {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.state != TransitionState::None
    }

    /// Full-screen overlay alpha, 0 (clear) to 255 (black).
    pub fn overlay_alpha(&self) -> u8 {
        let alpha = match self.state {
            TransitionState::None => 0.0,
            TransitionState::FadingOut => self.progress,
            TransitionState::Moving => 1.0,
            TransitionState::FadingIn => 1.0 - self.progress,
        };
        (255.0 * alpha.clamp(0.0, 1.0)).round() as u8
    }

    /// Start fading out towards `target`. Ignored while another transition
    /// is in flight; returns whether a transition started.
    pub fn begin(&mut self, direction: Direction, target: RoomId) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = TransitionState::FadingOut;
        self.progress = 0.0;
        self.direction = Some(direction);
        self.target = Some(target);
        true
    }

    /// Advance by `dt` seconds. A large `dt` may cross several phase
    /// boundaries in one call; steps are reported in order through `on_step`.
    pub fn advance(&mut self, dt: f32, mut on_step: impl FnMut(TransitionStep)) {
        if !self.is_active() {
            return;
        }

        let mut remaining = dt.max(0.0);
        loop {
            let raw = self.progress + remaining / self.duration;
            if raw < 1.0 {
                self.progress = raw;
                return;
            }

            remaining = (raw - 1.0) * self.duration;
            self.progress = 0.0;
            match self.state {
                TransitionState::FadingOut => {
                    self.state = TransitionState::Moving;
                    if let (Some(target), Some(direction)) = (self.target, self.direction) {
                        on_step(TransitionStep::Arrive { target, direction });
                    }
                }
                TransitionState::Moving => {
                    self.state = TransitionState::FadingIn;
                }
                TransitionState::FadingIn => {
                    self.state = TransitionState::None;
                    self.direction = None;
                    self.target = None;
                    on_step(TransitionStep::Finished);
                    return;
                }
                TransitionState::None => return,
            }
        }
    }
}
