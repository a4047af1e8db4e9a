//! Time-sampled cell animations.
//!
//! Animations are not driven by a scheduler. A track records when it
//! started and the renderer samples it at the current time, producing an
//! [`AnimationFrame`] of terminal-sized effects: small offsets, a
//! visibility blink, and an emphasis level for colors.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Period of the looping focus-cell animation.
pub const FOCUS_PERIOD: Duration = Duration::from_millis(500);

/// Duration of [`PinInput::shake`](super::PinInput::shake).
pub const SHAKE_DURATION: Duration = Duration::from_millis(650);

// Horizontal offsets for the ten shake keyframes.
const SHAKE_STEPS: [i32; 10] = [0, -1, 1, -1, 1, -1, 1, -1, 1, 0];

/// Named animation effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Side-to-side jitter.
    Shake,
    /// Emphasis swells and fades.
    Pulse,
    /// Blinks out twice.
    Flash,
    /// Hops up twice, the second hop shorter.
    Bounce,
}

impl Animation {
    pub const ALL: [Self; 4] = [Self::Shake, Self::Pulse, Self::Flash, Self::Bounce];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shake => "shake",
            Self::Pulse => "pulse",
            Self::Flash => "flash",
            Self::Bounce => "bounce",
        }
    }

    /// Sample the effect at `progress` in `[0, 1]`.
    #[must_use]
    pub fn sample(self, progress: f32) -> AnimationFrame {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Shake => {
                let step = ((t * 10.0) as usize).min(SHAKE_STEPS.len() - 1);
                AnimationFrame {
                    dx: SHAKE_STEPS[step],
                    ..AnimationFrame::IDLE
                }
            }
            Self::Pulse => AnimationFrame {
                emphasis: (t * std::f32::consts::PI).sin().max(0.0),
                ..AnimationFrame::IDLE
            },
            Self::Flash => AnimationFrame {
                visible: ((t * 4.0 + 0.5) as u32) % 2 == 0,
                ..AnimationFrame::IDLE
            },
            Self::Bounce => {
                let airborne = (0.25..0.5).contains(&t) || (0.65..0.75).contains(&t);
                AnimationFrame {
                    dy: if airborne { -1 } else { 0 },
                    ..AnimationFrame::IDLE
                }
            }
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Animation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|animation| animation.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAnimation(s.to_string()))
    }
}

/// Visual effect at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    /// Column offset.
    pub dx: i32,
    /// Row offset.
    pub dy: i32,
    /// Whether content is drawn at all.
    pub visible: bool,
    /// Border highlight strength in `[0, 1]`.
    pub emphasis: f32,
}

impl AnimationFrame {
    /// No effect.
    pub const IDLE: Self = Self {
        dx: 0,
        dy: 0,
        visible: true,
        emphasis: 0.0,
    };

    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self::IDLE
    }
}

/// How many times a track repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iterations {
    Count(u32),
    Infinite,
}

/// An animation anchored at a start time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTrack {
    animation: Animation,
    started: Instant,
    duration: Duration,
    iterations: Iterations,
}

impl AnimationTrack {
    #[must_use]
    pub fn new(
        animation: Animation,
        started: Instant,
        duration: Duration,
        iterations: Iterations,
    ) -> Self {
        Self {
            animation,
            started,
            duration,
            iterations,
        }
    }

    /// Play once over `duration`.
    #[must_use]
    pub fn once(animation: Animation, started: Instant, duration: Duration) -> Self {
        Self::new(animation, started, duration, Iterations::Count(1))
    }

    /// Loop forever with the given period.
    #[must_use]
    pub fn looping(animation: Animation, started: Instant, period: Duration) -> Self {
        Self::new(animation, started, period, Iterations::Infinite)
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    #[must_use]
    pub fn started(&self) -> Instant {
        self.started
    }

    /// End of the last iteration; `None` for infinite tracks.
    #[must_use]
    pub fn ends_at(&self) -> Option<Instant> {
        match self.iterations {
            Iterations::Infinite => None,
            Iterations::Count(n) => Some(self.started + self.duration.saturating_mul(n)),
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.ends_at().is_some_and(|end| now >= end)
    }

    /// Progress through the current iteration, or `None` once finished.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        if self.is_finished(now) {
            return None;
        }
        let period = self.duration.as_nanos();
        if period == 0 {
            return Some(0.0);
        }
        let elapsed = now.saturating_duration_since(self.started).as_nanos();
        Some((elapsed % period) as f32 / period as f32)
    }

    /// Sample the track; finished tracks are idle.
    #[must_use]
    pub fn frame(&self, now: Instant) -> AnimationFrame {
        self.progress(now)
            .map_or(AnimationFrame::IDLE, |t| self.animation.sample(t))
    }
}

/// Completion handle returned by [`PinInput::animate`](super::PinInput::animate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTicket {
    animation: Animation,
    ends_at: Instant,
}

impl AnimationTicket {
    #[must_use]
    pub(crate) fn new(animation: Animation, ends_at: Instant) -> Self {
        Self { animation, ends_at }
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.ends_at
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at
    }
}
