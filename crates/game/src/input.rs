//! Player input handling.
//!
//! Raw input is reduced to a horizontal axis and a jump button. An
//! [`InputScript`] replays a fixed sequence of inputs, which is how the
//! headless runner and the tests drive the simulation.

use serde::{Deserialize, Serialize};

/// Player input for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Horizontal axis, -1 (left) to 1 (right).
    pub horizontal: f32,

    /// Jump button held.
    pub jump: bool,
}

impl PlayerInput {
    /// Input from a raw axis value.
    pub fn new(horizontal: f32, jump: bool) -> Self {
        Self { horizontal, jump }
    }

    /// Input from digital left/right keys.
    pub fn from_keys(left: bool, right: bool, jump: bool) -> Self {
        let mut horizontal = 0.0;
        if left {
            horizontal -= 1.0;
        }
        if right {
            horizontal += 1.0;
        }
        Self { horizontal, jump }
    }

    /// Horizontal axis clamped to [-1, 1]. Non-finite input reads as 0.
    pub fn axis(&self) -> f32 {
        if self.horizontal.is_finite() {
            self.horizontal.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

/// One input held for a number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub frames: u32,
    pub input: PlayerInput,
}

/// A replayable sequence of inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    segments: Vec<ScriptSegment>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `input` held for `frames` frames.
    #[must_use]
    pub fn hold(mut self, input: PlayerInput, frames: u32) -> Self {
        if frames > 0 {
            self.segments.push(ScriptSegment { frames, input });
        }
        self
    }

    /// Append `frames` frames of no input.
    #[must_use]
    pub fn idle(self, frames: u32) -> Self {
        self.hold(PlayerInput::default(), frames)
    }

    /// Total number of frames in the script.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.frames as usize).sum()
    }

    /// No frames to play.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-frame inputs in order.
    pub fn frames(&self) -> impl Iterator<Item = PlayerInput> + '_ {
        self.segments
            .iter()
            .flat_map(|s| std::iter::repeat(s.input).take(s.frames as usize))
    }

    /// The script the headless runner uses when none is given: settle, run
    /// right, jump, run back left.
    pub fn demo() -> Self {
        Self::new()
            .idle(30)
            .hold(PlayerInput::new(1.0, false), 150)
            .hold(PlayerInput::new(1.0, true), 10)
            .hold(PlayerInput::new(1.0, false), 60)
            .hold(PlayerInput::new(-1.0, false), 240)
            .idle(30)
    }
}
