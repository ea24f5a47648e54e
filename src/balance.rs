//! Balance puzzle data structures.
//!
//! Twelve balls, one secretly heavier or lighter than the rest, a two-pan
//! scale, unlimited weighings, one accusation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::balance_logic;
use crate::constants::{BASELINE_WEIGHT, WEIGHINGS_BEFORE_GUESS};

/// A single ball in the puzzle set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Stable id, 1..=N for the session.
    pub id: u32,
    /// Exactly the baseline unless this is the fake ball.
    pub weight: f64,
}

impl Ball {
    pub fn is_heavy(&self) -> bool {
        self.weight > BASELINE_WEIGHT
    }

    pub fn is_light(&self) -> bool {
        self.weight < BASELINE_WEIGHT
    }

    /// Whether this ball's weight differs from the baseline in either direction.
    pub fn is_anomalous(&self) -> bool {
        self.weight != BASELINE_WEIGHT
    }
}

/// One of the two pans on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanSide {
    Left,
    Right,
}

impl PanSide {
    pub const ALL: [PanSide; 2] = [PanSide::Left, PanSide::Right];

    /// Index into the game's pan array.
    pub fn index(&self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => PanSide::Right,
            Self::Right => PanSide::Left,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// The player's accusation about how the fake ball differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessDirection {
    Heavier,
    Lighter,
}

impl GuessDirection {
    pub const ALL: [GuessDirection; 2] = [GuessDirection::Heavier, GuessDirection::Lighter];

    pub fn from_index(index: usize) -> Self {
        Self::ALL
            .get(index)
            .copied()
            .unwrap_or(GuessDirection::Heavier)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Heavier => "heavier",
            Self::Lighter => "lighter",
        }
    }
}

/// Immutable snapshot of one completed weighing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighingRecord {
    /// Balls that sat in the left pan.
    pub left: Vec<Ball>,
    /// Balls that sat in the right pan.
    pub right: Vec<Ball>,
    /// Sign of (left total - right total): +1, 0 or -1, never the raw difference.
    pub outcome: i8,
}

impl WeighingRecord {
    /// Comparison symbol for display: left `>` / `=` / `<` right.
    pub fn symbol(&self) -> &'static str {
        if self.outcome > 0 {
            ">"
        } else if self.outcome < 0 {
            "<"
        } else {
            "="
        }
    }
}

/// Active puzzle session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceGame {
    /// Full ball set, created once per session. Only pan membership changes.
    pub balls: Vec<Ball>,
    /// Ball ids currently on the scale, indexed by `PanSide::index`.
    pub pans: [Vec<u32>; 2],
    /// Pan that newly placed balls go to. None until the player picks one.
    pub active_pan: Option<PanSide>,
    /// Completed weighings, oldest first. Never truncated.
    pub history: Vec<WeighingRecord>,
    /// Verdict of the player's guess. Set once, never reset in-session.
    pub guess_result: Option<bool>,
}

impl BalanceGame {
    /// Create a new session with a freshly generated ball set.
    pub fn new<R: Rng>(count: u32, rng: &mut R) -> Self {
        Self::from_balls(balance_logic::generate_balls(count, rng))
    }

    /// Create a session over an already-built ball set.
    pub fn from_balls(balls: Vec<Ball>) -> Self {
        Self {
            balls,
            pans: [Vec::new(), Vec::new()],
            active_pan: None,
            history: Vec::new(),
            guess_result: None,
        }
    }

    /// Look up a ball by id.
    pub fn ball(&self, id: u32) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    /// Which pan currently holds the given ball, if any.
    pub fn pan_holding(&self, id: u32) -> Option<PanSide> {
        if self.pans[0].contains(&id) {
            Some(PanSide::Left)
        } else if self.pans[1].contains(&id) {
            Some(PanSide::Right)
        } else {
            None
        }
    }

    /// Select the pan that subsequent placements target.
    pub fn select_pan(&mut self, side: PanSide) {
        self.active_pan = Some(side);
    }

    /// Place a ball into the active pan.
    ///
    /// Does nothing (returns false) if no pan is selected, the id is
    /// unknown, or the ball already sits in either pan. A ball never
    /// occupies both pans and never appears twice in one pan.
    pub fn place_ball(&mut self, id: u32) -> bool {
        let side = match self.active_pan {
            Some(side) => side,
            None => return false,
        };
        if self.ball(id).is_none() || self.pan_holding(id).is_some() {
            return false;
        }
        self.pans[side.index()].push(id);
        true
    }

    /// Remove a ball from whichever pan holds it.
    ///
    /// Removing a ball that is not on the scale is a no-op. No pan needs
    /// to be selected.
    pub fn remove_ball(&mut self, id: u32) -> bool {
        match self.pan_holding(id) {
            Some(side) => {
                self.pans[side.index()].retain(|&b| b != id);
                true
            }
            None => false,
        }
    }

    /// Balls not currently on the scale, in id order.
    ///
    /// Always derived from the full set and the pans, never stored.
    pub fn available_balls(&self) -> Vec<&Ball> {
        self.balls
            .iter()
            .filter(|b| self.pan_holding(b.id).is_none())
            .collect()
    }

    /// Balls currently in the given pan, in placement order.
    pub fn pan_balls(&self, side: PanSide) -> Vec<&Ball> {
        self.pans[side.index()]
            .iter()
            .filter_map(|&id| self.ball(id))
            .collect()
    }

    /// The hidden fake ball, if the set has one.
    pub fn anomalous_ball(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.is_anomalous())
    }

    /// Whether the guess action is currently available.
    ///
    /// Unlocks after two recorded weighings and goes away again once a
    /// guess has been made.
    pub fn can_guess(&self) -> bool {
        self.history.len() >= WEIGHINGS_BEFORE_GUESS && self.guess_result.is_none()
    }
}
