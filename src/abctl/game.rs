//! Side colors and terminal game states.
//!
//! Both enums are closed sets. Every relation over them is an exhaustive `match`
//! with no wildcard arm, so a new variant will not compile until each relation
//! decides what to do with it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of a two-player game, or the absence of one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    #[default]
    NullPlayer,
    White,
    Black,
}

impl Player {
    /// The side that follows this one in the White/Black rotation.
    ///
    /// `NullPlayer` is not part of the rotation; it enters it at `White`.
    pub fn next(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
            Player::NullPlayer => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Player::White => "white",
            Player::Black => "black",
            Player::NullPlayer => "null player",
        };
        f.write_str(s)
    }
}

/// How a game ended. `NullOutcome` means no result yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    NullOutcome,
    WhiteWins,
    BlackWins,
    Tie,
}

impl Outcome {
    pub fn winner(self) -> Player {
        match self {
            Outcome::WhiteWins => Player::White,
            Outcome::BlackWins => Player::Black,
            Outcome::Tie | Outcome::NullOutcome => Player::NullPlayer,
        }
    }

    /// The rotation successor of [`Outcome::winner`].
    ///
    /// For outcomes without a winner this still returns a side (`White`), not
    /// `NullPlayer`. Check `winner()` first if that matters.
    pub fn loser(self) -> Player {
        self.winner().next()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tie shares the null label.
        let s = match self {
            Outcome::WhiteWins => "white wins",
            Outcome::BlackWins => "black wins",
            Outcome::Tie | Outcome::NullOutcome => "null outcome",
        };
        f.write_str(s)
    }
}
