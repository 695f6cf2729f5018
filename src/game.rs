use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Move {
    Rock,
    Paper,
    Scissors,
    Quit,
}

impl Move {
    /// The three moves that can actually be played, in cycle order.
    pub(crate) const THROWS: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub(crate) fn random<R: Rng>(rng: &mut R) -> Move {
        Self::THROWS.choose(rng).copied().unwrap_or(Move::Rock)
    }

    pub(crate) fn is_throw(self) -> bool {
        self != Move::Quit
    }

    // The move after this one in rock -> paper -> scissors -> rock.
    pub(crate) fn next(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
            Move::Quit => Move::Quit,
        }
    }

    pub(crate) fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            "quit" => Ok(Move::Quit),
            other => bail!("{:?} is not a move", other),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Quit => "quit",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Tie,
    PlayerOneWins,
    PlayerTwoWins,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Outcome::Tie => " ** TIE ** ",
            Outcome::PlayerOneWins => " ** PLAYER ONE WINS ** ",
            Outcome::PlayerTwoWins => " ** PLAYER TWO WINS ** ",
        };
        write!(f, "{}", label)
    }
}

pub(crate) trait Strategy: fmt::Display {
    fn next_move(&mut self) -> anyhow::Result<Move>;

    fn observe(&mut self, own: Move, opponent: Move);
}
