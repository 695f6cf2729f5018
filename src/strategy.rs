use std::fmt;

use log::debug;
use rand::rngs::StdRng;

use crate::game::{Move, Strategy};

/// Always plays the same move.
pub(crate) struct Fixed {
    throw: Move,
}

impl Fixed {
    pub(crate) fn new(throw: Move) -> Self {
        debug_assert!(throw.is_throw(), "a fixed strategy cannot play {}", throw);
        Self { throw }
    }
}

impl Strategy for Fixed {
    fn next_move(&mut self) -> anyhow::Result<Move> {
        Ok(self.throw)
    }

    fn observe(&mut self, _own: Move, _opponent: Move) {}
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self.throw {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Quit => "Quitter",
        };
        write!(f, "{} Player", name)
    }
}

pub(crate) struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    pub(crate) fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for UniformRandom {
    fn next_move(&mut self) -> anyhow::Result<Move> {
        Ok(Move::random(&mut self.rng))
    }

    fn observe(&mut self, _own: Move, _opponent: Move) {}
}

impl fmt::Display for UniformRandom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Random Player")
    }
}

/// Plays whatever the opponent played last round.
pub(crate) struct ReflectLast {
    rng: StdRng,
    primed: bool,
    last_opponent: Option<Move>,
}

impl ReflectLast {
    pub(crate) fn new(rng: StdRng) -> Self {
        Self {
            rng,
            primed: false,
            last_opponent: None,
        }
    }
}

impl Strategy for ReflectLast {
    fn next_move(&mut self) -> anyhow::Result<Move> {
        if self.primed {
            if let Some(last) = self.last_opponent.filter(|m| m.is_throw()) {
                return Ok(last);
            }
            debug!("reflect: no opponent move on record, playing random");
        }
        self.primed = true;
        Ok(Move::random(&mut self.rng))
    }

    fn observe(&mut self, _own: Move, opponent: Move) {
        self.last_opponent = Some(opponent);
    }
}

impl fmt::Display for ReflectLast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Reflect Player")
    }
}

/// Walks rock -> paper -> scissors from a random starting point.
pub(crate) struct Cycle {
    rng: StdRng,
    previous: Option<Move>,
}

impl Cycle {
    pub(crate) fn new(rng: StdRng) -> Self {
        Self { rng, previous: None }
    }
}

impl Strategy for Cycle {
    fn next_move(&mut self) -> anyhow::Result<Move> {
        let next = match self.previous {
            Some(previous) => previous.next(),
            None => Move::random(&mut self.rng),
        };
        self.previous = Some(next);
        Ok(next)
    }

    fn observe(&mut self, _own: Move, _opponent: Move) {}
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cycle Player")
    }
}
