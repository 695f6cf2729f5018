use std::io::Write;

use log::{debug, info};

use crate::game::{Move, Outcome, Strategy};

pub(crate) const ROUND_CAP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchState {
    AwaitingMoves,
    RoundResolved,
    Finished,
}

pub(crate) struct Match {
    player_one: Box<dyn Strategy>,
    player_two: Box<dyn Strategy>,
    scores: (u32, u32),
    round: u32,
    state: MatchState,
}

impl Match {
    pub(crate) fn new(player_one: Box<dyn Strategy>, player_two: Box<dyn Strategy>) -> Self {
        Self {
            player_one,
            player_two,
            scores: (0, 0),
            round: 0,
            state: MatchState::AwaitingMoves,
        }
    }

    #[cfg(test)]
    pub(crate) fn scores(&self) -> (u32, u32) {
        self.scores
    }

    #[cfg(test)]
    pub(crate) fn round(&self) -> u32 {
        self.round
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> MatchState {
        self.state
    }

    // Moves that differ and where one does not beat two are a win for two.
    pub(crate) fn resolve_round(&mut self, one: Move, two: Move) -> Outcome {
        let player_one_wins = one.beats(two);
        let outcome = if one == two {
            Outcome::Tie
        } else if player_one_wins {
            self.scores.0 += 1;
            Outcome::PlayerOneWins
        } else {
            self.scores.1 += 1;
            Outcome::PlayerTwoWins
        };
        self.state = MatchState::RoundResolved;
        outcome
    }

    /// Plays rounds until the cap is reached or either side quits, then
    /// reports the result.
    pub(crate) fn run_match<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        info!("{} vs {}", self.player_one, self.player_two);

        while self.state != MatchState::Finished {
            if self.round >= ROUND_CAP {
                self.state = MatchState::Finished;
                continue;
            }
            self.state = MatchState::AwaitingMoves;
            writeln!(out, "\nRound {} --", self.round)?;

            let one = self.player_one.next_move()?;
            if one == Move::Quit {
                info!("{} quit in round {}", self.player_one, self.round);
                self.state = MatchState::Finished;
                continue;
            }
            let two = self.player_two.next_move()?;
            if two == Move::Quit {
                info!("{} quit in round {}", self.player_two, self.round);
                self.state = MatchState::Finished;
                continue;
            }

            writeln!(out, "You played {}\nOpponent played {}", one, two)?;
            let outcome = self.resolve_round(one, two);
            writeln!(out, "{}", outcome)?;
            debug!("round {}: {} vs {}, {:?}", self.round, one, two, outcome);

            self.player_one.observe(one, two);
            self.player_two.observe(two, one);
            self.round += 1;

            writeln!(
                out,
                "Score: Player One {}, Player Two {}",
                self.scores.0, self.scores.1
            )?;
        }

        info!(
            "match finished after {} rounds, score {}-{}",
            self.round, self.scores.0, self.scores.1
        );
        writeln!(out, "Game over!")?;
        self.announce_winner(out)
    }

    pub(crate) fn announce_winner<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let (one, two) = self.scores;
        if one > two {
            writeln!(out, "** Congratulations. You Won! **")?;
            writeln!(out, " You scored: {} *** Opponent scored: {}", one, two)?;
        } else if one < two {
            writeln!(out, "** You Lost! **")?;
            writeln!(out, "Opponent scored: {} *** You scored: {}", two, one)?;
        } else {
            writeln!(out, "** TIE **")?;
            writeln!(out, " You scored: {} *** Opponent scored: {}", one, two)?;
        }
        Ok(())
    }
}
