use std::fmt;
use std::io::{BufRead, Write};

use log::debug;

use crate::game::{Move, Strategy};

const PROMPT: &str = "Rock, paper, scissors? > ";

/// Reads moves typed at the console. End of input counts as quit.
pub(crate) struct Human<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Human<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Strategy for Human<R, W> {
    fn next_move(&mut self) -> anyhow::Result<Move> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed, quitting");
                return Ok(Move::Quit);
            }
            match line.parse::<Move>() {
                Ok(m) => return Ok(m),
                Err(e) => debug!("rejected input: {}", e),
            }
        }
    }

    fn observe(&mut self, _own: Move, _opponent: Move) {}
}

impl<R, W> fmt::Display for Human<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Human Player")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> Human<Cursor<Vec<u8>>, Vec<u8>> {
        Human::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_accepts_any_case() {
        let mut player = human("ROCK\npaper\n  Scissors \nQuit\n");
        assert_eq!(player.next_move().unwrap(), Move::Rock);
        assert_eq!(player.next_move().unwrap(), Move::Paper);
        assert_eq!(player.next_move().unwrap(), Move::Scissors);
        assert_eq!(player.next_move().unwrap(), Move::Quit);
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut player = human("lizard\n\nspock\npaper\n");
        assert_eq!(player.next_move().unwrap(), Move::Paper);
        let prompts = String::from_utf8(player.output).unwrap();
        assert_eq!(prompts.matches(PROMPT).count(), 4);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut player = human("");
        assert_eq!(player.next_move().unwrap(), Move::Quit);

        let mut player = human("nope");
        assert_eq!(player.next_move().unwrap(), Move::Quit);
    }
}
