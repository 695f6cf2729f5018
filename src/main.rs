mod game;
mod human;
mod rock_paper_scissors;
mod strategy;

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Move, Strategy};
use crate::human::Human;
use crate::rock_paper_scissors::Match;
use crate::strategy::{Cycle, Fixed, ReflectLast, UniformRandom};

const MENU: &str = "
Players:
    1. Cycle player
    2. Reflect player
    3. Rock player
    4. Random player

Select the player strategy you want to play against: ";

/// Play rock, paper, scissors against the computer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the opponent's random moves
    #[arg(long)]
    seed: Option<u64>,
    /// Opponent to play against (1-4), skipping the menu
    #[arg(short, long)]
    opponent: Option<String>,
}

fn opponent(choice: &str, rng: StdRng) -> Option<Box<dyn Strategy>> {
    match choice {
        "1" => Some(Box::new(Cycle::new(rng))),
        "2" => Some(Box::new(ReflectLast::new(rng))),
        "3" => Some(Box::new(Fixed::new(Move::Rock))),
        "4" => Some(Box::new(UniformRandom::new(rng))),
        _ => None,
    }
}

/// Shows the menu until a valid option is picked. `None` if input runs out.
fn select_opponent<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    rng: StdRng,
) -> anyhow::Result<Option<Box<dyn Strategy>>> {
    write!(output, "{}", MENU)?;
    output.flush()?;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim_end_matches(['\r', '\n']);
        if let Some(player) = opponent(choice, rng.clone()) {
            return Ok(Some(player));
        }
        debug!("rejected menu choice {:?}", choice);
        write!(
            output,
            "\nError: {} is not a valid option! Please select an option below.\n{}",
            choice, MENU
        )?;
        output.flush()?;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("seed {}", seed);
    let rng = StdRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let preset = args.opponent.as_deref().and_then(|choice| {
        let player = opponent(choice, rng.clone());
        if player.is_none() {
            warn!("unknown opponent {:?}, showing menu", choice);
        }
        player
    });
    let player_two = match preset {
        Some(player) => player,
        None => match select_opponent(&mut stdin.lock(), &mut stdout, rng)? {
            Some(player) => player,
            None => return Ok(()),
        },
    };

    println!(
        "\nGame start!\nYou are playing against {}\nEnter 'quit' to exit the game! ",
        player_two
    );

    let player_one = Human::new(stdin.lock(), io::stdout());
    let mut game = Match::new(Box::new(player_one), player_two);
    game.run_match(&mut stdout)?;

    Ok(())
}
