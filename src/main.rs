use std::io::{self, BufRead, Write};

use clap::Parser;
use gridclash::render::{coord_label, parse_coord, print_own_board, print_tracking_board};
use gridclash::{init_logging, AttackOutcome, AttackResult, Game, GameStatus, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Grid battle against a hunt/target computer opponent", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for a reproducible game (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = "You", help = "Player name used in announcements")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            println!("Using fixed seed: {} (game will be reproducible)", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut human = Player::new(cli.name, false);
    let mut computer = Player::new("Computer", true);
    human.place_ships_randomly(&mut rng)?;
    computer.place_ships_randomly(&mut rng)?;
    let mut game = Game::new(human, computer);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.status() == GameStatus::InProgress {
        if game.current_player().is_computer() {
            let outcome = game.make_computer_move(&mut rng)?;
            announce("Computer", &outcome);
            continue;
        }

        println!("\nYour fleet:");
        print_own_board(game.current_player().board());
        println!("\nEnemy waters:");
        print_tracking_board(game.opponent().board());
        print!("Target (e.g. B4): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let Some((row, col)) = parse_coord(&line) else {
            println!("Could not read '{}' as a coordinate.", line.trim());
            continue;
        };
        match game.make_move(row, col) {
            Ok(outcome) => {
                if outcome.result == AttackResult::AlreadyAttacked {
                    println!("{} was already attacked.", coord_label(row, col));
                    continue;
                }
                announce("You", &outcome);
            }
            Err(err) => println!("{}", err),
        }
    }

    if let Some(winner) = game.winner() {
        println!("\n{} wins!", winner.name());
    }
    Ok(())
}

fn announce(who: &str, outcome: &AttackOutcome) {
    let at = coord_label(outcome.row, outcome.col);
    match outcome.result {
        AttackResult::Hit => println!("{} hit at {}.", who, at),
        AttackResult::Miss => println!("{} missed at {}.", who, at),
        AttackResult::Sunk(name) => println!("{} sank the {} at {}!", who, name, at),
        AttackResult::AlreadyAttacked => println!("{} repeated {}.", who, at),
    }
}
