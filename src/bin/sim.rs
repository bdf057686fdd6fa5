use anyhow::bail;
use gridclash::{init_logging, Game, GameStatus, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Serialize)]
struct SimReport {
    turns: usize,
    winner: Option<String>,
    player1_ships_left: usize,
    player2_ships_left: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = Player::new("player1", true);
    let mut p2 = Player::new("player2", true);
    p1.place_ships_randomly(&mut rng1)?;
    p2.place_ships_randomly(&mut rng2)?;

    let mut game = Game::new(p1, p2);
    let mut turns = 0usize;
    while game.status() == GameStatus::InProgress {
        let rng = if game.current_player().name() == "player1" {
            &mut rng1
        } else {
            &mut rng2
        };
        game.make_computer_move(rng)?;
        turns += 1;
        if turns > 500 {
            bail!("game did not terminate within 500 moves");
        }
    }

    let ships_left = |index: usize| {
        game.player(index)
            .board()
            .ships()
            .iter()
            .filter(|placed| !placed.ship().is_sunk())
            .count()
    };

    let report = SimReport {
        turns,
        winner: game.winner().map(|p| p.name().to_string()),
        player1_ships_left: ships_left(0),
        player2_ships_left: ships_left(1),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
