use gridclash::{Game, GameStatus, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play(seed1: u64, seed2: u64) -> (String, usize) {
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let mut p1 = Player::new("player1", true);
    let mut p2 = Player::new("player2", true);
    p1.place_ships_randomly(&mut rng1).unwrap();
    p2.place_ships_randomly(&mut rng2).unwrap();

    let mut game = Game::new(p1, p2);
    let mut turns = 0;
    while game.status() == GameStatus::InProgress {
        turns += 1;
        let rng = if game.current_player().name() == "player1" {
            &mut rng1
        } else {
            &mut rng2
        };
        game.make_computer_move(rng).unwrap();
        // every move resolves a fresh cell on a 100-cell board
        assert!(turns <= 200, "game took too many turns");
    }
    (game.winner().unwrap().name().to_string(), turns)
}

#[test]
fn ai_vs_ai_game_terminates_with_a_winner() {
    let (winner, turns) = play(123, 456);
    assert!(winner == "player1" || winner == "player2");
    // sinking one 15-cell fleet takes at least 15 resolving moves
    assert!(turns >= 15);
}

#[test]
fn fixed_seeds_reproduce_the_same_game() {
    assert_eq!(play(42, 1337), play(42, 1337));
}
