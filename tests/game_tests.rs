use gridclash::{AttackResult, Game, GameError, GameStatus, Orientation, Player, Ship, ShipType};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn ship(name: &'static str, length: usize) -> Ship {
    Ship::new(ShipType::new(name, length))
}

fn two_player_game() -> Game {
    let mut p1 = Player::new("One", false);
    let mut p2 = Player::new("Two", false);
    p1.board_mut()
        .place_ship(ship("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    p2.board_mut()
        .place_ship(ship("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    Game::new(p1, p2)
}

#[test]
fn miss_passes_the_turn() {
    let mut game = two_player_game();
    assert_eq!(game.current_player().name(), "One");
    let outcome = game.make_move(9, 9).unwrap();
    assert_eq!(outcome.result, AttackResult::Miss);
    assert_eq!(game.current_player().name(), "Two");
}

#[test]
fn hit_passes_the_turn() {
    let mut game = two_player_game();
    let outcome = game.make_move(0, 0).unwrap();
    assert_eq!(outcome.result, AttackResult::Hit);
    assert_eq!(game.current_player().name(), "Two");
}

#[test]
fn sunk_keeps_the_turn() {
    let mut p1 = Player::new("One", false);
    let mut p2 = Player::new("Two", false);
    p1.board_mut()
        .place_ship(ship("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    p2.board_mut()
        .place_ship(ship("Submarine", 1), 5, 5, Orientation::Horizontal)
        .unwrap();
    p2.board_mut()
        .place_ship(ship("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    let mut game = Game::new(p1, p2);
    let outcome = game.make_move(5, 5).unwrap();
    assert_eq!(outcome.result, AttackResult::Sunk("Submarine"));
    assert_eq!(game.current_player().name(), "One");
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn already_attacked_does_not_advance_the_turn() {
    let mut game = two_player_game();
    game.make_move(9, 9).unwrap();
    game.make_move(8, 8).unwrap();
    let outcome = game.make_move(9, 9).unwrap();
    assert_eq!(outcome.result, AttackResult::AlreadyAttacked);
    assert_eq!(game.current_player().name(), "One");
}

#[test]
fn finishing_blow_ends_the_game_and_records_the_winner() {
    let mut p1 = Player::new("One", false);
    let mut p2 = Player::new("Two", false);
    p1.board_mut()
        .place_ship(ship("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    p2.board_mut()
        .place_ship(ship("Submarine", 1), 3, 3, Orientation::Horizontal)
        .unwrap();
    let mut game = Game::new(p1, p2);
    let outcome = game.make_move(3, 3).unwrap();
    assert_eq!(outcome.result, AttackResult::Sunk("Submarine"));
    assert_eq!(game.status(), GameStatus::Ended);
    assert_eq!(game.winner().unwrap().name(), "One");
    assert_eq!(game.make_move(0, 0).unwrap_err(), GameError::GameOver);
}

#[test]
fn out_of_bounds_moves_are_rejected_without_turn_change() {
    let mut game = two_player_game();
    assert_eq!(
        game.make_move(0, 10).unwrap_err(),
        GameError::OutOfBounds(0, 10)
    );
    assert_eq!(game.current_player().name(), "One");
}

#[test]
fn computer_move_requires_a_computer() {
    let mut game = two_player_game();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        game.make_computer_move(&mut rng).unwrap_err(),
        GameError::NotComputersTurn
    );
}

#[test]
fn computer_move_feeds_targeting_state() {
    let mut human = Player::new("One", false);
    let mut computer = Player::new("Two", true);
    // cover the human board completely so the computer's first shot must hit
    for row in 0..10 {
        human
            .board_mut()
            .place_ship(ship("Barge", 10), row, 0, Orientation::Horizontal)
            .unwrap();
    }
    computer
        .board_mut()
        .place_ship(ship("Destroyer", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    let mut game = Game::new(human, computer);
    game.make_move(5, 5).unwrap();

    let mut rng = SmallRng::seed_from_u64(9);
    let outcome = game.make_computer_move(&mut rng).unwrap();
    assert_eq!(outcome.result, AttackResult::Hit);
    let queue = game.player(1).target_queue();
    assert!(!queue.is_empty());
    for &(r, c) in &queue {
        assert_eq!(r.abs_diff(outcome.row) + c.abs_diff(outcome.col), 1);
    }
}
