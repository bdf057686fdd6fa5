use gridclash::{Ship, ShipType, FLEET};

#[test]
fn hits_saturate_at_length() {
    let mut ship = Ship::new(ShipType::new("Test", 3));
    for n in 1..=5usize {
        ship.hit();
        assert_eq!(ship.hit_count(), n.min(3));
    }
}

#[test]
fn sunk_exactly_at_length_and_stays_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(ship.is_sunk());
    // further hits change nothing
    ship.hit();
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), 2);
}

#[test]
fn health_counts_down_to_zero() {
    let mut ship = Ship::new(ShipType::new("Test", 4));
    assert_eq!(ship.health(), 4);
    ship.hit();
    ship.hit();
    assert_eq!(ship.health(), 2);
    ship.hit();
    ship.hit();
    ship.hit();
    assert_eq!(ship.health(), 0);
}

#[test]
fn catalog_names_and_lengths() {
    let lengths: Vec<(&str, usize)> = FLEET.iter().map(|t| (t.name(), t.length())).collect();
    assert_eq!(
        lengths,
        vec![
            ("Carrier", 5),
            ("Battleship", 4),
            ("Cruiser", 3),
            ("Destroyer", 2),
            ("Submarine", 1),
        ]
    );
}
