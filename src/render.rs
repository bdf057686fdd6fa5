//! Terminal rendering and coordinate parsing for the binaries.
//!
//! Presentation glue only: everything here reads the core through its
//! public query surface.

use crate::board::Gameboard;
use crate::config::BOARD_SIZE;

/// Parse a letter-number coordinate such as `B4` into (row, col).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// `B4`-style label for (row, col).
pub fn coord_label(row: usize, col: usize) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

fn print_rows(cell: impl Fn(usize, usize) -> char) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!(" {}", (b'A' + col as u8) as char);
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!("{:2} ", row + 1);
        for col in 0..BOARD_SIZE {
            print!(" {}", cell(row, col));
        }
        println!();
    }
}

/// Render `board` from its owner's side: ships revealed.
pub fn print_own_board(board: &Gameboard) {
    print_rows(|row, col| {
        match (board.is_attacked(row, col), board.ship_at(row, col)) {
            (true, Some(_)) => 'X',
            (true, None) => 'o',
            (false, Some(_)) => 'S',
            (false, None) => '.',
        }
    });
}

/// Render `board` as the attacker sees it: hits, misses, unknown water.
pub fn print_tracking_board(board: &Gameboard) {
    print_rows(|row, col| {
        match (board.is_attacked(row, col), board.ship_at(row, col)) {
            (true, Some(_)) => 'X',
            (true, None) => 'o',
            _ => '.',
        }
    });
}
