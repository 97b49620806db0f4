use std::collections::HashSet;

use crate::core::*;
use crate::test::test_util::{GameTestState, level_rows};

fn set(positions: &[(i32, i32)]) -> HashSet<Vec2> {
    positions.iter().map(|&p| Vec2::from(p)).collect()
}

#[test]
fn parses_simple_level() {
    let board = Board::build_from_rows(["######", "#-$-.#", "#-$-.#", "#-@--#", "######"]);

    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 5);
    assert_eq!(board.boxes(), &set(&[(2, 1), (2, 2)]));
    assert_eq!(board.goals(), &set(&[(4, 1), (4, 2)]));
    assert_eq!(board.player(), Some(Vec2::new(2, 3)));

    let mut border = HashSet::new();
    for x in 0..6 {
        border.insert(Vec2::new(x, 0));
        border.insert(Vec2::new(x, 4));
    }
    for y in 1..4 {
        border.insert(Vec2::new(0, y));
        border.insert(Vec2::new(5, y));
    }
    assert_eq!(board.walls(), &border);
}

#[test]
fn combined_symbols_fill_both_sets() {
    let board = Board::build_from_rows(["#####", "#+*$#", "#####"]);

    assert_eq!(board.player(), Some(Vec2::new(1, 1)));
    assert_eq!(board.goals(), &set(&[(1, 1), (2, 1)]));
    assert_eq!(board.boxes(), &set(&[(2, 1), (3, 1)]));
    assert_eq!(board.symbol_at(1, 1), Symbol::PlayerOnGoal);
    assert_eq!(board.symbol_at(2, 1), Symbol::BoxOnGoal);
}

#[test]
fn empty_input_is_a_degenerate_board() {
    let board = Board::build_from_rows(Vec::<String>::new());

    assert_eq!(board.width(), 0);
    assert_eq!(board.height(), 0);
    assert!(board.walls().is_empty());
    assert!(board.goals().is_empty());
    assert!(board.boxes().is_empty());
    assert_eq!(board.player(), None);
    assert_eq!(Board::from_text(""), board);
}

#[test]
fn line_endings_do_not_shift_columns() {
    let board = Board::build_from_rows(["#####\r\n", "#@$.#  \n", "#####\n"]);

    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 3);
    assert_eq!(board, Board::build_from_rows(["#####", "#@$.#", "#####"]));
}

#[test]
fn unknown_symbols_and_spaces_are_floor() {
    let board = Board::build_from_rows(["#######", "#@ x-?#", "#######"]);

    for x in 2..6 {
        assert_eq!(board.symbol_at(x, 1), Symbol::Floor);
    }
    assert_eq!(board.walls().len(), 16);
}

#[test]
fn ragged_rows_are_read_as_far_as_they_go() {
    let board = Board::build_from_rows(["#####", "#@", "#-$.#", "###"]);

    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 4);
    assert_eq!(board.player(), Some(Vec2::new(1, 1)));
    assert_eq!(board.boxes(), &set(&[(2, 2)]));
    assert_eq!(board.symbol_at(4, 3), Symbol::Floor);
}

#[test]
fn width_comes_from_first_row() {
    let board = Board::build_from_rows(["###", "#@$.#", "#####"]);
    assert_eq!(board.width(), 3);
}

#[test]
fn level_without_player_parses() {
    let board = Board::build_from_rows(["####", "#$.#", "####"]);
    assert_eq!(board.player(), None);
    assert_eq!(board.boxes().len(), 1);
}

#[test]
fn last_player_symbol_wins() {
    let board = Board::build_from_rows(["######", "#@-+-#", "######"]);

    assert_eq!(board.player(), Some(Vec2::new(3, 1)));
    assert_eq!(board.symbol_at(1, 1), Symbol::Floor);
    assert_eq!(board.goals(), &set(&[(3, 1)]));
}

#[test]
fn rendering_reproduces_dash_floor_levels() {
    let level = r#"
--#####--
###---#--
#.@$--#--
###-$.#--
#.##$-#--
#-#-.-##-
#$-*$$.#-
#---.--#-
########-
"#;
    let game = GameTestState::new(level);
    game.assert_matches(level);
    assert_eq!(game.board.rows(), level_rows(level));
}

#[test]
fn symbol_chars_round_trip() {
    for ch in ['#', '-', '.', '$', '*', '@', '+'] {
        assert_eq!(Symbol::from_char(ch).to_char(), ch);
    }
    assert_eq!(Symbol::from_char(' '), Symbol::Floor);
}
