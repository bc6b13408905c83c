//! Stateless text rendering for tic-tac-toe.

use super::orchestrator::GameEvent;
use crate::games::tictactoe::{Board, Mark, Square};

const ROW_SEPARATOR: &str = "---+---+---";

/// Renders the board as a 3x3 grid. Empty cells show their own index.
pub fn render_board(board: &Board) -> String {
    let mut result = String::from("\n");
    for (row, cells) in board.squares().chunks(3).enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, square)| symbol(row * 3 + col, *square))
            .collect();
        result.push_str(&format!(" {} \n", symbols.join(" | ")));
        if row < 2 {
            result.push_str(ROW_SEPARATOR);
            result.push('\n');
        }
    }
    result
}

fn symbol(cell: usize, square: Square) -> String {
    match square {
        Square::Empty => cell.to_string(),
        Square::Occupied(Mark::X) => "X".to_string(),
        Square::Occupied(Mark::O) => "O".to_string(),
    }
}

/// Text for an event, or `None` when the event has no console output.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Welcome => Some("Welcome to Tic-Tac-Toe!".to_string()),
        GameEvent::BoardChanged(board) => Some(render_board(board)),
        // The board redraw that follows already shows the move.
        GameEvent::MoveMade(_) => None,
        GameEvent::InvalidMove => Some("Invalid move. Please try again.".to_string()),
        GameEvent::GameOver(outcome) => Some(outcome.to_string()),
        GameEvent::Goodbye => Some("Thank you for playing Tic-Tac-Toe. Goodbye!".to_string()),
    }
}
