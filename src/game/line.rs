//! Directional line scanning over a [`Board`]. Everything here is a pure
//! function of the board contents.

use std::iter;

use super::{Board, Cell, Player, Position};

/// A `(d_row, d_col)` step. Rows grow downward.
pub type Direction = (isize, isize);

pub const HORIZONTAL: Direction = (0, 1);
pub const VERTICAL: Direction = (1, 0);
/// `\` diagonal
pub const DIAGONAL_DOWN_RIGHT: Direction = (1, 1);
/// `/` diagonal
pub const DIAGONAL_DOWN_LEFT: Direction = (1, -1);

/// Scan order for win detection. The first qualifying direction wins.
pub const DIRECTIONS: [Direction; 4] = [HORIZONTAL, VERTICAL, DIAGONAL_DOWN_RIGHT, DIAGONAL_DOWN_LEFT];

/// The contiguous run of `player`'s markers through `origin` along `direction`,
/// ordered end to end: the far negative end first, then `origin`, then the
/// positive side.
///
/// `origin` itself is always included; callers pass the cell that was just
/// played.
pub fn connected_line(
    board: &Board,
    origin: Position,
    direction: Direction,
    player: Player,
) -> Vec<Position> {
    let (d_row, d_col) = direction;
    let marker = player.to_cell();

    let backward = run(board, origin, (-d_row, -d_col), marker);
    let forward = run(board, origin, direction, marker);

    let mut line = Vec::with_capacity(backward.len() + 1 + forward.len());
    line.extend(backward.into_iter().rev());
    line.push(origin);
    line.extend(forward);
    line
}

/// Cells matching `marker` walking away from `origin`, nearest first.
fn run(board: &Board, origin: Position, step: Direction, marker: Cell) -> Vec<Position> {
    iter::successors(board.step(origin, step), |&pos| board.step(pos, step))
        .take_while(|&pos| board[pos] == marker)
        .collect()
}

/// Check if the marker at `origin` completes a line of at least `win_length`.
///
/// Returns the line from the first direction in [`DIRECTIONS`] that qualifies.
/// An empty or out-of-range `origin` never wins.
pub fn find_winning_line(board: &Board, origin: Position, win_length: usize) -> Option<Vec<Position>> {
    let player = board.cell(origin)?.player()?;

    DIRECTIONS
        .iter()
        .map(|&direction| connected_line(board, origin, direction, player))
        .find(|line| line.len() >= win_length)
}
