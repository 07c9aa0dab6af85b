use crate::core::{Grid, Position, Stone};

/// 判定する4方向 (横・縦・右下がり・右上がり)
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Stones needed in one line to win. Longer lines also win.
pub const WIN_LENGTH: usize = 5;

/// Number of consecutive `stone`s starting next to `from` and walking by (dx, dy).
pub fn run_length(grid: &Grid, from: Position, stone: Stone, dx: i32, dy: i32) -> usize {
    let mut count = 0;
    let mut step = 1;
    while let Some(pos) = grid.offset(from, dx, dy, step) {
        if grid.get(pos) != Some(stone) {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Length of the line through `pos` along (dx, dy), counting `pos` itself once.
pub fn line_length(grid: &Grid, pos: Position, dx: i32, dy: i32) -> usize {
    match grid.get(pos) {
        Some(stone) if !stone.is_empty() => {
            1 + run_length(grid, pos, stone, dx, dy) + run_length(grid, pos, stone, -dx, -dy)
        }
        _ => 0,
    }
}

/// 五目並んだか判定 (直前に置いた石の位置で呼ぶ)
pub fn is_five(grid: &Grid, pos: Position) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| line_length(grid, pos, dx, dy) >= WIN_LENGTH)
}
