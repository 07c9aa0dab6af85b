use super::types::{Position, Stone};
use serde::{Deserialize, Serialize};

/// 正方形の交点グリッド (サイズは生成後に変わらない)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Stone>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// 盤外なら None
    pub fn get(&self, pos: Position) -> Option<Stone> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    pub(crate) fn set(&mut self, pos: Position, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Stone::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == stone).count()
    }

    /// Column-major scan (x outer, y inner) of the empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size)
            .flat_map(move |x| (0..self.size).map(move |y| Position::new(x, y)))
            .filter(move |&pos| self.is_empty_at(pos))
    }

    /// `pos` を (dx, dy) * steps だけずらした座標 (盤外なら None)
    pub fn offset(&self, pos: Position, dx: i32, dy: i32, steps: i32) -> Option<Position> {
        let shift = |v: usize, d: i32| -> Option<usize> {
            let moved = isize::try_from(v)
                .ok()?
                .checked_add((d as isize).checked_mul(steps as isize)?)?;
            usize::try_from(moved).ok().filter(|&m| m < self.size)
        };
        Some(Position::new(shift(pos.x, dx)?, shift(pos.y, dy)?))
    }

    fn index(&self, pos: Position) -> usize {
        pos.y * self.size + pos.x
    }
}
