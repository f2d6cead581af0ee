//! Surviving moves out of a single position

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{POW3, StateIndex};

/// Ordered set of successor states reachable from `source` by placing an O.
///
/// Each successor differs from the source on exactly one square, so the set is
/// stored as a bitmask of those squares. Membership and removal are O(1) and
/// iteration is in ascending square order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    source: StateIndex,
    squares: u16,
}

impl MoveSet {
    /// Every empty square of `source` as a move.
    pub fn all_moves(source: StateIndex) -> Self {
        let squares = (0..9)
            .filter(|&pos| source.digit(pos) == 0)
            .fold(0u16, |mask, pos| mask | (1 << pos));
        MoveSet { source, squares }
    }

    pub fn len(&self) -> usize {
        self.squares.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.squares == 0
    }

    /// Square that turns `source` into `successor`, if it is a single O placement.
    fn square_of(&self, successor: StateIndex) -> Option<usize> {
        let delta = successor.value().checked_sub(self.source.value())?;
        let pos = POW3.iter().position(|&power| power == delta)?;
        (self.source.digit(pos) == 0).then_some(pos)
    }

    pub fn contains(&self, successor: StateIndex) -> bool {
        self.square_of(successor)
            .is_some_and(|pos| self.squares & (1 << pos) != 0)
    }

    /// Remove a successor. Returns `true` if it was present.
    pub fn remove(&mut self, successor: StateIndex) -> bool {
        match self.square_of(successor) {
            Some(pos) if self.squares & (1 << pos) != 0 => {
                self.squares &= !(1 << pos);
                true
            }
            _ => false,
        }
    }

    /// Drop every successor.
    pub fn clear(&mut self) {
        self.squares = 0;
    }

    /// Squares still available, ascending
    pub fn squares(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(|&pos| self.squares & (1 << pos) != 0)
    }

    /// Successor states, ascending by square
    pub fn successors(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.squares().map(|pos| self.source.place_o(pos))
    }

    /// Pick one successor uniformly at random.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<StateIndex> {
        if self.is_empty() {
            return None;
        }
        let nth = rng.random_range(0..self.len());
        self.successors().nth(nth)
    }
}
