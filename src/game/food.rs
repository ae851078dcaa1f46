use super::arena::{Arena, Point};
use rand::Rng;

/// The single piece of food on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Food {
    pub(crate) position: Point,
}

impl Food {
    /// Place a new piece of food in a random cell of `arena`
    pub fn new<R: Rng>(arena: Arena, rng: &mut R) -> Food {
        Food {
            position: arena.random_cell(rng),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the food to a random cell of `arena`.  The snake's body is not
    /// avoided, so the food may land underneath it.
    pub(crate) fn relocate<R: Rng>(&mut self, arena: Arena, rng: &mut R) {
        self.position = arena.random_cell(rng);
    }
}
