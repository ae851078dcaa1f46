use super::action::Action;
use super::arena::Point;
use enum_map::Enum;

/// A heading of the snake.  Variants are declared in clockwise order, and
/// turning is done by stepping through that order.
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// The direction reached by one quarter-turn clockwise
    pub fn clockwise(self) -> Direction {
        Direction::from_usize((self.into_usize() + 1) % Direction::LENGTH)
    }

    /// The direction reached by one quarter-turn counter-clockwise
    pub fn counter_clockwise(self) -> Direction {
        Direction::from_usize((self.into_usize() + Direction::LENGTH - 1) % Direction::LENGTH)
    }

    /// The heading that results from applying `action` while facing `self`
    pub fn turn(self, action: Action) -> Direction {
        match action {
            Action::Straight => self,
            Action::Right => self.clockwise(),
            Action::Left => self.counter_clockwise(),
        }
    }

    /// Return the relative action that takes a snake facing `self` to facing
    /// `target`.  Returns `None` if `target` is the reverse of `self`, which no
    /// single action can reach.
    pub fn steer_toward(self, target: Direction) -> Option<Action> {
        if target == self {
            Some(Action::Straight)
        } else if target == self.clockwise() {
            Some(Action::Right)
        } else if target == self.counter_clockwise() {
            Some(Action::Left)
        } else {
            None
        }
    }

    pub fn reverse(self) -> Direction {
        self.clockwise().clockwise()
    }

    /// Displacement of a single step of `step` pixels in this direction.  The
    /// y axis points down.
    pub fn delta(self, step: i32) -> Point {
        match self {
            Direction::Right => Point::new(step, 0),
            Direction::Down => Point::new(0, step),
            Direction::Left => Point::new(-step, 0),
            Direction::Up => Point::new(0, -step),
        }
    }
}
