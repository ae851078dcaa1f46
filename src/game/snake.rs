use super::action::Action;
use super::arena::Point;
use super::direction::Direction;
use crate::consts;
use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

/// A snake on the move
///
/// Positions are the centers of arena tiles, in pixels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    /// The position of the snake's head
    pub(crate) position: Point,

    /// The direction in which the snake is currently facing
    pub(crate) heading: Direction,

    /// The translation applied on each move.  Zero until the snake receives
    /// its first action, so a fresh snake idles in place.
    pub(crate) displacement: Point,

    /// Side length of a tile, i.e., the magnitude of a nonzero displacement
    pub(crate) step: i32,

    /// Past head positions, with the most recent (the current head) at the
    /// end
    pub(crate) segments: VecDeque<Point>,

    /// The maximum length of `segments`
    pub(crate) length: usize,

    /// When the snake last moved
    pub(crate) step_timer: Option<Instant>,

    /// Minimum time between moves
    pub(crate) step_delay: Duration,

    /// Number of moves made since the snake was created
    pub(crate) frame_count: usize,
}

impl Snake {
    /// Create a snake with its head at `position`, facing right, with tiles
    /// of side `step`
    pub fn new(position: Point, step: i32) -> Snake {
        Snake {
            position,
            heading: Direction::Right,
            displacement: Point::ORIGIN,
            step,
            segments: VecDeque::from([position]),
            length: consts::INITIAL_SNAKE_LENGTH,
            step_timer: None,
            step_delay: consts::STEP_DELAY,
            frame_count: 0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Return the cells occupied by the snake, oldest first
    pub fn segments(&self) -> &VecDeque<Point> {
        &self.segments
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Steer the snake.  The new heading takes effect on the next move.
    pub fn control(&mut self, action: Action) {
        self.heading = self.heading.turn(action);
        self.displacement = self.heading.delta(self.step);
    }

    /// Test whether the snake is due to move at `now`, and if so, restart the
    /// step timer
    pub(crate) fn delta_time(&mut self, now: Instant) -> bool {
        let due = self
            .step_timer
            .is_none_or(|then| now.saturating_duration_since(then) > self.step_delay);
        if due {
            self.step_timer = Some(now);
        }
        due
    }

    /// Move the snake one tile along its displacement if it is due to move at
    /// `now`.  Returns whether a move took place.
    pub(crate) fn step(&mut self, now: Instant) -> bool {
        if !self.delta_time(now) {
            return false;
        }
        self.frame_count += 1;
        self.position = self.position + self.displacement;
        self.segments.push_back(self.position);
        while self.segments.len() > self.length {
            let _ = self.segments.pop_front();
        }
        true
    }

    /// Extend the snake's maximum length in response to eating food
    pub(crate) fn grow(&mut self) {
        self.length += consts::SNAKE_GROWTH;
    }

    /// Test whether any two segments coincide
    pub fn has_self_collision(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.segments.len());
        !self.segments.iter().all(|&p| seen.insert(p))
    }

    /// Test whether the snake has gone too long relative to its length
    pub fn is_starving(&self) -> bool {
        self.frame_count > consts::STARVATION_FACTOR * self.length
    }
}
