//! The Snake simulation: arena geometry, the snake and its food, and the
//! [`Game`] that steps them forwards in time.
mod action;
mod arena;
mod direction;
mod food;
mod snake;
pub use self::action::{Action, InvalidActionInput};
pub use self::arena::{Arena, ArenaError, Point};
pub use self::direction::Direction;
pub use self::food::Food;
pub use self::snake::Snake;
use crate::consts;
use log::{debug, info};
use rand::Rng;
use std::fmt;
use std::time::Instant;

/// A running session of Snake.
///
/// Whenever the snake dies, a new snake and a new piece of food are placed at
/// random and play continues; the death is reported through the [`Outcome`]
/// of that call to [`Game::update()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    arena: Arena,
    snake: Snake,
    food: Food,
    score: u32,
    reward: i32,
    game_over: bool,
    best_score: u32,
    games_played: u32,
    last_death: Option<Death>,
}

impl Game<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Game::new_with_rng(rand::rng())
    }
}

impl Default for Game<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Game::new()
    }
}

impl<R: Rng> Game<R> {
    /// Start a game in the [standard arena][Arena::STANDARD]
    pub fn new_with_rng(rng: R) -> Game<R> {
        Game::with_arena(Arena::STANDARD, rng)
    }

    pub fn with_arena(arena: Arena, mut rng: R) -> Game<R> {
        let snake = Snake::new(arena.random_cell(&mut rng), arena.tile_size());
        let food = Food::new(arena, &mut rng);
        debug!(
            "Starting game 1: snake at {:?}, food at {:?}",
            snake.position(),
            food.position()
        );
        Game {
            rng,
            arena,
            snake,
            food,
            score: 0,
            reward: 0,
            game_over: false,
            best_score: 0,
            games_played: 1,
            last_death: None,
        }
    }

    /// Replace the snake and the food with fresh ones at random positions.
    /// The score and reward are left alone.
    pub fn new_game(&mut self) {
        self.snake = Snake::new(
            self.arena.random_cell(&mut self.rng),
            self.arena.tile_size(),
        );
        self.food = Food::new(self.arena, &mut self.rng);
        self.games_played += 1;
        debug!(
            "Starting game {}: snake at {:?}, food at {:?}",
            self.games_played,
            self.snake.position(),
            self.food.position()
        );
    }

    /// Advance the game to time `now`.
    ///
    /// The snake is checked for running into itself, then for reaching the
    /// food, then for leaving the arena or starving, and finally moved if its
    /// step delay has elapsed.  A death starts a new game immediately and
    /// skips the remaining checks.
    pub fn update(&mut self, now: Instant) -> Outcome {
        self.reward = 0;
        self.game_over = false;
        if self.snake.has_self_collision() {
            return self.end_game(Death::SelfCollision);
        }
        if self.snake.position() == self.food.position() {
            self.food.relocate(self.arena, &mut self.rng);
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
            self.reward = consts::FOOD_REWARD;
            self.snake.grow();
            debug!(
                "Snake ate food at {:?}; score is now {}, food moved to {:?}",
                self.snake.position(),
                self.score,
                self.food.position()
            );
        }
        if !self.arena.contains(self.snake.position()) {
            return self.end_game(Death::Border);
        }
        if self.snake.is_starving() {
            return self.end_game(Death::Starvation);
        }
        self.snake.step(now);
        self.outcome()
    }

    fn end_game(&mut self, death: Death) -> Outcome {
        info!(
            "Game {} over: snake {death} with score {} after {} moves",
            self.games_played,
            self.score,
            self.snake.frame_count()
        );
        self.last_death = Some(death);
        self.new_game();
        self.game_over = true;
        self.score = 0;
        self.reward = consts::DEATH_PENALTY;
        self.outcome()
    }
}

impl<R> Game<R> {
    /// Steer the snake
    pub fn control(&mut self, action: Action) {
        self.snake.control(action);
    }

    /// Steer the snake with a one-hot encoded action (see [`Action::one_hot()`])
    ///
    /// # Errors
    ///
    /// Returns `Err` if `triple` is not one of the three one-hot encodings, in
    /// which case the snake is left unchanged.
    pub fn control_one_hot(&mut self, triple: [u8; 3]) -> Result<(), InvalidActionInput> {
        self.control(Action::try_from(triple)?);
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The reward signalled by the most recent update
    pub fn reward(&self) -> i32 {
        self.reward
    }

    /// Whether the most recent update ended a game
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Highest score reached so far in this session
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Number of games started in this session, including the current one
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// How the previous game ended, if there was one
    pub fn last_death(&self) -> Option<Death> {
        self.last_death
    }

    fn outcome(&self) -> Outcome {
        Outcome {
            game_over: self.game_over,
            reward: self.reward,
        }
    }
}

/// The result of a call to [`Game::update()`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Outcome {
    /// Whether the snake died during this update
    pub game_over: bool,
    /// +10 for eating food, -10 for dying, 0 otherwise
    pub reward: i32,
}

/// Ways in which a game can end
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Death {
    SelfCollision,
    Border,
    Starvation,
}

impl Death {
    pub fn as_str(self) -> &'static str {
        match self {
            Death::SelfCollision => "bit itself",
            Death::Border => "hit the wall",
            Death::Starvation => "starved",
        }
    }
}

impl fmt::Display for Death {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
