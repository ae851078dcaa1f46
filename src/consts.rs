//! Fixed rules of the game
use std::time::Duration;

/// Side length of the square arena, in pixels
pub const WINDOW: i32 = 1000;

/// Side length of a single cell of the arena, in pixels
pub const TILE_SIZE: i32 = 40;

const _: () = assert!(WINDOW > 0 && TILE_SIZE > 0 && WINDOW % TILE_SIZE == 0);

/// Minimum time that must pass between two movements of the snake
pub const STEP_DELAY: Duration = Duration::from_millis(100);

/// Length of a freshly-spawned snake
pub const INITIAL_SNAKE_LENGTH: usize = 1;

/// How many cells the snake's length increases by upon eating food
pub const SNAKE_GROWTH: usize = 1;

/// A snake dies of starvation once it has moved more than this many times its
/// length
pub const STARVATION_FACTOR: usize = 100;

/// Reward signalled for eating food
pub const FOOD_REWARD: i32 = 10;

/// Reward signalled when a game ends
pub const DEATH_PENALTY: i32 = -10;
