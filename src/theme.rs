//! Glyphs, styles & timing for the terminal frontend
use crate::config::DisplayConfig;
use gridsnake::game::Direction;
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Time between two frames, for a rate of 60 frames per second
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Number of terminal columns used to draw a single arena tile, so that tiles
/// come out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph marking the center of an empty tile when the grid is shown
pub(crate) const GRID_SYMBOL: char = '·';

/// Default style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Default style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Default style for the grid
pub(crate) const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the score bar at the top of the screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

pub(crate) fn head_symbol(heading: Direction) -> char {
    match heading {
        Direction::Up => SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Right => SNAKE_HEAD_RIGHT_SYMBOL,
        Direction::Left => SNAKE_HEAD_LEFT_SYMBOL,
    }
}

/// Display settings in effect for a session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) grid: bool,
    pub(crate) snake: Style,
    pub(crate) food: Style,
    pub(crate) grid_dots: Style,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            grid: true,
            snake: SNAKE_STYLE,
            food: FOOD_STYLE,
            grid_dots: GRID_STYLE,
        }
    }
}

impl From<&DisplayConfig> for Theme {
    fn from(cfg: &DisplayConfig) -> Theme {
        Theme {
            grid: cfg.grid,
            snake: cfg.snake_style.map_or(SNAKE_STYLE, Style::from),
            food: cfg.food_style.map_or(FOOD_STYLE, Style::from),
            grid_dots: cfg.grid_style.map_or(GRID_STYLE, Style::from),
        }
    }
}
