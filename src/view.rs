use crate::theme::{self, Theme};
use crate::util::center_rect;
use gridsnake::game::{Arena, Game, Point};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Read-only rendering of a [`Game`]
#[derive(Debug)]
pub(crate) struct GameView<'a, R> {
    game: &'a Game<R>,
    theme: &'a Theme,
}

impl<'a, R> GameView<'a, R> {
    pub(crate) fn new(game: &'a Game<R>, theme: &'a Theme) -> Self {
        GameView { game, theme }
    }

    /// Size of the bordered box that the arena is drawn in
    fn block_size(&self) -> Size {
        let cells = u16::try_from(self.game.arena().cells()).unwrap_or(u16::MAX);
        Size {
            width: cells.saturating_mul(theme::CELL_WIDTH).saturating_add(2),
            height: cells.saturating_add(2),
        }
    }
}

impl<R> Widget for GameView<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, block_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(
                " Score: {}   Best: {}   Game: {}",
                self.game.score(),
                self.game.best_score(),
                self.game.games_played()
            ),
            theme::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(block_area, self.block_size());
        Block::bordered().render(block_area, buf);
        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            arena: self.game.arena(),
            buf,
        };
        if self.theme.grid {
            let cells = self.game.arena().cells();
            for row in 0..cells {
                for col in 0..cells {
                    level.draw_cell(
                        self.game.arena().cell_center(col, row),
                        theme::GRID_SYMBOL,
                        self.theme.grid_dots,
                    );
                }
            }
        }
        level.draw_cell(
            self.game.food().position(),
            theme::FOOD_SYMBOL,
            self.theme.food,
        );
        let snake = self.game.snake();
        for &p in snake.segments() {
            level.draw_cell(p, theme::SNAKE_BODY_SYMBOL, self.theme.snake);
        }
        level.draw_cell(
            snake.position(),
            theme::head_symbol(snake.heading()),
            self.theme.snake,
        );

        let mut msg = Vec::new();
        if let Some(death) = self.game.last_death() {
            msg.push(Span::raw(format!(" Last snake {death}.")));
        }
        msg.extend([
            Span::raw(" Steer with arrows/WASD — Quit ("),
            Span::styled("q", theme::KEY_STYLE),
            Span::raw(")"),
        ]);
        Line::from(msg).render(msg_area, buf);
    }
}

#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    arena: Arena,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in the tile containing `p`, followed by a blank column.
    /// Points outside the arena are ignored.
    fn draw_cell(&mut self, p: Point, symbol: char, style: Style) {
        let Some((col, row)) = self.arena.cell_of(p) else {
            return;
        };
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        let Some(x) = col
            .checked_mul(theme::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if !self.area.contains((x, y).into()) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// A 5×5 arena, drawn in a 12×7 box
    fn small_game() -> Game<ChaCha12Rng> {
        let arena = Arena::new(200, 40).expect("200 should be a multiple of 40");
        Game::with_arena(arena, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn render(game: &Game<ChaCha12Rng>, theme: &Theme) -> Buffer {
        let area = Rect::new(0, 0, 12, 9);
        let mut buffer = Buffer::empty(area);
        GameView::new(game, theme).render(area, &mut buffer);
        buffer
    }

    /// Terminal coordinates of the tile containing `p`
    fn screen_pos(game: &Game<ChaCha12Rng>, p: Point) -> (u16, u16) {
        let (col, row) = game.arena().cell_of(p).expect("point should be in arena");
        (
            1 + 2 * u16::try_from(col).expect("column should fit in u16"),
            2 + u16::try_from(row).expect("row should fit in u16"),
        )
    }

    #[test]
    fn draw_startup() {
        let game = small_game();
        let buffer = render(&game, &Theme::default());
        assert_eq!(buffer[(0, 1)].symbol(), "┌");
        assert_eq!(buffer[(11, 1)].symbol(), "┐");
        assert_eq!(buffer[(0, 7)].symbol(), "└");
        assert_eq!(buffer[(11, 7)].symbol(), "┘");
        assert_eq!(buffer[(1, 0)].symbol(), "S");
        let head = screen_pos(&game, game.snake().position());
        assert_eq!(buffer[head].symbol(), "<");
        assert_eq!(buffer[head].fg, theme::SNAKE_STYLE.fg.expect("fg is set"));
        let food = screen_pos(&game, game.food().position());
        if food != head {
            assert_eq!(buffer[food].symbol(), "●");
        }
        let empty = (1..=9)
            .step_by(2)
            .flat_map(|x| (2..=6).map(move |y| (x, y)))
            .find(|&p| p != head && p != food)
            .expect("a 5×5 arena should have a free tile");
        assert_eq!(buffer[empty].symbol(), "·");
        assert_eq!(buffer[(empty.0 + 1, empty.1)].symbol(), " ");
    }

    #[test]
    fn draw_without_grid() {
        let game = small_game();
        let theme = Theme {
            grid: false,
            ..Theme::default()
        };
        let buffer = render(&game, &theme);
        let head = screen_pos(&game, game.snake().position());
        let food = screen_pos(&game, game.food().position());
        let dots = (1..=10)
            .flat_map(|x| (2..=6).map(move |y| (x, y)))
            .filter(|&p| p != head && p != food)
            .filter(|&p| buffer[p].symbol() != " ")
            .count();
        assert_eq!(dots, 0);
    }
}
