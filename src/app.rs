use crate::input::Input;
use crate::theme::{self, Theme};
use crate::view::GameView;
use crossterm::event::{poll, read, Event};
use gridsnake::game::Game;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The frontend: draws the game and feeds it keyboard input, once per frame
#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    game: Game<R>,
    theme: Theme,
    next_frame: Option<Instant>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, theme: Theme) -> App<R> {
        App {
            game,
            theme,
            next_frame: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            frame.render_widget(GameView::new(&self.game, &self.theme), frame.area());
        })?;
        Ok(())
    }

    /// Handle input events until the next frame is due, then update the game
    fn process_input(&mut self) -> io::Result<()> {
        let when = *self
            .next_frame
            .get_or_insert_with(|| Instant::now() + theme::FRAME_PERIOD);
        loop {
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                break;
            }
            self.handle_event(read()?);
            if self.quitting {
                return Ok(());
            }
        }
        self.next_frame = None;
        self.game.update(Instant::now());
        Ok(())
    }
}

impl<R> App<R> {
    fn handle_event(&mut self, event: Event) {
        let Some(input) = event.as_key_press_event().and_then(Input::from_key_event) else {
            return;
        };
        match input {
            Input::Quit => self.quitting = true,
            Input::Steer(direction) => {
                if let Some(action) = self.game.snake().heading().steer_toward(direction) {
                    self.game.control(action);
                }
            }
        }
    }
}
