use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridsnake::game::Direction;

/// A keypress that means something to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Input {
    Quit,
    Steer(Direction),
}

impl Input {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Input> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Input::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Input::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(Input::Steer(Direction::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Input::Steer(Direction::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Input::Steer(Direction::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Input::Steer(Direction::Right))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Input::Quit))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Input::Quit))]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Input::Steer(Direction::Up)))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Input::Steer(Direction::Up)))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Input::Steer(Direction::Up)))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Input::Steer(Direction::Down)))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Input::Steer(Direction::Down)))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Input::Steer(Direction::Left)))]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, Some(Input::Steer(Direction::Left)))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Input::Steer(Direction::Right)))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Input::Steer(Direction::Right)))]
    #[case(KeyCode::Char('d'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Enter, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] input: Option<Input>,
    ) {
        assert_eq!(Input::from_key_event(KeyEvent::new(code, modifiers)), input);
    }
}
