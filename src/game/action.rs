use thiserror::Error;

/// A relative steering command, as issued by a player or an agent
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// Keep the current heading
    Straight,
    /// Turn a quarter-turn clockwise
    Right,
    /// Turn a quarter-turn counter-clockwise
    Left,
}

impl Action {
    /// Return the one-hot encoding of the action: `[1, 0, 0]` for
    /// [`Straight`][Action::Straight], `[0, 1, 0]` for [`Right`][Action::Right],
    /// `[0, 0, 1]` for [`Left`][Action::Left]
    pub fn one_hot(self) -> [u8; 3] {
        match self {
            Action::Straight => [1, 0, 0],
            Action::Right => [0, 1, 0],
            Action::Left => [0, 0, 1],
        }
    }
}

impl TryFrom<[u8; 3]> for Action {
    type Error = InvalidActionInput;

    fn try_from(value: [u8; 3]) -> Result<Action, InvalidActionInput> {
        match value {
            [1, 0, 0] => Ok(Action::Straight),
            [0, 1, 0] => Ok(Action::Right),
            [0, 0, 1] => Ok(Action::Left),
            other => Err(InvalidActionInput(other)),
        }
    }
}

/// Error returned when decoding an action triple that is not one-hot
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("action input {0:?} is not a one-hot triple")]
pub struct InvalidActionInput(pub [u8; 3]);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([1, 0, 0], Action::Straight)]
    #[case([0, 1, 0], Action::Right)]
    #[case([0, 0, 1], Action::Left)]
    fn decode_one_hot(#[case] triple: [u8; 3], #[case] action: Action) {
        assert_eq!(Action::try_from(triple), Ok(action));
        assert_eq!(action.one_hot(), triple);
    }

    #[rstest]
    #[case([0, 0, 0])]
    #[case([1, 1, 0])]
    #[case([0, 1, 1])]
    #[case([1, 1, 1])]
    #[case([2, 0, 0])]
    #[case([0, 0, 7])]
    fn reject_non_one_hot(#[case] triple: [u8; 3]) {
        assert_eq!(Action::try_from(triple), Err(InvalidActionInput(triple)));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            InvalidActionInput([1, 1, 0]).to_string(),
            "action input [1, 1, 0] is not a one-hot triple"
        );
    }
}
