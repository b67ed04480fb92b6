//! Step direction and its key/sign mapping

use crate::constants::{DECREMENT_CLASS, INCREMENT_CLASS};
use crate::notification::ArrowKey;

/// Which way a step moves the field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Add one step
    Increase,
    /// Subtract one step
    Decrease,
}

impl Direction {
    /// Both directions, increment affix first
    pub const ALL: [Direction; 2] = [Direction::Increase, Direction::Decrease];

    /// Multiplier applied to the step
    pub fn sign(self) -> f64 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
        }
    }

    /// The arrow key a user would press to step this way
    pub fn key(self) -> ArrowKey {
        match self {
            Direction::Increase => ArrowKey::ArrowUp,
            Direction::Decrease => ArrowKey::ArrowDown,
        }
    }

    /// Class name of the affix bound to this direction
    pub fn affix_class(self) -> &'static str {
        match self {
            Direction::Increase => INCREMENT_CLASS,
            Direction::Decrease => DECREMENT_CLASS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(Direction::Increase.sign(), 1.0);
        assert_eq!(Direction::Decrease.sign(), -1.0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Direction::Increase.key(), ArrowKey::ArrowUp);
        assert_eq!(Direction::Decrease.key(), ArrowKey::ArrowDown);
    }

    #[test]
    fn test_affix_class() {
        assert_eq!(Direction::Increase.affix_class(), "stepper-input::increment");
        assert_eq!(Direction::Decrease.affix_class(), "stepper-input::decrement");
    }
}
