//! Validated move set.

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Rejected move configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 3 moves are required, got {count}")]
    TooFewMoves { count: usize },

    #[error("the number of moves must be odd, got {count}")]
    EvenMoveCount { count: usize },

    #[error("move {label:?} is repeated")]
    DuplicateMove { label: String },

    #[error("move #{position} is empty")]
    EmptyMove { position: usize },
}

/// Ordered list of distinct move labels, odd in number and at least three.
///
/// Position on the list is position on the circle: each move beats the
/// `len / 2` moves before it and loses to the `len / 2` moves after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(ConfigError::TooFewMoves {
                count: labels.len(),
            });
        }
        if labels.len() % 2 == 0 {
            return Err(ConfigError::EvenMoveCount {
                count: labels.len(),
            });
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(ConfigError::EmptyMove { position: i + 1 });
            }
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateMove {
                    label: label.clone(),
                });
            }
        }

        Ok(Self(labels))
    }

    /// Number of moves (always odd, at least three)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a validated set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.0.len() / 2
    }

    /// Zero-based position of a label
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|m| m == label)
    }

    /// Label at a zero-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<usize> for MoveSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_set_is_valid() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.half(), 1);
        assert_eq!(moves.index_of("Scissors"), Some(2));
        assert_eq!(&moves[1], "Paper");
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            MoveSet::new(["A", "A", "B"]),
            Err(ConfigError::DuplicateMove {
                label: "A".to_string()
            })
        );
    }

    #[test]
    fn test_even_count_rejected() {
        assert_eq!(
            MoveSet::new(["A", "B"]),
            Err(ConfigError::TooFewMoves { count: 2 })
        );
        assert_eq!(
            MoveSet::new(["A", "B", "C", "D"]),
            Err(ConfigError::EvenMoveCount { count: 4 })
        );
    }

    #[test]
    fn test_too_few_rejected() {
        assert_eq!(
            MoveSet::new(Vec::<String>::new()),
            Err(ConfigError::TooFewMoves { count: 0 })
        );
        assert_eq!(
            MoveSet::new(["A"]),
            Err(ConfigError::TooFewMoves { count: 1 })
        );
    }

    #[test]
    fn test_empty_label_rejected() {
        assert_eq!(
            MoveSet::new(["A", "", "C"]),
            Err(ConfigError::EmptyMove { position: 2 })
        );
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(MoveSet::new(["rock", "Rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_unknown_label_has_no_index() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        assert_eq!(moves.index_of("Lizard"), None);
        assert_eq!(moves.get(3), None);
    }
}
