//! Core domain types for the game.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Player mark.
///
/// The alphabet is closed and ordered: the first player is always `X`,
/// the second `O`, and so on. No mark is numeric, so a mark can never be
/// confused with an open cell's label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    derive_more::Display,
)]
pub enum Symbol {
    /// First player.
    X,
    /// Second player.
    O,
    /// Third player.
    A,
    /// Fourth player.
    B,
    /// Fifth player.
    C,
    /// Sixth player.
    D,
}

impl Symbol {
    /// Number of marks in the alphabet (hard cap on players).
    pub const ALPHABET_SIZE: usize = Self::COUNT;

    /// Returns the mark for a turn index, if the alphabet is large enough.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Free cell, carrying the label a human types to pick it.
    Open(usize),
    /// Cell claimed by a player.
    Occupied(Symbol),
}

impl Cell {
    /// Returns true if nobody has claimed the cell yet.
    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Open(_))
    }

    /// Returns the label of an open cell.
    pub fn label(&self) -> Option<usize> {
        match self {
            Cell::Open(label) => Some(*label),
            Cell::Occupied(_) => None,
        }
    }

    /// Returns the mark of an occupied cell.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Cell::Open(_) => None,
            Cell::Occupied(symbol) => Some(*symbol),
        }
    }
}

/// Zero-based grid coordinate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({col}, {row})")]
pub struct Coord {
    /// Column index, `0..cols`.
    pub col: usize,
    /// Row index, `0..rows`.
    pub row: usize,
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    NoResult,
    /// A player completed a line.
    Winner(Symbol),
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::NoResult | Outcome::Draw => None,
        }
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::NoResult)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoResult => write!(f, "No result"),
            Outcome::Winner(symbol) => write!(f, "{} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        let all: Vec<_> = Symbol::iter().collect();
        assert_eq!(
            all,
            vec![Symbol::X, Symbol::O, Symbol::A, Symbol::B, Symbol::C, Symbol::D]
        );
        assert_eq!(Symbol::ALPHABET_SIZE, 6);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Symbol::from_index(0), Some(Symbol::X));
        assert_eq!(Symbol::from_index(5), Some(Symbol::D));
        assert_eq!(Symbol::from_index(6), None);
    }

    #[test]
    fn test_symbols_are_not_numeric() {
        for symbol in Symbol::iter() {
            assert!(symbol.to_string().parse::<usize>().is_err());
        }
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Winner(Symbol::O).winner(), Some(Symbol::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::NoResult.is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }
}
