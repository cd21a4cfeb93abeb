//! Error types for deck, ranking and vector operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur during positional access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Position outside the deck, after resolving negative indices.
    #[error("index {index} out of range for deck of {len} cards")]
    OutOfRange {
        /// The requested position.
        index: isize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur while building a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// Slice step is zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// Errors that can occur while ranking a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The suit has no weight in the table.
    #[error("unknown suit `{0}`")]
    UnknownSuit(String),
    /// The rank is not part of the rank domain.
    #[error("unknown rank `{0}`")]
    UnknownRank(String),
    /// The priority does not fit in `usize`.
    #[error("card priority overflows")]
    Overflow,
}

/// Errors that can occur while validating deck options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// No ranks were given.
    #[error("rank domain is empty")]
    EmptyRanks,
    /// No suits were given.
    #[error("suit domain is empty")]
    EmptySuits,
    /// A rank appears more than once.
    #[error("duplicate rank `{0}`")]
    DuplicateRank(String),
    /// A suit appears more than once.
    #[error("duplicate suit `{0}`")]
    DuplicateSuit(String),
}

/// Errors that can occur while parsing a vector representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    /// Input is not of the form `Vector2D(x, y)`.
    #[error("expected `Vector2D(x, y)`")]
    Malformed,
    /// A component could not be parsed as a number.
    #[error("invalid vector component")]
    Component,
}
