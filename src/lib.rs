//! A French card deck and a 2D vector, with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that behaves like a read-only sequence
//! (length, negative indexing, slicing, iteration, containment and seeded
//! random sampling), a [`spades_high`] ranking for custom sort orders, and a
//! [`Vector2D`] type with magnitude and arithmetic operators.
//!
//! # Example
//!
//! ```
//! use fluentdeck::{Card, Deck, Slice, Vector2D};
//!
//! let deck = Deck::new(42);
//! assert_eq!(deck.len(), 52);
//! assert!(deck.contains(&Card::new("Q", "hearts")));
//! assert_eq!(deck.slice(Slice::range(0, 10).with_step(2).unwrap()).len(), 5);
//!
//! let v = Vector2D::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod ranking;
mod sync;
pub mod vector;

// Re-export main types
pub use card::{Card, DECK_SIZE, FRENCH_RANKS, FRENCH_SUITS};
pub use deck::{Deck, Slice};
pub use error::{IndexError, OptionsError, ParseVectorError, RankingError, SliceError};
pub use options::DeckOptions;
pub use ranking::{Ranking, SPADES_HIGH_WEIGHTS, SuitWeights, spades_high};
pub use vector::{Scalar, Vector2D};
