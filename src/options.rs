//! Deck configuration options.

use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{FRENCH_RANKS, FRENCH_SUITS};
use crate::error::OptionsError;

/// Rank and suit domains a deck is built from.
///
/// The default is the French deck. Use the builder methods to replace a
/// domain:
///
/// ```
/// use fluentdeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_ranks(["7", "8", "9", "10", "J", "Q", "K", "A"]);
/// assert_eq!(options.deck_size(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Ranks, lowest first.
    pub ranks: Vec<Cow<'static, str>>,
    /// Suits, in construction order.
    pub suits: Vec<Cow<'static, str>>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            ranks: FRENCH_RANKS.iter().copied().map(Cow::Borrowed).collect(),
            suits: FRENCH_SUITS.iter().copied().map(Cow::Borrowed).collect(),
        }
    }
}

impl DeckOptions {
    /// Sets the rank domain.
    ///
    /// # Example
    ///
    /// ```
    /// use fluentdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_ranks(["J", "Q", "K"]);
    /// assert_eq!(options.ranks.len(), 3);
    /// ```
    #[must_use]
    pub fn with_ranks<I, S>(mut self, ranks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.ranks = ranks.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the suit domain.
    ///
    /// # Example
    ///
    /// ```
    /// use fluentdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_suits(["coins", "cups"]);
    /// assert_eq!(options.suits.len(), 2);
    /// ```
    #[must_use]
    pub fn with_suits<I, S>(mut self, suits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.suits = suits.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the number of cards a deck built from these options holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }

    /// Checks that both domains are non-empty and free of duplicates.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, ranks before suits.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.ranks.is_empty() {
            return Err(OptionsError::EmptyRanks);
        }
        if self.suits.is_empty() {
            return Err(OptionsError::EmptySuits);
        }
        if let Some(rank) = first_duplicate(&self.ranks) {
            return Err(OptionsError::DuplicateRank(rank.to_string()));
        }
        if let Some(suit) = first_duplicate(&self.suits) {
            return Err(OptionsError::DuplicateSuit(suit.to_string()));
        }
        Ok(())
    }
}

fn first_duplicate<'a>(values: &'a [Cow<'static, str>]) -> Option<&'a str> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .map(|value| &**value)
        .find(|value| !seen.insert(*value))
}
