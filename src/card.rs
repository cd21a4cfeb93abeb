//! Card type and the French rank and suit domains.

use alloc::borrow::Cow;
use core::fmt;

/// Ranks of the French deck, lowest first.
pub const FRENCH_RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Suits of the French deck, in deck construction order.
pub const FRENCH_SUITS: [&str; 4] = ["spades", "diamonds", "clubs", "hearts"];

/// Number of cards in a French deck.
pub const DECK_SIZE: usize = FRENCH_RANKS.len() * FRENCH_SUITS.len();

/// A playing card.
///
/// Equality, ordering and hashing are structural: rank first, then suit.
/// A card is not tied to any domain, so `Card::new("Q", "beasts")` is a valid
/// value that simply never appears in a French deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    rank: Cow<'static, str>,
    suit: Cow<'static, str>,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Example
    ///
    /// ```
    /// use fluentdeck::Card;
    ///
    /// let card = Card::new("Q", "hearts");
    /// assert_eq!(card.rank(), "Q");
    /// assert_eq!(card.suit(), "hearts");
    /// ```
    #[must_use]
    pub fn new(rank: impl Into<Cow<'static, str>>, suit: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
        }
    }

    /// Creates a card from static strings without allocating.
    #[must_use]
    pub const fn from_static(rank: &'static str, suit: &'static str) -> Self {
        Self {
            rank: Cow::Borrowed(rank),
            suit: Cow::Borrowed(suit),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub fn suit(&self) -> &str {
        &self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
