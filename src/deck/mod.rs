//! The ordered card sequence.

use core::fmt;
use core::ops::Index;

use alloc::string::ToString;
use alloc::vec::Vec;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, FRENCH_RANKS, FRENCH_SUITS};
use crate::error::{IndexError, OptionsError, RankingError};
use crate::options::DeckOptions;
use crate::ranking::{Ranking, spades_high};
use crate::sync::Mutex;

mod slice;

pub use slice::Slice;

/// An immutable, ordered deck holding one card per `(suit, rank)` pair.
///
/// Cards are laid out suit by suit in the order of the suit domain, each
/// suit running through the ranks in order. The deck owns a seeded random
/// generator used by [`Deck::sample_random`].
pub struct Deck {
    /// Cards in construction order.
    cards: Vec<Card>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Deck {
    /// Creates a French deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use fluentdeck::{Card, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.at(0), Ok(&Card::new("2", "spades")));
    /// assert_eq!(deck.at(-1), Ok(&Card::new("A", "hearts")));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in FRENCH_SUITS {
            for rank in FRENCH_RANKS {
                cards.push(Card::from_static(rank, suit));
            }
        }

        Self::from_cards(cards, seed)
    }

    /// Creates a deck over custom rank and suit domains.
    ///
    /// # Errors
    ///
    /// Returns an error if either domain is empty or contains duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use fluentdeck::{Deck, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_suits(["coins", "cups", "swords", "clubs"]);
    /// let deck = Deck::with_options(&options, 7).unwrap();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.at(0).unwrap().suit(), "coins");
    /// ```
    pub fn with_options(options: &DeckOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut cards = Vec::with_capacity(options.deck_size());
        for suit in &options.suits {
            for rank in &options.ranks {
                cards.push(Card::new(rank.clone(), suit.clone()));
            }
        }

        Ok(Self::from_cards(cards, seed))
    }

    fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        debug!("built deck of {} cards (seed {seed})", cards.len());
        Self {
            cards,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty. Always `false` for a built deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns all cards in construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `position`. Negative positions count from the
    /// end, so `-1` is the last card.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if the position falls outside the
    /// deck.
    pub fn at(&self, position: isize) -> Result<&Card, IndexError> {
        let len = self.cards.len();
        let index = if position < 0 {
            len.checked_sub(position.unsigned_abs())
        } else {
            Some(position as usize)
        };

        index
            .and_then(|index| self.cards.get(index))
            .ok_or(IndexError::OutOfRange {
                index: position,
                len,
            })
    }

    /// Returns the cards selected by `slice`, in slice order.
    ///
    /// # Example
    ///
    /// ```
    /// use fluentdeck::{Deck, Slice};
    ///
    /// let deck = Deck::new(0);
    /// assert_eq!(deck.slice(Slice::range(0, 10)).len(), 10);
    /// assert!(deck.slice(Slice::range(60, 70)).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, slice: Slice) -> Vec<Card> {
        slice
            .indices(self.cards.len())
            .map(|index| self.cards[index].clone())
            .collect()
    }

    /// Returns whether the deck holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns an iterator over the cards in construction order.
    #[must_use]
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns a uniformly random card, advancing the deck's generator.
    #[must_use]
    pub fn sample_random(&self) -> &Card {
        let index = self.rng.lock().random_range(0..self.cards.len());
        let card = &self.cards[index];
        trace!("sampled {card} at position {index}");
        card
    }

    /// Returns `count` independent samples, drawn with replacement.
    #[must_use]
    pub fn sample_random_n(&self, count: usize) -> Vec<&Card> {
        (0..count).map(|_| self.sample_random()).collect()
    }

    /// Returns the cards stably sorted by a fallible key.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `key`.
    pub fn sorted_by_key<K, E, F>(&self, mut key: F) -> Result<Vec<Card>, E>
    where
        K: Ord,
        F: FnMut(&Card) -> Result<K, E>,
    {
        let mut keyed = self
            .cards
            .iter()
            .map(|card| key(card).map(|priority| (priority, card)))
            .collect::<Result<Vec<_>, E>>()?;
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        trace!("sorted {} cards", keyed.len());

        Ok(keyed.into_iter().map(|(_, card)| card.clone()).collect())
    }

    /// Returns the cards sorted by a [`Ranking`].
    ///
    /// # Errors
    ///
    /// Returns an error if a card's rank or suit is unknown to the ranking.
    /// Suits without a weight are reported before any card is ranked.
    pub fn sorted_by(&self, ranking: &Ranking) -> Result<Vec<Card>, RankingError> {
        if let Some(suit) = ranking.weights().missing(self.cards.iter().map(Card::suit)) {
            return Err(RankingError::UnknownSuit(suit.to_string()));
        }
        self.sorted_by_key(|card| ranking.priority(card))
    }

    /// Returns the cards sorted by [`spades_high`].
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds cards outside the French domains.
    ///
    /// # Example
    ///
    /// ```
    /// use fluentdeck::{Card, Deck};
    ///
    /// let sorted = Deck::new(0).sorted_by_spades_high().unwrap();
    /// assert_eq!(sorted[0], Card::new("2", "clubs"));
    /// assert_eq!(sorted[51], Card::new("A", "spades"));
    /// ```
    pub fn sorted_by_spades_high(&self) -> Result<Vec<Card>, RankingError> {
        self.sorted_by_key(spades_high)
    }
}

impl Clone for Deck {
    fn clone(&self) -> Self {
        Self {
            cards: self.cards.clone(),
            rng: Mutex::new(self.rng.lock().clone()),
        }
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck").field("cards", &self.cards).finish_non_exhaustive()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
