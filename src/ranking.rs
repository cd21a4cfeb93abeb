//! Card ranking for custom sort orders.
//!
//! A ranking maps a card to `rank_index * stride + suit_weight`, where the
//! stride is one more than the highest weight. Rank is the primary key and
//! the suit weight the tie-breaker.

use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, FRENCH_RANKS};
use crate::error::RankingError;

/// Suit weights of the spades-high order.
pub const SPADES_HIGH_WEIGHTS: [(&str, usize); 4] =
    [("spades", 3), ("hearts", 2), ("diamonds", 1), ("clubs", 0)];

/// Ranks a French card with spades as the highest suit.
///
/// # Errors
///
/// Returns [`RankingError::UnknownRank`] or [`RankingError::UnknownSuit`]
/// for cards outside the French domains. There is no fallback weight.
///
/// # Example
///
/// ```
/// use fluentdeck::{Card, spades_high};
///
/// assert_eq!(spades_high(&Card::new("2", "clubs")), Ok(0));
/// assert_eq!(spades_high(&Card::new("2", "spades")), Ok(3));
/// assert_eq!(spades_high(&Card::new("A", "spades")), Ok(51));
/// ```
pub fn spades_high(card: &Card) -> Result<usize, RankingError> {
    let rank = FRENCH_RANKS
        .iter()
        .position(|&rank| rank == card.rank())
        .ok_or_else(|| RankingError::UnknownRank(card.rank().to_string()))?;
    let weight = SPADES_HIGH_WEIGHTS
        .iter()
        .find(|(suit, _)| *suit == card.suit())
        .map(|&(_, weight)| weight)
        .ok_or_else(|| RankingError::UnknownSuit(card.suit().to_string()))?;

    Ok(rank * SPADES_HIGH_WEIGHTS.len() + weight)
}

/// Table of suit priorities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuitWeights(HashMap<Cow<'static, str>, usize>);

impl SuitWeights {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The spades-high table: spades 3, hearts 2, diamonds 1, clubs 0.
    #[must_use]
    pub fn spades_high() -> Self {
        SPADES_HIGH_WEIGHTS
            .iter()
            .fold(Self::new(), |weights, &(suit, weight)| {
                weights.with_weight(suit, weight)
            })
    }

    /// Sets the weight of a suit, replacing any previous one.
    #[must_use]
    pub fn with_weight(mut self, suit: impl Into<Cow<'static, str>>, weight: usize) -> Self {
        self.0.insert(suit.into(), weight);
        self
    }

    /// Returns the weight of `suit`, if it has one.
    #[must_use]
    pub fn weight(&self, suit: &str) -> Option<usize> {
        self.0.get(suit).copied()
    }

    /// Returns the number of weighted suits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the distance between consecutive ranks: the highest weight
    /// plus one, or `None` if that overflows.
    ///
    /// ```
    /// use fluentdeck::SuitWeights;
    ///
    /// assert_eq!(SuitWeights::spades_high().stride(), Some(4));
    /// assert_eq!(SuitWeights::new().with_weight("cups", 9).stride(), Some(10));
    /// ```
    #[must_use]
    pub fn stride(&self) -> Option<usize> {
        self.0.values().max().map_or(Some(1), |max| max.checked_add(1))
    }

    /// Returns whether every suit of `suits` has a weight.
    #[must_use]
    pub fn covers<'a, I>(&self, suits: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.missing(suits).is_none()
    }

    /// Returns the first suit of `suits` that has no weight.
    pub fn missing<'a, I>(&self, suits: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        suits.into_iter().find(|suit| !self.0.contains_key(*suit))
    }
}

/// A rank domain paired with a suit weight table.
///
/// ```
/// use fluentdeck::{Card, Ranking, SuitWeights};
///
/// let ranking = Ranking::new(["J", "Q", "K"], SuitWeights::spades_high());
/// assert_eq!(ranking.priority(&Card::new("Q", "hearts")), Ok(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    ranks: Vec<Cow<'static, str>>,
    weights: SuitWeights,
}

impl Ranking {
    /// Creates a ranking over `ranks`, lowest first.
    #[must_use]
    pub fn new<I, S>(ranks: I, weights: SuitWeights) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            ranks: ranks.into_iter().map(Into::into).collect(),
            weights,
        }
    }

    /// The spades-high ranking over the French ranks.
    #[must_use]
    pub fn spades_high() -> Self {
        Self::new(FRENCH_RANKS, SuitWeights::spades_high())
    }

    /// Returns the suit weight table.
    #[must_use]
    pub const fn weights(&self) -> &SuitWeights {
        &self.weights
    }

    /// Returns the priority of `card`: `rank_index * stride + weight`, where
    /// the stride exceeds every weight so rank always dominates.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::UnknownRank`] if the rank is not in the
    /// domain, [`RankingError::UnknownSuit`] if the suit has no weight, or
    /// [`RankingError::Overflow`] if the priority does not fit in `usize`.
    pub fn priority(&self, card: &Card) -> Result<usize, RankingError> {
        let rank = self
            .ranks
            .iter()
            .position(|rank| rank == card.rank())
            .ok_or_else(|| RankingError::UnknownRank(card.rank().to_string()))?;
        let weight = self
            .weights
            .weight(card.suit())
            .ok_or_else(|| RankingError::UnknownSuit(card.suit().to_string()))?;

        self.weights
            .stride()
            .and_then(|stride| rank.checked_mul(stride))
            .and_then(|base| base.checked_add(weight))
            .ok_or(RankingError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spades_high_matches_table_ranking() {
        let ranking = Ranking::spades_high();
        for suit in ["spades", "diamonds", "clubs", "hearts"] {
            for rank in FRENCH_RANKS {
                let card = Card::from_static(rank, suit);
                assert_eq!(spades_high(&card), ranking.priority(&card));
            }
        }
    }

    #[test]
    fn unknown_suit_is_an_error_not_a_default() {
        let card = Card::new("Q", "beasts");
        assert_eq!(
            spades_high(&card),
            Err(RankingError::UnknownSuit("beasts".to_string()))
        );
        assert_eq!(
            Ranking::spades_high().priority(&card),
            Err(RankingError::UnknownSuit("beasts".to_string()))
        );
    }

    #[test]
    fn unknown_rank_is_an_error() {
        let card = Card::new("1", "spades");
        assert_eq!(
            spades_high(&card),
            Err(RankingError::UnknownRank("1".to_string()))
        );
    }

    #[test]
    fn sparse_weights_keep_rank_as_primary_key() {
        let ranking = Ranking::new(
            FRENCH_RANKS,
            SuitWeights::new().with_weight("cups", 5).with_weight("spades", 0),
        );
        let two_cups = ranking.priority(&Card::new("2", "cups")).unwrap();
        let three_spades = ranking.priority(&Card::new("3", "spades")).unwrap();
        let four_spades = ranking.priority(&Card::new("4", "spades")).unwrap();
        assert_eq!((two_cups, three_spades, four_spades), (5, 6, 12));
        assert!(two_cups < three_spades);
    }

    #[test]
    fn oversized_weights_report_overflow() {
        let ranking = Ranking::new(["2", "3"], SuitWeights::new().with_weight("cups", usize::MAX));
        assert_eq!(
            ranking.priority(&Card::new("3", "cups")),
            Err(RankingError::Overflow)
        );
    }

    #[test]
    fn missing_reports_first_unweighted_suit() {
        let weights = SuitWeights::spades_high();
        assert!(weights.covers(["clubs", "hearts", "spades", "diamonds"]));
        assert!(!weights.covers(["clubs", "cups"]));
        assert_eq!(weights.missing(["clubs", "hearts"]), None);
        assert_eq!(weights.missing(["clubs", "cups", "coins"]), Some("cups"));
    }
}
