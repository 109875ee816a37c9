use crate::core::card::{Card, Suit, Value};
use crate::core::error::EquityError;
use std::collections::HashSet;
use std::collections::hash_set::{IntoIter, Iter};

/// Deck struct that can tell quickly if a card is in the deck.
///
/// A deck starts from the full 52 card universe and is narrowed
/// by the cards already known to be in play.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Deck {
    /// Card storage.
    /// Used to figure out quickly
    /// if this card is in the deck.
    cards: HashSet<Card>,
}

impl Deck {
    /// Create the default 52 card deck.
    ///
    /// ```
    /// use holdem_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards: HashSet<Card> = HashSet::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.insert(Card::new(*v, *s));
            }
        }
        Self { cards }
    }

    /// The 52 card universe minus `excluded`. This is how the
    /// exclusion deck for a simulation is built, and it doubles as
    /// duplicate validation: the same physical card appearing twice
    /// anywhere among the inputs is malformed caller input.
    ///
    /// ```
    /// use holdem_equity::core::{Card, Deck};
    ///
    /// let known: Vec<Card> = ["A♠", "A♥"]
    ///     .iter()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    /// let deck = Deck::without(&known).unwrap();
    /// assert_eq!(50, deck.len());
    /// ```
    pub fn without(excluded: &[Card]) -> Result<Self, EquityError> {
        let mut deck = Deck::new();
        for c in excluded {
            if !deck.remove(c) {
                return Err(EquityError::DuplicateCard(*c));
            }
        }
        Ok(deck)
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.cards.remove(c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_contains_in() {
        let d = Deck::new();
        assert!(d.contains(&card("8♥")));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::new();
        let c = card("A♥");
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
    }

    #[test]
    fn test_without() {
        let known = vec![card("A♠"), card("K♦"), card("2♣")];
        let d = Deck::without(&known).unwrap();
        assert_eq!(49, d.len());
        for c in &known {
            assert!(!d.contains(c));
        }
    }

    #[test]
    fn test_without_duplicate() {
        let known = vec![card("A♠"), card("K♦"), card("A♠")];
        assert_eq!(
            Err(EquityError::DuplicateCard(card("A♠"))),
            Deck::without(&known).map(|d| d.len())
        );
    }

    #[test]
    fn test_without_full_board() {
        // Hole cards plus a full five card board leave 45 unknowns.
        let known: Vec<Card> = ["A♠", "A♥", "K♦", "Q♣", "J♠", "2♥", "7♦"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(45, Deck::without(&known).unwrap().len());
    }
}
