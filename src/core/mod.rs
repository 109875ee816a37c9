//! This is the core module. It exports everything that is
//! not specific to hold'em: cards, decks, and errors.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Deck is the normal 52 card deck, minus any known cards.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck suitable for shuffling and indexing.
mod flat_deck;
/// Export `FlatDeck`
pub use self::flat_deck::FlatDeck;

/// The error type for the whole crate.
mod error;
/// Export `EquityError`
pub use self::error::EquityError;
