use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::{Card, EquityError, Suit, Value};

/// How the two cards of a starting-hand notation relate in suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suitedness {
    /// Two cards of the same value, e.g. `"AA"`.
    Pair,
    /// Both cards share a suit, e.g. `"AKs"`.
    Suited,
    /// The cards have different suits, e.g. `"T9o"`.
    OffSuit,
}

/// One symbolic starting hand, e.g. `"AKs"` or `"QQ"`: two values
/// and a suitedness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct HandNotation {
    /// The first value.
    pub value_one: Value,
    /// The second value.
    pub value_two: Value,
    /// How the suits of the two cards relate.
    pub suitedness: Suitedness,
}

impl HandNotation {
    /// Expand the notation to two concrete cards.
    ///
    /// The suit assignment is a fixed convention rather than a random
    /// one: pairs and offsuit hands become spade and heart, suited
    /// hands become two spades. Suit combinations are therefore
    /// under-represented when sampling. Randomizing the suits per
    /// draw would sample combinations more evenly; the fixed
    /// convention is kept as a deliberate simplification.
    pub fn concrete_cards(&self) -> [Card; 2] {
        match self.suitedness {
            Suitedness::Suited => [
                Card::new(self.value_one, Suit::Spade),
                Card::new(self.value_two, Suit::Spade),
            ],
            Suitedness::Pair | Suitedness::OffSuit => [
                Card::new(self.value_one, Suit::Spade),
                Card::new(self.value_two, Suit::Heart),
            ],
        }
    }
}

impl FromStr for HandNotation {
    type Err = EquityError;

    /// Parse a hand notation: two rank characters (`'T'` for ten)
    /// optionally followed by `'s'` (suited) or `'o'` (offsuit).
    /// An omitted suffix means a pair when the ranks match and is
    /// read as offsuit otherwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let one = chars.next().ok_or(EquityError::TooFewChars)?;
        let two = chars.next().ok_or(EquityError::TooFewChars)?;
        let value_one = Value::from_char(one).ok_or(EquityError::UnexpectedValueChar)?;
        let value_two = Value::from_char(two).ok_or(EquityError::UnexpectedValueChar)?;

        let suitedness = match chars.next() {
            None if value_one == value_two => Suitedness::Pair,
            None => Suitedness::OffSuit,
            Some('s') if value_one == value_two => {
                return Err(EquityError::InvalidSuitedPair);
            }
            Some('s') => Suitedness::Suited,
            Some('o') => Suitedness::OffSuit,
            Some(_) => return Err(EquityError::UnparsedCharsRemaining),
        };

        if chars.next().is_some() {
            return Err(EquityError::UnparsedCharsRemaining);
        }

        Ok(HandNotation {
            value_one,
            value_two,
            suitedness,
        })
    }
}

impl fmt::Display for HandNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one = notation_char(self.value_one);
        let two = notation_char(self.value_two);
        match self.suitedness {
            Suitedness::Pair => write!(f, "{one}{two}"),
            Suitedness::Suited => write!(f, "{one}{two}s"),
            Suitedness::OffSuit => write!(f, "{one}{two}o"),
        }
    }
}

fn notation_char(v: Value) -> char {
    match v {
        Value::Ten => 'T',
        // Every other value's token is a single character.
        _ => v.to_token().chars().next().unwrap_or('?'),
    }
}

/// An opponent's plausible holdings: an ordered, read-only list of
/// hand notations that can be sampled from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeSpec {
    notations: Vec<HandNotation>,
}

impl RangeSpec {
    /// Parse a list of notation tokens into a range.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::holdem::RangeSpec;
    ///
    /// let range = RangeSpec::parse(&["AA", "AKs", "T9o"]).unwrap();
    /// assert_eq!(3, range.len());
    /// ```
    pub fn parse(tokens: &[&str]) -> Result<Self, EquityError> {
        tokens.iter().map(|t| t.parse()).collect()
    }

    /// How many notations are in the range.
    pub fn len(&self) -> usize {
        self.notations.len()
    }

    /// Is there anything to sample from?
    pub fn is_empty(&self) -> bool {
        self.notations.is_empty()
    }

    /// Draw one concrete two card hand consistent with this range.
    ///
    /// Picks a notation uniformly at random, expands it, and returns
    /// the cards only if both are still in `available`. `None` means
    /// the fixed suit convention collided with a card already in
    /// play and the caller should skip or retry the trial.
    pub fn sample<R: Rng>(&self, available: &[Card], rng: &mut R) -> Option<[Card; 2]> {
        let notation = self.notations.choose(rng)?;
        let cards = notation.concrete_cards();
        if available.contains(&cards[0]) && available.contains(&cards[1]) {
            Some(cards)
        } else {
            None
        }
    }
}

impl FromIterator<HandNotation> for RangeSpec {
    fn from_iter<T: IntoIterator<Item = HandNotation>>(iter: T) -> Self {
        Self {
            notations: iter.into_iter().collect(),
        }
    }
}
