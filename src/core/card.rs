use std::fmt;
use std::str::FromStr;

use crate::core::EquityError;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Parse a single rank character. `'T'` is the
    /// one-character form of ten used in hand notations.
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Parse the rank part of a card token. Card tokens spell
    /// ten out as `"10"`, but `"T"` is accepted as an alias.
    pub fn from_token(s: &str) -> Option<Value> {
        match s {
            "10" => Some(Value::Ten),
            _ => {
                let mut chars = s.chars();
                let value = chars.next().and_then(Value::from_char)?;
                match chars.next() {
                    None => Some(value),
                    Some(_) => None,
                }
            }
        }
    }

    /// The comparison value of this rank, ace high: 2 through 14.
    pub fn rank_value(self) -> u8 {
        self as u8 + 2
    }

    /// The canonical rank string of a card token.
    pub fn to_token(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse a suit glyph.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            '♠' => Some(Suit::Spade),
            '♣' => Some(Suit::Club),
            '♥' => Some(Suit::Heart),
            '♦' => Some(Suit::Diamond),
            _ => None,
        }
    }

    /// The glyph for this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_token(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = EquityError;

    /// Parse a card token: a rank string (`"2"` through `"10"`,
    /// `"J"`, `"Q"`, `"K"`, `"A"`) immediately followed by one
    /// suit glyph from `♠ ♥ ♦ ♣`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::{Card, Suit, Value};
    ///
    /// let card: Card = "10♦".parse().unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit_char = s.chars().next_back().ok_or(EquityError::TooFewChars)?;
        let suit = Suit::from_char(suit_char).ok_or(EquityError::UnexpectedSuitChar)?;
        let rank = &s[..s.len() - suit_char.len_utf8()];
        if rank.is_empty() {
            return Err(EquityError::TooFewChars);
        }
        let value = Value::from_token(rank).ok_or(EquityError::UnexpectedValueChar)?;
        Ok(Card::new(value, suit))
    }
}
