use std::cmp::Ordering;
use std::fmt;

use crate::core::{Card, EquityError, Value};

/// All the hand categories a two card hand plus a board can make,
/// plus the two degenerate categories for boards that are not far
/// enough along to score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandCategory {
    /// No community cards yet; no ranking comparison is meaningful.
    PreFlop,
    /// Fewer than five cards in total.
    Incomplete,
    /// No matches.
    HighCard,
    /// One card matches another.
    Pair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five values in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another value.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// A straight and a flush at once.
    StraightFlush,
}

impl HandCategory {
    /// The comparison strength of this category, 0 through 8.
    /// The degenerate categories score 0 alongside a high card.
    pub fn strength(self) -> u8 {
        match self {
            HandCategory::PreFlop => 0,
            HandCategory::Incomplete => 0,
            HandCategory::HighCard => 0,
            HandCategory::Pair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush => 8,
        }
    }

    /// The human readable name of this category.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::PreFlop => "Pre-flop",
            HandCategory::Incomplete => "Incomplete",
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of an evaluated hand.
///
/// Ordering and equality consider only `rank_value`, which is the
/// category strength. Kickers are never compared: two hands of the
/// same category tie even if one holds better side cards. That makes
/// every equity this crate produces approximate, and it is kept that
/// way on purpose.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct HandScore {
    /// The category of the best hand type found.
    pub category: HandCategory,
    /// The comparison value, `category.strength()`.
    pub rank_value: u8,
}

impl HandScore {
    fn new(category: HandCategory) -> Self {
        Self {
            category,
            rank_value: category.strength(),
        }
    }
}

impl PartialEq for HandScore {
    fn eq(&self, other: &Self) -> bool {
        self.rank_value == other.rank_value
    }
}

impl Eq for HandScore {}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_value.cmp(&other.rank_value)
    }
}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bitset masks for all the straights, the ace-low wheel first.
const STRAIGHTS: [u16; 10] = [
    // Wheel.
    1 << (Value::Ace as u16)
        | 1 << (Value::Two as u16)
        | 1 << (Value::Three as u16)
        | 1 << (Value::Four as u16)
        | 1 << (Value::Five as u16),
    // "Normal" straights starting at two to six.
    0b11111 << (Value::Two as u16),
    0b11111 << (Value::Three as u16),
    0b11111 << (Value::Four as u16),
    0b11111 << (Value::Five as u16),
    0b11111 << (Value::Six as u16),
    0b11111 << (Value::Seven as u16),
    0b11111 << (Value::Eight as u16),
    0b11111 << (Value::Nine as u16),
    // Royal straight.
    0b11111 << (Value::Ten as u16),
];

/// Evaluate the best hand category among two hole cards and zero to
/// five community cards.
///
/// An empty board scores as `PreFlop` and one or two community cards
/// score as `Incomplete`, both with rank value 0. With five or more
/// combined cards the best category is found by counting values and
/// suits across all of them.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::Card;
/// use holdem_equity::holdem::{HandCategory, evaluate_hand};
///
/// let hole: Vec<Card> = ["A♠", "A♥"].iter().map(|s| s.parse().unwrap()).collect();
/// let board: Vec<Card> = ["A♦", "K♣", "Q♠"].iter().map(|s| s.parse().unwrap()).collect();
///
/// let score = evaluate_hand(&hole, &board).unwrap();
/// assert_eq!(HandCategory::ThreeOfAKind, score.category);
/// assert_eq!(3, score.rank_value);
/// ```
pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> Result<HandScore, EquityError> {
    if hole.len() != 2 {
        return Err(EquityError::InvalidHoleCards);
    }
    if community.len() > 5 {
        return Err(EquityError::InvalidBoardSize);
    }

    let mut value_counts = [0u8; 13];
    let mut suit_counts = [0u8; 4];
    let mut value_set: u16 = 0;
    let mut seen: u64 = 0;

    for c in hole.iter().chain(community.iter()) {
        let card_bit = 1u64 << (c.value as u64 * 4 + c.suit as u64);
        if seen & card_bit != 0 {
            return Err(EquityError::DuplicateCard(*c));
        }
        seen |= card_bit;

        value_counts[c.value as usize] += 1;
        suit_counts[c.suit as usize] += 1;
        value_set |= 1 << (c.value as u16);
    }

    if community.is_empty() {
        return Ok(HandScore::new(HandCategory::PreFlop));
    }
    if hole.len() + community.len() < 5 {
        return Ok(HandScore::new(HandCategory::Incomplete));
    }

    let max_value_count = value_counts.iter().copied().max().unwrap_or(0);
    let paired_values = value_counts.iter().filter(|&&count| count >= 2).count();
    let is_flush = suit_counts.iter().any(|&count| count >= 5);
    let is_straight = STRAIGHTS.iter().any(|&mask| value_set & mask == mask);

    let category = if is_flush && is_straight {
        HandCategory::StraightFlush
    } else if max_value_count >= 4 {
        HandCategory::FourOfAKind
    } else if max_value_count >= 3 && paired_values >= 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if max_value_count >= 3 {
        HandCategory::ThreeOfAKind
    } else if paired_values >= 2 {
        HandCategory::TwoPair
    } else if max_value_count >= 2 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    };

    Ok(HandScore::new(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn category(hole: &[&str], community: &[&str]) -> HandCategory {
        evaluate_hand(&cards(hole), &cards(community))
            .unwrap()
            .category
    }

    #[test]
    fn test_pre_flop() {
        let score = evaluate_hand(&cards(&["A♠", "K♠"]), &[]).unwrap();
        assert_eq!(HandCategory::PreFlop, score.category);
        assert_eq!(0, score.rank_value);
    }

    #[test]
    fn test_incomplete() {
        let score = evaluate_hand(&cards(&["A♠", "K♠"]), &cards(&["2♦", "9♣"])).unwrap();
        assert_eq!(HandCategory::Incomplete, score.category);
        assert_eq!(0, score.rank_value);
    }

    #[test]
    fn test_three_of_a_kind() {
        let score = evaluate_hand(&cards(&["A♠", "A♥"]), &cards(&["A♦", "K♣", "Q♠"])).unwrap();
        assert_eq!(HandCategory::ThreeOfAKind, score.category);
        assert_eq!(3, score.rank_value);
    }

    #[test]
    fn test_high_card() {
        let score = evaluate_hand(&cards(&["2♠", "7♥"]), &cards(&["K♦", "Q♣", "J♠"])).unwrap();
        assert_eq!(HandCategory::HighCard, score.category);
        assert_eq!(0, score.rank_value);
    }

    #[test]
    fn test_pair() {
        assert_eq!(
            HandCategory::Pair,
            category(&["A♠", "A♥"], &["K♦", "Q♣", "J♠"])
        );
    }

    #[test]
    fn test_two_pair() {
        assert_eq!(
            HandCategory::TwoPair,
            category(&["A♠", "K♥"], &["A♦", "K♣", "2♠"])
        );
    }

    #[test]
    fn test_straight() {
        assert_eq!(
            HandCategory::Straight,
            category(&["9♠", "8♥"], &["7♦", "6♣", "5♠"])
        );
    }

    #[test]
    fn test_wheel_straight() {
        // The ace-low wheel must be special cased since the ace
        // is otherwise high.
        assert_eq!(
            HandCategory::Straight,
            category(&["A♠", "2♥"], &["3♦", "4♣", "5♠"])
        );
    }

    #[test]
    fn test_straight_with_duplicated_ranks() {
        // Seven cards where the straight is buried among paired ranks.
        assert_eq!(
            HandCategory::Straight,
            category(&["6♠", "6♥"], &["5♦", "7♣", "8♠", "9♥", "2♦"])
        );
    }

    #[test]
    fn test_flush() {
        assert_eq!(
            HandCategory::Flush,
            category(&["A♦", "8♦"], &["9♦", "10♦", "2♦"])
        );
    }

    #[test]
    fn test_full_house() {
        assert_eq!(
            HandCategory::FullHouse,
            category(&["9♠", "9♥"], &["9♦", "A♣", "A♠"])
        );
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(
            HandCategory::FourOfAKind,
            category(&["A♠", "A♥"], &["A♦", "A♣", "10♠"])
        );
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(
            HandCategory::StraightFlush,
            category(&["9♥", "8♥"], &["7♥", "6♥", "5♥"])
        );
    }

    #[test]
    fn test_category_ordering_monotonic() {
        let ordered = [
            HandCategory::HighCard,
            HandCategory::Pair,
            HandCategory::TwoPair,
            HandCategory::ThreeOfAKind,
            HandCategory::Straight,
            HandCategory::Flush,
            HandCategory::FullHouse,
            HandCategory::FourOfAKind,
            HandCategory::StraightFlush,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0].strength() < pair[1].strength());
        }
    }

    #[test]
    fn test_same_category_ties() {
        // Kickers are not compared: a pair of aces and a pair of
        // twos score the same.
        let aces = evaluate_hand(&cards(&["A♠", "A♥"]), &cards(&["K♦", "Q♣", "J♠"])).unwrap();
        let twos = evaluate_hand(&cards(&["2♠", "2♥"]), &cards(&["K♦", "Q♣", "J♠"])).unwrap();
        assert_eq!(aces, twos);
    }

    #[test]
    fn test_duplicate_hole_cards() {
        let c: Card = "A♠".parse().unwrap();
        assert_eq!(
            Err(EquityError::DuplicateCard(c)),
            evaluate_hand(&[c, c], &[])
        );
    }

    #[test]
    fn test_duplicate_across_board() {
        assert_eq!(
            Err(EquityError::DuplicateCard("A♠".parse().unwrap())),
            evaluate_hand(&cards(&["A♠", "K♥"]), &cards(&["A♠", "2♣", "3♦"]))
        );
    }

    #[test]
    fn test_wrong_hole_count() {
        assert_eq!(
            Err(EquityError::InvalidHoleCards),
            evaluate_hand(&cards(&["A♠"]), &[])
        );
    }

    #[test]
    fn test_oversized_board() {
        assert_eq!(
            Err(EquityError::InvalidBoardSize),
            evaluate_hand(
                &cards(&["A♠", "K♥"]),
                &cards(&["2♣", "3♦", "4♠", "5♥", "6♣", "7♦"])
            )
        );
    }

    #[test]
    fn test_straight_constants() {
        for mask in STRAIGHTS.iter() {
            // Make sure that all of the constant hands have exactly 5 ones.
            assert_eq!(5, mask.count_ones());
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!("Three of a Kind", HandCategory::ThreeOfAKind.name());
        assert_eq!("Pre-flop", HandCategory::PreFlop.to_string());
    }
}
