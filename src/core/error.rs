use thiserror::Error;

use super::Card;

/// This is the error type for the whole crate. It uses
/// `thiserror` to provide readable error messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquityError {
    #[error("Unable to parse card value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit glyph")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Pairs can't be suited")]
    InvalidSuitedPair,
    #[error("Hole cards must be exactly two cards")]
    InvalidHoleCards,
    #[error("Community cards must number five or fewer")]
    InvalidBoardSize,
    #[error("Card referenced more than once: {0}")]
    DuplicateCard(Card),
    #[error("Requested {requested} cards with only {remaining} left in the deck")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("No simulation trial produced a sampleable opponent hand")]
    SamplingExhausted,
}
