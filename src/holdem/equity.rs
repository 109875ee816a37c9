use std::time::{Duration, Instant};

use rand::Rng;
use tracing::event;

use crate::core::{Card, Deck, EquityError, FlatDeck};
use crate::holdem::range::RangeSpec;
use crate::holdem::score::evaluate_hand;

/// The outcome of a Monte Carlo equity run.
///
/// `completed_trials` can be lower than the requested trial count
/// when range sampling skipped trials or a deadline cut the run
/// short. Partial results are valid results, not errors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityEstimate {
    /// Win probability as a percentage in `[0, 100]`. A tie counts
    /// as half a win for each side.
    pub equity: f64,
    /// How many trials actually contributed to the estimate.
    pub completed_trials: usize,
}

/// Monte Carlo equity simulator for one hand against one opponent.
///
/// Repeatedly completes the board from a freshly shuffled exclusion
/// deck, draws the opponent's hole cards uniformly or samples them
/// from a [`RangeSpec`], scores both hands, and accumulates wins
/// with split-pot ties.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use holdem_equity::core::Card;
/// use holdem_equity::holdem::EquityEstimator;
///
/// let hole: Vec<Card> = ["A♠", "A♥"].iter().map(|s| s.parse().unwrap()).collect();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let estimate = EquityEstimator::new(1_000)
///     .estimate(&hole, &[], None, &mut rng)
///     .unwrap();
/// assert!(estimate.equity > 50.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EquityEstimator {
    /// The trial budget.
    trials: usize,
    /// Stop starting new trials once this much time has elapsed,
    /// provided at least one trial has completed.
    deadline: Option<Duration>,
}

impl EquityEstimator {
    /// Create an estimator with a trial budget.
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            deadline: None,
        }
    }

    /// Set a soft deadline. Once it passes no further trials are
    /// started; the trials finished so far form the estimate.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Estimate the equity of `hole` against one opponent.
    ///
    /// `community` may hold 0 through 5 known board cards. With
    /// `opponent_range` set, each trial samples the opponent's hand
    /// from the range and skips the trial when the sampled cards are
    /// already in play; skipped trials do not count toward the
    /// denominator. All input validation happens before the first
    /// trial runs, so malformed input never produces a biased
    /// estimate.
    pub fn estimate<R: Rng>(
        &self,
        hole: &[Card],
        community: &[Card],
        opponent_range: Option<&RangeSpec>,
        rng: &mut R,
    ) -> Result<EquityEstimate, EquityError> {
        if hole.len() != 2 {
            return Err(EquityError::InvalidHoleCards);
        }
        if community.len() > 5 {
            return Err(EquityError::InvalidBoardSize);
        }

        let mut known: Vec<Card> = Vec::with_capacity(hole.len() + community.len());
        known.extend_from_slice(hole);
        known.extend_from_slice(community);

        // Rejects any card referenced twice among the inputs.
        let mut deck: FlatDeck = Deck::without(&known)?.into();

        let board_needed = 5 - community.len();
        if board_needed + 2 > deck.len() {
            // Unreachable with a 52 card deck, but the draw below
            // indexes into the deck so it stays guarded.
            return Err(EquityError::InsufficientCards {
                requested: board_needed + 2,
                remaining: deck.len(),
            });
        }

        let start = Instant::now();
        let mut wins: f64 = 0.0;
        let mut completed: usize = 0;

        for _ in 0..self.trials {
            if let Some(deadline) = self.deadline {
                if completed > 0 && start.elapsed() >= deadline {
                    break;
                }
            }

            // A fresh uniform permutation per trial. Trials stay
            // independent; no partially consumed shuffle is carried
            // from one trial into the next.
            deck.shuffle(rng);

            let opponent: [Card; 2] = match opponent_range {
                Some(range) => match range.sample(&deck[board_needed..], rng) {
                    Some(cards) => cards,
                    None => continue,
                },
                None => [deck[board_needed], deck[board_needed + 1]],
            };

            let mut board: Vec<Card> = Vec::with_capacity(5);
            board.extend_from_slice(community);
            board.extend_from_slice(&deck[..board_needed]);

            let player_score = evaluate_hand(hole, &board)?;
            let opponent_score = evaluate_hand(&opponent, &board)?;

            if player_score > opponent_score {
                wins += 1.0;
            } else if player_score == opponent_score {
                // Split pot.
                wins += 0.5;
            }
            completed += 1;
        }

        if completed == 0 {
            return Err(EquityError::SamplingExhausted);
        }

        let equity = 100.0 * wins / completed as f64;
        event!(
            tracing::Level::DEBUG,
            trials = self.trials,
            completed,
            equity,
            "estimated equity"
        );

        Ok(EquityEstimate {
            equity,
            completed_trials: completed,
        })
    }
}

/// Estimate a hand's equity as a percentage in `[0, 100]`.
///
/// This is the flat entry point for callers that do not need a
/// seeded generator or a deadline; it runs `trials` Monte Carlo
/// trials with the thread-local generator.
///
/// # Examples
///
/// ```no_run
/// use holdem_equity::core::Card;
/// use holdem_equity::holdem::estimate_equity;
///
/// let hole: Vec<Card> = ["A♠", "A♥"].iter().map(|s| s.parse().unwrap()).collect();
///
/// let equity = estimate_equity(&hole, &[], None, 5_000).unwrap();
/// assert!((0.0..=100.0).contains(&equity));
/// ```
pub fn estimate_equity(
    hole: &[Card],
    community: &[Card],
    opponent_range: Option<&RangeSpec>,
    trials: usize,
) -> Result<f64, EquityError> {
    let mut rng = rand::rng();
    EquityEstimator::new(trials)
        .estimate(hole, community, opponent_range, &mut rng)
        .map(|estimate| estimate.equity)
}
