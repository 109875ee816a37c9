//! Hold'em specific code: the coarse hand scorer, the starting-hand
//! range sampler, and the Monte Carlo equity simulator.

/// Module with the category-only hand scorer.
mod score;
/// Export the categories, the score, and the evaluation entry point.
pub use self::score::{HandCategory, HandScore, evaluate_hand};

/// Module for symbolic starting-hand ranges and sampling from them.
mod range;
/// Export the notation types and the range collection.
pub use self::range::{HandNotation, RangeSpec, Suitedness};

/// Module with the Monte Carlo equity simulator.
mod equity;
/// Export the estimator and the flat entry point.
pub use self::equity::{EquityEstimate, EquityEstimator, estimate_equity};
