//! Monte Carlo hand equity estimation for Texas Hold'em.
//!
//! The crate is split in two. `core` holds the card, deck, and error
//! primitives that are agnostic to any particular poker variant. `holdem`
//! holds the hand scorer, the starting-hand range sampler, and the equity
//! simulator that repeatedly completes the board against a random or
//! range-constrained opponent.
//!
//! Hand strength is scored by category only. Kickers are never compared,
//! so two hands of the same category split the pot. The resulting equities
//! are deliberately approximate; see `holdem::HandScore`.

/// Allow all the core card functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
