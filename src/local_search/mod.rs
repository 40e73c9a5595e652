//! Local search operators for improving a tour.
//!
//! - [`two_opt_improve`] — First-improvement 2-opt segment reversal

mod two_opt;

pub use two_opt::{two_opt_improve, TwoOptParams};
