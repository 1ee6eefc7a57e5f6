//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::run_perft;

mod reference;
pub use reference::{reference_flips, reference_mobility};
