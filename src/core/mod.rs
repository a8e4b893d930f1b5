//! Core signal processing traits.
//!
//! - `Signal` trait for all sample sources
//! - `Pitched` trait for sources with a fixed frequency

mod signal;

pub use signal::{Pitched, Signal};
