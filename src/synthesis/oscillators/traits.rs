//! Core trait definitions for oscillators.

use crate::core::{Pitched, Signal};

/// Oscillators are pitched signals.
///
/// All oscillators here are driven by a sample counter starting at time step
/// zero, so two oscillators built with the same arguments produce the same
/// samples.
pub trait Oscillator: Signal + Pitched {}
