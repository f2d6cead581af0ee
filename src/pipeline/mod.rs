//! Self-play pipeline
//!
//! This module provides:
//! - The game driver that hands boards between two responders
//! - Baseline responders (random, scripted) alongside the pruning agent
//! - Observers for progress display and game transcripts

pub mod observers;
pub mod responders;
pub mod selfplay;

pub use observers::{ProgressObserver, Transcript, TranscriptObserver};
pub use responders::{RandomResponder, ScriptedResponder};
pub use selfplay::{SelfPlay, SelfPlayReport, Tally, play_game};

pub use crate::ports::{Observer, Responder};
