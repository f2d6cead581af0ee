//! Ports (trait boundaries) between the game driver and its participants.

pub mod observer;
pub mod responder;

pub use observer::Observer;
pub use responder::Responder;
