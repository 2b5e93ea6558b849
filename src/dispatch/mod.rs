//! Concurrent batch dispatch with optional launch jitter.
mod dispatcher;
mod jitter;


pub use dispatcher::{BatchDispatcher, OUTCOME_CHANNEL_CAPACITY};
pub use jitter::{JitterScheduler, next_delay};
