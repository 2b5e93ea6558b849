//! Batch execution shared by one-shot commands and the interactive session.
mod runner;


pub use runner::BatchRunner;
