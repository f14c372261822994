//! Error types for tokenizing and parsing.
//!
//! Every failure is fatal: the first error aborts the run and is returned to
//! the caller together with the position it was detected at.

pub mod errors;

#[cfg(test)]
mod tests;
