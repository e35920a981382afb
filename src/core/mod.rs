//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond the letter-position index. All types here are pure and testable.

mod board;
mod secret;

pub use board::{Board, PLACEHOLDER};
pub use secret::{Secret, SecretError};
