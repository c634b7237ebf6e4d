//! Common utilities for amphora
//!
//! This crate provides shared functionality used across all amphora modules.

pub mod error;

pub use error::{AmphoraError, Result};
