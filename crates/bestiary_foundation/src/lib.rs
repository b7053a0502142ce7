//! Core types and errors for Bestiary.
//!
//! This crate provides:
//! - [`Error`] / [`ErrorKind`] - The single error type shared by every layer
//! - [`Quantity`] and [`ItemCount`] - Counted item references used by
//!   sentences and the world store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;

pub use error::{Error, ErrorKind, Result, Stage};
pub use types::{ItemCount, Quantity, join_counts};
