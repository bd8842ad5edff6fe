//! # lettergram
//!
//! reads a text stream chunk by chunk and reports its most used letters as a
//! histogram.

#![forbid(unsafe_code)]

pub mod helpers;
pub mod models;
