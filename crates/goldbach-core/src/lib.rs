//! # goldbach-core
//!
//! Core types shared across all Goldbach verifier crates.
//!
//! This crate provides the foundational types the engine, report, and CLI
//! crates exchange:
//! - Verification entities (prime pairs, per-number records, samples)
//! - The aggregate report and its persisted document envelope
//! - CLI response types

pub mod entities;
pub mod responses;
