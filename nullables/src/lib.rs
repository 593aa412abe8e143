//! Nullable infrastructure for deterministic testing.
//!
//! The validator reads token state of spent outputs through the
//! [`slp_validator::TokenGraph`] trait. This crate provides an in-memory
//! implementation that never touches disk, so whole token histories can be
//! replayed in tests.

pub mod graph;

pub use graph::MemoryTokenGraph;
