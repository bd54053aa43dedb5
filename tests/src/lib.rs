//! Shared fixtures for the calgebra integration tests
//!
//! The small groups below are real, fully validated curve groups: big enough
//! to pass every domain-parameter check, small enough to exercise exhaustively.

pub mod vectors;
