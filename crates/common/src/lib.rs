//! Common implementations and shared functionality for the calgebra library
//!
//! This crate provides the big-integer number theory and the uniform sampling
//! routines used by the field and group implementations.

#![forbid(unsafe_code)]

pub mod math_common;
pub mod random;

pub use math_common::{
    gcd, has_sqrt_mod_prime, is_probable_prime, mod_exp, mod_inv, sqrt_mod_prime,
};
pub use random::{random_bits, random_below, random_in_range};
