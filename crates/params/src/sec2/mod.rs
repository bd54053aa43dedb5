//! SEC 2 recommended elliptic-curve domain parameters

mod binary;
mod prime;

pub use binary::*;
pub use prime::*;
