//! Groups and monoids that are not fields or curves

mod gstar_mod;
mod product;
mod zplus;
mod ztimes_mod;

pub use gstar_mod::GStarModPrime;
pub use product::ProductSet;
pub use zplus::ZPlus;
pub use ztimes_mod::ZTimesMod;
