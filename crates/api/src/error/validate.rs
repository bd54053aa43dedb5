//! Validation utilities
//!
//! Guards that turn a boolean condition into the matching error kind.

use std::borrow::Cow;

use super::{CurveCheck, Error, Result};
use crate::types::{Capabilities, Capability};

/// Validate a constructor or operation argument
#[inline(always)]
pub fn parameter<R: Into<Cow<'static, str>>>(
    condition: bool,
    context: &'static str,
    reason: R,
) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a value belongs to a structure
#[inline(always)]
pub fn member<R: Into<Cow<'static, str>>>(
    condition: bool,
    structure: &'static str,
    reason: R,
) -> Result<()> {
    if !condition {
        return Err(Error::not_member(structure, reason));
    }
    Ok(())
}

/// Validate one elliptic-curve domain-parameter check
#[inline(always)]
pub fn curve(condition: bool, check: CurveCheck) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCurveParameters { check });
    }
    Ok(())
}

/// Validate that a structure supports a capability
#[inline(always)]
pub fn capability(
    capabilities: Capabilities,
    required: Capability,
    structure: &'static str,
) -> Result<()> {
    if !capabilities.supports(required) {
        return Err(Error::unsupported(structure, required));
    }
    Ok(())
}

/// Validate that a divisor is non-zero
#[inline(always)]
pub fn non_zero(is_zero: bool, context: &'static str) -> Result<()> {
    if is_zero {
        return Err(Error::DivisionByZero { context });
    }
    Ok(())
}
