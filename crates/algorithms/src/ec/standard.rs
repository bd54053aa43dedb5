//! Named SEC 2 curves built from the literal parameter tables

use std::sync::Arc;

use calgebra_api::{validate, Error, Result};
use calgebra_params::{by_name, CurveParams, FieldType};
use num_bigint::BigUint;

use super::EcGroup;
use crate::field::{BinaryField, BinaryPolynomial, ZModPrime};
use crate::structure::AlgebraicStructure;

fn decode_hex(value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|_| Error::param("standard curve", "malformed hex constant"))
}

fn integer(value: &str) -> Result<BigUint> {
    Ok(BigUint::from_bytes_be(&decode_hex(value)?))
}

fn polynomial(value: &str) -> Result<BinaryPolynomial> {
    Ok(BinaryPolynomial::from_bytes_be(&decode_hex(value)?))
}

fn lookup(name: &str) -> Result<&'static CurveParams> {
    by_name(name).ok_or_else(|| Error::param("standard curve", "unknown curve name"))
}

/// Validated group from a prime-field parameter set
pub fn from_prime_params(params: &'static CurveParams) -> Result<EcGroup<ZModPrime>> {
    validate::parameter(
        params.field_type == FieldType::Prime,
        "standard curve",
        "not a prime-field curve",
    )?;
    EcGroup::from_integers(
        Some(params.name),
        integer(params.field)?,
        integer(params.a)?,
        integer(params.b)?,
        integer(params.gx)?,
        integer(params.gy)?,
        integer(params.order)?,
        BigUint::from(params.cofactor),
    )
}

/// Validated group from a binary-field parameter set
pub fn from_binary_params(params: &'static CurveParams) -> Result<EcGroup<BinaryField>> {
    validate::parameter(
        params.field_type == FieldType::Binary,
        "standard curve",
        "not a binary-field curve",
    )?;
    EcGroup::from_polynomials(
        Some(params.name),
        polynomial(params.field)?,
        polynomial(params.a)?,
        polynomial(params.b)?,
        polynomial(params.gx)?,
        polynomial(params.gy)?,
        integer(params.order)?,
        BigUint::from(params.cofactor),
    )
}

/// SEC 2 prime-field curve by name, e.g. `secp256r1`
pub fn prime_curve(name: &str) -> Result<EcGroup<ZModPrime>> {
    from_prime_params(lookup(name)?)
}

/// SEC 2 binary-field curve by name, e.g. `sect283k1`
pub fn binary_curve(name: &str) -> Result<EcGroup<BinaryField>> {
    from_binary_params(lookup(name)?)
}

/// Any SEC 2 curve by name, as a dynamic structure
pub fn standard_curve(name: &str) -> Result<AlgebraicStructure> {
    let params = lookup(name)?;
    Ok(match params.field_type {
        FieldType::Prime => AlgebraicStructure::EcPrime(Arc::new(from_prime_params(params)?)),
        FieldType::Binary => AlgebraicStructure::EcBinary(Arc::new(from_binary_params(params)?)),
    })
}
