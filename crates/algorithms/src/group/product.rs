//! Direct products of structures

use core::fmt;

use calgebra_api::{Capabilities, Order};

use crate::structure::{AlgebraicStructure, Element};

/// Finite direct product; elements are tuples, operations act per component
///
/// The product offers what every component offers, up to group structure.
/// Cyclicity and ring structure are not inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSet {
    components: Vec<AlgebraicStructure>,
}

impl ProductSet {
    /// Product of the given components, in order
    pub fn new(components: Vec<AlgebraicStructure>) -> Self {
        Self { components }
    }

    /// `structure` repeated `arity` times
    pub fn power(structure: &AlgebraicStructure, arity: usize) -> Self {
        Self::new(vec![structure.clone(); arity])
    }

    /// The component structures
    pub fn components(&self) -> &[AlgebraicStructure] {
        &self.components
    }

    /// Number of components
    pub fn arity(&self) -> usize {
        self.components.len()
    }

    /// Intersection of the component capabilities, capped at group
    pub fn capabilities(&self) -> Capabilities {
        self.components
            .iter()
            .fold(Capabilities::GROUP, |caps, c| caps.intersect(c.capabilities()))
    }

    /// Product of the component orders
    pub fn order(&self) -> Order {
        self.components
            .iter()
            .fold(Order::one(), |acc, c| acc.product(&c.order()))
    }

    /// Whether each tuple entry is an element of the matching component
    pub fn contains(&self, elements: &[Element]) -> bool {
        elements.len() == self.components.len()
            && self
                .components
                .iter()
                .zip(elements)
                .all(|(c, e)| e.structure() == c)
    }
}

impl fmt::Display for ProductSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(" x ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str(")")
    }
}
