//! Capability model and structure orders
//!
//! A structure does not prove what it is through its Rust type alone: the
//! integers mod n form a field only when n is prime. Each structure reports a
//! [`Capabilities`] set instead, and every capability-gated operation checks
//! that set before doing any work.

use core::fmt;

use num_bigint::BigUint;
use num_traits::One;

/// One algebraic capability a structure can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Associative `apply`
    SemiGroup,
    /// SemiGroup with an identity element
    Monoid,
    /// Monoid with inverses
    Group,
    /// Group generated by a single element
    Cyclic,
    /// Additive group with a distributive multiplication
    Ring,
    /// Ring whose non-zero elements are invertible
    Field,
}

impl Capability {
    /// All capabilities, weakest first
    pub const ALL: [Capability; 6] = [
        Capability::SemiGroup,
        Capability::Monoid,
        Capability::Group,
        Capability::Cyclic,
        Capability::Ring,
        Capability::Field,
    ];

    const fn bit(self) -> u8 {
        match self {
            Capability::SemiGroup => 1 << 0,
            Capability::Monoid => 1 << 1,
            Capability::Group => 1 << 2,
            Capability::Cyclic => 1 << 3,
            Capability::Ring => 1 << 4,
            Capability::Field => 1 << 5,
        }
    }

    /// Bits of this capability together with everything it implies
    const fn closure(self) -> u8 {
        match self {
            Capability::SemiGroup => Capability::SemiGroup.bit(),
            Capability::Monoid => Capability::Monoid.bit() | Capability::SemiGroup.closure(),
            Capability::Group => Capability::Group.bit() | Capability::Monoid.closure(),
            Capability::Cyclic => Capability::Cyclic.bit() | Capability::Group.closure(),
            // A ring is an additive group first
            Capability::Ring => Capability::Ring.bit() | Capability::Group.closure(),
            Capability::Field => Capability::Field.bit() | Capability::Ring.closure(),
        }
    }

    /// Lower-case name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Capability::SemiGroup => "semigroup",
            Capability::Monoid => "monoid",
            Capability::Group => "group",
            Capability::Cyclic => "cyclic group",
            Capability::Ring => "ring",
            Capability::Field => "field",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of capabilities, closed under implication
///
/// Adding `Cyclic` also adds `Group`, `Monoid` and `SemiGroup`; adding `Field`
/// also adds `Ring` and the additive group capabilities.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    /// A plain set
    pub const SET: Self = Self(0);
    /// Semigroup
    pub const SEMIGROUP: Self = Self(Capability::SemiGroup.closure());
    /// Monoid
    pub const MONOID: Self = Self(Capability::Monoid.closure());
    /// Group
    pub const GROUP: Self = Self(Capability::Group.closure());
    /// Cyclic group
    pub const CYCLIC_GROUP: Self = Self(Capability::Cyclic.closure());
    /// Ring (with its additive group)
    pub const RING: Self = Self(Capability::Ring.closure());
    /// Field (with its ring and additive group)
    pub const FIELD: Self = Self(Capability::Field.closure());

    /// Add a capability and everything it implies
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.closure())
    }

    /// Whether `capability` is in the set
    pub const fn supports(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Capabilities present in both sets
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterate over the capabilities in the set, weakest first
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.supports(*c))
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<Capability> for Capabilities {
    fn from(capability: Capability) -> Self {
        Self::SET.with(capability)
    }
}

/// Number of elements of a structure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Order {
    /// Finitely many elements
    Finite(BigUint),
    /// Countably infinite
    Infinite,
    /// Finite or not, but not known to the structure
    Unknown,
}

impl Order {
    /// Whether the order is a known finite number
    pub fn is_finite(&self) -> bool {
        matches!(self, Order::Finite(_))
    }

    /// The finite order, if known
    pub fn finite(&self) -> Option<&BigUint> {
        match self {
            Order::Finite(n) => Some(n),
            _ => None,
        }
    }

    /// Order of a direct product with `other`
    pub fn product(&self, other: &Order) -> Order {
        match (self, other) {
            (Order::Unknown, _) | (_, Order::Unknown) => Order::Unknown,
            (Order::Infinite, _) | (_, Order::Infinite) => Order::Infinite,
            (Order::Finite(a), Order::Finite(b)) => Order::Finite(a * b),
        }
    }

    /// Order of the trivial structure
    pub fn one() -> Order {
        Order::Finite(BigUint::one())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Finite(n) => write!(f, "{}", n),
            Order::Infinite => f.write_str("infinite"),
            Order::Unknown => f.write_str("unknown"),
        }
    }
}
