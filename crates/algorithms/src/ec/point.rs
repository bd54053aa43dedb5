//! Affine points with an explicit point at infinity

/// A point on an elliptic curve
///
/// The identity is its own variant, so no affine coordinate pair ever
/// stands in for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EcPoint<E> {
    /// The point at infinity, the group identity
    Infinity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate
        x: E,
        /// y-coordinate
        y: E,
    },
}

impl<E> EcPoint<E> {
    /// Affine point from its coordinates
    pub fn affine(x: E, y: E) -> Self {
        EcPoint::Affine { x, y }
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self, EcPoint::Infinity)
    }

    /// The coordinates of an affine point
    pub fn coordinates(&self) -> Option<(&E, &E)> {
        match self {
            EcPoint::Infinity => None,
            EcPoint::Affine { x, y } => Some((x, y)),
        }
    }

    /// The x-coordinate of an affine point
    pub fn x(&self) -> Option<&E> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate of an affine point
    pub fn y(&self) -> Option<&E> {
        self.coordinates().map(|(_, y)| y)
    }
}
