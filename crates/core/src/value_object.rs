//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are the same value. They model
/// concepts where identity does not matter: a payment receipt, a rectangular
/// piece of sheet stock, a money amount.
///
/// To "modify" a value object, construct a new one. Construction is where
/// validation happens; a value object that exists is a value object whose
/// invariants hold.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
