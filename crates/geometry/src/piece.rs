use std::f64::consts::PI;

use atelier_core::{DomainError, DomainResult, ValueObject};

/// Surface-area capability, implemented by every piece.
pub trait Area {
    /// Surface area in square units, at native `f64` precision.
    fn area(&self) -> f64;
}

/// Volume capability, implemented only by solid (cast) pieces.
///
/// Flat pieces do not implement this trait. There is deliberately no
/// `volume()` on [`Area`]: a capability a piece cannot meaningfully provide
/// is not part of its contract, so no implementor ever stubs, errors, or
/// returns a sentinel.
pub trait Volume {
    /// Volume in cubic units, at native `f64` precision.
    fn volume(&self) -> f64;
}

/// A dimension must be a finite, strictly positive length.
fn ensure_dimension(name: &str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "{name} must be a positive finite number"
        )));
    }
    Ok(value)
}

/// Flat piece: circular blank.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> DomainResult<Self> {
        Ok(Self {
            radius: ensure_dimension("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl ValueObject for Circle {}

/// Flat piece: rectangular sheet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> DomainResult<Self> {
        Ok(Self {
            length: ensure_dimension("length", length)?,
            width: ensure_dimension("width", width)?,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.width
    }
}

impl ValueObject for Rectangle {}

/// Flat piece: square tile.
///
/// A square is its own type, not a constrained [`Rectangle`]: the two share
/// the [`Area`] capability and nothing else, so neither can break the
/// other's contract.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> DomainResult<Self> {
        Ok(Self {
            side: ensure_dimension("side", side)?,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl ValueObject for Square {}

/// Cast piece: rectangular block.
///
/// The only piece with a volume; its surface area is the full outer skin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Block {
    length: f64,
    width: f64,
    height: f64,
}

impl Block {
    pub fn new(length: f64, width: f64, height: f64) -> DomainResult<Self> {
        Ok(Self {
            length: ensure_dimension("length", length)?,
            width: ensure_dimension("width", width)?,
            height: ensure_dimension("height", height)?,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Area for Block {
    fn area(&self) -> f64 {
        2.0 * (self.length * self.width
            + self.length * self.height
            + self.width * self.height)
    }
}

impl Volume for Block {
    fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

impl ValueObject for Block {}
