//! Dart throw validation.
//!
//! Raw input arrives as loosely typed integers (segment value, multiplier)
//! plus optional normalized board coordinates. Validation turns it into a
//! [`Dart`] or a `Validation` error before anything touches match state.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Segment value of the bull.
pub const BULL_VALUE: u8 = 25;
/// Score of the double bull, which counts as a finishing double.
pub const DOUBLE_BULL_SCORE: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplier {
    Miss,
    Single,
    Double,
    Triple,
}

impl Multiplier {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Multiplier::Miss),
            1 => Some(Multiplier::Single),
            2 => Some(Multiplier::Double),
            3 => Some(Multiplier::Triple),
            _ => None,
        }
    }

    pub fn factor(self) -> i32 {
        match self {
            Multiplier::Miss => 0,
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }
}

/// Unvalidated throw as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawThrow {
    pub value: i32,
    pub multiplier: i32,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl RawThrow {
    pub fn new(value: i32, multiplier: i32) -> Self {
        Self {
            value,
            multiplier,
            x: None,
            y: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}

/// A legal dart: value in 1..=20 or 25, no triple bull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dart {
    value: u8,
    multiplier: Multiplier,
}

impl Dart {
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn scored(&self) -> i32 {
        i32::from(self.value) * self.multiplier.factor()
    }

    /// A dart that may legally end a leg: any double, including the double bull.
    pub fn is_double_out(&self) -> bool {
        self.multiplier == Multiplier::Double || self.scored() == DOUBLE_BULL_SCORE
    }

    pub fn label(&self) -> String {
        match (self.value, self.multiplier) {
            (_, Multiplier::Miss) => "MISS".to_string(),
            (BULL_VALUE, Multiplier::Double) => "BULL".to_string(),
            (BULL_VALUE, _) => "SBULL".to_string(),
            (v, Multiplier::Triple) => format!("T{v}"),
            (v, Multiplier::Double) => format!("D{v}"),
            (v, Multiplier::Single) => format!("S{v}"),
        }
    }
}

/// Normalized position on the board image, both axes in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedThrow {
    pub dart: Dart,
    pub position: Option<BoardPosition>,
}

/// Validate a (value, multiplier) pair.
pub fn validate_throw(value: i32, multiplier: i32) -> Result<Dart, DomainError> {
    let is_segment = (1..=20).contains(&value) || value == i32::from(BULL_VALUE);
    if !is_segment {
        return Err(DomainError::validation(
            ValidationKind::InvalidThrow,
            format!("value must be 1..=20 or 25, got {value}"),
        ));
    }

    let mult = Multiplier::from_raw(multiplier).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidThrow,
            format!("multiplier must be 0..=3, got {multiplier}"),
        )
    })?;

    if value == i32::from(BULL_VALUE) && mult == Multiplier::Triple {
        return Err(DomainError::validation(
            ValidationKind::InvalidThrow,
            "multiplier 3 is not allowed on the bull",
        ));
    }

    Ok(Dart {
        value: value as u8,
        multiplier: mult,
    })
}

/// Validate optional board coordinates. They travel as a pair.
pub fn validate_coordinates(
    x: Option<f64>,
    y: Option<f64>,
) -> Result<Option<BoardPosition>, DomainError> {
    match (x, y) {
        (None, None) => Ok(None),
        (Some(x), Some(y)) => {
            let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
            if !in_unit(x) || !in_unit(y) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCoordinates,
                    format!("coordinates must be within [0, 1], got ({x}, {y})"),
                ));
            }
            Ok(Some(BoardPosition { x, y }))
        }
        _ => Err(DomainError::validation(
            ValidationKind::InvalidCoordinates,
            "x and y must be supplied together",
        )),
    }
}

pub fn validate_raw(raw: &RawThrow) -> Result<ValidatedThrow, DomainError> {
    let dart = validate_throw(raw.value, raw.multiplier)?;
    let position = validate_coordinates(raw.x, raw.y)?;
    Ok(ValidatedThrow { dart, position })
}
