//! Resolved position types.

use serde::{Deserialize, Serialize};

// region:    --- Position

/// Equatorial position, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
	/// Right ascension, in degrees.
	pub ra: f64,
	/// Declination, in degrees.
	pub dec: f64,
	/// Always `J2000_EQUINOX` (the service's `jradeg`/`jdedeg` are J2000).
	pub equinox: f64,
}

impl Position {
	pub const J2000_EQUINOX: f64 = 2000.0;

	#[must_use]
	pub const fn j2000(ra: f64, dec: f64) -> Self {
		Self {
			ra,
			dec,
			equinox: Self::J2000_EQUINOX,
		}
	}
}

// endregion: --- Position

// region:    --- Resolution

/// Outcome of a successful exchange with the service.
///
/// `NoResult` is not an error: the service answered but none of the selected
/// resolvers knew the name (or the coordinates were unusable).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
	Position(Position),
	NoResult,
}

// Getters
impl Resolution {
	pub fn position(&self) -> Option<&Position> {
		match self {
			Self::Position(position) => Some(position),
			Self::NoResult => None,
		}
	}

	pub fn into_position(self) -> Option<Position> {
		match self {
			Self::Position(position) => Some(position),
			Self::NoResult => None,
		}
	}

	pub fn is_no_result(&self) -> bool {
		matches!(self, Self::NoResult)
	}
}

impl From<Position> for Resolution {
	fn from(position: Position) -> Self {
		Self::Position(position)
	}
}

impl From<Option<Position>> for Resolution {
	fn from(position: Option<Position>) -> Self {
		position.map(Self::Position).unwrap_or(Self::NoResult)
	}
}

// endregion: --- Resolution
