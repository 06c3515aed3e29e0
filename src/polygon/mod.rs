//! Polygon and ring types.
//!
//! A [`Ring`] is a closed boundary loop; a [`Polygon`] is one exterior ring
//! with zero or more holes. The exact point locator on rings
//! ([`Ring::locate`]) distinguishes inside, on-boundary, and outside, and is
//! the oracle the clipping engine and the spatial predicates are built on.

mod core;
mod ring;

pub use self::core::{validate_ring, Polygon};
pub use ring::{Location, Ring};
