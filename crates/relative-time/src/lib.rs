//! # relative-time
//!
//! How far away is a civil date, in whole units, from right now?
//!
//! The crate parses a strictly formatted wall-clock reading, anchors it in an
//! IANA timezone, and reports the magnitude of its difference to the present
//! instant in one of eight units. Everything except the clock read is a pure
//! function.
//!
//! ## Modules
//!
//! - [`temporal`] — Strict parsing, zone anchoring, unit reduction
//! - [`unit`] — Output units and their 24 accepted tokens
//! - [`clock`] — Where "now" comes from
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod temporal;
pub mod unit;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RelativeTimeError;
pub use temporal::{
    anchor, difference, parse_timezone, parse_wall_clock, relative_difference,
    relative_difference_at, timezone_or_default, DEFAULT_TIMEZONE,
};
pub use unit::{TimeUnit, UnknownUnit};
