//! Source of the reference instant.
//!
//! The computation never reads the system clock directly; it asks a [`Clock`]
//! once parsing has succeeded. Production code uses [`SystemClock`], tests pin
//! "now" with [`FixedClock`].

use chrono::{DateTime, Utc};

/// Provides the present instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the OS clock through `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
