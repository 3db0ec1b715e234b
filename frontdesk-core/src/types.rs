//! Domain types for the hotel registry.
//!
//! Identifiers are newtypes over integers so room numbers, guest ids and
//! reservation ids cannot be mixed up at call sites.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A room number, assigned at setup and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub i64);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for RoomNumber {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

/// A caller-supplied guest id. Not guaranteed unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuestId(pub i64);

impl GuestId {
    /// Id carried by the anonymous guest of a walk-in booking.
    pub const PLACEHOLDER: GuestId = GuestId(-1);
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for GuestId {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

/// A reservation id, issued by the registry counter starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationId(pub i64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for ReservationId {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A hotel guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    /// Room the guest is currently checked in to.
    pub room: Option<RoomNumber>,
}

impl Guest {
    pub fn new(id: GuestId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            room: None,
        }
    }

    /// The nameless guest attached to a room by a walk-in booking.
    pub fn placeholder() -> Self {
        Self::new(GuestId::PLACEHOLDER, "")
    }
}

/// A room in the hotel inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub number: RoomNumber,
    /// Occupancy flag. Set by check-in, never by a reservation.
    pub booked: bool,
    pub guest: Option<Guest>,
}

impl Room {
    pub fn new(number: RoomNumber) -> Self {
        Self {
            number,
            booked: false,
            guest: None,
        }
    }

    pub fn is_free(&self) -> bool {
        !self.booked
    }
}

/// A standing reservation. Independent of room occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest: Guest,
    pub room: RoomNumber,
}

/// What the front desk reports about a guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestInfo {
    pub id: GuestId,
    pub name: String,
    pub room: Option<RoomNumber>,
}

impl fmt::Display for GuestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Guest Information:")?;
        writeln!(f, "Guest ID: {}", self.id)?;
        writeln!(f, "Guest Name: {}", self.name)?;
        match self.room {
            Some(room) => write!(f, "Room Number: {room}"),
            None => write!(f, "Room Number: Not assigned"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
