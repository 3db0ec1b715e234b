//! Error types for frontdesk-core.
//!
//! Registry operations collapse several causes into one user-facing message.
//! Each cause is still its own variant so callers and tests can match on it.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{GuestId, ReservationId, RoomNumber};

/// Failure of an operation that needs a free room (check-in, book, reserve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// No room with this number is registered.
    #[error("Invalid room number or room already booked.")]
    NoSuchRoom(RoomNumber),

    /// The room exists but a guest is already checked in.
    #[error("Invalid room number or room already booked.")]
    AlreadyBooked(RoomNumber),
}

/// Failure of a check-out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckOutError {
    #[error("Invalid room number or room is not booked.")]
    NoSuchRoom(RoomNumber),

    #[error("Invalid room number or room is not booked.")]
    NotBooked(RoomNumber),
}

/// Failure of a reservation cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CancelError {
    /// Never issued, or already cancelled.
    #[error("Invalid reservation ID.")]
    NoSuchReservation(ReservationId),
}

/// Failure of a guest lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No room currently holds a guest with this id.
    #[error("Guest not found.")]
    GuestNotFound(GuestId),
}

/// All errors that can arise from loading or saving the hotel config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with the file path.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`, so `~/.frontdesk/` cannot be located.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The config file did not exist at the expected path.
    #[error("config not found at {path}")]
    NotFound { path: PathBuf },
}
