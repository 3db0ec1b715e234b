//! Front desk core library: hotel registry, domain types, config, errors.
//!
//! Public API surface:
//! - [`types`]: newtypes and domain structs
//! - [`error`]: per-operation error enums and [`ConfigError`]
//! - [`registry`]: [`HotelRegistry`], the in-memory occupancy/reservation state machine
//! - [`config`]: YAML hotel configuration with defaults

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::HotelConfig;
pub use error::{BookingError, CancelError, CheckOutError, ConfigError, LookupError};
pub use registry::HotelRegistry;
pub use types::{Guest, GuestId, GuestInfo, Reservation, ReservationId, Room, RoomNumber};
