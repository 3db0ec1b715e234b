//! In-memory hotel registry.
//!
//! # State
//!
//! ```text
//! HotelRegistry
//!   rooms         Vec<Room>                            insertion order, scanned linearly
//!   guests        HashMap<GuestId, Guest>              written by check-in, never read back
//!   reservations  BTreeMap<ReservationId, Reservation> active set only
//!   next id       i64                                  starts at 1, never rewinds
//! ```
//!
//! Occupancy and reservations are tracked independently: reserving a room
//! leaves it free, and a free room may collect any number of reservations.
//! Guest lookups go through the rooms, so only checked-in guests are found.

use std::collections::{BTreeMap, HashMap};

use crate::config::HotelConfig;
use crate::error::{BookingError, CancelError, CheckOutError, LookupError};
use crate::types::{Guest, GuestId, GuestInfo, Reservation, ReservationId, Room, RoomNumber};

/// Owner of all rooms, guests and reservations for one hotel.
#[derive(Debug, Clone)]
pub struct HotelRegistry {
    name: String,
    rooms: Vec<Room>,
    guests: HashMap<GuestId, Guest>,
    reservations: BTreeMap<ReservationId, Reservation>,
    next_reservation: i64,
}

impl HotelRegistry {
    /// An empty hotel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            guests: HashMap::new(),
            reservations: BTreeMap::new(),
            next_reservation: 1,
        }
    }

    /// A hotel with the configured name and rooms, all free.
    pub fn from_config(config: &HotelConfig) -> Self {
        let mut registry = Self::new(config.name.clone());
        for &number in &config.rooms {
            registry.add_room(number);
        }
        registry
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Append a free room. Duplicates are not rejected; lookups see the first.
    pub fn add_room(&mut self, number: RoomNumber) {
        tracing::debug!(room = %number, "room added");
        self.rooms.push(Room::new(number));
    }

    pub fn find_room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    /// Numbers of all rooms without a checked-in guest, in insertion order.
    pub fn list_available_rooms(&self) -> Vec<RoomNumber> {
        self.rooms
            .iter()
            .filter(|r| r.is_free())
            .map(|r| r.number)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Occupancy
    // -----------------------------------------------------------------------

    /// Check `guest` in to a free room and record them in the guest directory.
    pub fn check_in(&mut self, number: RoomNumber, mut guest: Guest) -> Result<&Guest, BookingError> {
        let idx = self.free_room_index(number)?;
        guest.room = Some(number);
        tracing::debug!(room = %number, guest = %guest.id, "guest checked in");
        self.guests.insert(guest.id, guest.clone());

        let room = &mut self.rooms[idx];
        room.booked = true;
        let guest: &Guest = room.guest.insert(guest);
        Ok(guest)
    }

    /// Mark a free room booked under an anonymous guest.
    ///
    /// The walk-in guest is not recorded in the guest directory.
    pub fn book_room(&mut self, number: RoomNumber) -> Result<&Room, BookingError> {
        let idx = self.free_room_index(number)?;
        let mut guest = Guest::placeholder();
        guest.room = Some(number);
        tracing::debug!(room = %number, "room booked for walk-in");

        let room = &mut self.rooms[idx];
        room.guest = Some(guest);
        room.booked = true;
        Ok(&*room)
    }

    /// Free an occupied room and return the departing guest.
    pub fn check_out(&mut self, number: RoomNumber) -> Result<Guest, CheckOutError> {
        let idx = self
            .room_index(number)
            .ok_or(CheckOutError::NoSuchRoom(number))?;

        let room = &mut self.rooms[idx];
        let mut guest = match room.guest.take() {
            Some(guest) if room.booked => guest,
            other => {
                room.guest = other;
                return Err(CheckOutError::NotBooked(number));
            }
        };
        room.booked = false;
        guest.room = None;

        if let Some(entry) = self.guests.get_mut(&guest.id) {
            if entry.room == Some(number) {
                entry.room = None;
            }
        }
        tracing::debug!(room = %number, guest = %guest.id, "guest checked out");
        Ok(guest)
    }

    // -----------------------------------------------------------------------
    // Reservations
    // -----------------------------------------------------------------------

    /// Reserve a room that has no checked-in guest.
    ///
    /// Existing reservations on the room are not considered, and the room
    /// stays free.
    pub fn make_reservation(
        &mut self,
        number: RoomNumber,
        guest: Guest,
    ) -> Result<&Reservation, BookingError> {
        self.free_room_index(number)?;

        let id = ReservationId(self.next_reservation);
        self.next_reservation += 1;
        tracing::debug!(reservation = %id, room = %number, guest = %guest.id, "reservation made");

        let reservation: &Reservation = self.reservations.entry(id).or_insert(Reservation {
            id,
            guest,
            room: number,
        });
        Ok(reservation)
    }

    /// Remove an active reservation and return it.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<Reservation, CancelError> {
        let reservation = self
            .reservations
            .remove(&id)
            .ok_or(CancelError::NoSuchReservation(id))?;
        tracing::debug!(reservation = %id, room = %reservation.room, "reservation cancelled");
        Ok(reservation)
    }

    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.get(&id)
    }

    /// Active reservations in ascending id order.
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations.values()
    }

    // -----------------------------------------------------------------------
    // Guests
    // -----------------------------------------------------------------------

    /// First checked-in guest with this id, scanning rooms in insertion order.
    pub fn find_guest_by_id(&self, id: GuestId) -> Option<&Guest> {
        self.rooms
            .iter()
            .filter_map(|r| r.guest.as_ref())
            .find(|g| g.id == id)
    }

    pub fn describe_guest(&self, id: GuestId) -> Result<GuestInfo, LookupError> {
        let guest = self
            .find_guest_by_id(id)
            .ok_or(LookupError::GuestNotFound(id))?;
        Ok(GuestInfo {
            id: guest.id,
            name: guest.name.clone(),
            room: guest.room,
        })
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn room_index(&self, number: RoomNumber) -> Option<usize> {
        self.rooms.iter().position(|r| r.number == number)
    }

    fn free_room_index(&self, number: RoomNumber) -> Result<usize, BookingError> {
        let idx = self
            .room_index(number)
            .ok_or(BookingError::NoSuchRoom(number))?;
        if self.rooms[idx].booked {
            return Err(BookingError::AlreadyBooked(number));
        }
        Ok(idx)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
