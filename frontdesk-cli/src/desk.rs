//! Interactive front-desk menu.
//!
//! [`Desk`] reads line-oriented input, turns each menu selection into a
//! [`HotelRegistry`] call and prints the outcome. Prompts are written without
//! a trailing newline, one answer per line is expected.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;

use frontdesk_core::{Guest, GuestId, HotelRegistry, ReservationId, RoomNumber};

const GOODBYE: &str = "Thank you for using the hotel management system. Goodbye!";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    BookRoom,
    AvailableRooms,
    CheckIn,
    CheckOut,
    MakeReservation,
    CancelReservation,
    GuestInfo,
    Exit,
}

impl Choice {
    pub const ALL: [Choice; 8] = [
        Choice::BookRoom,
        Choice::AvailableRooms,
        Choice::CheckIn,
        Choice::CheckOut,
        Choice::MakeReservation,
        Choice::CancelReservation,
        Choice::GuestInfo,
        Choice::Exit,
    ];

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    fn label(self) -> &'static str {
        match self {
            Choice::BookRoom => "Book a room",
            Choice::AvailableRooms => "Check available rooms",
            Choice::CheckIn => "Check-in",
            Choice::CheckOut => "Check-out",
            Choice::MakeReservation => "Make a reservation",
            Choice::CancelReservation => "Cancel a reservation",
            Choice::GuestInfo => "Display guest information",
            Choice::Exit => "Exit",
        }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| format!("unknown menu choice '{s}'"))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Whether the session keeps going after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Why a selection stopped before reaching the registry.
#[derive(Debug)]
enum Interrupt {
    /// An answer did not parse.
    Invalid,
    /// Input ended mid-selection.
    Closed,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Interrupt::Io(e)
    }
}

/// A menu session over one registry.
pub struct Desk<R, W> {
    registry: HotelRegistry,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Desk<R, W> {
    pub fn new(registry: HotelRegistry, input: R, out: W) -> Self {
        Self {
            registry,
            input,
            out,
        }
    }

    /// Give back the registry and output sink once the session is over.
    pub fn into_parts(self) -> (HotelRegistry, W) {
        (self.registry, self.out)
    }

    /// Serve menu selections until the exit choice or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, ending session");
                return Ok(());
            };
            let flow = match line.parse::<Choice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(reason) => {
                    tracing::debug!(%reason, "rejected menu input");
                    writeln!(self.out, "{}", "Invalid choice. Please try again.".red())?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            format!("Welcome to {}!", self.registry.name()).bold()
        )?;
        for choice in Choice::ALL {
            writeln!(self.out, "{choice}")?;
        }
        write!(self.out, "Enter your choice: ")?;
        self.out.flush()
    }

    fn dispatch(&mut self, choice: Choice) -> io::Result<Flow> {
        tracing::debug!(?choice, "menu selection");
        match self.handle(choice) {
            Ok(flow) => Ok(flow),
            Err(Interrupt::Invalid) => {
                writeln!(self.out, "{}", "Invalid input: expected a number.".red())?;
                Ok(Flow::Continue)
            }
            Err(Interrupt::Closed) => Ok(Flow::Exit),
            Err(Interrupt::Io(e)) => Err(e),
        }
    }

    fn handle(&mut self, choice: Choice) -> Result<Flow, Interrupt> {
        match choice {
            Choice::BookRoom => {
                let number = RoomNumber(self.ask_number("Enter the room number you want to book: ")?);
                match self.registry.book_room(number) {
                    Ok(room) => writeln!(self.out, "Room {} has been booked.", room.number)?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
            }
            Choice::AvailableRooms => {
                writeln!(self.out, "Available Rooms:")?;
                for number in self.registry.list_available_rooms() {
                    writeln!(self.out, "{number}")?;
                }
            }
            Choice::CheckIn => {
                let (number, guest) = self.ask_room_and_guest()?;
                match self.registry.check_in(number, guest) {
                    Ok(guest) => writeln!(
                        self.out,
                        "Guest {} has checked in to room {}",
                        guest.name, number
                    )?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
            }
            Choice::CheckOut => {
                let number = RoomNumber(self.ask_number("Enter the room number: ")?);
                match self.registry.check_out(number) {
                    Ok(guest) => writeln!(
                        self.out,
                        "Guest {} has checked out from Room {}",
                        guest.name, number
                    )?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
            }
            Choice::MakeReservation => {
                let (number, guest) = self.ask_room_and_guest()?;
                match self.registry.make_reservation(number, guest) {
                    Ok(r) => writeln!(
                        self.out,
                        "Reservation made for {} in room {} (reservation ID: {})",
                        r.guest.name, r.room, r.id
                    )?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
            }
            Choice::CancelReservation => {
                let id = ReservationId(self.ask_number("Enter the reservation ID: ")?);
                match self.registry.cancel_reservation(id) {
                    Ok(r) => writeln!(self.out, "Reservation cancelled for {}", r.guest.name)?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
            }
            Choice::GuestInfo => {
                let id = GuestId(self.ask_number("Enter the guest ID: ")?);
                match self.registry.describe_guest(id) {
                    Ok(info) => writeln!(self.out, "{info}")?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
            }
            Choice::Exit => {
                writeln!(self.out, "{GOODBYE}")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn ask_room_and_guest(&mut self) -> Result<(RoomNumber, Guest), Interrupt> {
        let number = RoomNumber(self.ask_number("Enter the room number: ")?);
        let name = self.ask("Enter the guest name: ")?;
        let id = GuestId(self.ask_number("Enter the guest ID: ")?);
        Ok((number, Guest::new(id, name)))
    }

    fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, Interrupt> {
        let answer = self.ask(prompt)?;
        answer.parse().map_err(|_| {
            tracing::debug!(%answer, "rejected non-numeric answer");
            Interrupt::Invalid
        })
    }

    fn ask(&mut self, prompt: &str) -> Result<String, Interrupt> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.read_line()?.ok_or(Interrupt::Closed)
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
