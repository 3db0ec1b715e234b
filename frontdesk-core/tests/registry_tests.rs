//! Occupancy, reservation and guest-lookup behaviour of `HotelRegistry`.

use frontdesk_core::{
    BookingError, CancelError, CheckOutError, Guest, GuestId, HotelConfig, HotelRegistry,
    LookupError, ReservationId, RoomNumber,
};
use rstest::{fixture, rstest};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn room(n: i64) -> RoomNumber {
    RoomNumber(n)
}

fn numbers(rooms: &[RoomNumber]) -> Vec<i64> {
    rooms.iter().map(|r| r.0).collect()
}

#[fixture]
fn hotel() -> HotelRegistry {
    HotelRegistry::from_config(&HotelConfig::default())
}

// ---------------------------------------------------------------------------
// 1. Availability
// ---------------------------------------------------------------------------

#[rstest]
fn all_rooms_available_initially(hotel: HotelRegistry) {
    assert_eq!(numbers(&hotel.list_available_rooms()), vec![101, 102, 103, 201, 202]);
}

#[rstest]
#[case(&[], &[101, 102, 103, 201, 202])]
#[case(&[103], &[101, 102, 201, 202])]
#[case(&[202, 101], &[102, 103, 201])]
#[case(&[101, 102, 103, 201, 202], &[])]
fn available_rooms_excludes_occupied_in_insertion_order(
    mut hotel: HotelRegistry,
    #[case] occupied: &[i64],
    #[case] expected: &[i64],
) {
    for (i, &n) in occupied.iter().enumerate() {
        hotel
            .check_in(room(n), Guest::new(GuestId(i as i64), format!("guest-{i}")))
            .expect("check in");
    }
    assert_eq!(numbers(&hotel.list_available_rooms()), expected);
}

#[test]
fn duplicate_rooms_resolve_to_first_match() {
    let mut h = HotelRegistry::new("Dupes");
    h.add_room(room(5));
    h.add_room(room(5));
    h.check_in(room(5), Guest::new(GuestId(1), "A")).expect("check in");

    assert!(h.find_room(room(5)).expect("room").booked);
    // The second copy is still free and listed.
    assert_eq!(numbers(&h.list_available_rooms()), vec![5]);
    // And the scan keeps hitting the occupied first copy.
    assert_eq!(
        h.check_in(room(5), Guest::new(GuestId(2), "B")).unwrap_err(),
        BookingError::AlreadyBooked(room(5))
    );
}

// ---------------------------------------------------------------------------
// 2. Check-in / check-out
// ---------------------------------------------------------------------------

#[rstest]
fn check_in_marks_room_and_sets_back_reference(mut hotel: HotelRegistry) {
    let guest = hotel.check_in(room(101), Guest::new(GuestId(42), "Ada")).expect("check in");
    assert_eq!(guest.name, "Ada");
    assert_eq!(guest.room, Some(room(101)));

    let r = hotel.find_room(room(101)).expect("room");
    assert!(r.booked);
    assert_eq!(r.guest.as_ref().map(|g| g.id), Some(GuestId(42)));
}

#[rstest]
fn second_check_in_on_same_room_fails(mut hotel: HotelRegistry) {
    hotel.check_in(room(101), Guest::new(GuestId(1), "A")).expect("first");
    let err = hotel.check_in(room(101), Guest::new(GuestId(2), "B")).unwrap_err();
    assert_eq!(err, BookingError::AlreadyBooked(room(101)));
    assert_eq!(err.to_string(), "Invalid room number or room already booked.");
    // Original occupant is kept.
    let r = hotel.find_room(room(101)).expect("room");
    assert_eq!(r.guest.as_ref().map(|g| g.name.as_str()), Some("A"));
}

#[rstest]
fn check_in_to_unknown_room_fails_with_same_message(mut hotel: HotelRegistry) {
    let err = hotel.check_in(room(999), Guest::new(GuestId(1), "A")).unwrap_err();
    assert_eq!(err, BookingError::NoSuchRoom(room(999)));
    assert_eq!(err.to_string(), "Invalid room number or room already booked.");
}

#[rstest]
fn check_out_frees_room_and_clears_back_reference(mut hotel: HotelRegistry) {
    hotel.check_in(room(102), Guest::new(GuestId(9), "Grace")).expect("check in");
    let departed = hotel.check_out(room(102)).expect("check out");

    assert_eq!(departed.name, "Grace");
    assert_eq!(departed.room, None);
    let r = hotel.find_room(room(102)).expect("room");
    assert!(!r.booked);
    assert!(r.guest.is_none());
}

#[rstest]
#[case(102, CheckOutError::NotBooked(RoomNumber(102)))]
#[case(999, CheckOutError::NoSuchRoom(RoomNumber(999)))]
#[case(-5, CheckOutError::NoSuchRoom(RoomNumber(-5)))]
fn check_out_failures_share_message(
    mut hotel: HotelRegistry,
    #[case] n: i64,
    #[case] expected: CheckOutError,
) {
    let err = hotel.check_out(room(n)).unwrap_err();
    assert_eq!(err, expected);
    assert_eq!(err.to_string(), "Invalid room number or room is not booked.");
}

#[rstest]
fn check_out_twice_fails(mut hotel: HotelRegistry) {
    hotel.check_in(room(101), Guest::new(GuestId(1), "A")).expect("check in");
    hotel.check_out(room(101)).expect("first check out");
    assert_eq!(
        hotel.check_out(room(101)).unwrap_err(),
        CheckOutError::NotBooked(room(101))
    );
}

#[rstest]
fn booked_room_can_be_checked_out(mut hotel: HotelRegistry) {
    hotel.book_room(room(201)).expect("book");
    assert!(!hotel.list_available_rooms().contains(&room(201)));
    assert!(hotel.check_in(room(201), Guest::new(GuestId(1), "A")).is_err());

    let departed = hotel.check_out(room(201)).expect("check out");
    assert_eq!(departed.id, GuestId::PLACEHOLDER);
    assert!(departed.name.is_empty());
}

// ---------------------------------------------------------------------------
// 3. Reservations
// ---------------------------------------------------------------------------

#[rstest]
fn reservation_ids_are_never_reused(mut hotel: HotelRegistry) {
    let ids: Vec<ReservationId> = (0..3)
        .map(|i| {
            hotel
                .make_reservation(room(101), Guest::new(GuestId(i), format!("g{i}")))
                .expect("reserve")
                .id
        })
        .collect();
    assert_eq!(ids, vec![ReservationId(1), ReservationId(2), ReservationId(3)]);

    hotel.cancel_reservation(ReservationId(2)).expect("cancel");
    let active: Vec<ReservationId> = hotel.reservations().map(|r| r.id).collect();
    assert_eq!(active, vec![ReservationId(1), ReservationId(3)]);

    let next = hotel.make_reservation(room(102), Guest::new(GuestId(9), "late")).expect("reserve");
    assert_eq!(next.id, ReservationId(4));
}

#[rstest]
fn reservations_never_change_occupancy(mut hotel: HotelRegistry) {
    hotel.make_reservation(room(103), Guest::new(GuestId(1), "A")).expect("first");
    hotel.make_reservation(room(103), Guest::new(GuestId(2), "B")).expect("second");

    assert!(hotel.find_room(room(103)).expect("room").is_free());
    assert!(hotel.list_available_rooms().contains(&room(103)));
    assert_eq!(hotel.reservations().filter(|r| r.room == room(103)).count(), 2);
}

#[rstest]
fn reserving_an_occupied_room_fails(mut hotel: HotelRegistry) {
    hotel.check_in(room(101), Guest::new(GuestId(1), "A")).expect("check in");
    let err = hotel.make_reservation(room(101), Guest::new(GuestId(2), "B")).unwrap_err();
    assert_eq!(err, BookingError::AlreadyBooked(room(101)));
    assert_eq!(hotel.reservations().count(), 0);
}

#[rstest]
fn reserving_an_unknown_room_fails(mut hotel: HotelRegistry) {
    let err = hotel.make_reservation(room(404), Guest::new(GuestId(2), "B")).unwrap_err();
    assert_eq!(err, BookingError::NoSuchRoom(room(404)));
}

#[rstest]
fn cancel_returns_reservation_and_second_cancel_fails(mut hotel: HotelRegistry) {
    let id = hotel
        .make_reservation(room(201), Guest::new(GuestId(5), "Linus"))
        .expect("reserve")
        .id;

    let cancelled = hotel.cancel_reservation(id).expect("cancel");
    assert_eq!(cancelled.guest.name, "Linus");
    assert_eq!(cancelled.room, room(201));
    assert!(hotel.reservation(id).is_none());

    let err = hotel.cancel_reservation(id).unwrap_err();
    assert_eq!(err, CancelError::NoSuchReservation(id));
    assert_eq!(err.to_string(), "Invalid reservation ID.");
}

#[rstest]
fn negative_reservation_id_is_unknown(mut hotel: HotelRegistry) {
    hotel
        .make_reservation(room(101), Guest::new(GuestId(5), "Linus"))
        .expect("reserve");
    let err = hotel.cancel_reservation(ReservationId(-1)).unwrap_err();
    assert_eq!(err, CancelError::NoSuchReservation(ReservationId(-1)));
    assert_eq!(hotel.reservations().count(), 1);
}

// ---------------------------------------------------------------------------
// 4. Guest lookup
// ---------------------------------------------------------------------------

#[rstest]
fn checked_in_guest_is_found_and_described(mut hotel: HotelRegistry) {
    hotel.check_in(room(202), Guest::new(GuestId(77), "Barbara")).expect("check in");

    let guest = hotel.find_guest_by_id(GuestId(77)).expect("found");
    assert_eq!(guest.name, "Barbara");

    let info = hotel.describe_guest(GuestId(77)).expect("describe");
    assert_eq!(info.room, Some(room(202)));
    assert!(info.to_string().contains("Room Number: 202"));
}

#[rstest]
fn guest_with_only_a_reservation_is_not_found(mut hotel: HotelRegistry) {
    hotel.make_reservation(room(101), Guest::new(GuestId(3), "Res Only")).expect("reserve");
    assert!(hotel.find_guest_by_id(GuestId(3)).is_none());
    let err = hotel.describe_guest(GuestId(3)).unwrap_err();
    assert_eq!(err, LookupError::GuestNotFound(GuestId(3)));
    assert_eq!(err.to_string(), "Guest not found.");
}

#[rstest]
fn checked_out_guest_is_not_found(mut hotel: HotelRegistry) {
    hotel.check_in(room(101), Guest::new(GuestId(4), "Gone")).expect("check in");
    hotel.check_out(room(101)).expect("check out");
    assert!(hotel.find_guest_by_id(GuestId(4)).is_none());
}

#[rstest]
fn walk_in_guest_is_found_by_placeholder_id(mut hotel: HotelRegistry) {
    hotel.book_room(room(103)).expect("book");
    let info = hotel.describe_guest(GuestId::PLACEHOLDER).expect("describe");
    assert_eq!(info.name, "");
    assert_eq!(info.room, Some(room(103)));
}

// ---------------------------------------------------------------------------
// 5. End-to-end
// ---------------------------------------------------------------------------

#[test]
fn front_desk_scenario() {
    let mut h = HotelRegistry::new("Scenario");
    h.add_room(room(101));
    h.add_room(room(102));

    h.check_in(room(101), Guest::new(GuestId(1), "Guest A")).expect("check in A");
    assert_eq!(numbers(&h.list_available_rooms()), vec![102]);

    let id = h
        .make_reservation(room(102), Guest::new(GuestId(2), "Guest B"))
        .expect("reserve B")
        .id;
    assert_eq!(id, ReservationId(1));
    assert_eq!(numbers(&h.list_available_rooms()), vec![102]);

    h.check_out(room(101)).expect("check out A");
    assert_eq!(numbers(&h.list_available_rooms()), vec![101, 102]);

    h.cancel_reservation(ReservationId(1)).expect("cancel");
    assert!(matches!(
        h.cancel_reservation(ReservationId(1)),
        Err(CancelError::NoSuchReservation(_))
    ));
}
