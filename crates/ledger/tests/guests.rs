use std::thread;
use std::time::Duration;

use ledger::{GuestNew, Ledger, LedgerError, Relationship, Side};

fn candidate(name: &str, amount: i64, side: &str, relationship: &str, tickets: i64) -> GuestNew {
    GuestNew {
        name: name.to_string(),
        amount,
        side: side.to_string(),
        relationship: relationship.to_string(),
        tickets: Some(tickets),
        memo: None,
    }
}

#[test]
fn add_guest_mints_id_and_timestamp() {
    let mut ledger = Ledger::new();

    let guest = ledger
        .add_guest(candidate("Kim", 50_000, "groom", "friend", 2), Some("ko"))
        .unwrap();

    assert_eq!(guest.name, "Kim");
    assert_eq!(guest.amount, 50_000);
    assert_eq!(guest.side, Side::Groom);
    assert_eq!(guest.relationship, Relationship::Friend);
    assert_eq!(guest.tickets, 2);
    assert_eq!(guest.timezone, chrono_tz::Asia::Seoul);

    let listed = ledger.guests();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], guest);
    assert_eq!(ledger.guest(guest.id), Some(&guest));
}

#[test]
fn ids_are_unique_across_inserts() {
    let mut ledger = Ledger::new();
    let first = ledger
        .add_guest(candidate("Kim", 50_000, "groom", "friend", 2), None)
        .unwrap();
    let second = ledger
        .add_guest(candidate("Lee", 100_000, "bride", "family", 1), None)
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn tickets_default_to_zero_and_name_is_trimmed() {
    let mut ledger = Ledger::new();
    let guest = ledger
        .add_guest(
            GuestNew {
                name: "  Park  ".to_string(),
                amount: 0,
                side: "bride".to_string(),
                relationship: "other".to_string(),
                tickets: None,
                memo: Some("colleague of the bride's mother".to_string()),
            },
            None,
        )
        .unwrap();

    assert_eq!(guest.name, "Park");
    assert_eq!(guest.tickets, 0);
}

#[test]
fn list_is_newest_first() {
    let mut ledger = Ledger::new();
    for (name, side) in [("first", "groom"), ("second", "bride"), ("third", "groom")] {
        ledger
            .add_guest(candidate(name, 10_000, side, "friend", 0), None)
            .unwrap();
        // Timestamps are assigned by the store; space them out so the
        // ordering assertion is not at the mercy of clock resolution.
        thread::sleep(Duration::from_millis(5));
    }

    let listed = ledger.guests();
    let names: Vec<&str> = listed.iter().map(|guest| guest.name.as_str()).collect();
    assert_eq!(names, vec!["third", "second", "first"]);
    assert!(listed.windows(2).all(|w| w[0].registered_at >= w[1].registered_at));
}

#[test]
fn remove_guest_reports_whether_something_was_removed() {
    let mut ledger = Ledger::new();
    let guest = ledger
        .add_guest(candidate("Kim", 50_000, "groom", "friend", 2), None)
        .unwrap();

    assert!(ledger.remove_guest(guest.id));
    assert_eq!(ledger.guest(guest.id), None);
    assert!(!ledger.remove_guest(guest.id));
    assert!(ledger.is_empty());
}

#[test]
fn validation_collects_every_offending_field() {
    let mut ledger = Ledger::new();

    let err = ledger
        .add_guest(
            GuestNew {
                name: "   ".to_string(),
                amount: -1,
                side: "cousin".to_string(),
                relationship: "enemy".to_string(),
                tickets: Some(-3),
                memo: None,
            },
            None,
        )
        .unwrap_err();

    let LedgerError::Validation(errors) = err;
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["name", "amount", "side", "relationship", "tickets"]
    );
    assert!(ledger.is_empty());
}

#[test]
fn rejected_insert_leaves_the_ledger_unchanged() {
    let mut ledger = Ledger::new();
    ledger
        .add_guest(candidate("Kim", 50_000, "groom", "friend", 2), None)
        .unwrap();

    let err = ledger
        .add_guest(candidate("Lee", -1, "bride", "family", 1), None)
        .unwrap_err();

    let LedgerError::Validation(errors) = err;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "amount");
    assert_eq!(ledger.len(), 1);
}

#[test]
fn locale_hint_drives_the_display_timezone() {
    let mut ledger = Ledger::new();

    let en = ledger
        .add_guest(candidate("Smith", 100, "groom", "friend", 0), Some("en"))
        .unwrap();
    assert_eq!(en.timezone, chrono_tz::America::New_York);

    let unknown = ledger
        .add_guest(candidate("Kim", 100, "groom", "friend", 0), Some("de"))
        .unwrap();
    assert_eq!(unknown.timezone, chrono_tz::Asia::Seoul);
}
