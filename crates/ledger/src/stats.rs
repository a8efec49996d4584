//! Pure aggregations over a guest snapshot.
//!
//! Every function here is total: any finite slice, including the empty
//! one, produces a result. Nothing is cached; totals are recomputed from
//! the snapshot on every call.

use crate::guests::{Guest, Relationship, Side};

/// Sum of gift amounts over all guests.
pub fn total_amount(guests: &[Guest]) -> i64 {
    guests.iter().map(|guest| guest.amount).sum()
}

/// Sum of gift amounts for one side of the couple.
pub fn total_for_side(guests: &[Guest], side: Side) -> i64 {
    guests
        .iter()
        .filter(|guest| guest.side == side)
        .map(|guest| guest.amount)
        .sum()
}

/// Gift totals grouped by relationship, in first-seen order.
pub fn totals_by_relationship(guests: &[Guest]) -> Vec<(Relationship, i64)> {
    let mut totals: Vec<(Relationship, i64)> = Vec::new();
    for guest in guests {
        match totals
            .iter_mut()
            .find(|(relationship, _)| *relationship == guest.relationship)
        {
            Some((_, total)) => *total += guest.amount,
            None => totals.push((guest.relationship, guest.amount)),
        }
    }
    totals
}

/// Sum of meal tickets over all guests.
pub fn total_tickets(guests: &[Guest]) -> i64 {
    guests.iter().map(|guest| guest.tickets).sum()
}

pub fn guest_count(guests: &[Guest]) -> usize {
    guests.len()
}

/// Tickets still owed against a venue minimum-guarantee commitment.
///
/// The guarantee is caller-supplied display-side state, never stored with
/// the records. Never negative.
pub fn remaining_against_guarantee(total_tickets: i64, minimum_guarantee: i64) -> i64 {
    (minimum_guarantee - total_tickets).max(0)
}

/// Derived totals for one snapshot, bundled for the statistics endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub guest_count: usize,
    pub total_amount: i64,
    pub groom_total: i64,
    pub bride_total: i64,
    pub total_tickets: i64,
    pub minimum_guarantee: i64,
    pub remaining_against_guarantee: i64,
    pub by_relationship: Vec<(Relationship, i64)>,
}

impl Summary {
    pub fn compute(guests: &[Guest], minimum_guarantee: i64) -> Self {
        let tickets = total_tickets(guests);
        Self {
            guest_count: guest_count(guests),
            total_amount: total_amount(guests),
            groom_total: total_for_side(guests, Side::Groom),
            bride_total: total_for_side(guests, Side::Bride),
            total_tickets: tickets,
            minimum_guarantee,
            remaining_against_guarantee: remaining_against_guarantee(tickets, minimum_guarantee),
            by_relationship: totals_by_relationship(guests),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn guest(amount: i64, side: Side, relationship: Relationship, tickets: i64) -> Guest {
        Guest {
            id: Uuid::new_v4(),
            name: "guest".to_string(),
            amount,
            side,
            relationship,
            tickets,
            memo: None,
            registered_at: Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap(),
            timezone: chrono_tz::Asia::Seoul,
        }
    }

    #[test]
    fn totals_on_empty_snapshot_are_zero() {
        assert_eq!(total_amount(&[]), 0);
        assert_eq!(total_for_side(&[], Side::Groom), 0);
        assert_eq!(total_tickets(&[]), 0);
        assert_eq!(guest_count(&[]), 0);
        assert!(totals_by_relationship(&[]).is_empty());
    }

    #[test]
    fn side_totals_partition_the_total() {
        let guests = vec![
            guest(50_000, Side::Groom, Relationship::Friend, 2),
            guest(100_000, Side::Bride, Relationship::Family, 1),
            guest(30_000, Side::Groom, Relationship::Work, 0),
        ];

        let total = total_amount(&guests);
        assert_eq!(total, 180_000);
        assert_eq!(
            total,
            total_for_side(&guests, Side::Groom) + total_for_side(&guests, Side::Bride)
        );
    }

    #[test]
    fn relationship_totals_keep_first_seen_order() {
        let guests = vec![
            guest(10_000, Side::Groom, Relationship::Work, 0),
            guest(20_000, Side::Bride, Relationship::Friend, 0),
            guest(5_000, Side::Groom, Relationship::Work, 0),
        ];

        assert_eq!(
            totals_by_relationship(&guests),
            vec![
                (Relationship::Work, 15_000),
                (Relationship::Friend, 20_000)
            ]
        );
    }

    #[test]
    fn guarantee_shortfall_clamps_at_zero() {
        assert_eq!(remaining_against_guarantee(3, 10), 7);
        assert_eq!(remaining_against_guarantee(10, 10), 0);
        assert_eq!(remaining_against_guarantee(15, 10), 0);
        assert_eq!(remaining_against_guarantee(0, 0), 0);
    }

    #[test]
    fn summary_matches_the_worked_scenario() {
        let guests = vec![
            guest(50_000, Side::Groom, Relationship::Friend, 2),
            guest(100_000, Side::Bride, Relationship::Family, 1),
        ];

        let summary = Summary::compute(&guests, 100);
        assert_eq!(summary.guest_count, 2);
        assert_eq!(summary.total_amount, 150_000);
        assert_eq!(summary.groom_total, 50_000);
        assert_eq!(summary.bride_total, 100_000);
        assert_eq!(summary.total_tickets, 3);
        assert_eq!(summary.remaining_against_guarantee, 97);
    }
}
