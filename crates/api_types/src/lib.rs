use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod guest {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Side {
        Groom,
        Bride,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Relationship {
        Friend,
        Work,
        Family,
        Other,
    }

    /// Request body for registering a guest.
    ///
    /// `side` and `relationship` are raw tokens (`groom`, `friend`, ...)
    /// so the server can answer with per-field validation errors instead
    /// of a deserialization rejection.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct GuestNew {
        pub name: String,
        pub amount: i64,
        pub side: String,
        pub relationship: String,
        pub tickets: Option<i64>,
        pub memo: Option<String>,
    }

    /// One ledger entry as returned by the server.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct GuestView {
        pub id: Uuid,
        pub name: String,
        pub amount: i64,
        pub side: Side,
        pub relationship: Relationship,
        pub tickets: i64,
        pub memo: Option<String>,
        /// RFC3339 timestamp of the registration instant (UTC).
        pub registered_at: DateTime<Utc>,
        /// IANA timezone name used by clients for display only.
        pub timezone: String,
    }
}

pub mod stats {
    use super::guest::Relationship;
    use super::*;

    /// Gift total for one relationship group.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RelationshipTotal {
        pub relationship: Relationship,
        pub total_amount: i64,
    }

    /// Derived totals for the current ledger snapshot.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Summary {
        pub guest_count: u64,
        pub total_amount: i64,
        pub groom_total: i64,
        pub bride_total: i64,
        pub total_tickets: i64,
        pub minimum_guarantee: i64,
        pub remaining_against_guarantee: i64,
        /// First-seen order of the snapshot, matching chart rendering.
        pub by_relationship: Vec<RelationshipTotal>,
    }
}

pub mod error {
    use super::*;

    /// One rejected field with the reason.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FieldErrorView {
        pub field: String,
        pub message: String,
    }

    /// Error payload returned by every failing route.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub errors: Option<Vec<FieldErrorView>>,
    }
}
