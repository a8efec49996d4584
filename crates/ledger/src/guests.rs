//! Guest record primitives.
//!
//! A `Guest` is one immutable ledger entry: who gave, how much, for which
//! side of the couple, and how many meal tickets were handed out.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{FieldError, LedgerError, ResultLedger};

/// Which half of the couple a guest belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Groom,
    Bride,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Groom => "groom",
            Self::Bride => "bride",
        }
    }

    /// Home-locale display label, used by the export encoders.
    pub fn label(self) -> &'static str {
        match self {
            Self::Groom => "신랑",
            Self::Bride => "신부",
        }
    }
}

impl TryFrom<&str> for Side {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "groom" => Ok(Self::Groom),
            "bride" => Ok(Self::Bride),
            other => Err(FieldError::new(
                "side",
                format!("unknown side: {other}, expected groom or bride"),
            )),
        }
    }
}

/// How the guest relates to the couple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Friend,
    Work,
    Family,
    Other,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Friend => "friend",
            Self::Work => "work",
            Self::Family => "family",
            Self::Other => "other",
        }
    }

    /// Home-locale display label, used by the export encoders.
    pub fn label(self) -> &'static str {
        match self {
            Self::Friend => "친구",
            Self::Work => "직장",
            Self::Family => "가족/친척",
            Self::Other => "지인/기타",
        }
    }
}

impl TryFrom<&str> for Relationship {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "friend" => Ok(Self::Friend),
            "work" => Ok(Self::Work),
            "family" => Ok(Self::Family),
            "other" => Ok(Self::Other),
            unknown => Err(FieldError::new(
                "relationship",
                format!("unknown relationship: {unknown}"),
            )),
        }
    }
}

/// Candidate payload for [`Ledger::add_guest`].
///
/// `side` and `relationship` arrive as raw tokens so validation can report
/// per-field errors instead of failing at deserialization.
///
/// [`Ledger::add_guest`]: crate::Ledger::add_guest
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestNew {
    pub name: String,
    pub amount: i64,
    pub side: String,
    pub relationship: String,
    pub tickets: Option<i64>,
    pub memo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    /// Gift amount in whole currency units.
    pub amount: i64,
    pub side: Side,
    pub relationship: Relationship,
    /// Meal tickets handed out at registration.
    pub tickets: i64,
    pub memo: Option<String>,
    pub registered_at: DateTime<Utc>,
    /// Display timezone derived from the client locale at registration.
    /// Does not affect the stored instant.
    pub timezone: Tz,
}

impl Guest {
    /// Validates a candidate and mints the record.
    ///
    /// Id and timestamp are assigned here, never caller-supplied. All
    /// offending fields are collected before failing; on error nothing is
    /// minted.
    pub(crate) fn new(candidate: GuestNew, locale: Option<&str>) -> ResultLedger<Self> {
        let mut errors = Vec::new();

        let name = candidate.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "name must not be empty"));
        }
        if candidate.amount < 0 {
            errors.push(FieldError::new("amount", "amount must be >= 0"));
        }
        let side = match Side::try_from(candidate.side.as_str()) {
            Ok(side) => Some(side),
            Err(err) => {
                errors.push(err);
                None
            }
        };
        let relationship = match Relationship::try_from(candidate.relationship.as_str()) {
            Ok(relationship) => Some(relationship),
            Err(err) => {
                errors.push(err);
                None
            }
        };
        let tickets = candidate.tickets.unwrap_or(0);
        if tickets < 0 {
            errors.push(FieldError::new("tickets", "tickets must be >= 0"));
        }

        match (side, relationship) {
            (Some(side), Some(relationship)) if errors.is_empty() => Ok(Self {
                id: Uuid::new_v4(),
                name: name.to_string(),
                amount: candidate.amount,
                side,
                relationship,
                tickets,
                memo: candidate.memo,
                registered_at: Utc::now(),
                timezone: timezone_for_locale(locale),
            }),
            _ => Err(LedgerError::Validation(errors)),
        }
    }
}

/// Fixed mapping from a client-declared display language to the timezone
/// stored as a display hint. Unrecognized or absent locales fall back to
/// the ledger's home timezone.
pub fn timezone_for_locale(locale: Option<&str>) -> Tz {
    match locale {
        Some("en") => chrono_tz::America::New_York,
        Some("ja") => chrono_tz::Asia::Tokyo,
        Some("zh") => chrono_tz::Asia::Shanghai,
        _ => chrono_tz::Asia::Seoul,
    }
}
