//! Guest API endpoints

use api_types::guest::{GuestNew, GuestView, Relationship as ApiRelationship, Side as ApiSide};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::TypedHeader;
use uuid::Uuid;

use crate::{
    ServerError,
    server::{ClientLanguage, ServerState},
};

fn map_side(side: ledger::Side) -> ApiSide {
    match side {
        ledger::Side::Groom => ApiSide::Groom,
        ledger::Side::Bride => ApiSide::Bride,
    }
}

pub(crate) fn map_relationship(relationship: ledger::Relationship) -> ApiRelationship {
    match relationship {
        ledger::Relationship::Friend => ApiRelationship::Friend,
        ledger::Relationship::Work => ApiRelationship::Work,
        ledger::Relationship::Family => ApiRelationship::Family,
        ledger::Relationship::Other => ApiRelationship::Other,
    }
}

fn map_guest(guest: &ledger::Guest) -> GuestView {
    GuestView {
        id: guest.id,
        name: guest.name.clone(),
        amount: guest.amount,
        side: map_side(guest.side),
        relationship: map_relationship(guest.relationship),
        tickets: guest.tickets,
        memo: guest.memo.clone(),
        registered_at: guest.registered_at,
        timezone: guest.timezone.name().to_string(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<GuestView>> {
    let ledger = state.ledger.read().await;
    let guests = ledger.guests().iter().map(map_guest).collect();

    Json(guests)
}

pub async fn create(
    State(state): State<ServerState>,
    language: Option<TypedHeader<ClientLanguage>>,
    Json(payload): Json<GuestNew>,
) -> Result<(StatusCode, Json<GuestView>), ServerError> {
    let locale = language
        .as_ref()
        .map(|TypedHeader(ClientLanguage(lang))| lang.as_str());

    let mut ledger = state.ledger.write().await;
    let guest = ledger.add_guest(
        ledger::GuestNew {
            name: payload.name,
            amount: payload.amount,
            side: payload.side,
            relationship: payload.relationship,
            tickets: payload.tickets,
            memo: payload.memo,
        },
        locale,
    )?;

    Ok((StatusCode::CREATED, Json(map_guest(&guest))))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    // A malformed id cannot name a live record, so it is a plain 404.
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(ServerError::NotFound("guest not found".to_string()));
    };

    if state.ledger.write().await.remove_guest(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound("guest not found".to_string()))
    }
}
