//! Statistics API endpoints

use api_types::stats::{RelationshipTotal, Summary};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::guests::map_relationship;
use crate::server::ServerState;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Venue minimum guarantee to compute the ticket shortfall against.
    /// Falls back to the configured default, then 0.
    pub guarantee: Option<i64>,
}

/// Handle requests for ledger statistics
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<SummaryQuery>,
) -> Json<Summary> {
    let guests = state.ledger.read().await.guests();
    let minimum_guarantee = query.guarantee.unwrap_or(state.minimum_guarantee);
    let summary = ledger::stats::Summary::compute(&guests, minimum_guarantee);

    Json(Summary {
        guest_count: summary.guest_count as u64,
        total_amount: summary.total_amount,
        groom_total: summary.groom_total,
        bride_total: summary.bride_total,
        total_tickets: summary.total_tickets,
        minimum_guarantee: summary.minimum_guarantee,
        remaining_against_guarantee: summary.remaining_against_guarantee,
        by_relationship: summary
            .by_relationship
            .into_iter()
            .map(|(relationship, total_amount)| RelationshipTotal {
                relationship: map_relationship(relationship),
                total_amount,
            })
            .collect(),
    })
}
