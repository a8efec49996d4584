use axum::{
    Router,
    routing::{delete, get},
};
use axum_extra::headers::{Error as AxumError, Header};

use std::sync::Arc;

use ledger::Ledger;
use tokio::sync::RwLock;

use crate::{exports, guests, statistics};

static CLIENT_LANGUAGE_HEADER: axum::http::HeaderName =
    axum::http::HeaderName::from_static("x-client-language");

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<Ledger>>,
    /// Default venue minimum guarantee for the statistics endpoint.
    /// Display-side state, never stored with the records.
    pub minimum_guarantee: i64,
}

impl ServerState {
    pub fn new(ledger: Ledger, minimum_guarantee: i64) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            minimum_guarantee,
        }
    }
}

/// `TypedHeader` for the optional client display language.
///
/// Clients may send "x-client-language" (e.g. `ko`, `en`) so the stored
/// record carries a matching display timezone hint.
#[derive(Debug)]
pub(crate) struct ClientLanguage(pub String);

impl Header for ClientLanguage {
    fn name() -> &'static axum::http::HeaderName {
        &CLIENT_LANGUAGE_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(AxumError::invalid());
        };
        if value.is_empty() {
            return Err(AxumError::invalid());
        }

        Ok(ClientLanguage(value.to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode x-client-language header"),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/guests", get(guests::list).post(guests::create))
        .route("/guests/{id}", delete(guests::remove))
        .route("/guests/export/csv", get(exports::csv))
        .route("/guests/export/xlsx", get(exports::xlsx))
        .route("/guests/stats", get(statistics::summary))
        .with_state(state)
}

pub async fn run(ledger: Ledger, minimum_guarantee: i64) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(ledger, minimum_guarantee, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    ledger: Ledger,
    minimum_guarantee: i64,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState::new(ledger, minimum_guarantee);

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    minimum_guarantee: i64,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, minimum_guarantee, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
