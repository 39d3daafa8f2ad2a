use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::board::{BoardError, Listing};
use super::candidates::Candidate;
use super::catalog::{Catalog, CatalogSection};
use super::interviews::Interview;
use super::jobs::Job;
use super::messages::Message;
use crate::filter::FilterQuery;

/// Read-only list endpoints over the catalog.
pub fn catalog_router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(list_handler::<Job>))
        .route("/api/v1/jobs/:id", get(record_handler::<Job>))
        .route("/api/v1/candidates", get(list_handler::<Candidate>))
        .route("/api/v1/candidates/:id", get(record_handler::<Candidate>))
        .route("/api/v1/interviews", get(interview_list_handler))
        .route("/api/v1/interviews/:id", get(interview_record_handler))
        .route("/api/v1/messages", get(list_handler::<Message>))
        .route("/api/v1/messages/summary", get(inbox_summary_handler))
        .route("/api/v1/messages/:id", get(record_handler::<Message>))
        .route("/api/v1/reports/hiring", get(hiring_report_handler))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .with_state(catalog)
}

pub(crate) async fn list_handler<R>(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<FilterQuery>,
) -> Response
where
    R: CatalogSection + Send + Sync + 'static,
{
    match R::board(&catalog).snapshot(&query) {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(error) => rejected_query(R::COLLECTION, error),
    }
}

/// Interview rows carry their timing relative to the catalog's reference instant.
pub(crate) async fn interview_list_handler(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<FilterQuery>,
) -> Response {
    let now = catalog.generated_at();
    match catalog.interviews().snapshot(&query) {
        Ok(snapshot) => {
            let rows = snapshot.map_records(|interview| interview.row(now));
            (StatusCode::OK, Json(rows)).into_response()
        }
        Err(error) => rejected_query(Interview::COLLECTION, error),
    }
}

pub(crate) async fn record_handler<R>(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
) -> Response
where
    R: CatalogSection + Send + Sync + 'static,
{
    match R::board(&catalog).get(&id) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => record_not_found(R::COLLECTION, &id),
    }
}

pub(crate) async fn interview_record_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
) -> Response {
    match catalog.interviews().get(&id) {
        Some(interview) => {
            (StatusCode::OK, Json(interview.row(catalog.generated_at()))).into_response()
        }
        None => record_not_found(Interview::COLLECTION, &id),
    }
}

fn rejected_query(collection: &'static str, error: BoardError) -> Response {
    warn!(collection, %error, "rejected list query");
    let payload = json!({ "error": error.to_string() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn record_not_found(collection: &'static str, id: &str) -> Response {
    let payload = json!({ "error": format!("no {collection} record with id '{id}'") });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

pub(crate) async fn inbox_summary_handler(State(catalog): State<Arc<Catalog>>) -> Response {
    (StatusCode::OK, Json(catalog.inbox_summary())).into_response()
}

pub(crate) async fn hiring_report_handler(State(catalog): State<Arc<Catalog>>) -> Response {
    (StatusCode::OK, Json(catalog.hiring_report().view())).into_response()
}

pub(crate) async fn dashboard_handler(State(catalog): State<Arc<Catalog>>) -> Response {
    (StatusCode::OK, Json(catalog.dashboard())).into_response()
}
