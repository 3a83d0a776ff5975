use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post, put},
};
use chrono::Local;
use domain::clock::{parse_date, parse_time};
use domain::equipment::NewEquipment;
use domain::maintenance::{MaintenanceOrder, MaintenanceStatus, NewMaintenanceOrder};
use domain::report::ReportMonth;
use domain::reservation::{NewReservation, ReservationCategory};
use domain::safety::{NewSafetyRecord, SafetyRecord};
use domain::{MaintenanceType, RegulationType};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiResult;
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/equipment", get(get_equipment).post(create_equipment))
        .route(
            "/api/equipment/bookable/{category}",
            get(get_bookable_equipment),
        )
        .route(
            "/api/equipment/{id}",
            put(update_equipment).delete(hide_equipment),
        )
        .route("/api/equipment/{id}/active", post(set_equipment_active))
        .route(
            "/api/reservations",
            get(get_reservations).post(create_reservation),
        )
        .route("/api/reservations/overlap", get(check_overlap))
        .route(
            "/api/reservations/{id}",
            put(reschedule_reservation).delete(delete_reservation),
        )
        .route("/api/maintenance", post(create_maintenance_order))
        .route(
            "/api/maintenance/{id}",
            get(get_maintenance_orders)
                .put(update_maintenance_order)
                .delete(delete_maintenance_order),
        )
        .route("/api/maintenance/{id}/status", post(set_maintenance_status))
        .route("/api/safety", post(create_safety_record))
        .route(
            "/api/safety/{id}",
            get(get_safety_records)
                .put(update_safety_record)
                .delete(delete_safety_record),
        )
        .route("/api/reports/usage", get(get_usage_report))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "mode": state.store.mode() }))
}

// --- Equipment ---

#[derive(Deserialize)]
struct EquipmentQuery {
    #[serde(default)]
    include_inactive: bool,
}

async fn get_equipment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EquipmentQuery>,
) -> ApiResult<impl IntoResponse> {
    let items = state.store.get_equipment(query.include_inactive).await?;
    Ok(Json(items))
}

async fn get_bookable_equipment(
    Path(category): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let category: ReservationCategory = category.parse()?;
    let items = state.store.get_bookable_equipment(category).await?;
    Ok(Json(items))
}

async fn create_equipment(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewEquipment>,
) -> ApiResult<impl IntoResponse> {
    let item = state.store.create_equipment(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_equipment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewEquipment>,
) -> ApiResult<impl IntoResponse> {
    let item = draft.into_equipment(id);
    state.store.update_equipment(&item).await?;
    Ok(Json(item))
}

#[derive(Deserialize)]
struct ActiveRequest {
    is_active: bool,
}

async fn set_equipment_active(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActiveRequest>,
) -> ApiResult<impl IntoResponse> {
    let item = state.store.set_equipment_active(&id, req.is_active).await?;
    Ok(Json(item))
}

async fn hide_equipment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    state.require_admin(&headers)?;
    state.store.hide_equipment(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Reservations ---

#[derive(Deserialize)]
struct ReservationQuery {
    date: Option<String>,
    category: Option<String>,
}

/// By date when `date` is given, else by category, else everything.
async fn get_reservations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReservationQuery>,
) -> ApiResult<impl IntoResponse> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<ReservationCategory>)
        .transpose()?;

    let items = match (&query.date, category) {
        (Some(date), category) => {
            let mut items = state.store.get_reservations_by_date(parse_date(date)?).await?;
            if let Some(category) = category {
                items.retain(|r| r.category == category);
            }
            items
        }
        (None, Some(category)) => state.store.get_reservations_by_category(category).await?,
        (None, None) => state.store.get_all_reservations().await?,
    };
    Ok(Json(items))
}

#[derive(Deserialize)]
struct OverlapQuery {
    date: String,
    start: String,
    end: String,
    resource_id: String,
    exclude_id: Option<String>,
}

async fn check_overlap(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OverlapQuery>,
) -> ApiResult<impl IntoResponse> {
    let overlaps = state
        .store
        .check_overlap(
            parse_date(&query.date)?,
            parse_time(&query.start)?,
            parse_time(&query.end)?,
            &query.resource_id,
            query.exclude_id.as_deref(),
        )
        .await?;
    Ok(Json(json!({ "overlaps": overlaps })))
}

async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewReservation>,
) -> ApiResult<impl IntoResponse> {
    let reservation = state.store.create_reservation(draft).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn reschedule_reservation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewReservation>,
) -> ApiResult<impl IntoResponse> {
    let reservation = state
        .store
        .reschedule_reservation(draft.into_reservation(id))
        .await?;
    Ok(Json(reservation))
}

async fn delete_reservation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    state.require_admin(&headers)?;
    state.store.delete_reservation(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Maintenance ---

/// `GET /api/maintenance/{category}` shares its path segment with the id routes.
async fn get_maintenance_orders(
    Path(category): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let kind: MaintenanceType = category.parse()?;
    let orders = state.store.get_maintenance_orders(kind).await?;
    Ok(Json(orders))
}

async fn create_maintenance_order(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewMaintenanceOrder>,
) -> ApiResult<impl IntoResponse> {
    let order = state.store.create_maintenance_order(draft).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_maintenance_order(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut order): Json<MaintenanceOrder>,
) -> ApiResult<impl IntoResponse> {
    order.id = id;
    state.store.update_maintenance_order(&order).await?;
    Ok(Json(order))
}

#[derive(Deserialize)]
struct StatusRequest {
    status: MaintenanceStatus,
}

async fn set_maintenance_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<StatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let today = Local::now().date_naive();
    let order = state
        .store
        .set_maintenance_status(&id, req.status, today)
        .await?;
    Ok(Json(order))
}

async fn delete_maintenance_order(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    state.require_admin(&headers)?;
    state.store.delete_maintenance_order(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Safety ---

/// Records come back with their status re-evaluated against today.
async fn get_safety_records(
    Path(regulation): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let nr_type: RegulationType = regulation.parse()?;
    let today = Local::now().date_naive();
    let records: Vec<SafetyRecord> = state
        .store
        .get_safety_records(nr_type)
        .await?
        .into_iter()
        .map(|mut record| {
            record.status = record.effective_status(today);
            record
        })
        .collect();
    Ok(Json(records))
}

async fn create_safety_record(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewSafetyRecord>,
) -> ApiResult<impl IntoResponse> {
    let record = state.store.create_safety_record(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_safety_record(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut record): Json<SafetyRecord>,
) -> ApiResult<impl IntoResponse> {
    record.id = id;
    state.store.update_safety_record(&record).await?;
    Ok(Json(record))
}

async fn delete_safety_record(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    state.require_admin(&headers)?;
    state.store.delete_safety_record(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Reports ---

#[derive(Deserialize)]
struct UsageQuery {
    month: String,
}

async fn get_usage_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UsageQuery>,
) -> ApiResult<impl IntoResponse> {
    let month: ReportMonth = query.month.parse()?;
    let usage = state.store.usage_report(month).await?;
    Ok(Json(json!({ "month": month.to_string(), "usage": usage })))
}
