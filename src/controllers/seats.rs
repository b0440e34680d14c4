use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::{not_blank, ValidJson},
    models::{NewSeat, Seat},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/assign", post(assign_seat))
        .route("/add_seat", post(add_seat))
}

/* ---------- SEATS ---------- */

// GET /seats
async fn get_seats(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Seat>>> {
    let seats = Seat::list(&state.db).await?;
    Ok(Json(seats))
}

// POST /assign
#[derive(Debug, Deserialize, Validate)]
struct AssignRequest {
    pub id: i64,
}

async fn assign_seat(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<AssignRequest>,
) -> AppResult<StatusCode> {
    let affected = Seat::assign(&state.db, req.id).await?;
    if affected == 0 {
        // несуществующее место - не ошибка
        tracing::debug!("assign: no seat with id {}", req.id);
    }
    Ok(StatusCode::NO_CONTENT)
}

// POST /add_seat
#[derive(Debug, Deserialize, Validate)]
struct AddSeatRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(rename = "employeeId")]
    #[validate(custom(function = "not_blank"))]
    pub employee_id: String,
    #[validate(custom(function = "not_blank"))]
    pub department: String,
    #[validate(custom(function = "not_blank"))]
    pub preference: String,
}

impl From<AddSeatRequest> for NewSeat {
    fn from(req: AddSeatRequest) -> Self {
        NewSeat {
            name: req.name.trim().to_string(),
            employee_id: req.employee_id.trim().to_string(),
            department: req.department.trim().to_string(),
            preference: req.preference.trim().to_string(),
        }
    }
}

async fn add_seat(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<AddSeatRequest>,
) -> AppResult<StatusCode> {
    let seat = NewSeat::from(req);
    let id = Seat::create(&state.db, &seat).await?;
    tracing::info!(seat_id = id, employee_id = %seat.employee_id, "New seat added");
    Ok(StatusCode::CREATED)
}
