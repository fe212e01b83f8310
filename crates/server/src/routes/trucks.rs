use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use service::store::TruckStore;
use service::truck::{self, FoodTruck};

use crate::errors::ApiError;

/// Path parameters arrive as raw text so a non-integer id can produce the
/// structured 400 instead of axum's default rejection.
fn parse_locationid(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request("locationid", truck::LOCATION_ID_MSG))
}

#[utoipa::path(
    get, path = "/food-trucks", tag = "food-trucks",
    responses((status = 200, description = "All food trucks in store order"))
)]
pub async fn list(State(store): State<TruckStore>) -> Json<Vec<FoodTruck>> {
    let trucks = store.list().await;
    info!(count = trucks.len(), "list food trucks");
    Json(trucks)
}

#[utoipa::path(
    get, path = "/food-trucks/{locationid}", tag = "food-trucks",
    params(("locationid" = i64, Path, description = "Numeric ID of the food truck")),
    responses(
        (status = 200, description = "The matching food truck"),
        (status = 400, description = "Location ID is not an integer"),
        (status = 404, description = "Food truck not found")
    )
)]
pub async fn get(
    State(store): State<TruckStore>,
    Path(raw): Path<String>,
) -> Result<Json<FoodTruck>, ApiError> {
    let id = parse_locationid(&raw)?;
    match store.find(id).await {
        Some(t) => Ok(Json(t)),
        None => {
            warn!(locationid = id, "food truck not found");
            Err(ApiError::NotFound)
        }
    }
}

#[utoipa::path(
    post, path = "/food-trucks", tag = "food-trucks",
    request_body = crate::openapi::CreateFoodTruckRequest,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Duplicate locationid")
    )
)]
pub async fn create(
    State(store): State<TruckStore>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<FoodTruck>), ApiError> {
    let new_truck = truck::validate_create(&body)?;
    let stored = store.insert(new_truck).await?;
    info!(locationid = stored.locationid, "created food truck");
    Ok((StatusCode::CREATED, Json(stored)))
}

#[utoipa::path(
    put, path = "/food-trucks/{locationid}", tag = "food-trucks",
    params(("locationid" = i64, Path, description = "Numeric ID of the food truck")),
    request_body = crate::openapi::UpdateFoodTruckRequest,
    responses(
        (status = 200, description = "Merged record"),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Food truck not found")
    )
)]
pub async fn update(
    State(store): State<TruckStore>,
    Path(raw): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<FoodTruck>, ApiError> {
    let id = parse_locationid(&raw)?;
    let patch = truck::validate_patch(&body, id)?;
    let merged = store.update_merge(id, &patch).await?;
    info!(locationid = id, "updated food truck");
    Ok(Json(merged))
}

#[utoipa::path(
    delete, path = "/food-trucks/{locationid}", tag = "food-trucks",
    params(("locationid" = i64, Path, description = "Numeric ID of the food truck")),
    responses(
        (status = 200, description = "Deletion confirmation naming the id"),
        (status = 400, description = "Location ID is not an integer"),
        (status = 404, description = "Food truck not found")
    )
)]
pub async fn delete(
    State(store): State<TruckStore>,
    Path(raw): Path<String>,
) -> Result<String, ApiError> {
    let id = parse_locationid(&raw)?;
    store.delete(id).await?;
    info!(locationid = id, "deleted food truck");
    Ok(format!("Food truck with locationid {id} has been deleted"))
}
