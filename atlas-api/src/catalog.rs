use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use atlas_catalog::{categories, vehicle_by_id, vehicles, Category, SortKey, Vehicle, VehicleQuery};

use crate::error::AppError;
use crate::state::AppState;

/// Query-string shape of the listing endpoint. The richer feature/fuel
/// filters stay client-side; the API exposes the parameters the catalog
/// pages actually send.
#[derive(Debug, Default, Deserialize)]
struct ListParams {
    category: Option<String>,
    max_price: Option<u32>,
    search: Option<String>,
    sort: Option<SortKey>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/vehicles", get(list_vehicles))
        .route("/api/vehicles/{id}", get(get_vehicle))
        .route("/api/categories", get(list_categories))
}

async fn list_vehicles(Query(params): Query<ListParams>) -> Json<Vec<Vehicle>> {
    let query = VehicleQuery {
        category: params.category,
        max_price: params.max_price,
        search: params.search,
        sort: params.sort.unwrap_or_default(),
        ..Default::default()
    };

    Json(query.apply(vehicles()).into_iter().cloned().collect())
}

async fn get_vehicle(Path(id): Path<String>) -> Result<Json<Vehicle>, AppError> {
    vehicle_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Véhicule non trouvé".to_string()))
}

async fn list_categories() -> Json<Vec<Category>> {
    Json(categories().to_vec())
}
