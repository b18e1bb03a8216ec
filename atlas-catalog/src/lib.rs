pub mod data;
pub mod query;
pub mod vehicle;

pub use data::{categories, vehicle_by_id, vehicles};
pub use query::{SortKey, VehicleQuery};
pub use vehicle::{Category, Vehicle};
