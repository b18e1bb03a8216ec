use serde::{Deserialize, Serialize};

/// A rental vehicle as presented in the catalog.
///
/// Records are defined once at process start and never mutated; `id` is the
/// slug used in URLs and referenced (unvalidated) by reservation payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub category: String,
    /// Daily rate in MAD.
    pub price_per_day: u32,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
}

/// A fixed catalog category. The `category` field on [`Vehicle`] is matched
/// against `name` case-insensitively, not against `id`; nothing enforces the
/// cross-reference at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}
