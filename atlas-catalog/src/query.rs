use serde::Deserialize;

use crate::vehicle::Vehicle;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    YearDesc,
    NameAsc,
}

/// Filter and sort criteria for the vehicle listing.
///
/// Every filter is optional; an empty query returns the whole catalog sorted
/// by ascending price. Matching is case-insensitive throughout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleQuery {
    /// Category name, `all` (or absent) disables the filter.
    pub category: Option<String>,
    /// Inclusive daily-price ceiling in MAD.
    pub max_price: Option<u32>,
    /// Substring searched in name, description and features.
    pub search: Option<String>,
    /// Any-of match against the feature list (fuel labels live there).
    #[serde(default)]
    pub fuel_types: Vec<String>,
    /// All-of match against the feature list.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub sort: SortKey,
}

impl VehicleQuery {
    fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(category) = &self.category {
            if !category.eq_ignore_ascii_case("all")
                && !vehicle.category.to_lowercase().eq(&category.to_lowercase())
            {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if vehicle.price_per_day > max {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !term.is_empty()
                && !vehicle.name.to_lowercase().contains(&term)
                && !vehicle.description.to_lowercase().contains(&term)
                && !vehicle
                    .features
                    .iter()
                    .any(|f| f.to_lowercase().contains(&term))
            {
                return false;
            }
        }

        if !self.fuel_types.is_empty() {
            let any = self.fuel_types.iter().any(|fuel| {
                let fuel = fuel.to_lowercase();
                vehicle
                    .features
                    .iter()
                    .any(|f| f.to_lowercase().contains(&fuel))
            });
            if !any {
                return false;
            }
        }

        if !self.features.is_empty() {
            let all = self.features.iter().all(|wanted| {
                let wanted = wanted.to_lowercase();
                vehicle
                    .features
                    .iter()
                    .any(|f| f.to_lowercase().contains(&wanted))
            });
            if !all {
                return false;
            }
        }

        true
    }

    /// Run the filter pipeline then the comparator over the given records.
    pub fn apply<'a>(&self, records: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        let mut result: Vec<&Vehicle> = records.iter().filter(|v| self.matches(v)).collect();

        match self.sort {
            SortKey::PriceAsc => result.sort_by_key(|v| v.price_per_day),
            SortKey::PriceDesc => result.sort_by(|a, b| b.price_per_day.cmp(&a.price_per_day)),
            SortKey::YearDesc => result.sort_by(|a, b| b.year.cmp(&a.year)),
            SortKey::NameAsc => result.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        result
    }
}
