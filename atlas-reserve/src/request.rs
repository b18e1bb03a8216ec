use serde::Deserialize;

/// A reservation intent as posted by the booking form.
///
/// Transient: rendered into two email bodies and discarded, nothing is
/// persisted. `vehicle_id` is an opaque display label, never resolved
/// against the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub vehicle_id: Option<String>,
    pub pickup_date: String,
    pub return_date: String,
    pub pickup_location: Option<String>,
    pub pickup_time: Option<String>,
    pub return_time: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Des champs obligatoires sont manquants")]
    MissingRequiredFields,
}

impl ReservationRequest {
    /// Required fields must be present and non-empty after trimming.
    ///
    /// No format validation happens here: email shape, date ordering and
    /// dates in the past all pass. The client form checks some of this but
    /// is bypassable, and the endpoint deliberately mirrors that contract.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.pickup_date,
            &self.return_date,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
