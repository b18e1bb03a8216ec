use chrono::{DateTime, Datelike, Locale, NaiveDate, Utc};
use serde::Deserialize;

use crate::request::ReservationRequest;

pub const CUSTOMER_SUBJECT: &str = "Confirmation de votre réservation de véhicule";
pub const ADMIN_SUBJECT: &str = "Nouvelle réservation de véhicule";

const UNSPECIFIED: &str = "Non spécifié";
const UNSPECIFIED_TIME: &str = "heure non spécifiée";
const UNSPECIFIED_DATE: &str = "Date non spécifiée";
const NO_MESSAGE: &str = "Aucun message";

/// Public contact details rendered into the customer email footer.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
}

/// Render an ISO date as `dd month-name yyyy` in French.
///
/// Empty input becomes a placeholder; an unparseable string is passed
/// through unchanged rather than failing the request.
pub fn format_date_fr(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return UNSPECIFIED_DATE.to_string();
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format_localized("%d %B %Y", Locale::fr_FR).to_string(),
        None => input.to_string(),
    }
}

fn or_unspecified(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNSPECIFIED,
    }
}

fn or_unspecified_time(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNSPECIFIED_TIME,
    }
}

/// Customer-facing confirmation body.
pub fn customer_email(req: &ReservationRequest, reference: &str, contact: &ContactDetails) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 10px;">
  <div style="text-align: center; margin-bottom: 20px;">
    <h1 style="color: #333; margin-bottom: 5px;">Confirmation de Réservation</h1>
    <p style="color: #666; font-size: 16px;">Merci pour votre réservation!</p>
  </div>

  <div style="background-color: #f9f2e2; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
    <p style="margin: 0; font-size: 15px;">Cher(e) <strong>{full_name}</strong>,</p>
    <p style="margin-top: 10px; font-size: 15px;">Nous vous confirmons la réception de votre demande de réservation. Un membre de notre équipe vous contactera dans les plus brefs délais pour finaliser les détails.</p>
  </div>

  <div style="background-color: #f5f5f5; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
    <h2 style="color: #333; font-size: 18px; margin-top: 0; margin-bottom: 15px; border-bottom: 1px solid #ddd; padding-bottom: 10px;">Détails de votre réservation</h2>

    <p style="margin: 8px 0;"><strong>Référence de réservation:</strong> {reference}</p>
    <p style="margin: 8px 0;"><strong>Véhicule:</strong> {vehicle}</p>
    <p style="margin: 8px 0;"><strong>Date de prise en charge:</strong> {pickup_date} à {pickup_time}</p>
    <p style="margin: 8px 0;"><strong>Date de retour:</strong> {return_date} à {return_time}</p>
    <p style="margin: 8px 0;"><strong>Lieu de prise en charge:</strong> {pickup_location}</p>
  </div>

  <div style="margin-bottom: 20px;">
    <h3 style="color: #333; font-size: 16px;">Prochaines étapes:</h3>
    <ol style="color: #555; padding-left: 20px; line-height: 1.5;">
      <li>Un membre de notre équipe vous contactera pour confirmer la disponibilité et les détails</li>
      <li>Vous recevrez une confirmation finale par email avec le contrat de location</li>
      <li>Préparez votre permis de conduire et une pièce d'identité pour le jour de la prise en charge</li>
    </ol>
  </div>

  <div style="background-color: #f5f5f5; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
    <h3 style="color: #333; font-size: 16px; margin-top: 0;">Questions ou modifications?</h3>
    <p style="color: #555; margin: 8px 0;">Pour toute question ou modification de votre réservation, n'hésitez pas à nous contacter:</p>
    <p style="margin: 8px 0;"><strong>Téléphone:</strong> {contact_phone}</p>
    <p style="margin: 8px 0;"><strong>Email:</strong> {contact_email}</p>
  </div>

  <div style="text-align: center; margin-top: 30px; padding-top: 20px; border-top: 1px solid #e0e0e0;">
    <p style="color: #888; font-size: 14px;">Luxury Car Rental Morocco</p>
    <p style="color: #888; font-size: 12px; margin: 5px 0;">123 Avenue Mohammed V, Marrakech, Maroc</p>
    <p style="color: #888; font-size: 12px;">© {year} Luxury Car Rental Morocco. Tous droits réservés.</p>
  </div>
</div>"#,
        full_name = req.full_name(),
        reference = reference,
        vehicle = or_unspecified(req.vehicle_id.as_deref()),
        pickup_date = format_date_fr(&req.pickup_date),
        pickup_time = or_unspecified_time(req.pickup_time.as_deref()),
        return_date = format_date_fr(&req.return_date),
        return_time = or_unspecified_time(req.return_time.as_deref()),
        pickup_location = or_unspecified(req.pickup_location.as_deref()),
        contact_phone = contact.phone,
        contact_email = contact.email,
        year = Utc::now().year(),
    )
}

/// Admin-facing notification body.
pub fn admin_email(req: &ReservationRequest, reference: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0;">
  <h1 style="color: #333;">Nouvelle réservation</h1>
  <p style="color: #555;">Un client a effectué une nouvelle réservation.</p>

  <h2 style="color: #333; margin-top: 20px;">Détails du client</h2>
  <ul style="color: #555;">
    <li><strong>Nom:</strong> {full_name}</li>
    <li><strong>Email:</strong> {email}</li>
    <li><strong>Téléphone:</strong> {phone}</li>
  </ul>

  <h2 style="color: #333; margin-top: 20px;">Détails de la réservation</h2>
  <ul style="color: #555;">
    <li><strong>Référence:</strong> {reference}</li>
    <li><strong>Véhicule:</strong> {vehicle}</li>
    <li><strong>Date de prise en charge:</strong> {pickup_date} à {pickup_time}</li>
    <li><strong>Date de retour:</strong> {return_date} à {return_time}</li>
    <li><strong>Lieu de prise en charge:</strong> {pickup_location}</li>
  </ul>

  <h2 style="color: #333; margin-top: 20px;">Message du client</h2>
  <p style="color: #555; padding: 10px; background-color: #f9f9f9; border-radius: 4px;">{message}</p>

  <p style="color: #555; margin-top: 30px;">Connectez-vous au tableau de bord administrateur pour plus de détails et pour confirmer cette réservation.</p>
</div>"#,
        full_name = req.full_name(),
        email = req.email,
        phone = or_unspecified(req.phone.as_deref()),
        reference = reference,
        vehicle = or_unspecified(req.vehicle_id.as_deref()),
        pickup_date = format_date_fr(&req.pickup_date),
        pickup_time = or_unspecified_time(req.pickup_time.as_deref()),
        return_date = format_date_fr(&req.return_date),
        return_time = or_unspecified_time(req.return_time.as_deref()),
        pickup_location = or_unspecified(req.pickup_location.as_deref()),
        message = match &req.message {
            Some(m) if !m.trim().is_empty() => m.as_str(),
            _ => NO_MESSAGE,
        },
    )
}
