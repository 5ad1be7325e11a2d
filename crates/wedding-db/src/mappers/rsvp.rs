//! RSVP entity <-> model mapper

use wedding_core::entities::RsvpResponse;

use crate::models::RsvpModel;

/// Convert RsvpModel to RsvpResponse entity
impl From<RsvpModel> for RsvpResponse {
    fn from(model: RsvpModel) -> Self {
        RsvpResponse {
            id: model.id,
            guest_name: model.guest_name,
            email: model.email,
            phone: model.phone,
            is_attending: model.is_attending,
            number_of_guests: model.number_of_guests,
            additional_guests: model
                .additional_guests_data
                .map(|json| json.0)
                .unwrap_or_default(),
            wants_aso_ebi: model.wants_aso_ebi.unwrap_or(false),
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}
