use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::non_negative_amount;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueDto {
    /// Defaults to the admin creating the venue
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(length(min = 1, max = 80))]
    pub city: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "at least one sport is required"))]
    pub sport_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityDto {
    pub sport_id: Uuid,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(custom = "non_negative_amount")]
    pub price_per_hour: Decimal,
}

/// Partial update; omitted fields keep their value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacilityDto {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(custom = "non_negative_amount")]
    pub price_per_hour: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl UpdateFacilityDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price_per_hour.is_none() && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn venue_requires_sports() {
        let dto: CreateVenueDto = serde_json::from_value(json!({
            "name": "North Court",
            "address": "1 Main St",
            "city": "Lisbon",
            "sportIds": []
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sport_ids"));
    }

    #[test]
    fn facility_update_validates_only_present_fields() {
        let dto: UpdateFacilityDto = serde_json::from_value(json!({ "isActive": false })).unwrap();
        assert!(dto.validate().is_ok());
        assert!(!dto.is_empty());

        let dto: UpdateFacilityDto = serde_json::from_value(json!({ "pricePerHour": -1 })).unwrap();
        assert!(dto.validate().is_err());

        assert!(UpdateFacilityDto::default().is_empty());
    }
}
