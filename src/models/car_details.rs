use serde::{Deserialize, Serialize};

/// Display record for a single rentable vehicle. All fields are opaque
/// display strings; the core performs no semantic validation on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetails {
    pub image_resource: String,
    pub validity_text: String,
    pub rating_text: String,
    pub name_text: String,
    pub trips_text: String,
    pub location_text: String,
    pub price_text: String,
    /// Free-text category label, matched case-insensitively against
    /// [`Category::name`](super::Category). A label that matches no known
    /// category simply never appears under any non-zero filter.
    #[serde(rename = "type")]
    pub category: String,
}

/// Wire shape of the bundled `carDetails.json` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDetailsResponse {
    #[serde(rename = "carDetails")]
    pub car_details: Vec<CarDetails>,
}
