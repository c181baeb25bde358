use crate::constants;
use crate::models::{CarDetailsResponse, Catalog, CategoryResponse};

/// Decodes the two bundled JSON payloads.
///
/// A missing, unreadable or malformed payload decodes to an empty response —
/// the degrade-to-empty contract the rest of the core depends on. Failures
/// are logged, never raised to the caller; the worst case is an empty UI
/// state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataSource;

impl DataSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn fetch_categories(&self) -> CategoryResponse {
        Self::parse_categories(constants::CATEGORIES_ASSET)
    }

    #[must_use]
    pub fn fetch_car_details(&self) -> CarDetailsResponse {
        Self::parse_car_details(constants::CAR_DETAILS_ASSET)
    }

    /// Decode both bundled payloads into a catalog, ready to publish.
    #[must_use]
    pub fn fetch_catalog(&self) -> Catalog {
        Catalog::new(self.fetch_categories(), self.fetch_car_details())
    }

    #[must_use]
    pub fn parse_categories(payload: &str) -> CategoryResponse {
        serde_json::from_str(payload).unwrap_or_else(|error| {
            tracing::warn!(%error, "discarding undecodable categories payload");
            CategoryResponse::default()
        })
    }

    #[must_use]
    pub fn parse_car_details(payload: &str) -> CarDetailsResponse {
        serde_json::from_str(payload).unwrap_or_else(|error| {
            tracing::warn!(%error, "discarding undecodable car details payload");
            CarDetailsResponse::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SHOW_ALL_INDEX;

    #[test]
    fn malformed_payloads_degrade_to_empty_responses() {
        assert!(DataSource::parse_categories("not json").categories.is_empty());
        assert!(DataSource::parse_categories("").categories.is_empty());
        assert!(
            DataSource::parse_car_details(r#"{ "carDetails": "wrong shape" }"#)
                .car_details
                .is_empty()
        );
    }

    #[test]
    fn bundled_categories_start_with_the_show_all_entry() {
        let response = DataSource::new().fetch_categories();
        let first = response.categories.first().expect("bundled list is not empty");

        assert_eq!(first.index, SHOW_ALL_INDEX);
        assert_eq!(first.name, "All");
    }

    #[test]
    fn bundled_car_details_decode_with_camel_case_fields() {
        let response = DataSource::new().fetch_car_details();
        assert!(!response.car_details.is_empty());

        let listing = &response.car_details[0];
        assert!(!listing.image_resource.is_empty());
        assert!(!listing.category.is_empty());
    }

    #[test]
    fn fetch_catalog_publishes_both_payloads_together() {
        let catalog = DataSource::new().fetch_catalog();

        assert!(!catalog.is_empty());
        assert!(catalog.category_count() > 1);
        assert!(!catalog.listings().is_empty());
    }
}
