use crate::constants::SHOW_ALL_INDEX;
use crate::models::{CarDetails, Catalog};

fn matches_category(listing: &CarDetails, category_name: &str) -> bool {
    listing.category.to_lowercase() == category_name.to_lowercase()
}

/// Stable filter over the full listing sequence. Pure: identical inputs
/// always produce identical output.
///
/// `None` and the reserved index `0` mean "no filter" and return every
/// listing in its original order. A known index keeps the listings whose
/// `type` label equals that category's name, compared case-insensitively,
/// preserving relative order. An index that names no known category yields
/// an empty result; the selector accepts unknown indices, so a stale index
/// must filter everything out rather than fault or fall back to positional
/// indexing.
#[must_use]
pub fn visible_listings(catalog: &Catalog, selected: Option<usize>) -> Vec<&CarDetails> {
    match selected {
        None | Some(SHOW_ALL_INDEX) => catalog.listings().iter().collect(),
        Some(index) => catalog.category(index).map_or_else(Vec::new, |category| {
            catalog
                .listings()
                .iter()
                .filter(|listing| matches_category(listing, &category.name))
                .collect()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarDetailsResponse, Category, CategoryResponse};

    fn listing(name: &str, category: &str) -> CarDetails {
        CarDetails {
            image_resource: String::new(),
            validity_text: String::new(),
            rating_text: String::new(),
            name_text: name.to_string(),
            trips_text: String::new(),
            location_text: String::new(),
            price_text: String::new(),
            category: category.to_string(),
        }
    }

    fn catalog() -> Catalog {
        let categories = CategoryResponse {
            categories: vec![
                Category { index: 0, name: "All".to_string() },
                Category { index: 1, name: "SUV".to_string() },
                Category { index: 2, name: "Sedan".to_string() },
            ],
        };
        let car_details = CarDetailsResponse {
            car_details: vec![
                listing("A", "SUV"),
                listing("B", "Sedan"),
                listing("C", "suv"),
            ],
        };
        Catalog::new(categories, car_details)
    }

    fn names(listings: &[&CarDetails]) -> Vec<String> {
        listings.iter().map(|l| l.name_text.clone()).collect()
    }

    #[test]
    fn absent_and_zero_selections_return_everything_in_order() {
        let catalog = catalog();

        assert_eq!(names(&visible_listings(&catalog, None)), vec!["A", "B", "C"]);
        assert_eq!(names(&visible_listings(&catalog, Some(0))), vec!["A", "B", "C"]);
    }

    #[test]
    fn matching_is_case_insensitive_and_stable() {
        let catalog = catalog();

        assert_eq!(names(&visible_listings(&catalog, Some(1))), vec!["A", "C"]);
        assert_eq!(names(&visible_listings(&catalog, Some(2))), vec!["B"]);
    }

    #[test]
    fn unknown_category_index_yields_an_empty_result() {
        let catalog = catalog();

        assert!(visible_listings(&catalog, Some(99)).is_empty());
    }

    #[test]
    fn empty_catalog_filters_to_nothing_under_any_selection() {
        let catalog = Catalog::default();

        assert!(visible_listings(&catalog, None).is_empty());
        assert!(visible_listings(&catalog, Some(1)).is_empty());
    }
}
