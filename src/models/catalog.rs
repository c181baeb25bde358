use super::car_details::{CarDetails, CarDetailsResponse};
use super::category::{Category, CategoryResponse};
use crate::ordered_map::OrderedMap;

/// Immutable pair of (categories, listings), built once from the two decoded
/// payloads and read-only for the lifetime of the process.
///
/// Categories keep their payload order for display but are addressed by
/// their semantic `index` key, so index values that diverge from list
/// positions cannot mismatch a lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: OrderedMap<Category>,
    listings: Vec<CarDetails>,
}

impl Catalog {
    #[must_use]
    pub fn new(categories: CategoryResponse, car_details: CarDetailsResponse) -> Self {
        let categories = categories
            .categories
            .into_iter()
            .map(|category| (category.index, category))
            .collect();

        Self {
            categories,
            listings: car_details.car_details,
        }
    }

    /// Categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Semantic lookup by [`Category::index`], independent of list position.
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Full, unfiltered listing sequence in display order. The position of a
    /// listing in this sequence is its external address for detail lookup.
    #[must_use]
    pub fn listings(&self) -> &[CarDetails] {
        &self.listings
    }

    /// Positional lookup against the full listing sequence; out of range is
    /// `None`, not an error.
    #[must_use]
    pub fn listing(&self, position: usize) -> Option<&CarDetails> {
        self.listings.get(position)
    }

    #[must_use]
    pub const fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.listings.is_empty()
    }
}
