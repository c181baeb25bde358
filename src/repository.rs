use crate::filter;
use crate::models::{CarDetails, Catalog, Category};

/// Borrowed read surface over a published catalog: the single place the
/// rendering layer queries categories, listings, filtered views and detail
/// records.
#[derive(Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog,
}

impl<'a> Repository<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn categories(&self) -> impl Iterator<Item = &'a Category> {
        self.catalog.categories()
    }

    #[must_use]
    pub fn listings(&self) -> &'a [CarDetails] {
        self.catalog.listings()
    }

    /// Listings to display under the given selection; see
    /// [`filter::visible_listings`] for the contract.
    #[must_use]
    pub fn visible_listings(&self, selected: Option<usize>) -> Vec<&'a CarDetails> {
        filter::visible_listings(self.catalog, selected)
    }

    /// Detail lookup is positional against the full catalog, never against a
    /// filtered view. A card selected in a filtered list must carry its
    /// position in the full sequence here.
    #[must_use]
    pub fn detail(&self, position: usize) -> Option<&'a CarDetails> {
        self.catalog.listing(position)
    }
}
