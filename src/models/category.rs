use serde::{Deserialize, Serialize};

/// Named grouping used to filter listings. `index` is a semantic identifier,
/// unique within a list but not necessarily contiguous or sorted; index `0`
/// is reserved for "show all" and leads every valid category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub index: usize,
    pub name: String,
}

/// Wire shape of the bundled `categories.json` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub categories: Vec<Category>,
}
