pub const APP_NAME: &str = "rental-catalog";

/// Reserved category index meaning "no filter / show all".
pub const SHOW_ALL_INDEX: usize = 0;

pub const CATEGORIES_ASSET: &str = include_str!("../assets/categories.json");
pub const CAR_DETAILS_ASSET: &str = include_str!("../assets/carDetails.json");
