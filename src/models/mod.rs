mod car_details;
mod catalog;
mod category;
mod review;

pub use self::car_details::{CarDetails, CarDetailsResponse};
pub use self::catalog::Catalog;
pub use self::category::{Category, CategoryResponse};
pub use self::review::Review;
