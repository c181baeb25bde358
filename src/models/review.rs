/// Client review shown on the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub name: String,
    pub date: String,
    pub rating: f32,
    pub comment: String,
    pub image_url: String,
}

impl Review {
    fn new(name: &str, date: &str, rating: f32, comment: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            date: date.to_string(),
            rating,
            comment: comment.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Placeholder review feed for the detail screen until a reviews backend
    /// exists.
    #[must_use]
    pub fn placeholders() -> Vec<Self> {
        const AVATAR: &str = "https://images.rental.example/avatars/reviewer.jpg";

        vec![
            Self::new(
                "David Harris",
                "May 28, 2023",
                4.9,
                "John was absolutely great in communicating & vehicle is super reliable. \
                 Totally will book again in the future.",
                AVATAR,
            ),
            Self::new(
                "Sarah Johnson",
                "June 15, 2023",
                4.7,
                "Great experience! The car was clean and in perfect condition.",
                AVATAR,
            ),
            Self::new(
                "Michael Brown",
                "July 3, 2023",
                4.8,
                "Smooth rental process and excellent communication.",
                AVATAR,
            ),
            Self::new(
                "Emily Davis",
                "July 20, 2023",
                4.6,
                "The car was fantastic for our trip. Would definitely rent again!",
                AVATAR,
            ),
        ]
    }
}
