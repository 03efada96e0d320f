pub mod restaurant;
pub mod theme;
pub mod marker;
pub mod review;
pub mod session;

pub use restaurant::{LatLng, RestaurantMarker};
pub use theme::{Styler, ThemeRule};
pub use marker::{MapOptions, MarkerIcon, MarkerShape, MarkerSpec, Point, Size};
pub use review::{format_reviews, Review, ReviewSubmission};
pub use session::LoginStatus;
