pub mod map_viewmodel;
pub mod reviews_viewmodel;
pub mod session_viewmodel;

pub use map_viewmodel::MapViewModel;
pub use reviews_viewmodel::ReviewsViewModel;
pub use session_viewmodel::{GateDecision, SessionViewModel};
