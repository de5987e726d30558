pub mod checkin;
pub mod drink;
pub mod session;

pub use checkin::CheckIn;
pub use drink::DrinkType;
pub use session::SessionState;
