pub mod backup;
pub mod checkin;
pub mod clock;
pub mod drinks;
pub mod engine;
pub mod export;
pub mod log;
pub mod photo;
