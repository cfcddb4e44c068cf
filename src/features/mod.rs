pub mod auth;
pub mod geocoding;
pub mod health;
pub mod prayer_times;
pub mod progress;
pub mod zones;
