pub mod geocoding_handler;

pub use geocoding_handler::{__path_nominatim_proxy, nominatim_proxy};
