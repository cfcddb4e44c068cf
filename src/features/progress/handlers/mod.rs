pub mod progress_handler;

pub use progress_handler::{
    __path_get_progress, __path_record_prayer, __path_update_location, get_progress,
    record_prayer, update_location,
};
