pub mod prayer_time_handler;

pub use prayer_time_handler::{
    __path_get_prayer_times, __path_get_prayer_times_by_coordinates, get_prayer_times,
    get_prayer_times_by_coordinates,
};
