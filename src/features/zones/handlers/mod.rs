pub mod zone_handler;

pub use zone_handler::{
    __path_get_zone, __path_list_zones, __path_zone_from_coordinates, get_zone, list_zones,
    zone_from_coordinates,
};
