pub mod zone_dto;

pub use zone_dto::{
    BoundsDto, CoordinateQuery, ResolutionDto, ZoneLookupResponseDto, ZoneResponseDto,
};
