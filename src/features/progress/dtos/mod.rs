pub mod progress_dto;

pub use progress_dto::{LocationDto, RecordPrayerDto, UpdateLocationDto, UserProgressResponseDto};
