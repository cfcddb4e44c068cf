pub mod prayer_time_dto;

pub use prayer_time_dto::CoordinatePrayerTimesDto;
