mod progress_service;

pub use progress_service::ProgressService;
