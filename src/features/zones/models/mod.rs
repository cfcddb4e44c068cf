mod zone;

pub use zone::{Bounds, ResolutionMethod, Zone, ZoneMatch};
