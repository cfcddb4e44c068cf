mod zone_resolver;

pub use zone_resolver::ZoneResolver;
