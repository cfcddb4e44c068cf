mod jakim_client;

pub use jakim_client::{JakimClient, PrayerTimeUpstream, UpstreamPrayerDay};
