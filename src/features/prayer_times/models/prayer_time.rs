use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where a prayer-time record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PrayerTimeSource {
    #[serde(rename = "jakim-official")]
    JakimOfficial,
    #[serde(rename = "fallback-cached")]
    FallbackCached,
    #[serde(rename = "cache")]
    Cache,
}

/// The five daily prayers plus the optional imsak and syuruk markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimes {
    #[schema(example = "05:49:00")]
    pub fajr: String,
    #[schema(example = "13:00:00")]
    pub dhuhr: String,
    #[schema(example = "16:19:00")]
    pub asr: String,
    #[schema(example = "18:59:00")]
    pub maghrib: String,
    #[schema(example = "20:10:00")]
    pub isha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imsak: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syuruk: Option<String>,
}

/// Prayer times for one zone on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimeRecord {
    #[serde(flatten)]
    pub times: PrayerTimes,
    #[schema(value_type = String, format = Date, example = "2026-10-16")]
    pub date: NaiveDate,
    #[schema(example = "WLY01")]
    pub zone: String,
    #[schema(example = "Kuala Lumpur, Putrajaya")]
    pub location_name: String,
    pub source: PrayerTimeSource,
}

impl PrayerTimeRecord {
    /// Copy of this record carrying a different source tag
    pub fn with_source(&self, source: PrayerTimeSource) -> Self {
        Self {
            source,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PrayerTimeRecord {
        PrayerTimeRecord {
            times: PrayerTimes {
                fajr: "05:49:00".to_string(),
                dhuhr: "13:00:00".to_string(),
                asr: "16:19:00".to_string(),
                maghrib: "18:59:00".to_string(),
                isha: "20:10:00".to_string(),
                imsak: Some("05:39:00".to_string()),
                syuruk: None,
            },
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            zone: "WLY01".to_string(),
            location_name: "Kuala Lumpur, Putrajaya".to_string(),
            source: PrayerTimeSource::JakimOfficial,
        }
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let json = serde_json::to_value(record()).unwrap();

        assert_eq!(json["fajr"], "05:49:00");
        assert_eq!(json["imsak"], "05:39:00");
        assert!(json.get("syuruk").is_none());
        assert_eq!(json["date"], "2026-10-16");
        assert_eq!(json["locationName"], "Kuala Lumpur, Putrajaya");
        assert_eq!(json["source"], "jakim-official");
    }

    #[test]
    fn test_with_source_leaves_original_untouched() {
        let original = record();
        let tagged = original.with_source(PrayerTimeSource::Cache);

        assert_eq!(tagged.source, PrayerTimeSource::Cache);
        assert_eq!(original.source, PrayerTimeSource::JakimOfficial);
        assert_eq!(tagged.times, original.times);
    }
}
