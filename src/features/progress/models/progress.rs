use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// Completion timestamps per prayer, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrayerProgress {
    pub fajr: Vec<DateTime<Utc>>,
    pub dhuhr: Vec<DateTime<Utc>>,
    pub asr: Vec<DateTime<Utc>>,
    pub maghrib: Vec<DateTime<Utc>>,
    pub isha: Vec<DateTime<Utc>>,
}

impl PrayerProgress {
    pub fn entries_mut(&mut self, prayer: PrayerName) -> &mut Vec<DateTime<Utc>> {
        match prayer {
            PrayerName::Fajr => &mut self.fajr,
            PrayerName::Dhuhr => &mut self.dhuhr,
            PrayerName::Asr => &mut self.asr,
            PrayerName::Maghrib => &mut self.maghrib,
            PrayerName::Isha => &mut self.isha,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProgress {
    pub prayer_progress: PrayerProgress,
    pub zone: Option<String>,
    pub location: Option<UserLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prayer_name_wire_format() {
        assert_eq!(serde_json::to_value(PrayerName::Maghrib).unwrap(), "maghrib");
        assert_eq!(
            serde_json::from_value::<PrayerName>(serde_json::json!("isha")).unwrap(),
            PrayerName::Isha
        );
        assert!(serde_json::from_value::<PrayerName>(serde_json::json!("tahajjud")).is_err());
    }

    #[test]
    fn test_entries_mut_targets_one_prayer() {
        let mut progress = PrayerProgress::default();
        progress.entries_mut(PrayerName::Asr).push(Utc::now());

        assert_eq!(progress.asr.len(), 1);
        assert!(progress.fajr.is_empty());
    }
}
