use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::progress::dtos::{RecordPrayerDto, UpdateLocationDto};
use crate::features::progress::models::UserProgress;
use crate::features::zones::ZoneResolver;
use crate::shared::clock::Clock;
use crate::shared::types::Coordinate;
use crate::shared::validation::normalize_zone_code;

/// In-memory prayer log per user, lost on restart
pub struct ProgressService {
    store: RwLock<HashMap<String, UserProgress>>,
    resolver: Arc<ZoneResolver>,
    clock: Arc<dyn Clock>,
}

impl ProgressService {
    pub fn new(resolver: Arc<ZoneResolver>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            resolver,
            clock,
        }
    }

    pub async fn get_progress(&self, user: &AuthenticatedUser) -> UserProgress {
        self.store
            .read()
            .await
            .get(&user.user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Appends a completion, or pops the latest one when `completed` is false
    pub async fn record_prayer(
        &self,
        user: &AuthenticatedUser,
        dto: RecordPrayerDto,
    ) -> UserProgress {
        let mut store = self.store.write().await;
        let progress = store.entry(user.user_id.clone()).or_default();
        let entries = progress.prayer_progress.entries_mut(dto.prayer);

        if dto.completed {
            entries.push(dto.timestamp.unwrap_or_else(|| self.clock.now()));
        } else {
            entries.pop();
        }

        tracing::debug!(
            "User {} marked {:?} completed={}",
            user.user_id,
            dto.prayer,
            dto.completed
        );
        progress.clone()
    }

    pub async fn update_location(
        &self,
        user: &AuthenticatedUser,
        dto: UpdateLocationDto,
    ) -> Result<UserProgress> {
        // Without an explicit zone, a new location picks the zone it falls in
        let zone = match (dto.zone.as_deref(), dto.location.as_ref()) {
            (Some(raw), _) => {
                let zone = normalize_zone_code(raw)
                    .and_then(|code| self.resolver.find(&code))
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown zone: {}", raw)))?;
                Some(zone.code.to_string())
            }
            (None, Some(location)) => {
                let point = Coordinate::new(location.latitude, location.longitude);
                Some(self.resolver.resolve_zone(point).code.to_string())
            }
            (None, None) => None,
        };

        let mut store = self.store.write().await;
        let progress = store.entry(user.user_id.clone()).or_default();

        if let Some(zone) = zone {
            progress.zone = Some(zone);
        }
        if let Some(location) = dto.location {
            progress.location = Some(location.into());
        }

        Ok(progress.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::progress::dtos::LocationDto;
    use crate::features::progress::models::PrayerName;
    use crate::shared::clock::ManualClock;
    use chrono::{TimeZone, Utc};

    fn service() -> ProgressService {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 10, 16, 5, 0, 0).unwrap(),
        ));
        ProgressService::new(Arc::new(ZoneResolver::jakim().unwrap()), clock)
    }

    fn user(id: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: id.to_string(),
        }
    }

    fn mark(prayer: PrayerName, completed: bool) -> RecordPrayerDto {
        RecordPrayerDto {
            prayer,
            completed,
            timestamp: None,
        }
    }

    #[tokio::test]
    async fn test_append_then_pop() {
        let service = service();
        let alice = user("alice");

        service.record_prayer(&alice, mark(PrayerName::Fajr, true)).await;
        let progress = service.record_prayer(&alice, mark(PrayerName::Fajr, true)).await;
        assert_eq!(progress.prayer_progress.fajr.len(), 2);
        assert_eq!(
            progress.prayer_progress.fajr[0],
            Utc.with_ymd_and_hms(2026, 10, 16, 5, 0, 0).unwrap()
        );

        let progress = service.record_prayer(&alice, mark(PrayerName::Fajr, false)).await;
        assert_eq!(progress.prayer_progress.fajr.len(), 1);
    }

    #[tokio::test]
    async fn test_pop_on_empty_is_noop() {
        let service = service();
        let progress = service
            .record_prayer(&user("bob"), mark(PrayerName::Isha, false))
            .await;
        assert!(progress.prayer_progress.isha.is_empty());
    }

    #[tokio::test]
    async fn test_explicit_timestamp_is_kept() {
        let service = service();
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 11, 30, 0).unwrap();

        let progress = service
            .record_prayer(
                &user("carol"),
                RecordPrayerDto {
                    prayer: PrayerName::Asr,
                    completed: true,
                    timestamp: Some(at),
                },
            )
            .await;

        assert_eq!(progress.prayer_progress.asr, vec![at]);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let service = service();
        service
            .record_prayer(&user("alice"), mark(PrayerName::Dhuhr, true))
            .await;

        assert!(service
            .get_progress(&user("bob"))
            .await
            .prayer_progress
            .dhuhr
            .is_empty());
    }

    #[tokio::test]
    async fn test_update_location() {
        let service = service();
        let alice = user("alice");

        let progress = service
            .update_location(
                &alice,
                UpdateLocationDto {
                    zone: Some("sgr01".to_string()),
                    location: Some(LocationDto {
                        latitude: 3.07,
                        longitude: 101.52,
                        name: Some("Shah Alam".to_string()),
                    }),
                },
            )
            .await
            .unwrap();
        assert_eq!(progress.zone.as_deref(), Some("SGR01"));

        let progress = service
            .update_location(
                &alice,
                UpdateLocationDto {
                    zone: None,
                    location: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(progress.zone.as_deref(), Some("SGR01"));
        assert_eq!(progress.location.unwrap().name.as_deref(), Some("Shah Alam"));
    }

    #[tokio::test]
    async fn test_unknown_zone_is_rejected() {
        let service = service();
        let result = service
            .update_location(
                &user("alice"),
                UpdateLocationDto {
                    zone: Some("ZZZ99".to_string()),
                    location: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.get_progress(&user("alice")).await, UserProgress::default());
    }

    #[tokio::test]
    async fn test_location_without_zone_picks_containing_zone() {
        let service = service();
        let progress = service
            .update_location(
                &user("dina"),
                UpdateLocationDto {
                    zone: None,
                    location: Some(LocationDto {
                        latitude: 3.139,
                        longitude: 101.6869,
                        name: None,
                    }),
                },
            )
            .await
            .unwrap();

        assert_eq!(progress.zone.as_deref(), Some("WLY01"));
    }
}
