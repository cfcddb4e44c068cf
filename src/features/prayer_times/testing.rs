//! Fakes for exercising the fetch pipeline without the network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::clients::{PrayerTimeUpstream, UpstreamPrayerDay};
use super::models::UpstreamError;
use super::services::{
    FallbackTable, PrayerTimeCache, PrayerTimeFetcher, PrayerTimeService, Sleeper,
};
use crate::core::config::JakimConfig;
use crate::features::zones::ZoneResolver;
use crate::shared::clock::SystemClock;

pub fn sample_day() -> UpstreamPrayerDay {
    UpstreamPrayerDay {
        imsak: Some("05:39:00".to_string()),
        fajr: Some("05:49:00".to_string()),
        syuruk: Some("07:00:00".to_string()),
        dhuhr: Some("13:02:00".to_string()),
        asr: Some("16:07:00".to_string()),
        maghrib: Some("19:01:00".to_string()),
        isha: Some("20:10:00".to_string()),
    }
}

enum Behaviour {
    Scripted(Mutex<VecDeque<Result<UpstreamPrayerDay, UpstreamError>>>),
    Failing,
    Hanging,
}

/// Upstream that replays a script, then keeps failing once it runs out
pub struct ScriptedUpstream {
    behaviour: Behaviour,
    calls: AtomicU32,
}

impl ScriptedUpstream {
    pub fn new(script: Vec<Result<UpstreamPrayerDay, UpstreamError>>) -> Self {
        Self {
            behaviour: Behaviour::Scripted(Mutex::new(script.into())),
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            behaviour: Behaviour::Failing,
            calls: AtomicU32::new(0),
        }
    }

    pub fn hanging() -> Self {
        Self {
            behaviour: Behaviour::Hanging,
            calls: AtomicU32::new(0),
        }
    }

    pub fn always_ok() -> Self {
        Self::new((0..16).map(|_| Ok(sample_day())).collect())
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrayerTimeUpstream for ScriptedUpstream {
    async fn fetch_day(
        &self,
        _zone_code: &str,
        _date: NaiveDate,
    ) -> Result<UpstreamPrayerDay, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Behaviour::Hanging = self.behaviour {
            return std::future::pending().await;
        }

        let next = match &self.behaviour {
            Behaviour::Scripted(script) => script.lock().unwrap().pop_front(),
            _ => None,
        };
        next.unwrap_or(Err(UpstreamError::Status(503)))
    }
}

/// Sleeper that records requested delays and returns immediately
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// Full pipeline over `upstream` with default retry settings and no real sleeping
pub fn prayer_time_service(upstream: Arc<ScriptedUpstream>) -> PrayerTimeService {
    let resolver = Arc::new(ZoneResolver::jakim().unwrap());
    let clock = Arc::new(SystemClock);
    let config = JakimConfig {
        base_url: "http://jakim.test".to_string(),
        timeout: Duration::from_secs(8),
        retries: 2,
        retry_base_delay: Duration::from_millis(1000),
    };
    let fetcher = PrayerTimeFetcher::new(
        upstream,
        Arc::new(RecordingSleeper::default()),
        resolver.clone(),
        &config,
    );

    PrayerTimeService::new(
        resolver.clone(),
        fetcher,
        PrayerTimeCache::new(Duration::from_secs(3600), clock.clone()),
        FallbackTable::new(resolver),
        clock,
    )
}
