use chrono::{DateTime, TimeZone, Utc};
use sessionfeed_runtime::Clock;

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 2024-05-01T12:00:00Z, a few minutes after the fixture timestamps
    pub fn fixture() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::fixture()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
