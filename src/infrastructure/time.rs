use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock time source; tests substitute their own [`Clock`].
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
