use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::datetime::format_12h;

/// A half-open bookable interval `[start, end)`. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    /// Display label, e.g. `10:00 AM - 10:30 AM`.
    pub fn label(&self) -> String {
        format!("{} - {}", format_12h(self.start), format_12h(self.end))
    }
}
