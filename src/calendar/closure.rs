use serde::{Deserialize, Serialize};

use crate::time::Date;

/// A specific-date override to closed, independent of the weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessClosure {
    date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl BusinessClosure {
    #[must_use]
    pub fn new(date: Date, reason: Option<String>) -> Self {
        Self { date, reason }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
