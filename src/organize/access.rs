use chrono::{DateTime, Local};

pub const RECENT_DAYS: i64 = 10;
pub const MODERATE_DAYS: i64 = 20;

pub fn access_bucket(days_since_access: i64) -> &'static str {
    if days_since_access < RECENT_DAYS {
        "Less than 10 Days"
    } else if days_since_access < MODERATE_DAYS {
        "Less than 20 Days"
    } else {
        "More than 20 Days"
    }
}

pub fn days_since(accessed: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (now - accessed).num_days()
}
