use chrono::{Datelike, Local};

/// Local calendar year and month, used when a report request leaves the
/// period out.
pub fn current_period() -> (i32, u32) {
    let now = Local::now();
    (now.year(), now.month())
}
