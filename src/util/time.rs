use chrono::{DateTime, Datelike, Utc};

/// Count the whole calendar months elapsed between two points in time. A
/// partial month at the end does not count, and an end before the start
/// counts as zero.
pub(crate) fn months_between(from: &DateTime<Utc>, to: &DateTime<Utc>) -> u32 {
    if to <= from {
        return 0;
    }
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}
