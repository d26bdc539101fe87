//! Age calculations.
//!
//! All variants reduce to [`age_on`], which works on calendar dates. The
//! "today" variants differ only in how today's date is found: in the local
//! offset (which can fail on some platforms) or in UTC (which cannot).

use log::trace;
use time::{Date, OffsetDateTime};

use crate::error::Result;

/// Whole years elapsed between `birth` and `on_day`.
///
/// Never negative: a day before the birth year gives 0. Someone born on
/// 29 February has their birthday on 28 February in common years.
///
/// ```
/// use starlight_utils::age_on;
/// use time::macros::date;
///
/// assert_eq!(age_on(date!(1990 - 06 - 15), date!(2020 - 06 - 14)), 29);
/// assert_eq!(age_on(date!(1990 - 06 - 15), date!(2020 - 06 - 15)), 30);
/// ```
pub fn age_on(birth: Date, on_day: Date) -> u32 {
    let years = on_day.year() - birth.year();
    if years <= 0 {
        return 0;
    }

    let age = if before_birthday(birth, on_day) { years - 1 } else { years };
    u32::try_from(age).unwrap_or_default()
}

/// True when `on_day` falls before the birthday anniversary in its own year.
fn before_birthday(birth: Date, on_day: Date) -> bool {
    let mut birthday = (u8::from(birth.month()), birth.day());
    if birthday == (2, 29) && !time::util::is_leap_year(on_day.year()) {
        birthday = (2, 28);
    }
    (u8::from(on_day.month()), on_day.day()) < birthday
}

/// Age today, using the local offset.
///
/// # Errors
/// Returns [`UtilsError::LocalOffset`](crate::UtilsError::LocalOffset) if the
/// local UTC offset cannot be determined.
pub fn age_today(birth: Date) -> Result<u32> {
    let today = OffsetDateTime::now_local()?.date();
    trace!("age_today: local date is {today}");
    Ok(age_on(birth, today))
}

/// Age today, using UTC.
pub fn age_today_utc(birth: Date) -> u32 {
    age_on(birth, OffsetDateTime::now_utc().date())
}

/// Age on the calendar date of `on`, each timestamp read in its own offset.
pub fn age_at(birth: OffsetDateTime, on: OffsetDateTime) -> u32 {
    age_on(birth.date(), on.date())
}

/// Timestamp flavour of [`age_today`].
///
/// # Errors
/// Returns [`UtilsError::LocalOffset`](crate::UtilsError::LocalOffset) if the
/// local UTC offset cannot be determined.
pub fn age_at_today(birth: OffsetDateTime) -> Result<u32> {
    age_today(birth.date())
}

/// Timestamp flavour of [`age_today_utc`].
pub fn age_at_today_utc(birth: OffsetDateTime) -> u32 {
    age_today_utc(birth.date())
}
