use crate::{
    constants::{
        DAYS_PER_LEAP_CYCLE, DAYS_PER_WEEK, MJD_JAN_1_1901, MJD_JAN_6_1980, MONTH_DAY,
        SECONDS_PER_DAY,
    },
    error::Error,
    prelude::{Epoch, TimeScale},
};

/// Returns true if this year is a leap year (Gregorian rule).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// [CalendarDate] describes a date and time of day, expressed
/// in the time reference of the almanac (no time zone or leap second
/// correction is ever applied).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalendarDate {
    year: i32,
    /// 1..=12
    month: u8,
    /// 1..=31
    day: u8,
    hour: u8,
    minute: u8,
    /// Seconds, fractional part included
    second: f64,
}

impl CalendarDate {
    /// Builds a new [CalendarDate], `month` counted from 1 (January).
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate);
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidDate);
        }
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidDate);
        }
        // 60 is tolerated (leap second notation)
        if !second.is_finite() || !(0.0..61.0).contains(&second) {
            return Err(Error::InvalidDate);
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Builds a new [CalendarDate] from a month counted from 0 (January).
    pub fn from_zero_based_month(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, Error> {
        let month = month.checked_add(1).ok_or(Error::InvalidDate)?;
        Self::new(year, month, day, hour, minute, second)
    }

    /// Builds a new [CalendarDate] at midnight.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, counted from 1
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    /// Day number within the year, starting at 1 on January 1st.
    pub fn day_of_year(&self) -> i64 {
        let leap = usize::from(is_leap_year(self.year));
        MONTH_DAY[leap][usize::from(self.month - 1)] + i64::from(self.day)
    }

    /// Modified Julian Day, using the 4 year leap cycle approximation
    /// anchored on January 1st 1901.
    pub fn modified_julian_day(&self) -> i64 {
        let years = i64::from(self.year) - 1901;
        years.div_euclid(4) * DAYS_PER_LEAP_CYCLE
            + years.rem_euclid(4) * 365
            + self.day_of_year()
            - 1
            + MJD_JAN_1_1901
    }

    /// Elapsed fraction of the day
    pub fn day_fraction(&self) -> f64 {
        ((self.second / 60.0 + f64::from(self.minute)) / 60.0 + f64::from(self.hour)) / 24.0
    }
}

impl From<Epoch> for CalendarDate {
    /// Uses the GPST Gregorian representation of this [Epoch],
    /// whatever its own [TimeScale].
    fn from(epoch: Epoch) -> Self {
        let (year, month, day, hour, minute, second, nanos) =
            epoch.to_gregorian(TimeScale::GPST);
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second: f64::from(second) + f64::from(nanos) * 1.0E-9,
        }
    }
}

/// Converts a [CalendarDate] to the GPS week counter and elapsed
/// seconds within that week.
pub fn date_to_gps_week_seconds(date: &CalendarDate) -> (i64, f64) {
    let days = date.modified_julian_day() - MJD_JAN_6_1980;
    let week = days.div_euclid(DAYS_PER_WEEK);
    let seconds = ((days - week * DAYS_PER_WEEK) as f64 + date.day_fraction()) * SECONDS_PER_DAY;
    (week, seconds)
}

/// Converts a [CalendarDate] to GPS seconds of week.
pub fn date_to_gps_seconds(date: &CalendarDate) -> f64 {
    date_to_gps_week_seconds(date).1
}
