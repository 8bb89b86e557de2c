#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod almanac;
mod cfg;
mod constants;
mod error;
mod orbit;
mod source;
mod time;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::almanac::{AlmanacFormat, AlmanacRecord, AlmanacStore, TrimbleAlmanac};
    pub use crate::cfg::Config;
    pub use crate::error::Error;
    pub use crate::source::{AlmanacSource, FileSource};
    pub use crate::time::{
        date_to_gps_seconds, date_to_gps_week_seconds, is_leap_year, CalendarDate,
    };
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
