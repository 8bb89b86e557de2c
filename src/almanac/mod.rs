use crate::{cfg::Config, error::Error, prelude::Vector3, time::CalendarDate};

mod record;
mod store;
mod trimble;

pub use record::AlmanacRecord;
pub use store::AlmanacStore;
pub use trimble::TrimbleAlmanac;

/// [AlmanacFormat] is implemented once per supported almanac file format.
/// The position solver is shared by all formats.
pub trait AlmanacFormat {
    /// Readable format name
    fn name(&self) -> &'static str;

    /// Solver [Config]uration associated to this format
    fn config(&self) -> &Config;

    /// Parses the whole almanac content, returning one [AlmanacRecord] per
    /// satellite in file order. Fails as a whole on the first malformed field.
    fn parse(&self, content: &str) -> Result<Vec<AlmanacRecord>, Error>;

    /// Resolves satellite position in ECEF (meters).
    fn satellite_position(
        &self,
        store: &AlmanacStore,
        prn: u8,
        date: &CalendarDate,
    ) -> Result<Vector3<f64>, Error> {
        store.satellite_position(prn, date, self.config())
    }
}
