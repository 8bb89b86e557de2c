use log::{info, warn};
use std::collections::HashSet;

use crate::{
    almanac::{AlmanacFormat, AlmanacRecord},
    cfg::Config,
    error::Error,
    prelude::{Constellation, Vector3, SV},
    source::AlmanacSource,
    time::{date_to_gps_seconds, CalendarDate},
};

/// [AlmanacStore] gathers [AlmanacRecord]s in file order.
/// It is either empty (not ready) or fully populated by a single
/// successful load: content is parsed aside, then swapped in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlmanacStore {
    records: Vec<AlmanacRecord>,
    ready: bool,
}

impl AlmanacStore {
    /// Creates a new empty (not ready) [AlmanacStore]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ready [AlmanacStore] from almanac content.
    pub fn from_content<F: AlmanacFormat>(format: &F, content: &str) -> Result<Self, Error> {
        let mut s = Self::new();
        s.load(format, content)?;
        Ok(s)
    }

    /// Parses almanac content and replaces the whole store with it.
    /// On failure, current content is preserved.
    /// Returns the number of records now available.
    pub fn load<F: AlmanacFormat>(&mut self, format: &F, content: &str) -> Result<usize, Error> {
        let records = format.parse(content)?;

        let mut prns = HashSet::with_capacity(records.len());
        for record in records.iter() {
            if !prns.insert(record.prn) {
                warn!("{} - duplicate almanac record", record.sv());
            }
        }

        self.records = records;
        self.ready = true;

        info!(
            "{} almanac loaded: {} satellites",
            format.name(),
            self.records.len()
        );

        Ok(self.records.len())
    }

    /// Fetches fresh content from [AlmanacSource] and loads it.
    /// Store is preserved if either step fails.
    pub fn refresh<S: AlmanacSource, F: AlmanacFormat>(
        &mut self,
        source: &mut S,
        format: &F,
    ) -> Result<usize, Error> {
        let content = source.fetch()?;
        self.load(format, &content)
    }

    /// True once content has been loaded
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all [AlmanacRecord]s, in file order
    pub fn records(&self) -> &[AlmanacRecord] {
        &self.records
    }

    /// Returns the first [AlmanacRecord] for this PRN
    pub fn record(&self, prn: u8) -> Option<&AlmanacRecord> {
        self.records.iter().find(|r| r.prn == prn)
    }

    /// Returns satellite PRNs in file order (duplicates included)
    pub fn satellite_ids(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.prn).collect()
    }

    /// Resolves satellite position in ECEF (meters) at this date.
    pub fn satellite_position(
        &self,
        prn: u8,
        date: &CalendarDate,
        cfg: &Config,
    ) -> Result<Vector3<f64>, Error> {
        if !self.ready {
            return Err(Error::StoreNotReady);
        }

        let record = self
            .record(prn)
            .ok_or(Error::SatelliteNotFound(SV::new(Constellation::GPS, prn)))?;

        if !record.is_healthy() {
            warn!("{} - unhealthy (code={})", record.sv(), record.health);
        }

        record.position_at(date_to_gps_seconds(date), cfg)
    }

    /// Resolves the position of every satellite in the store, in file order.
    pub fn satellite_positions(
        &self,
        date: &CalendarDate,
        cfg: &Config,
    ) -> Result<Vec<(SV, Result<Vector3<f64>, Error>)>, Error> {
        if !self.ready {
            return Err(Error::StoreNotReady);
        }

        let t_gps_s = date_to_gps_seconds(date);

        Ok(self
            .records
            .iter()
            .map(|record| (record.sv(), record.position_at(t_gps_s, cfg)))
            .collect())
    }
}
