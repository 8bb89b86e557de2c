use log::debug;
use num_traits::NumCast;

use crate::{
    almanac::{AlmanacFormat, AlmanacRecord},
    cfg::Config,
    constants::{
        DEG_TO_RAD, REFERENCE_INCLINATION_DEG, TRIMBLE_CHUNK_ROWS, TRIMBLE_CHUNK_STRIDE,
        TRIMBLE_FIELD_WIDTH,
    },
    error::Error,
};

// Row order within one chunk
const PRN_ROW: usize = 0;
const HEALTH_ROW: usize = 1;
const ECCENTRICITY_ROW: usize = 2;
const SQRT_A_ROW: usize = 3;
const RIGHT_ASCENSION_ROW: usize = 4;
const ARG_OF_PERIGEE_ROW: usize = 5;
const MEAN_ANOMALY_ROW: usize = 6;
const TOA_ROW: usize = 7;
const INCLINATION_ROW: usize = 8;
const RIGHT_ASCENSION_RATE_ROW: usize = 9;
const CLOCK_OFFSET_ROW: usize = 10;
const CLOCK_DRIFT_ROW: usize = 11;
const WEEK_ROW: usize = 12;

/// Trimble planning almanac: plain text, organized in chunks of 13 rows
/// (one orbital parameter per row) followed by one separator line.
/// Each row has one 10 character wide column per satellite.
#[derive(Debug, Clone, Default)]
pub struct TrimbleAlmanac {
    cfg: Config,
}

impl TrimbleAlmanac {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }
}

/// One chunk of the almanac file
struct Chunk<'a> {
    /// Index of the first row, within the file
    first_line: usize,
    rows: &'a [&'a str],
}

impl<'a> Chunk<'a> {
    /// Column count is deduced from the first row
    fn nb_columns(&self) -> usize {
        (self.rows[PRN_ROW].len() + TRIMBLE_FIELD_WIDTH / 2) / TRIMBLE_FIELD_WIDTH
    }

    fn malformed(&self, row: usize, reason: String) -> Error {
        Error::MalformedAlmanac(self.first_line + row + 1, reason)
    }

    fn field(&self, row: usize, col: usize) -> Result<&'a str, Error> {
        let line = self.rows[row];
        let start = col * TRIMBLE_FIELD_WIDTH;
        let end = (start + TRIMBLE_FIELD_WIDTH).min(line.len());

        match line.get(start..end).map(str::trim) {
            Some(field) if !field.is_empty() => Ok(field),
            _ => Err(self.malformed(row, format!("missing column #{}", col + 1))),
        }
    }

    fn float(&self, row: usize, col: usize) -> Result<f64, Error> {
        let field = self.field(row, col)?;
        field
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.malformed(row, format!("invalid number \"{}\"", field)))
    }

    fn integer<T: NumCast>(&self, row: usize, col: usize) -> Result<T, Error> {
        let value = self.float(row, col)?;
        if value.fract() != 0.0 {
            return Err(self.malformed(row, format!("{} is not an integer", value)));
        }
        <T as NumCast>::from(value)
            .ok_or_else(|| self.malformed(row, format!("{} is out of range", value)))
    }

    fn record(&self, col: usize) -> Result<AlmanacRecord, Error> {
        let eccentricity = self.float(ECCENTRICITY_ROW, col)?;
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(self.malformed(
                ECCENTRICITY_ROW,
                format!("invalid eccentricity {}", eccentricity),
            ));
        }

        let sqrt_a = self.float(SQRT_A_ROW, col)?;
        if sqrt_a <= 0.0 {
            return Err(self.malformed(SQRT_A_ROW, format!("invalid sqrt(a) {}", sqrt_a)));
        }

        let toa_s = self.float(TOA_ROW, col)?;
        if toa_s < 0.0 {
            return Err(self.malformed(TOA_ROW, format!("negative time of almanac {}", toa_s)));
        }

        Ok(AlmanacRecord {
            prn: self.integer(PRN_ROW, col)?,
            health: self.integer(HEALTH_ROW, col)?,
            eccentricity,
            semi_major_axis_m: sqrt_a * sqrt_a,
            right_ascension_rad: self.float(RIGHT_ASCENSION_ROW, col)? * DEG_TO_RAD,
            arg_of_perigee_rad: self.float(ARG_OF_PERIGEE_ROW, col)? * DEG_TO_RAD,
            mean_anomaly_rad: self.float(MEAN_ANOMALY_ROW, col)? * DEG_TO_RAD,
            toa_s,
            inclination_rad: self.float(INCLINATION_ROW, col)? * DEG_TO_RAD
                + REFERENCE_INCLINATION_DEG * DEG_TO_RAD,
            // milli degrees/s
            right_ascension_rate_rad_s: self.float(RIGHT_ASCENSION_RATE_ROW, col)? / 1000.0
                * DEG_TO_RAD,
            clock_offset_s: self.float(CLOCK_OFFSET_ROW, col)?,
            clock_drift_s_s: self.float(CLOCK_DRIFT_ROW, col)?,
            gps_week: self.integer(WEEK_ROW, col)?,
        })
    }
}

impl AlmanacFormat for TrimbleAlmanac {
    fn name(&self) -> &'static str {
        "Trimble"
    }

    fn config(&self) -> &Config {
        &self.cfg
    }

    fn parse(&self, content: &str) -> Result<Vec<AlmanacRecord>, Error> {
        let lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect::<Vec<_>>();

        let mut records = Vec::new();

        for (index, rows) in lines.chunks(TRIMBLE_CHUNK_STRIDE).enumerate() {
            let first_line = index * TRIMBLE_CHUNK_STRIDE;

            if rows[PRN_ROW].trim().is_empty() {
                // tolerated at end of file only
                if let Some(offset) = rows.iter().position(|row| !row.trim().is_empty()) {
                    return Err(Error::MalformedAlmanac(
                        first_line + offset + 1,
                        "chunk does not start with PRN row".to_string(),
                    ));
                }
                continue;
            }

            if rows.len() < TRIMBLE_CHUNK_ROWS {
                return Err(Error::MalformedAlmanac(
                    first_line + rows.len(),
                    format!("truncated chunk ({} rows)", rows.len()),
                ));
            }

            let chunk = Chunk {
                first_line,
                rows: &rows[..TRIMBLE_CHUNK_ROWS],
            };

            let nb_columns = chunk.nb_columns();

            for col in 0..nb_columns {
                records.push(chunk.record(col)?);
            }

            debug!(
                "almanac chunk #{} (line {}): {} satellites",
                index,
                first_line + 1,
                nb_columns
            );
        }

        Ok(records)
    }
}
