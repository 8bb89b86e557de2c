use thiserror::Error;

use crate::prelude::SV;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Almanac content does not follow the expected layout:
    /// short chunk, missing column or non numeric field.
    /// Reports the (1-based) line number where parsing stopped.
    #[error("malformed almanac (line {0}): {1}")]
    MalformedAlmanac(usize, String),

    /// Requested satellite is not described by the [AlmanacStore](crate::prelude::AlmanacStore).
    #[error("{0} not found in almanac")]
    SatelliteNotFound(SV),

    /// Position was requested prior any successful almanac load.
    #[error("almanac store is not ready")]
    StoreNotReady,

    /// Kepler equation did not converge within the iteration budget
    /// defined by [Config](crate::prelude::Config).
    #[error("{0} - kepler solver did not converge")]
    KeplerNonConvergence(SV),

    /// Calendar fields are out of range.
    #[error("invalid calendar date")]
    InvalidDate,

    /// [AlmanacSource](crate::prelude::AlmanacSource) could not provide the almanac content.
    #[error("failed to fetch almanac: {0}")]
    FetchFailed(String),
}
