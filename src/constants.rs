use std::f64::consts::PI;

/// Earth angular velocity, in WGS84 frame rad/s
pub const EARTH_ANGULAR_VEL_RAD: f64 = 7.2921151467E-5;

/// Earth gravitational constant (m^3 s-2), WGS84 value
/// used by the GPS almanac model.
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986005E14;

/// Degrees to radians
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Almanac inclinations are expressed as an offset to this reference (degrees)
pub const REFERENCE_INCLINATION_DEG: f64 = 54.0;

/// Kepler equation convergence criterion (radians)
pub const KEPLER_TOLERANCE_RAD: f64 = 1.0E-8;

/// Kepler solver iteration budget. Plain fixed point iteration
/// needs up to ~150 iterations as eccentricity reaches 0.9.
pub const KEPLER_MAX_ITERATIONS: usize = 200;

/// Modified Julian Day of January 1st 1901
pub const MJD_JAN_1_1901: i64 = 15_385;

/// Modified Julian Day of January 6th 1980 (GPS epoch)
pub const MJD_JAN_6_1980: i64 = 44_244;

/// Days in a 4 year leap cycle
pub const DAYS_PER_LEAP_CYCLE: i64 = 1_461;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub const DAYS_PER_WEEK: i64 = 7;

/// Cumulated day count at the start of each month, for regular
/// and leap years.
pub const MONTH_DAY: [[i64; 12]; 2] = [
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];

/// Trimble almanac: width of one column
pub const TRIMBLE_FIELD_WIDTH: usize = 10;

/// Trimble almanac: rows (orbital parameters) per chunk
pub const TRIMBLE_CHUNK_ROWS: usize = 13;

/// Trimble almanac: chunk stride (rows + separator line)
pub const TRIMBLE_CHUNK_STRIDE: usize = 14;
