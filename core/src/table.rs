//! Fixed-resolution geomagnetic tables
//!
//! A [`MagneticTable`] holds three co-indexed grids (declination, inclination, and total field
//! strength) sampled every 10 degrees over the whole globe. Rows run from the south pole to the
//! north pole and columns run from -180 to +180 degrees longitude. The last column repeats the
//! first so that the +/-180 degree seam can be interpolated across without wrapping the stored
//! data; only the query longitude is wrapped.
//!
//! Values are signed fixed-point integers. Angles are stored as radians scaled by
//! [`ANGLE_SCALE`] and strength as milligauss scaled by [`STRENGTH_SCALE`]. Decoding happens at
//! the API boundary (see [`crate::MagneticField`]) so that the interpolation itself works on the
//! raw samples.
use std::fmt::{self, Display};

pub use crate::wmm::WMM2020;

/// Grid spacing in degrees along both axes
pub const SAMPLING_RESOLUTION: f64 = 10.0;
/// Latitude of the first grid row, degrees
pub const MIN_LATITUDE: f64 = -90.0;
/// Latitude of the last grid row, degrees
pub const MAX_LATITUDE: f64 = 90.0;
/// Longitude of the first grid column, degrees
pub const MIN_LONGITUDE: f64 = -180.0;
/// Longitude of the last grid column, degrees (same meridian as [`MIN_LONGITUDE`])
pub const MAX_LONGITUDE: f64 = 180.0;
/// Number of latitude rows
pub const LATITUDE_DIMENSION: usize = 19;
/// Number of longitude columns, including the duplicated seam column
pub const LONGITUDE_DIMENSION: usize = 37;
/// Raw angle value per radian
pub const ANGLE_SCALE: f64 = 10_000.0;
/// Raw strength value per milligauss
pub const STRENGTH_SCALE: f64 = 10.0;

/// One quantity sampled on the global grid, indexed `[row][column]`
pub type Grid = [[i16; LONGITUDE_DIMENSION]; LATITUDE_DIMENSION];

/// The physical quantity a grid holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Declination,
    Inclination,
    Strength,
}
impl Quantity {
    /// All quantities in table order
    pub const ALL: [Quantity; 3] = [
        Quantity::Declination,
        Quantity::Inclination,
        Quantity::Strength,
    ];
    /// Number of raw units per physical unit (radians or milligauss)
    pub fn scale(&self) -> f64 {
        match self {
            Quantity::Declination | Quantity::Inclination => ANGLE_SCALE,
            Quantity::Strength => STRENGTH_SCALE,
        }
    }
    /// Convert a raw (possibly interpolated) table value to radians or milligauss
    pub fn decode(&self, raw: f64) -> f64 {
        raw / self.scale()
    }
}
impl Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Declination => "declination",
            Quantity::Inclination => "inclination",
            Quantity::Strength => "strength",
        };
        write!(f, "{}", name)
    }
}

/// Provenance of a table: the model that produced it and the epoch it was evaluated at
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableInfo {
    /// Model name, e.g. `WMM-2020`
    pub model: &'static str,
    /// Version of the tool that sampled the model
    pub version: &'static str,
    /// Decimal year the model was evaluated at
    pub epoch: f64,
}
impl Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (v{}, epoch {:.3})", self.model, self.version, self.epoch)
    }
}

/// Three co-indexed geomagnetic grids sharing one latitude/longitude axis definition.
///
/// The table is immutable once built. Engines borrow it, so a single table can back any number
/// of concurrent lookups.
#[derive(Clone, PartialEq)]
pub struct MagneticTable {
    info: TableInfo,
    declination: Grid,
    inclination: Grid,
    strength: Grid,
}
impl fmt::Debug for MagneticTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MagneticTable {{ {} x {}, info: {:?} }}",
            LATITUDE_DIMENSION, LONGITUDE_DIMENSION, self.info
        )
    }
}
impl Display for MagneticTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MagneticTable: {} | Size: {} x {} | Lat range: [{}, {}] | Lon range: [{}, {}]",
            self.info,
            LATITUDE_DIMENSION,
            LONGITUDE_DIMENSION,
            MIN_LATITUDE,
            MAX_LATITUDE,
            MIN_LONGITUDE,
            MAX_LONGITUDE
        )
    }
}
impl MagneticTable {
    /// Assemble a table from three pre-scaled grids.
    ///
    /// Usable in `const` context so tables can be compiled in as statics.
    ///
    /// # Example
    /// ```rust
    /// use geomag::table::{Grid, MagneticTable, TableInfo};
    /// const ZEROS: Grid = [[0; 37]; 19];
    /// static FLAT: MagneticTable = MagneticTable::new(
    ///     TableInfo { model: "flat", version: "0", epoch: 2020.0 },
    ///     ZEROS,
    ///     ZEROS,
    ///     ZEROS,
    /// );
    /// assert_eq!(FLAT.info().model, "flat");
    /// ```
    pub const fn new(info: TableInfo, declination: Grid, inclination: Grid, strength: Grid) -> Self {
        MagneticTable {
            info,
            declination,
            inclination,
            strength,
        }
    }
    /// Build a table by evaluating `sample(row, column)` at every node.
    ///
    /// The closure returns the raw `(declination, inclination, strength)` triple for the node.
    /// Mostly useful for synthetic tables in tests.
    ///
    /// # Example
    /// ```rust
    /// use geomag::table::{MagneticTable, TableInfo};
    /// let info = TableInfo { model: "synthetic", version: "0", epoch: 2020.0 };
    /// let table = MagneticTable::from_fn(info, |row, col| (row as i16, col as i16, 100));
    /// assert_eq!(table.grid(geomag::table::Quantity::Inclination)[3][7], 7);
    /// ```
    pub fn from_fn<F>(info: TableInfo, mut sample: F) -> Self
    where
        F: FnMut(usize, usize) -> (i16, i16, i16),
    {
        let mut declination: Grid = [[0; LONGITUDE_DIMENSION]; LATITUDE_DIMENSION];
        let mut inclination: Grid = [[0; LONGITUDE_DIMENSION]; LATITUDE_DIMENSION];
        let mut strength: Grid = [[0; LONGITUDE_DIMENSION]; LATITUDE_DIMENSION];
        for row in 0..LATITUDE_DIMENSION {
            for col in 0..LONGITUDE_DIMENSION {
                let (dec, inc, mag) = sample(row, col);
                declination[row][col] = dec;
                inclination[row][col] = inc;
                strength[row][col] = mag;
            }
        }
        MagneticTable::new(info, declination, inclination, strength)
    }
    /// Table provenance
    pub fn info(&self) -> &TableInfo {
        &self.info
    }
    /// The raw grid holding `quantity`
    pub fn grid(&self, quantity: Quantity) -> &Grid {
        match quantity {
            Quantity::Declination => &self.declination,
            Quantity::Inclination => &self.inclination,
            Quantity::Strength => &self.strength,
        }
    }
    /// Raw stored sample at a grid node
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the grid.
    pub fn sample(&self, quantity: Quantity, row: usize, col: usize) -> i16 {
        self.grid(quantity)[row][col]
    }
    /// Whether the last column duplicates the first in every grid.
    ///
    /// Interpolation relies on this to treat -180 and +180 degrees as the same meridian.
    pub fn seam_is_consistent(&self) -> bool {
        Quantity::ALL.iter().all(|&quantity| {
            self.grid(quantity)
                .iter()
                .all(|row| row[0] == row[LONGITUDE_DIMENSION - 1])
        })
    }
}

/// Latitude in degrees of grid row `row`
pub fn latitude_of_row(row: usize) -> f64 {
    MIN_LATITUDE + row as f64 * SAMPLING_RESOLUTION
}
/// Longitude in degrees of grid column `col`
pub fn longitude_of_column(col: usize) -> f64 {
    MIN_LONGITUDE + col as f64 * SAMPLING_RESOLUTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WMM2020;

    fn info() -> TableInfo {
        TableInfo {
            model: "synthetic",
            version: "test",
            epoch: 2020.0,
        }
    }
    #[test]
    fn axes_cover_the_globe() {
        assert_eq!(latitude_of_row(0), MIN_LATITUDE);
        assert_eq!(latitude_of_row(LATITUDE_DIMENSION - 1), MAX_LATITUDE);
        assert_eq!(longitude_of_column(0), MIN_LONGITUDE);
        assert_eq!(longitude_of_column(LONGITUDE_DIMENSION - 1), MAX_LONGITUDE);
        assert_eq!(latitude_of_row(9), 0.0);
        assert_eq!(longitude_of_column(18), 0.0);
    }
    #[test]
    fn wmm2020_corners() {
        assert_eq!(WMM2020.sample(Quantity::Declination, 0, 0), 26026);
        assert_eq!(WMM2020.sample(Quantity::Declination, 9, 18), -787);
        assert_eq!(WMM2020.sample(Quantity::Inclination, 18, 0), 15390);
        assert_eq!(WMM2020.sample(Quantity::Strength, 0, 0), 5461);
        assert_eq!(WMM2020.info().model, "WMM-2020");
        assert!(WMM2020.seam_is_consistent());
    }
    #[test]
    fn from_fn_places_samples() {
        let table = MagneticTable::from_fn(info(), |row, col| {
            (row as i16, col as i16, (row * 100 + col) as i16)
        });
        assert_eq!(table.sample(Quantity::Declination, 5, 30), 5);
        assert_eq!(table.sample(Quantity::Inclination, 5, 30), 30);
        assert_eq!(table.sample(Quantity::Strength, 5, 30), 530);
        // column 36 differs from column 0 here
        assert!(!table.seam_is_consistent());
    }
    #[test]
    fn decode_scales() {
        assert_eq!(Quantity::Declination.decode(26026.0), 2.6026);
        assert_eq!(Quantity::Inclination.decode(-787.0), -0.0787);
        assert_eq!(Quantity::Strength.decode(5461.0), 546.1);
    }
    #[test]
    fn display() {
        assert_eq!(Quantity::Strength.to_string(), "strength");
        let shown = WMM2020.to_string();
        assert!(shown.contains("WMM-2020"));
        assert!(shown.contains("19 x 37"));
    }
}
