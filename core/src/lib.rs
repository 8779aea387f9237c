//! Grid-based geomagnetic field lookup for navigation systems
//!
//! This crate provides an estimate of the Earth's magnetic field (declination, inclination, and
//! total field strength) at any geodetic position without network access or a full
//! spherical-harmonic model evaluation. The field is sampled offline from a geomagnetic model
//! (the World Magnetic Model, WMM) onto a coarse 10 degree global grid and compiled in as a
//! constant table. At runtime the grid is bilinearly interpolated to the query position.
//!
//! The engine is small and allocation free so it can sit in the inner loop of an attitude or
//! heading filter. Lookups are pure functions of the position and the table: any number of
//! threads may query the same table concurrently.
//!
//! Primarily built off of two crate dependencies:
//! - [`nav-types`](https://crates.io/crates/nav-types): geodetic position input.
//! - [`nalgebra`](https://crates.io/crates/nalgebra): field vector output in the local-level frame.
//!
//! # Table layout
//!
//! Each quantity is stored as a 19 x 37 grid of 16-bit fixed-point integers. Row `i` is latitude
//! $-90 + 10 i$ degrees and column `j` is longitude $-180 + 10 j$ degrees. Column 36 repeats
//! column 0, which is the same meridian. Angles are stored as radians times $10^4$ and strength
//! as milligauss times 10. See [`table`] for the details.
//!
//! # Lookup
//!
//! A query position is mapped onto the grid ([`grid::GridCell::locate`]): latitude is clamped to
//! the poles while longitude is wrapped modulo 360 degrees. The four nodes around the query are
//! blended first along longitude and then along latitude:
//!
//! $$
//! a = v_{00} + t_{\lambda} (v_{01} - v_{00}), \quad b = v_{10} + t_{\lambda} (v_{11} - v_{10}), \quad
//! v = a + t_{\phi} (b - a)
//! $$
//!
//! where $t_{\phi}$ and $t_{\lambda}$ are the fractional offsets inside the cell. At a grid node
//! the result is exactly the stored sample.
//!
//! # Example
//! ```rust
//! use geomag::GeomagneticLookup;
//! let lookup = GeomagneticLookup::default();
//! let field = lookup.lookup(0.0, 0.0).unwrap();
//! assert_eq!(field.declination, -0.0787);
//! ```
pub mod batch;
pub mod config;
pub mod grid;
pub mod table;
mod wmm;

use nalgebra::Vector3;
use nav_types::WGS84;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

use crate::grid::{GridCell, interpolate};
use crate::table::{MagneticTable, Quantity};

pub use crate::table::WMM2020;

/// Errors reported by a lookup
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum LookupError {
    /// Latitude or longitude was NaN or infinite. Finite out-of-range values are never an error.
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude} must be finite")]
    InvalidArgument { latitude: f64, longitude: f64 },
}

/// Magnetic field estimate at a single position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MagneticField {
    /// Declination in radians, positive east of true north
    pub declination: f64,
    /// Inclination (dip) in radians, positive downward
    pub inclination: f64,
    /// Total field strength in milligauss
    pub strength: f64,
}
impl Display for MagneticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MagneticField {{ declination: {:.4} deg, inclination: {:.4} deg, strength: {:.1} mG }}",
            self.declination_degrees(),
            self.inclination_degrees(),
            self.strength
        )
    }
}
impl MagneticField {
    /// Declination in degrees
    pub fn declination_degrees(&self) -> f64 {
        self.declination.to_degrees()
    }
    /// Inclination in degrees
    pub fn inclination_degrees(&self) -> f64 {
        self.inclination.to_degrees()
    }
    /// Total field strength in gauss
    pub fn strength_gauss(&self) -> f64 {
        self.strength * 1e-3
    }
    /// Total field strength in nanotesla
    pub fn strength_nanotesla(&self) -> f64 {
        self.strength * 100.0
    }
    /// Total field strength in tesla
    pub fn strength_tesla(&self) -> f64 {
        self.strength * 1e-7
    }
    /// Field vector in the local-level frame (North, East, Down), milligauss
    ///
    /// $$
    /// B = F \begin{bmatrix} \cos I \cos D \\\\ \cos I \sin D \\\\ \sin I \end{bmatrix}
    /// $$
    ///
    /// # Example
    /// ```rust
    /// use geomag::MagneticField;
    /// let field = MagneticField { declination: 0.0, inclination: 0.0, strength: 500.0 };
    /// let ned = field.ned_vector();
    /// assert_eq!(ned[0], 500.0);
    /// ```
    pub fn ned_vector(&self) -> Vector3<f64> {
        let horizontal = self.strength * self.inclination.cos();
        Vector3::new(
            horizontal * self.declination.cos(),
            horizontal * self.declination.sin(),
            self.strength * self.inclination.sin(),
        )
    }
}

/// Lookup engine over an injected, read-only [`MagneticTable`].
///
/// The engine only borrows the table, so it is `Copy` and can be handed to as many threads as
/// needed. [`Default`] binds the compiled-in [`WMM2020`] table.
#[derive(Clone, Copy, Debug)]
pub struct GeomagneticLookup<'a> {
    table: &'a MagneticTable,
}
impl Default for GeomagneticLookup<'static> {
    fn default() -> Self {
        GeomagneticLookup::wmm2020()
    }
}
impl GeomagneticLookup<'static> {
    /// Engine backed by the compiled-in WMM-2020 table
    pub fn wmm2020() -> Self {
        GeomagneticLookup { table: &WMM2020 }
    }
}
impl<'a> GeomagneticLookup<'a> {
    /// Create an engine over `table`
    ///
    /// The last longitude column of every grid must repeat the first one (both sit on the
    /// antimeridian), otherwise lookups at +180 and -180 disagree. See
    /// [`MagneticTable::seam_is_consistent`].
    ///
    /// # Panics
    /// In debug builds, if the seam column of `table` does not repeat column 0.
    ///
    /// # Example
    /// ```rust
    /// use geomag::GeomagneticLookup;
    /// use geomag::table::{MagneticTable, TableInfo};
    /// let info = TableInfo { model: "flat", version: "0", epoch: 2020.0 };
    /// let table = MagneticTable::from_fn(info, |_, _| (0, 0, 5000));
    /// let lookup = GeomagneticLookup::new(&table);
    /// assert_eq!(lookup.lookup(12.3, -45.6).unwrap().strength, 500.0);
    /// ```
    pub fn new(table: &'a MagneticTable) -> Self {
        debug_assert!(
            table.seam_is_consistent(),
            "table {} does not repeat column 0 in its seam column",
            table.info()
        );
        GeomagneticLookup { table }
    }
    /// The table backing this engine
    pub fn table(&self) -> &'a MagneticTable {
        self.table
    }
    /// Estimate the magnetic field at a position.
    ///
    /// Latitude is clamped to [-90, 90] and longitude wrapped modulo 360, so every finite input
    /// yields a result. At a grid node the result decodes the stored sample exactly.
    ///
    /// # Arguments
    /// - `latitude` - WGS84 latitude in degrees
    /// - `longitude` - WGS84 longitude in degrees
    ///
    /// # Returns
    /// The decoded field, or [`LookupError::InvalidArgument`] for NaN or infinite input.
    ///
    /// # Example
    /// ```rust
    /// use geomag::GeomagneticLookup;
    /// let lookup = GeomagneticLookup::default();
    /// let field = lookup.lookup(-90.0, -180.0).unwrap();
    /// assert_eq!(field.declination, 2.6026);
    /// assert!(lookup.lookup(f64::NAN, 0.0).is_err());
    /// ```
    pub fn lookup(&self, latitude: f64, longitude: f64) -> Result<MagneticField, LookupError> {
        let cell = GridCell::locate(latitude, longitude)?;
        Ok(MagneticField {
            declination: self.decode_at(Quantity::Declination, &cell),
            inclination: self.decode_at(Quantity::Inclination, &cell),
            strength: self.decode_at(Quantity::Strength, &cell),
        })
    }
    /// Estimate the magnetic field at a geodetic position. Altitude is ignored.
    ///
    /// # Example
    /// ```rust
    /// use geomag::GeomagneticLookup;
    /// use nav_types::WGS84;
    /// let lookup = GeomagneticLookup::default();
    /// let position = WGS84::from_degrees_and_meters(0.0, 0.0, 1000.0);
    /// let field = lookup.lookup_position(&position).unwrap();
    /// assert_eq!(field, lookup.lookup(0.0, 0.0).unwrap());
    /// ```
    pub fn lookup_position(&self, position: &WGS84<f64>) -> Result<MagneticField, LookupError> {
        self.lookup(position.latitude_degrees(), position.longitude_degrees())
    }
    /// Declination in radians at a position
    pub fn declination(&self, latitude: f64, longitude: f64) -> Result<f64, LookupError> {
        self.decoded(Quantity::Declination, latitude, longitude)
    }
    /// Inclination in radians at a position
    pub fn inclination(&self, latitude: f64, longitude: f64) -> Result<f64, LookupError> {
        self.decoded(Quantity::Inclination, latitude, longitude)
    }
    /// Total field strength in milligauss at a position
    pub fn strength(&self, latitude: f64, longitude: f64) -> Result<f64, LookupError> {
        self.decoded(Quantity::Strength, latitude, longitude)
    }
    /// Interpolated raw fixed-point value of one quantity, before unit decoding
    ///
    /// # Example
    /// ```rust
    /// use geomag::GeomagneticLookup;
    /// use geomag::table::Quantity;
    /// let lookup = GeomagneticLookup::default();
    /// assert_eq!(lookup.raw(Quantity::Declination, 0.0, 0.0).unwrap(), -787.0);
    /// ```
    pub fn raw(&self, quantity: Quantity, latitude: f64, longitude: f64) -> Result<f64, LookupError> {
        let cell = GridCell::locate(latitude, longitude)?;
        Ok(interpolate(self.table.grid(quantity), &cell))
    }
    fn decoded(&self, quantity: Quantity, latitude: f64, longitude: f64) -> Result<f64, LookupError> {
        let cell = GridCell::locate(latitude, longitude)?;
        Ok(self.decode_at(quantity, &cell))
    }
    fn decode_at(&self, quantity: Quantity, cell: &GridCell) -> f64 {
        quantity.decode(interpolate(self.table.grid(quantity), cell))
    }
}

/// Magnetic declination in degrees from the WMM-2020 table
///
/// # Example
/// ```rust
/// let declination = geomag::declination_degrees(45.0, -75.0).unwrap();
/// assert!(declination < 0.0); // west in eastern North America
/// ```
pub fn declination_degrees(latitude: f64, longitude: f64) -> Result<f64, LookupError> {
    Ok(GeomagneticLookup::wmm2020()
        .declination(latitude, longitude)?
        .to_degrees())
}
/// Magnetic inclination in degrees from the WMM-2020 table
pub fn inclination_degrees(latitude: f64, longitude: f64) -> Result<f64, LookupError> {
    Ok(GeomagneticLookup::wmm2020()
        .inclination(latitude, longitude)?
        .to_degrees())
}
/// Total field strength in gauss from the WMM-2020 table
pub fn strength_gauss(latitude: f64, longitude: f64) -> Result<f64, LookupError> {
    Ok(GeomagneticLookup::wmm2020()
        .lookup(latitude, longitude)?
        .strength_gauss())
}
/// Total field strength in tesla from the WMM-2020 table
pub fn strength_tesla(latitude: f64, longitude: f64) -> Result<f64, LookupError> {
    Ok(GeomagneticLookup::wmm2020()
        .lookup(latitude, longitude)?
        .strength_tesla())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableInfo;
    use assert_approx_eq::assert_approx_eq;

    fn synthetic() -> MagneticTable {
        let info = TableInfo {
            model: "synthetic",
            version: "test",
            epoch: 2020.0,
        };
        MagneticTable::from_fn(info, |row, col| {
            let col = col % 36;
            ((col * 100) as i16, (row * 1000) as i16, 5000)
        })
    }
    #[test]
    fn concrete_declination_samples() {
        let lookup = GeomagneticLookup::default();
        assert_eq!(lookup.lookup(-90.0, -180.0).unwrap().declination, 2.6026);
        assert_eq!(lookup.lookup(0.0, 0.0).unwrap().declination, -0.0787);
        assert_eq!(lookup.declination(0.0, 0.0).unwrap(), -0.0787);
    }
    #[test]
    fn per_quantity_matches_lookup() {
        let lookup = GeomagneticLookup::default();
        let field = lookup.lookup(37.4, -122.1).unwrap();
        assert_eq!(lookup.declination(37.4, -122.1).unwrap(), field.declination);
        assert_eq!(lookup.inclination(37.4, -122.1).unwrap(), field.inclination);
        assert_eq!(lookup.strength(37.4, -122.1).unwrap(), field.strength);
    }
    #[test]
    fn invalid_argument() {
        let lookup = GeomagneticLookup::default();
        let err = lookup.lookup(f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, LookupError::InvalidArgument { .. }));
        assert!(lookup.strength(0.0, f64::INFINITY).is_err());
        assert!(lookup.raw(Quantity::Inclination, f64::NEG_INFINITY, 0.0).is_err());
        assert!(err.to_string().contains("must be finite"));
    }
    #[test]
    fn synthetic_table() {
        let table = synthetic();
        let lookup = GeomagneticLookup::new(&table);
        // halfway between columns 18 and 19 and rows 9 and 10
        let field = lookup.lookup(5.0, 5.0).unwrap();
        assert_approx_eq!(field.declination, 1850.0 / 10_000.0);
        assert_approx_eq!(field.inclination, 9500.0 / 10_000.0);
        assert_approx_eq!(field.strength, 500.0);
        // the synthetic seam is consistent, so +/-180 agree
        assert_eq!(lookup.lookup(20.0, 180.0), lookup.lookup(20.0, -180.0));
    }
    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "seam column")]
    fn inconsistent_seam_is_rejected() {
        let info = TableInfo {
            model: "torn",
            version: "test",
            epoch: 2020.0,
        };
        // column 36 holds 3600 while column 0 holds 0
        let table = MagneticTable::from_fn(info, |_, col| ((col * 100) as i16, 0, 5000));
        let _ = GeomagneticLookup::new(&table);
    }
    #[test]
    fn unit_conversions() {
        let field = MagneticField {
            declination: std::f64::consts::FRAC_PI_2,
            inclination: std::f64::consts::FRAC_PI_4,
            strength: 500.0,
        };
        assert_approx_eq!(field.declination_degrees(), 90.0);
        assert_approx_eq!(field.inclination_degrees(), 45.0);
        assert_approx_eq!(field.strength_gauss(), 0.5);
        assert_approx_eq!(field.strength_nanotesla(), 50_000.0);
        assert_approx_eq!(field.strength_tesla(), 5e-5);
    }
    #[test]
    fn ned_vector() {
        let field = MagneticField {
            declination: 0.1,
            inclination: 1.1,
            strength: 480.0,
        };
        let ned = field.ned_vector();
        assert_approx_eq!(ned.norm(), 480.0, 1e-9);
        assert_approx_eq!(ned[1].atan2(ned[0]), 0.1, 1e-12);
        let horizontal = (ned[0].powi(2) + ned[1].powi(2)).sqrt();
        assert_approx_eq!(ned[2].atan2(horizontal), 1.1, 1e-12);
    }
    #[test]
    fn free_functions_use_wmm2020() {
        let field = GeomagneticLookup::wmm2020().lookup(51.5, -0.1).unwrap();
        assert_eq!(declination_degrees(51.5, -0.1).unwrap(), field.declination_degrees());
        assert_eq!(inclination_degrees(51.5, -0.1).unwrap(), field.inclination_degrees());
        assert_eq!(strength_gauss(51.5, -0.1).unwrap(), field.strength_gauss());
        assert_eq!(strength_tesla(51.5, -0.1).unwrap(), field.strength_tesla());
        assert!(declination_degrees(f64::NAN, 0.0).is_err());
    }
    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeomagneticLookup<'static>>();
        assert_send_sync::<MagneticTable>();
    }
}
