//! Coordinate mapping and bilinear interpolation over the global grid
//!
//! A query position is first located on the grid as a [`GridCell`]: the indices of the
//! south-west corner of the enclosing cell plus the fractional offsets inside it. The same cell
//! is then used to interpolate every grid of a [`MagneticTable`](crate::table::MagneticTable),
//! so one query always reads all three quantities at exactly the same place.
//!
//! Latitude is not cyclic, so values beyond the poles are clamped. Longitude is cyclic and is
//! wrapped into [-180, 180) before indexing.
use crate::table::{
    Grid, LATITUDE_DIMENSION, LONGITUDE_DIMENSION, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE,
    MIN_LONGITUDE, SAMPLING_RESOLUTION,
};
use crate::LookupError;

/// Location of a query point on the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    /// Row of the southern edge of the cell, in `[0, 17]`
    pub lat_index: usize,
    /// Column of the western edge of the cell, in `[0, 35]`
    pub lon_index: usize,
    /// Offset from the southern edge as a fraction of the cell height, in `[0, 1]`
    pub lat_frac: f64,
    /// Offset from the western edge as a fraction of the cell width, in `[0, 1]`
    pub lon_frac: f64,
}
impl GridCell {
    /// Locate a geodetic position on the grid.
    ///
    /// Latitude is clamped to [-90, 90] and longitude wrapped into [-180, 180). At exactly 90
    /// degrees the cell is the last one (row 17) with `lat_frac == 1`, so the interpolation
    /// still reads row 18.
    ///
    /// # Arguments
    /// - `latitude` - WGS84 latitude in degrees
    /// - `longitude` - WGS84 longitude in degrees
    ///
    /// # Returns
    /// The enclosing cell, or [`LookupError::InvalidArgument`] if either coordinate is NaN or
    /// infinite.
    ///
    /// # Example
    /// ```rust
    /// use geomag::grid::GridCell;
    /// let cell = GridCell::locate(45.0, 190.0).unwrap();
    /// assert_eq!(cell.lat_index, 13);
    /// assert_eq!(cell.lon_index, 1);
    /// assert_eq!(cell.lat_frac, 0.5);
    /// assert_eq!(cell.lon_frac, 0.0);
    /// ```
    pub fn locate(latitude: f64, longitude: f64) -> Result<GridCell, LookupError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(LookupError::InvalidArgument {
                latitude,
                longitude,
            });
        }
        let (lat_index, lat_frac) = axis_position(
            clamp_latitude(latitude) - MIN_LATITUDE,
            LATITUDE_DIMENSION - 2,
        );
        let (lon_index, lon_frac) = axis_position(
            wrap_longitude(longitude) - MIN_LONGITUDE,
            LONGITUDE_DIMENSION - 2,
        );
        Ok(GridCell {
            lat_index,
            lon_index,
            lat_frac,
            lon_frac,
        })
    }
    /// Whether the query sits exactly on a stored sample
    pub fn is_node(&self) -> bool {
        (self.lat_frac == 0.0 || self.lat_frac == 1.0)
            && (self.lon_frac == 0.0 || self.lon_frac == 1.0)
    }
}

/// Split an offset from the axis origin into a cell index in `[0, max_index]` and a fraction.
fn axis_position(offset: f64, max_index: usize) -> (usize, f64) {
    let cell = (offset / SAMPLING_RESOLUTION).floor().max(0.0);
    let index = (cell as usize).min(max_index);
    let frac = (offset - index as f64 * SAMPLING_RESOLUTION) / SAMPLING_RESOLUTION;
    (index, frac.clamp(0.0, 1.0))
}

/// Clamp latitude to [-90, 90] degrees
///
/// # Example
/// ```rust
/// use geomag::grid::clamp_latitude;
/// assert_eq!(clamp_latitude(95.0), 90.0);
/// assert_eq!(clamp_latitude(-95.0), -90.0);
/// assert_eq!(clamp_latitude(45.0), 45.0);
/// ```
pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.clamp(MIN_LATITUDE, MAX_LATITUDE)
}

/// Wrap longitude into the half-open range [-180, 180) degrees
///
/// Unlike a symmetric wrap, +180 maps onto -180 so each meridian has one representation.
///
/// # Example
/// ```rust
/// use geomag::grid::wrap_longitude;
/// assert_eq!(wrap_longitude(190.0), -170.0);
/// assert_eq!(wrap_longitude(180.0), -180.0);
/// assert_eq!(wrap_longitude(-190.0), 170.0);
/// assert_eq!(wrap_longitude(-540.0), -180.0);
/// ```
pub fn wrap_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid rounds up to 360 for inputs a hair below a multiple of 360
    if wrapped >= MAX_LONGITUDE {
        MIN_LONGITUDE
    } else {
        wrapped
    }
}

/// Bilinearly interpolate one grid at `cell`.
///
/// Longitude is interpolated first along the southern and northern edges of the cell, then the
/// two results are blended along latitude. All arithmetic is done in `f64` on the raw samples,
/// so the result stays in the grid's fixed-point scale and is exact at the nodes.
///
/// # Example
/// ```rust
/// use geomag::grid::{GridCell, interpolate};
/// use geomag::table::{Quantity, WMM2020};
/// let cell = GridCell::locate(0.0, 0.0).unwrap();
/// let raw = interpolate(WMM2020.grid(Quantity::Declination), &cell);
/// assert_eq!(raw, -787.0);
/// ```
pub fn interpolate(grid: &Grid, cell: &GridCell) -> f64 {
    let south = &grid[cell.lat_index];
    let north = &grid[cell.lat_index + 1];
    let v00 = f64::from(south[cell.lon_index]);
    let v01 = f64::from(south[cell.lon_index + 1]);
    let v10 = f64::from(north[cell.lon_index]);
    let v11 = f64::from(north[cell.lon_index + 1]);
    let a = v00 + cell.lon_frac * (v01 - v00);
    let b = v10 + cell.lon_frac * (v11 - v10);
    a + cell.lat_frac * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// Grid whose raw value is `row * 100 + col`, linear along both axes
    fn ramp() -> Grid {
        let mut grid: Grid = [[0; LONGITUDE_DIMENSION]; LATITUDE_DIMENSION];
        for (row, values) in grid.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = (row * 100 + col) as i16;
            }
        }
        grid
    }
    #[test]
    fn locate_origin() {
        let cell = GridCell::locate(-90.0, -180.0).unwrap();
        assert_eq!(
            cell,
            GridCell {
                lat_index: 0,
                lon_index: 0,
                lat_frac: 0.0,
                lon_frac: 0.0
            }
        );
        assert!(cell.is_node());
    }
    #[test]
    fn locate_north_pole() {
        let cell = GridCell::locate(90.0, 0.0).unwrap();
        assert_eq!(cell.lat_index, 17);
        assert_eq!(cell.lat_frac, 1.0);
        assert_eq!(cell.lon_index, 18);
        assert!(cell.is_node());
    }
    #[test]
    fn locate_clamps_latitude() {
        assert_eq!(
            GridCell::locate(95.0, 0.0).unwrap(),
            GridCell::locate(90.0, 0.0).unwrap()
        );
        assert_eq!(
            GridCell::locate(-1000.0, 0.0).unwrap(),
            GridCell::locate(-90.0, 0.0).unwrap()
        );
    }
    #[test]
    fn locate_wraps_longitude() {
        assert_eq!(
            GridCell::locate(10.0, 180.0).unwrap(),
            GridCell::locate(10.0, -180.0).unwrap()
        );
        assert_eq!(
            GridCell::locate(10.0, 190.0).unwrap(),
            GridCell::locate(10.0, -170.0).unwrap()
        );
        let cell = GridCell::locate(0.0, 175.0).unwrap();
        assert_eq!(cell.lon_index, 35);
        assert_eq!(cell.lon_frac, 0.5);
    }
    #[test]
    fn locate_fractions() {
        let cell = GridCell::locate(-85.0, -177.5).unwrap();
        assert_eq!(cell.lat_index, 0);
        assert_eq!(cell.lon_index, 0);
        assert_approx_eq!(cell.lat_frac, 0.5);
        assert_approx_eq!(cell.lon_frac, 0.25);
        assert!(!cell.is_node());
    }
    #[test]
    fn locate_rejects_non_finite() {
        for (lat, lon) in [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                GridCell::locate(lat, lon),
                Err(LookupError::InvalidArgument { .. })
            ));
        }
    }
    #[test]
    fn wrap_longitude_range() {
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(-180.0), -180.0);
        assert_eq!(wrap_longitude(180.0), -180.0);
        assert_eq!(wrap_longitude(359.0), -1.0);
        assert_eq!(wrap_longitude(720.0 + 30.0), 30.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
    }
    #[test]
    fn wrap_longitude_just_west_of_antimeridian() {
        let lon = -180.0 - 2f64.powi(-45);
        assert_eq!(wrap_longitude(lon), -180.0);
        let cell = GridCell::locate(0.0, lon).unwrap();
        assert_eq!(cell.lon_index, 0);
        assert_eq!(cell.lon_frac, 0.0);
    }
    #[test]
    fn interpolate_nodes_exact() {
        let grid = ramp();
        for row in 0..LATITUDE_DIMENSION {
            for col in 0..LONGITUDE_DIMENSION - 1 {
                let lat = MIN_LATITUDE + row as f64 * SAMPLING_RESOLUTION;
                let lon = MIN_LONGITUDE + col as f64 * SAMPLING_RESOLUTION;
                let cell = GridCell::locate(lat, lon).unwrap();
                assert_eq!(interpolate(&grid, &cell), f64::from(grid[row][col]));
            }
        }
    }
    #[test]
    fn interpolate_linear_ramp() {
        // On a plane the bilinear estimate is exact everywhere.
        let grid = ramp();
        let cell = GridCell::locate(-63.0, -144.0).unwrap();
        // row 2.7, column 3.6
        assert_approx_eq!(interpolate(&grid, &cell), 270.0 + 3.6, 1e-9);
    }
    #[test]
    fn interpolate_far_edge_column() {
        let mut grid: Grid = [[0; LONGITUDE_DIMENSION]; LATITUDE_DIMENSION];
        for row in grid.iter_mut() {
            row[35] = 100;
            row[36] = 300;
        }
        let cell = GridCell::locate(0.0, 175.0).unwrap();
        assert_approx_eq!(interpolate(&grid, &cell), 200.0);
    }
    #[test]
    fn interpolate_axis_order_is_irrelevant() {
        let grid = ramp();
        let cell = GridCell::locate(12.3, 45.6).unwrap();
        let south = &grid[cell.lat_index];
        let north = &grid[cell.lat_index + 1];
        let west = f64::from(south[cell.lon_index]) * (1.0 - cell.lat_frac)
            + f64::from(north[cell.lon_index]) * cell.lat_frac;
        let east = f64::from(south[cell.lon_index + 1]) * (1.0 - cell.lat_frac)
            + f64::from(north[cell.lon_index + 1]) * cell.lat_frac;
        let latitude_first = west + cell.lon_frac * (east - west);
        assert_approx_eq!(interpolate(&grid, &cell), latitude_first, 1e-9);
    }
}
