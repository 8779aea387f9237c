//! Lookups over tables other than the compiled-in one
//!
//! The engine borrows whatever table it is given, so a regenerated table of the same shape, or a
//! small synthetic test double, must work without code changes.
use assert_approx_eq::assert_approx_eq;

use geomag::table::{
    LONGITUDE_DIMENSION, MagneticTable, Quantity, TableInfo, latitude_of_row,
    longitude_of_column,
};
use geomag::{GeomagneticLookup, WMM2020};

fn info(model: &'static str) -> TableInfo {
    TableInfo {
        model,
        version: "test",
        epoch: 2025.0,
    }
}

/// A table whose declination follows longitude, inclination follows latitude, and strength is
/// constant. Column 36 repeats column 0.
fn planar() -> MagneticTable {
    MagneticTable::from_fn(info("planar"), |row, col| {
        let col = col % (LONGITUDE_DIMENSION - 1);
        ((col as i16) * 100, (row as i16) * 1000 - 9000, 4500)
    })
}

#[test]
fn synthetic_nodes_decode_exactly() {
    let table = planar();
    let engine = GeomagneticLookup::new(&table);
    let field = engine.lookup(latitude_of_row(4), longitude_of_column(7)).unwrap();
    assert_eq!(field.declination, 0.07);
    assert_eq!(field.inclination, -0.5);
    assert_eq!(field.strength, 450.0);
}

#[test]
fn synthetic_interpolation_is_linear() {
    let table = planar();
    let engine = GeomagneticLookup::new(&table);
    // 7.5 degrees east of 10 W and 7.5 degrees north of 30 N
    let field = engine.lookup(37.5, -2.5).unwrap();
    assert_approx_eq!(field.declination, 0.1775, 1e-12);
    assert_approx_eq!(field.inclination, 0.375, 1e-12);
    assert_approx_eq!(field.strength, 450.0, 1e-12);
}

#[test]
fn synthetic_seam() {
    let table = planar();
    assert!(table.seam_is_consistent());
    let engine = GeomagneticLookup::new(&table);
    // Crossing the seam interpolates between column 35 (3500) and column 36 (0)
    let field = engine.lookup(0.0, 175.0).unwrap();
    assert_approx_eq!(field.declination, 0.175, 1e-12);
    assert_eq!(engine.lookup(0.0, 180.0), engine.lookup(0.0, -180.0));
}

#[test]
fn regenerated_table_swaps_in() {
    // Same shape, every value shifted: a newer epoch of the same model.
    let newer = MagneticTable::from_fn(info("WMM-2025"), |row, col| {
        (
            WMM2020.sample(Quantity::Declination, row, col) + 10,
            WMM2020.sample(Quantity::Inclination, row, col),
            WMM2020.sample(Quantity::Strength, row, col) - 20,
        )
    });
    let old = GeomagneticLookup::wmm2020().lookup(12.0, 34.0).unwrap();
    let new = GeomagneticLookup::new(&newer).lookup(12.0, 34.0).unwrap();
    assert_approx_eq!(new.declination - old.declination, 0.001, 1e-12);
    assert_eq!(new.inclination, old.inclination);
    assert_approx_eq!(new.strength - old.strength, -2.0, 1e-9);
    assert_eq!(GeomagneticLookup::new(&newer).table().info().model, "WMM-2025");
}
