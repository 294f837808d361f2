//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempconv::scales::{Catalog, Scale};
use tempfile::TempDir;

pub const SAMPLE_HEADER: &str = "Name;Abbreviation;Melting;Boiling";

/// Write a scale table with the given data rows under a fresh temp directory
pub fn create_scale_table(rows: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scales.csv");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", SAMPLE_HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    drop(file);

    (temp_dir, path)
}

/// Celsius, Fahrenheit and Kelvin, in that order
pub fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        Scale::new("Celsius", "C", 0.0, 100.0),
        Scale::new("Fahrenheit", "F", 32.0, 212.0),
        Scale::new("Kelvin", "K", 273.15, 373.15),
    ])
}

/// Every scale shipped in the default table
pub fn create_full_catalog() -> Catalog {
    Catalog::new(vec![
        Scale::new("Celsius", "C", 0.0, 100.0),
        Scale::new("Fahrenheit", "F", 32.0, 212.0),
        Scale::new("Kelvin", "K", 273.15, 373.15),
        Scale::new("Rankine", "Ra", 491.67, 671.67),
        Scale::new("Réaumur", "Ré", 0.0, 80.0),
        Scale::new("Rømer", "Rø", 7.5, 60.0),
        Scale::new("Newton", "N", 0.0, 33.0),
        Scale::new("Delisle", "De", 150.0, 0.0),
    ])
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} within {}, got {}",
        expected,
        tolerance,
        actual
    );
}
