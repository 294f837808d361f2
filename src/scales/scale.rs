//! Scale records and the read-only catalog they live in

use std::ops::Index;

/// A linear temperature scale defined by two reference points.
///
/// Both points are expressed in the scale's own units. Conversion divides
/// by `boiling_point - melting_point`, so the two must differ.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub name: String,
    pub abbreviation: String,
    pub melting_point: f64,
    pub boiling_point: f64,
}

impl Scale {
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        melting_point: f64,
        boiling_point: f64,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            melting_point,
            boiling_point,
        }
    }

    /// Distance between the reference points, in this scale's units
    pub fn span(&self) -> f64 {
        self.boiling_point - self.melting_point
    }

    /// True when the reference points coincide and the scale cannot be converted from
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }
}

/// Ordered, immutable list of scales.
///
/// Positions in the catalog are the indices shown to and typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    scales: Vec<Scale>,
}

impl Catalog {
    pub fn new(scales: Vec<Scale>) -> Self {
        Self { scales }
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scale> {
        self.scales.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scale> {
        self.scales.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = Scale;

    fn index(&self, index: usize) -> &Scale {
        &self.scales[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Scale;
    type IntoIter = std::slice::Iter<'a, Scale>;

    fn into_iter(self) -> Self::IntoIter {
        self.scales.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_and_degenerate() {
        let celsius = Scale::new("Celsius", "C", 0.0, 100.0);
        assert_eq!(celsius.span(), 100.0);
        assert!(!celsius.is_degenerate());

        let flat = Scale::new("Flat", "X", 5.0, 5.0);
        assert!(flat.is_degenerate());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            Scale::new("Celsius", "C", 0.0, 100.0),
            Scale::new("Fahrenheit", "F", 32.0, 212.0),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Celsius");
        assert_eq!(catalog.get(1).map(|s| s.abbreviation.as_str()), Some("F"));
        assert!(catalog.get(2).is_none());

        let names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Celsius", "Fahrenheit"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.iter().next().is_none());
    }
}
