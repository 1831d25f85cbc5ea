use derive_builder::Builder;
use serde::Serialize;
use tracing::info;

use crate::geo::LatLon;

pub mod aerodrome;
pub mod locality;
pub mod tabular;

pub use aerodrome::{extract_aerodromes, parse_aerodrome_line};
pub use locality::{extract_localities, parse_locality_line};
pub use tabular::extract_rows;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "AD/HEL/ULM")]
    Aerodrome,
    #[serde(rename = "Localidade")]
    Locality,
}

impl From<Category> for &str {
    fn from(x: Category) -> &'static str {
        match x {
            Category::Aerodrome => "AD/HEL/ULM",
            Category::Locality => "Localidade",
        }
    }
}

/// A decoded reference point. Only ever built with both coordinates.
#[derive(Clone, Debug, PartialEq, Builder, Serialize)]
pub struct GeoPoint {
    pub source: Category,
    #[builder(setter(into, strip_option), default)]
    pub identifier: Option<String>,
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into, strip_option), default)]
    pub secondary: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn latlon(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }
}

/// Points pulled from one source, with the line count that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub category: Category,
    pub points: Vec<GeoPoint>,
    pub lines_in: usize,
}

impl Extraction {
    pub fn records_out(&self) -> usize {
        self.points.len()
    }

    pub fn dropped(&self) -> usize {
        self.lines_in - self.points.len()
    }

    pub(crate) fn collect<I, T, F>(category: Category, lines: I, mut parse: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Option<GeoPoint>,
    {
        let mut lines_in = 0;
        let points = lines
            .into_iter()
            .inspect(|_| lines_in += 1)
            .filter_map(&mut parse)
            .collect::<Vec<_>>();

        info!(
            "{}: {} lines in, {} records out",
            Into::<&str>::into(category),
            lines_in,
            points.len()
        );

        Extraction {
            category,
            points,
            lines_in,
        }
    }
}

/// Whitespace-joined tokens, `None` when empty.
pub(crate) fn joined(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_coordinates() {
        let missing = GeoPointBuilder::default()
            .source(Category::Locality)
            .name("ABRANTES")
            .latitude(39.45)
            .build();
        assert!(missing.is_err());

        let point = GeoPointBuilder::default()
            .source(Category::Locality)
            .name("ABRANTES")
            .identifier("ABRAN")
            .latitude(39.45)
            .longitude(-8.183333)
            .build()
            .unwrap();
        assert_eq!(point.identifier.as_deref(), Some("ABRAN"));
        assert_eq!(point.secondary, None);
    }

    #[test]
    fn counts_lines_in_and_out() {
        let lines = vec!["a", "b", "c"];
        let ex = Extraction::collect(Category::Aerodrome, lines, |l| {
            if l == "b" {
                GeoPointBuilder::default()
                    .source(Category::Aerodrome)
                    .name(l)
                    .latitude(1.0)
                    .longitude(2.0)
                    .build()
                    .ok()
            } else {
                None
            }
        });
        assert_eq!(ex.lines_in, 3);
        assert_eq!(ex.records_out(), 1);
        assert_eq!(ex.dropped(), 2);
    }

    #[test]
    fn category_labels() {
        assert_eq!(Into::<&str>::into(Category::Aerodrome), "AD/HEL/ULM");
        assert_eq!(Into::<&str>::into(Category::Locality), "Localidade");
    }
}
