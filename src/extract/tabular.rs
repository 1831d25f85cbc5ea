//! Sources that already split records into cells.

use csv::StringRecord;
use tracing::debug;

use super::{Category, Extraction, GeoPoint, GeoPointBuilder};
use crate::columns::ColumnMapping;
use crate::geo::{decode, Axis};

/// A bearing token or a plain decimal (`38.7786`, `38,7786`). Decimals must
/// lie within ±90 (latitude) or ±180 (longitude).
fn coordinate(cell: &str, axis: Axis) -> Option<f64> {
    let cell = cell.trim();
    let limit = match axis {
        Axis::Latitude => 90.0,
        Axis::Longitude => 180.0,
    };
    decode(cell, axis).or_else(|| {
        cell.replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.abs() <= limit)
    })
}

fn cell<'r>(record: &'r StringRecord, index: Option<usize>) -> Option<&'r str> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn parse_row(record: &StringRecord, mapping: &ColumnMapping, category: Category) -> Option<GeoPoint> {
    let lat = cell(record, Some(mapping.latitude)).and_then(|c| coordinate(c, Axis::Latitude));
    let lon = cell(record, Some(mapping.longitude)).and_then(|c| coordinate(c, Axis::Longitude));
    let (latitude, longitude) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            debug!("Row without usable coordinates: {:?}", record);
            return None;
        }
    };

    let mut point = GeoPointBuilder::default();
    point
        .source(category)
        .name(cell(record, mapping.name).unwrap_or_default())
        .latitude(latitude)
        .longitude(longitude);
    if let Some(ident) = cell(record, mapping.ident) {
        point.identifier(ident);
    }
    if let Some(secondary) = cell(record, mapping.secondary) {
        point.secondary(secondary);
    }
    point.build().ok()
}

pub fn extract_rows<'a, I>(rows: I, mapping: &ColumnMapping, category: Category) -> Extraction
where
    I: IntoIterator<Item = &'a StringRecord>,
{
    Extraction::collect(category, rows, |row| parse_row(row, mapping, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> ColumnMapping {
        ColumnMapping {
            ident: Some(0),
            name: Some(1),
            secondary: None,
            latitude: 2,
            longitude: 3,
        }
    }

    #[test]
    fn bearing_cells() {
        let row = StringRecord::from(vec!["LPPT", "Lisboa", "384643N", "0091342W"]);
        let p = parse_row(&row, &mapping(), Category::Aerodrome).unwrap();
        assert_eq!(p.identifier.as_deref(), Some("LPPT"));
        assert_eq!(p.name, "Lisboa");
        assert!((p.longitude - -9.228333).abs() < 1e-6);
    }

    #[test]
    fn decimal_cells() {
        let row = StringRecord::from(vec!["", "Abrantes", " 39.45 ", "-8,183333"]);
        let p = parse_row(&row, &mapping(), Category::Locality).unwrap();
        assert_eq!(p.identifier, None);
        assert!((p.latitude - 39.45).abs() < 1e-9);
        assert!((p.longitude - -8.183333).abs() < 1e-9);
    }

    #[test]
    fn missing_coordinate_drops_row() {
        let short = StringRecord::from(vec!["LPPT", "Lisboa", "384643N"]);
        let bad = StringRecord::from(vec!["LPPT", "Lisboa", "384643N", "n/a"]);
        let ex = extract_rows(vec![&short, &bad], &mapping(), Category::Aerodrome);
        assert_eq!(ex.lines_in, 2);
        assert!(ex.points.is_empty());
    }

    #[test]
    fn decimals_out_of_range_drop_row() {
        // A bearing without its hemisphere letter reads as a huge decimal.
        let bare = StringRecord::from(vec!["LPPT", "Lisboa", "384643", "-9.228333"]);
        let lon = StringRecord::from(vec!["LPPT", "Lisboa", "38.778611", "-180.5"]);
        assert_eq!(parse_row(&bare, &mapping(), Category::Aerodrome), None);
        assert_eq!(parse_row(&lon, &mapping(), Category::Aerodrome), None);

        let edge = StringRecord::from(vec!["", "Polo", "-90", "180"]);
        let p = parse_row(&edge, &mapping(), Category::Locality).unwrap();
        assert_eq!((p.latitude, p.longitude), (-90.0, 180.0));
    }
}
