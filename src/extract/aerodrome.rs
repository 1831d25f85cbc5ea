//! AD/HEL/ULM listing lines.
//!
//! Layout: `IDENT NAME... LAT LON CITY...`, e.g.
//! `LPPT LISBOA 384643N 0091342W LISBOA`. Lines may carry extra
//! bearing-shaped tokens, so the coordinates are the *last* two of them.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{joined, Category, Extraction, GeoPoint, GeoPointBuilder};
use crate::config::AerodromeRules;
use crate::geo::{decode, Axis};

lazy_static! {
    static ref COORD_REGEX: Regex = Regex::new(r"^[0-9]+(?:\.[0-9]+)?[NSEW]$").unwrap();
    static ref IDENT_REGEX: Regex = Regex::new(r"^[A-Z0-9]{4,}$").unwrap();
}

pub fn parse_aerodrome_line(line: &str, rules: &AerodromeRules) -> Option<GeoPoint> {
    let line = line.trim();
    if line.is_empty() || rules.is_noise(line) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let coords: Vec<usize> = tokens
        .iter()
        .positions(|t| COORD_REGEX.is_match(t))
        .collect();
    if coords.len() < 2 {
        debug!("AD line without a coordinate pair: {}", line);
        return None;
    }

    let first = coords[0];
    let (lat_at, lon_at) = (coords[coords.len() - 2], coords[coords.len() - 1]);
    let (latitude, longitude) = match (
        decode(tokens[lat_at], Axis::Latitude),
        decode(tokens[lon_at], Axis::Longitude),
    ) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            debug!(
                "AD line with undecodable coordinates {} {}: {}",
                tokens[lat_at], tokens[lon_at], line
            );
            return None;
        }
    };

    // The first slot is the ident column even when it holds something else.
    let name = tokens.get(1..first).map(|t| t.join(" ")).unwrap_or_default();

    let mut point = GeoPointBuilder::default();
    point
        .source(Category::Aerodrome)
        .name(name)
        .latitude(latitude)
        .longitude(longitude);
    if IDENT_REGEX.is_match(tokens[0]) {
        point.identifier(tokens[0]);
    }
    if let Some(city) = joined(&tokens[lon_at + 1..]) {
        point.secondary(city);
    }
    point.build().ok()
}

pub fn extract_aerodromes<I, S>(lines: I, rules: &AerodromeRules) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Extraction::collect(Category::Aerodrome, lines, |line| {
        parse_aerodrome_line(line.as_ref(), rules)
    })
}
