//! Locality listing lines.
//!
//! Layout: `NAME... LAT LON CODE SECTOR...`, e.g.
//! `ABRANTES 392700N 0081100W ABRAN SECTOR1`. Other numeric codes share the
//! line, so only 6-7 digit bearings count and the *first* two are the pair.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{joined, Category, Extraction, GeoPoint, GeoPointBuilder};
use crate::config::LocalityRules;
use crate::geo::{decode, Axis};

lazy_static! {
    static ref COORD_REGEX: Regex = Regex::new(r"^[0-9]{6,7}(?:\.[0-9]+)?[NSEW]$").unwrap();
}

pub fn parse_locality_line(line: &str, rules: &LocalityRules) -> Option<GeoPoint> {
    let line = line.trim();
    if line.is_empty() || rules.is_noise(line) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (lat_at, lon_at) = match tokens
        .iter()
        .positions(|t| COORD_REGEX.is_match(t))
        .next_tuple()
    {
        Some(pair) => pair,
        None => {
            debug!("Locality line without a coordinate pair: {}", line);
            return None;
        }
    };

    let (latitude, longitude) = match (
        decode(tokens[lat_at], Axis::Latitude),
        decode(tokens[lon_at], Axis::Longitude),
    ) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            debug!(
                "Locality line with undecodable coordinates {} {}: {}",
                tokens[lat_at], tokens[lon_at], line
            );
            return None;
        }
    };

    let mut point = GeoPointBuilder::default();
    point
        .source(Category::Locality)
        .name(tokens[..lat_at].join(" "))
        .latitude(latitude)
        .longitude(longitude);
    if let Some(code) = tokens.get(lon_at + 1) {
        point.identifier(*code);
    }
    if let Some(sector) = tokens.get(lon_at + 2..).and_then(joined) {
        point.secondary(sector);
    }
    point.build().ok()
}

pub fn extract_localities<I, S>(lines: I, rules: &LocalityRules) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Extraction::collect(Category::Locality, lines, |line| {
        parse_locality_line(line.as_ref(), rules)
    })
}
