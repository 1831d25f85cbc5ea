use lazy_static::lazy_static;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

/// Which half of a coordinate pair a bearing token encodes. Longitudes carry
/// three degree digits, latitudes two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn degree_digits(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }
}

/// Decode a single bearing token into signed decimal degrees.
///
/// Digits are read positionally, hemisphere letter last (any case): two
/// (latitude) or three (longitude) degree digits, two minute digits, and
/// everything after that as seconds, fraction included. A run of exactly
/// degrees+minutes (`DDMMH` / `DDDMMH`) has no seconds.
///
/// Anything else yields `None`, which callers treat as a missing coordinate.
pub fn decode(token: &str, axis: Axis) -> Option<f64> {
    lazy_static! {
        static ref BEARING_REGEX: Regex =
            Regex::new(r"(?i)^(?P<body>(?P<int>[0-9]+)(?:\.[0-9]+)?)(?P<hemi>[NSEW])$").unwrap();
    }

    let cap = BEARING_REGEX.captures(token.trim())?;
    let (body, int, hemi) = (&cap["body"], &cap["int"], &cap["hemi"]);
    let has_fraction = body.len() > int.len();
    let d = axis.degree_digits();

    if int.len() < d + 2 {
        return None;
    }
    let seconds = if int.len() == d + 2 && !has_fraction {
        0.0
    } else {
        body[d + 2..].parse::<f64>().ok()?
    };

    let degrees: f64 = int[..d].parse::<u32>().ok()?.into();
    let minutes: f64 = int[d..d + 2].parse::<u32>().ok()?.into();

    let mut dd = degrees + minutes / 60.0 + seconds / 3600.0;
    if hemi.eq_ignore_ascii_case("S") || hemi.eq_ignore_ascii_case("W") {
        dd = -dd;
    }
    Some(dd)
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    //Ex: 384643N 0091342W
    pub fn from_tokens(lat: &str, lon: &str) -> Option<Self> {
        match (decode(lat, Axis::Latitude), decode(lon, Axis::Longitude)) {
            (Some(lat), Some(lon)) => Some(LatLon(lat, lon)),
            _ => None,
        }
    }

    pub fn to_vrc(self) -> String {
        fn to_dms(dd: f64) -> (i32, i32, f64) {
            let d = dd.trunc() as i32;
            let m = (dd.abs() * 60.0).trunc() as i32 % 60;
            let s = (dd.abs() * 3600.0) % 60.0;
            (d, m, s)
        }

        let mut tmp = String::new();
        tmp += if self.0.is_sign_positive() { "N" } else { "S" };
        let (d, m, s) = to_dms(self.0);
        tmp += &format!("{:03}.{:02}.{:06.03}", d.abs(), m, s);

        tmp += " ";

        tmp += if self.1.is_sign_positive() { "E" } else { "W" };
        let (d, m, s) = to_dms(self.1);
        tmp += &format!("{:03}.{:02}.{:06.03}", d.abs(), m, s);
        tmp
    }
}
