use crate::extract::{Category, GeoPoint};
use crate::geo::LatLon;

/// Mainland Portugal, used when there is nothing to average.
pub static DEFAULT_CENTER: (f64, f64) = (39.5, -8.0);

/// Case-insensitive substring search over name, identifier and secondary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(text: &str) -> Self {
        Query(text.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, point: &GeoPoint) -> bool {
        if self.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(self.0.as_str());
        hit(&point.name)
            || point.identifier.as_deref().map_or(false, hit)
            || point.secondary.as_deref().map_or(false, hit)
    }
}

/// Which categories are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layers {
    pub aerodromes: bool,
    pub localities: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Layers {
            aerodromes: true,
            localities: true,
        }
    }
}

impl Layers {
    pub fn shows(self, category: Category) -> bool {
        match category {
            Category::Aerodrome => self.aerodromes,
            Category::Locality => self.localities,
        }
    }
}

pub fn select<'a, I>(points: I, layers: Layers, query: &'a Query) -> impl Iterator<Item = &'a GeoPoint> + 'a
where
    I: IntoIterator<Item = &'a GeoPoint> + 'a,
    I::IntoIter: 'a,
{
    points
        .into_iter()
        .filter(move |p| layers.shows(p.source) && query.matches(p))
}

/// Mean position of `points`, or [`DEFAULT_CENTER`] when there are none.
pub fn centroid<'a, I>(points: I) -> LatLon
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    let (n, lat, lon) = points
        .into_iter()
        .fold((0usize, 0.0, 0.0), |(n, lat, lon), p| {
            (n + 1, lat + p.latitude, lon + p.longitude)
        });
    if n == 0 {
        LatLon::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1)
    } else {
        LatLon::new(lat / n as f64, lon / n as f64)
    }
}
