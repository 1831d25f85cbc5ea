//! Header alias resolution.
//!
//! Exports of the same listing name their columns differently ("Nome",
//! "name", "LATITUDE", ...). Each source gets one ordered alias list per
//! logical field which is resolved once against the header row.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Whole record as one free-text line.
    Line,
    Ident,
    Name,
    Secondary,
    Latitude,
    Longitude,
}

#[derive(Clone, Debug, Default)]
pub struct ColumnAliases {
    fields: Vec<(Field, Vec<String>)>,
}

/// Column indices of a source whose fields are already split into cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    pub ident: Option<usize>,
    pub name: Option<usize>,
    pub secondary: Option<usize>,
    pub latitude: usize,
    pub longitude: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One record candidate per row, read from a single text column.
    Lines { column: usize },
    Columns(ColumnMapping),
}

impl ColumnAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append aliases for `field`. Earlier aliases take precedence.
    pub fn with(mut self, field: Field, aliases: &[&str]) -> Self {
        let aliases = aliases.iter().map(|a| a.to_lowercase());
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => existing.extend(aliases),
            None => self.fields.push((field, aliases.collect())),
        }
        self
    }

    pub fn aerodromes() -> Self {
        Self::new()
            .with(Field::Line, &["linha", "line", "texto", "text", "raw"])
            .with(Field::Ident, &["ident", "indicativo", "icao", "designator", "código", "codigo", "code"])
            .with(Field::Name, &["nome", "name", "designação", "designacao"])
            .with(Field::Secondary, &["cidade", "city", "localidade"])
            .with(Field::Latitude, &["latitude", "lat"])
            .with(Field::Longitude, &["longitude", "long", "lon", "lng"])
    }

    pub fn localities() -> Self {
        Self::new()
            .with(Field::Line, &["linha", "line", "texto", "text", "raw"])
            .with(Field::Ident, &["código", "codigo", "code", "ident"])
            .with(Field::Name, &["localidade", "nome", "name"])
            .with(Field::Secondary, &["sector", "setor"])
            .with(Field::Latitude, &["latitude", "lat"])
            .with(Field::Longitude, &["longitude", "long", "lon", "lng"])
    }

    /// Index of the first header matching one of `field`'s aliases, trying
    /// aliases in order.
    pub fn find<H: AsRef<str>>(&self, field: Field, headers: &[H]) -> Option<usize> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect();
        let (_, aliases) = self.fields.iter().find(|(f, _)| *f == field)?;
        aliases
            .iter()
            .find_map(|alias| normalized.iter().position(|h| h == alias))
    }

    /// `None` only when there is no column to read from at all.
    pub fn resolve<H: AsRef<str>>(&self, headers: &[H]) -> Option<Layout> {
        if headers.is_empty() {
            return None;
        }

        let lat = self.find(Field::Latitude, headers);
        let lon = self.find(Field::Longitude, headers);
        if let (Some(latitude), Some(longitude)) = (lat, lon) {
            return Some(Layout::Columns(ColumnMapping {
                ident: self.find(Field::Ident, headers),
                name: self.find(Field::Name, headers),
                secondary: self.find(Field::Secondary, headers),
                latitude,
                longitude,
            }));
        }

        let column = self.find(Field::Line, headers).unwrap_or(0);
        Some(Layout::Lines { column })
    }
}
