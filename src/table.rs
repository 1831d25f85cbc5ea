use std::io::prelude::*;
use std::path::Path;

use csv::StringRecord;

use crate::columns::Layout;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::{extract_aerodromes, extract_localities, extract_rows, Category, Extraction};

/// A source listing as read from disk: a header row and loosely shaped records.
#[derive(Debug)]
pub struct SourceTable {
    name: String,
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl SourceTable {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SourceTable> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path)?;
        SourceTable::from_reader(&path.display().to_string(), &mut file)
    }

    pub fn from_reader<B: Read>(name: &str, reader: &mut B) -> Result<SourceTable> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        // Exports are not always UTF-8.
        let text = String::from_utf8_lossy(&buf);

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(text.as_bytes());
        let headers = rdr.headers()?.iter().map(str::to_owned).collect();
        let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(SourceTable {
            name: name.to_owned(),
            headers,
            records,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    /// Non-empty cells of `column`, in file order. Can be walked any number of times.
    pub fn lines(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .filter_map(move |r| r.get(column))
            .filter(|s| !s.trim().is_empty())
    }

    pub fn extract(&self, category: Category, config: &Config) -> Result<Extraction> {
        let aliases = match category {
            Category::Aerodrome => &config.aerodrome_columns,
            Category::Locality => &config.locality_columns,
        };
        let layout = aliases.resolve(&self.headers).ok_or_else(|| Error::NoLineColumn {
            source_name: self.name.clone(),
        })?;

        Ok(match (layout, category) {
            (Layout::Lines { column }, Category::Aerodrome) => {
                extract_aerodromes(self.lines(column), &config.aerodrome_rules)
            }
            (Layout::Lines { column }, Category::Locality) => {
                extract_localities(self.lines(column), &config.locality_rules)
            }
            (Layout::Columns(mapping), _) => extract_rows(&self.records, &mapping, category),
        })
    }
}
