use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::extract::GeoPoint;

pub mod kml;
pub mod sct;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Kml,
    Sct,
}

impl Format {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Format> {
        let extension = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Format::Csv),
            "kml" => Ok(Format::Kml),
            "sct" | "sct2" => Ok(Format::Sct),
            _ => Err(Error::UnknownFormat { extension }),
        }
    }
}

pub fn write_csv<W: Write>(points: &[GeoPoint], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for p in points {
        wtr.serialize(p)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write<W: Write>(format: Format, points: &[GeoPoint], mut out: W) -> Result<()> {
    match format {
        Format::Csv => write_csv(points, out),
        Format::Kml => kml::write_kml(points, out),
        Format::Sct => {
            out.write_all(sct::to_sct(points).as_bytes())?;
            Ok(())
        }
    }
}

/// Write `points` to `path` in the format its extension names.
pub fn write_file<P: AsRef<Path>>(path: P, points: &[GeoPoint]) -> Result<()> {
    let format = Format::from_path(&path)?;
    let mut out = BufWriter::new(File::create(path)?);
    write(format, points, &mut out)?;
    out.flush()?;
    Ok(())
}
