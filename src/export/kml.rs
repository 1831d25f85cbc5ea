//! KML document with one folder per category.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::extract::{Category, GeoPoint};
use crate::filter::centroid;

const XMLNS_KML: &str = "http://www.opengis.net/kml/2.2";

fn start<W: Write>(w: &mut Writer<W>, tag: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(tag)))?;
    Ok(())
}

fn end<W: Write>(w: &mut Writer<W>, tag: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn text<W: Write>(w: &mut Writer<W>, tag: &str, content: &str) -> Result<()> {
    start(w, tag)?;
    w.write_event(Event::Text(BytesText::new(content)))?;
    end(w, tag)
}

fn placemark<W: Write>(w: &mut Writer<W>, p: &GeoPoint) -> Result<()> {
    start(w, "Placemark")?;
    text(w, "name", p.identifier.as_deref().unwrap_or(&p.name))?;
    let description = match &p.secondary {
        Some(s) => format!("{} ({})", p.name, s),
        None => p.name.clone(),
    };
    text(w, "description", &description)?;
    start(w, "Point")?;
    text(
        w,
        "coordinates",
        &format!("{:.6},{:.6}", p.longitude, p.latitude),
    )?;
    end(w, "Point")?;
    end(w, "Placemark")
}

pub fn write_kml<W: Write>(points: &[GeoPoint], out: W) -> Result<()> {
    let mut w = Writer::new_with_indent(out, b' ', 2);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut kml = BytesStart::new("kml");
    kml.push_attribute(("xmlns", XMLNS_KML));
    w.write_event(Event::Start(kml))?;
    start(&mut w, "Document")?;

    let center = centroid(points);
    start(&mut w, "LookAt")?;
    text(&mut w, "longitude", &format!("{:.6}", center.lon()))?;
    text(&mut w, "latitude", &format!("{:.6}", center.lat()))?;
    text(&mut w, "range", "600000")?;
    end(&mut w, "LookAt")?;

    for &category in [Category::Aerodrome, Category::Locality].iter() {
        start(&mut w, "Folder")?;
        text(&mut w, "name", category.into())?;
        for p in points.iter().filter(|p| p.source == category) {
            placemark(&mut w, p)?;
        }
        end(&mut w, "Folder")?;
    }

    end(&mut w, "Document")?;
    end(&mut w, "kml")
}
