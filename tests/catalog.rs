use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use vfr_points::config::{DEFAULT_AERODROME_SOURCE, DEFAULT_LOCALITY_SOURCE};
use vfr_points::export;
use vfr_points::filter::{centroid, select, Layers, Query};
use vfr_points::{Catalog, Category, Config};

const AD_CSV: &str = "AD HEL ULM\nLPPT LISBOA 384643N 0091342W LISBOA\nLPPR PORTO 411405N 0084041W PORTO\n";
const LOC_CSV: &str = "Localidades\nABRANTES 392700N 0081100W ABRAN SECTOR1\nTotal de registos: 1\n";

fn write_sources(dir: &Path) {
    fs::write(dir.join(DEFAULT_AERODROME_SOURCE), AD_CSV).unwrap();
    fs::write(dir.join(DEFAULT_LOCALITY_SOURCE), LOC_CSV).unwrap();
}

#[test]
fn directory_catalog() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let mut catalog = Catalog::new(dir.path(), Config::default());
    let sources: Vec<_> = catalog.points().unwrap().map(|p| p.source).collect();
    assert_eq!(
        sources,
        vec![Category::Aerodrome, Category::Aerodrome, Category::Locality]
    );

    assert_eq!(catalog.points().unwrap().count(), 3);
    assert_eq!(catalog.cache().loads(), 2);

    catalog.invalidate();
    assert_eq!(catalog.points().unwrap().count(), 3);
    assert_eq!(catalog.cache().loads(), 4);
}

#[test]
fn changed_source_is_reparsed() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let mut catalog = Catalog::new(dir.path(), Config::default());
    assert_eq!(catalog.extraction(Category::Locality).unwrap().records_out(), 1);

    let mut more = String::from(LOC_CSV);
    more.push_str("EVORA 383400N 0075400W EVORA SUL\n");
    fs::write(dir.path().join(DEFAULT_LOCALITY_SOURCE), more).unwrap();
    assert_eq!(catalog.extraction(Category::Locality).unwrap().records_out(), 2);
}

#[test]
fn zip_bundle_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vfr.zip");
    let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
    zip.start_file(DEFAULT_AERODROME_SOURCE, zip::write::FileOptions::default())
        .unwrap();
    zip.write_all(AD_CSV.as_bytes()).unwrap();
    zip.start_file(
        format!("dados/{}", DEFAULT_LOCALITY_SOURCE),
        zip::write::FileOptions::default(),
    )
    .unwrap();
    zip.write_all(LOC_CSV.as_bytes()).unwrap();
    zip.finish().unwrap();

    let mut catalog = Catalog::new(&path, Config::default());
    assert_eq!(catalog.source_path(Category::Locality), path);
    assert_eq!(catalog.points().unwrap().count(), 3);
}

#[test]
fn missing_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = Catalog::new(dir.path(), Config::default());
    assert!(catalog.points().is_err());
}

#[test]
fn filtered_export() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let mut catalog = Catalog::new(dir.path(), Config::default());
    let query = Query::new("porto");
    let selected: Vec<_> = select(catalog.points().unwrap(), Layers::default(), &query)
        .cloned()
        .collect();
    assert_eq!(selected.len(), 1);
    let center = centroid(&selected);
    assert!((center.lat() - selected[0].latitude).abs() < 1e-12);

    let out = dir.path().join("out.csv");
    export::write_file(&out, &selected).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("LPPR"));

    assert!(export::write_file(dir.path().join("out.txt"), &selected).is_err());
}
