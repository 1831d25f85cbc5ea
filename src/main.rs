#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;

use structopt::StructOpt;

use vfr_points::export;
use vfr_points::filter::{select, Layers, Query};
use vfr_points::{Catalog, Category, Config, GeoPoint};

#[derive(StructOpt)]
struct Args {
    /// Directory or .zip bundle holding both listings
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    /// Output file; .sct2, .kml or .csv
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        default_value = "./output.sct2"
    )]
    output: PathBuf,
    #[structopt(long = "aerodromes", default_value = "AD-HEL-ULM.csv")]
    aerodromes: String,
    #[structopt(long = "localities", default_value = "Localidades-Nova-versao-230223.csv")]
    localities: String,
    /// Keep points whose name, ident/code or city/sector contains this
    #[structopt(short = "f", long = "filter")]
    filter: Option<String>,
    #[structopt(long = "no-aerodromes")]
    no_aerodromes: bool,
    #[structopt(long = "no-localities")]
    no_localities: bool,
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vfr_points={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();
    setup_logging(args.verbose);

    let config = Config {
        aerodrome_source: args.aerodromes.clone(),
        locality_source: args.localities.clone(),
        ..Config::default()
    };
    let mut catalog = Catalog::new(args.input.clone(), config);

    println!("Processing AD/HEL/ULM listing...");
    let ad_total = catalog.extraction(Category::Aerodrome)?.records_out();
    println!("Processing locality listing...");
    let loc_total = catalog.extraction(Category::Locality)?.records_out();

    let layers = Layers {
        aerodromes: !args.no_aerodromes,
        localities: !args.no_localities,
    };
    let query = Query::new(args.filter.as_deref().unwrap_or(""));
    let selected: Vec<GeoPoint> = select(catalog.points()?, layers, &query).cloned().collect();
    let shown = |category: Category| selected.iter().filter(|p| p.source == category).count();

    println!("Outputing {} points to {}...", selected.len(), args.output.display());
    export::write_file(&args.output, &selected)?;

    println!(
        "Loaded {} AD/HEL/ULM and {} Localidades. Filter -> AD: {} | Localidades: {}.",
        ad_total,
        loc_total,
        shown(Category::Aerodrome),
        shown(Category::Locality)
    );
    Ok(())
}
