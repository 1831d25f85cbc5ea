use std::path::{Path, PathBuf};

use tracing::info;

use crate::cache::SourceCache;
use crate::config::Config;
use crate::error::Result;
use crate::extract::{Category, Extraction, GeoPoint};
use crate::table::SourceTable;
use crate::zip_util::{is_archive, read_member};

/// Both listings of one input: a directory holding the two sources, or a
/// `.zip` bundle containing them.
#[derive(Debug)]
pub struct Catalog {
    input: PathBuf,
    config: Config,
    cache: SourceCache,
}

fn source_name(config: &Config, category: Category) -> &str {
    match category {
        Category::Aerodrome => &config.aerodrome_source,
        Category::Locality => &config.locality_source,
    }
}

fn load(input: &Path, config: &Config, category: Category) -> Result<Extraction> {
    let name = source_name(config, category);
    let table = if is_archive(input) {
        let bytes = read_member(input, name)?;
        SourceTable::from_reader(name, &mut &bytes[..])?
    } else {
        SourceTable::from_file(input.join(name))?
    };
    table.extract(category, config)
}

impl Catalog {
    pub fn new<P: Into<PathBuf>>(input: P, config: Config) -> Self {
        Catalog {
            input: input.into(),
            config,
            cache: SourceCache::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// File whose signature decides whether `category` must be reparsed.
    pub fn source_path(&self, category: Category) -> PathBuf {
        if is_archive(&self.input) {
            self.input.clone()
        } else {
            self.input.join(source_name(&self.config, category))
        }
    }

    pub fn extraction(&mut self, category: Category) -> Result<&Extraction> {
        let path = self.source_path(category);
        let (input, config) = (&self.input, &self.config);
        self.cache
            .get_or_load(&path, category, || load(input, config, category))
    }

    /// Aerodromes then localities, each in file order, borrowed from the cache.
    pub fn points(&mut self) -> Result<impl Iterator<Item = &GeoPoint> + '_> {
        let total = self.extraction(Category::Aerodrome)?.records_out()
            + self.extraction(Category::Locality)?.records_out();
        info!("Catalog holds {} points", total);

        let aerodromes = self.cache.get(&self.source_path(Category::Aerodrome), Category::Aerodrome);
        let localities = self.cache.get(&self.source_path(Category::Locality), Category::Locality);
        Ok(aerodromes
            .into_iter()
            .chain(localities)
            .flat_map(|extraction| extraction.points.iter()))
    }

    /// Forget parsed sources so the next access rereads them.
    pub fn invalidate(&mut self) {
        for category in [Category::Aerodrome, Category::Locality].iter() {
            let path = self.source_path(*category);
            self.cache.invalidate(&path);
        }
    }

    pub fn cache(&self) -> &SourceCache {
        &self.cache
    }
}
