use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};

pub fn is_archive<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("zip"))
}

/// Member called `name`, either at the archive root or inside a folder.
fn member_path<R: Read + Seek>(archive: &ZipArchive<R>, name: &str) -> Option<String> {
    let nested = format!("/{}", name);
    archive
        .file_names()
        .find(|n| *n == name || n.ends_with(&nested))
        .map(str::to_owned)
}

pub fn read_member<P: AsRef<Path>>(path: P, name: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(BufReader::new(File::open(path)?))?;
    let member = member_path(&archive, name).ok_or_else(|| Error::MissingMember {
        name: name.to_owned(),
    })?;

    let mut file = archive.by_name(&member)?;
    let mut buf = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut buf)?;
    Ok(buf)
}
