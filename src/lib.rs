#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Portuguese VFR reference points (AD/HEL/ULM listings and localities)
//! parsed from loosely structured text exports into decimal-degree records.

pub mod cache;
pub mod catalog;
pub mod columns;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod filter;
pub mod geo;
pub mod table;
pub mod zip_util;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use extract::{Category, Extraction, GeoPoint};
pub use geo::{decode, Axis, LatLon};
