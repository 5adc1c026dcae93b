//! Language profiles for syllabification
//!
//! A profile is pure data: the consonant and vowel inventory plus the
//! table of legal onset clusters. Profiles are declared in TOML; English
//! ships embedded in the crate.

pub(crate) mod config;
pub(crate) mod loader;
mod profile;

pub use config::{Inventory, LanguageConfig, Metadata, Onsets};
pub use loader::{get_profile, list_available_languages};
pub use profile::{LanguageProfile, BOUNDARY_MARKER};
