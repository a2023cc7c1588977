/*!
Facility (ARTCC) configuration records.

Only the branch of the configuration that drives the map extraction is
modeled; every other field of the document is ignored on decode.
 */
use std::{fs::File, io::{BufReader, Read}, path::Path};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtccConfig {
    pub facility: Facility,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facility {
    pub id: String,
    pub eram_configuration: EramConfiguration,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EramConfiguration {
    pub geo_maps: Vec<MapCategoryConfig>,
}

/// A map category (geomap) and the video maps its filters are drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapCategoryConfig {
    pub id: String,
    pub name: String,
    pub label_line1: String,
    pub label_line2: String,
    pub filter_menu: Vec<FilterEntry>,
    /// Index-aligned with `filter_menu`
    pub bcg_menu: Vec<String>,
    pub video_map_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterEntry {
    pub label_line1: String,
    pub label_line2: String,
}

impl FilterEntry {
    /// Entries without any label only hold a slot in the menu.
    pub fn is_placeholder(&self) -> bool {
        self.label_line1.is_empty() && self.label_line2.is_empty()
    }
}

impl ArtccConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// `path` is only used to report errors.
    pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn geo_maps(&self) -> &[MapCategoryConfig] {
        &self.facility.eram_configuration.geo_maps
    }
}
