/*!
Output document: map categories keyed by name, each with its filter entries.
 */
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    error::{Error, Result},
    geojson::LineString,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ERAMMapEntry {
    pub bcg_name: String,
    pub label_line1: String,
    pub label_line2: String,
    /// Name of the owning category
    pub name: String,
    pub lines: Vec<LineString>,
}

pub type ERAMMapGroup = Vec<ERAMMapEntry>;
pub type ERAMMapGroups = BTreeMap<String, ERAMMapGroup>;

pub fn write_groups<W: Write>(writer: W, groups: &ERAMMapGroups, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, groups)?;
    } else {
        serde_json::to_writer(writer, groups)?;
    }
    Ok(())
}

/// Write the whole document to `path`, creating its parent folder if needed.
pub fn save_groups(path: &Path, groups: &ERAMMapGroups, pretty: bool) -> Result<()> {
    let io_err = |source: std::io::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    write_groups(&mut writer, groups, pretty)?;
    writer.flush().map_err(io_err)
}
