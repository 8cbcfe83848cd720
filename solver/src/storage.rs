//! JSON persistence for labelled character tables.
//!
//! Format (one object per file):
//!
//! ```json
//! { "degree": 3, "partitions": [[3], [2, 1], [1, 1, 1]],
//!   "values": [[1, 1, 1], [-1, 0, 2], [1, -1, 1]] }
//! ```
//!
//! Cells use the serde form of `V`. Machine integers are JSON numbers;
//! `num_bigint::BigInt` is written as a `[sign, [u32 digits]]` tuple, so a
//! file saved with one value type only loads back with the same one.
//!
//! Files live under [`TABLE_DIR`] as `s{n}.json`. Loading validates the
//! shape (square, labels are partitions of `degree`) before returning.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::char_table::CharacterTable;
use crate::constants::TABLE_DIR;
use crate::error::{Error, Result};

/// Default path of the saved table for S_n.
pub fn table_file_path(degree: usize) -> PathBuf {
    Path::new(TABLE_DIR).join(format!("s{}.json", degree))
}

/// Write `table` to `path`, creating parent directories as needed.
pub fn save_table<V: Serialize>(table: &CharacterTable<V>, path: &Path) -> Result<()> {
    let start_time = Instant::now();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, table)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(
        path = %path.display(),
        degree = table.degree,
        elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
        "saved character table"
    );
    Ok(())
}

/// Read a table written by [`save_table`].
pub fn load_table<V: DeserializeOwned>(path: &Path) -> Result<CharacterTable<V>> {
    let start_time = Instant::now();
    let reader = BufReader::new(File::open(path)?);
    let table: CharacterTable<V> = serde_json::from_reader(reader)?;

    let malformed = |reason: String| Error::MalformedTable {
        path: path.display().to_string(),
        reason,
    };
    let side = table.partitions.len();
    if table.values.len() != side || table.values.iter().any(|row| row.len() != side) {
        return Err(malformed(format!("values are not {side}x{side}")));
    }
    if let Some(bad) = table
        .partitions
        .iter()
        .find(|p| !p.is_canonical() || p.size() != table.degree)
    {
        return Err(malformed(format!(
            "label {bad} is not a partition of {}",
            table.degree
        )));
    }

    info!(
        path = %path.display(),
        degree = table.degree,
        elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
        "loaded character table"
    );
    Ok(table)
}
