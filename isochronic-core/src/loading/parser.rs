use std::fs::File;
use std::path::Path;

use crate::Error;

/// Reads every row of a headed CSV table, failing on the first bad row
pub fn deserialize_table<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    csv::Reader::from_reader(file)
        .deserialize()
        .map(|row| row.map_err(|e| Error::InvalidData(format!("{}: {e}", path.display()))))
        .collect()
}
