pub mod check;
pub mod roll;

use std::path::Path;

use cw_data::Dataset;
use cw_gen::validate_tables;

/// Load a dataset and check it against the engine's fixed mapping tables.
///
/// Table drift (a class without an archetype group, a race without a
/// pantheon) is a configuration error and surfaces here, before any
/// randomness is consumed.
fn load_dataset(path: &Path) -> Result<Dataset, String> {
    let dataset = Dataset::from_path(path).map_err(|e| e.to_string())?;
    validate_tables(&dataset).map_err(|e| e.to_string())?;
    Ok(dataset)
}
