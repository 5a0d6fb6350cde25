use std::io::Read;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// One workout reading: activity code plus positional parameters.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Package {
    /// Activity code: `RUN`, `WLK` or `SWM`
    pub code: String,
    /// Positional parameters; count and meaning depend on `code`
    pub params: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, params: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            params: params.into(),
        }
    }
}

/// Readings processed when no package file is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of packages.
pub fn load_packages<R: Read>(reader: R) -> CliResult<Vec<Package>> {
    Ok(serde_json::from_reader(reader)?)
}

/// JSON schema of a package file.
pub fn packages_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(Vec<Package>)).unwrap_or_default()
}
