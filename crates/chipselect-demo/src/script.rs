//! Scripted user steps.

use crate::catalog::read_json;
use crate::error::DemoResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One user action in a scripted session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Focus the input.
    Focus,
    /// Blur the input. The close stays pending until the next step settles.
    Blur,
    /// Replace the input text.
    Type { text: String },
    /// Click a showing suggestion by label.
    Click {
        label: String,
        #[serde(default)]
        shift: bool,
    },
    /// Remove a chip by label.
    Remove { label: String },
    /// Re-run the last query.
    Refresh,
    /// Let one update pass run.
    Tick,
}

/// Load a script (a JSON list of steps).
pub fn load_script(path: &Path) -> DemoResult<Vec<Step>> {
    let steps: Vec<Step> = read_json(path)?;
    log::info!("Loaded {} steps from {}", steps.len(), path.display());
    Ok(steps)
}
