//! Golden data for the cross-crate tests in `tests/`.

use serde::Deserialize;

/// The golden run table.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub runs: Vec<GoldenRun>,
}

/// One run of the orchestrator and what it must print.
#[derive(Debug, Deserialize)]
pub struct GoldenRun {
    /// Demo selector; `None` runs the identity pair.
    #[serde(default)]
    pub selector: Option<i32>,
    pub x: i32,
    /// Completion lines, in any order.
    pub computed: Vec<String>,
    /// Final combination line.
    pub combination: String,
    #[serde(default)]
    pub short_circuited: bool,
}

/// Load `tests/testdata/demo_golden.json`.
///
/// # Panics
///
/// Panics if the file is missing or malformed.
#[must_use]
pub fn load_golden() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/demo_golden.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}
