//! Shared request fixtures.

use devmatch::{AspectScores, Criterion, DeviceInput};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn criteria(pairs: &[(&str, &str)]) -> Vec<Criterion> {
    pairs
        .iter()
        .map(|(kind, description)| Criterion::new(*kind, *description))
        .collect()
}

pub fn premium() -> DeviceInput {
    DeviceInput::new("premium")
        .with_price(1600.0)
        .with_characteristic("ram", "8")
        .with_characteristic("battery", "5000")
        .with_aspect_scores(AspectScores {
            camera: Some(0.85),
            bateria: Some(0.8),
            ..Default::default()
        })
}

pub fn entrada() -> DeviceInput {
    DeviceInput::new("entrada")
        .with_price(1100.0)
        .with_characteristic("ram", "4")
        .with_characteristic("battery", "4000")
        .with_aspect_scores(AspectScores {
            camera: Some(0.6),
            bateria: Some(0.6),
            ..Default::default()
        })
}

/// Raw-spec-only flagship (no aspect scores).
pub fn flagship_specs() -> DeviceInput {
    DeviceInput::new("flagship")
        .with_price(4500.0)
        .with_characteristic("main_camera", "200 MP")
        .with_characteristic("battery", "5.000 mAh")
        .with_characteristic("benchmark", "1.450.000")
        .with_characteristic("processor", "Snapdragon 8 Gen 3")
}

/// Raw-spec-only budget phone (no aspect scores).
pub fn budget_specs() -> DeviceInput {
    DeviceInput::new("budget")
        .with_price(899.0)
        .with_characteristic("main_camera", "13 MP")
        .with_characteristic("battery", "4000 mAh")
        .with_characteristic("ram", "3 GB")
}

pub fn score_request(criteria: &[Criterion], devices: &[DeviceInput]) -> serde_json::Value {
    serde_json::json!({
        "criteria": criteria,
        "devices": devices,
    })
}

/// Writes `json` to a temp file that lives as long as the returned handle.
pub fn artifact_file(json: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.to_string().as_bytes())
        .expect("write artifact");
    file.flush().expect("flush artifact");
    file
}

/// Linear artifact over the default columns that predicts `spec_fit` alone.
pub fn spec_fit_only_artifact() -> serde_json::Value {
    let mut coefficients = vec![0.0; devmatch::MATCH_FEATURE_COLUMNS.len()];
    coefficients[0] = 1.0;
    serde_json::json!({
        "estimator": {"kind": "linear", "intercept": 0.0, "coefficients": coefficients}
    })
}
