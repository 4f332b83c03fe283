use crate::controller::ControllerOptions;
use crate::types::ViewMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for `keypoint-hull <config.json>`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    pub input: PathBuf,
    /// Result bitmap. An existing file is never overwritten; `(n)` is
    /// appended to the stem instead.
    pub output: PathBuf,
    /// Slider value; clamped to the slider range.
    #[serde(default = "default_keypoints")]
    pub keypoints: i32,
    #[serde(default)]
    pub view: ViewMode,
    #[serde(default)]
    pub live_recompute: bool,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn default_keypoints() -> i32 {
    100
}

impl BatchConfig {
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            live_recompute: self.live_recompute,
            ..Default::default()
        }
    }
}

pub fn load_config(path: &Path) -> Result<BatchConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: BatchConfig =
            serde_json::from_str(r#"{ "input": "in.jpg", "output": "out.png" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.jpg"));
        assert_eq!(cfg.keypoints, 100);
        assert_eq!(cfg.view, ViewMode::BoundingHull);
        assert!(!cfg.live_recompute);
        assert!(cfg.report_json.is_none());
    }

    #[test]
    fn full_config_parses() {
        let cfg: BatchConfig = serde_json::from_str(
            r#"{
                "input": "in.jpg",
                "output": "out/result.png",
                "keypoints": 250,
                "view": "keypoints",
                "liveRecompute": true,
                "reportJson": "out/report.json"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.keypoints, 250);
        assert_eq!(cfg.view, ViewMode::Keypoints);
        assert!(cfg.controller_options().live_recompute);
        assert_eq!(cfg.report_json, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_config(Path::new("/no/such/config.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config"), "{err}");
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ \"input\": ").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse config"), "{err}");
    }
}
