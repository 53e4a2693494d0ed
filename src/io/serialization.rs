// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Export document serialization.
//!
//! This module writes the animation export document to disk as
//! pretty-printed JSON.

use crate::models::export::ExportDocument;
use anyhow::{Context, Result};
use std::path::Path;

/// Render the export document as pretty-printed JSON.
pub fn to_json(doc: &ExportDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Export the document to a JSON file.
pub fn export_json(doc: &ExportDocument, path: &Path) -> Result<()> {
    let json = to_json(doc)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::animation::Frame;
    use crate::models::project::Project;

    fn sample_document() -> ExportDocument {
        let mut project = Project::default();
        project.load_image("hero.png", "/tmp/hero.png", 128, 64);
        project.append_frame(Frame::new(0, 0, 64, 64));
        ExportDocument::from_project(&project).unwrap()
    }

    #[test]
    fn test_json_is_indented() {
        let json = to_json(&sample_document()).unwrap();
        assert!(json.starts_with("{\n  \"texture\""));
        assert!(json.contains("\n  \"animations\": {\n    \"idleDown\": ["));
    }

    #[test]
    fn test_export_json_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");

        export_json(&sample_document(), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["image_name"], "hero.png");
        assert_eq!(written["image_width"], 128);
        assert_eq!(written["animations"]["idleDown"][0]["width"], 64);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.json");
        assert!(export_json(&sample_document(), &path).is_err());
    }
}
