// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading hierarchy documents and viewport tuning.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use vantage_outline::NodeData;
use vantage_view2d::ViewportConfig;

/// The hierarchy document could not be loaded.
///
/// This is fatal to a tree view: there is no built-in hierarchy to fall back
/// to, so the host shows [`USER_MESSAGE`](Self::USER_MESSAGE) and builds no
/// partial view.
#[derive(Debug, Error)]
pub enum HierarchyLoadError {
    /// The document could not be read.
    #[error("failed to read hierarchy document: {0}")]
    Io(#[from] io::Error),
    /// The document is not valid JSON of the expected shape.
    #[error("failed to parse hierarchy document: {0}")]
    Json(#[from] serde_json::Error),
    /// The root node has no name.
    #[error("hierarchy root has an empty name")]
    EmptyName,
}

impl HierarchyLoadError {
    /// Persistent message shown in place of the tree.
    pub const USER_MESSAGE: &'static str =
        "Error loading tree data. Please check that the hierarchy document exists and is properly formatted.";
}

/// Parses a hierarchy document.
pub fn load_hierarchy_str(json: &str) -> Result<NodeData, HierarchyLoadError> {
    let data: NodeData = serde_json::from_str(json)?;
    if data.name.trim().is_empty() {
        return Err(HierarchyLoadError::EmptyName);
    }
    tracing::debug!(root = %data.name, nodes = data.node_count(), "widgets.hierarchy_parsed");
    Ok(data)
}

/// Reads and parses a hierarchy document from `path`.
pub fn load_hierarchy_path(path: impl AsRef<Path>) -> Result<NodeData, HierarchyLoadError> {
    let path = path.as_ref();
    let result = fs::read_to_string(path)
        .map_err(HierarchyLoadError::from)
        .and_then(|text| load_hierarchy_str(&text));
    match &result {
        Ok(data) => {
            tracing::info!(path = %path.display(), root = %data.name, "widgets.hierarchy_loaded");
        }
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "widgets.hierarchy_failed");
        }
    }
    result
}

/// Parses viewport tuning. Omitted fields take the tree preset's values.
///
/// ```rust
/// use vantage_view2d::WheelZoom;
/// use vantage_widgets::load_viewport_config;
///
/// let config = load_viewport_config(r#"{ "max_scale": 5.0, "wheel_zoom": { "mode": "anchored" } }"#)?;
/// assert_eq!(config.max_scale, 5.0);
/// assert_eq!(config.min_scale, 0.5);
/// assert_eq!(config.wheel_zoom, WheelZoom::Anchored);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn load_viewport_config(json: &str) -> Result<ViewportConfig, serde_json::Error> {
    serde_json::from_str(json)
}
