use std::path::PathBuf;

use crate::catalog::model::CarRecord;

/// Existence check performed before switching the displayed car.
///
/// A seam rather than a transport: hosts back it with whatever their asset
/// delivery supports (a filesystem stat here, a HEAD request in a browser).
pub trait ModelProbe {
    fn exists(&self, path: &str) -> bool;
}

/// Probe over a local asset root. Catalog paths are site-absolute
/// (`/models/...`), so the leading slash is stripped before joining.
#[derive(Clone, Debug)]
pub struct FsModelProbe {
    root: PathBuf,
}

impl FsModelProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModelProbe for FsModelProbe {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path.trim_start_matches('/')).is_file()
    }
}

/// Status indicator for one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Error,
}

/// Check every entry's model asset.
///
/// A failed probe downgrades that entry's indicator to [`Availability::Error`]
/// and never blocks the rest of the catalog.
pub fn probe_catalog<'a>(
    catalog: &'a [CarRecord],
    probe: &dyn ModelProbe,
) -> Vec<(&'a CarRecord, Availability)> {
    catalog
        .iter()
        .map(|car| {
            let status = if probe.exists(&car.model_path) {
                Availability::Available
            } else {
                tracing::warn!(id = %car.id, path = %car.model_path, "model asset missing");
                Availability::Error
            };
            (car, status)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/probe.rs"]
mod tests;
