//! Loading and resolving the author-facing section manifest.
//!
//! Manifests are TOML or JSON files listing sections in reading order.
//! An entry may omit its `id`, in which case an anchor is derived from
//! the title, deduplicated against every id already in the document.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    anchor::{AnchorError, AnchorSlugger},
    outline::SectionEntry,
};

/// A section manifest exactly as authored, before anchor resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutlineManifest {
    #[serde(default)]
    pub sections: Vec<ManifestSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSection {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub children: Vec<ManifestSection>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("manifest `{path}` has an unsupported extension; expected .toml or .json")]
    UnsupportedFormat { path: PathBuf },
    #[error("failed to parse TOML manifest `{path}`")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse JSON manifest `{path}`")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to derive an anchor for `{title}`")]
    Anchor {
        title: String,
        #[source]
        source: AnchorError,
    },
}

/// Load a manifest from disk, choosing the format by file extension.
pub fn load_manifest(path: &Path) -> Result<OutlineManifest, ManifestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => {
            let contents = read_manifest_file(path)?;
            toml::from_str(&contents).map_err(|source| ManifestError::ParseToml {
                path: path.to_path_buf(),
                source,
            })
        }
        Some("json") => {
            let contents = read_manifest_file(path)?;
            serde_json::from_str(&contents).map_err(|source| ManifestError::ParseJson {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Err(ManifestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_manifest_file(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve manifest records into domain entries, deriving anchors for
/// entries that omit an id. Explicit ids are reserved first so a derived
/// anchor never collides with one the author wrote down.
pub fn resolve_outline(manifest: &OutlineManifest) -> Result<Vec<SectionEntry>, ManifestError> {
    let mut slugger = AnchorSlugger::new();
    reserve_explicit_ids(&manifest.sections, &mut slugger);
    resolve_sections(&manifest.sections, &mut slugger)
}

fn reserve_explicit_ids(sections: &[ManifestSection], slugger: &mut AnchorSlugger) {
    for section in sections {
        if let Some(id) = &section.id {
            slugger.reserve(id);
        }
        reserve_explicit_ids(&section.children, slugger);
    }
}

fn resolve_sections(
    sections: &[ManifestSection],
    slugger: &mut AnchorSlugger,
) -> Result<Vec<SectionEntry>, ManifestError> {
    let mut entries = Vec::with_capacity(sections.len());

    for section in sections {
        let id = match &section.id {
            Some(id) => id.clone(),
            None => {
                slugger
                    .anchor_for(&section.title)
                    .map_err(|source| ManifestError::Anchor {
                        title: section.title.clone(),
                        source,
                    })?
            }
        };

        let children = resolve_sections(&section.children, slugger)?;
        entries.push(SectionEntry {
            id,
            title: section.title.clone(),
            children,
        });
    }

    Ok(entries)
}
