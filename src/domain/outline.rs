//! The outline model: an ordered tree of sections addressed by in-document
//! anchors. Ordering is authoring order and is never changed by any layer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sanity bound on nesting. Authored outlines are expected to stay at two
/// levels; anything deeper than this is a manifest mistake.
pub const MAX_OUTLINE_DEPTH: u8 = 16;

/// One addressable unit of an article outline. `id` doubles as the anchor
/// fragment (`#<id>`) the rendered link targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SectionEntry>,
}

impl SectionEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SectionEntry>) -> Self {
        self.children = children;
        self
    }
}

/// Errors reported by review-time validation. Rendering itself never
/// signals these; a malformed outline renders as authored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlineError {
    #[error("duplicate anchor id `{id}` detected")]
    DuplicateId { id: String },
    #[error("entry `{id}` has an empty title")]
    EmptyTitle { id: String },
    #[error("entry `{title}` uses invalid anchor id `{id}`")]
    InvalidAnchor { id: String, title: String },
    #[error("entry `{id}` exceeds maximum outline depth {max_depth}")]
    DepthExceeded { id: String, max_depth: u8 },
}

/// Validate an outline the way a reviewer would: anchor ids form a single
/// flat namespace across the whole tree, titles are non-empty, ids are
/// usable as URL fragments, and nesting stays within [`MAX_OUTLINE_DEPTH`].
pub fn validate_outline(entries: &[SectionEntry]) -> Result<(), OutlineError> {
    let mut seen = HashSet::new();
    validate_level(entries, 1, &mut seen)
}

fn validate_level(
    entries: &[SectionEntry],
    level: u8,
    seen: &mut HashSet<String>,
) -> Result<(), OutlineError> {
    for entry in entries {
        if level > MAX_OUTLINE_DEPTH {
            return Err(OutlineError::DepthExceeded {
                id: entry.id.clone(),
                max_depth: MAX_OUTLINE_DEPTH,
            });
        }

        if !is_valid_anchor(&entry.id) {
            return Err(OutlineError::InvalidAnchor {
                id: entry.id.clone(),
                title: entry.title.clone(),
            });
        }

        if entry.title.trim().is_empty() {
            return Err(OutlineError::EmptyTitle {
                id: entry.id.clone(),
            });
        }

        if !seen.insert(entry.id.clone()) {
            return Err(OutlineError::DuplicateId {
                id: entry.id.clone(),
            });
        }

        validate_level(&entry.children, level + 1, seen)?;
    }

    Ok(())
}

/// Count every entry in the tree, parents and descendants alike.
pub fn entry_count(entries: &[SectionEntry]) -> usize {
    entries
        .iter()
        .map(|entry| 1 + entry_count(&entry.children))
        .sum()
}

fn is_valid_anchor(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '~'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level_outline() -> Vec<SectionEntry> {
        vec![
            SectionEntry::new("intro", "Introduction"),
            SectionEntry::new("basics", "Basics").with_children(vec![
                SectionEntry::new("terminology", "Terminology"),
                SectionEntry::new("pitfalls", "Pitfalls"),
            ]),
        ]
    }

    #[test]
    fn valid_outline_passes() {
        validate_outline(&two_level_outline()).expect("outline is valid");
    }

    #[test]
    fn duplicate_id_across_levels_is_rejected() {
        let outline = vec![
            SectionEntry::new("intro", "Introduction"),
            SectionEntry::new("details", "Details")
                .with_children(vec![SectionEntry::new("intro", "Intro, again")]),
        ];

        assert_eq!(
            validate_outline(&outline),
            Err(OutlineError::DuplicateId {
                id: "intro".to_string()
            })
        );
    }

    #[test]
    fn whitespace_in_anchor_is_rejected() {
        let outline = vec![SectionEntry::new("not a fragment", "Broken")];
        assert!(matches!(
            validate_outline(&outline),
            Err(OutlineError::InvalidAnchor { .. })
        ));
    }

    #[test]
    fn empty_title_is_rejected() {
        let outline = vec![SectionEntry::new("intro", "   ")];
        assert_eq!(
            validate_outline(&outline),
            Err(OutlineError::EmptyTitle {
                id: "intro".to_string()
            })
        );
    }

    #[test]
    fn excessive_depth_is_rejected() {
        let mut entry = SectionEntry::new("level-17", "Level 17");
        for idx in (1..17).rev() {
            entry = SectionEntry::new(format!("level-{idx}"), format!("Level {idx}"))
                .with_children(vec![entry]);
        }

        assert!(matches!(
            validate_outline(&[entry]),
            Err(OutlineError::DepthExceeded { max_depth: 16, .. })
        ));
    }

    #[test]
    fn entry_count_covers_descendants() {
        assert_eq!(entry_count(&two_level_outline()), 4);
        assert_eq!(entry_count(&[]), 0);
    }
}
