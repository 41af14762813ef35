//! Deterministic anchor derivation for manifest entries that omit an id.
//!
//! Explicit ids are always taken verbatim; these helpers only fill the
//! gaps, suffixing a monotonic counter when a derived anchor would repeat
//! one already present in the document (`overview`, `overview-2`, ...).

use std::collections::HashSet;

use slug::slugify;
use thiserror::Error;

const MAX_SUFFIX_ATTEMPTS: usize = 32;

/// Errors that can occur while deriving an anchor from a title.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("anchor source text is empty")]
    EmptyInput,
    #[error("failed to derive an anchor from `{input}`")]
    Unrepresentable { input: String },
    #[error("exhausted attempts to find a unique anchor for `{base}`")]
    Exhausted { base: String },
}

/// Derive a base anchor fragment from human-readable title text.
pub fn derive_anchor(input: &str) -> Result<String, AnchorError> {
    if input.trim().is_empty() {
        return Err(AnchorError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(AnchorError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Deterministically generate unique anchors within a single document.
///
/// Titles processed in order receive monotonic suffixes when duplicates
/// occur. Explicit ids can be reserved up front so derived anchors never
/// collide with them; every suffixed candidate is checked against the
/// anchors already taken, not just the base.
#[derive(Default, Debug)]
pub struct AnchorSlugger {
    taken: HashSet<String>,
}

impl AnchorSlugger {
    pub fn new() -> Self {
        Self {
            taken: HashSet::new(),
        }
    }

    /// Mark an anchor as taken without deriving anything.
    pub fn reserve(&mut self, anchor: &str) {
        self.taken.insert(anchor.to_string());
    }

    /// Generate an anchor for the provided title, unique within this
    /// slugger. The base slug is tried first, then suffixed candidates
    /// (`-2`, `-3`, ...), each probed against the taken set. Returns an
    /// error when the title cannot produce an anchor or the suffix
    /// attempts are exhausted.
    pub fn anchor_for(&mut self, title: &str) -> Result<String, AnchorError> {
        let base = derive_anchor(title)?;

        if self.taken.insert(base.clone()) {
            return Ok(base);
        }

        for attempt in 2..=MAX_SUFFIX_ATTEMPTS + 1 {
            let candidate = format!("{base}-{attempt}");
            if self.taken.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }

        Err(AnchorError::Exhausted { base })
    }
}
