//! Flattens a section tree into the event stream the template renders.
//!
//! The stream brackets every list and item explicitly so the template can
//! stay a single linear walk; children are emitted between their parent's
//! start and end events, which is what nests the sublists in the output.

use crate::domain::outline::SectionEntry;
use crate::presentation::views::{TocEvent, TocView};

/// Build the renderable view for an outline. Empty input still yields the
/// outer list pair so the rendered container stays structurally valid.
pub fn build_toc_view(entries: &[SectionEntry]) -> TocView {
    let mut events = Vec::new();
    append_toc_events(entries, 1, &mut events);
    TocView { events }
}

fn append_toc_events(entries: &[SectionEntry], depth: u8, events: &mut Vec<TocEvent>) {
    events.push(TocEvent::StartList { depth });

    for entry in entries {
        events.push(TocEvent::StartItem {
            anchor: entry.id.clone(),
            title: entry.title.trim().to_string(),
            level: depth,
        });

        if !entry.children.is_empty() {
            append_toc_events(&entry.children, depth + 1, events);
        }

        events.push(TocEvent::EndItem);
    }

    events.push(TocEvent::EndList);
}
