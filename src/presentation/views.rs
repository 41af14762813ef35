use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub origin: &'static str,
    pub public_message: &'static str,
    #[source]
    pub error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }
}

pub fn render_template<T: Template>(
    template: T,
    origin: &'static str,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(origin, "template rendering failed", err))
}

/// One step of the outline walk. The stream is bracketed: every
/// `StartList` has a matching `EndList` and every `StartItem` a matching
/// `EndItem`, with child lists emitted between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocEvent {
    StartList { depth: u8 },
    StartItem { anchor: String, title: String, level: u8 },
    EndItem,
    EndList,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TocView {
    pub events: Vec<TocEvent>,
}

#[derive(Template)]
#[template(path = "toc.html")]
pub struct TocTemplate {
    pub label: String,
    pub view: TocView,
}

/// Render the outline view into the `<nav>` fragment. Titles and anchors
/// are escaped by the template engine.
pub fn render_toc(view: TocView, label: &str) -> Result<String, TemplateRenderError> {
    render_template(
        TocTemplate {
            label: label.to_string(),
            view,
        },
        "presentation::views::render_toc",
    )
}
