//! Custom Handlebars templates
//!
//! Unlike [`super::render`], this path can fail: the template text comes
//! from the operator.

use handlebars::Handlebars;
use serde::Serialize;

use crate::answers::AnswerRecord;
use crate::error::{ReadmeError, Result};

/// Data exposed to a custom template
///
/// Carries every answer field plus derived license values.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    #[serde(flatten)]
    pub answers: &'a AnswerRecord,
    pub license_name: &'static str,
    /// Empty when no license applies
    pub license_badge: &'static str,
    pub license_notice: String,
    pub has_license: bool,
}

impl<'a> TemplateContext<'a> {
    pub fn new(answers: &'a AnswerRecord) -> Self {
        Self {
            answers,
            license_name: answers.license.name(),
            license_badge: answers.license.badge().unwrap_or(""),
            license_notice: answers.license.notice(),
            has_license: answers.license.is_licensed(),
        }
    }
}

/// Render an answer record through a Handlebars template
///
/// Output is markdown, so HTML escaping is disabled.
pub fn render_with_template(template: &str, record: &AnswerRecord) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);

    let context = TemplateContext::new(record);
    registry
        .render_template(template, &context)
        .map_err(|e| ReadmeError::Template(e.to_string()))
}
