//! Template rendering: `(Template, Resume, TemplateData) → RenderedAssets`.
//!
//! Rendering is a pure function of its inputs: the same triple always yields
//! byte-identical assets.

pub mod blocks;
pub mod placeholder;
pub mod theme;

use std::collections::HashSet;

use thiserror::Error;

use crate::models::resume::Resume;
use crate::models::site::{RenderedAssets, TemplateData};
use crate::models::template::{BlockTemplate, PlaceholderTemplate, Template, TemplateBody};
use crate::render::theme::{escape_html, font_links, theme_css, BASE_CSS, DEFAULT_SCRIPT};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template '{0}' has no content to render")]
    EmptyTemplate(String),

    #[error("Template '{template}' declares section '{section}' more than once")]
    DuplicateSection { template: String, section: String },

    #[error("Failed to serialize template data: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn render(
    template: &Template,
    resume: &Resume,
    data: &TemplateData,
) -> Result<RenderedAssets, RenderError> {
    match &template.body {
        TemplateBody::Placeholder(body) => render_placeholder(template, body, data),
        TemplateBody::Blocks(body) => render_blocks(template, body, resume, data),
    }
}

fn render_placeholder(
    template: &Template,
    body: &PlaceholderTemplate,
    data: &TemplateData,
) -> Result<RenderedAssets, RenderError> {
    if body.html.trim().is_empty() {
        return Err(RenderError::EmptyTemplate(template.id.clone()));
    }

    let context = serde_json::to_value(data)?;
    let markup = placeholder::substitute(&body.html, &context, true);
    let html = if markup.contains("<html") {
        markup
    } else {
        document(data, &markup)
    };

    let mut css = theme_css(&data.theme);
    let custom_css = placeholder::substitute(&body.css, &context, false);
    if !custom_css.trim().is_empty() {
        css.push('\n');
        css.push_str(&custom_css);
    }

    let script = match body.script.trim() {
        "" => DEFAULT_SCRIPT.to_string(),
        _ => placeholder::substitute(&body.script, &context, false),
    };

    Ok(RenderedAssets { html, css, script })
}

fn render_blocks(
    template: &Template,
    body: &BlockTemplate,
    resume: &Resume,
    data: &TemplateData,
) -> Result<RenderedAssets, RenderError> {
    if body.sections.iter().all(|s| s.blocks.is_empty()) {
        return Err(RenderError::EmptyTemplate(template.id.clone()));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = body.sections.iter().find(|s| !seen.insert(s.id.as_str())) {
        return Err(RenderError::DuplicateSection {
            template: template.id.clone(),
            section: dup.id.clone(),
        });
    }

    let bound = blocks::bind_template(body, resume, data);
    let html = document(data, &blocks::body_html(&bound));
    let css = format!("{}\n{}", theme_css(&data.theme), BASE_CSS);

    Ok(RenderedAssets {
        html,
        css,
        script: DEFAULT_SCRIPT.to_string(),
    })
}

/// Wraps body markup in a full HTML document linking the sibling assets.
fn document(data: &TemplateData, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>{title}</title>
  {fonts}
  <link rel=\"stylesheet\" href=\"styles.css\">
</head>
<body class=\"theme-{profile}\">
{body}
<script src=\"script.js\"></script>
</body>
</html>
",
        title = escape_html(&data.name),
        fonts = font_links(&data.assets.fonts),
        profile = data.profile_type.as_str(),
    )
}
