//! Block-model binding and HTML emission.
//!
//! Binding works on an owned clone of the template; the caller's value is
//! never touched.

use serde_json::{Map, Value};

use crate::models::resume::{Experience, Resume};
use crate::models::site::TemplateData;
use crate::models::template::{Block, BlockKind, BlockTemplate, SkillItem, TimelineEntry};
use crate::render::placeholder::substitute;
use crate::render::theme::escape_html;

pub const DEFAULT_SKILL_VALUE: u8 = 85;

/// Template data plus the short aliases block text is written against
/// (`{{name}}`, `{{title}}`, `{{summary}}`, ...).
pub fn binding_context(resume: &Resume, data: &TemplateData) -> Value {
    let mut root = match serde_json::to_value(data) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let aliases = [
        ("name", resume.full_name.clone()),
        ("full_name", resume.full_name.clone()),
        ("title", resume.title.clone()),
        ("summary", resume.summary.clone()),
        ("about", resume.summary.clone()),
        ("email", resume.email.clone()),
        ("phone", resume.phone.clone().unwrap_or_default()),
        ("location", resume.location.clone().unwrap_or_default()),
    ];
    for (key, value) in aliases {
        root.insert(key.to_string(), Value::String(value));
    }
    Value::Object(root)
}

/// `start - end`, or whichever side is present.
pub fn period(experience: &Experience) -> String {
    match (experience.start_date.trim(), experience.end_date.trim()) {
        ("", "") => String::new(),
        (start, "") => start.to_string(),
        ("", end) => end.to_string(),
        (start, end) => format!("{start} - {end}"),
    }
}

fn bind_text(authored: &Option<String>, default_token: &str, context: &Value) -> Option<String> {
    let text = authored.as_deref().unwrap_or(default_token);
    Some(substitute(text, context, false))
}

fn bind_block(block: &mut Block, resume: &Resume, data: &TemplateData, context: &Value) {
    match &mut block.kind {
        BlockKind::Hero { heading, subheading } => {
            *heading = bind_text(heading, "{{name}}", context);
            *subheading = bind_text(subheading, "{{title}}", context);
        }
        BlockKind::Text { content } => {
            *content = bind_text(content, "{{summary}}", context);
        }
        BlockKind::Skills { items } => {
            let bound = resume
                .skills
                .iter()
                .map(|skill| SkillItem {
                    label: skill.clone(),
                    value: items
                        .iter()
                        .find(|i| i.label.eq_ignore_ascii_case(skill))
                        .map(|i| i.value.min(100))
                        .unwrap_or(DEFAULT_SKILL_VALUE),
                })
                .collect();
            *items = bound;
        }
        BlockKind::Timeline { entries } => {
            *entries = resume
                .experience
                .iter()
                .map(|exp| TimelineEntry {
                    title: exp.title.clone(),
                    organization: exp.company.clone(),
                    period: period(exp),
                    description: exp.description.clone(),
                })
                .collect();
        }
        BlockKind::Contact { email, phone } => {
            *email = bind_text(email, "{{email}}", context);
            *phone = bind_text(phone, "{{phone}}", context);
        }
        BlockKind::Gallery { images } => {
            if images.is_empty() {
                images.clone_from(&data.assets.images);
            }
        }
    }
}

/// Returns a bound copy of `template`.
pub fn bind_template(template: &BlockTemplate, resume: &Resume, data: &TemplateData) -> BlockTemplate {
    let context = binding_context(resume, data);
    let mut bound = template.clone();
    for section in &mut bound.sections {
        for block in &mut section.blocks {
            bind_block(block, resume, data, &context);
        }
    }
    bound
}

// ────────────────────────────────────────────────────────────────────────────
// HTML
// ────────────────────────────────────────────────────────────────────────────

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn block_html(block: &Block) -> String {
    let id = escape_html(&block.id);
    let class = format!("block block-{}", block.kind.type_name());
    match &block.kind {
        BlockKind::Hero { heading, subheading } => {
            let mut html = format!("<header id=\"{id}\" class=\"{class}\">");
            html.push_str(&format!("<h1>{}</h1>", escape_html(non_empty(heading).unwrap_or_default())));
            if let Some(sub) = non_empty(subheading) {
                html.push_str(&format!("<p class=\"subheading\">{}</p>", escape_html(sub)));
            }
            html.push_str("</header>");
            html
        }
        BlockKind::Text { content } => {
            let paragraphs: String = non_empty(content)
                .unwrap_or_default()
                .split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .map(|p| format!("<p>{}</p>", escape_html(p.trim())))
                .collect();
            format!("<div id=\"{id}\" class=\"{class}\">{paragraphs}</div>")
        }
        BlockKind::Skills { items } => {
            let items: String = items
                .iter()
                .map(|item| {
                    format!(
                        "<li><span class=\"skill-label\">{}</span><span class=\"skill-bar\" style=\"--value: {}%\"></span></li>",
                        escape_html(&item.label),
                        item.value
                    )
                })
                .collect();
            format!("<ul id=\"{id}\" class=\"{class}\">{items}</ul>")
        }
        BlockKind::Timeline { entries } => {
            let entries: String = entries
                .iter()
                .map(|entry| {
                    let mut li = format!("<li><h3>{}</h3>", escape_html(&entry.title));
                    if !entry.organization.is_empty() {
                        li.push_str(&format!(
                            "<p class=\"organization\">{}</p>",
                            escape_html(&entry.organization)
                        ));
                    }
                    if !entry.period.is_empty() {
                        li.push_str(&format!("<p class=\"period\">{}</p>", escape_html(&entry.period)));
                    }
                    if !entry.description.is_empty() {
                        li.push_str(&format!("<p>{}</p>", escape_html(&entry.description)));
                    }
                    li.push_str("</li>");
                    li
                })
                .collect();
            format!("<ol id=\"{id}\" class=\"{class}\">{entries}</ol>")
        }
        BlockKind::Contact { email, phone } => {
            let mut html = format!("<div id=\"{id}\" class=\"{class}\">");
            if let Some(email) = non_empty(email) {
                let email = escape_html(email);
                html.push_str(&format!("<a class=\"email\" href=\"mailto:{email}\">{email}</a>"));
            }
            if let Some(phone) = non_empty(phone) {
                let phone = escape_html(phone);
                html.push_str(&format!("<a class=\"phone\" href=\"tel:{phone}\">{phone}</a>"));
            }
            html.push_str("</div>");
            html
        }
        BlockKind::Gallery { images } => {
            let images: String = images
                .iter()
                .map(|src| format!("<img src=\"{}\" alt=\"\" loading=\"lazy\">", escape_html(src)))
                .collect();
            format!("<div id=\"{id}\" class=\"{class}\">{images}</div>")
        }
    }
}

/// Body markup for a bound template: one `<section>` per template section.
pub fn body_html(template: &BlockTemplate) -> String {
    template
        .sections
        .iter()
        .map(|section| {
            let class = match section.class_name.trim() {
                "" => "section".to_string(),
                extra => format!("section {}", escape_html(extra)),
            };
            let blocks: String = section.blocks.iter().map(block_html).collect();
            format!(
                "<section id=\"{}\" class=\"{class}\"><div class=\"container\">{blocks}</div></section>\n",
                escape_html(&section.id)
            )
        })
        .collect()
}
