//! Built-in template catalog.
//!
//! Two templates ship with the service: a placeholder-model page for
//! developers and a block-model portfolio for artists.

pub mod handlers;

use serde::Serialize;

use crate::models::site::{ProfileType, StyleOverrides};
use crate::models::template::{
    Block, BlockKind, BlockTemplate, PlaceholderTemplate, Template, TemplateBody, TemplateSection,
};

const DEVELOPER_HTML: &str = r#"<header class="hero" id="hero">
  <div class="container">
    <h1>{{content.full_name}}</h1>
    <p class="subtitle">{{content.title}}</p>
  </div>
</header>
<section class="section" id="about">
  <div class="container">
    <h2>About</h2>
    <p>{{content.summary}}</p>
  </div>
</section>
<section class="section" id="skills">
  <div class="container">
    <h2>Skills</h2>
    <p>{{content.skills}}</p>
  </div>
</section>
<section class="section" id="contact">
  <div class="container">
    <h2>Contact</h2>
    <p><a href="mailto:{{content.email}}">{{content.email}}</a></p>
    <p>{{content.location}}</p>
  </div>
</section>"#;

const DEVELOPER_CSS: &str = r#"body { font-family: var(--font-body); color: var(--color-text); margin: 0; }
h1, h2 { font-family: var(--font-heading); color: {{theme.colors.headings}}; }
.hero { background: var(--color-primary); color: #ffffff; padding: var(--spacing-section) 0; }
.container { max-width: var(--max-width); margin: 0 auto; padding: 0 var(--spacing-element); }
.section { padding: var(--spacing-section) 0; }"#;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub profile_type: ProfileType,
    pub model: &'static str,
}

impl From<&Template> for TemplateSummary {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            profile_type: template.profile_type,
            model: match template.body {
                TemplateBody::Placeholder(_) => "placeholder",
                TemplateBody::Blocks(_) => "blocks",
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn builtin() -> Self {
        Self::new(vec![developer_classic(), portfolio_blocks()])
    }

    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(TemplateSummary::from).collect()
    }
}

fn developer_classic() -> Template {
    Template {
        id: "developer-classic".to_string(),
        name: "Developer Classic".to_string(),
        description: "Single-page developer profile with hero, about, skills and contact".to_string(),
        profile_type: ProfileType::Developer,
        overrides: StyleOverrides::default(),
        body: TemplateBody::Placeholder(PlaceholderTemplate {
            html: DEVELOPER_HTML.to_string(),
            css: DEVELOPER_CSS.to_string(),
            script: String::new(),
        }),
    }
}

fn block(id: &str, kind: BlockKind) -> Block {
    Block {
        id: id.to_string(),
        kind,
    }
}

fn section(id: &str, blocks: Vec<Block>) -> TemplateSection {
    TemplateSection {
        id: id.to_string(),
        class_name: format!("section-{id}"),
        blocks,
    }
}

fn portfolio_blocks() -> Template {
    Template {
        id: "portfolio-blocks".to_string(),
        name: "Portfolio Blocks".to_string(),
        description: "Block-based portfolio with gallery and career timeline".to_string(),
        profile_type: ProfileType::Artist,
        overrides: StyleOverrides::default(),
        body: TemplateBody::Blocks(BlockTemplate {
            sections: vec![
                section(
                    "hero",
                    vec![block(
                        "hero-main",
                        BlockKind::Hero {
                            heading: None,
                            subheading: None,
                        },
                    )],
                ),
                section("about", vec![block("about-text", BlockKind::Text { content: None })]),
                section(
                    "work",
                    vec![
                        block("work-gallery", BlockKind::Gallery { images: vec![] }),
                        block("work-skills", BlockKind::Skills { items: vec![] }),
                    ],
                ),
                section(
                    "experience",
                    vec![block("experience-timeline", BlockKind::Timeline { entries: vec![] })],
                ),
                section(
                    "contact",
                    vec![block(
                        "contact-details",
                        BlockKind::Contact {
                            email: None,
                            phone: None,
                        },
                    )],
                ),
            ],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::ResumeConverter;
    use crate::models::resume::Resume;
    use crate::render::render;

    #[test]
    fn test_builtin_ids_are_unique_and_addressable() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.list().len(), 2);
        assert!(catalog.get("developer-classic").is_some());
        assert!(catalog.get("portfolio-blocks").is_some());
        assert!(catalog.get("missing").is_none());

        let models: Vec<_> = catalog.summaries().iter().map(|s| s.model).collect();
        assert_eq!(models, vec!["placeholder", "blocks"]);
    }

    #[test]
    fn test_every_builtin_renders() {
        let resume = Resume {
            full_name: "Jane Doe".to_string(),
            title: "Painter".to_string(),
            email: "jane@example.com".to_string(),
            ..Resume::default()
        };
        let converter = ResumeConverter::default();
        for template in TemplateCatalog::builtin().list() {
            let data = converter.convert(&resume, template.profile_type, &template.overrides);
            let assets = render(template, &resume, &data).unwrap();
            assert!(assets.html.contains("Jane Doe"), "{}", template.id);
            assert!(assets.html.contains("mailto:jane@example.com"), "{}", template.id);
        }
    }
}
