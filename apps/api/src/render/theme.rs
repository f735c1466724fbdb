//! Stylesheet and script fragments shared by both template models.

use crate::models::site::ThemeDescriptor;

/// Below this width headings and spacing shrink by [`MOBILE_SCALE`].
pub const MOBILE_BREAKPOINT: &str = "768px";
pub const MOBILE_SCALE: &str = "0.8";

/// One `:root` block mapping every theme field to a CSS variable, followed by
/// the responsive override.
pub fn theme_css(theme: &ThemeDescriptor) -> String {
    let c = &theme.colors;
    let t = &theme.typography;
    let s = &t.sizes;
    let l = &theme.layout;

    format!(
        ":root {{
  --color-primary: {primary};
  --color-secondary: {secondary};
  --color-accent: {accent};
  --color-background: {background};
  --color-text: {text};
  --color-headings: {headings};
  --font-heading: '{font_heading}', sans-serif;
  --font-body: '{font_body}', sans-serif;
  --font-accent: '{font_accent}', sans-serif;
  --size-h1: {h1};
  --size-h2: {h2};
  --size-h3: {h3};
  --size-body: {size_body};
  --size-small: {small};
  --spacing-section: {section};
  --spacing-element: {element};
  --border-radius: {radius};
  --shadow-light: {light};
  --shadow-medium: {medium};
  --shadow-strong: {strong};
  --max-width: {max_width};
}}

@media (max-width: {MOBILE_BREAKPOINT}) {{
  :root {{
    --size-h1: calc({h1} * {MOBILE_SCALE});
    --size-h2: calc({h2} * {MOBILE_SCALE});
    --size-h3: calc({h3} * {MOBILE_SCALE});
    --spacing-section: calc({section} * {MOBILE_SCALE});
    --spacing-element: calc({element} * {MOBILE_SCALE});
  }}
}}
",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
        background = c.background,
        text = c.text,
        headings = c.headings,
        font_heading = t.heading,
        font_body = t.body,
        font_accent = t.accent,
        h1 = s.h1,
        h2 = s.h2,
        h3 = s.h3,
        size_body = s.body,
        small = s.small,
        section = l.spacing.section,
        element = l.spacing.element,
        radius = l.border_radius,
        light = l.shadows.light,
        medium = l.shadows.medium,
        strong = l.shadows.strong,
        max_width = l.max_width,
    )
}

/// Base rules for block-model pages.
pub const BASE_CSS: &str = "* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: var(--font-body); font-size: var(--size-body); color: var(--color-text); background-color: var(--color-background); line-height: 1.6; }
h1, h2, h3 { font-family: var(--font-heading); color: var(--color-headings); margin-bottom: var(--spacing-element); }
h1 { font-size: var(--size-h1); }
h2 { font-size: var(--size-h2); }
h3 { font-size: var(--size-h3); }
p { margin-bottom: 1rem; }
a { color: var(--color-primary); }
.container { max-width: var(--max-width); margin: 0 auto; padding: 0 2rem; }
.section { padding: var(--spacing-section) 0; }
.block { margin-bottom: var(--spacing-element); }
.block-hero .subheading { font-family: var(--font-accent); color: var(--color-secondary); }
.block-skills { list-style: none; }
.skill-bar { display: block; height: 0.5rem; width: var(--value); background: var(--color-accent); border-radius: var(--border-radius); }
.block-timeline { list-style: none; }
.block-timeline li { padding: var(--spacing-element); box-shadow: var(--shadow-light); border-radius: var(--border-radius); }
.block-timeline .period { font-size: var(--size-small); color: var(--color-secondary); }
.block-gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: var(--spacing-element); }
.block-gallery img { width: 100%; border-radius: var(--border-radius); box-shadow: var(--shadow-medium); }
";

/// Smooth anchor scrolling plus a `visible` class on sections entering the viewport.
pub const DEFAULT_SCRIPT: &str = "document.addEventListener('DOMContentLoaded', function () {
  document.querySelectorAll('a[href^=\"#\"]').forEach(function (anchor) {
    anchor.addEventListener('click', function (e) {
      var target = document.querySelector(this.getAttribute('href'));
      if (target) {
        e.preventDefault();
        target.scrollIntoView({ behavior: 'smooth' });
      }
    });
  });

  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
      }
    });
  }, { threshold: 0.1 });

  document.querySelectorAll('.section').forEach(function (section) {
    observer.observe(section);
  });
});
";

/// Google Fonts `<link>` tags for each distinct font.
pub fn font_links(fonts: &[String]) -> String {
    fonts
        .iter()
        .map(|font| {
            format!(
                "<link href=\"https://fonts.googleapis.com/css2?family={}&display=swap\" rel=\"stylesheet\">",
                font.trim().replace(' ', "+")
            )
        })
        .collect::<Vec<_>>()
        .join("\n  ")
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
