//! Per-profile defaults: one table row per `ProfileType`, indexed by the enum.
//!
//! Adding a profile type means adding a variant and a row here; nothing in the
//! converter switches on the profile.

use crate::models::site::{
    ColorPalette, Layout, ProfileType, SectionId, Shadows, Spacing, ThemeDescriptor, TypeScale,
    Typography,
};

pub struct ProfileDefaults {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
    /// h1, h2, h3, body, small
    pub sizes: [&'static str; 5],
    pub max_width: &'static str,
    pub section_spacing: &'static str,
    pub element_spacing: &'static str,
    pub border_radius: &'static str,
    /// light, medium, strong
    pub shadows: [&'static str; 3],
    pub use_icons: bool,
    /// Profile-specific sections, inserted between `about` and `contact`.
    pub sections: &'static [SectionId],
    pub theme_name: &'static str,
}

const BACKGROUND: &str = "#ffffff";
const TEXT: &str = "#2d3748";
const HEADINGS: &str = "#1a202c";

// Row order must match the `ProfileType` declaration order.
static PROFILE_TABLE: [ProfileDefaults; 5] = [
    ProfileDefaults {
        primary: "#0066cc",
        secondary: "#2d3748",
        accent: "#38b2ac",
        heading_font: "Inter",
        body_font: "Inter",
        sizes: ["2.5rem", "2rem", "1.5rem", "1rem", "0.875rem"],
        max_width: "1200px",
        section_spacing: "4rem",
        element_spacing: "1.5rem",
        border_radius: "0.5rem",
        shadows: [
            "0 1px 3px rgba(0,0,0,0.12)",
            "0 4px 6px rgba(0,0,0,0.1)",
            "0 10px 15px rgba(0,0,0,0.1)",
        ],
        use_icons: true,
        sections: &[
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Experience,
            SectionId::Education,
        ],
        theme_name: "Developer Theme",
    },
    ProfileDefaults {
        primary: "#2c5282",
        secondary: "#2d3748",
        accent: "#38a169",
        heading_font: "Montserrat",
        body_font: "Inter",
        sizes: ["3rem", "2.25rem", "1.75rem", "1rem", "0.875rem"],
        max_width: "1400px",
        section_spacing: "5rem",
        element_spacing: "2rem",
        border_radius: "0.75rem",
        shadows: [
            "0 2px 4px rgba(0,0,0,0.1)",
            "0 6px 12px rgba(0,0,0,0.1)",
            "0 15px 25px rgba(0,0,0,0.1)",
        ],
        use_icons: true,
        sections: &[
            SectionId::Ventures,
            SectionId::Achievements,
            SectionId::Expertise,
        ],
        theme_name: "Entrepreneur Theme",
    },
    ProfileDefaults {
        primary: "#805ad5",
        secondary: "#2d3748",
        accent: "#d53f8c",
        heading_font: "Playfair Display",
        body_font: "Inter",
        sizes: ["3.5rem", "2.5rem", "2rem", "1.125rem", "0.875rem"],
        max_width: "1600px",
        section_spacing: "6rem",
        element_spacing: "2.5rem",
        border_radius: "1rem",
        shadows: [
            "0 2px 6px rgba(0,0,0,0.08)",
            "0 8px 16px rgba(0,0,0,0.08)",
            "0 20px 30px rgba(0,0,0,0.08)",
        ],
        use_icons: false,
        sections: &[
            SectionId::Portfolio,
            SectionId::Exhibitions,
            SectionId::Statement,
        ],
        theme_name: "Artist Theme",
    },
    ProfileDefaults {
        primary: "#d53f8c",
        secondary: "#2d3748",
        accent: "#805ad5",
        heading_font: "Lora",
        body_font: "Inter",
        sizes: ["3rem", "2.25rem", "1.75rem", "1.125rem", "0.875rem"],
        max_width: "1400px",
        section_spacing: "5rem",
        element_spacing: "2rem",
        border_radius: "0.5rem",
        shadows: [
            "0 2px 4px rgba(0,0,0,0.1)",
            "0 6px 12px rgba(0,0,0,0.1)",
            "0 15px 25px rgba(0,0,0,0.1)",
        ],
        use_icons: false,
        sections: &[
            SectionId::Performances,
            SectionId::Repertoire,
            SectionId::Media,
        ],
        theme_name: "Musician Theme",
    },
    ProfileDefaults {
        primary: "#2c5282",
        secondary: "#2d3748",
        accent: "#805ad5",
        heading_font: "Merriweather",
        body_font: "Inter",
        sizes: ["2.75rem", "2.25rem", "1.75rem", "1rem", "0.875rem"],
        max_width: "1200px",
        section_spacing: "4rem",
        element_spacing: "1.5rem",
        border_radius: "0.25rem",
        shadows: [
            "0 1px 2px rgba(0,0,0,0.1)",
            "0 3px 6px rgba(0,0,0,0.1)",
            "0 8px 12px rgba(0,0,0,0.1)",
        ],
        use_icons: true,
        sections: &[
            SectionId::Research,
            SectionId::Publications,
            SectionId::Teaching,
            SectionId::Education,
        ],
        theme_name: "Academic Theme",
    },
];

pub fn defaults(profile: ProfileType) -> &'static ProfileDefaults {
    &PROFILE_TABLE[profile as usize]
}

/// `hero, about, <profile sections>, contact`, before presence filtering.
pub fn candidate_sections(profile: ProfileType) -> Vec<SectionId> {
    let mut sections = vec![SectionId::Hero, SectionId::About];
    sections.extend_from_slice(defaults(profile).sections);
    sections.push(SectionId::Contact);
    sections
}

impl ProfileDefaults {
    /// The unpatched theme for this profile.
    pub fn theme(&self) -> ThemeDescriptor {
        let [h1, h2, h3, body, small] = self.sizes;
        let [light, medium, strong] = self.shadows;
        ThemeDescriptor {
            colors: ColorPalette {
                primary: self.primary.to_string(),
                secondary: self.secondary.to_string(),
                accent: self.accent.to_string(),
                background: BACKGROUND.to_string(),
                text: TEXT.to_string(),
                headings: HEADINGS.to_string(),
            },
            typography: Typography {
                heading: self.heading_font.to_string(),
                body: self.body_font.to_string(),
                accent: self.heading_font.to_string(),
                sizes: TypeScale {
                    h1: h1.to_string(),
                    h2: h2.to_string(),
                    h3: h3.to_string(),
                    body: body.to_string(),
                    small: small.to_string(),
                },
            },
            layout: Layout {
                max_width: self.max_width.to_string(),
                spacing: Spacing {
                    section: self.section_spacing.to_string(),
                    element: self.element_spacing.to_string(),
                },
                border_radius: self.border_radius.to_string(),
                shadows: Shadows {
                    light: light.to_string(),
                    medium: medium.to_string(),
                    strong: strong.to_string(),
                },
                use_icons: self.use_icons,
            },
        }
    }
}
