use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One of the six page regions, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    /// The element id of the section, also its anchor fragment.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: Section,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink {
        section: Section::Home,
        label: "Home",
    },
    NavLink {
        section: Section::About,
        label: "About",
    },
    NavLink {
        section: Section::Projects,
        label: "Projects",
    },
    NavLink {
        section: Section::Skills,
        label: "Skills",
    },
    NavLink {
        section: Section::Experience,
        label: "Experience",
    },
    NavLink {
        section: Section::Contact,
        label: "Contact",
    },
];

/// Open/closed state of the small-screen overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link from the overlay always closes it.
    pub fn select(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_follow_document_order() {
        let sections = NAV_LINKS.iter().map(|l| l.section).collect::<Vec<_>>();
        assert_eq!(sections, Section::ALL.to_vec());
        assert_eq!(NAV_LINKS[0].section, Section::default());
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!("skills".parse::<Section>(), Ok(Section::Skills));
        assert_eq!("#contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(
            "footer".parse::<Section>(),
            Err(UnknownSection("footer".to_string()))
        );
        for section in Section::ALL {
            assert_eq!(section.href().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_section_serializes_as_id() {
        let json = serde_json::to_string(&Section::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
        let back: Section = serde_json::from_str("\"about\"").unwrap();
        assert_eq!(back, Section::About);
    }

    #[test]
    fn test_mobile_menu_select_closes() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());

        menu.select();
        assert!(!menu.is_open());

        // selecting from a closed menu leaves it closed
        menu.select();
        assert!(!menu.is_open());
    }
}
