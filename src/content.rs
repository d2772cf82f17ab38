use crate::viewport::NavItem;

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new("Home", "#home"),
    NavItem::new("About", "#about"),
    NavItem::new("Projects", "#projects"),
    NavItem::new("Experience", "#experience"),
    NavItem::new("Skills", "#skills"),
    NavItem::new("Hobbies", "#hobbies"),
    NavItem::new("Achievements", "#achievements"),
    NavItem::new("Contact", "#contact"),
];

#[derive(Debug, Clone, Copy)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub course: &'static str,
    pub photo: &'static str,
    pub links: &'static [ExternalLink],
}

pub const PROFILE: Profile = Profile {
    name: "Ananya Goyal",
    role: "Computer Science Student",
    email: "ananya@gmail.com",
    course: "BCA Hons.",
    photo: "/profile.png",
    links: &[
        ExternalLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/feed/",
            icon: "/linkedin.png",
        },
        ExternalLink {
            label: "StackOverflow",
            href: "https://stackoverflow.com/",
            icon: "/stackoverflow.png",
        },
    ],
};

pub const ABOUT: &str = "I am currently studying at Christ University, Yeswanthpur campus, and I am passionate about learning cyber hacks and gaining hands-on experience.";

pub const HOBBIES: &str = "Reading about cybersecurity, building small web apps, sketching UI ideas, and participating in CTF-style challenges.";

pub const ACHIEVEMENTS: &[&str] = &[
    "Dean's list 2024",
    "Organized a college cybersecurity workshop",
    "Contributed answers on StackOverflow",
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    pub source: Option<&'static str>,
}

impl Project {
    /// Where the card points: the live link, then the source, if either exists.
    pub fn href(&self) -> Option<&'static str> {
        self.link.or(self.source)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Metis Lab Management System",
        description: "Automated lab access and management with secure role-based auth, real-time logs, and resource tracking.",
        tags: &["Python", "Flask", "SQLite", "HTML", "CSS", "JavaScript"],
        link: None,
        source: None,
    },
    Project {
        title: "Portfolio Website",
        description: "Responsive personal site with a resume layout and accessible UI.",
        tags: &["Rust", "Leptos", "TailwindCSS"],
        link: None,
        source: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub organisation: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        period: "2024",
        title: "Workshop Organizer",
        organisation: "College Cybersecurity Workshop",
        summary: "Planned and ran a hands-on cybersecurity workshop for fellow students.",
    },
    Experience {
        period: "2023 - Present",
        title: "Contributor",
        organisation: "StackOverflow",
        summary: "Answering questions on web development and Python.",
    },
    Experience {
        period: "2022 - Present",
        title: "BCA (Hons.) Student",
        organisation: "Christ University, Yeswanthpur",
        summary: "Coursework in programming, databases, networking and security.",
    },
];

pub const SKILLS: &[&str] = &[
    "Python",
    "Flask",
    "SQLite",
    "JavaScript",
    "HTML",
    "CSS",
    "Rust",
    "Git",
    "Linux",
    "Networking",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_targets_are_unique_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
        let ids = NAV_ITEMS
            .iter()
            .map(|item| item.section_id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_ITEMS.len());
        assert_eq!(NAV_ITEMS[0].section_id(), "home");
        assert!(ids.contains("contact"));
    }

    #[test]
    fn test_project_href_prefers_link() {
        let project = Project {
            title: "t",
            description: "d",
            tags: &[],
            link: Some("https://example.com"),
            source: Some("https://github.com/example"),
        };
        assert_eq!(project.href(), Some("https://example.com"));

        let source_only = Project {
            link: None,
            ..project
        };
        assert_eq!(source_only.href(), Some("https://github.com/example"));
        assert_eq!(PROJECTS[0].href(), None);
    }
}
