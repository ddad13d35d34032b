pub const FULL_NAME: &str = "Nora Vance";
pub const ROLE: &str = "Full-Stack Software Engineer";
pub const SITE_DESCRIPTION: &str =
    "Full-stack software engineer portfolio - Rust, Go, Python, React, cloud-native systems and scalable services.";
pub const EMAIL: &str = "hello@noravance.dev";
pub const PHONE: &str = "+1 (503) 555-0164";
pub const PHONE_HREF: &str = "tel:+15035550164";
pub const LOCATION: &str = "Portland, Oregon, USA";
pub const GITHUB_USERNAME: &str = "noravance";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/noravance/";
pub const RESUME_PATH: &str = "/NoraVanceResume.pdf";
pub const PORTRAIT_PATH: &str = "/nora.jpg";
pub const PORTRAIT_THUMB_PATH: &str = "/nora_thumb.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        href: "#home",
        label: "Home",
    },
    NavItem {
        href: "#skills",
        label: "Skills",
    },
    NavItem {
        href: "#experience",
        label: "Experience",
    },
    NavItem {
        href: "#projects",
        label: "Projects",
    },
    NavItem {
        href: "#github",
        label: "GitHub",
    },
    NavItem {
        href: "#contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Core,
    Strong,
    Supporting,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Core => "Core Stack",
            SkillLevel::Strong => "Strong",
            SkillLevel::Supporting => "Supporting",
        }
    }

    /// Width and tint of the emphasis bar under a skill group heading.
    pub fn bar_class(&self) -> &'static str {
        match self {
            SkillLevel::Core => "w-4/5 bg-emerald-400/80",
            SkillLevel::Strong => "w-3/4 bg-emerald-300/80",
            SkillLevel::Supporting => "w-2/3 bg-emerald-200/80",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub level: SkillLevel,
    pub tooltip: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

pub static SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup {
        title: "Languages & Frameworks",
        level: SkillLevel::Core,
        tooltip: "The tech I reach for most often when building backend APIs and frontend apps.",
        icon: "💻",
        items: &[
            "Rust (Axum, Leptos)",
            "Go (Gin)",
            "Python (Django, FastAPI)",
            "TypeScript",
            "JavaScript",
            "React",
            "Node.js",
        ],
    },
    SkillGroup {
        title: "Databases & Querying",
        level: SkillLevel::Strong,
        tooltip: "Relational and NoSQL stores I use for schema design and efficient queries.",
        icon: "🗄️",
        items: &[
            "SQL",
            "PostgreSQL",
            "Redis",
            "MongoDB",
            "SQLite",
            "Elasticsearch",
        ],
    },
    SkillGroup {
        title: "Cloud & Infrastructure",
        level: SkillLevel::Strong,
        tooltip: "Cloud services and DevOps tooling I use to deploy, scale and monitor applications.",
        icon: "☁️",
        items: &[
            "AWS (S3, EC2, RDS, Lambda)",
            "Google Cloud Platform (Cloud Run, Pub/Sub)",
            "Docker",
            "Kubernetes (basic)",
            "CI/CD (GitHub Actions, CircleCI)",
        ],
    },
    SkillGroup {
        title: "Development Practices",
        level: SkillLevel::Core,
        tooltip: "How I structure code and teams to keep systems maintainable and resilient.",
        icon: "🔧",
        items: &[
            "REST API Design",
            "Microservices",
            "Test-Driven Development (TDD)",
            "Observability & Tracing",
            "Agile / Scrum",
        ],
    },
    SkillGroup {
        title: "Version Control & Tools",
        level: SkillLevel::Supporting,
        tooltip: "The everyday tools I use to collaborate, debug and ship.",
        icon: "🌿",
        items: &["Git", "GitHub", "Jira", "Postman", "Neovim", "Linux"],
    },
    SkillGroup {
        title: "Collaboration",
        level: SkillLevel::Strong,
        tooltip: "How I communicate, lead and improve processes when working with a team.",
        icon: "🤝",
        items: &[
            "Analytical Problem Solving",
            "Communication",
            "Mentorship",
            "Code Review Culture",
            "Ownership",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCES: [ExperienceEntry; 2] = [
    ExperienceEntry {
        company: "Meridian Labs — Platform Team",
        role: "Senior Software Engineer",
        location: "Remote · US-based",
        period: "Mar 2021 – Present",
        highlights: &[
            "Own the architecture of the customer-facing API platform, designing services in Rust and Go that handle steady six-figure daily request volumes.",
            "Led the migration from a monolithic Django deployment to containerized services on GCP with zero-downtime cutovers.",
            "Built the internal deployment CLI and CI/CD pipelines on GitHub Actions, cutting median release time from hours to minutes.",
            "Introduced structured tracing and dashboards that halved the median time to diagnose production incidents.",
            "Designed Elasticsearch-backed search for the main product catalog, replacing slow relational scans.",
            "Built interactive operations dashboards in React and TypeScript on top of the metrics pipeline.",
            "Mentor two junior engineers and run the team's architecture review sessions.",
        ],
    },
    ExperienceEntry {
        company: "Brightwave Studio",
        role: "Full Stack Developer",
        location: "Portland, OR",
        period: "Jun 2018 – Feb 2021",
        highlights: &[
            "Shipped client web applications serving 10,000+ monthly users with React, Redux and Tailwind.",
            "Designed REST APIs with Django REST Framework backed by PostgreSQL.",
            "Improved page and query performance with pagination, caching and index tuning.",
            "Migrated legacy PHP systems to modern Python and Node.js stacks.",
            "Integrated Stripe payment flows into e-commerce storefronts.",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub static PROJECTS: [ProjectEntry; 4] = [
    ProjectEntry {
        name: "axum-service-kit",
        tagline: "Production-ready Rust backend starter",
        description: "An opinionated Axum starter wiring up auth, validation, structured logging and service layout so teams can ship Rust microservices faster.",
        tech: &["Rust", "Axum", "PostgreSQL", "JWT", "Docker"],
        link: Some("https://github.com/noravance/axum-service-kit"),
    },
    ProjectEntry {
        name: "InkRelay",
        tagline: "Digital document signing platform",
        description: "A multi-tenant signing platform where parties sign in a sequence set by the document owner, with a full audit trail per document.",
        tech: &["React", "Go / Node.js", "Microservices", "Stripe"],
        link: None,
    },
    ProjectEntry {
        name: "CareBridge",
        tagline: "Healthcare coordination for elderly care",
        description: "Platform supporting subsidized home care for elderly residents, covering patient profiles, visit scheduling and reporting.",
        tech: &["React", "Django REST", "PostgreSQL", "GCP"],
        link: None,
    },
    ProjectEntry {
        name: "CrewLoop",
        tagline: "Employee lifecycle automation",
        description: "HR platform automating onboarding, attendance, payroll and analytics across the employee lifecycle.",
        tech: &["React", "Django REST", "PostgreSQL"],
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_covers_every_section_in_order() {
        let targets = NAV_ITEMS.iter().map(|item| item.href).collect::<Vec<_>>();
        assert_eq!(
            targets,
            vec![
                "#home",
                "#skills",
                "#experience",
                "#projects",
                "#github",
                "#contact"
            ]
        );
    }

    #[test]
    fn test_nav_entries_are_in_page_anchors() {
        for item in NAV_ITEMS.iter() {
            assert!(
                item.href.starts_with('#'),
                "{} is not an in-page anchor",
                item.href
            );
            assert!(!item.label.is_empty());
        }
    }

    #[test]
    fn test_every_skill_group_is_filled_in() {
        assert_eq!(SKILL_GROUPS.len(), 6);
        for group in SKILL_GROUPS.iter() {
            assert!(!group.title.is_empty());
            assert!(!group.tooltip.is_empty());
            assert!(!group.items.is_empty(), "{} has no items", group.title);
        }
    }

    #[test]
    fn test_skill_levels_map_to_label_and_bar() {
        assert_eq!(SkillLevel::Core.label(), "Core Stack");
        assert_eq!(SkillLevel::Strong.label(), "Strong");
        assert_eq!(SkillLevel::Supporting.label(), "Supporting");
        // wider bar for stronger tiers
        assert!(SkillLevel::Core.bar_class().starts_with("w-4/5"));
        assert!(SkillLevel::Strong.bar_class().starts_with("w-3/4"));
        assert!(SkillLevel::Supporting.bar_class().starts_with("w-2/3"));
    }

    #[test]
    fn test_experience_entries_have_highlights() {
        assert!(!EXPERIENCES.is_empty());
        for entry in EXPERIENCES.iter() {
            assert!(!entry.period.is_empty());
            assert!(
                !entry.highlights.is_empty(),
                "{} has no highlights",
                entry.company
            );
        }
    }

    #[test]
    fn test_project_links_are_absolute_urls() {
        assert_eq!(PROJECTS.len(), 4);
        for project in PROJECTS.iter() {
            assert!(!project.description.is_empty());
            assert!(!project.tech.is_empty());
            if let Some(link) = project.link {
                assert!(
                    link.starts_with("https://"),
                    "{} link is not absolute",
                    project.name
                );
            }
        }
    }
}
