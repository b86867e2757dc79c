//! Hardcoded page content. Every table is built once and never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub monogram: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub image_path: &'static str,
}

pub static PROFILE: Profile = Profile {
    first_name: "Ekagra",
    last_name: "Sharma",
    monogram: "ES",
    headline: "Full Stack Developer & Designer",
    summary: "I build modern web products with beautiful interfaces and robust backends. Expertise in Next.js, TypeScript, and AI integration.",
    image_path: "/profile.svg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_class: &'static str,
}

pub static SOCIALS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Ekagrashharma",
        icon_class: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ekagrashharma",
        icon_class: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Email",
        href: "mailto:ekagrashharma@gmail.com",
        icon_class: "icon-mail",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub tech: &'static [&'static str],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "AI Content Platform",
        description: "Full-stack SaaS for AI-powered content generation with real-time collaboration",
        kind: "SaaS",
        icon: "🧠",
        href: "#",
        tech: &["Next.js", "TypeScript", "Stripe", "PostgreSQL"],
    },
    Project {
        title: "Design System",
        description: "Comprehensive component library with 50+ components and live documentation",
        kind: "Design",
        icon: "🎨",
        href: "#",
        tech: &["React", "Tailwind CSS", "Storybook"],
    },
    Project {
        title: "Real-time Analytics",
        description: "Dashboard for tracking user behavior and product metrics with WebSocket integration",
        kind: "Analytics",
        icon: "📊",
        href: "#",
        tech: &["Next.js", "WebSocket", "D3.js", "Redis"],
    },
    Project {
        title: "E-Commerce Platform",
        description: "Full shopping experience with inventory management and payment processing",
        kind: "E-Commerce",
        icon: "🛒",
        href: "#",
        tech: &["Next.js", "Stripe", "PostgreSQL", "Vercel"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        category: "Frontend",
        icon: "💻",
        skills: &[
            "React",
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "GSAP",
            "Framer Motion",
        ],
    },
    SkillCategory {
        category: "Backend",
        icon: "🔀",
        skills: &[
            "Node.js",
            "PostgreSQL",
            "API Design",
            "Authentication",
            "WebSockets",
            "Caching",
        ],
    },
    SkillCategory {
        category: "Full Stack",
        icon: "⚡",
        skills: &[
            "System Design",
            "Database Architecture",
            "DevOps",
            "Cloud Deployment",
            "Scaling",
            "Testing",
        ],
    },
    SkillCategory {
        category: "Design",
        icon: "🎨",
        skills: &[
            "UI/UX Design",
            "Figma",
            "Prototyping",
            "Design Systems",
            "Wireframing",
        ],
    },
    SkillCategory {
        category: "AI & Tools",
        icon: "✨",
        skills: &[
            "AI Integration",
            "OpenAI API",
            "LangChain",
            "Prompt Engineering",
            "Vector DBs",
        ],
    },
    SkillCategory {
        category: "DevOps",
        icon: "👥",
        skills: &[
            "Docker",
            "AWS",
            "Vercel",
            "CI/CD",
            "GitHub Actions",
            "Monitoring",
        ],
    },
];

pub static DEVELOPMENT_TOOLS: [&str; 8] = [
    "VS Code", "Git", "Vercel", "GitHub", "NPM/Yarn", "Docker", "AWS", "Stripe",
];

pub static DESIGN_TOOLS: [&str; 8] = [
    "Figma",
    "Adobe XD",
    "Protopie",
    "Framer",
    "Photoshop",
    "Illustrator",
    "InVision",
    "Webflow",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub static EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        title: "Senior Full Stack Developer",
        company: "Tech Startup",
        duration: "2022 - Present",
        description: "Led development of AI-powered platform serving 10k+ users. Architected microservices, implemented real-time features, and scaled infrastructure to handle 100k requests/day.",
        achievements: &[
            "Scaled to 10k+ users",
            "Built AI features",
            "Led team of 3 developers",
        ],
    },
    ExperienceEntry {
        title: "Full Stack Developer",
        company: "Digital Agency",
        duration: "2020 - 2022",
        description: "Built 20+ client projects using modern web technologies. Specialized in SaaS platforms and real-time applications with focus on performance and UX.",
        achievements: &[
            "Delivered 20+ projects",
            "100% client satisfaction",
            "Mentored 2 junior developers",
        ],
    },
];

/// A titled bullet list in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub static ABOUT_HIGHLIGHTS: [Highlight; 2] = [
    Highlight {
        heading: "Skills",
        items: &[
            "Full-stack development",
            "UI/UX design",
            "AI integration",
            "System design",
        ],
    },
    Highlight {
        heading: "Tech Stack",
        items: &[
            "Rust & Leptos",
            "TypeScript",
            "Tailwind CSS",
            "Scroll-driven animation",
        ],
    },
];
