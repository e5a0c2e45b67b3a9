//! Static portfolio content shown in the section panels, the biography card
//! and the fallback view.

use crate::section::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub code: &'static str,
    /// `"#"` when there is no public deployment.
    pub demo: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
    /// Percentage, 0..=100.
    pub level: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactChannel {
    pub kind: &'static str,
    pub display: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Involvement {
    pub title: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Organization {
    pub name: &'static str,
    pub summary: &'static str,
    pub badges: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub enum SectionContent {
    About {
        paragraphs: &'static [&'static str],
        frontend: &'static [&'static str],
        backend: &'static [&'static str],
    },
    Projects(&'static [Project]),
    Skills(&'static [SkillGroup]),
    Contact {
        intro: &'static str,
        channels: &'static [ContactChannel],
    },
    SocialLife {
        organization: Organization,
        involvement: &'static [Involvement],
        technical_skills: &'static [&'static str],
        soft_skills: &'static [&'static str],
    },
    Resume {
        pdf: Link,
        download_name: &'static str,
        jobs: &'static [Job],
        education: &'static [Education],
    },
}

pub const EMAIL: &str = "bouonwajdy@gmail.com";
pub const EMAIL_HREF: &str = "mailto:bouonwajdy@gmail.com";
pub const LINKEDIN_HREF: &str = "https://www.linkedin.com/in/bouon-wajdy-216882257/";
pub const GITHUB_HREF: &str = "https://github.com/WajdyB";
pub const RESUME_HREF: &str = "/resume.pdf";

pub const PROFILE: Profile = Profile {
    name: "Wajdy Bouon",
    title: "Full Stack Developer",
    blurb: "Passionate developer creating innovative digital experiences with modern technologies.",
    image: "/portfolio-image.jpg",
};

pub const INSTRUCTIONS: &str = "Click faces to explore \u{2022} Drag to rotate";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "KiddosTradezz",
        description: "Hybrid web/mobile application for exchanging toys online",
        tech: &["React.js", "React Native", "Spring Boot", "MySQL"],
        code: "https://github.com/WajdyB/kidossTradezz",
        demo: "#",
    },
    Project {
        title: "InvoicePro",
        description: "Full-stack web application for managing invoices",
        tech: &["Next.js", "MongoDB"],
        code: "https://github.com/WajdyB/invoicePro",
        demo: "#",
    },
    Project {
        title: "EduCore",
        description: "Web application for managing courses and students",
        tech: &["Java", "Spring Boot", "MySQL"],
        code: "https://github.com/WajdyB/EduCore",
        demo: "#",
    },
    Project {
        title: "cms-builder",
        description: "A CMS solution for building static websites",
        tech: &["Next.js", "Prisma", "PostgreSQL"],
        code: "https://github.com/WajdyB/builder",
        demo: "#",
    },
    Project {
        title: "IEEE ISIMM WIE website",
        description: "The official website of the IEEE ISIMM WIE Affinity Group",
        tech: &["Next.js", "MongoDB"],
        code: "https://github.com/WajdyB/ieee-isimm-wie-website",
        demo: "https://ieee-isimm-wie-website.vercel.app/",
    },
    Project {
        title: "IEEE ISIMM CS website",
        description: "The official website of the IEEE ISIMM CS chapter",
        tech: &["Next.js", "MongoDB"],
        code: "https://github.com/WajdyB/ieee-isimm-cs-website",
        demo: "https://ieee-isimm-cs-website.vercel.app/",
    },
    Project {
        title: "IEEE ISIMM SIGHT website",
        description: "The official website of the IEEE ISIMM SIGHT Group",
        tech: &["Next.js", "MongoDB"],
        code: "https://github.com/WajdyB/ieee-isimm-sight-website",
        demo: "https://ieee-isimm-sight-website.vercel.app/",
    },
    Project {
        title: "IEEE ISIMM SB website",
        description: "The official website of the IEEE ISIMM Student Branch",
        tech: &["Next.js", "MongoDB"],
        code: "https://github.com/WajdyB/ieee-isimm-sb-website",
        demo: "https://ieee-isimm-sb-website.vercel.app/",
    },
    Project {
        title: "Daily Design Quotes",
        description: "A web application that displays daily design quotes",
        tech: &["HTML", "CSS", "JavaScript"],
        code: "https://github.com/WajdyB/daily-design-quotes",
        demo: "https://daily-design-quotes.vercel.app/",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend Development",
        skills: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
        level: 90,
    },
    SkillGroup {
        category: "Backend Development",
        skills: &["Node.js", "PostgreSQL", "Spring Boot", "MongoDB"],
        level: 85,
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: "Email",
        display: EMAIL,
        href: EMAIL_HREF,
    },
    ContactChannel {
        kind: "LinkedIn",
        display: "linkedin.com/in/bouon-wajdy",
        href: LINKEDIN_HREF,
    },
    ContactChannel {
        kind: "GitHub",
        display: "github.com/WajdyB",
        href: GITHUB_HREF,
    },
];

pub const INVOLVEMENT: &[Involvement] = &[
    Involvement {
        title: "IEEE WIE Affinity Group",
        role: "Technical Contributor",
        description: "Contributed to the development and maintenance of the official IEEE ISIMM WIE website, showcasing women's achievements in engineering.",
        period: "2023 - Present",
        achievements: &["Website Development", "Content Management", "Technical Support"],
    },
    Involvement {
        title: "IEEE CS Chapter",
        role: "Active Member",
        description: "Participated in Computer Society events and contributed to the chapter's online presence through website development.",
        period: "2023 - Present",
        achievements: &["Event Participation", "Website Development", "Technical Workshops"],
    },
    Involvement {
        title: "IEEE SIGHT Group",
        role: "Technical Contributor",
        description: "Supported the IEEE SIGHT Group's mission through technical contributions and website development for humanitarian technology projects.",
        period: "2023 - Present",
        achievements: &["Website Development", "Project Support", "Technical Documentation"],
    },
    Involvement {
        title: "IEEE Student Branch Events",
        role: "Event Participant & Contributor",
        description: "Actively participated in various IEEE events, workshops, and technical sessions organized by the student branch.",
        period: "2023 - Present",
        achievements: &["Technical Workshops", "Networking Events", "Leadership Development"],
    },
];

pub const JOBS: &[Job] = &[
    Job {
        title: "Software Engineer Intern",
        company: "Mobelite LABS, Monastir",
        period: "June 2025 - September 2025",
        description: "Worked on the development of a cms solution for building static websites",
    },
    Job {
        title: "Software Engineer Intern",
        company: "Mobelite LABS, Monastir",
        period: "January 2023 - July 2023",
        description: "Developed a full-stack hybrid application for exchanging toys online",
    },
];

pub const EDUCATION: &[Education] = &[Education {
    degree: "Degree in Computer Science",
    school: "Higher Institute of Mathematics and Computer Science, Monastir",
    period: "2021 - 2023",
}];

/// Links offered when the 3D view can't run.
pub const FALLBACK_LINKS: &[Link] = &[
    Link {
        label: "GitHub Profile",
        href: GITHUB_HREF,
    },
    Link {
        label: "LinkedIn Profile",
        href: LINKEDIN_HREF,
    },
    Link {
        label: "Email Contact",
        href: EMAIL_HREF,
    },
    Link {
        label: "Download Resume",
        href: RESUME_HREF,
    },
];

pub const BROWSER_RECOMMENDATION: &str =
    "For the best experience, please use Chrome 51+, Firefox 53+, Safari 10+, or Edge 79+";

pub fn content(id: SectionId) -> SectionContent {
    match id {
        SectionId::About => SectionContent::About {
            paragraphs: &[
                "I'm a passionate Full Stack Developer eager for creating innovative web applications and digital experiences.",
                "My expertise spans across modern frameworks and diverse technologies. I love bringing ideas to life through code and creating user experiences that make a difference.",
            ],
            frontend: &["React / Next.js", "TypeScript", "Tailwind CSS"],
            backend: &["Node.js", "Python", "PostgreSQL", "Spring Boot"],
        },
        SectionId::Projects => SectionContent::Projects(PROJECTS),
        SectionId::Skills => SectionContent::Skills(SKILLS),
        SectionId::Contact => SectionContent::Contact {
            intro: "I'm always interested in new opportunities and collaborations. Feel free to reach out if you'd like to work together!",
            channels: CONTACT_CHANNELS,
        },
        SectionId::SocialLife => SectionContent::SocialLife {
            organization: Organization {
                name: "IEEE ISIMM Student Branch",
                summary: "Active member and contributor to the IEEE ISIMM Student Branch, participating in various technical and leadership activities.",
                badges: &["Student Member", "Technical Contributor", "Event Organizer"],
            },
            involvement: INVOLVEMENT,
            technical_skills: &[
                "Website Development",
                "Content Management",
                "Technical Documentation",
            ],
            soft_skills: &["Team Collaboration", "Event Organization", "Leadership"],
        },
        SectionId::Resume => SectionContent::Resume {
            pdf: Link {
                label: "Download PDF",
                href: RESUME_HREF,
            },
            download_name: "Wajdy_Bouon_Resume.pdf",
            jobs: JOBS,
            education: EDUCATION,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_content() {
        for id in SectionId::ALL {
            let c = content(id);
            let matches = matches!(
                (id, c),
                (SectionId::About, SectionContent::About { .. })
                    | (SectionId::Projects, SectionContent::Projects(_))
                    | (SectionId::Skills, SectionContent::Skills(_))
                    | (SectionId::Contact, SectionContent::Contact { .. })
                    | (SectionId::SocialLife, SectionContent::SocialLife { .. })
                    | (SectionId::Resume, SectionContent::Resume { .. })
            );
            assert!(matches, "{id} has mismatched content");
        }
    }

    #[test]
    fn catalogue_sizes() {
        assert_eq!(PROJECTS.len(), 9);
        assert_eq!(INVOLVEMENT.len(), 4);
        assert_eq!(FALLBACK_LINKS.len(), 4);
        assert!(SKILLS.iter().all(|g| g.level <= 100));
    }
}
