use folio_common::Color;
use serde::{Deserialize, Serialize};

/// Skill grouping used for neural-map edges and the tech-stack legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    DevOps,
    Database,
    MlAi,
    Physics,
}

/// A single skill. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub color: Color,
}

/// Project grouping used by the projects filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Fullstack,
    DevOps,
    Frontend,
    Ml,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub category: ProjectCategory,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub code: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub date: String,
    pub excerpt: String,
    pub url: String,
}

/// Everything the CMS fetch resolves with.
///
/// Skills are a `Vec`, not a map: node placement on the neural circle is
/// a function of insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub blog_posts: Vec<BlogPost>,
}

impl SiteContent {
    /// The reference content set served by the mock CMS.
    pub fn sample() -> Self {
        let skill = |name: &str, category, color| Skill {
            name: name.to_string(),
            category,
            color: Color(color),
        };
        use SkillCategory::*;

        let skills = vec![
            skill("React", Frontend, 0x61dafb),
            skill("TypeScript", Frontend, 0x3178c6),
            skill("Next.js", Frontend, 0xffffff),
            skill("Angular", Frontend, 0xdd0031),
            skill(".NET", Backend, 0x512bd4),
            skill("C#", Backend, 0x239120),
            skill("Python", Backend, 0x3776ab),
            skill("Node.js", Backend, 0x339933),
            skill("Django", Backend, 0x092e20),
            skill("Docker", DevOps, 0x2496ed),
            skill("Azure", DevOps, 0x0078d4),
            skill("PostgreSQL", Database, 0x336791),
            skill("MongoDB", Database, 0x47a248),
            skill("TensorFlow", MlAi, 0xff6f00),
            skill("Git", DevOps, 0xf05032),
        ];

        let projects = vec![
            Project {
                id: 1,
                title: "FATCA Compliance Platform".into(),
                company: "CIBC Caribbean".into(),
                category: ProjectCategory::Fullstack,
                description: "Built responsive React.js applications with Chakra-UI and \
                              ApexCharts, improving data quality by 40%. Developed .NET 6 \
                              REST APIs as middleware for SOAP integration."
                    .into(),
                tags: ["React.js", "Chakra-UI", ".NET 6", "SOAP API", "Azure"]
                    .map(String::from)
                    .to_vec(),
            },
            Project {
                id: 2,
                title: "Azure SSO Implementation".into(),
                company: "CIBC Caribbean".into(),
                category: ProjectCategory::DevOps,
                description: "Implemented Single Sign-On using Azure AD and MSAL.js for \
                              React apps and .NET Web APIs, with token validation and \
                              role-based access control."
                    .into(),
                tags: ["Azure AD", "MSAL.js", "SSO", "RBAC"].map(String::from).to_vec(),
            },
            Project {
                id: 3,
                title: "CI/CD Pipeline Optimization".into(),
                company: "CIBC Caribbean".into(),
                category: ProjectCategory::DevOps,
                description: "Automated Azure DevOps pipelines, reducing deployment time \
                              from 15 minutes to 30 seconds (98% efficiency gain)."
                    .into(),
                tags: ["Azure DevOps", "CI/CD", "Docker", "Automation"]
                    .map(String::from)
                    .to_vec(),
            },
            Project {
                id: 4,
                title: "E-Commerce Platform".into(),
                company: "Associated Brands Industries".into(),
                category: ProjectCategory::Frontend,
                description: "Developed e-commerce prototype using React.js and Next.js \
                              with real-time sales dashboards."
                    .into(),
                tags: ["React.js", "Next.js", "E-Commerce"].map(String::from).to_vec(),
            },
            Project {
                id: 5,
                title: "HPC Research".into(),
                company: "University of South Dakota".into(),
                category: ProjectCategory::Ml,
                description: "Graduate coursework in High Performance Computing, Pattern \
                              Recognition, Machine Learning, and Reinforcement Learning."
                    .into(),
                tags: ["HPC", "ML", "Reinforcement Learning"].map(String::from).to_vec(),
            },
        ];

        let cert = |id, title: &str, issuer: &str, code: &str, icon: &str, description: &str| {
            Certificate {
                id,
                title: title.into(),
                issuer: issuer.into(),
                code: code.into(),
                icon: icon.into(),
                description: description.into(),
            }
        };
        let certificates = vec![
            cert(
                1,
                "Querying Microsoft SQL Server",
                "Microsoft",
                "70-461, 761",
                "\u{1f5c4}\u{fe0f}",
                "Advanced T-SQL querying, optimization, and database management \
                 techniques for SQL Server.",
            ),
            cert(
                2,
                "ASP.NET Core MVC (.NET 6)",
                "Udemy",
                "Complete Course",
                "\u{2699}\u{fe0f}",
                "Comprehensive guide to building modern web applications with ASP.NET \
                 Core MVC framework.",
            ),
            cert(
                3,
                "Azure Data Factory",
                "Udemy",
                "Beginner Course",
                "\u{2601}\u{fe0f}",
                "Data ingestion, ETL pipelines, and cloud-based data integration using \
                 Azure Data Factory.",
            ),
            cert(
                4,
                "WCAG 2.1 Accessibility",
                "USD",
                "Professional",
                "\u{267f}",
                "VPAT evaluations, accessibility testing with JAWS/NVDA, and PDF \
                 remediation expertise.",
            ),
        ];

        let post = |id, title: &str, category: &str, date: &str, excerpt: &str, url: &str| {
            BlogPost {
                id,
                title: title.into(),
                category: category.into(),
                date: date.into(),
                excerpt: excerpt.into(),
                url: url.into(),
            }
        };
        let blog_posts = vec![
            post(
                1,
                "Optimizing CI/CD Pipelines in Azure",
                "devops",
                "Dec 2024",
                "How we reduced deployment time by 98%...",
                "https://medium.com",
            ),
            post(
                2,
                "Implementing SSO with Azure AD",
                "dotnet",
                "Nov 2024",
                "A comprehensive guide to MSAL.js...",
                "https://freecodecamp.org",
            ),
            post(
                3,
                "Building Accessible Web Applications",
                "frontend",
                "Nov 2024",
                "WCAG 2.1 standards and testing...",
                "https://medium.com",
            ),
            post(
                4,
                "React Performance Optimization",
                "frontend",
                "Oct 2024",
                "Techniques that improved data quality by 40%...",
                "https://dev.to",
            ),
            post(
                5,
                "Understanding React Server Components",
                "frontend",
                "Sep 2024",
                "Deep dive into RSC and Next.js 13...",
                "https://dev.to",
            ),
            post(
                6,
                "Docker Networking 101",
                "devops",
                "Aug 2024",
                "Basics of container communication...",
                "https://medium.com",
            ),
            post(
                7,
                "Introduction to Machine Learning",
                "ai",
                "Aug 2024",
                "Getting started with Python and Scikit-learn...",
                "https://medium.com",
            ),
        ];

        Self {
            skills,
            projects,
            certificates,
            blog_posts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_counts_match_reference() {
        let content = SiteContent::sample();
        assert_eq!(content.skills.len(), 15);
        assert_eq!(content.projects.len(), 5);
        assert_eq!(content.certificates.len(), 4);
        assert_eq!(content.blog_posts.len(), 7);
    }

    #[test]
    fn skill_names_are_unique() {
        let content = SiteContent::sample();
        let mut names: Vec<&str> = content.skills.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), content.skills.len());
    }

    #[test]
    fn record_ids_are_stable_and_sequential() {
        let content = SiteContent::sample();
        for (i, p) in content.projects.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
        }
        for (i, b) in content.blog_posts.iter().enumerate() {
            assert_eq!(b.id, i as u32 + 1);
        }
    }

    #[test]
    fn json_round_trip() {
        let content = SiteContent::sample();
        let json = serde_json::to_string(&content).unwrap();
        let back: SiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}
