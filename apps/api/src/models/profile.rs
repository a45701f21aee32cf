use serde::Serialize;

/// Icon shown on a social button. Unknown platforms fall back to `ExternalLink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Mail,
    FileText,
    ExternalLink,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    /// Free-text date range, e.g. "May 2021 — Sep 2024".
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub id: &'static str,
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
    /// Remote URL or a path served from the assets directory.
    pub image: Option<&'static str>,
    /// Extra paragraphs shown only in the detail view.
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// The whole resume. Built once at compile time and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
    pub availability: bool,
    /// Paragraphs of the About section.
    pub about: &'static [&'static str],
    pub socials: &'static [SocialLink],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub skills: &'static [SkillGroup],
}

impl Profile {
    pub fn project(&self, id: &str) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// URL of the "Resume" social link, or `#` when there is none.
    pub fn resume_url(&self) -> &'static str {
        self.socials
            .iter()
            .find(|s| s.platform == "Resume")
            .map(|s| s.url)
            .unwrap_or("#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EMPTY: Profile = Profile {
        name: "Test",
        title: "",
        bio: "",
        location: "",
        availability: false,
        about: &[],
        socials: &[SocialLink {
            platform: "GitHub",
            url: "https://github.com/test",
            icon: Icon::Github,
        }],
        experience: &[],
        education: &[],
        projects: &[Project {
            id: "p1",
            title: "One",
            description: "",
            technologies: &[],
            link: None,
            image: None,
            details: &[],
        }],
        skills: &[],
    };

    #[test]
    fn test_resume_url_missing_is_hash() {
        assert_eq!(EMPTY.resume_url(), "#");
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(EMPTY.project("p1").map(|p| p.title), Some("One"));
        assert!(EMPTY.project("nope").is_none());
    }
}
