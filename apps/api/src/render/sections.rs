use super::html::{chips, escape, highlight};
use super::icons::{arrow_right, icon};
use super::PageView;
use crate::assets::ImageRef;
use crate::chronology::{sort_by_period_desc, EventKind, Timeline};
use crate::models::profile::{Education, Profile, Project, SocialLink};

/// In-page navigation targets on wide screens. Education lives in the header there.
pub const NAV_SECTIONS: [&str; 3] = ["about", "experience", "projects"];

pub fn nav_label(section: &str) -> &str {
    match section {
        "experience" => "Professional Experience",
        "education" => "Educational Qualifications",
        other => other,
    }
}

fn section_header(title: &str) -> String {
    format!("<h2 class=\"section-header\">{}</h2>\n", escape(title))
}

// ────────────────────────────────────────────────────────────────────────────
// Header column
// ────────────────────────────────────────────────────────────────────────────

pub fn header(view: &PageView<'_>) -> String {
    let profile = view.profile;
    let mut out = String::from("<header class=\"left\">\n");
    out.push_str(&format!(
        "<h1><a href=\"/\">{}</a></h1>\n<h2 class=\"subtitle\">{}</h2>\n<p class=\"bio\">{}</p>\n",
        escape(profile.name),
        escape(profile.title),
        escape(profile.bio)
    ));

    out.push_str("<div class=\"desktop-only\">\n");
    out.push_str(&timeline(view.timeline));
    out.push_str("</div>\n");

    out.push_str("<div class=\"socials\">\n");
    for link in profile.socials {
        out.push_str(&social_button(link));
    }
    if profile.availability {
        out.push_str("<div class=\"available\">Available for work</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<nav class=\"nav desktop-only\" aria-label=\"In-page jump links\"><ul>\n");
    for id in NAV_SECTIONS {
        out.push_str(&format!(
            "<li><a href=\"#{id}\">{}</a></li>\n",
            escape(nav_label(id))
        ));
    }
    out.push_str("</ul></nav>\n");

    out.push_str("<div class=\"edu-aside desktop-only\">\n");
    out.push_str("<div class=\"edu-aside-title\">Educational Qualifications</div>\n<ul>\n");
    for edu in sort_by_period_desc(profile.education, |e| e.period, view.current_year) {
        out.push_str(&format!(
            "<li><div><div class=\"edu-degree\">{}</div><div class=\"edu-institution\">{}</div></div><div class=\"edu-period\">{}</div></li>\n",
            escape(edu.degree),
            escape(edu.institution),
            escape(edu.period)
        ));
    }
    out.push_str("</ul>\n</div>\n");

    out.push_str("</header>\n");
    out
}

fn social_button(link: &SocialLink) -> String {
    format!(
        "<a class=\"social\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>\n",
        escape(link.url),
        escape(link.platform),
        icon(link.icon, 20)
    )
}

/// Horizontal timeline: start-year and "Present" labels, one node per event, legend.
pub fn timeline(timeline: &Timeline) -> String {
    let mut out = String::from("<div class=\"timeline\">\n");
    out.push_str(&format!(
        "<div class=\"timeline-labels\"><span>{}</span><span>Present</span></div>\n",
        timeline.span.start_year
    ));
    out.push_str("<div class=\"timeline-track\"><div class=\"timeline-line\"></div>\n");

    for (index, event) in timeline.events.iter().enumerate() {
        let kind = match event.kind {
            EventKind::Education => "education",
            EventKind::Experience => "experience",
        };
        out.push_str(&format!(
            "<div class=\"node node-{kind}\" style=\"left: {:.2}%\" data-id=\"{}\">\
             <div class=\"dot\" style=\"transition-delay: {}ms\"></div>\
             <div class=\"tooltip\"><div class=\"tooltip-year\">{}</div>\
             <div class=\"tooltip-subtitle\">{}</div><div class=\"tooltip-title\">{}</div></div></div>\n",
            event.position,
            escape(event.id),
            index * 150,
            event.year,
            escape(event.subtitle),
            escape(event.title)
        ));
    }

    out.push_str("</div>\n");
    out.push_str("<div class=\"legend\"><span>Experience</span><span class=\"legend-education\">Education</span></div>\n");
    out.push_str("</div>\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Main column
// ────────────────────────────────────────────────────────────────────────────

pub fn about(profile: &Profile) -> String {
    let mut out = String::from("<section id=\"about\">\n");
    out.push_str(&section_header("About"));
    for paragraph in profile.about {
        out.push_str(&format!("<p>{}</p>\n", highlight(paragraph)));
    }
    out.push_str("</section>\n");
    out
}

pub fn experience(profile: &Profile, current_year: i32) -> String {
    let mut out = String::from("<section id=\"experience\">\n");
    out.push_str(&section_header(nav_label("experience")));
    for job in sort_by_period_desc(profile.experience, |e| e.period, current_year) {
        out.push_str(&format!(
            "<div class=\"card\"><div class=\"card-period\">{}</div><div>\
             <h3>{} <span class=\"org\">— {}</span></h3><p>{}</p>{}</div></div>\n",
            escape(job.period),
            escape(job.role),
            escape(job.company),
            escape(job.description),
            chips(job.technologies, "chips")
        ));
    }
    out.push_str(&format!(
        "<a class=\"resume-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"View Full Resume\">View Full Resume {}</a>\n",
        escape(profile.resume_url()),
        arrow_right(16, "icon")
    ));
    out.push_str("</section>\n");
    out
}

/// Narrow-screen education section. Hidden on wide screens, where the header lists it.
pub fn education(profile: &Profile, current_year: i32) -> String {
    let mut out = String::from("<section id=\"education\" class=\"mobile-only\">\n");
    out.push_str(&section_header(nav_label("education")));
    for edu in sort_by_period_desc(profile.education, |e| e.period, current_year) {
        out.push_str(&education_card(edu));
    }
    out.push_str("</section>\n");
    out
}

fn education_card(edu: &Education) -> String {
    format!(
        "<div class=\"card card-education\"><div class=\"card-period\">{}</div><div>\
         <h3>{} <span class=\"org\">— {}</span></h3></div></div>\n",
        escape(edu.period),
        escape(edu.degree),
        escape(edu.institution)
    )
}

pub fn projects(profile: &Profile, selected: Option<&Project>) -> String {
    let mut out = String::from("<section id=\"projects\">\n");
    match selected {
        Some(project) => {
            out.push_str(&section_header("Project Details"));
            out.push_str(&project_detail(project));
        }
        None => {
            out.push_str(&section_header("Projects"));
            for project in profile.projects {
                out.push_str(&project_card(project));
            }
        }
    }
    out.push_str("</section>\n");
    out
}

/// `<img>` for a project, or nothing when there is no image. The surrounding box
/// carries the placeholder gradient, so a failed load leaves the placeholder.
fn project_image(project: &Project) -> String {
    let image = ImageRef::classify(project.image);
    match image.src() {
        Some(src) => format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" decoding=\"async\" onerror=\"this.remove()\">",
            escape(src),
            escape(project.title)
        ),
        None => String::new(),
    }
}

fn project_card(project: &Project) -> String {
    format!(
        "<a class=\"card project-card\" href=\"/projects/{}#projects\"><div><div class=\"thumb\">{}</div></div><div>\
         <h3>{} {}</h3><p>{}</p>{}</div></a>\n",
        escape(project.id),
        project_image(project),
        escape(project.title),
        arrow_right(16, "icon"),
        escape(project.description),
        chips(project.technologies, "chips")
    )
}

fn project_detail(project: &Project) -> String {
    let mut out = String::from("<article class=\"detail\">\n");
    out.push_str(&format!(
        "<a class=\"back\" href=\"/#projects\">{} Back to projects</a>\n",
        arrow_right(12, "icon")
    ));
    out.push_str(&format!(
        "<h3>{} {}</h3>\n<p>{}</p>\n",
        escape(project.title),
        chips(project.technologies, "chips"),
        escape(project.description)
    ));
    out.push_str(&format!(
        "<div class=\"detail-image\">{}</div>\n",
        project_image(project)
    ));
    for paragraph in project.details {
        out.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    if let Some(link) = project.link {
        out.push_str(&format!(
            "<a class=\"project-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View project</a>\n",
            escape(link)
        ));
    }
    out.push_str("</article>\n");
    out
}

pub fn footer() -> String {
    "<footer><p>Built with <span class=\"hl\">Rust</span> and <span class=\"hl\">Axum</span>.</p></footer>\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chronology::build_timeline;
    use crate::content::PROFILE;

    static DETAILED: Project = Project {
        id: "p-x",
        title: "Fixture <Project>",
        description: "Desc",
        technologies: &["Rust"],
        link: None,
        image: Some("projects/shot.png"),
        details: &["First paragraph.", "Second & last."],
    };

    #[test]
    fn test_nav_labels() {
        assert_eq!(nav_label("experience"), "Professional Experience");
        assert_eq!(nav_label("education"), "Educational Qualifications");
        assert_eq!(nav_label("about"), "about");
    }

    #[test]
    fn test_timeline_nodes_positioned() {
        let timeline = build_timeline(PROFILE.education, PROFILE.experience, 2006, 2025);
        let html = super::timeline(&timeline);
        assert!(html.contains("<span>2006</span><span>Present</span>"));
        // Ford started in 2015: (2015 - 2006) / 19 * 100
        assert!(html.contains("style=\"left: 47.37%\" data-id=\"exp-4\""));
        // B.Tech starts the line.
        assert!(html.contains("style=\"left: 0.00%\" data-id=\"edu-3\""));
        assert_eq!(html.matches("class=\"node ").count(), timeline.events.len());
    }

    #[test]
    fn test_detail_paragraphs_and_local_image() {
        let html = project_detail(&DETAILED);
        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("<p>Second &amp; last.</p>"));
        assert!(html.contains("src=\"/assets/projects/shot.png\""));
        assert!(html.contains("Fixture &lt;Project&gt;"));
        assert!(!html.contains("View project"));
    }

    #[test]
    fn test_detail_project_link_opens_in_new_tab() {
        let project = Project {
            link: Some("https://example.com/repo?a=1&b=2"),
            ..DETAILED.clone()
        };
        let html = project_detail(&project);
        assert!(html.contains(
            "<a class=\"project-link\" href=\"https://example.com/repo?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener noreferrer\">View project</a>"
        ));
    }

    #[test]
    fn test_card_without_image_shows_placeholder_box() {
        let project = Project {
            image: None,
            ..DETAILED.clone()
        };
        let html = project_card(&project);
        assert!(html.contains("<div class=\"thumb\"></div>"));
        assert!(html.contains("href=\"/projects/p-x#projects\""));
    }

    #[test]
    fn test_socials_open_in_new_tab() {
        let html = social_button(&PROFILE.socials[0]);
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("aria-label=\"GitHub\""));
    }
}
