//! Server-side HTML for the portfolio page.
//!
//! Layout is responsive through CSS alone: on wide screens the header column
//! stays fixed and carries the timeline, navigation and education list; on
//! narrow screens education moves into the main flow.

pub mod html;
pub mod icons;
pub mod sections;

use crate::chronology::Timeline;
use crate::models::profile::{Profile, Project};

const STYLESHEET: &str = include_str!("page.css");

/// Everything a page render needs. `selected` switches the projects section to the detail view.
pub struct PageView<'a> {
    pub profile: &'static Profile,
    pub timeline: &'a Timeline,
    pub current_year: i32,
    pub selected: Option<&'static Project>,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let profile = view.profile;
    let title = match view.selected {
        Some(project) => format!("{} — {}", project.title, profile.name),
        None => format!("{} — {}", profile.name, profile.title),
    };

    let mut out = String::with_capacity(32 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", html::escape(&title)));
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        html::escape(profile.bio)
    ));
    out.push_str("<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"shell\"><div class=\"columns\">\n");

    out.push_str(&sections::header(view));

    out.push_str("<main class=\"right\">\n");
    out.push_str(&sections::about(profile));
    out.push_str(&sections::experience(profile, view.current_year));
    out.push_str(&sections::education(profile, view.current_year));
    out.push_str(&sections::projects(profile, view.selected));
    out.push_str(&sections::footer());
    out.push_str("</main>\n");

    out.push_str("</div></div>\n</body>\n</html>\n");
    out
}
