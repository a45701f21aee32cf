//! Timeline layout — places education and experience events along a 0–100% line.
//!
//! Events are positioned by the first year of their period, starting at a fixed
//! `start_year` and ending at the current year.

use serde::Serialize;

use super::period::start_year as first_year;
use crate::models::profile::{Education, Experience};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Education,
    Experience,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    pub id: &'static str,
    pub kind: EventKind,
    pub period: &'static str,
    /// Degree or role.
    pub title: &'static str,
    /// Institution or company.
    pub subtitle: &'static str,
    pub year: i32,
    /// Horizontal placement, percent of the line. Not clamped.
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineSpan {
    pub start_year: i32,
    /// `max(1, current_year - start_year)`; never zero.
    pub total_duration: i32,
}

impl TimelineSpan {
    pub fn new(start_year: i32, current_year: i32) -> Self {
        Self {
            start_year,
            total_duration: (current_year - start_year).max(1),
        }
    }

    pub fn position(&self, year: i32) -> f64 {
        f64::from(year - self.start_year) / f64::from(self.total_duration) * 100.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub span: TimelineSpan,
    /// Ascending by year; unparsable periods are dropped.
    pub events: Vec<TimelineEvent>,
}

/// Combines education (first) and experience events, sorts them ascending by year,
/// drops year-0 events and positions the rest.
pub fn build_timeline(
    education: &'static [Education],
    experience: &'static [Experience],
    start_year: i32,
    current_year: i32,
) -> Timeline {
    let span = TimelineSpan::new(start_year, current_year);

    let education_events = education.iter().map(|edu| {
        (edu.id, EventKind::Education, edu.period, edu.degree, edu.institution)
    });
    let experience_events = experience.iter().map(|exp| {
        (exp.id, EventKind::Experience, exp.period, exp.role, exp.company)
    });

    let mut events: Vec<TimelineEvent> = education_events
        .chain(experience_events)
        .map(|(id, kind, period, title, subtitle)| {
            let year = first_year(period);
            TimelineEvent {
                id,
                kind,
                period,
                title,
                subtitle,
                year,
                position: span.position(year),
            }
        })
        .collect();

    events.sort_by_key(|e| e.year);
    events.retain(|e| e.year > 0);

    Timeline { span, events }
}
