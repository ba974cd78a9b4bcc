//! Self-paced study cards added to the course pages.
//!
//! Content comes from `week_support.json`, one entry per page.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::html::{element, escape, text_element};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupportProject {
    pub title: String,
    pub summary: String,
    pub steps: Vec<String>,
    pub share: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSupport {
    pub page: String,
    pub theme: String,
    pub key_tasks: Vec<String>,
    pub deliverable: String,
    pub stretch: String,
    pub mastery: Vec<String>,
    pub project: SupportProject,
    pub reflection: String,
}

static WEEK_SUPPORT: Lazy<HashMap<String, WeekSupport>> = Lazy::new(|| {
    match serde_json::from_str::<Vec<WeekSupport>>(include_str!("week_support.json")) {
        Ok(entries) => entries.into_iter().map(|e| (e.page.clone(), e)).collect(),
        Err(e) => {
            tracing::error!(error = %e, "Invalid self-paced support content");
            HashMap::new()
        }
    }
});

/// Support content for a page file name, if it has any.
pub fn support_for(page: &str) -> Option<&'static WeekSupport> {
    WEEK_SUPPORT.get(page)
}

/// Where the cards go in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Right after the page's highlighted module card
    AfterHighlight,
    /// At the end of the page
    Append,
}

impl Placement {
    pub fn for_page(has_highlight_card: bool) -> Self {
        if has_highlight_card {
            Placement::AfterHighlight
        } else {
            Placement::Append
        }
    }
}

impl WeekSupport {
    fn task(&self, index: usize) -> &str {
        self.key_tasks.get(index).map(String::as_str).unwrap_or("")
    }

    /// The four cards in page order.
    pub fn render(&self) -> String {
        [
            self.tracks_card(),
            self.autonomy_card(),
            self.mastery_card(),
            self.project_card(),
        ]
        .concat()
    }

    pub fn tracks_card(&self) -> String {
        let tracks = [
            (
                "Momentum Track",
                "3 x 40 min",
                format!(
                    "Laser-focus on {} and {} until they feel automatic.",
                    self.task(0),
                    self.task(1)
                ),
                format!("Proof: {}", self.mastery.first().map(String::as_str).unwrap_or("")),
            ),
            (
                "Guided Track",
                "4 x 60 min",
                format!("Cycle through {} each session.", self.key_tasks.join(", ")),
                format!("Wrap with {}.", self.deliverable),
            ),
            (
                "Immersion Track",
                "5 x 60+ min",
                format!("Add extended practice plus {}.", self.stretch),
                format!("Publish or share your {}.", self.project.title),
            ),
        ];

        let grid: String = tracks
            .iter()
            .map(|(title, duration, focus, outcome)| {
                let inner = [
                    text_element("h4", "", title),
                    text_element("p", "track-duration", duration),
                    text_element("p", "", focus),
                    text_element("p", "track-outcome", outcome),
                ]
                .concat();
                element("article", "self-paced-track", &inner)
            })
            .collect();

        card(
            "Self-Paced Study Tracks",
            &[
                text_element(
                    "p",
                    "self-paced-subtitle",
                    &format!(
                        "Choose the rhythm that keeps {} moving without burnout.",
                        self.theme.to_lowercase()
                    ),
                ),
                element("div", "self-paced-grid", &grid),
            ]
            .concat(),
        )
    }

    pub fn autonomy_card(&self) -> String {
        let steps = [
            (
                "Plan Inputs",
                format!(
                    "Block time specifically for {} and {}. Write the sessions in your planner before the week begins.",
                    self.task(0),
                    self.task(1)
                ),
            ),
            (
                "Monitor Evidence",
                format!(
                    "Use a two-column log: wins and friction. Highlight whenever {} feels shaky so you can address it next session.",
                    self.task(2)
                ),
            ),
            ("Reflect & Adjust", self.reflection.clone()),
        ];

        let items: String = steps
            .iter()
            .map(|(title, detail)| {
                let inner = [
                    text_element("span", "autonomy-step__title", title),
                    text_element("p", "", detail),
                ]
                .concat();
                element("li", "autonomy-step", &inner)
            })
            .collect();

        card(
            "Self-Direction Toolkit",
            &[
                element("ol", "autonomy-list", &items),
                text_element(
                    "div",
                    "reflection-pill",
                    &format!("Self-coaching prompt: {}", self.reflection),
                ),
            ]
            .concat(),
        )
    }

    pub fn mastery_card(&self) -> String {
        card(
            "Mastery Benchmarks",
            &element("ul", "mastery-list", &list_items(&self.mastery)),
        )
    }

    pub fn project_card(&self) -> String {
        card(
            "Independent Project Idea",
            &[
                text_element("h4", "", &self.project.title),
                text_element("p", "", &self.project.summary),
                element("ul", "project-steps", &list_items(&self.project.steps)),
                text_element("p", "project-share", &self.project.share),
            ]
            .concat(),
        )
    }
}

fn card(label: &str, body: &str) -> String {
    element(
        "div",
        "module-card self-paced-card",
        &[text_element("div", "label", label), body.to_string()].concat(),
    )
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_course_page_has_support() {
        assert!(support_for("index.html").is_some());
        for week in 2..=15 {
            let page = format!("week{week}.html");
            let support = support_for(&page);
            assert!(support.is_some(), "{page}");
            assert!(support.is_some_and(|s| s.key_tasks.len() >= 3 && !s.mastery.is_empty()));
        }
        assert!(support_for("week1.html").is_none());
        assert!(support_for("admin.html").is_none());
    }

    #[test]
    fn renders_four_cards_in_order() {
        let html = support_for("index.html").map(WeekSupport::render).unwrap_or_default();

        let labels = [
            "Self-Paced Study Tracks",
            "Self-Direction Toolkit",
            "Mastery Benchmarks",
            "Independent Project Idea",
        ];
        let positions: Vec<usize> = labels.iter().filter_map(|l| html.find(l)).collect();
        assert_eq!(positions.len(), 4);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches(r#"class="module-card self-paced-card""#).count(), 4);
    }

    #[test]
    fn tracks_card_fills_in_the_week() {
        let support = support_for("index.html").cloned().unwrap_or_else(|| panic!("missing index"));
        let html = support.tracks_card();

        assert!(html.contains("keeps alphabet &amp; script foundations moving without burnout."));
        assert!(html.contains(
            "Laser-focus on letter recognition sprints and sound-to-script mapping until they feel automatic."
        ));
        assert!(html.contains("Publish or share your Script Confidence Portfolio."));
        assert_eq!(html.matches("self-paced-track").count(), 3);
    }

    #[test]
    fn autonomy_card_repeats_the_reflection() {
        let support = support_for("week2.html").cloned().unwrap_or_else(|| panic!("missing week2"));
        let html = support.autonomy_card();
        assert!(html.contains("Highlight whenever pronoun-powered sentence frames feels shaky"));
        assert!(html.contains(r#"<div class="reflection-pill">Self-coaching prompt: Which letter connection"#));
    }

    #[test]
    fn placement() {
        assert_eq!(Placement::for_page(true), Placement::AfterHighlight);
        assert_eq!(Placement::for_page(false), Placement::Append);
    }
}
