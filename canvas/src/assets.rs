//! Subject identity and background asset resolution.
//!
//! A drawing subject is one of four fixed (sex, view) combinations, each
//! backed by exactly one body-silhouette image. Resolution is total over the
//! closed enums, so there is no error path here; a failed image *load* is
//! handled by the fallback outline, not by this module.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Biological sex of the body silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

/// Which side of the body is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Front,
    Back,
}

impl View {
    /// The opposite view, used by the page shell's switch button.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => f.write_str("front"),
            Self::Back => f.write_str("back"),
        }
    }
}

/// One of the four drawable subjects. Used as the history-scope key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Subject {
    pub sex: Sex,
    pub view: View,
}

impl Subject {
    #[must_use]
    pub fn new(sex: Sex, view: View) -> Self {
        Self { sex, view }
    }
}

/// Resolve the background image path for a subject.
#[must_use]
pub fn body_image_src(subject: Subject) -> &'static str {
    match (subject.sex, subject.view) {
        (Sex::Male, View::Front) => "/assets/body-male-front.png",
        (Sex::Male, View::Back) => "/assets/body-male-back.png",
        (Sex::Female, View::Front) => "/assets/body-female-front.png",
        (Sex::Female, View::Back) => "/assets/body-female-back.png",
    }
}

/// File name offered for an exported diagram.
#[must_use]
pub fn export_filename(subject: Subject) -> String {
    format!("pain-diagram-{}-{}.png", subject.sex, subject.view)
}
