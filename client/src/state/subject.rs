//! Subject selection state: which body silhouette is mounted.

#[cfg(test)]
#[path = "subject_test.rs"]
mod subject_test;

use canvas::assets::{Sex, Subject, View};

/// The (sex, view) pair selected by the page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubjectState {
    pub sex: Sex,
    pub view: View,
}

impl SubjectState {
    /// The engine-facing subject key.
    #[must_use]
    pub fn subject(&self) -> Subject {
        Subject::new(self.sex, self.view)
    }

    /// Header label for the current view.
    #[must_use]
    pub fn view_label(&self) -> &'static str {
        match self.view {
            View::Front => "Front",
            View::Back => "Back",
        }
    }

    /// Toolbar label for the view-switch button.
    #[must_use]
    pub fn switch_label(&self) -> &'static str {
        match self.view {
            View::Front => "Switch to back",
            View::Back => "Switch to front",
        }
    }
}
