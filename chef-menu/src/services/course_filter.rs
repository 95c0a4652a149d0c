//! Course filter
//!
//! The home screen shows only items whose course is selected here. Changes
//! are made on a [`FilterDraft`] and take effect on [`CourseFilter::apply`];
//! dropping the draft discards them.

/// Applied course selection
#[derive(Debug, Clone)]
pub struct CourseFilter {
    /// Known courses, in display order
    courses: Vec<String>,
    /// Allow-list passed to `filter_menu_items`
    selected: Vec<String>,
}

impl CourseFilter {
    /// All known courses start selected
    pub fn new(courses: Vec<String>) -> Self {
        Self {
            selected: courses.clone(),
            courses,
        }
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, course: &str) -> bool {
        self.selected.iter().any(|c| c == course)
    }

    /// Start editing a copy of the current selection
    pub fn draft(&self) -> FilterDraft {
        FilterDraft {
            courses: self.courses.clone(),
            selected: self.selected.clone(),
        }
    }

    /// Replace the selection with the draft's
    pub fn apply(&mut self, draft: FilterDraft) {
        tracing::info!(selected = ?draft.selected, "Course filter applied");
        self.selected = draft.selected;
    }
}

/// Pending filter changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDraft {
    courses: Vec<String>,
    selected: Vec<String>,
}

impl FilterDraft {
    /// Deselect the course if selected, otherwise select it (appended last)
    pub fn toggle(&mut self, course: &str) {
        if let Some(index) = self.selected.iter().position(|c| c == course) {
            self.selected.remove(index);
        } else {
            self.selected.push(course.to_string());
        }
    }

    /// Reset to every known course selected
    pub fn clear(&mut self) {
        self.selected = self.courses.clone();
    }

    pub fn is_selected(&self, course: &str) -> bool {
        self.selected.iter().any(|c| c == course)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }
}
