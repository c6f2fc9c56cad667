use serde::{Deserialize, Serialize};

/// One line of the report: what was done and, optionally, how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TaskEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn update_description(&mut self, description: String) {
        self.description = description;
    }

    /// A task with neither a title nor a description is left out of reports.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.description.trim().is_empty()
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_blank() {
        assert!(TaskEntry::new().is_blank());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let task = TaskEntry::with_text("   ", "\n\t");
        assert!(task.is_blank());
        assert!(!task.has_title());
    }

    #[test]
    fn test_description_alone_is_not_blank() {
        let task = TaskEntry::with_text("", "Revue du code");
        assert!(!task.is_blank());
        assert!(!task.has_title());
    }
}
