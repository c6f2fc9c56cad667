use crate::{date, format, ReportFormat, ReportMeta, ReportState, TaskEntry};
use rapport_core::RapportResult;

/// Partial update of a task; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TaskUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: Some(description.into()),
        }
    }

    pub fn is_change(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }

    pub fn apply_to(self, task: &mut TaskEntry) {
        if let Some(title) = self.title {
            task.update_title(title);
        }
        if let Some(description) = self.description {
            task.update_description(description);
        }
    }
}

/// Partial update of the report header; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaUpdate {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
}

impl MetaUpdate {
    pub fn is_change(&self) -> bool {
        self.title.is_some() || self.date.is_some() || self.author.is_some()
    }
}

/// Trait ensuring TUI and CLI implement the same operations.
/// Implementors hand out their report; the operations are shared.
pub trait ReportOperations {
    fn report(&self) -> &ReportState;
    fn report_mut(&mut self) -> &mut ReportState;
    /// Author written into the report on reset.
    fn default_author(&self) -> String;

    fn add_task(&mut self, initial: TaskUpdate) -> RapportResult<usize> {
        let report = self.report_mut();
        let index = report.add_task();
        if initial.is_change() {
            report.update_task(index, initial)?;
        }
        Ok(index)
    }

    fn list_tasks(&self) -> RapportResult<Vec<TaskEntry>> {
        Ok(self.report().tasks.clone())
    }

    fn get_task(&self, index: usize) -> RapportResult<Option<TaskEntry>> {
        Ok(self.report().task(index).cloned())
    }

    fn update_task(&mut self, index: usize, update: TaskUpdate) -> RapportResult<TaskEntry> {
        self.report_mut().update_task(index, update).cloned()
    }

    fn remove_task(&mut self, index: usize) -> RapportResult<TaskEntry> {
        self.report_mut().remove_task(index)
    }

    fn update_meta(&mut self, update: MetaUpdate) -> RapportResult<ReportMeta> {
        let report = self.report_mut();
        report.update_meta(update);
        Ok(report.meta.clone())
    }

    fn reset_report(&mut self) -> RapportResult<()> {
        let author = self.default_author();
        self.report_mut().reset(date::today(), author);
        Ok(())
    }

    fn render(&self, format: ReportFormat) -> RapportResult<String> {
        let markup = format::render_report(self.report());
        Ok(match format {
            ReportFormat::Html => markup,
            ReportFormat::Text => format::render_plain_text(&markup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        report: ReportState,
    }

    impl ReportOperations for Harness {
        fn report(&self) -> &ReportState {
            &self.report
        }

        fn report_mut(&mut self) -> &mut ReportState {
            &mut self.report
        }

        fn default_author(&self) -> String {
            "Camille".to_string()
        }
    }

    #[test]
    fn test_add_task_with_initial_values() {
        let mut harness = Harness {
            report: ReportState::default(),
        };
        let idx = harness
            .add_task(TaskUpdate {
                title: Some("Revue".to_string()),
                description: Some("PR #12".to_string()),
            })
            .unwrap();

        let task = harness.get_task(idx).unwrap().unwrap();
        assert_eq!(task, TaskEntry::with_text("Revue", "PR #12"));
    }

    #[test]
    fn test_reset_uses_default_author_and_today() {
        let mut harness = Harness {
            report: ReportState::default(),
        };
        harness.add_task(TaskUpdate::title("x")).unwrap();
        harness.reset_report().unwrap();

        assert!(harness.list_tasks().unwrap().is_empty());
        assert_eq!(harness.report().meta.author, "Camille");
        assert_eq!(harness.report().meta.date, date::today_iso());
        assert_eq!(
            Some(harness.report().meta.title.clone()),
            date::title_for_date(&date::today_iso())
        );
    }

    #[test]
    fn test_render_text_has_no_tags() {
        let mut harness = Harness {
            report: ReportState::default(),
        };
        harness
            .add_task(TaskUpdate::title("Tests <unitaires>"))
            .unwrap();

        let text = harness.render(ReportFormat::Text).unwrap();
        assert!(text.contains("Tests <unitaires>"));
        assert!(!text.contains("<div"));

        let html = harness.render(ReportFormat::Html).unwrap();
        assert!(html.contains("Tests &lt;unitaires&gt;"));
    }
}
