use super::convert::ConversionSummary;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints one row per converted file.
    pub fn summaries(summaries: &[ConversionSummary]) {
        let mut table = Table::new();

        table.add_row(row!["INPUT", "OUTPUT", "TASKS", "PROJECTS"]);
        for summary in summaries {
            let output = summary
                .output
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![summary.input.display(), output, summary.tasks, summary.projects]);
        }
        table.printstd();
    }
}
