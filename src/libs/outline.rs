//! Org mode outline rendering for parsed todo.txt tasks.
//!
//! Tasks are grouped by their first project tag under a top-level heading
//! and rendered as second-level `TODO`/`DONE` headings followed by their
//! planning lines:
//!
//! ```text
//! * Pets
//! ** DONE [#A] Take dog for a walk :park:
//! CLOSED: [2018-12-12]
//! [2018-12-10]
//! DEADLINE: <2018-12-14>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use todo2org::libs::outline::convert_to_org;
//!
//! let org = convert_to_org(&["(B) Take dog for a walk +Pets"]);
//! assert_eq!(org, "* Pets\n** TODO [#B] Take dog for a walk");
//! ```

use super::date::format_date;
use super::task::TodoTask;

pub const DONE_KEYWORD: &str = "DONE";
pub const TODO_KEYWORD: &str = "TODO";
pub const CLOSED_LABEL: &str = "CLOSED:";
pub const DEADLINE_LABEL: &str = "DEADLINE:";

/// Rendered task blocks grouped by project, in first-seen project order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl ProjectGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rendered block to `project`, creating the group on first use.
    pub fn push(&mut self, project: &str, block: String) {
        match self.groups.iter_mut().find(|(name, _)| name == project) {
            Some((_, blocks)) => blocks.push(block),
            None => self.groups.push((project.to_string(), vec![block])),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Serializes every group as `* <project>` followed by its blocks.
    pub fn render(&self) -> String {
        self.groups
            .iter()
            .map(|(project, blocks)| format!("* {}\n{}", project, blocks.join("\n")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders the `TODO [#A] description :ctx:` part of a task heading.
pub fn format_heading(task: &TodoTask) -> String {
    let status = if task.completed { DONE_KEYWORD } else { TODO_KEYWORD };
    let priority = task.priority.map(|letter| format!("[#{}]", letter));
    let tags = if task.contexts.is_empty() {
        None
    } else {
        Some(format!(":{}:", task.contexts.join(":")))
    };

    [Some(status.to_string()), priority, Some(task.description.clone()), tags]
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the planning lines that follow a heading, one per present date.
pub fn format_notes(task: &TodoTask) -> Vec<String> {
    let mut notes = Vec::new();
    if let Some(date) = &task.completion_date {
        notes.push(format!("{} [{}]", CLOSED_LABEL, format_date(date)));
    }
    if let Some(date) = &task.creation_date {
        notes.push(format!("[{}]", format_date(date)));
    }
    if let Some(date) = task.due_date() {
        notes.push(format!("{} <{}>", DEADLINE_LABEL, format_date(&date)));
    }
    notes
}

/// Renders one task as a `** ` heading plus its planning lines.
pub fn format_task(task: &TodoTask) -> String {
    let mut lines = vec![format!("** {}", format_heading(task))];
    lines.extend(format_notes(task));
    lines.join("\n")
}

/// Parses and groups todo.txt lines without rendering the group headings.
pub fn group_tasks<S: AsRef<str>>(lines: &[S]) -> ProjectGroups {
    let mut groups = ProjectGroups::new();
    for line in lines {
        let task = TodoTask::parse(line.as_ref());
        groups.push(task.group(), format_task(&task));
    }
    groups
}

/// Converts todo.txt lines into an Org mode outline.
pub fn convert_to_org<S: AsRef<str>>(lines: &[S]) -> String {
    let groups = group_tasks(lines);
    tracing::debug!(lines = lines.len(), projects = groups.len(), "converted to org");
    groups.render()
}
