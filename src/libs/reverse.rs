//! Rebuilds todo.txt lines from Org mode outlines produced by [`super::outline`].
//!
//! The reconstruction emits tokens in the canonical todo.txt order:
//!
//! ```text
//! [x] [(P)] [completion-date [creation-date]] description [+project] [@context...] [due:date]
//! ```
//!
//! An outline keeps only the group a task was filed under, so a line that
//! carried several `+project` tags comes back with just the first one, and
//! tasks in the default group come back with none.
//!
//! ```rust
//! use todo2org::libs::reverse::convert_to_todo;
//!
//! let lines = ["* Pets", "** DONE [#A] Walk the dog :park:", "CLOSED: [2018-12-12]"];
//! assert_eq!(convert_to_todo(&lines), "x (A) 2018-12-12 Walk the dog +Pets @park");
//! ```

use super::date::{format_date, parse_date};
use super::outline::{CLOSED_LABEL, DEADLINE_LABEL, DONE_KEYWORD, TODO_KEYWORD};
use super::task::{DEFAULT_PROJECT, DUE_KEY};
use chrono::NaiveDate;

/// One task heading with its planning lines and enclosing group.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct OrgTask {
    project: Option<String>,
    completed: bool,
    priority: Option<char>,
    description: String,
    contexts: Vec<String>,
    closed: Option<NaiveDate>,
    created: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
}

impl OrgTask {
    fn from_heading(project: Option<String>, heading: &str) -> Self {
        let mut task = OrgTask {
            project,
            ..OrgTask::default()
        };
        let mut tokens: Vec<&str> = heading.split_whitespace().collect();

        match tokens.first() {
            Some(&DONE_KEYWORD) => {
                task.completed = true;
                tokens.remove(0);
            }
            Some(&TODO_KEYWORD) => {
                tokens.remove(0);
            }
            _ => {}
        }

        if let Some(priority) = tokens.first().and_then(|token| parse_org_priority(token)) {
            task.priority = Some(priority);
            tokens.remove(0);
        }

        if let Some(contexts) = tokens.last().and_then(|token| parse_org_tags(token)) {
            task.contexts = contexts;
            tokens.pop();
        }

        task.description = tokens.join(" ");
        task
    }

    /// Folds a planning line into the task; unknown lines are ignored.
    fn apply_note(&mut self, line: &str) {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(CLOSED_LABEL) {
            if let Some(date) = bracketed_date(rest.trim(), '[', ']') {
                self.closed = Some(date);
            }
        } else if let Some(rest) = line.strip_prefix(DEADLINE_LABEL) {
            if let Some(date) = bracketed_date(rest.trim(), '<', '>') {
                self.deadline = Some(date);
            }
        } else if let Some(date) = bracketed_date(line, '[', ']') {
            self.created = Some(date);
        }
    }

    fn to_todo_line(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.completed {
            parts.push("x".to_string());
        }
        if let Some(priority) = self.priority {
            parts.push(format!("({})", priority));
        }
        if let Some(date) = &self.closed {
            parts.push(format_date(date));
        }
        if let Some(date) = &self.created {
            parts.push(format_date(date));
        }
        if !self.description.is_empty() {
            parts.push(self.description.clone());
        }
        if let Some(project) = self.project.as_deref().filter(|p| *p != DEFAULT_PROJECT) {
            parts.push(format!("+{}", project));
        }
        parts.extend(self.contexts.iter().map(|context| format!("@{}", context)));
        if let Some(date) = &self.deadline {
            parts.push(format!("{}:{}", DUE_KEY, format_date(date)));
        }

        parts.join(" ")
    }
}

/// Matches an Org priority cookie `[#X]`.
fn parse_org_priority(token: &str) -> Option<char> {
    let inner = token.strip_prefix("[#")?.strip_suffix(']')?;
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Some(letter),
        _ => None,
    }
}

/// Splits an Org tag string `:a:b:` into its tags.
fn parse_org_tags(token: &str) -> Option<Vec<String>> {
    let inner = token.strip_prefix(':')?.strip_suffix(':')?;
    if inner.is_empty() {
        return None;
    }
    let tags: Vec<String> = inner.split(':').map(str::to_string).collect();
    if tags.iter().any(String::is_empty) {
        return None;
    }
    Some(tags)
}

fn bracketed_date(text: &str, open: char, close: char) -> Option<NaiveDate> {
    text.strip_prefix(open)?
        .strip_suffix(close)
        .and_then(parse_date)
}

fn group_heading(line: &str) -> Option<&str> {
    if line.starts_with("**") {
        return None;
    }
    line.strip_prefix("* ").map(str::trim)
}

fn task_heading(line: &str) -> Option<&str> {
    if line == "**" {
        return Some("");
    }
    line.strip_prefix("** ")
}

fn split_tasks<S: AsRef<str>>(lines: &[S]) -> Vec<OrgTask> {
    let mut project: Option<String> = None;
    let mut tasks: Vec<OrgTask> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim_end();
        if let Some(name) = group_heading(line) {
            project = Some(name.to_string());
        } else if let Some(heading) = task_heading(line) {
            tasks.push(OrgTask::from_heading(project.clone(), heading));
        } else if let Some(task) = tasks.last_mut() {
            task.apply_note(line);
        }
    }

    tasks
}

/// Rebuilds the todo.txt line for a single task block.
///
/// The block may start with its `* <project>` group heading. Lines before
/// the first `** ` heading are ignored; when several tasks are present only
/// the first is returned.
pub fn convert_to_todo<S: AsRef<str>>(lines: &[S]) -> String {
    split_tasks(lines)
        .into_iter()
        .next()
        .map(|task| task.to_todo_line())
        .unwrap_or_default()
}

/// Rebuilds one todo.txt line per task in a whole outline document.
pub fn convert_document_to_todo<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let todo_lines: Vec<String> = split_tasks(lines)
        .iter()
        .map(OrgTask::to_todo_line)
        .collect();
    tracing::debug!(lines = lines.len(), tasks = todo_lines.len(), "converted to todo.txt");
    todo_lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_org_priority() {
        assert_eq!(parse_org_priority("[#B]"), Some('B'));
        assert_eq!(parse_org_priority("[#b]"), None);
        assert_eq!(parse_org_priority("[B]"), None);
        assert_eq!(parse_org_priority("[#BC]"), None);
    }

    #[test]
    fn test_parse_org_tags() {
        assert_eq!(
            parse_org_tags(":home:park:"),
            Some(vec!["home".to_string(), "park".to_string()])
        );
        assert_eq!(parse_org_tags(":home:"), Some(vec!["home".to_string()]));
        assert_eq!(parse_org_tags("::"), None);
        assert_eq!(parse_org_tags(":a::b:"), None);
        assert_eq!(parse_org_tags("home"), None);
    }

    #[test]
    fn test_heading_without_keyword_keeps_text() {
        let task = OrgTask::from_heading(None, "Walk the dog");
        assert!(!task.completed);
        assert_eq!(task.description, "Walk the dog");
    }

    #[test]
    fn test_apply_note_ignores_noise() {
        let mut task = OrgTask::default();
        task.apply_note("Some free text");
        task.apply_note("DEADLINE: <not-a-date>");
        task.apply_note("[2018-12-10]");
        assert_eq!(task.deadline, None);
        assert_eq!(task.created, NaiveDate::from_ymd_opt(2018, 12, 10));
    }

    #[test]
    fn test_group_heading_detection() {
        assert_eq!(group_heading("* Pets"), Some("Pets"));
        assert_eq!(group_heading("** TODO Walk"), None);
        assert_eq!(group_heading("CLOSED: [2018-12-12]"), None);
    }
}
