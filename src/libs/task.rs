//! todo.txt task records and the line parser that builds them.
//!
//! A todo.txt line carries its metadata in two places: a fixed sequence of
//! leading markers (completion, priority, dates) and free-floating tags
//! anywhere in the text (`+project`, `@context`, `key:value`).
//!
//! ```text
//! x (A) 2018-12-12 2018-12-10 Take dog for a walk +Pets @park due:2018-12-14
//! │  │       │          │              │             │    │        │
//! │  │       │          │              │             │    │        └─ attribute
//! │  │       │          │              │             │    └─ context
//! │  │       │          │              │             └─ project
//! │  │       │          │              └─ description
//! │  │       │          └─ creation date
//! │  │       └─ completion date
//! │  └─ priority
//! └─ completed
//! ```
//!
//! Leading markers are consumed strictly in that order. Parsing never fails:
//! a marker that is missing or malformed is just left in the text.

use super::date::parse_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Group name used for tasks that carry no `+project` tag.
pub const DEFAULT_PROJECT: &str = "Tasks";

/// Attribute key that becomes an Org mode `DEADLINE`.
pub const DUE_KEY: &str = "due";

/// A single todo.txt task, decomposed into its semantic fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoTask {
    pub completed: bool,
    pub priority: Option<char>,
    pub completion_date: Option<NaiveDate>,
    pub creation_date: Option<NaiveDate>,
    /// The text left after every marker and tag has been removed.
    pub description: String,
    /// All `+project` tags in order of appearance.
    pub projects: Vec<String>,
    /// All `@context` tags in order of appearance.
    pub contexts: Vec<String>,
    /// `key:value` pairs; the last occurrence of a key wins.
    pub attributes: BTreeMap<String, String>,
}

impl TodoTask {
    /// Parses one raw todo.txt line.
    pub fn parse(line: &str) -> Self {
        let mut task = TodoTask::default();
        let all_tokens: Vec<&str> = line.split_whitespace().collect();
        let mut tokens = all_tokens.as_slice();

        if tokens.first() == Some(&"x") {
            task.completed = true;
            tokens = &tokens[1..];
        }

        if let Some(priority) = tokens.first().and_then(|token| parse_priority(token)) {
            task.priority = Some(priority);
            tokens = &tokens[1..];
        }

        // Both leading tokens are inspected before deciding, so a line with
        // fewer than two tokens left never yields a date.
        if let [first, second, ..] = tokens {
            match (parse_date(first), parse_date(second)) {
                (Some(completion), Some(creation)) => {
                    task.completion_date = Some(completion);
                    task.creation_date = Some(creation);
                    tokens = &tokens[2..];
                }
                (Some(date), None) => {
                    if task.completed {
                        task.completion_date = Some(date);
                    } else {
                        task.creation_date = Some(date);
                    }
                    tokens = &tokens[1..];
                }
                _ => {}
            }
        }

        let mut description = Vec::with_capacity(tokens.len());
        for token in tokens {
            let mut tagged = false;

            if let Some(project) = tag_name(token, '+') {
                task.projects.push(project.to_string());
                tagged = true;
            }
            if let Some(context) = tag_name(token, '@') {
                task.contexts.push(context.to_string());
                tagged = true;
            }
            if let Some((key, value)) = parse_key_value(token) {
                task.attributes.insert(key.to_string(), value.to_string());
                tagged = true;
            }

            if !tagged {
                description.push(*token);
            }
        }
        task.description = description.join(" ");

        tracing::trace!(?task, "parsed todo.txt line");
        task
    }

    /// The project this task is grouped under.
    pub fn group(&self) -> &str {
        self.projects
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_PROJECT)
    }

    /// The `due:` attribute, if it holds a valid date.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.attributes.get(DUE_KEY).and_then(|value| parse_date(value))
    }
}

/// Matches a token of exactly the form `(X)` with `X` an uppercase ASCII letter.
fn parse_priority(token: &str) -> Option<char> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Some(letter),
        _ => None,
    }
}

/// Returns the name of a `+project` / `@context` style token.
fn tag_name(token: &str, sigil: char) -> Option<&str> {
    token.strip_prefix(sigil).filter(|name| !name.is_empty())
}

/// Splits a `key:value` token with exactly one colon and two non-empty sides.
fn parse_key_value(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once(':')?;
    if key.is_empty() || value.is_empty() || value.contains(':') {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("(A)"), Some('A'));
        assert_eq!(parse_priority("(Z)"), Some('Z'));
        assert_eq!(parse_priority("(a)"), None);
        assert_eq!(parse_priority("(AB)"), None);
        assert_eq!(parse_priority("()"), None);
        assert_eq!(parse_priority("(A)x"), None);
        assert_eq!(parse_priority("A"), None);
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(tag_name("+Pets", '+'), Some("Pets"));
        assert_eq!(tag_name("+", '+'), None);
        assert_eq!(tag_name("a+b", '+'), None);
        assert_eq!(tag_name("@home", '@'), Some("home"));
        assert_eq!(tag_name("me@home", '@'), None);
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("due:2018-12-12"), Some(("due", "2018-12-12")));
        assert_eq!(parse_key_value("status:waiting"), Some(("status", "waiting")));
        assert_eq!(parse_key_value("a:b:c"), None);
        assert_eq!(parse_key_value(":b"), None);
        assert_eq!(parse_key_value("a:"), None);
        assert_eq!(parse_key_value("plain"), None);
    }
}
