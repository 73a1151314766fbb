//! File-level conversion between todo.txt and Org mode.
//!
//! This is the I/O shell around the pure converters in [`super::outline`]
//! and [`super::reverse`]: it reads input files, converts their lines and
//! writes the result next to the input with the extension replaced
//! (`todo.txt` → `todo.org` and back).
//!
//! Every file is converted in its own tokio task. Files never depend on one
//! another, so a failure only affects the file that caused it and results
//! are collected back in argument order.
//!
//! ```rust,no_run
//! use todo2org::libs::convert::{convert_files, ConvertOptions, Direction};
//! use std::path::PathBuf;
//!
//! # async fn run() {
//! let options = ConvertOptions::new(Direction::ToOrg);
//! let results = convert_files(vec![PathBuf::from("todo.txt")], options).await;
//! # }
//! ```

use super::error::ConvertError;
use super::outline::group_tasks;
use super::reverse::convert_document_to_todo;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Which way a file is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// todo.txt → Org mode outline.
    ToOrg,
    /// Org mode outline → todo.txt.
    ToTodo,
}

impl Direction {
    /// Extension given to output files.
    pub fn extension(&self) -> &'static str {
        match self {
            Direction::ToOrg => "org",
            Direction::ToTodo => "txt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub direction: Direction,
    /// Replace output files that already exist.
    pub overwrite: bool,
    /// Return the converted text instead of writing it to disk.
    pub to_stdout: bool,
}

impl ConvertOptions {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            overwrite: true,
            to_stdout: false,
        }
    }
}

/// Outcome of converting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    /// Written file, `None` when the result was kept in `content`.
    pub output: Option<PathBuf>,
    pub tasks: usize,
    pub projects: usize,
    /// Converted text, present only for `to_stdout` conversions.
    pub content: Option<String>,
}

/// Converted text together with the counts shown in the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub text: String,
    pub tasks: usize,
    pub projects: usize,
}

/// Sibling path of `input` with the extension for `direction`.
pub fn output_path(input: &Path, direction: Direction) -> PathBuf {
    input.with_extension(direction.extension())
}

/// Converts the full text of one file.
///
/// Org output is written exactly as produced by the converter. todo.txt
/// output gets one task per line with a trailing newline.
pub fn convert_text(text: &str, direction: Direction) -> Converted {
    let lines: Vec<&str> = text.lines().collect();

    match direction {
        Direction::ToOrg => {
            let groups = group_tasks(&lines);
            Converted {
                text: groups.render(),
                tasks: lines.len(),
                projects: groups.len(),
            }
        }
        Direction::ToTodo => {
            let todo_lines = convert_document_to_todo(&lines);
            let projects = lines
                .iter()
                .filter_map(|line| line.strip_prefix("* "))
                .map(str::trim)
                .collect::<HashSet<_>>()
                .len();
            let mut text = todo_lines.join("\n");
            if !todo_lines.is_empty() {
                text.push('\n');
            }
            Converted {
                text,
                tasks: todo_lines.len(),
                projects,
            }
        }
    }
}

/// Reads, converts and writes a single file.
pub async fn convert_file(input: PathBuf, options: ConvertOptions) -> Result<ConversionSummary, ConvertError> {
    let output = output_path(&input, options.direction);
    if output == input {
        return Err(ConvertError::UnsupportedInput { path: input });
    }

    let text = tokio::fs::read_to_string(&input)
        .await
        .map_err(|source| ConvertError::Read {
            path: input.clone(),
            source,
        })?;

    let converted = convert_text(&text, options.direction);
    tracing::debug!(
        input = %input.display(),
        tasks = converted.tasks,
        projects = converted.projects,
        "converted file"
    );

    if options.to_stdout {
        return Ok(ConversionSummary {
            input,
            output: None,
            tasks: converted.tasks,
            projects: converted.projects,
            content: Some(converted.text),
        });
    }

    if !options.overwrite && tokio::fs::try_exists(&output).await.unwrap_or(false) {
        return Err(ConvertError::OutputExists { path: output });
    }

    tokio::fs::write(&output, converted.text.as_bytes())
        .await
        .map_err(|source| ConvertError::Write {
            path: output.clone(),
            source,
        })?;

    Ok(ConversionSummary {
        input,
        output: Some(output),
        tasks: converted.tasks,
        projects: converted.projects,
        content: None,
    })
}

/// Converts every file concurrently and returns the results in input order.
pub async fn convert_files(
    inputs: Vec<PathBuf>,
    options: ConvertOptions,
) -> Vec<(PathBuf, Result<ConversionSummary, ConvertError>)> {
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let path = input.clone();
            (path, tokio::spawn(convert_file(input, options)))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(err) => Err(ConvertError::Task(err.to_string())),
        };
        results.push((path, result));
    }
    results
}
