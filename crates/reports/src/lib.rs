//!
//! Reports display module.
//!
//! Provides utility functions to display runtime errors properly.
//!
//! When the program's source code is available, an extract of where the error
//! happened is displayed as well.
//!

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

use colored::Colorize;
use quill_ast::{CodeRange, RuntimeCodeRange};
use quill_runtime::{
    context::CallStackEntry,
    errors::{ExecError, ExecErrorNature, ExecInfoType},
};

/// Print an error to STDERR
pub fn print_error(err: &ExecError, source: Option<&str>) {
    eprintln!("{}", format_error(err, source));
}

/// Render an error as a human-readable report
pub fn format_error(err: &ExecError, source: Option<&str>) -> String {
    let mut out = format!(
        "{} {}\n  {} {}",
        format!("{}:", error_category(&err.nature)).bright_red(),
        err.nature.to_string().bright_red().bold(),
        "-->".bright_blue(),
        display_loc(err.at, source).bright_magenta(),
    );

    if let (RuntimeCodeRange::Parsed(at), Some(source)) = (err.at, source) {
        if let Some(extract) = source_extract(at, source) {
            out.push('\n');
            out.push_str(&extract);
        }
    }

    for (info_type, content) in &err.infos {
        out.push_str(&format!(
            "\n  = {} {content}",
            format!(
                "{}:",
                match info_type {
                    ExecInfoType::Note => "note",
                    ExecInfoType::Tip => "tip",
                }
            )
            .cyan()
        ));
    }

    for entry in err.call_stack.history().iter().rev() {
        let CallStackEntry {
            fn_name,
            fn_called_at,
        } = entry;

        out.push_str(&format!(
            "\n  = {} in native function '{}' called at: {}",
            "note:".cyan(),
            fn_name.bright_yellow(),
            display_loc(*fn_called_at, source).bright_magenta()
        ));
    }

    out
}

fn error_category(nature: &ExecErrorNature) -> &'static str {
    match nature {
        ExecErrorNature::UndefinedField { .. } => "Undefined field",
        ExecErrorNature::Argument(_) => "Argument error",

        ExecErrorNature::Custom(_)
        | ExecErrorNature::NotAnInstance { .. }
        | ExecErrorNature::UndefinedVariable { .. }
        | ExecErrorNature::NativeItemAssignment { .. }
        | ExecErrorNature::NotCallable { .. }
        | ExecErrorNature::NotABoolean { .. } => "Runtime error",
    }
}

fn display_loc(at: RuntimeCodeRange, source: Option<&str>) -> String {
    match (at, source) {
        (RuntimeCodeRange::Parsed(range), Some(source)) if !range.is_synthetic() => {
            match line_and_col(source, range.start) {
                Some((line, col)) => format!("line {line}, column {col}"),
                None => at.to_string(),
            }
        }

        _ => at.to_string(),
    }
}

/// Compute the 1-based line and column of an offset
fn line_and_col(source: &str, offset: usize) -> Option<(usize, usize)> {
    let before = source.get(..offset)?;

    let line = before.chars().filter(|&c| c == '\n').count() + 1;
    let col = before
        .rsplit('\n')
        .next()
        .map_or(0, |line| line.chars().count())
        + 1;

    Some((line, col))
}

/// Display the line an error occurred on, with the error's range underlined
fn source_extract(at: CodeRange, source: &str) -> Option<String> {
    if at.is_synthetic() {
        return None;
    }

    let (line, col) = line_and_col(source, at.start)?;

    let line_content = source.lines().nth(line - 1).unwrap_or("");
    let line_start = at.start - source.get(..at.start)?.rsplit('\n').next()?.len();
    let line_end = line_start + line_content.len();

    let underline_len = source
        .get(at.start..at.end().min(line_end))
        .map_or(1, |range| range.chars().count().max(1));

    let gutter = line.to_string();

    Some(format!(
        "{} {}\n{} {} {}",
        format!("{gutter} |").bright_blue(),
        line_content,
        " ".repeat(gutter.len()),
        "|".bright_blue(),
        format!("{}{}", " ".repeat(col - 1), "^".repeat(underline_len)).bright_red()
    ))
}
