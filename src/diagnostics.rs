/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     diagnostics.rs
 * Purpose:  Compiler-style rendering of expression parse errors.
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX programming language project.
 * 
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::error::ParseError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for expression parse errors.
///
/// This printer:
/// - Converts the error's character offset into line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is inspired by `rustc` diagnostics and stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full expression source.
    source: String,

    /// Where the expression came from (a file name, a settings key, ...).
    ///
    /// Used only for display purposes in diagnostics.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given expression source.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic as text.
    ///
    /// # Output Example
    /// ```text
    /// error[E_EXPECTED_COLON]: Expected : at character 5
    ///   --> filter.px:1:6
    ///    |
    ///  1 | a ? b
    ///    |      ^
    /// ```
    pub fn render(&self, error: &ParseError) -> String {
        let Span { line, column } = Span::from_offset(&self.source, error.index);

        // Lines are 1-indexed in diagnostics, but iterators are 0-indexed.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n   |\n{:>3} | {}\n   | {}^",
            error.code(),
            error.message(),
            self.file_name,
            line,
            column + 1,
            line,
            src_line,
            " ".repeat(column),
        );

        if let Some(help) = &error.help {
            out.push_str("\n\nhelp: ");
            out.push_str(help);
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprintln!("{}", self.render(error));
    }
}
