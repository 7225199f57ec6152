/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     error.rs
 * Purpose:  Error types for expression parsing and grammar configuration.
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

use thiserror::Error;

/// The category of a parse failure.
///
/// Every category is fatal: the first error aborts the parse and no
/// partial tree is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that no rule can use at the current position.
    UnexpectedCharacter,

    /// A required sub-expression was missing (ternary branch, operand of
    /// a binary or unary operator, named-argument value, ...).
    ExpectedExpression,

    /// A ternary without its `:`.
    ExpectedColon,

    /// A missing closing quote, `)` or `]`.
    Unclosed,

    /// Digits followed by something that cannot continue a number.
    MalformedNumber,

    /// A compound sequence where a single argument or element was required.
    ExpectedComma,
}

impl ErrorKind {
    /// Stable error code used in rendered diagnostics.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UnexpectedCharacter => "E_UNEXPECTED",
            ErrorKind::ExpectedExpression => "E_EXPECTED_EXPR",
            ErrorKind::ExpectedColon => "E_EXPECTED_COLON",
            ErrorKind::Unclosed => "E_UNCLOSED",
            ErrorKind::MalformedNumber => "E_MALFORMED_NUMBER",
            ErrorKind::ExpectedComma => "E_EXPECTED_COMMA",
        }
    }
}

/// A located parse failure.
///
/// `index` is the zero-based character offset at which the failure was
/// detected. The `Display` form embeds it the same way every PAWX
/// expression error does: `"<description> at character <index>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description} at character {index}")]
pub struct ParseError {
    /// Failure category.
    pub kind: ErrorKind,

    /// Human-readable description, without the location suffix.
    pub description: String,

    /// Character offset into the source.
    pub index: usize,

    /// Optional note / help text
    pub help: Option<String>,
}

impl ParseError {
    /// Generic constructor
    pub fn new(kind: ErrorKind, description: impl Into<String>, index: usize) -> Self {
        Self {
            kind,
            description: description.into(),
            index,
            help: None,
        }
    }

    pub fn unexpected_character(description: impl Into<String>, index: usize) -> Self {
        Self::new(ErrorKind::UnexpectedCharacter, description, index)
    }

    pub fn expected_expression(description: impl Into<String>, index: usize) -> Self {
        Self::new(ErrorKind::ExpectedExpression, description, index)
    }

    pub fn expected_colon(index: usize) -> Self {
        Self::new(ErrorKind::ExpectedColon, "Expected :", index)
    }

    pub fn unclosed(description: impl Into<String>, index: usize) -> Self {
        Self::new(ErrorKind::Unclosed, description, index)
    }

    pub fn malformed_number(description: impl Into<String>, index: usize) -> Self {
        Self::new(ErrorKind::MalformedNumber, description, index)
    }

    pub fn expected_comma(index: usize) -> Self {
        Self::new(ErrorKind::ExpectedComma, "Expected comma", index)
    }

    /// Full message, including the location suffix.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable error code of this error's kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Failure to load a grammar description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid grammar configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("operator must not be empty")]
    EmptyOperator,
}
