/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * File:     lib.rs
 * Purpose:  Crate root: JavaScript-style expression parsing for PAWX.
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

//! Parses a single JavaScript-style expression into an ESTree-shaped tree.
//!
//! Supported: literals, identifiers, `this`, member access, calls, arrays,
//! prefix-unary and binary operators, `&&`/`||`, `? :`, plus a few
//! extensions used by PAWX filters and templates:
//! - named arguments: `f(size=3, tag="a", tag="b")`
//! - `base!suffix` identifiers
//! - runtime-registered operators and identifier characters
//!
//! Statements, declarations and function literals are not expressions
//! and are not accepted.
//!
//! ```text
//! Source → ExpressionParser (Grammar) → Node → evaluator / JSON
//! ```
//!
//! # Example
//! ```
//! use pawx_expr::{parse, Node};
//!
//! let node = parse("1 + 2 * 3").unwrap();
//! assert_eq!(
//!     node,
//!     Node::binary(
//!         "+",
//!         Node::number(1.0, "1"),
//!         Node::binary("*", Node::number(2.0, "2"), Node::number(3.0, "3")),
//!     )
//! );
//! ```

/// Syntax tree nodes and their wire format.
pub mod ast;

/// Rendering of parse errors for humans.
pub mod diagnostics;

/// Parse and configuration errors.
pub mod error;

/// Operators, identifier characters and keywords.
pub mod grammar;

/// The scanner/parser engine.
pub mod parser;

/// Line/column locations.
pub mod span;

pub use ast::{KeyValueEntry, LiteralValue, Node};
pub use diagnostics::DiagnosticPrinter;
pub use error::{ConfigError, ErrorKind, ParseError};
pub use grammar::{Grammar, GrammarConfig};
pub use parser::ExpressionParser;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses `source` with the default grammar.
///
/// Use an [`ExpressionParser`] to register extra operators or identifier
/// characters.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    ExpressionParser::default().parse(source)
}
