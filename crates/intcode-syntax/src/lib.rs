// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # intcode-syntax
//!
//! The front end of the intcode compiler: a scanner, a recursive descent
//! parser and the syntax tree the lowering pass consumes.
//!
//! The accepted language is a JavaScript subset. It deliberately parses a
//! few constructs the lowering pass rejects (calls, functions, array and
//! object literals, `return`, `break`, `continue`, `throw`) so that the code
//! generator can report them as unsupported instead of the parser reporting
//! them as syntax errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use intcode_syntax::parse;
//!
//! let program = parse("var a = 1 + 2;").expect("valid source");
//! assert_eq!(program.body.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{Result, SyntaxError};
pub use lexer::Span;
pub use parser::Parser;

/// Parses a complete source text into a [`ast::Program`].
pub fn parse(source: &str) -> Result<ast::Program> {
    Parser::new(source).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_source() {
        let program = parse("").unwrap();
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_parse_reports_errors() {
        assert!(parse("var = ;").is_err());
    }
}
