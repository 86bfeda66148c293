// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for scanning and parsing.

use thiserror::Error;

use crate::lexer::Span;

/// Result type for front-end operations.
pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Errors produced while turning source text into a syntax tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// The parser found a token it did not expect
    #[error("expected {expected}, found {found} at {span}")]
    Unexpected {
        /// What the parser was looking for
        expected: String,
        /// Description of the token actually found
        found: String,
        /// Location of the offending token
        span: Span,
    },

    /// The scanner could not form a token (unterminated string, stray character)
    #[error("invalid or unterminated token at {span}")]
    InvalidToken {
        /// Location of the offending characters
        span: Span,
    },

    /// The left side of an assignment cannot be assigned to
    #[error("invalid assignment target at {span}")]
    InvalidAssignmentTarget {
        /// Location of the assignment operator
        span: Span,
    },
}

impl SyntaxError {
    /// Returns the source location the error points at.
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Unexpected { span, .. }
            | SyntaxError::InvalidToken { span }
            | SyntaxError::InvalidAssignmentTarget { span } => *span,
        }
    }
}
