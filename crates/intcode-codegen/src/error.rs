// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Errors raised while lowering a syntax tree.
//!
//! Every error aborts the whole run; no partial listing is returned.

use thiserror::Error;

/// Result type for lowering operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Lowering errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A node that has no name was given to the name resolver
    #[error("invalid node: {0} has no name")]
    InvalidNode(String),

    /// A node that cannot be encoded as an operand
    #[error("invalid literal: {0}")]
    InvalidLiteral(String),

    /// An operator with no mnemonic
    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(String),

    /// An expression form the lowering pass does not handle
    #[error("unsupported expression: {0}")]
    UnsupportedExpression(String),

    /// A statement form the lowering pass does not handle
    #[error("unsupported statement: {0}")]
    UnsupportedStatement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CodegenError::UnsupportedOperator("??".into()).to_string(),
            "unsupported operator `??`"
        );
        assert_eq!(
            CodegenError::UnsupportedStatement("return statement".into()).to_string(),
            "unsupported statement: return statement"
        );
        assert_eq!(
            CodegenError::InvalidNode("computed member expression".into()).to_string(),
            "invalid node: computed member expression has no name"
        );
    }
}
