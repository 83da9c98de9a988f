//! Login-style account names typed or selected by the operator.

use std::fmt;

/// A non-empty account name targeting a removal.
///
/// Construction from operator input returns `None` for empty or
/// whitespace-only text; the remover treats that as a silent abort back to
/// the menu rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Parse operator input, trimming the trailing newline only. Account
    /// names are passed to the server verbatim otherwise.
    pub fn parse(input: &str) -> Option<Self> {
        let name = input.trim_end_matches(['\r', '\n']);
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    /// The account name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
