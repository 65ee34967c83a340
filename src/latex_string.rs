use std::ops::Deref;

use derive_more::Display;

/// A string that has been escaped, so it can be inserted into a latex document.
#[derive(Debug, Clone, Display, PartialEq)]
#[display("{}", _0)]
pub struct LatexString(String);

impl LatexString {
    #[must_use]
    pub fn escape(value: &str) -> Self {
        Self(v_latexescape::escape(value).to_string())
    }
}

impl Deref for LatexString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
