use core::convert::Infallible;
use core::ops::Deref;
use core::str::FromStr;

use derive_more::Display;

/// Text that has been escaped, so it can be inserted into a latex document verbatim.
#[derive(Debug, Clone, Display, PartialEq, Eq)]
#[display("{}", _0)]
pub struct LatexString(String);

impl LatexString {
    #[must_use]
    pub fn escape(value: &str) -> Self {
        Self(v_latexescape::escape(value).to_string())
    }
}

impl FromStr for LatexString {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::escape(value))
    }
}

impl Deref for LatexString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(&*LatexString::escape("Jan Kowalski"), "Jan Kowalski");
        assert_eq!(&*LatexString::escape("Zażółć gęślą jaźń"), "Zażółć gęślą jaźń");
        assert_ne!(&*LatexString::escape("50% & more"), "50% & more");
        assert!(!LatexString::escape("#1_$").contains("#1_$"));
    }
}
