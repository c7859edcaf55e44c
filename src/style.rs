//! Project: Escpath
//! Module: style
//!
//! The configurable parts of an escaped path, loaded from TOML.

use crate::{
    escape::{self, ESCAPE, MAIN_SEPARATOR},
    path::EscapedPath,
    Error,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleFile {
    separator: char,
}

impl Default for StyleFile {
    fn default() -> Self {
        Self {
            separator: MAIN_SEPARATOR,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "StyleFile")]
pub struct Style {
    separator: char,
}

impl Style {
    pub fn new(separator: char) -> Result<Self, Error> {
        match separator == ESCAPE {
            true => Err(Error::SeparatorIsEscape),
            false => Ok(Self {
                separator: separator,
            }),
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parses the escaped string `path` with this style's separator.
    pub fn parse(&self, path: &str) -> EscapedPath {
        EscapedPath::parse(path, self.separator)
    }

    /// Creates a path from unescaped `segments` with this style's separator.
    pub fn path<I, S>(&self, segments: I) -> EscapedPath
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EscapedPath::new(segments, self.separator)
    }

    pub fn escape(&self, name: &str) -> String {
        escape::escape_name(name, self.separator)
    }

    pub fn unescape(&self, name: &str) -> String {
        escape::unescape_name(name, self.separator)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            separator: MAIN_SEPARATOR,
        }
    }
}

impl TryFrom<StyleFile> for Style {
    type Error = Error;

    fn try_from(value: StyleFile) -> Result<Self, Self::Error> {
        Self::new(value.separator)
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: StyleFile = match toml::de::from_str(s) {
            Ok(r) => r,
            Err(e) => return Err(Error::StyleParse(Error::lowerize(e.to_string()))),
        };
        Self::try_from(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_parse_style_ok() {
        assert_eq!(Style::from_str("separator = ':'"), Style::new(':'));
        assert_eq!(Style::from_str("separator = \"/\""), Style::new('/'));
        assert_eq!(Style::from_str(""), Ok(Style::default()));
        assert_eq!(Style::default().separator(), MAIN_SEPARATOR);
    }

    #[test]
    fn ut_parse_style_err() {
        assert_eq!(
            Style::from_str("separator = '\\'"),
            Err(Error::SeparatorIsEscape)
        );
        assert!(matches!(
            Style::from_str("delimiter = ':'"),
            Err(Error::StyleParse(_))
        ));
        assert!(matches!(
            Style::from_str("separator = '::'"),
            Err(Error::StyleParse(_))
        ));
        assert_eq!(Style::new(ESCAPE), Err(Error::SeparatorIsEscape));
    }

    #[test]
    fn ut_nested_style_validates() {
        #[derive(Debug, Deserialize)]
        struct Settings {
            #[allow(unused)]
            style: Style,
        }
        assert!(toml::from_str::<Settings>("[style]\nseparator = ':'").is_ok());
        assert!(toml::from_str::<Settings>("[style]\nseparator = '\\'").is_err());
    }

    #[test]
    fn ut_style_paths() {
        let style = Style::new(':').unwrap();
        let p = style.parse(r"basis:dict\:name:key");
        assert_eq!(p.len(), 3);
        assert_eq!(p.get(1), Ok("dict:name"));
        assert_eq!(style.path(["basis", "dict:name", "key"]), p);
        assert_eq!(style.escape("a:b"), r"a\:b");
        assert_eq!(style.unescape(r"a\:b"), "a:b");
    }
}
