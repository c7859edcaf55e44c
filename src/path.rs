//! Project: Escpath
//! Module: path
//!
//! An immutable, escape-aware sequence of path segments joined by a single
//! separator character.

use super::error::Error;
use super::escape::{self, MAIN_SEPARATOR};
use super::info::{Info, InfoFields, InfoValue};
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Index;
use std::{convert::Infallible, str::FromStr, sync::OnceLock};

#[derive(Debug, Clone)]
pub struct EscapedPath {
    separator: char,
    segments: Vec<String>,
    info: OnceLock<Info>,
}

impl EscapedPath {
    /// Creates a path from already unescaped `segments`.
    pub fn new<I, S>(segments: I, separator: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            separator: separator,
            segments: Self::trim_empty_parts(segments.into_iter().map(Into::into).collect()),
            info: OnceLock::new(),
        }
    }

    /// Creates a path from already unescaped `segments` using the platform's
    /// separator.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(segments, MAIN_SEPARATOR)
    }

    /// Splits the escaped string `path` on each unescaped `separator`.
    ///
    /// Parsing never fails: every string maps to some path.
    pub fn parse(path: &str, separator: char) -> Self {
        Self::new(escape::split_path(path, separator), separator)
    }

    /// Drops the empty segments produced by repeated or trailing separators.
    ///
    /// The first segment is always kept so a leading separator survives, and
    /// the second one is kept as well after an empty first segment so the root
    /// path `/` survives.
    fn trim_empty_parts(parts: Vec<String>) -> Vec<String> {
        if parts.len() == 1 && parts[0].is_empty() == true {
            return Vec::new();
        }
        let rooted = parts.first().map_or(false, |p| p.is_empty());
        parts
            .into_iter()
            .enumerate()
            .filter(|(i, part)| *i == 0 || (*i == 1 && rooted == true) || part.is_empty() == false)
            .map(|(_, part)| part)
            .collect()
    }

    // Creates a new path over `parts` that shares this path's separator.
    fn derive(&self, parts: &[String]) -> Self {
        Self::new(parts.iter().cloned(), self.separator)
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Checks if the path starts with a separator.
    pub fn is_rooted(&self) -> bool {
        self.segments.len() > 1 && self.segments[0].is_empty() == true
    }

    /// Accesses the unescaped segment at `index`.
    pub fn get(&self, index: usize) -> Result<&str, Error> {
        match self.segments.get(index) {
            Some(s) => Ok(s.as_str()),
            None => Err(Error::InvalidIndex(index, self.segments.len())),
        }
    }

    /// Always fails: an escaped path cannot be modified in place.
    pub fn try_set(&self, index: usize, _value: impl Into<String>) -> Result<(), Error> {
        Err(Error::ImmutableMutation(index))
    }

    /// Always fails: an escaped path cannot be modified in place.
    pub fn try_remove(&self, index: usize) -> Result<String, Error> {
        Err(Error::ImmutableMutation(index))
    }

    pub fn iter(&self) -> Segments<'_> {
        Segments {
            inner: self.segments.iter(),
        }
    }

    /// Returns the path-info record, computing it on first use.
    pub fn info_all(&self) -> &Info {
        self.info.get_or_init(|| Info::derive(&self.segments, self.separator))
    }

    /// Requests the fields selected by `fields`.
    ///
    /// A single field collapses into [InfoValue::Field] (or [InfoValue::Absent]
    /// when the path does not have it); anything else yields
    /// [InfoValue::Fields] holding only the requested fields that are present.
    pub fn info(&self, fields: InfoFields) -> InfoValue {
        InfoValue::select(self.info_all(), fields)
    }

    /// Accesses a single info field, if present.
    pub fn info_field(&self, field: InfoFields) -> Option<&str> {
        self.info_all().get(field)
    }

    /// Creates a path over a range of segments.
    ///
    /// A negative `offset` counts back from the end. Without a `length` the
    /// range runs to the end; a negative `length` stops that many segments
    /// before the end.
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Self {
        let len = self.segments.len() as isize;
        let start = match offset < 0 {
            true => (len + offset).max(0),
            false => offset.min(len),
        };
        let end = match length {
            None => len,
            Some(n) if n < 0 => (len + n).max(start),
            Some(n) => start.saturating_add(n).min(len),
        };
        self.derive(&self.segments[start as usize..end as usize])
    }

    /// Creates the path of the parent directory: every segment but the last.
    pub fn dirname_path(&self) -> Self {
        self.slice(0, Some(-1))
    }

    /// Removes the leading separator, if any.
    pub fn trim_start(&self) -> Self {
        match self.is_rooted() {
            true => self.derive(&self.segments[1..]),
            false => self.derive(&self.segments),
        }
    }
}

impl Index<usize> for EscapedPath {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}

impl Display for EscapedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.separator)?;
            }
            write!(f, "{}", escape::escape_name(segment, self.separator))?;
        }
        Ok(())
    }
}

impl FromStr for EscapedPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s, MAIN_SEPARATOR))
    }
}

impl From<&str> for EscapedPath {
    fn from(value: &str) -> Self {
        Self::parse(value, MAIN_SEPARATOR)
    }
}

impl From<String> for EscapedPath {
    fn from(value: String) -> Self {
        Self::parse(&value, MAIN_SEPARATOR)
    }
}

impl Default for EscapedPath {
    fn default() -> Self {
        Self::from_segments(Vec::<String>::new())
    }
}

impl PartialEq for EscapedPath {
    fn eq(&self, other: &Self) -> bool {
        self.separator == other.separator && self.segments == other.segments
    }
}

impl Eq for EscapedPath {}

impl Hash for EscapedPath {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.separator.hash(state);
        self.segments.hash(state);
    }
}

/// An iterator over the unescaped segments of an [EscapedPath].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Segments<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl<'a> ExactSizeIterator for Segments<'a> {}

impl<'a> IntoIterator for &'a EscapedPath {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use serde::{de, Deserialize, Serialize};
use std::fmt;

impl Serialize for EscapedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EscapedPath {
    fn deserialize<D>(deserializer: D) -> Result<EscapedPath, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct LayerVisitor;

        impl<'de> de::Visitor<'de> for LayerVisitor {
            type Value = EscapedPath;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an escaped path string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(EscapedPath::from(v))
            }
        }

        deserializer.deserialize_str(LayerVisitor)
    }
}
