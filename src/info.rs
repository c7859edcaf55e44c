//! Project: Escpath
//! Module: info
//!
//! The path-info record derived from an escaped path: the same dirname,
//! basename, extension, and filename breakdown as PHP's `pathinfo()`.

use super::escape::escape_name;
use serde::Serialize;

bitflags::bitflags! {
    /// Selects which fields of an [Info] record are requested.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InfoFields: u8 {
        const DIRNAME = 1;
        const BASENAME = 2;
        const EXTENSION = 4;
        const FILENAME = 8;
    }
}

// Single fields in the order they appear in an info record.
const FIELD_NAMES: [(InfoFields, &str); 4] = [
    (InfoFields::DIRNAME, "dirname"),
    (InfoFields::BASENAME, "basename"),
    (InfoFields::EXTENSION, "extension"),
    (InfoFields::FILENAME, "filename"),
];

impl Default for InfoFields {
    fn default() -> Self {
        Self::all()
    }
}

impl InfoFields {
    /// Returns `true` if exactly one field is selected.
    pub fn is_single(&self) -> bool {
        self.bits().is_power_of_two()
    }

    /// Accesses the key name of a single field.
    pub fn name(&self) -> Option<&'static str> {
        FIELD_NAMES
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, name)| *name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    dirname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
}

impl Info {
    /// Derives the full record from a normalized list of unescaped segments.
    pub fn derive(segments: &[String], separator: char) -> Self {
        let (basename, rest) = match segments.split_last() {
            Some(r) => r,
            None => {
                return Self {
                    basename: Some(String::new()),
                    filename: Some(String::new()),
                    ..Self::default()
                }
            }
        };
        let dirname = match rest {
            [] => String::from("."),
            [root] if root.is_empty() => separator.to_string(),
            _ => rest
                .iter()
                .map(|s| escape_name(s, separator))
                .collect::<Vec<String>>()
                .join(&separator.to_string()),
        };
        let (filename, extension) = match basename.rsplit_once('.') {
            Some((name, ext)) => (name.to_string(), Some(ext.to_string())),
            None => (basename.clone(), None),
        };
        Self {
            dirname: Some(dirname),
            basename: Some(basename.clone()),
            extension: extension,
            filename: Some(filename),
        }
    }

    pub fn dirname(&self) -> Option<&str> {
        self.dirname.as_deref()
    }

    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Accesses the value of a single field. Returns `None` if the field is
    /// absent or `field` selects more than one field.
    pub fn get(&self, field: InfoFields) -> Option<&str> {
        if field == InfoFields::DIRNAME {
            self.dirname()
        } else if field == InfoFields::BASENAME {
            self.basename()
        } else if field == InfoFields::EXTENSION {
            self.extension()
        } else if field == InfoFields::FILENAME {
            self.filename()
        } else {
            None
        }
    }

    /// Creates a copy holding only the fields selected by `fields`.
    pub fn filter(&self, fields: InfoFields) -> Self {
        let keep = |field: InfoFields, value: &Option<String>| match fields.contains(field) {
            true => value.clone(),
            false => None,
        };
        Self {
            dirname: keep(InfoFields::DIRNAME, &self.dirname),
            basename: keep(InfoFields::BASENAME, &self.basename),
            extension: keep(InfoFields::EXTENSION, &self.extension),
            filename: keep(InfoFields::FILENAME, &self.filename),
        }
    }

    /// Iterates over the present fields as `(name, value)` pairs, in the order
    /// dirname, basename, extension, filename.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FIELD_NAMES
            .into_iter()
            .filter_map(move |(field, name)| Some((name, self.get(field)?)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The answer to an info request.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum InfoValue {
    /// Exactly one field was requested and it is present.
    Field(String),
    /// Exactly one field was requested and it is absent.
    Absent,
    /// Several fields were requested; only the present ones are set.
    Fields(Info),
}

impl InfoValue {
    pub(crate) fn select(info: &Info, fields: InfoFields) -> Self {
        match fields.is_single() {
            true => match info.get(fields) {
                Some(v) => Self::Field(v.to_string()),
                None => Self::Absent,
            },
            false => Self::Fields(info.filter(fields)),
        }
    }

    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&Info> {
        match self {
            Self::Fields(info) => Some(info),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ut_derive_empty() {
        let info = Info::derive(&[], '/');
        assert_eq!(info.basename(), Some(""));
        assert_eq!(info.filename(), Some(""));
        assert_eq!(info.dirname(), None);
        assert_eq!(info.extension(), None);
        assert_eq!(info.len(), 2);
    }

    #[test]
    fn ut_derive_dirname() {
        assert_eq!(Info::derive(&segs(&["foo"]), '/').dirname(), Some("."));
        assert_eq!(Info::derive(&segs(&["", "foo"]), '/').dirname(), Some("/"));
        assert_eq!(Info::derive(&segs(&["", "foo"]), ':').dirname(), Some(":"));
        assert_eq!(
            Info::derive(&segs(&["", "a/b", "c"]), '/').dirname(),
            Some(r"/a\/b")
        );
    }

    #[test]
    fn ut_derive_dots() {
        let info = Info::derive(&segs(&["archive.tar.gz"]), '/');
        assert_eq!(info.filename(), Some("archive.tar"));
        assert_eq!(info.extension(), Some("gz"));

        let info = Info::derive(&segs(&[".htaccess"]), '/');
        assert_eq!(info.filename(), Some(""));
        assert_eq!(info.extension(), Some("htaccess"));

        let info = Info::derive(&segs(&["foo."]), '/');
        assert_eq!(info.filename(), Some("foo"));
        assert_eq!(info.extension(), Some(""));

        let info = Info::derive(&segs(&["dïr.ü"]), '/');
        assert_eq!(info.filename(), Some("dïr"));
        assert_eq!(info.extension(), Some("ü"));
    }

    #[test]
    fn ut_fields_single() {
        assert_eq!(InfoFields::EXTENSION.is_single(), true);
        assert_eq!((InfoFields::EXTENSION | InfoFields::DIRNAME).is_single(), false);
        assert_eq!(InfoFields::empty().is_single(), false);
        assert_eq!(InfoFields::default(), InfoFields::all());
        assert_eq!(InfoFields::all().name(), None);
    }

    #[test]
    fn ut_select() {
        let info = Info::derive(&segs(&["foo", "bar"]), '/');
        assert_eq!(
            InfoValue::select(&info, InfoFields::BASENAME),
            InfoValue::Field(String::from("bar"))
        );
        assert_eq!(InfoValue::select(&info, InfoFields::EXTENSION), InfoValue::Absent);

        let value = InfoValue::select(&info, InfoFields::EXTENSION | InfoFields::FILENAME);
        let fields = value.as_fields().unwrap();
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec![("filename", "bar")]);

        let value = InfoValue::select(&info, InfoFields::empty());
        assert_eq!(value.as_fields().unwrap().is_empty(), true);
    }

    #[test]
    fn ut_iter_order() {
        let info = Info::derive(&segs(&["a", "b.c"]), '/');
        assert_eq!(
            info.iter().collect::<Vec<_>>(),
            vec![
                ("dirname", "a"),
                ("basename", "b.c"),
                ("extension", "c"),
                ("filename", "b"),
            ]
        );
    }

    #[test]
    fn ut_serialize_skips_absent() {
        let info = Info::derive(&segs(&["foo"]), '/');
        assert_eq!(
            toml::to_string(&info).unwrap(),
            "dirname = \".\"\nbasename = \"foo\"\nfilename = \"foo\"\n"
        );
    }
}
