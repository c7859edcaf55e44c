use super::escape::ESCAPE;

type LastError = String;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("index {0} is out of range for a path with {1} segments")]
    InvalidIndex(usize, usize),
    #[error("cannot modify segment {0}: escaped paths are immutable")]
    ImmutableMutation(usize),
    #[error("separator cannot be the escape character '{}'", ESCAPE)]
    SeparatorIsEscape,
    #[error("failed to read style: {0}")]
    StyleParse(LastError),
}

impl Error {
    // Presents the message `s` without the first letter being capitalized.
    pub fn lowerize(s: String) -> String {
        s.char_indices()
            .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_lowerize() {
        assert_eq!(Error::lowerize(String::from("Expected")), "expected");
        assert_eq!(Error::lowerize(String::new()), "");
        assert_eq!(Error::lowerize(String::from("ÉTÉ")), "ÉTÉ");
    }

    #[test]
    fn ut_display() {
        assert_eq!(
            Error::InvalidIndex(3, 2).to_string(),
            "index 3 is out of range for a path with 2 segments"
        );
        assert_eq!(
            Error::SeparatorIsEscape.to_string(),
            "separator cannot be the escape character '\\'"
        );
    }
}
