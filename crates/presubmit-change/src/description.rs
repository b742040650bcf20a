use indexmap::IndexMap;

/// A change description as written by the author, together with the
/// `KEY=value` tag lines extracted from it.
///
/// Tag lines follow the review host's grammar: the whole line must be
/// `KEY=value` where the key starts with an uppercase letter and continues
/// with uppercase letters, digits or underscores. Horizontal whitespace
/// around the key, the `=` and the value is ignored. Any other line is
/// ordinary description text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDescription {
    text: String,
    tags: IndexMap<String, String>,
}

impl ChangeDescription {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tags = parse_tags(&text);
        Self { text, tags }
    }

    /// The full description text, tag lines included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The value of a tag, if the description carries one.
    ///
    /// An empty value (`PERFETTO_TESTS=`) is reported as `Some("")`; callers
    /// gating on a tag usually also require the value to be non-empty.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// All tags in the order they first appear in the description. When a
    /// key repeats, the reported value is the last one given.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

fn parse_tags(text: &str) -> IndexMap<String, String> {
    let mut tags = IndexMap::new();
    for line in text.lines() {
        if let Some((key, value)) = parse_tag_line(line) {
            // Re-inserting keeps the first occurrence's position.
            tags.insert(key.to_owned(), value.to_owned());
        }
    }
    tags
}

fn parse_tag_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_matches([' ', '\t']);
    let (key, value) = line.split_once('=')?;
    let key = key.trim_end_matches([' ', '\t']);
    let value = value.trim_start_matches([' ', '\t']);
    if !is_tag_key(key) {
        return None;
    }
    Some((key, value))
}

fn is_tag_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_uppercase()
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_simple_tag() {
        let description = ChangeDescription::new("Fix crash\n\nBUG=1234\n");

        assert_eq!(description.tag("BUG"), Some("1234"));
    }

    #[test]
    fn missing_tag_is_none() {
        let description = ChangeDescription::new("Fix crash\n");

        assert_eq!(description.tag("PERFETTO_TESTS"), None);
    }

    #[test]
    fn empty_value_is_some_empty() {
        let description = ChangeDescription::new("PERFETTO_TESTS=\n");

        assert_eq!(description.tag("PERFETTO_TESTS"), Some(""));
    }

    #[test]
    fn whitespace_around_separator_is_ignored() {
        let description = ChangeDescription::new("PERFETTO_TESTS \t=  ran locally\n");

        assert_eq!(description.tag("PERFETTO_TESTS"), Some("ran locally"));
    }

    #[test]
    fn leading_and_trailing_whitespace_is_ignored() {
        let description = ChangeDescription::new("\t  BUG=1234  \t\n");

        assert_eq!(description.tag("BUG"), Some("1234"));
    }

    #[test]
    fn value_keeps_interior_whitespace() {
        let description = ChangeDescription::new("PERFETTO_TESTS=ninja && run tests\n");

        assert_eq!(description.tag("PERFETTO_TESTS"), Some("ninja && run tests"));
    }

    #[test]
    fn value_may_contain_equals_signs() {
        let description = ChangeDescription::new("FLAGS=a=1,b=2\n");

        assert_eq!(description.tag("FLAGS"), Some("a=1,b=2"));
    }

    #[test]
    fn lowercase_key_is_not_a_tag() {
        let description = ChangeDescription::new("perfetto_tests=ran\n");

        assert_eq!(description.tag("perfetto_tests"), None);
        assert_eq!(description.tags().count(), 0);
    }

    #[test]
    fn key_must_start_with_a_letter() {
        let description = ChangeDescription::new("2ND=value\n");

        assert_eq!(description.tags().count(), 0);
    }

    #[test]
    fn key_may_contain_digits_and_underscores() {
        let description = ChangeDescription::new("PERFETTO_TESTS_2=ok\nR=reviewer\n");

        assert_eq!(description.tag("PERFETTO_TESTS_2"), Some("ok"));
        assert_eq!(description.tag("R"), Some("reviewer"));
    }

    #[test]
    fn prose_containing_equals_is_not_a_tag() {
        let description = ChangeDescription::new("Set max = 10 in the config\n");

        assert_eq!(description.tags().count(), 0);
    }

    #[test]
    fn last_duplicate_wins_but_keeps_first_position() {
        let description = ChangeDescription::new("A=1\nBUG=old\nB=2\nBUG=new\n");

        assert_eq!(description.tag("BUG"), Some("new"));
        let keys: Vec<&str> = description.tags().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["A", "BUG", "B"]);
    }

    #[test]
    fn tags_interleaved_with_body_text() {
        let description = ChangeDescription::new(
            "tracing: speed up slice queries\n\
             \n\
             Rewrites the slice module to use a window function.\n\
             \n\
             BUG=283962174\n\
             PERFETTO_TESTS=autoninja -C out/Default perfetto_diff_tests\n",
        );

        assert_eq!(description.tag("BUG"), Some("283962174"));
        assert_eq!(
            description.tag("PERFETTO_TESTS"),
            Some("autoninja -C out/Default perfetto_diff_tests")
        );
        assert_eq!(description.tags().count(), 2);
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let description = ChangeDescription::new("Fix crash\r\nBUG=1234\r\n");

        assert_eq!(description.tag("BUG"), Some("1234"));
    }

    #[test]
    fn empty_description_has_no_tags() {
        let description = ChangeDescription::new("");

        assert_eq!(description.tags().count(), 0);
        assert_eq!(description.text(), "");
    }

    #[test]
    fn text_returns_the_original_description() {
        let text = "Fix crash\n\nBUG=1234\n";
        let description = ChangeDescription::new(text);

        assert_eq!(description.text(), text);
    }
}
