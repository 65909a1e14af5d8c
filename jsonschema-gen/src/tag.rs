//! Parsing of member serialization tags.
//!
//! A tag has the form `name,option,option`. The name overrides the member's own
//! name, and may be empty to keep it. A name of `-` excludes the member.

/// Option marking a member that may be omitted, and so isn't required.
pub const OMIT_EMPTY: &str = "omitempty";

/// Name marking a member that is excluded from the schema.
pub const SKIP: &str = "-";

/// The comma-separated options following the name in a tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions<'a>(&'a str);

/// Splits a tag into its name and options.
pub fn parse(tag: &str) -> (&str, TagOptions<'_>) {
    match tag.find(',') {
        Some(index) => (&tag[..index], TagOptions(&tag[index + 1..])),
        None => (tag, TagOptions::default()),
    }
}

impl<'a> TagOptions<'a> {
    /// Reports whether `name` is one of the options.
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|option| option == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        let options = self.0;
        options
            .split(',')
            .filter(move |_| !options.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only() {
        let (name, options) = parse("field");
        assert_eq!("field", name);
        assert_eq!(TagOptions::default(), options);
        assert!(!options.contains(""));
    }

    #[test]
    fn name_and_options() {
        let (name, options) = parse("field,omitempty,string");
        assert_eq!("field", name);
        assert!(options.contains(OMIT_EMPTY));
        assert!(options.contains("string"));
        assert!(!options.contains("omit"));
        assert_eq!(vec!["omitempty", "string"], options.iter().collect::<Vec<_>>());
    }

    #[test]
    fn empty_name_keeps_options() {
        let (name, options) = parse(",omitempty");
        assert_eq!("", name);
        assert!(options.contains(OMIT_EMPTY));
    }

    #[test]
    fn skip_marker() {
        let (name, _) = parse("-");
        assert_eq!(SKIP, name);

        // Only the name position excludes a member.
        let (name, options) = parse("-,");
        assert_eq!(SKIP, name);
        assert!(!options.contains(SKIP));
    }

    #[test]
    fn empty_tag() {
        let (name, options) = parse("");
        assert_eq!("", name);
        assert_eq!(0, options.iter().count());
    }
}
