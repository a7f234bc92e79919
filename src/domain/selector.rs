//! A small CSS selector subset
//!
//! Supported syntax: type selectors, `#id`, `.class`, `[attr]`, `[attr=value]`,
//! the descendant combinator (whitespace) and selector lists (`,`).
//! That covers every selector the page script needs. Anything else is rejected
//! by the parser rather than silently matching nothing.

use std::fmt;
use std::str::FromStr;

use color_eyre::eyre::{eyre, Report};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"^(?:([A-Za-z][A-Za-z0-9-]*)|\*)").expect("valid tag regex");
    static ref SIMPLE: Regex = Regex::new(
        r#"#([\w-]+)|\.([\w-]+)|\[([\w-]+)(?:=(?:"([^"]*)"|'([^']*)'|([^\]"']*)))?\]"#
    )
    .expect("valid simple selector regex");
}

/// Read access to an element, as much as matching needs
pub trait SelectorTarget {
    fn tag_name(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatch {
    name: String,
    value: Option<String>,
}

impl AttributeMatch {
    fn matches(&self, target: &impl SelectorTarget) -> bool {
        match (&self.value, target.attribute(&self.name)) {
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
            (_, None) => false,
        }
    }
}

/// A compound selector such as `a.active[href]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatch>,
}

impl Compound {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into().to_ascii_lowercase()),
            ..Self::default()
        }
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::any().and_class(class)
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn and_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(AttributeMatch {
            name: name.into(),
            value: None,
        });
        self
    }

    pub fn matches(&self, target: &impl SelectorTarget) -> bool {
        if let Some(tag) = &self.tag {
            if !target.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if target.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| target.has_class(class))
            && self.attributes.iter().all(|attr| attr.matches(target))
    }

    fn parse(input: &str) -> Result<Self, Report> {
        let mut compound = Compound::any();
        let mut rest = input;
        if let Some(caps) = TAG.captures(rest) {
            if let Some(tag) = caps.get(1) {
                compound.tag = Some(tag.as_str().to_ascii_lowercase());
            }
            rest = &rest[caps.get(0).map_or(0, |m| m.end())..];
        }

        let mut cursor = 0;
        for caps in SIMPLE.captures_iter(rest) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() != cursor {
                return Err(eyre!("unsupported selector syntax in `{input}`"));
            }
            cursor = whole.end();

            if let Some(id) = caps.get(1) {
                compound.id = Some(id.as_str().to_string());
            } else if let Some(class) = caps.get(2) {
                compound.classes.push(class.as_str().to_string());
            } else if let Some(name) = caps.get(3) {
                let value = caps
                    .get(4)
                    .or_else(|| caps.get(5))
                    .or_else(|| caps.get(6))
                    .map(|m| m.as_str().to_string());
                compound.attributes.push(AttributeMatch {
                    name: name.as_str().to_string(),
                    value,
                });
            }
        }
        if cursor != rest.len() {
            return Err(eyre!("unsupported selector syntax in `{input}`"));
        }
        Ok(compound)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
            wrote = true;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
            wrote = true;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
            wrote = true;
        }
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => write!(f, "[{}=\"{value}\"]", attr.name)?,
                None => write!(f, "[{}]", attr.name)?,
            }
            wrote = true;
        }
        if !wrote {
            write!(f, "*")?;
        }
        Ok(())
    }
}

/// A selector list; each alternative is a chain of descendant compounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Vec<Compound>>,
}

impl Selector {
    /// Append a descendant step to every alternative
    pub fn descendant(mut self, compound: Compound) -> Self {
        for chain in &mut self.alternatives {
            chain.push(compound.clone());
        }
        self
    }

    /// Selector list union (`a, b`)
    pub fn or(mut self, other: Selector) -> Self {
        self.alternatives.extend(other.alternatives);
        self
    }

    /// Match `target` against the selector. `ancestors` yields the target's
    /// ancestors from the closest outwards.
    pub fn matches<'a, T, I>(&self, target: &T, ancestors: I) -> bool
    where
        T: SelectorTarget + 'a,
        I: IntoIterator<Item = &'a T> + Clone,
    {
        self.alternatives
            .iter()
            .any(|chain| chain_matches(chain, target, ancestors.clone()))
    }
}

fn chain_matches<'a, T, I>(chain: &[Compound], target: &T, ancestors: I) -> bool
where
    T: SelectorTarget + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some((last, rest)) = chain.split_last() else {
        return false;
    };
    if !last.matches(target) {
        return false;
    }
    // Greedy right-to-left walk is exact for descendant-only chains.
    let mut pending = rest.iter().rev().peekable();
    for ancestor in ancestors {
        match pending.peek() {
            Some(compound) if compound.matches(ancestor) => {
                pending.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    pending.peek().is_none()
}

impl From<Compound> for Selector {
    fn from(compound: Compound) -> Self {
        Self {
            alternatives: vec![vec![compound]],
        }
    }
}

impl FromStr for Selector {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut alternatives = Vec::new();
        for group in s.split(',') {
            let chain = group
                .split_whitespace()
                .map(Compound::parse)
                .collect::<Result<Vec<_>, _>>()?;
            if chain.is_empty() {
                return Err(eyre!("empty selector in `{s}`"));
            }
            alternatives.push(chain);
        }
        Ok(Self { alternatives })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            for (j, compound) in chain.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{compound}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    struct El {
        tag: &'static str,
        classes: Vec<&'static str>,
        attrs: HashMap<&'static str, &'static str>,
    }

    impl El {
        fn new(tag: &'static str) -> Self {
            Self {
                tag,
                classes: vec![],
                attrs: HashMap::new(),
            }
        }

        fn class(mut self, class: &'static str) -> Self {
            self.classes.push(class);
            self
        }

        fn attr(mut self, name: &'static str, value: &'static str) -> Self {
            self.attrs.insert(name, value);
            self
        }
    }

    impl SelectorTarget for El {
        fn tag_name(&self) -> &str {
            self.tag
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attrs.get(name).copied()
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }
    }

    #[rstest]
    #[case(".navbar a, .mobile-nav a")]
    #[case(".modern-card[data-service-id]")]
    #[case(".mobile-nav ul li a")]
    #[case("#page-loader")]
    #[case("div.card[data-service-id=\"fm-dm\"]")]
    fn test_parse_and_display(#[case] source: &str) {
        let selector: Selector = source.parse().expect("selector should parse");
        let reparsed: Selector = selector.to_string().parse().expect("display should reparse");
        assert_eq!(selector, reparsed);
    }

    #[rstest]
    #[case("a > b")]
    #[case("a:hover")]
    #[case("a,")]
    #[case("")]
    fn test_parse_rejects_unsupported(#[case] source: &str) {
        assert!(source.parse::<Selector>().is_err());
    }

    #[test]
    fn test_builder_matches_parsed() {
        let built = Selector::from(Compound::class("navbar"))
            .descendant(Compound::tag("a"))
            .or(Selector::from(Compound::class("mobile-nav")).descendant(Compound::tag("a")));
        let parsed: Selector = ".navbar a, .mobile-nav a".parse().expect("parse");
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_attribute_presence_and_value() {
        let card = El::new("div")
            .class("modern-card")
            .attr("data-service-id", "fm-dm");
        let bare = El::new("div").class("modern-card");

        let presence: Selector = ".modern-card[data-service-id]".parse().expect("parse");
        assert!(presence.matches(&card, Vec::<&El>::new()));
        assert!(!presence.matches(&bare, Vec::<&El>::new()));

        let exact: Selector = "[data-service-id=polished]".parse().expect("parse");
        assert!(!exact.matches(&card, Vec::<&El>::new()));
    }

    #[test]
    fn test_descendant_chain() {
        let nav = El::new("nav").class("mobile-nav");
        let ul = El::new("ul");
        let li = El::new("li");
        let link = El::new("a").attr("href", "index.html");

        let selector: Selector = ".mobile-nav ul li a".parse().expect("parse");
        assert!(selector.matches(&link, vec![&li, &ul, &nav]));
        assert!(!selector.matches(&link, vec![&ul, &nav]));
        assert!(!selector.matches(&link, vec![&li, &ul]));
    }

    #[test]
    fn test_id_selector() {
        let header = El::new("header").attr("id", "main-header");
        let selector: Selector = "#main-header".parse().expect("parse");
        assert!(selector.matches(&header, Vec::<&El>::new()));
        assert_eq!(Compound::id("main-header").to_string(), "#main-header");
    }
}
