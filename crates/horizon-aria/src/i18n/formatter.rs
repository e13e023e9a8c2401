//! Named-parameter message formatting.
//!
//! Templates support two kinds of placeholder:
//!
//! - `{name}` substitutes an argument.
//! - `{name, plural, =0 {...} one {...} other {...}}` picks a branch by the
//!   argument's numeric value; `#` inside a branch prints that value.
//!
//! Exact `=N` selectors win over plural categories, and `other` is required.

use std::fmt;
use std::sync::Arc;

use horizon_aria_core::PerfSpan;
use horizon_aria_core::logging::{span_names, targets};

use icu::locale::{Locale, locale};
use icu::plurals::{PluralCategory, PluralOperands, PluralRules};

use super::I18nError;
use super::catalog::MessageCatalog;
use super::locale::SystemLocale;

/// An argument value for [`LocalizedStringFormatter::format`].
#[derive(Debug, Clone, PartialEq)]
pub enum FormatValue {
    /// Substituted verbatim.
    Text(String),
    /// Substituted in its shortest form; usable as a plural selector.
    Number(f64),
}

impl FormatValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            FormatValue::Number(n) => Some(*n),
            FormatValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Text(text) => f.write_str(text),
            FormatValue::Number(n) => write_number(f, *n),
        }
    }
}

fn write_number(f: &mut impl fmt::Write, n: f64) -> fmt::Result {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        FormatValue::Text(value.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        FormatValue::Text(value)
    }
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        FormatValue::Number(value)
    }
}

impl From<i32> for FormatValue {
    fn from(value: i32) -> Self {
        FormatValue::Number(value as f64)
    }
}

impl From<i64> for FormatValue {
    fn from(value: i64) -> Self {
        FormatValue::Number(value as f64)
    }
}

impl From<usize> for FormatValue {
    fn from(value: usize) -> Self {
        FormatValue::Number(value as f64)
    }
}

fn plural_keyword(keyword: &str) -> Option<PluralCategory> {
    Some(match keyword {
        "zero" => PluralCategory::Zero,
        "one" => PluralCategory::One,
        "two" => PluralCategory::Two,
        "few" => PluralCategory::Few,
        "many" => PluralCategory::Many,
        "other" => PluralCategory::Other,
        _ => return None,
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Selector {
    Exact(f64),
    Category(PluralCategory),
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Argument(String),
    Plural {
        argument: String,
        branches: Vec<(Selector, Vec<Segment>)>,
    },
    /// `#` inside a plural branch.
    Count,
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(format!("expected '{expected}' at offset {}, found '{c}'", self.pos - c.len_utf8())),
            None => Err(format!("expected '{expected}', found end of message")),
        }
    }

    /// Read up to (not including) the first char in `stop` or whitespace.
    fn word(&mut self, stop: &[char]) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|c| !c.is_whitespace() && !stop.contains(&c)) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn parse_message(mut self) -> Result<Vec<Segment>, String> {
        let segments = self.parse_segments(false)?;
        if self.pos < self.src.len() {
            return Err(format!("unmatched '}}' at offset {}", self.pos));
        }
        Ok(segments)
    }

    fn parse_segments(&mut self, in_plural: bool) -> Result<Vec<Segment>, String> {
        let mut segments = Vec::new();
        let mut literal = String::new();

        while let Some(c) = self.peek() {
            match c {
                '}' => break,
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(self.parse_placeholder()?);
                }
                '#' if in_plural => {
                    self.bump();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Count);
                }
                _ => {
                    self.bump();
                    literal.push(c);
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(segments)
    }

    fn parse_placeholder(&mut self) -> Result<Segment, String> {
        self.expect('{')?;
        self.skip_whitespace();
        let argument = self.word(&[',', '}', '{']).to_string();
        if argument.is_empty() {
            return Err(format!("empty placeholder at offset {}", self.pos));
        }
        self.skip_whitespace();

        if self.peek() == Some('}') {
            self.bump();
            return Ok(Segment::Argument(argument));
        }

        self.expect(',')?;
        self.skip_whitespace();
        let kind = self.word(&[',', '}', '{']);
        if kind != "plural" {
            return Err(format!("unsupported placeholder type '{kind}'"));
        }
        self.skip_whitespace();
        self.expect(',')?;

        let mut branches = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                None => return Err("unterminated plural placeholder".to_string()),
                _ => {}
            }

            let keyword = self.word(&['{', '}']);
            let selector = if let Some(exact) = keyword.strip_prefix('=') {
                Selector::Exact(
                    exact
                        .parse()
                        .map_err(|_| format!("invalid exact selector '{keyword}'"))?,
                )
            } else {
                Selector::Category(
                    plural_keyword(keyword)
                        .ok_or_else(|| format!("unknown plural selector '{keyword}'"))?,
                )
            };

            self.skip_whitespace();
            self.expect('{')?;
            let body = self.parse_segments(true)?;
            self.expect('}')?;
            branches.push((selector, body));
        }

        if !branches
            .iter()
            .any(|(selector, _)| *selector == Selector::Category(PluralCategory::Other))
        {
            return Err(format!("plural placeholder '{argument}' has no 'other' branch"));
        }

        Ok(Segment::Plural { argument, branches })
    }
}

/// Formats catalog messages for one namespace in one locale.
///
/// Cheap to clone; catalogs are shared.
#[derive(Debug, Clone)]
pub struct LocalizedStringFormatter {
    catalog: Arc<MessageCatalog>,
    plural_locale: Locale,
}

impl LocalizedStringFormatter {
    /// Create a formatter for `namespace` in (the closest supported match of)
    /// `locale`.
    pub fn new(namespace: &str, locale: &str) -> Result<Self, I18nError> {
        let catalog = MessageCatalog::load(namespace, locale)?;
        Ok(Self::from_catalog(catalog))
    }

    /// Create a formatter for `namespace` in the system locale.
    pub fn for_system_locale(namespace: &str) -> Result<Self, I18nError> {
        Self::new(namespace, &SystemLocale::current())
    }

    /// Wrap an already loaded catalog.
    pub fn from_catalog(catalog: Arc<MessageCatalog>) -> Self {
        let plural_locale = catalog.locale().parse().unwrap_or_else(|_| {
            tracing::warn!(target: targets::I18N, locale = catalog.locale(), "unparsable locale, using en-US plural rules");
            locale!("en-US")
        });
        Self { catalog, plural_locale }
    }

    /// The locale messages are formatted in.
    pub fn locale(&self) -> &str {
        self.catalog.locale()
    }

    /// Format the message `key` with named `args`.
    pub fn format(&self, key: &str, args: &[(&str, FormatValue)]) -> Result<String, I18nError> {
        let _span = PerfSpan::new(span_names::FORMAT_MESSAGE);

        let template = self.catalog.get(key).ok_or_else(|| {
            tracing::warn!(target: targets::I18N, key, locale = self.locale(), "missing translation");
            I18nError::MissingMessage {
                locale: self.locale().to_string(),
                key: key.to_string(),
            }
        })?;

        let segments = Parser::new(template)
            .parse_message()
            .map_err(|message| I18nError::syntax(key, message))?;

        let mut out = String::with_capacity(template.len());
        self.render(key, &segments, args, None, &mut out)?;
        tracing::trace!(target: targets::I18N, key, message = %out, "formatted message");
        Ok(out)
    }

    fn render(
        &self,
        key: &str,
        segments: &[Segment],
        args: &[(&str, FormatValue)],
        count: Option<f64>,
        out: &mut String,
    ) -> Result<(), I18nError> {
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument(name) => {
                    let value = lookup(key, args, name)?;
                    out.push_str(&value.to_string());
                }
                Segment::Count => {
                    if let Some(n) = count {
                        // Writing into a String cannot fail.
                        let _ = write_number(out, n);
                    }
                }
                Segment::Plural { argument, branches } => {
                    let n = lookup(key, args, argument)?.as_number().ok_or_else(|| {
                        I18nError::syntax(key, format!("argument '{argument}' is not a number"))
                    })?;
                    let category = self.plural_category(n);
                    let branch = branches
                        .iter()
                        .find(|(selector, _)| *selector == Selector::Exact(n))
                        .or_else(|| {
                            branches
                                .iter()
                                .find(|(selector, _)| *selector == Selector::Category(category))
                        })
                        .or_else(|| {
                            branches
                                .iter()
                                .find(|(selector, _)| *selector == Selector::Category(PluralCategory::Other))
                        });
                    if let Some((_, body)) = branch {
                        self.render(key, body, args, Some(n), out)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// CLDR cardinal category of `n` in the catalog's locale.
    fn plural_category(&self, n: f64) -> PluralCategory {
        let rules = match PluralRules::try_new_cardinal(self.plural_locale.clone().into()) {
            Ok(rules) => rules,
            Err(err) => {
                tracing::warn!(target: targets::I18N, locale = self.locale(), error = %err, "no plural rules");
                return PluralCategory::Other;
            }
        };
        if n.fract() == 0.0 && n.abs() < 1e15 {
            return rules.category_for(n as i64);
        }
        match n.to_string().parse::<PluralOperands>() {
            Ok(operands) => rules.category_for(operands),
            Err(_) => PluralCategory::Other,
        }
    }
}

fn lookup<'a>(key: &str, args: &'a [(&str, FormatValue)], name: &str) -> Result<&'a FormatValue, I18nError> {
    args.iter()
        .find(|(arg, _)| *arg == name)
        .map(|(_, value)| value)
        .ok_or_else(|| I18nError::MissingArgument {
            key: key.to_string(),
            argument: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter(locale: &str) -> LocalizedStringFormatter {
        LocalizedStringFormatter::new("grid", locale).unwrap()
    }

    fn catalog_formatter(locale: &str, json: &str) -> LocalizedStringFormatter {
        LocalizedStringFormatter::from_catalog(Arc::new(MessageCatalog::from_json("test", locale, json).unwrap()))
    }

    fn section(title: &str, size: usize) -> Vec<(&'static str, FormatValue)> {
        vec![("sectionTitle", title.into()), ("sectionSize", size.into())]
    }

    #[test]
    fn test_section_announcement_english() {
        let f = formatter("en-US");
        assert_eq!(f.format("sectionAnnouncement", &section("Fruits", 3)).unwrap(), "Fruits, section, 3 rows");
        assert_eq!(f.format("sectionAnnouncement", &section("Fruits", 1)).unwrap(), "Fruits, section, 1 row");
        assert_eq!(f.format("sectionAnnouncement", &section("Fruits", 0)).unwrap(), "Fruits, section, 0 rows");
    }

    #[test]
    fn test_french_zero_is_singular() {
        let f = formatter("fr-FR");
        assert_eq!(f.format("sectionAnnouncement", &section("Fruits", 0)).unwrap(), "Fruits, section, 0 ligne");
    }

    #[test]
    fn test_japanese_has_no_plural_distinction() {
        let f = formatter("ja-JP");
        assert_eq!(f.format("sectionAnnouncement", &section("果物", 1)).unwrap(), "果物、セクション、1 行");
    }

    #[test]
    fn test_polish_few_and_many() {
        let f = catalog_formatter(
            "pl-PL",
            r#"{"rows": "{n, plural, one {# wiersz} few {# wiersze} many {# wierszy} other {# wiersza}}"}"#,
        );
        let rows = |n: i32| f.format("rows", &[("n", n.into())]).unwrap();
        assert_eq!(rows(1), "1 wiersz");
        assert_eq!(rows(3), "3 wiersze");
        assert_eq!(rows(5), "5 wierszy");
        assert_eq!(rows(22), "22 wiersze");
        assert_eq!(f.format("rows", &[("n", 1.5.into())]).unwrap(), "1.5 wiersza");
    }

    #[test]
    fn test_fractional_english_is_other() {
        let f = catalog_formatter("en-US", r#"{"m": "{n, plural, one {# row} other {# rows}}"}"#);
        assert_eq!(f.format("m", &[("n", 1.0.into())]).unwrap(), "1 row");
        assert_eq!(f.format("m", &[("n", 1.5.into())]).unwrap(), "1.5 rows");
    }

    #[test]
    fn test_exact_selector_wins() {
        let f = catalog_formatter("en-US", r#"{"n": "{count, plural, =0 {none} one {# thing} other {# things}}"}"#);
        assert_eq!(f.format("n", &[("count", 0.into())]).unwrap(), "none");
        assert_eq!(f.format("n", &[("count", 1.into())]).unwrap(), "1 thing");
        assert_eq!(f.format("n", &[("count", 2.5.into())]).unwrap(), "2.5 things");
    }

    #[test]
    fn test_hash_outside_plural_is_literal() {
        let f = catalog_formatter("en-US", r##"{"tag": "#{name}"}"##);
        assert_eq!(f.format("tag", &[("name", "red".into())]).unwrap(), "#red");
    }

    #[test]
    fn test_missing_message_and_argument() {
        let f = formatter("en-US");
        assert!(matches!(
            f.format("nope", &[]),
            Err(I18nError::MissingMessage { key, .. }) if key == "nope"
        ));
        assert!(matches!(
            f.format("sectionAnnouncement", &[("sectionTitle", "A".into())]),
            Err(I18nError::MissingArgument { argument, .. }) if argument == "sectionSize"
        ));
    }

    #[test]
    fn test_syntax_errors() {
        let cases = [
            "{unterminated",
            "stray }",
            "{n, select, a {x} other {y}}",
            "{n, plural, one {#}}",
            "{n, plural, =x {a} other {b}}",
            "{}",
        ];
        for template in cases {
            let json = serde_json::json!({ "m": template }).to_string();
            let f = catalog_formatter("en-US", &json);
            assert!(
                matches!(f.format("m", &[("n", 1.into())]), Err(I18nError::Syntax { .. })),
                "{template} should not parse"
            );
        }
    }

    #[test]
    fn test_text_argument_as_plural_selector() {
        let f = catalog_formatter("en-US", r#"{"m": "{n, plural, one {one} other {many}}"}"#);
        assert_eq!(f.format("m", &[("n", "1".into())]).unwrap(), "one");
        assert!(matches!(f.format("m", &[("n", "abc".into())]), Err(I18nError::Syntax { .. })));
    }
}
