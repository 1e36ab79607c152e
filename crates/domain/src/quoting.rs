//! String literal conventions of the target languages
//!
//! Each language declares the quotation characters it accepts, how the
//! content of a literal is escaped for each of them, and how a literal is
//! continued over several lines.

use crate::codegen::Language;

/// How characters are escaped inside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Backslash-escape the quote, backslashes and control characters.
    Backslash,
    /// POSIX single quotes: nothing is special but the quote itself,
    /// which is written `'\''`.
    ShellSingle,
    /// Backslash-escape the quote, backslashes, `$` and backticks.
    ShellDouble,
}

/// A quotation character and its escaping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStyle {
    /// Character opening and closing the literal.
    pub quote: char,
    /// Escaping applied to the content.
    pub escape: Escape,
}

impl QuoteStyle {
    /// Creates a quote style.
    #[must_use]
    pub const fn new(quote: char, escape: Escape) -> Self {
        Self { quote, escape }
    }

    /// Appends the escaped form of `c` to `out`.
    pub fn push_escaped(&self, out: &mut String, c: char) {
        match self.escape {
            Escape::ShellSingle => {
                if c == self.quote {
                    out.push_str("'\\''");
                } else {
                    out.push(c);
                }
            }
            Escape::ShellDouble => {
                if matches!(c, '\\' | '$' | '`') || c == self.quote {
                    out.push('\\');
                }
                out.push(c);
            }
            Escape::Backslash => match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\0' => out.push_str("\\0"),
                // Template literals interpolate `${`.
                '$' if self.quote == '`' => out.push_str("\\$"),
                c if c == self.quote => {
                    out.push('\\');
                    out.push(c);
                }
                c => out.push(c),
            },
        }
    }

    /// Returns the escaped content without surrounding quotes.
    #[must_use]
    pub fn escape(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            self.push_escaped(&mut out, c);
        }
        out
    }

    /// Returns the escaped content wrapped in quotes.
    #[must_use]
    pub fn quoted(&self, value: &str) -> String {
        format!("{q}{}{q}", self.escape(value), q = self.quote)
    }
}

/// How a long literal continues on the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    /// Text placed after the indentation of each continuation line.
    pub operator: &'static str,
    /// Whether the pieces are grouped in parentheses.
    pub parenthesize: bool,
}

/// String literal rules of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRules {
    /// The language these rules belong to.
    pub language: Language,
    /// Accepted quotes; the first one is the default.
    pub quotes: &'static [QuoteStyle],
    /// `None` when literals can not be split over lines.
    pub continuation: Option<Continuation>,
    /// Indentation used when none is configured.
    pub default_indent: &'static str,
}

impl LanguageRules {
    /// Python: adjacent literals inside parentheses are concatenated.
    pub const PYTHON: Self = Self {
        language: Language::Python,
        quotes: &[
            QuoteStyle::new('\'', Escape::Backslash),
            QuoteStyle::new('"', Escape::Backslash),
        ],
        continuation: Some(Continuation {
            operator: " ",
            parenthesize: true,
        }),
        default_indent: "    ",
    };

    /// JavaScript: pieces are joined with `+`.
    pub const JAVASCRIPT: Self = Self {
        language: Language::JavaScript,
        quotes: &[
            QuoteStyle::new('\'', Escape::Backslash),
            QuoteStyle::new('"', Escape::Backslash),
            QuoteStyle::new('`', Escape::Backslash),
        ],
        continuation: Some(Continuation {
            operator: "+ ",
            parenthesize: false,
        }),
        default_indent: "  ",
    };

    /// Bash: literals are never split.
    pub const BASH: Self = Self {
        language: Language::Bash,
        quotes: &[
            QuoteStyle::new('"', Escape::ShellDouble),
            QuoteStyle::new('\'', Escape::ShellSingle),
        ],
        continuation: None,
        default_indent: "    ",
    };

    /// Returns the rules of a language.
    #[must_use]
    pub const fn for_language(language: Language) -> &'static Self {
        match language {
            Language::Python => &Self::PYTHON,
            Language::JavaScript => &Self::JAVASCRIPT,
            Language::Bash => &Self::BASH,
        }
    }

    /// Looks up the style of a quotation character.
    #[must_use]
    pub fn quote_style(&self, quote: char) -> Option<&QuoteStyle> {
        self.quotes.iter().find(|style| style.quote == quote)
    }

    /// Returns the default quote style.
    #[must_use]
    pub const fn default_quote(&self) -> &QuoteStyle {
        &self.quotes[0]
    }

    /// Returns the accepted quotation characters.
    #[must_use]
    pub fn quote_chars(&self) -> Vec<char> {
        self.quotes.iter().map(|style| style.quote).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_backslash_escaping() {
        let style = LanguageRules::PYTHON.quote_style('\'').unwrap();
        assert_eq!(style.escape("it's a\\b\n"), "it\\'s a\\\\b\\n");
        assert_eq!(style.quoted("x\"y"), "'x\"y'");
    }

    #[test]
    fn test_template_literal_escapes_interpolation() {
        let style = LanguageRules::JAVASCRIPT.quote_style('`').unwrap();
        assert_eq!(style.quoted("${a}`"), "`\\${a}\\``");
    }

    #[test]
    fn test_shell_single_quote() {
        let style = LanguageRules::BASH.quote_style('\'').unwrap();
        assert_eq!(style.quoted("it's $HOME"), "'it'\\''s $HOME'");
    }

    #[test]
    fn test_shell_double_quote() {
        let style = LanguageRules::BASH.default_quote();
        assert_eq!(style.quoted("a \"b\" $c"), "\"a \\\"b\\\" \\$c\"");
    }

    #[test]
    fn test_rules_lookup() {
        assert_eq!(
            LanguageRules::for_language(Language::JavaScript).quote_chars(),
            vec!['\'', '"', '`']
        );
        assert!(LanguageRules::BASH.continuation.is_none());
        assert!(LanguageRules::PYTHON.quote_style('`').is_none());
    }
}
