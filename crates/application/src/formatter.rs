//! Wrapping string literal formatter
//!
//! Renders a string as a source code literal of the target language. Short
//! strings become a single quoted literal; long ones are split greedily into
//! fragments joined by the language's continuation syntax so that no line
//! exceeds the wrap width:
//!
//! ```text
//! ('https://example.com/api/v1/'
//!  'resources?page=1')
//! ```
//!
//! Escape sequences are never split between two fragments.

use reqgen_domain::{Language, LanguageRules};

use crate::error::FormatError;

/// Columns kept free at the end of a line for closing punctuation.
pub const DEFAULT_RESERVED_COLUMNS: usize = 2;

/// Lower bound of the reserved columns: a fragment is closed after a
/// two-column escape unit and still needs its closing quote.
pub const MIN_RESERVED_COLUMNS: usize = 2;

/// Line width budget of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapBudget {
    /// Maximum line width.
    pub width: usize,
    /// Columns reserved after the last character of a fragment.
    pub reserved: usize,
}

impl WrapBudget {
    /// Creates a budget with [`DEFAULT_RESERVED_COLUMNS`].
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            reserved: DEFAULT_RESERVED_COLUMNS,
        }
    }

    /// Sets the reserved columns. Values below [`MIN_RESERVED_COLUMNS`]
    /// are raised to it when formatting.
    #[must_use]
    pub const fn with_reserved(mut self, reserved: usize) -> Self {
        self.reserved = reserved;
        self
    }
}

/// String literal formatter for one language.
#[derive(Debug, Clone, Copy)]
pub struct StringFormatter<'a> {
    rules: &'a LanguageRules,
}

impl<'a> StringFormatter<'a> {
    /// Creates a formatter applying `rules`.
    #[must_use]
    pub const fn new(rules: &'a LanguageRules) -> Self {
        Self { rules }
    }

    /// Returns the rules of the formatter.
    #[must_use]
    pub const fn rules(&self) -> &'a LanguageRules {
        self.rules
    }

    /// Formats `value` as a literal placed at `indent`, wrapped at `wrap`
    /// columns.
    ///
    /// # Errors
    /// Returns [`FormatError::InvalidQuoteCharacter`] if the language does
    /// not accept `quote`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqgen_application::StringFormatter;
    /// use reqgen_domain::LanguageRules;
    ///
    /// let python = StringFormatter::new(&LanguageRules::PYTHON);
    /// assert_eq!(
    ///     python.format_string_literal("localhost", "", '\'', 80, true).unwrap(),
    ///     "'localhost'"
    /// );
    /// assert_eq!(
    ///     python.format_string_literal("abcdefghij", "", '\'', 10, true).unwrap(),
    ///     "('abcdef'\n 'ghij')"
    /// );
    /// ```
    pub fn format_string_literal(
        &self,
        value: &str,
        indent: &str,
        quote: char,
        wrap: usize,
        escape: bool,
    ) -> Result<String, FormatError> {
        self.format_with_budget(value, indent, quote, WrapBudget::new(wrap), escape)
    }

    /// Like [`StringFormatter::format_string_literal`] with an explicit
    /// number of reserved columns.
    ///
    /// # Errors
    /// Returns [`FormatError::InvalidQuoteCharacter`] if the language does
    /// not accept `quote`.
    pub fn format_with_budget(
        &self,
        value: &str,
        indent: &str,
        quote: char,
        budget: WrapBudget,
        escape: bool,
    ) -> Result<String, FormatError> {
        let style = self
            .rules
            .quote_style(quote)
            .ok_or(FormatError::InvalidQuoteCharacter {
                quote,
                language: self.rules.language,
            })?;

        let mut escaped = String::with_capacity(value.len());
        // Byte offset where the escaped form of each character ends.
        let mut ends = Vec::with_capacity(value.len());
        for c in value.chars() {
            if escape {
                style.push_escaped(&mut escaped, c);
            } else {
                escaped.push(c);
            }
            ends.push(escaped.len());
        }

        let indent_width = indent.chars().count();
        let single_line = escaped
            .chars()
            .count()
            .saturating_add(indent_width)
            .saturating_add(2);
        let continuation = match self.rules.continuation {
            Some(continuation) if !value.is_empty() && single_line >= budget.width => continuation,
            _ => return Ok(format!("{quote}{escaped}{quote}")),
        };

        let operator_width = continuation.operator.chars().count();
        let limit = budget
            .width
            .saturating_sub(budget.reserved.max(MIN_RESERVED_COLUMNS));
        let mut out = String::with_capacity(escaped.len() * 2);
        if continuation.parenthesize {
            out.push('(');
        }
        out.push(quote);
        let mut column = indent_width + usize::from(continuation.parenthesize) + 1;
        let mut start = 0;
        for (i, &end) in ends.iter().enumerate() {
            let unit = &escaped[start..end];
            out.push_str(unit);
            column += unit.chars().count();
            start = end;
            if column >= limit && i + 1 < ends.len() {
                tracing::trace!(column, limit, "closing fragment");
                out.push(quote);
                out.push('\n');
                out.push_str(indent);
                out.push_str(continuation.operator);
                out.push(quote);
                column = indent_width + operator_width + 1;
            }
        }
        out.push(quote);
        column += 1;

        if continuation.parenthesize {
            if column + 1 > budget.width {
                out.push('\n');
                out.push_str(indent);
            }
            out.push(')');
        }
        Ok(out)
    }
}

impl StringFormatter<'static> {
    /// Creates a formatter for a language.
    #[must_use]
    pub const fn for_language(language: Language) -> Self {
        Self::new(LanguageRules::for_language(language))
    }
}
