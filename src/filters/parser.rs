//! Filter expression parser for the command line.
//!
//! Turns a `field:value` expression into a [`FilterState`] so cached pages can be
//! checked or imported against the same filter context a listing request used.
//!
//! # Syntax
//!
//! ```text
//! filter_expr := field_filter*
//! field_filter := field_name:value | field_name:"quoted value"
//! field_name := search | category | month | date (case-insensitive)
//! ```
//!
//! # Supported Fields
//!
//! - `search:text` - Free-text name search
//! - `category:id` - Selected category
//! - `month:YYYY-MM` - Selected month
//! - `date:value` - Generic date filter (passed through verbatim)
//!
//! # Examples
//!
//! ```rust
//! # use content_cache::filters::parser::parse_filter;
//! let filters = parse_filter("search:\"spring set\" month:2024-05").unwrap();
//! assert_eq!(filters.search_name, "spring set");
//! assert_eq!(filters.selected_month, "2024-05");
//! ```
//!
//! # Validation
//!
//! - Each field may appear at most once
//! - `month` must be a valid `YYYY-MM`
//! - Empty field names or values are rejected

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;

use super::state::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterField {
    Search,
    Category,
    Month,
    Date,
}

/// Split input into (field, value) pairs
fn tokenize(input: &str) -> Result<Vec<(String, String)>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);
        let Some(colon_pos) = word.find(':') else {
            bail!("Invalid token: '{}' (expected field:value)", word);
        };

        let field = word[..colon_pos].to_string();
        let mut value = word[colon_pos + 1..].to_string();
        if value.starts_with('"') {
            value = read_quoted_value(&mut chars, &value)?;
        }

        if field.is_empty() || value.is_empty() {
            bail!("Invalid field:value format: {}", word);
        }

        tokens.push((field, value));
    }

    Ok(tokens)
}

/// Read a word (until whitespace or end)
fn read_word(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut word = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }

    word
}

/// Read a quoted value whose opening quote is already in `initial`
fn read_quoted_value(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    initial: &str,
) -> Result<String> {
    let mut value = initial[1..].to_string();

    if let Some(quote_pos) = value.find('"') {
        return Ok(value[..quote_pos].to_string());
    }

    for ch in chars.by_ref() {
        if ch == '"' {
            return Ok(value);
        }
        value.push(ch);
    }

    Err(anyhow!("Unterminated quoted string"))
}

fn parse_field(field: &str) -> Result<FilterField> {
    match field.to_lowercase().as_str() {
        "search" | "name" => Ok(FilterField::Search),
        "category" => Ok(FilterField::Category),
        "month" => Ok(FilterField::Month),
        "date" => Ok(FilterField::Date),
        _ => Err(anyhow!("Unknown field: '{}' (valid fields: search, category, month, date)", field)),
    }
}

fn validate_month(value: &str) -> Result<()> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| anyhow!("Invalid month: '{}' (expected YYYY-MM)", value))
}

/// Parse a filter expression into a [`FilterState`]
///
/// An empty or whitespace-only input yields the unfiltered state.
pub fn parse_filter(input: &str) -> Result<FilterState> {
    let tokens = tokenize(input).context("Failed to tokenize filter")?;
    let mut filters = FilterState::new();
    let mut seen: Vec<FilterField> = Vec::with_capacity(tokens.len());

    for (field_name, value) in tokens {
        let field = parse_field(&field_name)?;
        if seen.contains(&field) {
            bail!("Field '{}' specified more than once", field_name);
        }
        seen.push(field);

        match field {
            FilterField::Search => filters.search_name = value,
            FilterField::Category => filters.selected_category = value,
            FilterField::Month => {
                validate_month(&value)?;
                filters.selected_month = value;
            }
            FilterField::Date => filters.date_filter = value,
        }
    }

    Ok(filters)
}
