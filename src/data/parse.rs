//! Numeric cleanup for survey-formatted cells ("12.5%", "4.3M").

use crate::error::{Result, VizError};

/// Where a cell came from, for error messages. `row` is the 1-based data row.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub dataset: &'a str,
    pub row: usize,
    pub column: &'a str,
}

impl FieldContext<'_> {
    fn invalid(&self, value: &str, reason: impl Into<String>) -> VizError {
        VizError::InvalidField {
            dataset: self.dataset.to_string(),
            row: self.row,
            column: self.column.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub fn parse_number(raw: &str, ctx: FieldContext<'_>) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ctx.invalid(raw, "empty value"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(ctx.invalid(raw, "not a finite number")),
        Err(err) => Err(ctx.invalid(raw, err.to_string())),
    }
}

/// "12.5%" -> 12.5. A bare number is accepted as already being a percentage.
pub fn parse_percent(raw: &str, ctx: FieldContext<'_>) -> Result<f64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_number(digits, ctx).map_err(|_| ctx.invalid(raw, "expected a percentage like 12.5%"))
}

/// "4.3M" -> 4.3. The magnitude letter is dropped, not applied.
pub fn parse_magnitude(raw: &str, ctx: FieldContext<'_>) -> Result<f64> {
    let trimmed = raw.trim();
    let digits = match trimmed.chars().last() {
        Some(c) if matches!(c.to_ascii_uppercase(), 'K' | 'M' | 'B') => {
            &trimmed[..trimmed.len() - c.len_utf8()]
        }
        _ => trimmed,
    };
    parse_number(digits, ctx).map_err(|_| ctx.invalid(raw, "expected a count like 4.3M"))
}

/// Whole number; "7.0" from spreadsheet exports is accepted.
pub fn parse_integer(raw: &str, ctx: FieldContext<'_>) -> Result<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) => {
            Ok(value as u32)
        }
        _ => Err(ctx.invalid(raw, "expected a whole number")),
    }
}
