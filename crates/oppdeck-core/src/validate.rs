//! Creation-form validation
//!
//! Synchronous, local validation of the four draft fields. The form calls
//! [`validate_draft`] on submit; errors come back in field order so the
//! first entry is the field that should take input focus.

use chrono::NaiveDate;

use crate::types::OpportunityDraft;

/// Wire format of the close-date input buffer.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identity of a form field, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Stage,
    Amount,
    CloseDate,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Stage,
        FormField::Amount,
        FormField::CloseDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Opportunity Name",
            FormField::Stage => "Stage",
            FormField::Amount => "Amount",
            FormField::CloseDate => "Close Date",
        }
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Stage,
            FormField::Stage => FormField::Amount,
            FormField::Amount => FormField::CloseDate,
            FormField::CloseDate => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::CloseDate,
            FormField::Stage => FormField::Name,
            FormField::Amount => FormField::Stage,
            FormField::CloseDate => FormField::Amount,
        }
    }
}

/// An inline validation message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Required-field check shared by every field.
fn require(field: FormField, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::new(field, "This field is required"))
    } else {
        None
    }
}

/// Parse and bound-check the amount buffer. `Ok` only for a finite number
/// strictly greater than zero.
pub fn validate_amount(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("This field is required".to_string());
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| "Amount must be a number".to_string())?;
    if !amount.is_finite() {
        return Err("Amount must be a number".to_string());
    }
    if amount <= 0.0 {
        return Err("Amount must be greater than zero".to_string());
    }
    Ok(amount)
}

/// Parse and bound-check the close-date buffer against `today`.
pub fn validate_close_date(value: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("This field is required".to_string());
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| "Close Date must be a valid date (YYYY-MM-DD)".to_string())?;
    if date < today {
        return Err("Close Date cannot be in the past".to_string());
    }
    Ok(date)
}

/// Validate all four fields and build the draft.
///
/// Every failing field gets an entry in the error list (form order), so the
/// form can mark them all inline and focus the first.
pub fn validate_draft(
    name: &str,
    stage_name: &str,
    amount: &str,
    close_date: &str,
    today: NaiveDate,
) -> Result<OpportunityDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Some(err) = require(FormField::Name, name) {
        errors.push(err);
    }
    if let Some(err) = require(FormField::Stage, stage_name) {
        errors.push(err);
    }

    let parsed_amount = match validate_amount(amount) {
        Ok(v) => Some(v),
        Err(message) => {
            errors.push(FieldError::new(FormField::Amount, message));
            None
        }
    };

    let parsed_date = match validate_close_date(close_date, today) {
        Ok(v) => Some(v),
        Err(message) => {
            errors.push(FieldError::new(FormField::CloseDate, message));
            None
        }
    };

    match (parsed_amount, parsed_date) {
        (Some(amount), Some(close_date)) if errors.is_empty() => Ok(OpportunityDraft {
            name: name.trim().to_string(),
            stage_name: stage_name.trim().to_string(),
            amount,
            close_date,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_valid_draft() {
        let draft = validate_draft(
            "Renewal - Acme",
            "Prospecting",
            "100",
            "2026-08-07",
            today(),
        )
        .unwrap();
        assert_eq!(draft.name, "Renewal - Acme");
        assert_eq!(draft.amount, 100.0);
        assert_eq!(draft.close_date, today());
    }

    #[test]
    fn test_empty_required_field_never_produces_draft() {
        for (name, stage, amount, date) in [
            ("", "Prospecting", "100", "2026-08-07"),
            ("Acme", "", "100", "2026-08-07"),
            ("Acme", "Prospecting", "", "2026-08-07"),
            ("Acme", "Prospecting", "100", ""),
        ] {
            let result = validate_draft(name, stage, amount, date, today());
            assert!(result.is_err(), "draft produced for {name:?}/{stage:?}/{amount:?}/{date:?}");
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate_draft("   ", "Prospecting", "100", "2026-08-07", today())
            .unwrap_err();
        assert_eq!(errors[0].field, FormField::Name);
        assert_eq!(errors[0].message, "This field is required");
    }

    #[test]
    fn test_amount_zero_rejected() {
        assert_eq!(
            validate_amount("0").unwrap_err(),
            "Amount must be greater than zero"
        );
    }

    #[test]
    fn test_amount_negative_rejected() {
        assert_eq!(
            validate_amount("-5").unwrap_err(),
            "Amount must be greater than zero"
        );
    }

    #[test]
    fn test_amount_not_a_number_rejected() {
        assert_eq!(
            validate_amount("12abc").unwrap_err(),
            "Amount must be a number"
        );
        assert_eq!(
            validate_amount("NaN").unwrap_err(),
            "Amount must be a number"
        );
    }

    #[test]
    fn test_amount_hundred_accepted() {
        assert_eq!(validate_amount("100").unwrap(), 100.0);
        assert_eq!(validate_amount(" 2500.75 ").unwrap(), 2500.75);
    }

    #[test]
    fn test_close_date_yesterday_rejected() {
        let err = validate_close_date("2026-08-06", today()).unwrap_err();
        assert_eq!(err, "Close Date cannot be in the past");
    }

    #[test]
    fn test_close_date_today_and_later_accepted() {
        assert!(validate_close_date("2026-08-07", today()).is_ok());
        assert!(validate_close_date("2027-01-01", today()).is_ok());
    }

    #[test]
    fn test_close_date_garbage_rejected() {
        let err = validate_close_date("next tuesday", today()).unwrap_err();
        assert!(err.contains("valid date"));
    }

    #[test]
    fn test_errors_come_back_in_field_order() {
        let errors = validate_draft("", "", "-1", "1999-01-01", today()).unwrap_err();
        let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FormField::Name,
                FormField::Stage,
                FormField::Amount,
                FormField::CloseDate
            ]
        );
    }

    #[test]
    fn test_field_focus_cycle() {
        let mut field = FormField::Name;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::CloseDate);
    }
}
