use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::{OrderRecord, OrderSide};
use crate::error::FormError;
use crate::form::state::Field;

/// Something the user did to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace a field's whole text at once (paste/fill)
    Edit { field: Field, text: String },
    /// Type characters into a field one keystroke at a time
    Type { field: Field, keys: String },
    /// Move the percentage slider (preset click or drag)
    Slider(Decimal),
    /// Switch between the buy and sell tabs
    SwitchSide(OrderSide),
    Submit,
}

/// What applying an event did
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Applied,
    /// Input was dropped by the keystroke gate; state unchanged
    Rejected,
    Submitted(OrderRecord),
    /// Submit while the form is invalid; state unchanged
    NotSubmittable,
}

/// Parses the textual event syntax used by `simulate`:
/// `price=88000`, `type:amount=0.001`, `slider=50`, `side=sell`, `submit`.
impl FromStr for FormEvent {
    type Err = FormError;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let raw = raw.trim();
        let invalid = |reason: String| FormError::InvalidEvent(format!("'{raw}': {reason}"));

        if raw.eq_ignore_ascii_case("submit") {
            return Ok(FormEvent::Submit);
        }

        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| invalid("expected KEY=VALUE or 'submit'".to_string()))?;
        let key = key.trim().to_ascii_lowercase();

        if let Some(field) = key.strip_prefix("type:") {
            let field = field.parse::<Field>().map_err(invalid)?;
            return Ok(FormEvent::Type {
                field,
                keys: value.to_string(),
            });
        }

        match key.as_str() {
            "slider" => {
                let pct = Decimal::from_str(value.trim().trim_end_matches('%'))
                    .map_err(|e| invalid(format!("bad percentage: {e}")))?;
                Ok(FormEvent::Slider(pct))
            }
            "side" => Ok(FormEvent::SwitchSide(value.parse().map_err(invalid)?)),
            other => {
                let field = other.parse::<Field>().map_err(invalid)?;
                Ok(FormEvent::Edit {
                    field,
                    text: value.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_events() {
        assert_eq!("submit".parse::<FormEvent>().unwrap(), FormEvent::Submit);
        assert_eq!(
            "price=88000".parse::<FormEvent>().unwrap(),
            FormEvent::Edit {
                field: Field::Price,
                text: "88000".to_string()
            }
        );
        assert_eq!(
            "type:price=abc123".parse::<FormEvent>().unwrap(),
            FormEvent::Type {
                field: Field::Price,
                keys: "abc123".to_string()
            }
        );
        assert_eq!(
            "slider=50%".parse::<FormEvent>().unwrap(),
            FormEvent::Slider(dec!(50))
        );
        assert_eq!(
            "side=sell".parse::<FormEvent>().unwrap(),
            FormEvent::SwitchSide(OrderSide::Sell)
        );
    }

    #[test]
    fn test_empty_value_clears_field() {
        assert_eq!(
            "total=".parse::<FormEvent>().unwrap(),
            FormEvent::Edit {
                field: Field::Total,
                text: String::new()
            }
        );
    }

    #[test]
    fn test_invalid_events() {
        for raw in ["fee=1", "slider=lots", "side=hold", "price", "type:fee=1"] {
            let err = raw.parse::<FormEvent>().unwrap_err();
            assert!(matches!(err, FormError::InvalidEvent(_)), "{raw}");
        }
    }
}
