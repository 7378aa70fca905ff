use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

fn amount_to_cents_decimal(amount: f64) -> ChartResult<Decimal> {
    let mut value = Decimal::from_f64(amount).ok_or_else(|| {
        ChartError::InvalidData(format!("amount {amount} cannot be represented as decimal"))
    })?;
    value = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    value.rescale(2);
    Ok(value)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// US-dollar text: `$1,234.50`, `-$12.00`. Half-cent ties round to even.
pub fn format_currency(amount: f64) -> ChartResult<String> {
    let value = amount_to_cents_decimal(amount)?;
    let negative = value.is_sign_negative() && !value.is_zero();
    let text = value.abs().to_string();
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    Ok(format!("{sign}${}.{cents}", group_thousands(units)))
}

/// Transaction amount text; non-negative amounts carry an explicit `+`.
pub fn format_signed_amount(amount: f64) -> ChartResult<String> {
    let text = format_currency(amount)?;
    Ok(if amount >= 0.0 {
        format!("+{text}")
    } else {
        text
    })
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_signed_amount};

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1_234_567.5).expect("format"), "$1,234,567.50");
        assert_eq!(format_currency(999.0).expect("format"), "$999.00");
        assert_eq!(format_currency(0.0).expect("format"), "$0.00");
    }

    #[test]
    fn negative_currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(-42.1).expect("format"), "-$42.10");
    }

    #[test]
    fn signed_amount_marks_income() {
        assert_eq!(format_signed_amount(150.0).expect("format"), "+$150.00");
        assert_eq!(format_signed_amount(-3.99).expect("format"), "-$3.99");
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        assert!(format_currency(f64::INFINITY).is_err());
    }
}
