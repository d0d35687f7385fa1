use crate::shared::components::table::number_format::{format_amount, format_number_with_decimals};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How to format the numeric value on a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    /// Rupee amount with currency sign
    Inr,
    /// Dollar amount with currency sign
    Usd,
    /// Plain integer with thousands separators
    Integer,
    /// Fixed number of decimal places
    Number { decimals: u8 },
}

fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Inr => format!("₹{}", format_amount(value)),
        ValueFormat::Usd => format!("${}", format_amount(value)),
        ValueFormat::Integer => format_number_with_decimals(value, 0),
        ValueFormat::Number { decimals } => format_number_with_decimals(value, decimals),
    }
}

/// Summary card: icon, label and one formatted figure.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2500000.0, ValueFormat::Inr), "₹2,500,000");
        assert_eq!(format_value(19.99, ValueFormat::Usd), "$19.99");
        assert_eq!(format_value(1234.0, ValueFormat::Integer), "1,234");
        assert_eq!(
            format_value(3.456, ValueFormat::Number { decimals: 2 }),
            "3.46"
        );
    }
}
