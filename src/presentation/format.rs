use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    #[default]
    Total,
    Monthly,
    Weekly,
    Daily,
    Yearly,
}

impl PriceType {
    /// Parses the `priceType` filter value; anything unknown is a total price.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => PriceType::Monthly,
            "weekly" | "week" => PriceType::Weekly,
            "daily" | "day" => PriceType::Daily,
            "yearly" | "year" | "annual" => PriceType::Yearly,
            _ => PriceType::Total,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            PriceType::Total => "",
            PriceType::Monthly => "/month",
            PriceType::Weekly => "/week",
            PriceType::Daily => "/day",
            PriceType::Yearly => "/year",
        }
    }
}

/// `$1,250,000` or `$2,400/month`. Cents are rounded away.
pub fn format_price(amount: f64, price_type: PriceType) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return "Price on request".to_string();
    }

    let whole = amount.round() as u64;
    format!("${}{}", group_thousands(whole), price_type.suffix())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationParts {
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl LocationParts {
    pub fn from_params(params: &crate::domain::model::ParameterSet) -> Self {
        let field = |key: &str| params.get(key).map(str::to_string);
        Self {
            neighborhood: field("neighborhood"),
            city: field("city"),
            state: field("state"),
            zip_code: field("zipCode"),
        }
    }
}

/// "Mission, San Francisco, CA 94110". Blank parts are skipped.
pub fn format_location(parts: &LocationParts) -> String {
    let clean = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let state_zip = match (clean(&parts.state), clean(&parts.zip_code)) {
        (Some(state), Some(zip)) => Some(format!("{} {}", state, zip)),
        (state, zip) => state.or(zip),
    };

    [clean(&parts.neighborhood), clean(&parts.city), state_zip]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}
