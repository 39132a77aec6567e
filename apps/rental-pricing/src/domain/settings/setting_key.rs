//! Known business setting keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::shared::DomainError;

/// Which stored column a setting reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingColumn {
    /// `value_percent`, stored as 0-100 and divided by 100 on load.
    Percent,
    /// `value_aed`, a flat currency amount.
    Aed,
}

impl SettingColumn {
    /// Column name in the settings table.
    #[must_use]
    pub const fn column_name(&self) -> &'static str {
        match self {
            Self::Percent => "value_percent",
            Self::Aed => "value_aed",
        }
    }
}

/// The five settings the pricing calculator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// `investor_profit_rate`
    InvestorProfitRate,
    /// `risk_provision`
    RiskProvision,
    /// `payment_gateway_fee`
    PaymentGatewayFee,
    /// `target_margin`
    TargetMargin,
    /// `logistics_buffer`
    LogisticsBuffer,
}

impl SettingKey {
    /// All keys, in the order the settings screen lists them.
    pub const ALL: [Self; 5] = [
        Self::InvestorProfitRate,
        Self::RiskProvision,
        Self::PaymentGatewayFee,
        Self::TargetMargin,
        Self::LogisticsBuffer,
    ];

    /// Storage key (`setting_key` column).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvestorProfitRate => "investor_profit_rate",
            Self::RiskProvision => "risk_provision",
            Self::PaymentGatewayFee => "payment_gateway_fee",
            Self::TargetMargin => "target_margin",
            Self::LogisticsBuffer => "logistics_buffer",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::InvestorProfitRate => "Investor Profit Rate",
            Self::RiskProvision => "Risk Provision",
            Self::PaymentGatewayFee => "Payment Gateway Fee",
            Self::TargetMargin => "Target Margin",
            Self::LogisticsBuffer => "Logistics Buffer",
        }
    }

    /// Column this key's value lives in.
    #[must_use]
    pub const fn column(&self) -> SettingColumn {
        match self {
            Self::LogisticsBuffer => SettingColumn::Aed,
            _ => SettingColumn::Percent,
        }
    }

    /// Default in stored units (percent for rates, AED for the buffer).
    #[must_use]
    pub const fn default_stored_value(&self) -> f64 {
        match self {
            Self::InvestorProfitRate => 15.0,
            Self::RiskProvision => 5.0,
            Self::PaymentGatewayFee => 2.5,
            Self::TargetMargin => 30.0,
            Self::LogisticsBuffer => 500.0,
        }
    }

    /// Convert a stored value to the unit the calculator uses.
    #[must_use]
    pub fn to_engine_value(&self, stored: f64) -> f64 {
        match self.column() {
            SettingColumn::Percent => stored / 100.0,
            SettingColumn::Aed => stored,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::InvalidValue {
                field: "setting_key".to_string(),
                message: format!("unknown setting key '{s}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SettingKey::InvestorProfitRate, "investor_profit_rate", SettingColumn::Percent)]
    #[test_case(SettingKey::RiskProvision, "risk_provision", SettingColumn::Percent)]
    #[test_case(SettingKey::PaymentGatewayFee, "payment_gateway_fee", SettingColumn::Percent)]
    #[test_case(SettingKey::TargetMargin, "target_margin", SettingColumn::Percent)]
    #[test_case(SettingKey::LogisticsBuffer, "logistics_buffer", SettingColumn::Aed)]
    fn key_storage_and_column(key: SettingKey, stored: &str, column: SettingColumn) {
        assert_eq!(key.as_str(), stored);
        assert_eq!(key.column(), column);
        assert_eq!(stored.parse::<SettingKey>().unwrap(), key);
    }

    #[test]
    fn unknown_key_fails_to_parse() {
        let err = "monthly_discount".parse::<SettingKey>().unwrap_err();
        assert!(err.to_string().contains("monthly_discount"));
    }

    #[test]
    fn percent_values_are_divided() {
        assert_eq!(SettingKey::PaymentGatewayFee.to_engine_value(2.5), 0.025);
        assert_eq!(SettingKey::LogisticsBuffer.to_engine_value(750.0), 750.0);
    }

    #[test]
    fn serde_uses_storage_keys() {
        for key in SettingKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn column_names() {
        assert_eq!(SettingColumn::Percent.column_name(), "value_percent");
        assert_eq!(SettingColumn::Aed.column_name(), "value_aed");
    }
}
