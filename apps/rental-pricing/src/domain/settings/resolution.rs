//! Default resolution from stored rows to `BusinessSettings`.

use crate::domain::pricing::BusinessSettings;

use super::{BusinessSettingRow, SettingKey};

/// Stored value for `key`, if the store holds a usable one.
///
/// The first row with the key wins. A missing row, a missing column value,
/// zero, or NaN all count as "not set".
#[must_use]
pub fn stored_value(rows: &[BusinessSettingRow], key: SettingKey) -> Option<f64> {
    rows.iter()
        .find(|row| row.setting_key == key.as_str())
        .and_then(|row| row.value(key.column()))
        .filter(|value| *value != 0.0 && !value.is_nan())
}

/// Keys that will fall back to their default for these rows.
#[must_use]
pub fn defaulted_keys(rows: &[BusinessSettingRow]) -> Vec<SettingKey> {
    SettingKey::ALL
        .into_iter()
        .filter(|key| stored_value(rows, *key).is_none())
        .collect()
}

impl BusinessSettings {
    /// Resolve settings from stored rows, substituting defaults for anything
    /// not set. Never fails.
    #[must_use]
    pub fn from_rows(rows: &[BusinessSettingRow]) -> Self {
        let resolve = |key: SettingKey| {
            key.to_engine_value(
                stored_value(rows, key).unwrap_or_else(|| key.default_stored_value()),
            )
        };

        Self {
            investor_rate: resolve(SettingKey::InvestorProfitRate),
            risk_provision: resolve(SettingKey::RiskProvision),
            gateway_fee: resolve(SettingKey::PaymentGatewayFee),
            target_margin: resolve(SettingKey::TargetMargin),
            logistics_buffer: resolve(SettingKey::LogisticsBuffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_rows() -> Vec<BusinessSettingRow> {
        vec![
            BusinessSettingRow::for_key(SettingKey::InvestorProfitRate, 12.0),
            BusinessSettingRow::for_key(SettingKey::RiskProvision, 4.0),
            BusinessSettingRow::for_key(SettingKey::PaymentGatewayFee, 3.0),
            BusinessSettingRow::for_key(SettingKey::TargetMargin, 25.0),
            BusinessSettingRow::for_key(SettingKey::LogisticsBuffer, 650.0),
        ]
    }

    #[test]
    fn empty_store_yields_defaults() {
        let settings = BusinessSettings::from_rows(&[]);
        assert_eq!(settings, BusinessSettings::default());
        assert_eq!(defaulted_keys(&[]), SettingKey::ALL.to_vec());
    }

    #[test]
    fn stored_values_are_converted() {
        let settings = BusinessSettings::from_rows(&full_rows());
        assert_eq!(settings.investor_rate, 0.12);
        assert_eq!(settings.risk_provision, 0.04);
        assert_eq!(settings.gateway_fee, 0.03);
        assert_eq!(settings.target_margin, 0.25);
        assert_eq!(settings.logistics_buffer, 650.0);
        assert!(defaulted_keys(&full_rows()).is_empty());
    }

    #[test]
    fn partial_rows_default_the_rest() {
        let rows = vec![BusinessSettingRow::for_key(SettingKey::TargetMargin, 40.0)];
        let settings = BusinessSettings::from_rows(&rows);

        assert_eq!(settings.target_margin, 0.40);
        assert_eq!(settings.investor_rate, 0.15);
        assert_eq!(settings.logistics_buffer, 500.0);
        assert_eq!(defaulted_keys(&rows).len(), 4);
    }

    #[test]
    fn wrong_column_counts_as_unset() {
        // A rate stored in the AED column is not read.
        let rows = vec![BusinessSettingRow {
            value_percent: None,
            value_aed: Some(20.0),
            ..BusinessSettingRow::for_key(SettingKey::RiskProvision, 0.0)
        }];
        assert_eq!(BusinessSettings::from_rows(&rows).risk_provision, 0.05);
    }

    #[test]
    fn zero_counts_as_unset() {
        let rows = vec![BusinessSettingRow::for_key(SettingKey::LogisticsBuffer, 0.0)];
        assert_eq!(BusinessSettings::from_rows(&rows).logistics_buffer, 500.0);
    }

    #[test]
    fn nan_counts_as_unset() {
        let rows = vec![BusinessSettingRow::for_key(SettingKey::TargetMargin, f64::NAN)];
        assert_eq!(BusinessSettings::from_rows(&rows).target_margin, 0.30);
    }

    #[test]
    fn negative_values_are_kept() {
        let rows = vec![BusinessSettingRow::for_key(SettingKey::RiskProvision, -5.0)];
        let settings = BusinessSettings::from_rows(&rows);
        assert_eq!(settings.risk_provision, -0.05);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn first_row_wins() {
        let rows = vec![
            BusinessSettingRow::for_key(SettingKey::InvestorProfitRate, 10.0),
            BusinessSettingRow::for_key(SettingKey::InvestorProfitRate, 20.0),
        ];
        assert_eq!(BusinessSettings::from_rows(&rows).investor_rate, 0.10);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut rows = full_rows();
        rows.insert(
            0,
            BusinessSettingRow {
                setting_key: "late_fee".to_string(),
                ..BusinessSettingRow::for_key(SettingKey::TargetMargin, 99.0)
            },
        );
        assert_eq!(BusinessSettings::from_rows(&rows).target_margin, 0.25);
    }
}
