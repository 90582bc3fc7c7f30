//! Values entered for a single prediction attempt.

use std::collections::BTreeMap;

use zeroize::Zeroize;

use super::FieldSpec;

/// Mapping from `FieldSpec::key` to the entered number.
///
/// Unset fields read as `0.0`. Values are wiped with `zeroize` when the
/// attempt is discarded, so measurements do not linger in freed memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputValues {
    values: BTreeMap<String, f64>,
}

impl InputValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `row` with `fields` positionally. Extra values are ignored and
    /// missing ones stay unset.
    #[must_use]
    pub fn from_row(fields: &[FieldSpec], row: &[f64]) -> Self {
        let mut values = Self::new();
        for (field, value) in fields.iter().zip(row) {
            values.set(field.key, *value);
        }
        values
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Value for `key`, defaulting to zero.
    #[must_use]
    pub fn value_or_default(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build the model row in exactly the order of `fields`.
    #[must_use]
    pub fn to_row(&self, fields: &[FieldSpec]) -> Vec<f64> {
        fields
            .iter()
            .map(|field| self.value_or_default(field.key))
            .collect()
    }
}

impl Zeroize for InputValues {
    fn zeroize(&mut self) {
        for value in self.values.values_mut() {
            value.zeroize();
        }
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::DIABETES_FIELDS;

    #[test]
    fn test_to_row_follows_field_order() {
        let mut values = InputValues::new();
        // Insert out of order on purpose.
        values.set("Age", 30.0);
        values.set("Pregnancies", 2.0);
        values.set("Glucose", 120.0);

        let row = values.to_row(&DIABETES_FIELDS);
        assert_eq!(row.len(), 8);
        assert!((row[0] - 2.0).abs() < f64::EPSILON);
        assert!((row[1] - 120.0).abs() < f64::EPSILON);
        assert!((row[7] - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let row = InputValues::new().to_row(&DIABETES_FIELDS);
        assert_eq!(row, vec![0.0; 8]);
    }

    #[test]
    fn test_from_row_pairs_positionally() {
        let values = InputValues::from_row(&DIABETES_FIELDS, &[2.0, 120.0]);
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("Glucose"), Some(120.0));
        assert_eq!(values.get("BMI"), None);
    }

    #[test]
    fn test_zeroize_clears() {
        let mut values = InputValues::from_row(&DIABETES_FIELDS, &[1.0; 8]);
        values.zeroize();
        assert!(values.is_empty());
    }
}
