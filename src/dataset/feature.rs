use std::borrow::Cow;

use super::FeatureRow;

/// A single typed feature value.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Float(f64),
    Text(String),
}

impl Feature {
    /// Returns the value if this feature is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Feature::Float(value) => Some(*value),
            Feature::Text(_) => None,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Feature::Float(_))
    }
}

impl From<f64> for Feature {
    fn from(value: f64) -> Self {
        Feature::Float(value)
    }
}

impl From<&str> for Feature {
    fn from(value: &str) -> Self {
        Feature::Text(value.to_string())
    }
}

impl From<String> for Feature {
    fn from(value: String) -> Self {
        Feature::Text(value)
    }
}

/// A row of typed features, e.g. a query read from a mixed-type source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    features: Vec<Feature>,
}

impl Row {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Builds an all-numeric row.
    pub fn from_floats<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            features: values.into_iter().map(Feature::Float).collect(),
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }
}

impl From<Vec<Feature>> for Row {
    fn from(features: Vec<Feature>) -> Self {
        Self::new(features)
    }
}

impl FeatureRow for Row {
    fn num_features(&self) -> usize {
        self.features.len()
    }

    fn all_features_numeric(&self) -> bool {
        self.features.iter().all(Feature::is_float)
    }

    fn float_features(&self) -> Option<Cow<'_, [f64]>> {
        self.features
            .iter()
            .map(Feature::as_float)
            .collect::<Option<Vec<_>>>()
            .map(Cow::Owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_row() {
        let row = Row::from_floats([1.0, 2.5]);
        assert_eq!(row.num_features(), 2);
        assert!(row.all_features_numeric());
        assert_eq!(row.float_features().as_deref(), Some(&[1.0, 2.5][..]));
    }

    #[test]
    fn test_mixed_row_has_no_float_view() {
        let row = Row::new(vec![Feature::from(1.0), Feature::from("red")]);
        assert_eq!(row.num_features(), 2);
        assert!(!row.all_features_numeric());
        assert!(row.float_features().is_none());
    }

    #[test]
    fn test_feature_conversions() {
        assert_eq!(Feature::from(3.0).as_float(), Some(3.0));
        assert_eq!(Feature::from(String::from("x")).as_float(), None);
        assert!(!Feature::from("x").is_float());
    }
}
