//! Categorical dataset abstraction.
//!
//! The search only ever sees integer-coded values through [`Dataset`].
//! [`CategoricalDataset`] is the in-memory implementation used by the CLI
//! and the tests; it either takes codes directly or codes string records in
//! first-appearance order per attribute.

use std::collections::HashMap;

use crate::error::LearnError;

/// Read-only view of a categorical dataset.
pub trait Dataset {
    /// Number of attributes (columns).
    fn num_attributes(&self) -> usize;

    /// Number of instances (rows).
    fn num_instances(&self) -> usize;

    /// Number of distinct coded values of `attribute`.
    fn cardinality(&self, attribute: usize) -> usize;

    /// Coded value of `attribute` in `instance`.
    ///
    /// Expected in `[0, cardinality(attribute))`; consumers validate.
    fn value_at(&self, instance: usize, attribute: usize) -> i64;

    /// Display name of `attribute`.
    fn attribute_name(&self, attribute: usize) -> String {
        format!("a{attribute}")
    }
}

/// A named nominal attribute and its declared values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Attribute with `cardinality` anonymous values `"0"`, `"1"`, ...
    #[must_use]
    pub fn with_cardinality(name: impl Into<String>, cardinality: usize) -> Self {
        Self::new(name, (0..cardinality).map(|v| v.to_string()).collect())
    }

    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }
}

/// In-memory, row-major categorical dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalDataset {
    attributes: Vec<Attribute>,
    instances: Vec<Vec<i64>>,
}

impl CategoricalDataset {
    /// Build from declared attributes and already-coded instances.
    ///
    /// Values are not range-checked here; out-of-range codes surface as
    /// [`LearnError::InvalidCardinality`] when tables are built.
    ///
    /// # Errors
    ///
    /// Returns [`LearnError::RaggedInstance`] if any instance does not carry
    /// exactly one value per attribute.
    pub fn new(attributes: Vec<Attribute>, instances: Vec<Vec<i64>>) -> Result<Self, LearnError> {
        let expected = attributes.len();
        if let Some((instance, row)) = instances
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(LearnError::RaggedInstance {
                instance,
                expected,
                found: row.len(),
            });
        }
        Ok(Self {
            attributes,
            instances,
        })
    }

    /// Build from per-attribute cardinalities; attributes are named `a0`, `a1`, ...
    ///
    /// # Errors
    ///
    /// See [`CategoricalDataset::new`].
    pub fn from_codes(cardinalities: &[usize], instances: Vec<Vec<i64>>) -> Result<Self, LearnError> {
        let attributes = cardinalities
            .iter()
            .enumerate()
            .map(|(i, &k)| Attribute::with_cardinality(format!("a{i}"), k))
            .collect();
        Self::new(attributes, instances)
    }

    /// Build from a header and string records.
    ///
    /// Each attribute's values are coded in order of first appearance, so
    /// the first distinct value seen in a column becomes code `0`.
    ///
    /// # Errors
    ///
    /// Returns [`LearnError::RaggedInstance`] if a record's width differs
    /// from the header's.
    pub fn from_records<I, R, S>(header: Vec<String>, records: I) -> Result<Self, LearnError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let width = header.len();
        let mut lookups: Vec<HashMap<String, i64>> = vec![HashMap::new(); width];
        let mut values: Vec<Vec<String>> = vec![Vec::new(); width];
        let mut instances = Vec::new();

        for (instance, record) in records.into_iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (attribute, raw) in record.into_iter().enumerate() {
                if attribute >= width {
                    return Err(LearnError::RaggedInstance {
                        instance,
                        expected: width,
                        found: attribute + 1,
                    });
                }
                let raw = raw.as_ref();
                let code = match lookups[attribute].get(raw) {
                    Some(code) => *code,
                    None => {
                        let code = i64::try_from(values[attribute].len()).unwrap_or(i64::MAX);
                        lookups[attribute].insert(raw.to_string(), code);
                        values[attribute].push(raw.to_string());
                        code
                    }
                };
                row.push(code);
            }
            if row.len() != width {
                return Err(LearnError::RaggedInstance {
                    instance,
                    expected: width,
                    found: row.len(),
                });
            }
            instances.push(row);
        }

        let attributes = header
            .into_iter()
            .zip(values)
            .map(|(name, values)| Attribute::new(name, values))
            .collect();

        Ok(Self {
            attributes,
            instances,
        })
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

}

impl Dataset for CategoricalDataset {
    fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    fn num_instances(&self) -> usize {
        self.instances.len()
    }

    fn cardinality(&self, attribute: usize) -> usize {
        self.attributes.get(attribute).map_or(0, Attribute::cardinality)
    }

    fn value_at(&self, instance: usize, attribute: usize) -> i64 {
        self.instances[instance][attribute]
    }

    fn attribute_name(&self, attribute: usize) -> String {
        self.attributes
            .get(attribute)
            .map_or_else(|| format!("a{attribute}"), |a| a.name.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
