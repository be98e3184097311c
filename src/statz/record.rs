use crate::model::AttributeType;

/// The running accumulator of an aggregation: attribute name to value,
/// in type-registry order.
///
/// Actions never introduce attributes; the key set is fixed when the record
/// is seeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, f64)>,
}

impl Record {
    /// Seeds one entry per attribute type, set to its default.
    pub fn seeded(types: &[AttributeType]) -> Self {
        Self {
            entries: types.iter().map(|t| (t.name.clone(), t.default)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut f64)> {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
