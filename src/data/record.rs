use crate::data::dimension::Dimension;
use crate::error::{AxisplotError, Result};

/// One observational unit (a state in the bundled data).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: Option<u32>,
    /// Full name, shown in the tooltip.
    pub label: String,
    /// Short code drawn inside the marker.
    pub code: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub obesity: f64,
    pub smokes: f64,
}

impl Record {
    /// Record with every dimension set to `0.0`. Handy for building fixtures.
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            code: code.into(),
            poverty: 0.0,
            age: 0.0,
            income: 0.0,
            healthcare: 0.0,
            obesity: 0.0,
            smokes: 0.0,
        }
    }

    pub fn with(mut self, dim: Dimension, value: f64) -> Self {
        *self.value_mut(dim) = value;
        self
    }

    pub fn value(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Poverty => self.poverty,
            Dimension::Age => self.age,
            Dimension::Income => self.income,
            Dimension::Healthcare => self.healthcare,
            Dimension::Obesity => self.obesity,
            Dimension::Smokes => self.smokes,
        }
    }

    pub(crate) fn value_mut(&mut self, dim: Dimension) -> &mut f64 {
        match dim {
            Dimension::Poverty => &mut self.poverty,
            Dimension::Age => &mut self.age,
            Dimension::Income => &mut self.income,
            Dimension::Healthcare => &mut self.healthcare,
            Dimension::Obesity => &mut self.obesity,
            Dimension::Smokes => &mut self.smokes,
        }
    }
}

/// The loaded, immutable, non-empty record set. Dataset order is the
/// marker/label key and is never reshuffled.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(AxisplotError::invalid("dataset contains no records"));
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Dataset::new(Vec::new()), Err(AxisplotError::InvalidInput(_))));
    }

    #[test]
    fn value_reads_the_named_field() {
        let r = Record::new("Alabama", "AL")
            .with(Dimension::Income, 42830.0)
            .with(Dimension::Smokes, 21.1);
        assert_eq!(r.value(Dimension::Income), 42830.0);
        assert_eq!(r.value(Dimension::Smokes), 21.1);
        assert_eq!(r.value(Dimension::Age), 0.0);
    }
}
