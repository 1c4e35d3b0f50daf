//! Selectable dimensions and the two axis groups they belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AxisplotError;

// ─────────────────────────────────────────────────────────────────────────────
// AxisKind
// ─────────────────────────────────────────────────────────────────────────────

/// Which chart axis a dimension group drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Horizontal,
    Vertical,
}

impl AxisKind {
    pub const BOTH: [AxisKind; 2] = [AxisKind::Horizontal, AxisKind::Vertical];

    /// The labeled choices offered for this axis, in display order.
    pub fn choices(self) -> &'static [Dimension] {
        match self {
            AxisKind::Horizontal => &[Dimension::Poverty, Dimension::Age, Dimension::Income],
            AxisKind::Vertical => &[Dimension::Healthcare, Dimension::Obesity, Dimension::Smokes],
        }
    }

    pub fn default_dimension(self) -> Dimension {
        match self {
            AxisKind::Horizontal => Dimension::Poverty,
            AxisKind::Vertical => Dimension::Healthcare,
        }
    }

    pub fn other(self) -> AxisKind {
        match self {
            AxisKind::Horizontal => AxisKind::Vertical,
            AxisKind::Vertical => AxisKind::Horizontal,
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::Horizontal => write!(f, "horizontal"),
            AxisKind::Vertical => write!(f, "vertical"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension
// ─────────────────────────────────────────────────────────────────────────────

/// A numeric record field that can drive one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Poverty,
    Age,
    Income,
    Healthcare,
    Obesity,
    Smokes,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Poverty,
        Dimension::Age,
        Dimension::Income,
        Dimension::Healthcare,
        Dimension::Obesity,
        Dimension::Smokes,
    ];

    /// Column / attribute key, as it appears in the dataset header and in tooltips.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Poverty => "poverty",
            Dimension::Age => "age",
            Dimension::Income => "income",
            Dimension::Healthcare => "healthcare",
            Dimension::Obesity => "obesity",
            Dimension::Smokes => "smokes",
        }
    }

    /// Text of the clickable axis label.
    pub fn title(self) -> &'static str {
        match self {
            Dimension::Poverty => "Poverty (%)",
            Dimension::Age => "Median Age",
            Dimension::Income => "Median Income",
            Dimension::Healthcare => "Lacking Healthcare (%)",
            Dimension::Obesity => "Obesity (%)",
            Dimension::Smokes => "Smokers (%)",
        }
    }

    /// The axis group this dimension is offered in.
    pub fn axis(self) -> AxisKind {
        match self {
            Dimension::Poverty | Dimension::Age | Dimension::Income => AxisKind::Horizontal,
            Dimension::Healthcare | Dimension::Obesity | Dimension::Smokes => AxisKind::Vertical,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = AxisplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.key() == s)
            .ok_or_else(|| AxisplotError::invalid(format!("unknown dimension key '{s}'")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AxisPair
// ─────────────────────────────────────────────────────────────────────────────

/// One value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisPair<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: AxisKind) -> &T {
        match axis {
            AxisKind::Horizontal => &self.x,
            AxisKind::Vertical => &self.y,
        }
    }

    pub fn get_mut(&mut self, axis: AxisKind) -> &mut T {
        match axis {
            AxisKind::Horizontal => &mut self.x,
            AxisKind::Vertical => &mut self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_disjoint_and_consistent() {
        for axis in AxisKind::BOTH {
            assert_eq!(axis.choices().len(), 3);
            for d in axis.choices() {
                assert_eq!(d.axis(), axis);
                assert!(!axis.other().choices().contains(d));
            }
            assert!(axis.choices().contains(&axis.default_dimension()));
        }
    }

    #[test]
    fn parse_known_and_unknown_keys() {
        assert_eq!("income".parse::<Dimension>().unwrap(), Dimension::Income);
        assert_eq!("smokes".parse::<Dimension>().unwrap(), Dimension::Smokes);
        let err = "gdp".parse::<Dimension>().unwrap_err();
        assert!(matches!(err, AxisplotError::InvalidInput(_)));
    }

    #[test]
    fn key_round_trips_through_display() {
        for d in Dimension::ALL {
            assert_eq!(d.to_string().parse::<Dimension>().unwrap(), d);
        }
    }
}
