pub mod dimension;
pub mod loader;
pub mod record;

pub use dimension::{AxisKind, AxisPair, Dimension};
pub use loader::{load_dataset, parse_dataset};
pub use record::{Dataset, Record};
