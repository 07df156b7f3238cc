pub mod reading;
pub mod snapshot;

pub use reading::Reading;
pub use snapshot::{BreachCount, BreachFlag, IndicatorReading, Snapshot};
