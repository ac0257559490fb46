pub mod interval;
pub mod nice;
pub mod precision;
pub mod primitives;
pub mod scale;
pub mod types;

pub use interval::{classify_interval, DateInterval, IntervalSpec};
pub use nice::{nice_domain, nice_domain_and_ticks, target_tick_count, ticks};
pub use precision::{resolve_tick_precision, TickPrecision};
pub use primitives::{decimal_to_f64, parse_upload_date, UPLOAD_DATE_FORMAT};
pub use scale::LinearScale;
pub use types::{extent, series_column, DataEntry, Tick, YAxisSide};
