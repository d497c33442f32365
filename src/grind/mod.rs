//! Grinder unit conversion.
//!
//! Maps a physical grind size in microns to manufacturer-specific
//! dial/click/setting values:
//!
//! - [`table`] - the measured microns → per-grinder chart with
//!   nearest-row lookup
//! - [`profile`] - one [`GrinderModel`] variant per supported grinder,
//!   each composing a lookup or formula with a display-unit tag
//!
//! Formatting is a pure function of the unit kind and the converted
//! value; it never dispatches on grinder identity.

mod profile;
mod table;

pub use profile::{conversion_label, format_reading, GrindReading, GrinderModel, UnitKind};
pub use table::{nearest_row, GrindRow, GRIND_CHART};
