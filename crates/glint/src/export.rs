//! Output rendering for layout snapshots.
//!
//! The only exporter today is SVG; the layout state is handed over as an
//! immutable snapshot, so exporters never feed back into positions.

pub mod svg;

pub use self::svg::SvgRenderer;
