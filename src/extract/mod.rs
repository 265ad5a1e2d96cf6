//! Reading tables out of a document tree.
//!
//! The read path is a pipeline: [`flatten`] and [`locate`] feed [`extract`],
//! whose [`TableGrid`] output is reshaped into a [`ColumnTable`] and cleaned
//! by [`normalize`]. Every stage is a pure function over an immutable
//! snapshot of the document.

mod extractor;
mod grid;
mod locator;
mod normalize;
mod walker;

pub use extractor::{extract, extract_from};
pub use grid::{Cell, ColumnTable, TableGrid};
pub use locator::locate;
pub use normalize::{normalize, strip_chars};
pub use walker::flatten;
