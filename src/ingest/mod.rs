//! Loading, reshaping and aligning benchmark tables.
//!
//! The evaluation core only sees parallel sequences of labels and prediction
//! sets. This module gets there from files on disk:
//!
//! - [`tsv`]: ground-truth and pivoted prediction tables
//! - [`sandpuma`]: raw SANDPUMA output
//! - [`pivot`]: long ↔ wide prediction tables
//! - [`align`]: inner join on [`RecordKey`] plus label normalization

pub mod align;
pub mod key;
pub mod pivot;
pub mod sandpuma;
pub mod table;
pub mod tsv;

pub use align::{align, AlignedDataset};
pub use key::RecordKey;
pub use pivot::{pivot, unpivot, FlatPrediction};
pub use table::{GroundTruthRow, GroundTruthTable, PredictionRow, PredictionTable};
