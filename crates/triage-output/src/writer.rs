//! The `OutputWriter` trait implemented by export backends.

use crate::{EfficiencyRow, OutputResult, PatientTtlRow};

/// A sink for metric rows.
///
/// Errors are returned here but swallowed (and kept) by
/// [`SimOutputObserver`][crate::SimOutputObserver], since observer callbacks
/// cannot fail.
pub trait OutputWriter {
    fn write_efficiency(&mut self, row: &EfficiencyRow) -> OutputResult<()>;

    fn write_patients(&mut self, rows: &[PatientTtlRow]) -> OutputResult<()>;

    /// Flush and close.  Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
