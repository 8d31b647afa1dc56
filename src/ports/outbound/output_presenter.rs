use crate::shared::Result;

/// OutputPresenter port for presenting a finished run report
///
/// Implementations write to stdout or to a file.
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
