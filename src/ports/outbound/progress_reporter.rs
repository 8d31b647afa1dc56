/// ProgressReporter port for user feedback while a run is in progress
///
/// Everything reported here goes to the operator (stderr in the CLI), never
/// into the run report itself.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a known number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total expected steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports an error for a single item; the run continues
    fn report_error(&self, message: &str);

    /// Reports completion of a stage
    fn report_completion(&self, message: &str);
}
