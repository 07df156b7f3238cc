/// ProgressReporter port for user feedback while waiting on the network
pub trait ProgressReporter {
    /// Shows `message` until the next call to `report_completion`
    fn report_waiting(&self, message: &str);

    /// Clears any waiting indicator; prints `message` when it is not empty
    fn report_completion(&self, message: &str);
}
