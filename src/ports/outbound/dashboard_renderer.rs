use crate::application::read_models::DashboardState;
use crate::shared::Result;

/// DashboardRenderer port for turning a dashboard state into output text
///
/// This port abstracts the presentation format (HTML page, terminal text).
pub trait DashboardRenderer: Send + Sync {
    /// Renders one dashboard state
    ///
    /// # Arguments
    /// * `state` - Loading, error or loaded dashboard state
    ///
    /// # Returns
    /// Rendered content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, state: &DashboardState) -> Result<String>;
}
