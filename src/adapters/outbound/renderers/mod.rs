/// Renderer adapters for the dashboard view
mod html_renderer;
mod terminal_renderer;

pub use html_renderer::HtmlRenderer;
pub use terminal_renderer::TerminalRenderer;

/// Heading shown above every loaded dashboard
pub(crate) const DASHBOARD_TITLE: &str = "Macro Early Warning Dashboard";

/// Endpoint the user is pointed at before the first snapshot exists
pub(crate) const COMPUTE_PATH: &str = "/api/compute";
