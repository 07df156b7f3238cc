use crate::adapters::outbound::renderers::{HtmlRenderer, TerminalRenderer};
use crate::application::dto::RenderFormat;
use crate::ports::outbound::DashboardRenderer;

/// Factory for creating dashboard renderers
///
/// Encapsulates which adapter draws which format so the CLI only
/// deals with `RenderFormat`.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified format
    ///
    /// # Arguments
    /// * `format` - The render format
    /// * `color` - Whether terminal output may use ANSI colours (ignored for HTML)
    ///
    /// # Examples
    /// ```
    /// use macro_watch::application::dto::RenderFormat;
    /// use macro_watch::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(RenderFormat::Html, false);
    /// ```
    pub fn create(format: RenderFormat, color: bool) -> Box<dyn DashboardRenderer> {
        match format {
            RenderFormat::Terminal => Box::new(TerminalRenderer::new(color)),
            RenderFormat::Html => Box::new(HtmlRenderer::new()),
        }
    }
}
