/// Render format enumeration for the dashboard
///
/// Both the CLI (inbound adapter) and renderers (outbound adapters)
/// need to understand it, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Aligned text tables for a terminal (default)
    #[default]
    Terminal,
    /// Standalone HTML page
    Html,
}

impl std::str::FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "text" => Ok(RenderFormat::Terminal),
            "html" => Ok(RenderFormat::Html),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'terminal' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Terminal => write!(f, "terminal"),
            RenderFormat::Html => write!(f, "html"),
        }
    }
}
