use super::{COMPUTE_PATH, DASHBOARD_TITLE};
use crate::application::read_models::{BreachRow, DashboardReadModel, DashboardState, Tone, ValueRow};
use crate::ports::outbound::DashboardRenderer;
use crate::shared::Result;

/// Page styles; the warning/neutral colours mark triggered and clear rules
const PAGE_STYLE: &str = "main{padding:20px;font-family:system-ui}\
.breach-count{font-size:24px;font-weight:700;margin:12px 0}\
table{border-collapse:collapse;width:100%}\
table.values{margin-bottom:20px}\
th:first-child{text-align:left}\
td{padding:6px 4px;border-bottom:1px solid #eee}\
td.warning{color:#b00020}\
td.neutral{color:#2e7d32}";

/// HtmlRenderer adapter producing the browser dashboard page
///
/// Every interpolated string is HTML-escaped; indicator and rule names come
/// from an external producer.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for use in element content and quoted attributes
    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn tone_class(tone: Tone) -> &'static str {
        match tone {
            Tone::Warning => "warning",
            Tone::Neutral => "neutral",
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlRenderer {
    fn render_document(&self, output: &mut String, body: &str) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
        output.push_str(&format!("<title>{}</title>\n", DASHBOARD_TITLE));
        output.push_str(&format!("<style>{}</style>\n", PAGE_STYLE));
        output.push_str("</head>\n<body>\n");
        output.push_str(body);
        output.push_str("</body>\n</html>\n");
    }

    fn render_loading(&self) -> String {
        format!(
            "<main>Loading… (first run: open <code>{}</code>)</main>\n",
            COMPUTE_PATH
        )
    }

    fn render_error(&self, message: &str) -> String {
        format!("<main class=\"error\">Error: {}</main>\n", Self::escape(message))
    }

    fn render_loaded(&self, model: &DashboardReadModel) -> String {
        let mut body = String::from("<main>\n");
        body.push_str(&format!("<h2>{}</h2>\n", DASHBOARD_TITLE));
        body.push_str(&format!(
            "<p class=\"generated\">Generated: {}</p>\n",
            Self::escape(&model.generated_utc)
        ));
        body.push_str(&format!(
            "<div class=\"breach-count\">Macro Stress Breaches: {}</div>\n",
            Self::escape(&model.breach_count)
        ));
        self.render_values(&mut body, &model.value_rows);
        self.render_breaches(&mut body, &model.breach_rows);
        body.push_str("</main>\n");
        body
    }

    fn render_values(&self, output: &mut String, rows: &[ValueRow]) {
        output.push_str("<h3>Latest Values</h3>\n<table class=\"values\">\n");
        output.push_str("<thead><tr><th>Indicator</th><th>Latest</th></tr></thead>\n<tbody>\n");
        for row in rows {
            output.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                Self::escape(&row.indicator),
                Self::escape(&row.latest)
            ));
        }
        output.push_str("</tbody>\n</table>\n");
    }

    fn render_breaches(&self, output: &mut String, rows: &[BreachRow]) {
        output.push_str("<h3>Breaches</h3>\n<table class=\"breaches\">\n");
        output.push_str("<thead><tr><th>Rule</th><th>Triggered?</th></tr></thead>\n<tbody>\n");
        for row in rows {
            output.push_str(&format!(
                "<tr><td>{}</td><td class=\"{}\">{}</td></tr>\n",
                Self::escape(&row.rule),
                Self::tone_class(row.tone),
                Self::escape(&row.display)
            ));
        }
        output.push_str("</tbody>\n</table>\n");
    }
}

impl DashboardRenderer for HtmlRenderer {
    fn render(&self, state: &DashboardState) -> Result<String> {
        let body = match state {
            DashboardState::Loading => self.render_loading(),
            DashboardState::Error(message) => self.render_error(message),
            DashboardState::Loaded(model) => self.render_loaded(model),
        };

        let mut output = String::new();
        self.render_document(&mut output, &body);
        Ok(output)
    }
}
