use super::{COMPUTE_PATH, DASHBOARD_TITLE};
use crate::application::read_models::{DashboardReadModel, DashboardState, Tone};
use crate::ports::outbound::DashboardRenderer;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Spaces between table columns
const COLUMN_GAP: usize = 2;

/// TerminalRenderer adapter drawing the dashboard as plain text tables
///
/// Triggered rules are red and clear rules green when colour is enabled.
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Escapes control characters so producer text cannot move the cursor
    /// or inject colour codes
    fn sanitize(text: &str) -> String {
        let mut clean = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_control() {
                clean.extend(c.escape_default());
            } else {
                clean.push(c);
            }
        }
        clean
    }

    fn paint_tone(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Warning => text.red().bold().to_string(),
            Tone::Neutral => text.green().to_string(),
        }
    }

    fn paint_bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Writes a two-column table; the second column is never padded so
    /// colour codes cannot skew the alignment
    fn render_table(
        &self,
        output: &mut String,
        title: &str,
        headers: (&str, &str),
        rows: &[(String, String)],
    ) {
        let width = rows
            .iter()
            .map(|(key, _)| key.chars().count())
            .chain(std::iter::once(headers.0.chars().count()))
            .max()
            .unwrap_or(0);

        output.push_str(&self.paint_bold(title));
        output.push('\n');
        output.push_str(&format!(
            "{:<width$}{:gap$}{}\n",
            headers.0,
            "",
            headers.1,
            width = width,
            gap = COLUMN_GAP
        ));
        output.push_str(&format!(
            "{}{:gap$}{}\n",
            "-".repeat(width),
            "",
            "-".repeat(headers.1.chars().count()),
            gap = COLUMN_GAP
        ));
        for (key, value) in rows {
            output.push_str(&format!(
                "{:<width$}{:gap$}{}\n",
                key,
                "",
                value,
                width = width,
                gap = COLUMN_GAP
            ));
        }
    }

    fn render_loaded(&self, output: &mut String, model: &DashboardReadModel) {
        output.push_str(&self.paint_bold(DASHBOARD_TITLE));
        output.push('\n');
        output.push_str(&format!(
            "Generated: {}\n",
            Self::sanitize(&model.generated_utc)
        ));
        output.push_str(&self.paint_bold(&format!(
            "Macro Stress Breaches: {}",
            Self::sanitize(&model.breach_count)
        )));
        output.push_str("\n\n");

        let values: Vec<(String, String)> = model
            .value_rows
            .iter()
            .map(|row| (Self::sanitize(&row.indicator), Self::sanitize(&row.latest)))
            .collect();
        self.render_table(output, "Latest Values", ("Indicator", "Latest"), &values);
        output.push('\n');

        let breaches: Vec<(String, String)> = model
            .breach_rows
            .iter()
            .map(|row| {
                (
                    Self::sanitize(&row.rule),
                    self.paint_tone(&row.display, row.tone),
                )
            })
            .collect();
        self.render_table(output, "Breaches", ("Rule", "Triggered?"), &breaches);
    }
}

impl DashboardRenderer for TerminalRenderer {
    fn render(&self, state: &DashboardState) -> Result<String> {
        let mut output = String::new();
        match state {
            DashboardState::Loading => {
                output.push_str(&format!("Loading… (first run: open {})\n", COMPUTE_PATH));
            }
            DashboardState::Error(message) => {
                output.push_str(&format!("Error: {}\n", Self::sanitize(message)));
            }
            DashboardState::Loaded(model) => self.render_loaded(&mut output, model),
        }
        Ok(output)
    }
}
