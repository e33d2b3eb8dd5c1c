//! Line-based prompts.
//!
//! Unlike key reads, these use the terminal's normal line-buffered mode.

use std::time::Duration;

use super::console::Console;
use super::error::UiError;
use super::style;

/// Delay between printing a label and reading, so the label is not mixed
/// up with a terminal mode switch that just happened.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Text prompt with an optional default.
#[derive(Debug, Clone)]
pub struct Prompt {
    label: String,
    rendered: String,
    default: Option<String>,
}

impl Prompt {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            rendered: format!("[green,bold]{}[reset] ", style::escape(label)),
            default: None,
        }
    }

    /// Show `value` as a hint after the label and return it for empty input.
    pub fn with_default(mut self, value: &str) -> Self {
        self.rendered = format!(
            "[green][bold]{}[reset] [lightGray]/[{}/][reset] ",
            style::escape(&self.label),
            style::escape(value)
        );
        self.default = Some(value.to_string());
        self
    }

    /// Markup printed before reading.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn get<C: Console>(&self, console: &mut C) -> Result<String, UiError> {
        style::print(console, &self.rendered)?;
        console.pause(SETTLE_DELAY);
        let input = console.read_line()?;
        Ok(self.resolve(input))
    }

    fn resolve(&self, input: String) -> String {
        match &self.default {
            Some(default) if input.is_empty() && !default.is_empty() => default.clone(),
            _ => input,
        }
    }
}

/// Prompt that parses its answer as a 32-bit float.
///
/// There is no retry: input that is not a number is an error for the caller.
#[derive(Debug, Clone)]
pub struct FloatPrompt {
    inner: Prompt,
}

impl FloatPrompt {
    pub fn new(label: &str) -> Self {
        Self {
            inner: Prompt::new(label),
        }
    }

    pub fn with_default(self, value: &str) -> Self {
        Self {
            inner: self.inner.with_default(value),
        }
    }

    pub fn get<C: Console>(&self, console: &mut C) -> Result<f32, UiError> {
        let input = self.inner.get(console)?;
        parse_hours(&input)
    }
}

/// Finite numbers only: `nan` and `inf` parse as f32 but cannot be stored
/// as JSON numbers.
fn parse_hours(input: &str) -> Result<f32, UiError> {
    match input.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(UiError::InvalidNumber {
            input: input.to_string(),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::console::testing::{rendered, ScriptedConsole};

    #[test]
    fn returns_typed_line() {
        let mut console = ScriptedConsole::new().with_lines(["Acme"]);
        let value = Prompt::new("Customer:").get(&mut console).unwrap();

        assert_eq!(value, "Acme");
        assert_eq!(console.raw_output(), rendered("[green,bold]Customer:[reset] "));
        assert_eq!(console.paused, SETTLE_DELAY);
    }

    #[test]
    fn empty_line_without_default_stays_empty() {
        let mut console = ScriptedConsole::new().with_lines([""]);
        assert_eq!(Prompt::new("Description:").get(&mut console).unwrap(), "");
    }

    #[test]
    fn empty_line_falls_back_to_default() {
        let mut console = ScriptedConsole::new().with_lines([""]);
        let value = Prompt::new("Date:")
            .with_default("16-10-2026")
            .get(&mut console)
            .unwrap();
        assert_eq!(value, "16-10-2026");
    }

    #[test]
    fn typed_line_overrides_default() {
        let mut console = ScriptedConsole::new().with_lines(["2024-01-01"]);
        let value = Prompt::new("Date:")
            .with_default("16-10-2026")
            .get(&mut console)
            .unwrap();
        assert_eq!(value, "2024-01-01");
    }

    #[test]
    fn default_hint_shows_in_brackets() {
        let prompt = Prompt::new("Date:").with_default("16-10-2026");
        let shown = rendered(prompt.rendered());
        assert!(shown.contains("Date:"));
        assert!(shown.contains("[16-10-2026]"));
    }

    #[test]
    fn label_with_brackets_renders_literally() {
        let prompt = Prompt::new("Note [optional]:");
        assert!(rendered(prompt.rendered()).contains("Note [optional]:"));
    }

    #[test]
    fn float_prompt_parses_number() {
        let mut console = ScriptedConsole::new().with_lines([" 2.5 "]);
        assert_eq!(FloatPrompt::new("Hours:").get(&mut console).unwrap(), 2.5);
    }

    #[test]
    fn float_prompt_uses_default() {
        let mut console = ScriptedConsole::new().with_lines([""]);
        let hours = FloatPrompt::new("Hours:")
            .with_default("1.75")
            .get(&mut console)
            .unwrap();
        assert_eq!(hours, 1.75);
    }

    #[test]
    fn float_prompt_rejects_garbage() {
        let mut console = ScriptedConsole::new().with_lines(["two"]);
        let err = FloatPrompt::new("Hours:").get(&mut console).unwrap_err();
        assert!(matches!(err, UiError::InvalidNumber { ref input } if input == "two"));
    }

    #[test]
    fn float_prompt_rejects_non_finite_values() {
        for word in ["nan", "NaN", "inf", "-inf", "infinity"] {
            let mut console = ScriptedConsole::new().with_lines([word]);
            let err = FloatPrompt::new("Hours:").get(&mut console).unwrap_err();
            assert!(
                matches!(err, UiError::InvalidNumber { ref input } if input == word),
                "accepted {word}"
            );
        }
    }

    #[test]
    fn float_prompt_rejects_empty_without_default() {
        let mut console = ScriptedConsole::new().with_lines([""]);
        assert!(FloatPrompt::new("Hours:").get(&mut console).is_err());
    }
}
