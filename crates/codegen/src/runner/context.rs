//! Per-run state handed to template units.

use crate::format::Formatter;
use crate::template::TemplateId;
use std::fmt;
use tracing::warn;

/// Non-fatal problem recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The pretty-printer failed; the unit's output was kept unformatted.
    FormatterUnavailable {
        unit: Option<TemplateId>,
        formatter: String,
        reason: String,
    },
    /// The pretty-printer succeeded but its output could not be used.
    FormattedOutputRejected {
        unit: Option<TemplateId>,
        formatter: String,
        reason: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormatterUnavailable {
                unit: Some(unit),
                formatter,
                reason,
            } => write!(
                f,
                "{formatter} failed for {unit}, output left unformatted: {reason}"
            ),
            Self::FormatterUnavailable {
                unit: None,
                formatter,
                reason,
            } => write!(f, "{formatter} failed, output left unformatted: {reason}"),
            Self::FormattedOutputRejected {
                unit: Some(unit),
                formatter,
                reason,
            } => write!(
                f,
                "{formatter} output for {unit} discarded, output left unformatted: {reason}"
            ),
            Self::FormattedOutputRejected {
                unit: None,
                formatter,
                reason,
            } => write!(f, "{formatter} output discarded, output left unformatted: {reason}"),
        }
    }
}

/// Services available to a unit while it generates: the pretty-printer and
/// the warning log.
pub struct RunContext<'f> {
    formatter: &'f dyn Formatter,
    current_unit: Option<TemplateId>,
    warnings: Vec<Warning>,
}

impl<'f> RunContext<'f> {
    pub fn new(formatter: &'f dyn Formatter) -> Self {
        Self {
            formatter,
            current_unit: None,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn enter_unit(&mut self, unit: &TemplateId) {
        self.current_unit = Some(unit.clone());
    }

    /// Format `source`, falling back to the input text if the formatter fails.
    /// Failures are logged and recorded as `Warning::FormatterUnavailable`.
    pub fn format(&mut self, source: &str) -> String {
        match self.formatter.format(source) {
            Ok(formatted) => formatted,
            Err(e) => {
                let unit = self
                    .current_unit
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                warn!(
                    formatter = self.formatter.name(),
                    unit = %unit,
                    error = %e,
                    "formatter unavailable, keeping unformatted output"
                );
                self.warnings.push(Warning::FormatterUnavailable {
                    unit: self.current_unit.clone(),
                    formatter: self.formatter.name().to_string(),
                    reason: e.to_string(),
                });
                source.to_string()
            }
        }
    }

    /// Record that formatted text returned by [`RunContext::format`] was not
    /// usable and the unit fell back to its unformatted output.
    pub fn reject_formatted(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        let unit = self
            .current_unit
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        warn!(
            formatter = self.formatter.name(),
            unit = %unit,
            reason = %reason,
            "formatted output rejected, keeping unformatted output"
        );
        self.warnings.push(Warning::FormattedOutputRejected {
            unit: self.current_unit.clone(),
            formatter: self.formatter.name().to_string(),
            reason,
        });
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub(crate) fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
