//! Matrix validation before header generation.
//!
//! This module checks that the inferred partition can be turned into a
//! usable scan matrix on the selected board, and flags wiring that looks
//! incomplete.

use crate::models::{BoardProfile, ConnectionGraph, Partition, Pin};
use crate::services::orphaned_keys;
use serde::Serialize;
use tracing::warn;

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Problems that prevent header generation
    pub errors: Vec<ValidationError>,
    /// Non-critical warnings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// FPC pins reported as likely unconnected, ascending.
    pub fn unconnected_pins(&self) -> Vec<Pin> {
        self.warnings
            .iter()
            .filter(|w| w.kind == ValidationWarningKind::UnconnectedPin)
            .filter_map(|w| w.pin)
            .collect()
    }

    /// Formats the report as a user-friendly error message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&format!("{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Validation error with context.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// FPC pin the error refers to, if any
    pub pin: Option<Pin>,
    /// Human-readable error message
    pub message: String,
    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            pin: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the pin context.
    #[must_use]
    pub const fn with_pin(mut self, pin: Pin) -> Self {
        self.pin = Some(pin);
        self
    }

    /// Sets a suggestion for fixing the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(pin) = self.pin {
            write!(f, "[FPC pin {}] {}: {}", pin, self.kind, self.message)?;
        } else {
            write!(f, "{}: {}", self.kind, self.message)?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n    → {suggestion}")?;
        }

        Ok(())
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Partition found no row pins
    NoRows,
    /// Partition found no column pins
    NoColumns,
    /// Pin number exceeds what the board can be soldered to
    PinOutOfRange,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRows => write!(f, "No Rows"),
            Self::NoColumns => write!(f, "No Columns"),
            Self::PinOutOfRange => write!(f, "Pin Out of Range"),
        }
    }
}

/// Types of validation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationWarningKind {
    /// A pin inside the used range never appears in the scancode file
    UnconnectedPin,
    /// A switch bridges two column pins and cannot be scanned
    OrphanedKey,
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone, Serialize)]
pub struct ValidationWarning {
    /// Type of warning
    pub kind: ValidationWarningKind,
    /// FPC pin the warning refers to, if any
    pub pin: Option<Pin>,
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning
    pub fn new(kind: ValidationWarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            pin: None,
            message: message.into(),
        }
    }

    /// Sets the pin context.
    #[must_use]
    pub const fn with_pin(mut self, pin: Pin) -> Self {
        self.pin = Some(pin);
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// First pin of every gap in an ascending pin list.
///
/// `[1, 2, 3, 5, 6]` yields `[4]` and `[1, 4, 5, 9]` yields `[2, 6]`.
/// Pins below the first entry are not considered.
pub fn find_gaps(pins: &[Pin]) -> Vec<Pin> {
    pins.windows(2)
        .filter(|pair| pair[1].saturating_sub(pair[0]) != 1)
        .map(|pair| pair[0].saturating_add(1))
        .collect()
}

/// Matrix validator.
pub struct MatrixValidator<'a> {
    graph: &'a ConnectionGraph,
    partition: &'a Partition,
    board: BoardProfile,
}

impl<'a> MatrixValidator<'a> {
    /// Creates a new matrix validator.
    #[must_use]
    pub const fn new(
        graph: &'a ConnectionGraph,
        partition: &'a Partition,
        board: BoardProfile,
    ) -> Self {
        Self {
            graph,
            partition,
            board,
        }
    }

    /// Validates the partition for header generation.
    ///
    /// Checks:
    /// - At least one row and one column were found
    /// - Every used pin exists on the board
    /// - Pins between the lowest and highest used pin are all wired
    /// - No switch bridges two column pins
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.validate_dimensions(&mut report);
        self.validate_pin_range(&mut report);
        self.check_gaps(&mut report);
        self.check_orphans(&mut report);

        report
    }

    fn validate_dimensions(&self, report: &mut ValidationReport) {
        if self.partition.rows.is_empty() {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::NoRows,
                    "No row pins could be identified",
                )
                .with_suggestion("Fill out the scancode file with KEY_NAME PIN1 PIN2 lines"),
            );
        }

        if self.partition.columns.is_empty() {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::NoColumns,
                    "No column pins could be identified",
                )
                .with_suggestion("Fill out the scancode file with KEY_NAME PIN1 PIN2 lines"),
            );
        }
    }

    fn validate_pin_range(&self, report: &mut ValidationReport) {
        let max_pin = self.board.max_pin();
        for pin in self.partition.all_pins() {
            if pin <= max_pin {
                continue;
            }

            let mut error = ValidationError::new(
                ValidationErrorKind::PinOutOfRange,
                format!(
                    "{} only has {} FPC pins, but pin {} is used",
                    self.board, max_pin, pin
                ),
            )
            .with_pin(pin);

            if let Some(board) = BoardProfile::smallest_fitting(pin) {
                error = error.with_suggestion(format!(
                    "Add a {} line to the scancode file or pass --board {}",
                    board, board
                ));
            }

            report.add_error(error);
        }
    }

    fn check_gaps(&self, report: &mut ValidationReport) {
        for pin in find_gaps(&self.partition.all_pins()) {
            report.add_warning(
                ValidationWarning::new(
                    ValidationWarningKind::UnconnectedPin,
                    format!("FPC pin {} appears to be unconnected", pin),
                )
                .with_pin(pin),
            );
        }
    }

    fn check_orphans(&self, report: &mut ValidationReport) {
        for (a, b, key) in orphaned_keys(self.graph, self.partition) {
            warn!(
                "{} connects column pins {} and {} and will not be scanned",
                key.name, a, b
            );
            report.add_warning(ValidationWarning::new(
                ValidationWarningKind::OrphanedKey,
                format!(
                    "{} connects column pins {} and {} and will not be scanned",
                    key.name, a, b
                ),
            ));
        }
    }
}
