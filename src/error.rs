use thiserror::Error;

/// Library-level errors using thiserror for structured error handling.
///
/// These errors represent domain-specific failures that can occur while
/// building a wizard or persisting preferences. They provide context and can
/// be chained with anyhow.

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("a wizard needs at least one step")]
    Empty,

    #[error("duplicate step id: {0}")]
    DuplicateStepId(String),

    #[error("field '{field}' is declared by both step '{first}' and step '{second}'")]
    OverlappingField {
        field: String,
        first: String,
        second: String,
    },

    #[error("step '{step}' declares field '{field}' more than once")]
    DuplicateField { step: String, field: String },
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("step index {index} out of range (wizard has {count} steps)")]
    StepOutOfRange { index: usize, count: usize },
}

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to determine config directory")]
    NoConfigDir,

    #[error("Failed to load theme preference from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save theme preference to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to create preference directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown theme name: {0}")]
    UnknownTheme(String),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
