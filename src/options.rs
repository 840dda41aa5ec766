use serde::{Deserialize, Serialize};

/// Parser configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Reject subfile designators pointing past the end of the document.
    ///
    /// By default such subfiles are truncated to the available bytes, which
    /// is what most deployed readers do.
    pub strict_bounds: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            strict_bounds: true,
        }
    }
}
