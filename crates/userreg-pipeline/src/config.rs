/// Spaces per indentation level in canonical output.
pub const DEFAULT_INDENT: usize = 2;

/// Controls pipeline behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Spaces per indentation level in canonical output. Zero emits compact JSON.
    pub indent: usize,
    /// When true, keys the record does not declare are reported as violations.
    pub reject_unknown_fields: bool,
    /// When true, the email domain is lowercased before the record is built.
    pub normalize_email: bool,
    /// Inputs longer than this many bytes are rejected before parsing.
    /// `None` accepts input of any size.
    pub max_input_bytes: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            reject_unknown_fields: false,
            normalize_email: false,
            max_input_bytes: None,
        }
    }
}
