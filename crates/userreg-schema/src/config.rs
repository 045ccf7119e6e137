/// Controls how the schema document is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    /// When true, object schemas reject properties they do not declare.
    pub strict_mode: bool,
}
