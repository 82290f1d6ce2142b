//! Configuration for GLIF rendering

/// Configuration options for GLIF output
#[derive(Debug, Clone)]
pub struct GlifConfig {
    /// Whether to start with an XML declaration
    pub xml_declaration: bool,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,

    /// Indentation for one nesting level when pretty-printing
    pub indent: String,
}

impl Default for GlifConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            pretty_print: true,
            indent: "  ".to_string(),
        }
    }
}

impl GlifConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the XML declaration
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation string
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}
