//! Turns ZPL command streams into [`Label`] documents.
//!
//! ```
//! use zpl_interpreter::{LabelParser, LayoutItem};
//!
//! let mut parser = LabelParser::new("^XA^FO50,50^FDHello World^FS^XZ");
//! let result = parser.parse();
//! assert!(result.is_valid);
//! let label = result.label.unwrap();
//! assert!(matches!(label.items[0], LayoutItem::Text(_)));
//! ```

mod barcode;
mod builder;
mod decode_image;
mod error;
mod label;
mod template;

use indexmap::IndexMap;
use log::debug;
use zpl_parser::tokenize;

pub use crate::builder::{CommandKind, DEFAULT_HEX_INDICATOR, LabelBuilder};
pub use crate::decode_image::{MonochromeBitmap, decode_graphic_field};
pub use crate::error::{CommandError, ConfigError, GraphicError, ProduceError};
pub use crate::label::*;
pub use crate::template::{TemplateConfig, Variable, VariableType, zpl, zpl_with_config};

const START_COMMAND: &str = "^XA";
const END_COMMAND: &str = "^XZ";

/// Outcome of [`LabelParser::parse`].
///
/// `label` is only set when at least one printable item was produced, and
/// `is_valid` additionally requires `errors` to be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLabel {
    pub label: Option<Label>,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub variables: IndexMap<String, Variable>,
}

/// A ZPL format, optionally with template variables.
#[derive(Debug, Clone)]
pub struct LabelParser {
    input: String,
    pub name: String,
    pub variables: IndexMap<String, Variable>,
    valid: bool,
}

impl LabelParser {
    /// A parser over `input`, cut to [`TemplateConfig::DEFAULT_MAX_LENGTH`]
    /// characters.
    pub fn new(input: &str) -> Self {
        Self::with_config(input, &TemplateConfig::default())
    }

    pub fn with_config(input: &str, config: &TemplateConfig) -> Self {
        let input = input.trim().replace("\r\n", "\n");
        Self {
            input: template::truncate(&input, config),
            name: "Label".to_string(),
            variables: IndexMap::new(),
            valid: false,
        }
    }

    /// The normalized format text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Sets the value of a declared variable. Returns `false` for unknown names.
    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.variables.get_mut(name) {
            Some(variable) => {
                variable.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn parse(&mut self) -> ParsedLabel {
        let mut result = ParsedLabel {
            label: None,
            is_valid: false,
            errors: Vec::new(),
            variables: self.variables.clone(),
        };
        self.valid = false;

        let Some(body) = self.input.strip_prefix(START_COMMAND) else {
            result.errors.push("Missing ^XA start command".to_string());
            return result;
        };
        let Some(body) = body.strip_suffix(END_COMMAND) else {
            result.errors.push("Missing ^XZ end command".to_string());
            return result;
        };

        let mut builder = LabelBuilder::new();
        for token in tokenize(body) {
            let Some(kind) = CommandKind::from_command(token.command) else {
                debug!("unknown command {}", token.command);
                result
                    .errors
                    .push(format!("Invalid command: {}", token.command));
                continue;
            };

            if let Err(err) = builder.apply(kind, token.params.trim()) {
                result
                    .errors
                    .push(format!("Error processing command {}: {err}", token.command));
            }
        }

        let label = builder.finish();
        if label.is_empty() {
            result
                .errors
                .push("Label contains no printable items".to_string());
            return result;
        }

        result.label = Some(label);
        result.is_valid = result.errors.is_empty();
        self.valid = result.is_valid;
        result
    }

    /// The format with variable values substituted into its field data.
    ///
    /// Only available after a successful [`LabelParser::parse`]. Variables
    /// without a value are left as written.
    pub fn produce(&self) -> Result<String, ProduceError> {
        if !self.valid {
            return Err(ProduceError::InvalidLabel);
        }

        let mut output = self.input.clone();
        for variable in self.variables.values() {
            if variable.name.is_empty() || variable.value.is_empty() {
                continue;
            }
            output = substitute_field_data(&output, &variable.name, &variable.value);
        }
        Ok(output)
    }
}

/// Replaces `name` with `value` inside every `^FD` payload of `zpl`.
fn substitute_field_data(zpl: &str, name: &str, value: &str) -> String {
    let mut output = String::with_capacity(zpl.len());
    let mut rest = zpl;

    while let Some(start) = rest.find("^FD") {
        let (before, after) = rest.split_at(start + 3);
        output.push_str(before);
        let end = after.find(['^', '~']).unwrap_or(after.len());
        let (payload, tail) = after.split_at(end);
        output.push_str(&payload.replace(name, value));
        rest = tail;
    }

    output.push_str(rest);
    output
}
