use std::{fmt, sync::LazyLock};

use indexmap::IndexMap;
use log::warn;
use regex::Regex;

use crate::{LabelParser, error::ConfigError};

static FULL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^label\s+(?<name>[a-zA-Z0-9\-_]+)\((?<params>.*)\)\s*\{(?<zpl>.*)\}$")
        .expect("label pattern is valid")
});

static SHORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^label\s+(?<name>[a-zA-Z0-9\-_]+)?\s*\{(?<zpl>.*)\}$")
        .expect("short label pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableType {
    #[default]
    String,
    Number,
    Boolean,
}

impl VariableType {
    /// Unknown type names fall back to [`VariableType::String`].
    pub fn from_declaration(value: &str) -> Self {
        match value.trim() {
            "number" => VariableType::Number,
            "boolean" => VariableType::Boolean,
            _ => VariableType::String,
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariableType::String => "string",
            VariableType::Number => "number",
            VariableType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// A template parameter. The type is informative only, values are always
/// substituted as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: VariableType,
    pub value: String,
}

impl Variable {
    pub fn new(name: impl Into<String>, kind: VariableType) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateConfig {
    max_length: usize,
}

impl TemplateConfig {
    pub const DEFAULT_MAX_LENGTH: usize = 4096;

    pub fn new(max_length: usize) -> Result<Self, ConfigError> {
        if max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        Ok(Self { max_length })
    }

    /// Characters kept from a template, the rest is dropped.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }
}

fn parse_variables(params: &str) -> IndexMap<String, Variable> {
    let mut variables = IndexMap::new();
    for param in params.split(',') {
        let mut parts = param.splitn(2, ':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            continue;
        }
        let kind = parts
            .next()
            .map(VariableType::from_declaration)
            .unwrap_or_default();
        variables.insert(name.to_string(), Variable::new(name, kind));
    }
    variables
}

/// Builds a parser from a template with the default [`TemplateConfig`].
///
/// Three shapes are accepted:
///
/// ```text
/// label Shipping(name: string, count: number) { ^XA ... ^XZ }
/// label Shipping { ^XA ... ^XZ }
/// ^XA ... ^XZ
/// ```
pub fn zpl(input: &str) -> LabelParser {
    zpl_with_config(input, &TemplateConfig::default())
}

pub fn zpl_with_config(input: &str, config: &TemplateConfig) -> LabelParser {
    let input = WHITESPACE.replace_all(input.trim(), " ");

    let input = truncate(&input, config);

    if let Some(captures) = FULL_PATTERN.captures(&input) {
        let mut parser = LabelParser::with_config(&captures["zpl"], config);
        parser.name = captures["name"].to_string();
        parser.variables = parse_variables(&captures["params"]);
        parser
    } else if let Some(captures) = SHORT_PATTERN.captures(&input) {
        let mut parser = LabelParser::with_config(&captures["zpl"], config);
        if let Some(name) = captures.name("name") {
            parser.name = name.as_str().to_string();
        }
        parser
    } else {
        LabelParser::with_config(&input, config)
    }
}

/// Keeps the first `max_length` characters of `input`.
pub(crate) fn truncate(input: &str, config: &TemplateConfig) -> String {
    match input.char_indices().nth(config.max_length()) {
        Some((end, _)) => {
            warn!(
                "ZPL string will be truncated to {} characters",
                config.max_length()
            );
            input[..end].to_string()
        }
        None => input.to_string(),
    }
}

/// [`zpl`] over a `format!` string.
///
/// Braces of the `label { ... }` syntax must be doubled, as in any format
/// string.
///
/// ```
/// let count = 3;
/// let mut parser = zpl_interpreter::zpl!("label Box {{ ^XA^FO10,10^FD{count} items^FS^XZ }}");
/// assert!(parser.parse().is_valid);
/// ```
#[macro_export]
macro_rules! zpl {
    ($($arg:tt)*) => {
        $crate::zpl(&::std::format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_zpl_test() {
        let mut parser = zpl("^XA^FO50,50^FDHello, World!^FS^XZ");
        let result = parser.parse();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.variables.is_empty());
        assert_eq!(parser.name, "Label");
    }

    #[test]
    fn multiline_zpl_test() {
        let mut parser = zpl(
            "^XA
            ^FO50,50
            ^FDHello, World!
            ^FS
            ^XZ",
        );
        assert_eq!(parser.input(), "^XA ^FO50,50 ^FDHello, World! ^FS ^XZ");
        let result = parser.parse();
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn named_label_with_variables_test() {
        let mut parser =
            zpl("label Name(message: string, count: number, flag: boolean, other: date) { ^XA^FO50,50^FDmessage^FS^XZ }");
        assert_eq!(parser.name, "Name");
        let result = parser.parse();
        assert!(result.is_valid);

        let kinds: Vec<_> = result
            .variables
            .values()
            .map(|variable| (variable.name.as_str(), variable.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("message", VariableType::String),
                ("count", VariableType::Number),
                ("flag", VariableType::Boolean),
                ("other", VariableType::String),
            ]
        );
        assert!(result.variables.values().all(|v| v.value.is_empty()));
    }

    #[test]
    fn named_label_without_variables_test() {
        let mut parser = zpl("label Name() { ^XA^FO50,50^FDStatic^FS^XZ }");
        let result = parser.parse();
        assert!(result.is_valid);
        assert!(result.variables.is_empty());
    }

    #[test]
    fn short_label_test() {
        let mut parser = zpl("label { ^XA^FO50,50^FDLabel^FS^XZ }");
        assert_eq!(parser.name, "Label");
        assert!(parser.parse().is_valid);

        let parser = zpl("label Shipping { ^XA^FO50,50^FDLabel^FS^XZ }");
        assert_eq!(parser.name, "Shipping");
    }

    #[test]
    fn unmatched_braces_test() {
        let mut parser = zpl("label Name(text: string) { ^XA^FO50,50^FDHello");
        let result = parser.parse();
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Missing ^XA start command"]);
    }

    #[test]
    fn empty_input_test() {
        let result = zpl("").parse();
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Missing ^XA start command"]);
    }

    #[test]
    fn truncation_test() {
        let config = TemplateConfig::new(20).unwrap();
        let parser = zpl_with_config("^XA^FO50,50^FDHello World^FS^XZ", &config);
        assert_eq!(parser.input(), "^XA^FO50,50^FDHello");
    }

    #[test]
    fn config_rejects_zero_test() {
        assert_eq!(TemplateConfig::new(0), Err(ConfigError::ZeroMaxLength));
        assert_eq!(TemplateConfig::default().max_length(), 4096);
    }

    #[test]
    fn macro_test() {
        let text = "Hello";
        let mut parser = crate::zpl!("label Name(text: string) {{ ^XA^FO50,50^FD{text}^FS^XZ }}");
        assert_eq!(parser.input(), "^XA^FO50,50^FDHello^FS^XZ");
        assert!(parser.parse().is_valid);
    }
}
