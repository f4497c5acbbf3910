use thiserror::Error;
use zpl_interpreter::{CommandError, ConfigError, GraphicError, ProduceError};
use zpl_parser::ParseError;
use zpl_renderer::{EncodeError, OptionsError, RenderError};

#[derive(Debug, Error)]
pub enum ZplError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Graphic(#[from] GraphicError),
    #[error("Label has nothing to render: {}", .0.join("; "))]
    InvalidLabel(Vec<String>),
    #[error(transparent)]
    Produce(#[from] ProduceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
