//! Parse and render ZPL labels in one call.
//!
//! ```
//! use zpl::ZplViewer;
//!
//! let output = ZplViewer::parse_and_render("^XA^FO50,50^FDHello World^FS^XZ").unwrap();
//! assert!(output.errors.is_empty());
//! assert!(!output.png().unwrap().is_empty());
//! ```

mod error;

use log::debug;
use tiny_skia::Pixmap;

pub use error::*;

pub use zpl_interpreter::{
    BarcodeItem, BarcodeType, GraphicBoxItem, GraphicFieldItem, Label, LabelParser, LayoutItem,
    ParsedLabel, TemplateConfig, TextItem, Variable, VariableType, zpl, zpl_with_config,
};
pub use zpl_parser::{catalog, tokenize};
pub use zpl_renderer::{
    EncodeError, LabelOrientation, OptionsError, RenderError, Renderer, RendererOptions, encoding,
    render,
};

/// A rendered label and the non-fatal errors collected while parsing it.
#[derive(Debug)]
pub struct RenderOutput {
    pixmap: Pixmap,
    pub errors: Vec<String>,
}

impl RenderOutput {
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    pub fn png(&self) -> Result<Vec<u8>, ZplError> {
        self.pixmap
            .encode_png()
            .map_err(|err| RenderError::Png(err.to_string()).into())
    }
}

pub struct ZplViewer {
    renderer: Renderer,
}

impl ZplViewer {
    pub fn new(options: RendererOptions) -> Result<Self, ZplError> {
        Ok(Self {
            renderer: Renderer::new(options)?,
        })
    }

    /// Parses `input`, plain ZPL or a `label { ... }` template, and renders it
    /// with default options.
    pub fn parse_and_render(input: &str) -> Result<RenderOutput, ZplError> {
        Self::new(RendererOptions::default())?.render(&mut zpl(input))
    }

    /// Renders whatever `parser` produces. Labels with errors are still drawn
    /// as long as they have printable items.
    pub fn render(&self, parser: &mut LabelParser) -> Result<RenderOutput, ZplError> {
        let ParsedLabel { label, errors, .. } = parser.parse();
        let Some(label) = label else {
            return Err(ZplError::InvalidLabel(errors));
        };
        debug!("rendering {} with {} items", parser.name, label.items.len());

        Ok(RenderOutput {
            pixmap: self.renderer.render(&label)?,
            errors,
        })
    }
}
