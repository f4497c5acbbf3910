mod rectangle;

pub(crate) use rectangle::{RectDim, Rectangle};
