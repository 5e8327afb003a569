pub mod clipping;
pub mod clippings_txt;
pub mod convert;
pub mod error;
pub mod grouper;
pub mod renderer;
