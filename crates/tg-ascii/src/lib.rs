/// Image-to-glyph conversion engine for termglyph.
///
/// Pure, single-threaded stages composed by [`pipeline::FramePipeline`].
pub mod contrast;
pub mod edge;
pub mod glyph;
pub mod luminance;
pub mod pipeline;
pub mod resample;

pub use pipeline::{FramePipeline, render};
