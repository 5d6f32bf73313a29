//! Sheet rendering: coordinate transforms, grouping and PDF output.
//!
//! The pad renderer and layout driver draw through the [`Canvas`] trait;
//! [`PdfCanvas`] is the production implementation. Keeping the surface
//! behind a trait keeps the transform pipeline testable without decoding
//! PDF content streams.

pub mod canvas;
pub mod error;
pub mod font;
pub mod pad;
pub mod pdf;
pub mod sheet;

pub use canvas::{Canvas, Rgb};
pub use error::{RenderError, RenderResult};
pub use pad::render_pad;
pub use pdf::PdfCanvas;
pub use sheet::{build_sheets, SheetStyle};
