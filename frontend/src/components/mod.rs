//! UI Components for the SNAP application.
//!
//! # Layout Components
//! - [`Hero`] - Logo and page heading
//!
//! # Feature Components
//! - [`UploadSection`] - Drop zone, file picker, upload trigger and error line
//! - [`ResultsPanel`] - Fading wrapper around the results and download button
//! - [`ResultsDisplay`] - Labels, celebrities and face attributes

mod hero;
mod upload;
mod results;

pub use hero::*;
pub use upload::*;
pub use results::*;
