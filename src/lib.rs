pub mod app;
pub mod config;
pub mod converter;
pub mod error;
pub mod interaction;
pub mod logging;
pub mod resources;

pub use converter::{ConversionJob, Converter, Outcome};
pub use error::ConvertError;
pub use interaction::{Interaction, NativeDialogs};
