// Declare modules for the library build
pub mod check;
pub mod cli;
pub mod codec;
pub mod error;
pub mod form;
pub mod models;
pub mod utils;

pub use codec::{DependencyCodec, EnvVarCodec};
pub use error::{Error, FormatError, Result};
pub use models::{BlueprintDocument, Category, DependencyEntry, EnvVarEntry, RowShape};
