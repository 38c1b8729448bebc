mod dependency;
mod env_var;
pub mod lines;

pub use dependency::DependencyCodec;
pub use env_var::EnvVarCodec;
pub use lines::{
    DecodedLines, LineError, decode_dependencies, decode_env_vars, render_dependencies,
    render_env_vars,
};
