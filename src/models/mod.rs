pub mod blueprint;
pub mod dependency;
pub mod env_var;

pub use blueprint::BlueprintDocument;
pub use dependency::{Category, DependencyEntry, RowShape};
pub use env_var::EnvVarEntry;
