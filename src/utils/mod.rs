pub mod blueprint_file;

pub use blueprint_file::{BLUEPRINT_FILE_NAME, find_blueprint_file, read_blueprint, write_blueprint};
