pub mod error;
pub mod project;
pub mod state;

pub use error::*;
pub use project::{CONFIG_FILE, CONFIG_PATH_ENV, ProjectConfig, find_config_file};
pub use state::{BucketRecord, STATE_FILE, StateStore};
