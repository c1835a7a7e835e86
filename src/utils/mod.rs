pub mod environment;
pub mod paths;
pub mod timestamps;

pub use environment::{CACHE_DIR_ENV, get_storage_dir};
pub use paths::{encode_storage_key, validate_storage_key};
pub use timestamps::{format_age, format_millis};
