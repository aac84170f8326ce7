pub mod environment;
pub mod paths;

pub use environment::get_data_root;
pub use paths::{
    JSON_EXTENSION, MAX_FILE_SIZE_BYTES, display_name, is_json_filename, relative_child_path,
    strip_json_extension, validate_file_size,
};
