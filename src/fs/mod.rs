pub mod beneath;
pub mod paths;
pub mod read;

pub use beneath::{open_dir_nofollow, open_file_beneath};
pub use paths::join_unchecked;
pub use read::{read_file_from_dir, read_handle, read_text, try_read_file_from_dir};
