pub mod add;
pub mod del;
pub mod export;
pub mod fs_utils;
pub mod import;
pub mod log;
pub mod notify;
