pub mod format;
pub mod path;
