pub mod completions;
pub mod init;
pub mod redact;
pub mod summary;
pub mod verify;
