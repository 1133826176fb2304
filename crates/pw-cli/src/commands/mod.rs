//! Command implementations

pub mod create;
pub mod init;
pub mod status;
pub mod up;
