pub mod notification;

pub mod theme;

mod init;
pub use init::*;
