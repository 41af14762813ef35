pub mod anchor;
pub mod outline;
