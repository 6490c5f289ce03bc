pub mod clean;
pub mod deploy;
pub mod versions;
