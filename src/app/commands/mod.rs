pub mod about;
pub mod copy;
pub mod download;
pub mod generate;
