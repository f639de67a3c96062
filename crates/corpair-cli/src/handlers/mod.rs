pub mod browse;
pub mod build;
pub mod list;
pub mod show;
