pub mod app;
pub mod fetch;
pub mod strip;
