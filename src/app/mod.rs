pub mod components;
pub mod layouts;
pub mod navigation;
pub mod pages;
pub mod routes;

// Re-export the application root
pub use routes::App;
