// Public API exports
pub mod domain;
pub mod shared;

// UI layer (components, layouts, pages, router)
pub mod app;
