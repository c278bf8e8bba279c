pub mod shell;

pub use shell::{AppShell, LayoutShell};
