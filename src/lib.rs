//! Embeds shader sources into generated C++ headers.

pub mod build_tasks;
pub mod header;
pub mod strip;
pub mod util;

pub use header::{HeaderConfig, HeaderStyle, generate_header};
