//! faqnav library exports for testing

pub mod content;
pub mod core;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;
