//! clipwatch - Windows clipboard viewer-chain monitor
//!
//! Joins the clipboard viewer chain with a hidden window, classifies each
//! clipboard change as files, text or an image, and reports it together
//! with the application that owned the foreground window.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clipboard payloads, source snapshots, monitor state, config
//! - **Application**: Use cases (resolver, chain participant, dispatcher,
//!   monitor) and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Win32, TOML config store)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
