//! Voice-to-UI: turns spoken commands into shadcn/ui React components.
//!
//! A finalised transcript is classified (create / modify / delete), applied
//! to a flat component list, and the list is re-rendered as JSX.  Create and
//! unrecognised transcripts are also matched against a library of canned
//! templates.

pub mod auth;
pub mod codegen;
pub mod command;
pub mod component;
pub mod config;
pub mod export;
pub mod session;
pub mod transcript;
