//! Stub text generation
//!
//! `member` renders one declaration at a time; `stubs` assembles rendered
//! members into whole file bodies.

pub mod member;
mod stubs;

pub use stubs::StubGenerator;
