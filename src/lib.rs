//! Trazar - lightweight call tracer with call-entry tree output
//!
//! This library turns a stream of step-level observation events into an
//! indented, human-readable log of call entries, with filtering by namespace
//! or source-file origin. The engine is runtime-agnostic: anything able to
//! report "who is the immediate caller right now" can act as an observation
//! source, including the bundled JSONL replay source.

pub mod cli;
pub mod config;
pub mod filter;
pub mod format;
pub mod replay;
pub mod session;
pub mod site;
pub mod source;
pub mod stack;
