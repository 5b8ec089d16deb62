//! Property and scenario tests run against the public API.

mod list;
mod tree;
