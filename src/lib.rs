//! Core library for the `issue-loadtest` CLI.
//!
//! The binary drives an issue-tracking API with batches of `Create`,
//! `GetState` and `Cancel` calls. This crate holds the pieces it is built
//! from: the HTTP transport, the jittered batch dispatcher, outcome
//! reporting, CLI argument types and configuration loading.
pub mod app;
pub mod args;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod http;
pub mod report;
