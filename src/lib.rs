//! # shardcloud-action
//!
//! Installs the ShardCloud CLI, logs in with a token and runs a batch of
//! `shardcloud` subcommands inside a CI job, stopping at the first failure.

pub mod action;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod report;
pub mod runner;
