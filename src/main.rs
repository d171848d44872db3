//! # shardcloud-action
//!
//! Installs the ShardCloud CLI, logs in and runs a batch of `shardcloud`
//! subcommands inside a GitHub Actions job.
//!
//! ## Inputs
//!
//! | Input      | Flag         | Environment      | Default |
//! |------------|--------------|------------------|---------|
//! | `token`    | `--token`    | `INPUT_TOKEN`    | required |
//! | `commands` | `--commands` | `INPUT_COMMANDS` | none    |
//! | `workdir`  | `--workdir`  | `INPUT_WORKDIR`  | `.`     |
//!
//! One command per line, e.g. `deploy service-a --force`, is run as
//! `shardcloud deploy service-a --force`.

/// Entry point for the CLI tool.
fn main() {
    shardcloud_action::cli::run_cli();
}
