pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, DemoArgs, OutputFormat, RunArgs,
};
pub use runner::{run, run_demo};
