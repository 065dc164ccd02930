use roadprompt::{
    cli::{get_log_level_from_verbose, parse_cli, run, run_demo, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let lvl = get_log_level_from_verbose(cli.command.verbose());
    env_logger::Builder::new().filter_level(lvl).init();

    let dispatch_result = match cli.command {
        Commands::Run(args) => run(args),
        Commands::Demo(args) => run_demo(args),
    };

    if let Err(err) = dispatch_result {
        default_error_handler(err);
    }
}
