use clap::Parser;
use shipload::cli::batch::load_config_with_overrides;
use shipload::cli::{
    carriers, explain, handle_completions, handle_config_init, prioritize, summary, Cli, Commands,
    ConfigCommands, InputArgs,
};
use shipload::input::BatchCache;
use shipload::logging::init_tracing;

fn input_args(command: &Commands) -> Option<&InputArgs> {
    match command {
        Commands::Prioritize(args) => Some(&args.batch.input),
        Commands::Summary(args) => Some(&args.batch.input),
        Commands::Explain(args) => Some(&args.batch.input),
        Commands::Carriers(args) => Some(&args.input),
        Commands::Config(_) | Commands::Completions(_) => None,
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match input_args(&cli.command) {
        Some(args) => {
            let config = load_config_with_overrides(args)?;
            if let Err(e) = init_tracing(&config.logging) {
                eprintln!("Warning: Failed to initialize logging: {}", e);
            }
            config
        }
        None => Default::default(),
    };
    let cache = BatchCache::new();

    let output = match cli.command {
        Commands::Prioritize(args) => prioritize::handle_prioritize(&args, &config, &cache)?,
        Commands::Summary(args) => summary::handle_summary(&args, &config, &cache)?,
        Commands::Explain(args) => explain::handle_explain(&args, &config, &cache)?,
        Commands::Carriers(args) => carriers::handle_carriers(&args, &config, &cache)?,
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args)?,
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
