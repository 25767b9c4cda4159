//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together via bootstrap; command dispatch routes
//! to handlers which delegate to the repositories.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lapsel_cli::{Cli, CliConfig, Commands, ComponentCommand, LaptopCommand, bootstrap, handlers};
use lapsel_core::ComponentKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose turns on debug output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let mut config = CliConfig::with_defaults()?;
    if let Some(path) = cli.database {
        config = config.with_database(path);
    }
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Cpu { command } => {
            dispatch_component(&ctx, ComponentKind::Cpu, command).await?;
        }
        Commands::Gpu { command } => {
            dispatch_component(&ctx, ComponentKind::Gpu, command).await?;
        }
        Commands::Laptop { command } => match command {
            LaptopCommand::Add {
                image,
                description,
                composition,
                url,
                price,
                cpu_id,
                gpu_id,
                cpu,
                gpu,
            } => {
                handlers::laptop::add(
                    &ctx,
                    handlers::laptop::AddArgs {
                        image,
                        description,
                        composition,
                        url,
                        price,
                        cpu_id,
                        gpu_id,
                        cpu,
                        gpu,
                    },
                )
                .await?;
            }
            LaptopCommand::List => {
                handlers::laptop::list(&ctx).await?;
            }
            LaptopCommand::Remove { id } => {
                handlers::laptop::remove(&ctx, id).await?;
            }
        },
        Commands::Rank {
            cpu_weight,
            gpu_weight,
            quantity,
        } => {
            handlers::rank::execute(&ctx, cpu_weight, gpu_weight, quantity).await?;
        }
        Commands::Import { file } => {
            handlers::import::execute(&ctx, &file).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&ctx)?;
        }
    }

    Ok(())
}

async fn dispatch_component(
    ctx: &lapsel_cli::CliContext,
    kind: ComponentKind,
    command: ComponentCommand,
) -> anyhow::Result<()> {
    match command {
        ComponentCommand::Add { name, url, score } => {
            handlers::component::add(ctx, kind, &name, &url, score).await
        }
        ComponentCommand::List => handlers::component::list(ctx, kind).await,
        ComponentCommand::Remove { id, force } => {
            handlers::component::remove(ctx, kind, id, force).await
        }
    }
}
