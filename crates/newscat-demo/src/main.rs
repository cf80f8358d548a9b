use newscat_demo::cli::{Cli, Commands};
use newscat_demo::config::DemoConfig;
use newscat_demo::server::{routes::user_message, run_server};
use newscat_demo::state::AppState;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let args = cli.command.config_args();
    init_logging(args.verbose);

    let config = DemoConfig::load(args)?;

    match cli.command {
        Commands::Start {
            port,
            address,
            assets,
            ..
        } => {
            let mut config = config;
            if assets.is_some() {
                config.assets_dir = assets;
            }

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;
            let state = AppState::load(config)?;

            println!();
            println!("  ╔═══════════════════════════════════════════════╗");
            println!("  ║                                               ║");
            println!("  ║   ███╗   ██╗███████╗██╗    ██╗███████╗        ║");
            println!("  ║   ████╗  ██║██╔════╝██║    ██║██╔════╝        ║");
            println!("  ║   ██╔██╗ ██║█████╗  ██║ █╗ ██║███████╗        ║");
            println!("  ║   ██║╚██╗██║██╔══╝  ██║███╗██║╚════██║        ║");
            println!("  ║   ██║ ╚████║███████╗╚███╔███╔╝███████║  CAT   ║");
            println!("  ║   ╚═╝  ╚═══╝╚══════╝ ╚══╝╚══╝ ╚══════╝        ║");
            println!("  ║                                               ║");
            println!("  ║         News article categorization           ║");
            println!("  ╚═══════════════════════════════════════════════╝");
            println!();
            println!("  Models:  {}", state.dispatcher.model_names().join(", "));
            println!(
                "  Labels:  {}",
                state.dispatcher.labels().categories().collect::<Vec<_>>().join(", ")
            );
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr).await?;
        }

        Commands::Classify { model, text, .. } => {
            let state = AppState::load(config)?;

            match state.dispatcher.classify_text(&text, &model) {
                Ok(prediction) => println!("Text Categorized as: {}", prediction.category),
                Err(e) => {
                    eprintln!("{}", user_message(&e, state.dispatcher.model_names()));
                    std::process::exit(1);
                }
            }
        }

        Commands::Models { .. } => {
            let state = AppState::load(config)?;

            for (name, classifier) in state.dispatcher.registry().iter() {
                match state.descriptions.get(name) {
                    Some(description) => {
                        println!("{:<24} {:<20} {}", name, classifier.kind(), description)
                    }
                    None => println!("{:<24} {}", name, classifier.kind()),
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "newscat=debug,newscat_demo=debug,newscat_classifiers=debug,tower_http=debug"
    } else {
        "newscat=info,newscat_demo=info,newscat_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
