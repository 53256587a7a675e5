use agroeye::api::{ResultsQuery, SortOrder};
use agroeye::commands::{
    self,
    config::{Config, Overrides, debug_enabled},
    services,
};
use agroeye::runtime::RealRuntime;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// agroeye - plant disease diagnosis client
///
/// Send leaf images to the AgroEye backend, browse stored results and look up
/// disease reference entries.
///
/// AGROEYE_DEBUG=true enables debug logging.
///
/// Examples:
///   agroeye predict leaf.jpg          # Diagnose an image
///   agroeye results list --size 5     # Show the five most recent results
#[derive(Parser, Debug)]
#[command(author, version = env!("AGROEYE_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (defaults to http://localhost:8000)
    #[arg(long = "api-url", env = "AGROEYE_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Model service base URL (defaults to http://localhost:8001)
    #[arg(
        long = "model-url",
        env = "AGROEYE_MODEL_URL",
        value_name = "URL",
        global = true
    )]
    pub model_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Diagnose a leaf image
    Predict(PredictArgs),

    /// Browse and manage stored results
    #[command(subcommand)]
    Results(ResultsCommand),

    /// Inspect the backend's model
    #[command(subcommand)]
    Model(ModelCommand),

    /// Show backend health
    Health(HealthArgs),

    /// Check whether the backend answers at all
    Probe,

    /// Look up disease reference entries
    Disease(DiseaseArgs),

    /// Development proxy helpers
    #[command(subcommand)]
    Proxy(ProxyCommand),
}

#[derive(clap::Args, Debug)]
pub struct PredictArgs {
    /// Image file to upload
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Send the image straight to the model service
    #[arg(long)]
    pub ensemble: bool,
}

#[derive(clap::Subcommand, Debug)]
enum ResultsCommand {
    /// List stored results, newest first by default
    List(ListArgs),

    /// Show one stored result
    Show {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Delete one stored result
    Delete {
        #[arg(value_name = "ID")]
        id: u64,
    },
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value_t = agroeye::api::DEFAULT_PAGE)]
    pub page: u32,

    #[arg(long, default_value_t = agroeye::api::DEFAULT_PAGE_SIZE)]
    pub size: u32,

    /// Only show results of this class
    #[arg(long = "class-name", value_name = "NAME")]
    pub class_name: Option<String>,

    /// Sort order by creation time (asc or desc)
    #[arg(long, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,
}

#[derive(clap::Subcommand, Debug)]
enum ModelCommand {
    /// Whether the model is loaded
    Status,
    /// Model metadata as reported by the backend
    Info,
}

#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Ask the model service instead of the backend
    #[arg(long)]
    pub model: bool,
}

#[derive(clap::Args, Debug)]
pub struct DiseaseArgs {
    /// Classifier label, e.g. Tomato___Late_blight
    #[arg(value_name = "LABEL", required_unless_present = "list")]
    pub label: Option<String>,

    /// List every known label
    #[arg(long, conflicts_with = "label")]
    pub list: bool,
}

#[derive(clap::Subcommand, Debug)]
enum ProxyCommand {
    /// Show where a request path would be forwarded
    Route {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Forward one bodiless request upstream and print the response
    Forward {
        #[arg(value_name = "PATH")]
        path: String,

        #[arg(long, short = 'X', default_value = "GET")]
        method: reqwest::Method,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let runtime = RealRuntime;
    let filter = if debug_enabled(&runtime) { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let cli = Cli::parse();
    match run(&runtime, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", commands::describe_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(runtime: &RealRuntime, cli: Cli) -> Result<()> {
    let config = Config::load(
        runtime,
        Overrides {
            api_url: cli.api_url,
            model_url: cli.model_url,
        },
    );
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Predict(args) if args.ensemble => {
            let model = services::build_model(&config)?;
            commands::predict_ensemble(runtime, &model, &args.image, &mut out).await
        }
        Commands::Predict(args) => {
            let backend = services::build_backend(&config)?;
            commands::predict(runtime, &backend, &args.image, &mut out).await
        }
        Commands::Results(command) => {
            let backend = services::build_backend(&config)?;
            match command {
                ResultsCommand::List(args) => {
                    let mut query = ResultsQuery::new(args.page, args.size).with_order(args.order);
                    if let Some(class_name) = args.class_name {
                        query = query.with_class_name(class_name);
                    }
                    commands::list_results(&backend, &query, &mut out).await
                }
                ResultsCommand::Show { id } => commands::show_result(&backend, id, &mut out).await,
                ResultsCommand::Delete { id } => {
                    commands::delete_result(&backend, id, &mut out).await
                }
            }
        }
        Commands::Model(command) => {
            let backend = services::build_backend(&config)?;
            match command {
                ModelCommand::Status => commands::model_status(&backend, &mut out).await,
                ModelCommand::Info => commands::model_info(&backend, &mut out).await,
            }
        }
        Commands::Health(args) if args.model => {
            let model = services::build_model(&config)?;
            commands::model_health(&model, &mut out).await
        }
        Commands::Health(_) => {
            let backend = services::build_backend(&config)?;
            commands::health(&backend, &mut out).await
        }
        Commands::Probe => {
            let backend = services::build_backend(&config)?;
            commands::probe(&backend, &mut out).await
        }
        Commands::Disease(args) => match args.label {
            Some(label) => commands::disease(&label, &mut out),
            None => commands::list_diseases(&mut out),
        },
        Commands::Proxy(ProxyCommand::Route { path }) => {
            commands::route(&config.proxy, &path, &mut out)
        }
        Commands::Proxy(ProxyCommand::Forward { path, method }) => {
            let proxy = services::build_proxy(&config)?;
            commands::forward(&proxy, method, &path, &mut out).await
        }
    }
}
