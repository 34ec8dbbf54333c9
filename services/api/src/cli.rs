use crate::demo::{
    run_demo, run_materials_import, run_recommend, DemoArgs, ImportMaterialsArgs, RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use packaging_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Smart Packaging Advisor",
    about = "Serve and exercise the packaging recommendation engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Produce packaging recommendations for one product against the file catalog
    Recommend(RecommendArgs),
    /// Run a seeded end-to-end recommendation walkthrough
    Demo(DemoArgs),
    /// Catalog material management
    Materials {
        #[command(subcommand)]
        command: MaterialsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MaterialsCommand {
    /// Bulk-load materials into the catalog from a CSV export
    Import(ImportMaterialsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
        Command::Materials {
            command: MaterialsCommand::Import(args),
        } => run_materials_import(args),
    }
}
