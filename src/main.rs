use anyhow::Context;
use bureau::cli::{output, output::Output, Cli};
use bureau::llm::OpenAIClient;
use bureau::{BureauConfig, ComplaintAgent, Driver, SharedRng, UsageTracker};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let colored = !cli.no_color;

    if let Err(e) = run(cli).await {
        output::error(colored, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "complaint_bureau=debug,bureau=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);

    let mut config = BureauConfig::load(cli.config.as_deref())?;
    config.apply_env();

    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(batch_size) = cli.batch_size {
        config.batch_size = batch_size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let api_key = config.require_api_key()?.to_string();
    let client = OpenAIClient::new(
        api_key,
        config.api_base.clone(),
        config.model.clone(),
        config.temperature,
    );
    let agent = ComplaintAgent::new(
        Box::new(client),
        SharedRng::from_seed_option(config.seed),
        config.tool_calling(),
    );

    let mut tracker = UsageTracker::new();
    let mut out = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    Driver::with_batch_size(config.batch_size)
        .run(&agent, &mut tracker, &mut out)
        .await
        .context("complaint batch aborted")?;

    Ok(())
}
