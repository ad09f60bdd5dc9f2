//! # einline Main Entry Point

use anyhow::Result;
use einline::cmd_args::CommandLineArgs;
use einline::{
    config, App, HttpTransport, LookupController, RequestBuilder, ResponseRenderer, SurfaceView,
};
use tokio::io::BufReader;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();

    let profile_path = config::get_profile_path();
    tracing::debug!("Loading profile '{}' from '{}'", cmd_args.profile(), profile_path);
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?;

    let credential = config::resolve_credential(cmd_args.api_key(), &profile);

    let controller = LookupController::new(
        RequestBuilder::new(profile.template().clone()),
        HttpTransport::new()?,
        ResponseRenderer::new(profile.subject()),
    );
    let view = SurfaceView::new(
        std::io::stdout(),
        cmd_args.output(),
        atty::is(atty::Stream::Stdout),
    );
    let mut app = App::new(controller, view, credential, cmd_args.verbose());

    if cmd_args.identifiers().is_empty() {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("Enter an identifier per line, Ctrl+D to quit");
        }
        app.run_interactive(BufReader::new(tokio::io::stdin())).await
    } else {
        app.run_batch(cmd_args.identifiers()).await
    }
}

fn init_tracing_subscriber() {
    let env_var = format!("{}_LOG_LEVEL", env!("CARGO_PKG_NAME").to_uppercase());
    let mut filter = EnvFilter::try_from_env(&env_var).unwrap_or_else(|_| EnvFilter::new("error"));
    for directive in ["reqwest=warn", "hyper=warn", "tokio=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
