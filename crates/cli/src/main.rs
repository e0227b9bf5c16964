use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use stellar_uuid::{Generator, GeneratorConfig, BACKEND_ENV_VAR};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default verbosity for this binary; `RUST_LOG` can still enable other targets.
const LOG_DIRECTIVE: &str = "uuidgen=info";

#[derive(Parser)]
#[command(name = "uuidgen")]
#[command(about = "Generate random (version 4) UUIDs")]
struct Cli {
    /// Number of UUIDs to generate
    #[arg(short = 'n', default_value_t = 1)]
    count: u64,
    /// Random backend: isaac64 or chacha20 (overrides UUIDGEN_BACKEND)
    #[arg(long)]
    backend: Option<String>,
}

/// Resolve generator configuration once at startup.
///
/// The `--backend` flag wins over the environment; neither selects the default backend.
fn resolve_config(flag: Option<&str>, env: Option<&str>) -> anyhow::Result<GeneratorConfig> {
    let config = GeneratorConfig::from_backend_name(flag.or(env))?;
    Ok(config)
}

fn log_filter(base: EnvFilter) -> anyhow::Result<EnvFilter> {
    Ok(base.add_directive(LOG_DIRECTIVE.parse()?))
}

/// Write `count` fresh UUIDs to `out`, one per line.
fn write_uuids<W: Write>(generator: &mut Generator, count: u64, out: W) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    let mut line = [b'\n'; 37];
    for _ in 0..count {
        let id = generator.new_v4();
        line[..36].copy_from_slice(&id.encode());
        out.write_all(&line)?;
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only UUIDs
    tracing_subscriber::registry()
        .with(log_filter(EnvFilter::from_default_env())?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let env_backend = std::env::var(BACKEND_ENV_VAR).ok();
    let config = resolve_config(cli.backend.as_deref(), env_backend.as_deref())?;
    tracing::info!("++ Generating {} UUIDs with {}", cli.count, config.backend());

    let mut generator =
        Generator::from_config(&config).context("failed to initialise UUID generator")?;

    match write_uuids(&mut generator, cli.count, io::stdout().lock()) {
        // Reader went away (e.g. `uuidgen -n 1000 | head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to write UUIDs"),
    }
}
