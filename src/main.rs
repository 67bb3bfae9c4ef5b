use std::io::{self, Write};
use std::process::ExitCode;

use ascii_julia::{
    JuliaCommand, PlainTextPresenter, Reply, ReplyPresenterPort, Resp2Presenter, Resp3Presenter,
};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Protocol {
    Text,
    Resp2,
    Resp3,
}

/// Prints an ASCII-art Julia set drawn from a random seed.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Columns, clamped to 1..=100 (default 80)
    #[arg(allow_negative_numbers = true)]
    columns: Option<String>,

    /// Rows, clamped to 1..=100 (default 40)
    #[arg(allow_negative_numbers = true)]
    rows: Option<String>,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// How the reply is framed on stdout
    #[arg(long, value_enum, default_value_t = Protocol::Text)]
    protocol: Protocol,

    /// Log at info level
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level, including the drawn seed
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut command = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded generator");
            JuliaCommand::new(StdRng::seed_from_u64(seed))
        }
        None => JuliaCommand::from_os_rng(),
    };

    let mut argv = vec!["julia".to_string()];
    argv.extend(cli.columns);
    argv.extend(cli.rows);

    let reply = command.execute(argv.as_slice());

    write_reply(
        cli.protocol,
        &reply,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    Ok(match reply {
        Reply::Error(_) => ExitCode::FAILURE,
        Reply::Verbatim { .. } => ExitCode::SUCCESS,
    })
}

/// Frames `reply` for `protocol`. RESP replies, errors included, go to
/// `out`. In text mode only the art goes to `out` and errors go to `err`.
fn write_reply<O, E>(
    protocol: Protocol,
    reply: &Reply,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    match (protocol, reply) {
        (Protocol::Text, Reply::Error(_)) => {
            PlainTextPresenter::new().present(reply, err)?;
            err.flush()
        }
        (Protocol::Text, Reply::Verbatim { .. }) => {
            PlainTextPresenter::new().present(reply, out)?;
            out.flush()
        }
        (Protocol::Resp2, _) => {
            Resp2Presenter::new().present(reply, out)?;
            out.flush()
        }
        (Protocol::Resp3, _) => {
            Resp3Presenter::new().present(reply, out)?;
            out.flush()
        }
    }
}
