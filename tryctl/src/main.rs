use anyhow::{anyhow, Context, Result};
use clap::{arg, command, value_parser, Command};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tryit::{host, Console};

mod editor;
mod print;
mod repl;

use print::Printer;

/// Evaluate a single source text
async fn run_source(console: &mut Console, source: &str, printer: &mut Printer) -> Result<()> {
    console.execute_with(source, printer).await;
    printer.finish()
}

/// The clap CLI interface
fn cli() -> clap::Command {
    command!()
        .arg(arg!(command: -c --command <SOURCE> "If present, SOURCE is evaluated and program exits"))
        .arg(arg!([FILE] "Source file to evaluate").value_parser(value_parser!(PathBuf)))
        .arg(
            arg!(--delay <MS> "Simulated processing time in milliseconds")
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(arg!(--json "Print each outcome as a line of JSON"))
        .arg(arg!(--"no-color" "Disable colored output"))
        .subcommand(
            Command::new("docs")
                .about("Print the path to a documentation page")
                .arg(arg!(<TOPIC> "One of quick-start, tutorial, reference")),
        )
        .subcommand(Command::new("download").about("Print the project archive URL"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = cli().get_matches();

    match args.subcommand() {
        Some(("docs", sub)) => {
            let topic = sub
                .get_one::<String>("TOPIC")
                .ok_or_else(|| anyhow!("Missing documentation topic"))?;
            let path = host::doc_path(topic).ok_or_else(|| {
                let known = host::doc_topics().collect::<Vec<_>>().join(", ");
                anyhow!("Unknown documentation topic {topic} - expected one of {known}")
            })?;
            println!("{path}");
            return Ok(());
        }
        Some(("download", _)) => {
            println!("{} ({})", host::DOWNLOAD_URL, host::DOWNLOAD_FILE);
            return Ok(());
        }
        _ => (),
    }

    if args.get_flag("no-color") {
        colored::control::set_override(false);
    }

    let delay = args.get_one::<u64>("delay").copied().unwrap_or_default();
    let mut console = Console::new().with_delay(Duration::from_millis(delay));
    let mut printer = Printer::new(args.get_flag("json"));
    debug!("console delay = {:?}", console.delay());

    if let Some(source) = args.get_one::<String>("command") {
        return run_source(&mut console, source, &mut printer).await;
    }

    if let Some(path) = args.get_one::<PathBuf>("FILE") {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return run_source(&mut console, &source, &mut printer).await;
    }

    if io::stdin().is_terminal() {
        repl::run(&mut console, &mut printer).await
    } else {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .with_context(|| "Failed to read stdin")?;
        run_source(&mut console, &source, &mut printer).await
    }
}
