use std::path::PathBuf;

use anyhow::{bail, Context};
use authinfo::{
    discovery::discovery::{
        find_file, read_file, SearchPaths, DEFAULT_MAX_FILE_SIZE, DEFAULT_SYSCONF_DIR,
    },
    errors::errors::{ErrorTip, ParseError},
    parser::{handler::Control, parser::parse},
    query::query::Query,
    render_error,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// List or look up entries of an authinfo/netrc credentials file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Parse this file instead of searching for one
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Home directory to search (defaults to the current user's)
    #[arg(long)]
    home: Option<PathBuf>,

    /// System configuration directory to search
    #[arg(long, default_value = DEFAULT_SYSCONF_DIR)]
    sysconf_dir: PathBuf,

    /// Largest accepted file size in bytes, plus one
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    max_size: usize,

    /// Stop at the first syntax error and exit with failure
    #[arg(long)]
    strict: bool,

    /// Only show the first entry for this host
    #[arg(long)]
    host: Option<String>,

    /// Only show the first entry for this user
    #[arg(long)]
    user: Option<String>,

    /// Only show the first entry for this protocol
    #[arg(long)]
    protocol: Option<String>,

    /// Print passwords instead of masking them
    #[arg(long)]
    show_passwords: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn query(&self) -> Option<Query> {
        if self.host.is_none() && self.user.is_none() && self.protocol.is_none() {
            return None;
        }

        Some(Query {
            host: self.host.clone(),
            user: self.user.clone(),
            protocol: self.protocol.clone(),
        })
    }

    fn search_paths(&self) -> SearchPaths {
        let home = self
            .home
            .clone()
            .or_else(|| SearchPaths::from_env().home);
        SearchPaths::new(home, self.sysconf_dir.clone())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Tracing initialized with level: {}", level);

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => find_file(&cli.search_paths()).context("Failed to find an authinfo file")?,
    };
    info!("Using {}", path.display());

    let text = read_file(&path, cli.max_size)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path.display().to_string();

    if let Some(query) = cli.query() {
        let record = if cli.strict {
            match query.find(&text) {
                Ok(record) => record,
                Err(error) => {
                    print_error(&error, &text, &file_name);
                    bail!("{} is malformed", file_name);
                }
            }
        } else {
            query.find_lenient(&text)
        };

        match record {
            Some(record) => println!("{}", record.render(cli.show_passwords)),
            None => bail!("No matching entry in {}", file_name),
        }
        return Ok(());
    }

    let mut errors = 0;
    parse(
        &text,
        |record| {
            println!("{}", record.render(cli.show_passwords));
            Control::Continue
        },
        |error| {
            errors += 1;
            print_error(&error, &text, &file_name);
            Control::from(cli.strict)
        },
    );

    if cli.strict && errors > 0 {
        bail!("{} is malformed", file_name);
    }

    Ok(())
}

fn print_error(error: &ParseError, text: &[u8], file_name: &str) {
    eprint!("{}", render_error(error, text, file_name));

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("   = help: {}", tip);
    }
}
