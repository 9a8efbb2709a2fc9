use std::{fmt::Display, path::PathBuf, process::exit};

use clap::Parser;
use listing::{list_dependency_names, Listing};
use metadata::manifest::DepSection;
use render::{render, Style};

mod error;
mod listing;
mod metadata;
mod render;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let opts = CliOpts::parse();

    match run(&opts).await {
        Ok(()) => exit(0),
        Err(e) => {
            log(format!("Listing dependencies failed: {e}"));
            exit(-1)
        }
    }
}

async fn run(opts: &CliOpts) -> error::Result<()> {
    let names = match list_dependency_names(opts).await? {
        Listing::Names(names) => names,
        Listing::NoManifest => return Ok(()),
    };

    println!("{}", render(opts.style(), &names)?);

    Ok(())
}

#[derive(Parser, Clone)]
#[command(author, version, about)]
struct CliOpts {
    #[arg(short, long, env = "NPMDEPS_MANIFEST", default_value = metadata::MANIFEST_FILE,
        help = "The package.json to read. A directory means the package.json inside it.")]
    manifest: PathBuf,

    #[arg(long, env = "NPMDEPS_DEV", default_value_t = false,
        help = "Also list devDependencies")]
    dev: bool,

    #[arg(long, env = "NPMDEPS_OPTIONAL", default_value_t = false,
        help = "Also list optionalDependencies")]
    optional: bool,

    #[arg(long, env = "NPMDEPS_PEER", default_value_t = false,
        help = "Also list peerDependencies")]
    peer: bool,

    #[arg(long, env = "NPMDEPS_MISSING_AS_EMPTY", default_value_t = false,
        help = "Treat a manifest without a 'dependencies' field as having none instead of failing")]
    missing_as_empty: bool,

    #[arg(long, env = "NPMDEPS_JSON", default_value_t = false,
        help = "Print the names as a JSON array")]
    json: bool,

    #[arg(short, long, env = "NPMDEPS_VERBOSE", default_value_t = false,
        help = "Verbose logging to stderr")]
    verbose: bool,
}

impl CliOpts {
    fn style(&self) -> Style {
        if self.json { Style::Json } else { Style::Inspect }
    }

    fn sections(&self) -> Vec<DepSection> {
        let mut sections = vec![DepSection::Dependencies];

        if self.dev {
            sections.push(DepSection::Dev);
        }

        if self.optional {
            sections.push(DepSection::Optional);
        }

        if self.peer {
            sections.push(DepSection::Peer);
        }

        sections
    }
}

fn now() -> String {
    chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// stdout carries the listing, everything else goes to stderr
fn log<M: Display>(msg: M) {
    eprintln!("{} {msg}", now());
}
