use anyhow::{Context, Result};
use log::{debug, info, warn};
use markdown_meta_config::Config;
use markdown_meta_engine::{Markdown, MetaOptions, MetaSession, io};
use std::{env, path::PathBuf, process};

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    table: bool,
    meta: bool,
    save_table: bool,
    path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut parsed = Args::default();
    let mut path = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--table" => parsed.table = true,
            "--meta" => parsed.meta = true,
            "--save-table" => parsed.save_table = true,
            flag if flag.starts_with("--") => return None,
            file if path.is_none() => path = Some(PathBuf::from(file)),
            _ => return None,
        }
    }
    if path.is_none() && !parsed.save_table {
        return None;
    }
    parsed.path = path;
    Some(parsed)
}

/// `--table` wins; otherwise the config file decides.
fn table_enabled(args: &Args) -> bool {
    if args.table {
        return true;
    }
    match Config::load() {
        Ok(Some(config)) => config.table,
        Ok(None) => {
            debug!("no config at {}", Config::config_path().display());
            false
        }
        Err(e) => {
            warn!("ignoring config: {e}");
            false
        }
    }
}

/// Turns table rendering on in the config file, keeping any other settings.
fn save_table_setting() -> Result<()> {
    let path = Config::config_path();
    let mut config = Config::load()?.unwrap_or_default();
    config.table = true;
    config
        .save()
        .with_context(|| format!("writing {}", path.display()))?;
    info!("saved table = true to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        let name = args.first().map(String::as_str).unwrap_or("markdown-meta-cli");
        eprintln!("Usage: {name} [--table] [--meta] [--save-table] <file.md>");
        eprintln!(
            "Table rendering can also be enabled in {}",
            Config::config_path().display()
        );
        process::exit(1);
    };

    if parsed.save_table {
        save_table_setting()?;
    }
    let Some(path) = parsed.path.as_deref() else {
        return Ok(());
    };

    let source =
        io::read_document(path).with_context(|| format!("reading {}", path.display()))?;

    let options = MetaOptions {
        table: table_enabled(&parsed),
    };
    let mut session = MetaSession::new();
    let html = Markdown::new(options).convert(&source, &mut session);

    if let Some(err) = session.error() {
        eprintln!(
            "Warning: front matter in {} could not be read: {err}",
            path.display()
        );
    }

    if parsed.meta {
        if let Ok(Some(value)) = session.deserialize::<serde_yaml::Value>() {
            print!("{}", serde_yaml::to_string(&value)?);
        } else if !session.has_front_matter() {
            eprintln!("No front matter in {}", path.display());
        }
        return Ok(());
    }

    print!("{html}");
    Ok(())
}
