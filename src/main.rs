use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use jtb_config::JtbConfig;
use jtb_parser::{HtmlParser, init_diagnostics, schema};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: jtb [<html-file> | -] [--config <jtb.toml>] [--mode <jtb_annotated|generic>] [--threshold <0-100>] [--pretty] [--validate]";

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let mut input: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut mode: Option<String> = None;
    let mut threshold: Option<u32> = None;
    let mut pretty = false;
    let mut validate = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    bail!("--config expects a path");
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--mode" => {
                if i + 1 >= args.len() {
                    bail!("--mode expects jtb_annotated or generic");
                }
                mode = Some(args[i + 1].clone());
                i += 2;
            }
            "--threshold" => {
                if i + 1 >= args.len() {
                    bail!("--threshold expects a number");
                }
                let value = args[i + 1]
                    .parse::<u32>()
                    .with_context(|| format!("invalid --threshold `{}`", args[i + 1]))?;
                threshold = Some(value);
                i += 2;
            }
            "--pretty" => {
                pretty = true;
                i += 1;
            }
            "--validate" => {
                validate = true;
                i += 1;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(ExitCode::SUCCESS);
            }
            "-" => {
                input = None;
                i += 1;
            }
            other if other.starts_with("--") => {
                eprintln!("{USAGE}");
                bail!("unknown flag {other}");
            }
            _ => {
                if input.is_some() {
                    bail!("only one input file may be given");
                }
                input = Some(PathBuf::from(&args[i]));
                i += 1;
            }
        }
    }

    let mut config = match &config_path {
        Some(path) => JtbConfig::load_from_file(path)?,
        None => JtbConfig::load_or_default(),
    };
    config.merge_with_env();
    if mode.is_some() {
        config.parser.mode = mode;
    }
    if let Some(threshold) = threshold {
        config.parser.recognition_threshold = threshold;
    }
    if let Some(categories) = config.parser.diagnostics.as_deref() {
        init_diagnostics(categories);
    }
    let options = config.parser.parse_options()?;

    let html = match &input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read html from stdin")?;
            buf
        }
    };

    let mut parser = HtmlParser::with_options(options);
    let result = parser.parse(&html);
    if validate || config.output.validate {
        schema::validate_parse_result(&result)?;
    }

    let json = if pretty || config.output.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    println!("{json}");

    if let Some(doc) = result.document() {
        tracing::info!(
            mode = doc.mode.as_str(),
            modules = doc.stats.modules_count,
            "conversion finished"
        );
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
