use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prompt_config_core::{Domain, DomainSchema, merge_config};
use prompt_config_parser::{ParsedCommand, parse_config_and_prompt};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// CLI-specific domain selector with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliDomain {
    Chat,
    Image,
}

impl From<CliDomain> for Domain {
    fn from(domain: CliDomain) -> Self {
        match domain {
            CliDomain::Chat => Domain::Chat,
            CliDomain::Image => Domain::Image,
        }
    }
}

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "prompt-config")]
#[command(about = "Split slash-command text into a validated config and a prompt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse command text into a config object and the remaining prompt.
    Parse(ParseArgs),
    /// Parse command text and merge the config over the domain defaults.
    Resolve(ResolveArgs),
    /// Dump a domain's key vocabulary.
    Schema(SchemaArgs),
    /// Dump a domain's strict default configuration.
    Defaults(DefaultsArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Command text to interpret (reads stdin when omitted and --input is unset).
    text: Option<String>,
    /// Domain vocabulary to parse against.
    #[arg(long)]
    domain: CliDomain,
    /// Read command text from a file instead of the command line.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Command text to interpret (reads stdin when omitted and --input is unset).
    text: Option<String>,
    /// Domain vocabulary to parse against.
    #[arg(long)]
    domain: CliDomain,
    /// Read command text from a file instead of the command line.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct SchemaArgs {
    /// Domain vocabulary to dump.
    #[arg(long)]
    domain: CliDomain,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct DefaultsArgs {
    /// Domain whose defaults to dump.
    #[arg(long)]
    domain: CliDomain,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

/// A parsed config merged over its domain defaults, ready for a
/// generation client.
#[derive(Debug, Serialize)]
struct ResolvedCommand {
    config: prompt_config_core::RequestConfig,
    prompt: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Resolve(args) => run_resolve(args),
        Command::Schema(args) => run_schema(args),
        Command::Defaults(args) => run_defaults(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let raw = read_command_text(args.text, args.input)?;
    let parsed: ParsedCommand = parse_config_and_prompt(args.domain.into(), &raw);
    println!("{}", render(&parsed, args.format)?);
    Ok(())
}

fn run_resolve(args: ResolveArgs) -> Result<(), String> {
    let raw = read_command_text(args.text, args.input)?;
    let domain: Domain = args.domain.into();
    let schema = DomainSchema::for_domain(domain);
    let parsed = parse_config_and_prompt(domain, &raw);

    let resolved = ResolvedCommand {
        config: merge_config(&schema.defaults(), &parsed.config),
        prompt: parsed.prompt,
    };
    println!("{}", render(&resolved, args.format)?);
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<(), String> {
    let schema = DomainSchema::for_domain(args.domain.into());
    println!("{}", render(&schema, args.format)?);
    Ok(())
}

fn run_defaults(args: DefaultsArgs) -> Result<(), String> {
    let defaults = DomainSchema::for_domain(args.domain.into()).defaults();
    println!("{}", render(&defaults, args.format)?);
    Ok(())
}

/// Resolves the command text from the positional argument, an input file,
/// or stdin, in that order of precedence.
fn read_command_text(text: Option<String>, input: Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        return fs::read_to_string(&path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()));
    }
    if let Some(text) = text {
        return Ok(text);
    }
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    Ok(raw)
}

fn render<T: Serialize>(value: &T, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|err| format!("Failed to serialize output as JSON: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(value)
            .map(|raw| raw.trim_end().to_string())
            .map_err(|err| format!("Failed to serialize output as YAML: {err}")),
    }
}
