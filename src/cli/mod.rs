use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use dialoguer::Input;

use crate::catalog::{normalize_course_code, Catalog};
use crate::config::{load_config, resolve_config, Config, ConfigError};
use crate::error::{CoursegraphError, Result};
use crate::graph::builder::{BuildOptions, GraphBuilder};
use crate::graph::{viz, FingerprintMode, Session};
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "coursegraph")]
#[command(about = "Course prerequisite graph renderer", long_about = None)]
pub struct Cli {
    /// Course catalog JSON file (falls back to the config file's setting)
    #[arg(short = 'C', long, env = "COURSEGRAPH_CATALOG")]
    pub catalog: Option<PathBuf>,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a graph for the given course codes and print it
    Render(RenderArgs),
    /// List the course codes known to the catalog
    List(ListArgs),
    /// Interactive session: type course codes, `reset`, or `quit`
    Shell(ShellArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Course codes to add as roots (normalized before lookup)
    pub codes: Vec<String>,
    /// Output format: json or dot
    #[arg(short, long)]
    pub format: Option<String>,
    /// Use exact fingerprints instead of hashed sub-branch digests
    #[arg(long)]
    pub exact: bool,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub json: bool,
    /// Only list codes matching this regex
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShellArgs {
    #[arg(short, long)]
    pub format: Option<String>,
    #[arg(long)]
    pub exact: bool,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Dot,
}

pub fn run() {
    let cli = Cli::parse();
    if cli.no_color {
        console::set_colors_enabled(false);
    }
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => handle_render(args, cli.catalog, cli.config),
        Commands::List(args) => handle_list(args, cli.catalog, cli.config),
        Commands::Shell(args) => handle_shell(args, cli.catalog, cli.config),
        Commands::Completions(args) => handle_completions(args),
    }
}

fn handle_render(
    args: RenderArgs,
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let catalog = load_catalog(catalog_path, &config)?;
    let format = parse_output_format(args.format.as_deref())?;
    let options = build_options(&config, args.exact)?;

    let builder = GraphBuilder::new(&catalog, options);
    let mut session = Session::new();
    for raw in &args.codes {
        let code = normalize_course_code(raw);
        if !catalog.contains(&code) {
            output::warn(&format!("unknown course: {code}"));
            continue;
        }
        builder.add_root(&mut session, &code)?;
    }

    print_snapshot(&session, format, args.pretty)
}

fn handle_list(
    args: ListArgs,
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let catalog = load_catalog(catalog_path, &config)?;

    let filter = match args.filter.as_deref() {
        Some(pattern) => Some(regex::Regex::new(pattern).map_err(|err| {
            CoursegraphError::Other(anyhow::anyhow!("invalid filter pattern: {err}"))
        })?),
        None => None,
    };

    let codes: Vec<&str> = catalog
        .codes()
        .into_iter()
        .filter(|code| filter.as_ref().map(|re| re.is_match(code)).unwrap_or(true))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string(&codes)?);
    } else {
        for code in codes {
            println!("{code}");
        }
    }
    Ok(())
}

fn handle_shell(
    args: ShellArgs,
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let catalog = load_catalog(catalog_path, &config)?;
    let format = parse_output_format(args.format.as_deref())?;
    let options = build_options(&config, args.exact)?;

    let builder = GraphBuilder::new(&catalog, options);
    let mut session = Session::new();

    output::info("enter comma-separated course codes; `reset` clears, `quit` exits");
    loop {
        let line: String = Input::new()
            .with_prompt("course")
            .allow_empty(true)
            .interact_text()
            .map_err(|err| CoursegraphError::Other(anyhow::Error::new(err)))?;

        match apply_shell_line(&builder, &mut session, &line)? {
            ShellOutcome::Quit => break,
            ShellOutcome::Reset => print_snapshot(&session, format, args.pretty)?,
            ShellOutcome::Added(count) => {
                if count == 0 {
                    output::warn("no new courses added");
                }
                print_snapshot(&session, format, args.pretty)?;
            }
            ShellOutcome::Nothing => {}
        }
    }
    Ok(())
}

fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "coursegraph", &mut io::stdout());
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum ShellOutcome {
    Quit,
    Reset,
    /// Number of roots newly added by the line.
    Added(usize),
    Nothing,
}

fn apply_shell_line(
    builder: &GraphBuilder<'_>,
    session: &mut Session,
    line: &str,
) -> Result<ShellOutcome> {
    let trimmed = line.trim();
    match trimmed {
        "" => return Ok(ShellOutcome::Nothing),
        "quit" | "exit" => return Ok(ShellOutcome::Quit),
        "reset" => {
            session.reset();
            return Ok(ShellOutcome::Reset);
        }
        _ => {}
    }

    let mut added = 0;
    for entry in trimmed.split(',') {
        let code = normalize_course_code(entry);
        if code.is_empty() {
            continue;
        }
        if builder.add_root(session, &code)? {
            added += 1;
        }
    }
    Ok(ShellOutcome::Added(added))
}

fn load_effective_config(config_path: Option<PathBuf>) -> Result<Config> {
    match resolve_config(config_path)? {
        Some(path) => Ok(load_config(&path)?),
        None => Ok(Config::default()),
    }
}

fn load_catalog(catalog_path: Option<PathBuf>, config: &Config) -> Result<Catalog> {
    let path = catalog_path
        .or_else(|| config.catalog.file.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            CoursegraphError::Other(anyhow::anyhow!(
                "no catalog file given (use --catalog or set [catalog] file in the config)"
            ))
        })?;
    Ok(Catalog::load(&path)?)
}

fn build_options(config: &Config, exact: bool) -> Result<BuildOptions> {
    let mode = if exact {
        FingerprintMode::Exact
    } else {
        match config.render.fingerprint.as_deref() {
            Some(value) => FingerprintMode::parse(value)
                .ok_or_else(|| ConfigError::UnknownFingerprintMode(value.to_string()))?,
            None => FingerprintMode::default(),
        }
    };

    Ok(BuildOptions {
        mode,
        key_color: config.render.key_color.clone(),
        course_color: config.render.course_color.clone(),
    })
}

fn parse_output_format(value: Option<&str>) -> Result<OutputFormat> {
    match value {
        None | Some("json") => Ok(OutputFormat::Json),
        Some("dot") => Ok(OutputFormat::Dot),
        Some(other) => Err(CoursegraphError::Other(anyhow::anyhow!(
            "unknown output format: {other} (expected json or dot)"
        ))),
    }
}

fn print_snapshot(session: &Session, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", viz::render_json(session, pretty)?),
        OutputFormat::Dot => print!("{}", viz::render_dot(session)),
    }
    Ok(())
}
