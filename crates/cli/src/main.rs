use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use meeting_guides::{list_operations, Arguments, Dispatcher};
use serde::Serialize;
use serde_json::json;

#[derive(Parser)]
#[command(name = "meeting-guides")]
#[command(about = "Meeting automation workflow guides", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List available guides
    List(ListArgs),

    /// Render one guide to stdout
    Render(RenderArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Print the inventory as JSON (names, summaries, input schemas)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RenderArgs {
    /// Guide name, e.g. search-guide
    operation: String,

    /// Guide argument as key=value (repeatable)
    #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    args: Vec<(String, String)>,

    /// Print {"operation", "content"} JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    operation: &'a str,
    content: Vec<String>,
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::List(args) => run_list(&args),
        Commands::Render(args) => run_render(args),
    }
}

fn run_list(args: &ListArgs) -> Result<()> {
    if args.json {
        let tools: Vec<serde_json::Value> = list_operations()
            .iter()
            .map(|op| op.inventory_entry())
            .collect();
        let payload = json!({ "count": tools.len(), "tools": tools });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("serialize guide list")?
        );
        return Ok(());
    }

    let width = list_operations()
        .iter()
        .map(|op| op.name.len())
        .max()
        .unwrap_or(0);
    for op in list_operations() {
        println!("{:width$}  {}", op.name, op.summary);
    }
    Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
    let arguments: Arguments = args.args.into_iter().collect();
    let content = Dispatcher::new().invoke(&args.operation, &arguments)?;

    if args.json {
        let output = RenderOutput {
            operation: &args.operation,
            content,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("serialize rendered guide")?
        );
    } else {
        for block in content {
            print!("{block}");
        }
    }
    Ok(())
}
