//! CLI for `tryit-catalog`.
//!
//! # Subcommands
//!
//! ```text
//! tryit list    --catalog docs/catalog.yaml
//! tryit show    --catalog docs/catalog.yaml create-alert
//! tryit snippet --catalog docs/catalog.yaml create-alert \
//!   --config docs/tryit.yaml \
//!   --set symbol=ACME --set scheduled=scheduled \
//!   --lang curl --lang python
//! tryit check   --catalog docs/catalog.yaml
//! ```

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tryit_catalog::{Catalog, Endpoint, ProjectConfig};
use tryit_schema::{on_field_change, validate_for_submit, FieldSpec, ValueState};

/// Inspect API catalogs and render request payloads and client snippets.
#[derive(Parser)]
#[command(name = "tryit", version, about)]
enum Cli {
    /// List every endpoint (method, path, id, title).
    List(CatalogArgs),

    /// Describe one endpoint: its fields and documented responses.
    Show(ShowArgs),

    /// Fill in an endpoint's fields and print payload and code snippets.
    ///
    /// Each `--set` is applied in order through the same change handling an
    /// interactive form uses, so conditional fields appear and disappear as
    /// their guards change.
    Snippet(SnippetArgs),

    /// Validate a catalog file and report what it contains.
    Check(CatalogArgs),
}

#[derive(Parser)]
struct CatalogArgs {
    /// Path to the endpoint catalog YAML file.
    #[arg(short = 'C', long)]
    catalog: PathBuf,
}

#[derive(Parser)]
struct ShowArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Endpoint id.
    id: String,
}

#[derive(Parser)]
struct SnippetArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Endpoint id.
    id: String,

    /// Path to a project config YAML file (base URL, headers, languages).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field assignment as `name=value`. Repeatable; applied in order.
    #[arg(short, long = "set", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// Snippet language (name or alias). Repeatable.
    /// Overrides `languages` from the config file.
    #[arg(short, long = "lang")]
    lang: Vec<String>,

    /// Server URL. Overrides `base_url` from the config file.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse() {
        Cli::List(args) => run_list(&args),
        Cli::Show(args) => run_show(&args),
        Cli::Snippet(args) => run_snippet(&args),
        Cli::Check(args) => run_check(&args),
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::load(path).with_context(|| format!("Failed to load catalog: {}", path.display()))
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn run_list(args: &CatalogArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    for endpoint in catalog.endpoints() {
        println!(
            "{:<7} {:<32} {:<24} {}",
            endpoint.method(),
            endpoint.path(),
            endpoint.id(),
            endpoint.title()
        );
    }
    Ok(())
}

fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog.catalog)?;
    let endpoint = catalog.endpoint(&args.id)?;

    println!("{} {}", endpoint.method(), endpoint.path());
    if !endpoint.title().is_empty() {
        println!("{}", endpoint.title());
    }
    if let Some(description) = endpoint.description() {
        println!();
        println!("{description}");
    }

    println!();
    println!("Fields: {}", endpoint.schema().len());
    for field in endpoint.schema().fields() {
        println!("  {}", describe_field(field));
    }

    println!();
    println!("Responses: {}", endpoint.responses().len());
    for response in endpoint.responses() {
        println!("  {} {}", response.status, response.description);
        if let Some(example) = &response.example {
            let pretty = serde_json::to_string_pretty(example)?;
            for line in pretty.lines() {
                println!("      {line}");
            }
        }
    }
    Ok(())
}

fn describe_field(field: &FieldSpec) -> String {
    let mut line = format!("{} ({})", field.name, field.kind);
    if field.required {
        line.push_str(" required");
    }
    if field.hidden {
        line.push_str(" hidden");
    }
    if !field.options.is_empty() {
        line.push_str(&format!(" options={:?}", field.options));
    }
    if let Some(default) = &field.default_value {
        line.push_str(&format!(" default={default}"));
    }
    if let Some(cond) = &field.required_condition {
        let values: Vec<String> = cond.activating_values.iter().map(ToString::to_string).collect();
        line.push_str(&format!(
            " when {} in [{}]",
            cond.depends_on_field,
            values.join(", ")
        ));
    }
    if let Some(description) = &field.description {
        line.push_str(&format!(" - {description}"));
    }
    line
}

fn run_snippet(args: &SnippetArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog.catalog)?;
    let endpoint = catalog.endpoint(&args.id)?;

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config: {}", path.display());
            ProjectConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?
        }
        None => ProjectConfig::default(),
    };
    if let Some(url) = &args.base_url {
        config = config.base_url(url);
    }
    if !args.lang.is_empty() {
        let names: Vec<&str> = args.lang.iter().map(String::as_str).collect();
        config = config.languages(&names);
    }

    let state = fill(endpoint, &args.set)?;
    let checked = validate_for_submit(endpoint.schema(), &state);
    let problems: Vec<(&String, &String)> =
        checked.errors.iter().filter(|(_, e)| !e.is_empty()).collect();
    if !problems.is_empty() {
        println!("Field errors:");
        for (name, error) in &problems {
            println!("  {name}: {error}");
        }
        println!();
    }

    println!("Payload:");
    println!(
        "{}",
        tryit_schema::serialize_payload(endpoint.schema(), &checked.values)
    );

    let snippets = endpoint
        .snippets(&config, &checked.values)
        .with_context(|| format!("Failed to assemble request for '{}'", endpoint.id()))?;
    for snippet in snippets {
        println!();
        println!("--- {} ---", snippet.label);
        print!("{}", snippet.code);
    }
    Ok(())
}

/// Apply `--set` assignments in order, starting from the schema defaults.
fn fill(endpoint: &Endpoint, assignments: &[(String, String)]) -> anyhow::Result<ValueState> {
    let schema = endpoint.schema();
    let mut state = ValueState::bind(schema);
    for (name, raw) in assignments {
        let change = on_field_change(schema, &state, name, raw.as_str())
            .with_context(|| format!("Cannot set '{name}' on '{}'", endpoint.id()))?;
        state = change.state;
    }
    Ok(state)
}

fn run_check(args: &CatalogArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    if catalog.is_empty() {
        bail!("{} defines no endpoints", args.catalog.display());
    }

    let fields: usize = catalog.endpoints().map(|e| e.schema().len()).sum();
    let conditional: usize = catalog
        .endpoints()
        .flat_map(|e| e.schema().fields())
        .filter(|f| f.required_condition.is_some())
        .count();
    tracing::info!("Catalog OK: {}", args.catalog.display());
    println!(
        "{} endpoints, {fields} fields ({conditional} conditional)",
        catalog.len()
    );
    Ok(())
}
