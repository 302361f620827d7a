//! Iconmark - inline icon markup for documentation pages.
//!
//! # Usage
//!
//! ```bash
//! iconmark encode --name Star --color red --size 20
//! iconmark decode page.html
//! iconmark icons --query cloud
//! iconmark render site.json --slug getting-started --mode edit --watch
//! iconmark usage site.json
//! ```

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use iconmark::config::{
    effective_flags, global_config_path, local_override_path, parse_flag_tokens, resolve_mode,
};
use iconmark::icon::{self, BuiltinCatalog, IconCatalog, IconReference, picker};
use iconmark::perf;
use iconmark::render::{RenderMode, render_page};
use iconmark::store::PageStore;
use iconmark::watcher::DataFileWatcher;

const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);
const WATCH_POLL: Duration = Duration::from_millis(250);

/// Inline icon markup for documentation pages
#[derive(Parser, Debug)]
#[command(name = "iconmark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the persisted fragment for an icon
    Encode {
        /// Icon name, e.g. `Star`
        #[arg(long)]
        name: String,

        /// CSS color or preset name (Purple, Red, Green, Blue, Yellow)
        #[arg(long)]
        color: Option<String>,

        /// Size in pixels
        #[arg(long)]
        size: Option<String>,
    },

    /// Replace icon fragments in HTML with inline SVG
    Decode {
        /// HTML file to read (stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// List catalog icons, optionally filtered
    Icons {
        /// Case-insensitive search over names and labels
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Render one page from a site data file
    Render(RenderArgs),

    /// Report which icons each page references
    Usage {
        /// Site data file (`{ "pages": [...] }`)
        #[arg(value_name = "DATA")]
        data: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Site data file (`{ "pages": [...] }`)
    #[arg(value_name = "DATA")]
    data: PathBuf,

    /// Slug of the page to render
    #[arg(long)]
    slug: String,

    /// Show edit chrome (edit link and page information)
    #[arg(long, value_enum)]
    mode: Option<RenderMode>,

    /// Write HTML here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Watch the data file and re-render on change
    #[arg(short, long)]
    watch: bool,

    /// Enable timing output
    #[arg(long)]
    perf: bool,

    /// Write detailed render events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current render flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { name, color, size } => {
            let color = color.map(|c| picker::preset(&c).map_or(c, |p| p.value.to_string()));
            let reference = IconReference::from_attributes(&name, color.as_deref(), size.as_deref());
            if reference.name().and_then(icon::IconName::id).is_none() {
                tracing::warn!(name = %name, "icon is not in the catalog; it will render as a label");
            }
            println!("{}", icon::encode(&reference));
            Ok(())
        }
        Command::Decode { file } => {
            let content = read_input(file.as_deref())?;
            print!("{}", icon::decode(&content));
            Ok(())
        }
        Command::Icons { query } => {
            for id in picker::search(query.as_deref().unwrap_or("")) {
                println!("{}\t{}", id.name(), picker::display_label(id.name()));
            }
            Ok(())
        }
        Command::Render(args) => run_render(&args, &raw_args),
        Command::Usage { data } => report_usage(&data),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run_render(args: &RenderArgs, raw_args: &[String]) -> Result<()> {
    let mut cli_flags = parse_flag_tokens(raw_args);
    cli_flags.mode = args.mode.or(cli_flags.mode);
    let effective = effective_flags(
        &global_config_path(),
        &local_override_path(),
        &cli_flags,
        args.save,
        args.clear,
    )?;

    perf::set_enabled(effective.perf || args.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("ICONMARK_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        tracing::warn!(
            path = ?render_debug_log_path,
            %err,
            "failed to initialize render debug log"
        );
    }

    let mode = resolve_mode(&effective, std::env::var("ICONMARK_MODE").ok().as_deref());

    if !args.data.exists() {
        anyhow::bail!("File not found: {}", args.data.display());
    }

    let catalog = BuiltinCatalog;
    render_to_output(args, mode, &catalog)?;

    if !(effective.watch || args.watch) {
        return Ok(());
    }

    let mut watcher = DataFileWatcher::new(&args.data, WATCH_DEBOUNCE)
        .with_context(|| format!("Failed to watch {}", args.data.display()))?;
    eprintln!("Watching {} for changes (Ctrl-C to stop)", watcher.file().display());
    loop {
        std::thread::sleep(WATCH_POLL);
        if !watcher.poll() {
            continue;
        }
        // A half-written save is common; keep watching on failure.
        match render_to_output(args, mode, &catalog) {
            Ok(()) => tracing::info!(slug = %args.slug, "re-rendered"),
            Err(err) => tracing::warn!("render failed: {err:#}"),
        }
    }
}

fn render_to_output(args: &RenderArgs, mode: RenderMode, catalog: &dyn IconCatalog) -> Result<()> {
    let store = PageStore::load(&args.data)?;
    let page = store.get(&args.slug)?;
    let html = render_page(page, mode, catalog);
    match &args.output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn report_usage(data: &Path) -> Result<()> {
    let store = PageStore::load(data)?;
    let catalog = BuiltinCatalog;
    for page in store.pages() {
        for fragment in icon::fragments(&page.content) {
            let (name, status) = match fragment.reference.name() {
                None => ("-", "empty"),
                Some(name) if catalog.contains(name.as_str()) => (name.as_str(), "ok"),
                Some(name) => (name.as_str(), "missing"),
            };
            println!("{}\t{}\t{}\t{}", page.slug, fragment.range.start, name, status);
        }
    }
    Ok(())
}
