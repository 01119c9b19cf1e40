//! Wikidown - render plugin wiki pages in the terminal.
//!
//! This binary provides the CLI interface to the wikidown crates: it renders
//! a page from a file, stdin, or a page library, and can run an interactive
//! session for toggling dropdowns and copying code.

mod cli;
mod session;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, warn, LevelFilter};
use std::io::{self, Read, Write};
use std::time::Instant;

use wikidown_config::Config;
use wikidown_core::{DropdownId, FragmentId, Result, WikidownError};
use wikidown_library::{outline, Library};
use wikidown_parser::{insert, Snippet};
use wikidown_render::{Preview, RenderFeatures, Renderer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Wikidown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    if let Some(snippet) = cli.snippet {
        return run_snippet(cli, snippet);
    }

    let library = match &cli.library {
        Some(path) => Some(Library::load_from(path)?),
        None => None,
    };

    if cli.list {
        if let Some(library) = &library {
            print_sidebar(library, cli.page.as_deref())?;
        }
        return Ok(());
    }

    let source = read_page(cli, library.as_ref())?;

    if cli.outline {
        let mut out = io::stdout().lock();
        for entry in outline(&source) {
            let indent = "  ".repeat(entry.depth + entry.level as usize - 1);
            writeln!(out, "{}{}", indent, entry.text)?;
        }
        return Ok(());
    }

    let mut preview = Preview::with_copy_delay(&source, config.features.copy_reset_delay());
    apply_expansion(cli, &config, &mut preview);

    if cli.fragments {
        print_fragments(&preview)?;
        return Ok(());
    }

    let features = create_features(cli, &config);
    debug!("Render features: {:?}", features);
    let width = features.effective_width();

    let mut renderer = Renderer::from_config(io::stdout(), width, &config).with_features(features);
    if let Some(theme) = &cli.theme {
        if !renderer.set_theme(theme) {
            warn!("unknown theme '{}', keeping '{}'", theme, config.style.syntax);
        }
    }

    if let Some(id) = &cli.copy {
        let id = FragmentId::from(id.as_str());
        if !renderer.copy(&mut preview, &id, Instant::now())? {
            return Err(WikidownError::Render(format!("no code fragment '{}'", id)));
        }
        info!("copied {}", id);
    }

    if cli.interactive {
        session::run_interactive(renderer, preview)?;
    } else {
        renderer.render(&preview)?;
    }
    Ok(())
}

/// Create render features from config and CLI options.
fn create_features(cli: &Cli, config: &Config) -> RenderFeatures {
    let mut features = RenderFeatures::from_config(config);

    if cli.no_highlight {
        features.highlight = false;
    }
    if cli.no_clipboard {
        features.clipboard = false;
    }
    if let Some(width) = cli.fixed_width() {
        features.fixed_width = Some(width);
    }
    features.show_ids = cli.show_ids;

    features
}

/// Expand dropdowns requested by config or CLI.
fn apply_expansion(cli: &Cli, config: &Config, preview: &mut Preview) {
    if cli.expand_all || config.features.expand_dropdowns {
        preview.expand_all();
    }
    for id in &cli.expand {
        let id = DropdownId::from(id.as_str());
        if !preview.is_expanded(&id) {
            preview.toggle(&id);
        }
    }
}

/// Read the page to render.
fn read_page(cli: &Cli, library: Option<&Library>) -> Result<String> {
    if let Some(library) = library {
        let id = match (&cli.page, library.first_page()) {
            (Some(id), _) => id.clone(),
            (None, Some(first)) => first.id.clone(),
            (None, None) => return Err(WikidownError::Library("library has no pages".to_string())),
        };
        if library.page(&id).is_none() {
            warn!("no page '{}' in library", id);
        }
        info!("Rendering library page: {}", id);
        return Ok(library.content_or_not_found(&id).to_string());
    }

    read_input(cli)
}

/// Read a file, or stdin.
fn read_input(cli: &Cli) -> Result<String> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    match &cli.file {
        Some(path) => {
            info!("Processing file: {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => Ok(String::new()),
    }
}

/// Insert an editor snippet into the input and print the new content.
fn run_snippet(cli: &Cli, snippet: Snippet) -> Result<()> {
    let content = read_input(cli)?;
    let selection = cli
        .selection
        .clone()
        .unwrap_or(content.len()..content.len());

    let (updated, selected) = insert(&content, selection, snippet);
    info!(
        "inserted {} snippet, selection now {}..{}",
        snippet, selected.start, selected.end
    );

    let mut out = io::stdout().lock();
    out.write_all(updated.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Print the library sidebar, marking the current page.
fn print_sidebar(library: &Library, current: Option<&str>) -> io::Result<()> {
    let current = current.or_else(|| library.first_page().map(|p| p.id.as_str()));
    let mut out = io::stdout().lock();
    for group in library.sidebar() {
        writeln!(out, "{}", group.name)?;
        for page in group.pages {
            let marker = if Some(page.id.as_str()) == current { "▌" } else { " " };
            writeln!(out, "  {} {:<24} {}", marker, page.title, page.id)?;
        }
    }
    Ok(())
}

/// Print the copyable fragments with their ids.
fn print_fragments(preview: &Preview) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for fragment in preview.tree().fragments() {
        let label = match fragment.language {
            Some(language) => language.to_string(),
            None => fragment.kind().to_string(),
        };
        let first_line = fragment.text.lines().next().unwrap_or("");
        writeln!(out, "{:<20} {:<10} {}", fragment.id.as_str(), label, first_line)?;
    }
    Ok(())
}
