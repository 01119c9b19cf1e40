//! Command-line interface for wikidown.

use clap::Parser;
use std::ops::Range;
use std::path::PathBuf;

use wikidown_parser::Snippet;

/// Wikidown - render plugin wiki pages in the terminal.
///
/// Pages use a small wiki markup: headings, **bold**, [[highlights]],
/// [links](url), ``inline code``, fenced code with a language tag, lists, and
/// collapsible {{<dropdowns>.
#[derive(Parser, Debug)]
#[command(
    name = "wd",
    author = "Wikidown Contributors",
    version,
    about = "Render plugin wiki pages in the terminal",
    after_help = "Repository: https://github.com/wikidown/wikidown\n\n\
                  Examples:\n  \
                  wd page.md\n  \
                  cat page.md | wd --expand-all\n  \
                  wd --library demos/wiki.toml --list\n  \
                  wd --library demos/wiki.toml --page commands -i\n  \
                  wd page.md --copy code-12"
)]
pub struct Cli {
    /// Page file to render (reads stdin if omitted or "-")
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Page library bundle (TOML)
    #[arg(long = "library", value_name = "BUNDLE")]
    pub library: Option<PathBuf>,

    /// Page id to render from the library (defaults to the first page)
    #[arg(long = "page", value_name = "ID", requires = "library")]
    pub page: Option<String>,

    /// Print the library sidebar and exit
    #[arg(long = "list", requires = "library")]
    pub list: bool,

    /// Print the page's heading outline and exit
    #[arg(long = "outline")]
    pub outline: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the output width (0 = config or terminal width)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Disable syntax highlighting
    #[arg(long = "no-highlight")]
    pub no_highlight: bool,

    /// Disable OSC 52 clipboard output
    #[arg(long = "no-clipboard")]
    pub no_clipboard: bool,

    /// Syntax highlighting theme (overrides the config)
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Expand a dropdown by id (repeatable)
    #[arg(long = "expand", value_name = "ID")]
    pub expand: Vec<String>,

    /// Expand every dropdown
    #[arg(long = "expand-all")]
    pub expand_all: bool,

    /// Copy a code fragment by id before rendering
    #[arg(long = "copy", value_name = "ID")]
    pub copy: Option<String>,

    /// List copyable code fragments and exit
    #[arg(long = "fragments")]
    pub fragments: bool,

    /// Show fragment and dropdown ids next to their controls
    #[arg(long = "ids")]
    pub show_ids: bool,

    /// Interactive session: toggle dropdowns and copy fragments
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Insert an editor snippet into the input and print the result
    /// (h1, h2, bold, link, highlight, code, codeblock, dropdown, list)
    #[arg(long = "snippet", value_name = "KIND", value_parser = parse_snippet)]
    pub snippet: Option<Snippet>,

    /// Byte range the snippet wraps, as START..END (default: end of input)
    #[arg(long = "selection", value_name = "RANGE", value_parser = parse_selection, requires = "snippet")]
    pub selection: Option<Range<usize>>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Width from the command line, None when left to config or terminal.
    pub fn fixed_width(&self) -> Option<usize> {
        (self.width > 0).then_some(self.width as usize)
    }

    /// Check if we should read the page from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.library.is_none()
            && self
                .file
                .as_ref()
                .map_or(true, |f| f.as_os_str() == "-")
    }
}

fn parse_snippet(s: &str) -> Result<Snippet, String> {
    Snippet::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = Snippet::ALL.iter().map(|s| s.name()).collect();
        format!("unknown snippet '{}' (expected one of: {})", s, names.join(", "))
    })
}

fn parse_selection(s: &str) -> Result<Range<usize>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{}'", s))?;
    let start = start
        .trim()
        .parse()
        .map_err(|e| format!("bad selection start: {}", e))?;
    let end = end
        .trim()
        .parse()
        .map_err(|e| format!("bad selection end: {}", e))?;
    Ok(start..end)
}

/// Show paths information.
pub fn show_paths() {
    use wikidown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
