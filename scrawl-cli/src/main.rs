//! scrawl CLI
//!
//! Converts an HTML fragment to Markdown or plain text. The debug flags
//! print the intermediate tokens and tree instead.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use scrawl::{LoadedDocument, RenderMode, RenderOptions, load_document, parse_html_string};
use scrawl_common::warning::clear_warnings;

/// Convert HTML fragments to Markdown or plain text
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "scrawl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Convert a file
    scrawl ./post.html

    # Convert inline HTML
    scrawl --html '<p>Hello <b>world</b></p>'

    # Read from stdin, strip all formatting
    curl -s https://example.com/fragment | scrawl --raw --keep-link-text

    # Mastodon statuses with shortened links
    scrawl --site-quirks status.html

    # Inspect the parse
    scrawl --tokens --tree --html '<ul><li>one</li></ul>'
"#)]
struct Cli {
    /// Path to an HTML file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    path: Option<String>,

    /// Convert this HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Output plain text instead of Markdown
    #[arg(short, long)]
    raw: bool,

    /// Use • for unordered list items
    #[arg(short, long)]
    bullets: bool,

    /// Escape Markdown control characters in text
    #[arg(short, long)]
    escape: bool,

    /// Honour invisible/ellipsis span classes used by Mastodon
    #[arg(long)]
    site_quirks: bool,

    /// In raw text, keep link text instead of replacing it with the URL
    #[arg(long)]
    keep_link_text: bool,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the content tree
    #[arg(long)]
    tree: bool,

    /// Print the content tree as JSON
    #[arg(long, conflicts_with_all = ["tokens", "tree"])]
    json: bool,
}

impl Cli {
    const fn mode(&self) -> RenderMode {
        if self.raw {
            RenderMode::RawText
        } else {
            RenderMode::Markdown
        }
    }

    const fn options(&self) -> RenderOptions {
        RenderOptions::NONE
            .with(RenderOptions::UNORDERED_LIST_BULLETS, self.bullets)
            .with(RenderOptions::ESCAPE_MARKDOWN, self.escape)
            .with(RenderOptions::SITE_QUIRKS, self.site_quirks)
            .with(RenderOptions::KEEP_LINK_TEXT, self.keep_link_text)
    }

    const fn is_debug(&self) -> bool {
        self.tokens || self.tree
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();
    let doc = load_doc(&cli)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&doc.tree).context("serializing tree")?;
        println!("{json}");
        return Ok(());
    }

    if cli.is_debug() {
        print_debug(&cli, &doc);
        return Ok(());
    }

    println!("{}", doc.render(cli.mode(), cli.options()));
    Ok(())
}

/// Load document from CLI arguments
fn load_doc(cli: &Cli) -> Result<LoadedDocument> {
    if let Some(ref html) = cli.html {
        return parse_html_string(html).context("parsing --html input");
    }
    if let Some(ref path) = cli.path {
        return load_document(path).with_context(|| format!("loading {path}"));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no input: pass a FILE, --html, or pipe HTML on stdin");
    }
    let html = io::read_to_string(stdin).context("reading stdin")?;
    parse_html_string(&html).context("parsing stdin")
}

fn print_debug(cli: &Cli, doc: &LoadedDocument) {
    if cli.tokens {
        println!("{}", "=== Tokens ===".bold());
        for token in &doc.tokens {
            println!("{token}");
        }
        println!();
    }

    if cli.tree {
        println!("{}", "=== Tree ===".bold());
        print!("{}", doc.tree);
        println!();
    }

    let heading = match cli.mode() {
        RenderMode::Markdown => "=== Markdown ===",
        RenderMode::RawText => "=== Raw Text ===",
    };
    println!("{}", heading.bold());
    println!("{}", doc.render(cli.mode(), cli.options()));
}
