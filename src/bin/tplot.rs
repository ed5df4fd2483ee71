use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use typed_plotly::{Figure, HtmlOptions, JavaScriptBundle, browser};

#[derive(Parser, Debug)]
#[command(
    name = "tplot",
    version,
    about = "Validate, normalize & render Plotly figure JSON"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a figure to an HTML document or fragment.
    Render(RenderArgs),
    /// Render a figure to a temporary file and open it in the browser.
    Show(ShowArgs),
    /// Parse a figure into the typed model and print it back as canonical JSON.
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug)]
struct HtmlArgs {
    /// JSON file with HTML options (script bundles, div id, ...).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Load plotly.js from this URL.
    #[arg(long, conflicts_with_all = ["plotly_embed", "no_plotly"])]
    plotly_url: Option<String>,
    /// Embed plotly.js from this file into the output.
    #[arg(long, conflicts_with = "no_plotly")]
    plotly_embed: Option<PathBuf>,
    /// Emit no plotly.js script tag; the host page provides it.
    #[arg(long, default_value_t = false)]
    no_plotly: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Figure JSON (`{"data": [...], "layout": {...}}`).
    #[arg(short, long)]
    input: PathBuf,
    /// Output HTML path.
    #[arg(short, long)]
    out: PathBuf,
    #[command(flatten)]
    html: HtmlArgs,
    /// Write a `<div>` fragment instead of a full document.
    #[arg(long, default_value_t = false)]
    fragment: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    #[arg(short, long)]
    input: PathBuf,
    #[command(flatten)]
    html: HtmlArgs,
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    #[arg(short, long)]
    input: PathBuf,
    /// Write here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Show(args) => cmd_show(args),
        Command::Normalize(args) => cmd_normalize(args),
    }
}

fn load_figure(path: &Path) -> Result<Figure> {
    Figure::load(path).with_context(|| format!("reading figure {}", path.display()))
}

fn html_options(args: &HtmlArgs) -> Result<HtmlOptions> {
    let mut options = match &args.config {
        Some(path) => HtmlOptions::load(path)
            .with_context(|| format!("reading HTML options {}", path.display()))?,
        None => HtmlOptions::default(),
    };
    if let Some(url) = &args.plotly_url {
        options.plotly = JavaScriptBundle::Online(url.clone());
    }
    if let Some(path) = &args.plotly_embed {
        options.plotly = JavaScriptBundle::inline_file(path)
            .with_context(|| format!("reading plotly bundle {}", path.display()))?;
    }
    if args.no_plotly {
        options.plotly = JavaScriptBundle::Exclude;
    }
    Ok(options)
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let figure = load_figure(&args.input)?;
    let mut options = html_options(&args.html)?;
    if args.fragment {
        options.full_document = false;
    }
    figure.write_html(&args.out, &options)?;
    eprintln!(
        "Wrote {} trace(s) to {}",
        figure.data.len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_show(args: ShowArgs) -> Result<()> {
    let figure = load_figure(&args.input)?;
    let options = html_options(&args.html)?;
    let path = browser::show(&figure, &options)?;
    eprintln!("Opened {}", path.display());
    Ok(())
}

fn cmd_normalize(args: NormalizeArgs) -> Result<()> {
    let figure = load_figure(&args.input)?;
    let json = if args.pretty {
        figure.to_json_pretty()?
    } else {
        figure.to_json()?
    };
    match &args.out {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Saved normalized figure to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
