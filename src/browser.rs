//! Opening rendered figures in the system browser.

use crate::config::HtmlOptions;
use crate::error::Result;
use crate::figure::Figure;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Platform command that hands a path to the default browser.
fn opener(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Open `path` with the platform opener and wait for it to exit.
///
/// A non-zero exit is logged, not returned: the opener has already done what it could.
/// Failure to spawn the opener is returned as is.
pub fn open(path: &Path) -> io::Result<()> {
    launch(opener(path), path)
}

fn launch(mut cmd: Command, path: &Path) -> io::Result<()> {
    let status = cmd.status()?;
    if !status.success() {
        log::warn!("browser opener exited with {status} for {}", path.display());
    }
    Ok(())
}

/// Write `html` to a new `plotly-*.html` file in the temp dir and keep it on disk.
pub fn write_temp_html(html: &str) -> io::Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("plotly-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(html.as_bytes())?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

/// Render `figure`, write it to a temp file and open it. Returns the file's path.
///
/// If the opener cannot be spawned the temp file is removed again.
pub fn show(figure: &Figure, options: &HtmlOptions) -> Result<PathBuf> {
    show_with(figure, options, opener)
}

fn show_with(
    figure: &Figure,
    options: &HtmlOptions,
    opener: impl Fn(&Path) -> Command,
) -> Result<PathBuf> {
    let html = figure.to_html(options)?;
    let path = write_temp_html(&html)?;
    log::debug!("opening {} in browser", path.display());
    if let Err(e) = launch(opener(&path), &path) {
        let _ = fs::remove_file(&path);
        return Err(e.into());
    }
    Ok(path)
}
