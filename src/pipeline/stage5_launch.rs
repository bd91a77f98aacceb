use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Opened,
    Skipped,
    Failed(String),
}

pub fn file_uri(path: &Path) -> std::io::Result<String> {
    let absolute = std::path::absolute(path)?;
    Ok(format!("file://{}", absolute.display()))
}

/// Best-effort: failures are logged and reported back, never propagated.
pub fn open_report(path: &Path) -> LaunchOutcome {
    let uri = match file_uri(path) {
        Ok(uri) => uri,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not resolve report path");
            return LaunchOutcome::Failed(err.to_string());
        }
    };
    match webbrowser::open(&uri) {
        Ok(()) => {
            tracing::info!(uri = %uri, "report opened in browser");
            LaunchOutcome::Opened
        }
        Err(err) => {
            tracing::warn!(uri = %uri, error = %err, "could not open report in browser");
            LaunchOutcome::Failed(err.to_string())
        }
    }
}

pub fn completion_lines(
    out_dir: &Path,
    report_path: &Path,
    outcome: &LaunchOutcome,
) -> [String; 2] {
    let first = format!(
        "\u{2705} Report and visualizations have been generated in the '{}' directory.",
        out_dir.display()
    );
    let second = match outcome {
        LaunchOutcome::Opened => {
            "\u{1f4ca} The report has been opened in your default web browser.".to_string()
        }
        LaunchOutcome::Skipped => format!(
            "\u{1f4ca} Open {} in a web browser to view the report.",
            report_path.display()
        ),
        LaunchOutcome::Failed(reason) => format!(
            "\u{1f4ca} Could not open a browser ({reason}); open {} manually.",
            report_path.display()
        ),
    };
    [first, second]
}

pub fn print_completion(out_dir: &Path, report_path: &Path, outcome: &LaunchOutcome) {
    for line in completion_lines(out_dir, report_path, outcome) {
        println!("{line}");
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_launch.rs"]
mod tests;
