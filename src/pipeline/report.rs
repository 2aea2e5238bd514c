//! Report rendering stage.

use super::{should_use_color_for, write_output, OutputTarget, PipelineError};
use crate::config::OutputConfig;
use crate::reports::{create_reporter_with_options, ReportError, ReportGenerator};

/// Render a report with the configured generator and write it out.
///
/// `render` picks which report the generator produces; the format, colors
/// and destination come from `output`.
pub fn output_report<F>(output: &OutputConfig, quiet: bool, render: F) -> Result<(), PipelineError>
where
    F: FnOnce(&dyn ReportGenerator) -> Result<String, ReportError>,
{
    let target = OutputTarget::from_option(output.file.clone());
    let use_color = should_use_color_for(&target, output.no_color);
    let reporter = create_reporter_with_options(output.format, use_color);

    let rendered = render(reporter.as_ref())
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;
    write_output(&rendered, &target, quiet)
        .map_err(|source| PipelineError::ReportFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CartAnalysisReport;
    use crate::reports::ReportFormat;

    #[test]
    fn test_output_report_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let output = OutputConfig {
            format: ReportFormat::Json,
            file: Some(path.clone()),
            no_color: false,
        };

        output_report(&output, true, |r| {
            r.generate_cart_report(&CartAnalysisReport::empty())
        })
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["analysis"]["totalItems"], 0);
    }

    #[test]
    fn test_output_report_summary_file_has_no_ansi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.txt");
        let output = OutputConfig {
            format: ReportFormat::Summary,
            file: Some(path.clone()),
            no_color: false,
        };

        output_report(&output, true, |r| {
            r.generate_cart_report(&CartAnalysisReport::empty())
        })
        .unwrap();

        assert!(!std::fs::read_to_string(path).unwrap().contains("\x1b["));
    }
}
