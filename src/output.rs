use std::path::Path;

use crate::convert::ConversionReport;

/// Confirmation line printed after a module is written.
pub fn format_converted(
    input_file_name: &str,
    output_path: &Path,
) -> String {
    format!("✅ Converted {input_file_name} -> {}", output_path.display())
}

/// One-line summary of a finished run.
pub fn format_summary(report: &ConversionReport) -> String {
    let verses: usize = report.converted.iter().map(|c| c.verses).sum();
    if report.failed.is_empty() {
        format!(
            "OK {} modules, {verses} verses",
            report.converted.len()
        )
    } else {
        format!(
            "{} of {} modules failed ({} converted, {verses} verses)",
            report.failed.len(),
            report.total(),
            report.converted.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converted_line_names_input_and_output() {
        let line = format_converted("en_kjv.xml", Path::new("bibles/en_kjv.json"));
        assert_eq!(line, "✅ Converted en_kjv.xml -> bibles/en_kjv.json");
    }
}
