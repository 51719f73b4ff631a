//! Report rendering and output.
//!
//! Renders the class report as a single string so the same input always
//! produces byte-identical output, then prints it to stdout. The computed
//! summary is additionally logged as JSON.

use std::fmt::Write;

use anyhow::Result;
use tracing::debug;

use crate::types::{ClassSummary, SCORES_PER_STUDENT, StudentRecord};

/// Column widths and rule character for the rendered report.
///
/// Names are left-aligned in `name_width`; scores, the average, and the grade
/// are right-aligned in their fields. Rule lines span the full table width.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub name_width: usize,
    pub score_width: usize,
    pub average_width: usize,
    pub grade_width: usize,
    pub rule_char: char,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            name_width: 10,
            score_width: 8,
            average_width: 10,
            grade_width: 6,
            rule_char: '-',
        }
    }
}

impl ReportLayout {
    fn total_width(&self) -> usize {
        self.name_width
            + SCORES_PER_STUDENT * self.score_width
            + self.average_width
            + self.grade_width
    }

    fn rule(&self) -> String {
        self.rule_char.to_string().repeat(self.total_width())
    }
}

fn header_line(layout: &ReportLayout) -> String {
    let mut line = format!("{:<width$}", "Name", width = layout.name_width);
    for i in 1..=SCORES_PER_STUDENT {
        let _ = write!(
            line,
            "{:>width$}",
            format!("Test {i}"),
            width = layout.score_width
        );
    }
    let _ = write!(line, "{:>width$}", "Average", width = layout.average_width);
    let _ = write!(line, "{:>width$}", "Grade", width = layout.grade_width);
    line
}

fn row_line(record: &StudentRecord, layout: &ReportLayout) -> String {
    let mut line = format!("{:<width$}", record.last_name, width = layout.name_width);
    for score in &record.scores {
        let _ = write!(line, "{:>width$.0}", score, width = layout.score_width);
    }
    let _ = write!(
        line,
        "{:>width$.2}",
        record.average,
        width = layout.average_width
    );
    let _ = write!(line, "{:>width$}", record.grade, width = layout.grade_width);
    line
}

fn class_average_line(value: f64, layout: &ReportLayout) -> String {
    // Right-align the label so the value lands under the Average column.
    let label_width = layout.name_width + SCORES_PER_STUDENT * layout.score_width;
    format!(
        "{:>lw$}{:>aw$.2}",
        "Class average:",
        value,
        lw = label_width,
        aw = layout.average_width
    )
}

fn push_subreport(out: &mut String, label: &str, record: &StudentRecord, layout: &ReportLayout) {
    let rule = layout.rule();
    out.push('\n');
    out.push_str(label);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header_line(layout));
    out.push('\n');
    out.push_str(&row_line(record, layout));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
}

/// Renders the full class report.
///
/// Sections in order: title, header, one row per record in load order, class
/// average, then the best and poorest performance sub-reports. The sub-reports
/// are omitted for an empty roster.
pub fn render_report(
    records: &[StudentRecord],
    summary: &ClassSummary,
    layout: &ReportLayout,
) -> String {
    let mut out = String::new();
    let rule = layout.rule();

    out.push_str("Student Grade Report\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header_line(layout));
    out.push('\n');

    for record in records {
        out.push_str(&row_line(record, layout));
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&class_average_line(summary.class_average, layout));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    if let Some(best) = summary.best {
        push_subreport(&mut out, "Best Performance:", &records[best], layout);
    }
    if let Some(poorest) = summary.poorest {
        push_subreport(&mut out, "Poorest Performance:", &records[poorest], layout);
    }

    out
}

/// Prints the rendered report to stdout.
pub fn print_report(records: &[StudentRecord], summary: &ClassSummary, layout: &ReportLayout) {
    print!("{}", render_report(records, summary, layout));
}

/// Logs the computed summary as pretty-printed JSON.
pub fn log_summary_json(summary: &ClassSummary) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::assign_grades;
    use crate::stats::{compute_averages, summarize};
    use crate::types::ClassAveragePolicy;

    fn graded_records() -> Vec<StudentRecord> {
        let mut records = vec![
            StudentRecord::new("Smith".to_string(), [90.0; 5]),
            StudentRecord::new("Jones".to_string(), [50.0; 5]),
        ];
        compute_averages(&mut records);
        assign_grades(&mut records);
        records
    }

    #[test]
    fn test_row_line_alignment() {
        let records = graded_records();
        let line = row_line(&records[0], &ReportLayout::default());

        assert_eq!(
            line,
            "Smith           90      90      90      90      90     90.00     A"
        );
    }

    #[test]
    fn test_header_line_matches_row_width() {
        let layout = ReportLayout::default();
        let records = graded_records();

        assert_eq!(header_line(&layout).len(), layout.total_width());
        assert_eq!(row_line(&records[0], &layout).len(), layout.total_width());
    }

    #[test]
    fn test_render_report_sections_in_order() {
        let records = graded_records();
        let summary = summarize(&records, ClassAveragePolicy::LoadedCount);
        let report = render_report(&records, &summary, &ReportLayout::default());

        let title_at = report.find("Student Grade Report").unwrap();
        let class_avg_at = report.find("Class average:").unwrap();
        let best_at = report.find("Best Performance:").unwrap();
        let poorest_at = report.find("Poorest Performance:").unwrap();

        assert!(title_at < class_avg_at);
        assert!(class_avg_at < best_at);
        assert!(best_at < poorest_at);

        // The best sub-report shows Smith, the poorest shows Jones.
        assert!(report[best_at..poorest_at].contains("Smith"));
        assert!(report[poorest_at..].contains("Jones"));
    }

    #[test]
    fn test_render_report_class_average() {
        let records = graded_records();
        let summary = summarize(&records, ClassAveragePolicy::LoadedCount);
        let report = render_report(&records, &summary, &ReportLayout::default());

        assert!(report.contains("Class average:     70.00"));
    }

    #[test]
    fn test_render_report_empty_roster_omits_subreports() {
        let summary = summarize(&[], ClassAveragePolicy::LoadedCount);
        let report = render_report(&[], &summary, &ReportLayout::default());

        assert!(report.contains("Student Grade Report"));
        assert!(report.contains("Class average:      0.00"));
        assert!(!report.contains("Best Performance:"));
        assert!(!report.contains("Poorest Performance:"));
    }

    #[test]
    fn test_render_report_is_deterministic() {
        let records = graded_records();
        let summary = summarize(&records, ClassAveragePolicy::LoadedCount);
        let layout = ReportLayout::default();

        assert_eq!(
            render_report(&records, &summary, &layout),
            render_report(&records, &summary, &layout)
        );
    }

    #[test]
    fn test_log_summary_json_does_not_panic() {
        let summary = summarize(&[], ClassAveragePolicy::LoadedCount);
        log_summary_json(&summary).unwrap();
    }
}
