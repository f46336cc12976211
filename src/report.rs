//! Text renderings of [`DistributionResult`].

use serde::Serialize;

use crate::error::Result;
use crate::stats::distribution::{DistributionResult, NxHit};

/// Printed for values that are undefined for the input
pub const UNDEFINED: &str = "NA";

/// How a result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// Key/value lines with N10 to N75 and E-size
    Legacy,
    /// One CSV row per assembly, with an optional header row
    #[default]
    Tabular,
    /// One JSON object per assembly
    Json,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    assembly: &'a str,
    #[serde(flatten)]
    stats: &'a DistributionResult,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    style: ReportStyle,
}

impl ReportFormatter {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// Render one assembly. `with_header` only affects the tabular style.
    pub fn render(&self, title: &str, result: &DistributionResult, with_header: bool) -> Result<String> {
        match self.style {
            ReportStyle::Legacy => Ok(legacy(result)),
            ReportStyle::Tabular => {
                let row = tabular_row(title, result);
                if with_header {
                    Ok(format!("{}\n{}", tabular_header(result), row))
                } else {
                    Ok(row)
                }
            }
            ReportStyle::Json => Ok(serde_json::to_string(&JsonRow {
                assembly: title,
                stats: result,
            })?),
        }
    }
}

/// Format like a `#.##` decimal pattern: at most two fraction digits, no
/// trailing zeros, no grouping and no leading zero before the point.
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return UNDEFINED.to_string();
    }
    let mut text = format!("{:.2}", value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if let Some(rest) = text.strip_prefix("0.") {
        text = format!(".{}", rest);
    } else if let Some(rest) = text.strip_prefix("-0.") {
        text = format!("-.{}", rest);
    }
    text
}

fn opt_int(value: Option<u64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string())
}

fn opt_decimal(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), format_decimal)
}

fn legacy(result: &DistributionResult) -> String {
    let mut lines = vec![
        format!("Total units: {}", result.count),
        format!("Reference: {}", result.reference_total),
        format!("BasesInFasta: {}", result.total_bp_over_length),
        format!("Min: {}", opt_int(result.min)),
        format!("Max: {}", opt_int(result.max)),
    ];
    for percentile in [10, 25, 50, 75] {
        let line = match result.nx(percentile) {
            Some(NxHit { length, count }) => format!("N{}: {} COUNT: {}", percentile, length, count),
            None => format!("N{}: {} COUNT: {}", percentile, UNDEFINED, UNDEFINED),
        };
        lines.push(line);
    }
    lines.push(format!("E-size:{}", opt_decimal(result.e_size)));
    lines.join("\n")
}

fn tabular_header(result: &DistributionResult) -> String {
    let mut header = format!(
        "Assembly,Unit Number,Unit Total BP,Number Units > {floor},Total BP in Units > {floor},Min,Max,Average,Median",
        floor = result.min_length
    );
    for milestone in result.bound_milestones() {
        header.push_str(&format!(
            ",Unit At {} Unit Count, Actual Unit Length",
            format_decimal(milestone.goal as f64)
        ));
    }
    header
}

fn tabular_row(title: &str, result: &DistributionResult) -> String {
    let mut fields = vec![
        title.to_string(),
        result.count.to_string(),
        result.reference_total.to_string(),
        result.total_over_length.to_string(),
        result.total_bp_over_length.to_string(),
        opt_int(result.min),
        opt_int(result.max),
        opt_decimal(result.mean),
        opt_decimal(result.median),
    ];
    for hit in result.bound_milestones().filter_map(|m| m.hit) {
        fields.push(hit.count.to_string());
        fields.push(hit.length.to_string());
    }
    fields.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::distribution::{compute_from_lengths, StatsConfig};
    use crate::stats::milestone::MilestonePolicy;

    fn sample() -> DistributionResult {
        let config = StatsConfig {
            min_length: 0,
            genome_size: 0,
            milestones: MilestonePolicy::Standard,
        };
        compute_from_lengths([1_500_000, 700_000, 600_000, 300_000], &config).unwrap()
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(2333.3333), "2333.33");
        assert_eq!(format_decimal(1_000_000.0), "1000000");
        assert_eq!(format_decimal(12.5), "12.5");
        assert_eq!(format_decimal(0.25), ".25");
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(-0.5), "-.5");
        assert_eq!(format_decimal(f64::NAN), UNDEFINED);
    }

    #[test]
    fn test_tabular_with_header() {
        let text = ReportFormatter::new(ReportStyle::Tabular).render("asm", &sample(), true).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Assembly,Unit Number,Unit Total BP,Number Units > 0,Total BP in Units > 0,Min,Max,Average,Median,\
             Unit At 1000000 Unit Count, Actual Unit Length,\
             Unit At 2000000 Unit Count, Actual Unit Length,\
             Unit At 3000000 Unit Count, Actual Unit Length"
        );
        assert_eq!(
            lines[1],
            "asm,4,3100000,4,3100000,300000,1500000,775000,650000,1,1500000,2,700000,4,300000"
        );
    }

    #[test]
    fn test_tabular_without_header() {
        let text = ReportFormatter::new(ReportStyle::Tabular).render("asm", &sample(), false).unwrap();
        assert!(text.starts_with("asm,4,"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_legacy() {
        let result = compute_from_lengths([1000, 2000, 3000], &StatsConfig { min_length: 0, ..StatsConfig::default() }).unwrap();
        let text = ReportFormatter::new(ReportStyle::Legacy).render("ignored", &result, true).unwrap();

        assert_eq!(
            text,
            "Total units: 3\nReference: 6000\nBasesInFasta: 6000\nMin: 1000\nMax: 3000\n\
             N10: 3000 COUNT: 1\nN25: 3000 COUNT: 1\nN50: 3000 COUNT: 1\nN75: 2000 COUNT: 2\n\
             E-size:2333.33"
        );
    }

    #[test]
    fn test_undefined_values() {
        let result = compute_from_lengths(Vec::<u64>::new(), &StatsConfig::default()).unwrap();
        let row = ReportFormatter::new(ReportStyle::Tabular).render("empty", &result, false).unwrap();
        assert_eq!(row, "empty,0,0,0,0,NA,NA,NA,NA");
        let legacy = ReportFormatter::new(ReportStyle::Legacy).render("empty", &result, false).unwrap();
        assert!(legacy.contains("Min: NA"));
        assert!(legacy.ends_with("E-size:NA"));
    }

    #[test]
    fn test_json_includes_title() {
        let text = ReportFormatter::new(ReportStyle::Json).render("asm", &sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["assembly"], "asm");
        assert_eq!(value["count"], 4);
        assert_eq!(value["milestones"][0]["hit"]["count"], 1);
    }
}
