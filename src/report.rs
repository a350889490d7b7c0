//! Terminal rendering of analysis reports

use trustrank_similarity::{AnalysisReport, CheckStatus};

const RULE_WIDTH: usize = 50;

/// Framed block: message, indicator, similarity and similar source, then the preview
pub fn render_report(report: &AnalysisReport) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let mut lines = vec![heavy.clone(), report.message.clone()];

    if report.status == CheckStatus::Checked {
        lines.push(format!("Indicator: {}", report.tier().label()));
        lines.push(format!("Similarity: {}", report.similarity));
        if !report.similar_url.is_empty() {
            lines.push(format!("Similar source: {}", report.similar_url));
        }
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push("Preview:".to_string());
    lines.push(report.preview.clone());
    lines.push(heavy);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustrank_core::{Corpus, Document};
    use trustrank_similarity::Analyzer;

    #[test]
    fn test_checked_report() {
        let corpus: Corpus = [Document::new("https://kompas.com/a", "the cat sat on the mat")]
            .into_iter()
            .collect();
        let report = Analyzer::default().analyze("the cat sat on the mat", &corpus, false);
        let rendered = render_report(&report);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "=".repeat(RULE_WIDTH));
        assert_eq!(lines[1], "Likely genuine news!");
        assert_eq!(lines[2], "Indicator: PARTIALLY_TRUE");
        assert_eq!(lines[3], "Similarity: 100.00%");
        assert_eq!(lines[4], "Similar source: https://kompas.com/a");
        assert_eq!(lines[6], "Preview:");
        assert_eq!(lines[7], "the cat sat on the mat");
        assert_eq!(*lines.last().unwrap(), "=".repeat(RULE_WIDTH));
    }

    #[test]
    fn test_rendered_block_layout() {
        let corpus: Corpus = [Document::new("https://kompas.com/a", "flood in jakarta")]
            .into_iter()
            .collect();
        let report = Analyzer::default().analyze("rice prices", &corpus, false);
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let expected = [
            heavy.as_str(),
            "Highly suspicious news!",
            "Indicator: HIGHLY_SUSPICIOUS",
            "Similarity: 0.00%",
            "Similar source: https://kompas.com/a",
            light.as_str(),
            "Preview:",
            "rice prices",
            heavy.as_str(),
        ]
        .join("\n");
        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn test_no_match_omits_source() {
        let report = Analyzer::default().analyze("bananas are a fruit", &Corpus::new(), false);
        let rendered = render_report(&report);
        assert!(rendered.contains("Indicator: HIGHLY_SUSPICIOUS"));
        assert!(rendered.contains("Similarity: 0.00%"));
        assert!(!rendered.contains("Similar source"));
    }

    #[test]
    fn test_trusted_report() {
        let report = Analyzer::default().analyze("official statement", &Corpus::new(), true);
        let rendered = render_report(&report);
        assert!(rendered.contains("This news comes from a trusted source!"));
        assert!(!rendered.contains("Indicator"));
        assert!(rendered.contains("official statement"));
    }
}
