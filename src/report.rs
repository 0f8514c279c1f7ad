//! Report rendering for the `report` command.
//!
//! Builds a [`Report`] from an analyzed text and renders it to a string,
//! keeping presentation separate from the command handler so the layout
//! is unit-testable without capturing stdout.

use crate::estimator::Estimate;

const RULE: &str = "------------------------------------------------------------";
const BANNER: &str = "============================================================";

/// Everything the formatted report displays.
#[derive(Debug, Clone)]
pub struct Report {
    /// Model the estimate was computed for.
    pub model: String,
    /// Character count of the analyzed text.
    pub char_count: usize,
    /// Token count and projected cost.
    pub estimate: Estimate,
}

/// Render the full multi-line tokenomics report.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\n        Tokenomics Report\n");
    out.push_str(BANNER);
    out.push_str("\n\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Character Count: {} characters\n\n",
        format_thousands(report.char_count)
    ));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Model: {}\n\n", report.model));
    out.push_str(&format!(
        "  Total Tokens (Input): {}\n",
        format_thousands(report.estimate.token_count)
    ));
    out.push_str(&format!(
        "  Estimated Cost (Input): ${:.6} USD\n\n",
        report.estimate.estimated_cost
    ));
    out.push_str("Insights:\n");
    out.push_str(
        "  - This estimate is for input tokens only. Output tokens would add to the cost.\n",
    );
    out.push_str("  - Different models have different tokenization and pricing.\n");
    out.push_str("  - High token counts impact latency and context window limits.\n");
    out.push('\n');
    out.push_str(BANNER);
    out.push('\n');
    out
}

/// Format an integer with thousands separators: 1234567 -> "1,234,567".
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
