//! Pure assembly of the proposal document.
//!
//! `build_blocks` turns a `ProposalData` into the logical document the
//! backend prints: equal inputs always produce equal block vectors, which
//! is where the renderer's determinism contract is pinned.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::document_model::{FundLine, ProposalData};

/// Expense ratio printed when a fund does not publish one, in percent.
const DEFAULT_EXPENSE_RATIO: f64 = 1.2;

/// Minimum investment printed when a fund does not publish one, in INR.
const DEFAULT_MIN_INVESTMENT: Decimal = dec!(5000);

/// Fund-literacy lines printed in every proposal.
const EDUCATIONAL_CONTENT: [&str; 6] = [
    "Mutual Funds: Pool money from multiple investors to invest in stocks, bonds, or other assets.",
    "Risk Profile: Indicates how much market fluctuation you can handle. Growth = Higher risk, higher returns.",
    "3Y Returns: Past performance over 3 years. Not guaranteed for future, but indicates fund quality.",
    "Expense Ratio: Annual fee charged by the fund. Lower is better (typically 0.5% - 2%).",
    "Diversification: Spreading investments across multiple funds reduces risk.",
    "SIP (Systematic Investment Plan): Invest small amounts regularly instead of a lump sum.",
];

/// Mandatory regulatory disclaimer, printed verbatim.
const DISCLAIMER: &str = "Disclaimer: Mutual fund investments are subject to market risks. \
    Please read all scheme-related documents carefully before investing. Past performance is \
    not indicative of future returns. The information provided is for educational purposes \
    only and should not be construed as investment advice.";

/// One logical element of the printed document, in print order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Block {
    Title(String),
    Subtitle(String),
    SectionHeading(String),
    Text(String),
    Bullet(String),
    TableHeader(Vec<String>),
    TableRow(Vec<String>),
    SmallPrint(String),
}

/// Share of the selected funds falling into each coarse category bucket,
/// in percent.
///
/// This is the printed summary's computation: a case-insensitive
/// substring match on the category name, counting funds rather than
/// weighting money. It is deliberately distinct from the weighted
/// equity/debt/cash aggregator the curation screen uses; the two must not
/// be unified without product sign-off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMix {
    pub equity: i32,
    pub debt: i32,
    pub hybrid: i32,
}

/// Buckets the selected funds by category name.
pub fn category_mix(funds: &[FundLine]) -> CategoryMix {
    if funds.is_empty() {
        return CategoryMix::default();
    }

    let total = funds.len() as f64;
    let count = |predicate: fn(&str) -> bool| -> i32 {
        let matching = funds
            .iter()
            .filter(|f| predicate(&f.category.to_lowercase()))
            .count() as f64;
        (matching / total * 100.0).round() as i32
    };

    CategoryMix {
        equity: count(|c| c.contains("equity")),
        debt: count(|c| c.contains("debt") || c.contains("gilt")),
        hybrid: count(|c| c.contains("hybrid") || c.contains("balanced")),
    }
}

/// Assembles the logical document. Total: any well-formed input renders,
/// including zero selected funds and an absent advisor note.
pub fn build_blocks(data: &ProposalData) -> Vec<Block> {
    let mut blocks = Vec::new();

    // Branding header
    blocks.push(Block::Title("Investment Proposal".to_string()));
    blocks.push(Block::Subtitle(format!(
        "Prepared on: {}",
        data.proposal_date.format("%d %b %Y")
    )));

    // Advisor credentials
    blocks.push(Block::SectionHeading("Prepared By".to_string()));
    blocks.push(Block::Text(data.advisor.name.clone()));
    blocks.push(Block::Text(format!("ARN: {}", data.advisor.arn)));
    blocks.push(Block::Text(format!(
        "Experience: {} years",
        data.advisor.experience
    )));
    blocks.push(Block::Text(format!("Email: {}", data.advisor.email)));
    blocks.push(Block::Text(format!("Phone: {}", data.advisor.phone)));
    blocks.push(Block::Text(format!(
        "AUM: Rs. {}",
        format_indian_currency(data.advisor.aum)
    )));

    // Client information
    blocks.push(Block::SectionHeading("Prepared For".to_string()));
    blocks.push(Block::Text(format!("Client: {}", data.client.name)));
    blocks.push(Block::Text(format!(
        "Risk Profile: {}",
        data.client.risk_profile
    )));
    blocks.push(Block::Text(format!(
        "Investment Goal: {}",
        data.client.investment_goal
    )));

    // Advisor's recommendation, only when there is one
    if let Some(note) = data.advisor_note.as_deref() {
        if !note.trim().is_empty() {
            blocks.push(Block::SectionHeading("Advisor's Recommendation".to_string()));
            blocks.push(Block::Text(note.trim().to_string()));
        }
    }

    // Fund table
    blocks.push(Block::SectionHeading("Recommended Mutual Funds".to_string()));
    blocks.push(Block::TableHeader(
        [
            "Fund Name",
            "Category",
            "3Y Returns",
            "Risk",
            "Expense Ratio",
            "Min. Investment",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    ));
    for fund in &data.selected_funds {
        blocks.push(Block::TableRow(vec![
            fund.name.clone(),
            fund.category.clone(),
            format!("{}%", fund.returns_3y),
            fund.risk_level.clone(),
            format!("{}%", fund.expense_ratio.unwrap_or(DEFAULT_EXPENSE_RATIO)),
            format!(
                "Rs. {}",
                format_indian_currency(fund.min_investment.unwrap_or(DEFAULT_MIN_INVESTMENT))
            ),
        ]));
    }

    // Portfolio mix by category, zero buckets omitted
    let mix = category_mix(&data.selected_funds);
    blocks.push(Block::SectionHeading(
        "Recommended Portfolio Allocation".to_string(),
    ));
    for (label, value) in [
        ("Equity Funds", mix.equity),
        ("Debt Funds", mix.debt),
        ("Hybrid Funds", mix.hybrid),
    ] {
        if value > 0 {
            blocks.push(Block::Bullet(format!("{}: {}%", label, value)));
        }
    }

    // Educational content
    blocks.push(Block::SectionHeading(
        "Understanding Your Investment".to_string(),
    ));
    for line in EDUCATIONAL_CONTENT {
        blocks.push(Block::Bullet(line.to_string()));
    }

    // Next steps
    blocks.push(Block::SectionHeading("Next Steps".to_string()));
    blocks.push(Block::Text(
        "1. Review the recommended funds and their details".to_string(),
    ));
    blocks.push(Block::Text(
        "2. Share any questions or concerns with your advisor".to_string(),
    ));
    blocks.push(Block::Text(format!(
        "3. Contact {} at {} to proceed with investment",
        data.advisor.name, data.advisor.phone
    )));

    // Mandatory disclaimer
    blocks.push(Block::SmallPrint(DISCLAIMER.to_string()));

    blocks
}

/// Download filename for a rendered proposal: part of the contract, since
/// downstream automation keys off it.
pub fn suggested_filename(client_name: &str, date: chrono::NaiveDate) -> String {
    let name = client_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("Investment_Proposal_{}_{}.pdf", name, date.format("%Y-%m-%d"))
}

/// Formats a whole-rupee amount with Indian digit grouping
/// (e.g. 560080 -> "5,60,080").
pub(crate) fn format_indian_currency(amount: Decimal) -> String {
    let whole = amount.trunc().abs().to_i128().unwrap_or(0);
    let digits = whole.to_string();

    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut index = head_bytes.len();
    while index > 0 {
        let start = index.saturating_sub(2);
        groups.push(&head[start..index]);
        index = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Greedy word wrap for paragraph blocks. Words longer than the limit get
/// a line of their own rather than being split.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncates cell text to fit a table column.
pub(crate) fn fit_cell(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::document_model::{AdvisorInfo, ClientInfo, ProposalData};

    fn fund_line(name: &str, category: &str) -> FundLine {
        FundLine {
            name: name.to_string(),
            category: category.to_string(),
            returns_3y: 18.5,
            risk_level: "Growth".to_string(),
            expense_ratio: Some(1.2),
            min_investment: Some(dec!(5000)),
        }
    }

    fn proposal_data(funds: Vec<FundLine>, note: Option<&str>) -> ProposalData {
        ProposalData {
            advisor: AdvisorInfo {
                name: "Rajesh Kumar".to_string(),
                arn: "ARN-123456".to_string(),
                experience: 8,
                email: "rajesh.kumar@advisorplatform.com".to_string(),
                phone: "+91 9876 543 210".to_string(),
                aum: dec!(45000000),
            },
            client: ClientInfo {
                name: "Priya Sharma".to_string(),
                email: "priya@example.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                risk_profile: "Growth".to_string(),
                investment_goal: "Long-term wealth creation".to_string(),
            },
            selected_funds: funds,
            advisor_note: note.map(|s| s.to_string()),
            proposal_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_blocks_follow_the_contracted_section_order() {
        let data = proposal_data(
            vec![fund_line("HDFC Top 100 Fund", "Large Cap Equity")],
            Some("Stay invested for at least five years."),
        );
        let blocks = build_blocks(&data);

        let headings: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::SectionHeading(h) => Some(h.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(
            headings,
            vec![
                "Prepared By",
                "Prepared For",
                "Advisor's Recommendation",
                "Recommended Mutual Funds",
                "Recommended Portfolio Allocation",
                "Understanding Your Investment",
                "Next Steps",
            ]
        );

        assert_eq!(
            blocks.first(),
            Some(&Block::Title("Investment Proposal".to_string()))
        );
        assert!(matches!(blocks.last(), Some(Block::SmallPrint(_))));
    }

    #[test]
    fn test_empty_note_block_is_omitted() {
        for note in [None, Some(""), Some("   ")] {
            let data = proposal_data(vec![], note);
            let blocks = build_blocks(&data);
            assert!(!blocks
                .iter()
                .any(|b| matches!(b, Block::SectionHeading(h) if h == "Advisor's Recommendation")));
        }
    }

    #[test]
    fn test_zero_funds_still_renders_a_table_header() {
        let blocks = build_blocks(&proposal_data(vec![], None));
        assert!(blocks.iter().any(|b| matches!(b, Block::TableHeader(_))));
        assert!(!blocks.iter().any(|b| matches!(b, Block::TableRow(_))));
    }

    #[test]
    fn test_table_row_applies_print_defaults() {
        let mut fund = fund_line("Fund X", "Large Cap Equity");
        fund.expense_ratio = None;
        fund.min_investment = None;

        let blocks = build_blocks(&proposal_data(vec![fund], None));
        let row = blocks
            .iter()
            .find_map(|b| match b {
                Block::TableRow(cells) => Some(cells.clone()),
                _ => None,
            })
            .unwrap();

        assert_eq!(row[4], "1.2%");
        assert_eq!(row[5], "Rs. 5,000");
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let data = proposal_data(
            vec![
                fund_line("HDFC Top 100 Fund", "Large Cap Equity"),
                fund_line("ICICI Prudential Corporate Bond Fund", "Corporate Bond"),
            ],
            Some("A balanced start."),
        );
        assert_eq!(build_blocks(&data), build_blocks(&data));
    }

    #[test]
    fn test_category_mix_counts_funds_not_weights() {
        let funds = vec![
            fund_line("A", "Large Cap Equity"),
            fund_line("B", "Mid Cap Equity"),
            fund_line("C", "Gilt"),
            fund_line("D", "Balanced Hybrid"),
        ];
        assert_eq!(
            category_mix(&funds),
            CategoryMix {
                equity: 50,
                debt: 25,
                hybrid: 25
            }
        );
    }

    #[test]
    fn test_category_mix_empty_is_zero() {
        assert_eq!(category_mix(&[]), CategoryMix::default());
    }

    #[test]
    fn test_zero_mix_buckets_are_not_listed() {
        let blocks = build_blocks(&proposal_data(
            vec![fund_line("A", "Large Cap Equity")],
            None,
        ));
        let bullets: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Bullet(text) if text.contains("Funds:") => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(bullets, vec!["Equity Funds: 100%"]);
    }

    #[test]
    fn test_filename_rule() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            suggested_filename("Priya Sharma", date),
            "Investment_Proposal_Priya_Sharma_2024-03-15.pdf"
        );
        assert_eq!(
            suggested_filename("  Anil   Kumar Rao ", date),
            "Investment_Proposal_Anil_Kumar_Rao_2024-03-15.pdf"
        );
    }

    #[test]
    fn test_indian_currency_grouping() {
        assert_eq!(format_indian_currency(dec!(560080)), "5,60,080");
        assert_eq!(format_indian_currency(dec!(45000000)), "4,50,00,000");
        assert_eq!(format_indian_currency(dec!(5000)), "5,000");
        assert_eq!(format_indian_currency(dec!(500)), "500");
        assert_eq!(format_indian_currency(dec!(12500000000)), "12,50,00,00,000");
    }

    #[test]
    fn test_wrap_text_respects_limit() {
        let lines = wrap_text(DISCLAIMER, 90);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 90));
        assert_eq!(lines.join(" "), DISCLAIMER);
    }

    #[test]
    fn test_fit_cell_truncates_long_names() {
        assert_eq!(fit_cell("Short", 30), "Short");
        assert_eq!(
            fit_cell("A very long fund name that overflows its column", 20),
            "A very long fund ..."
        );
    }
}
