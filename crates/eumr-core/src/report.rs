use std::fmt::Write as _;

use crate::evaluator::{CompanyAssessment, MergerAnalysis};

/// Render a merger analysis as a fixed-layout plain-text report.
///
/// Pure function of its input: the same analysis always yields
/// byte-identical output.
pub fn render_report(analysis: &MergerAnalysis) -> String {
    let mut out = String::new();

    push_line(&mut out, "Merger EUMR Compliance Analysis Report");
    push_line(&mut out, "======================================");
    push_line(&mut out, "");

    render_company_block(&mut out, 1, &analysis.company1);
    render_company_block(&mut out, 2, &analysis.company2);

    push_line(&mut out, "Combined Metrics");
    push_line(&mut out, "----------------");
    push_line(
        &mut out,
        &format!(
            "Worldwide Revenue (USD): {}",
            format_usd(analysis.combined.worldwide_revenue_usd)
        ),
    );
    push_line(
        &mut out,
        &format!(
            "Worldwide Revenue (EUR): {}",
            format_eur(analysis.combined.worldwide_revenue_eur)
        ),
    );
    push_line(
        &mut out,
        &format!(
            "Combined EU Revenue (EUR): {}",
            format_eur(analysis.combined.eu_revenue_eur)
        ),
    );
    push_line(
        &mut out,
        &format!(
            "Combined Market Cap: {}",
            format_usd(analysis.combined.market_cap_usd)
        ),
    );
    push_line(&mut out, "");

    push_line(&mut out, "EUMR Compliance Analysis");
    push_line(&mut out, "------------------------");
    push_line(
        &mut out,
        &format!(
            "Primary Threshold (\u{20ac}5B worldwide, \u{20ac}250M EU each): {}",
            met_label(analysis.verdict.primary_met)
        ),
    );
    push_line(
        &mut out,
        &format!(
            "Alternative Threshold (\u{20ac}2.5B worldwide, \u{20ac}100M EU each): {}",
            met_label(analysis.verdict.alternative_met)
        ),
    );
    push_line(&mut out, "");
    push_line(
        &mut out,
        &format!(
            "EUMR Notification Required: {}",
            if analysis.verdict.notification_required {
                "YES"
            } else {
                "NO"
            }
        ),
    );
    push_line(&mut out, "");

    push_line(&mut out, "Important Notes:");
    for note in &analysis.verdict.notes {
        push_line(&mut out, &format!("- {note}"));
    }

    out
}

fn render_company_block(out: &mut String, position: u8, company: &CompanyAssessment) {
    push_line(
        out,
        &format!(
            "Company {position}: {} ({})",
            company.profile.name, company.profile.ticker
        ),
    );
    push_line(out, "--------------------------------------");
    push_line(
        out,
        &format!(
            "Worldwide Revenue: {}",
            format_usd(company.profile.worldwide_revenue)
        ),
    );
    push_line(
        out,
        &format!("EU Revenue: {}", format_usd(company.eu_revenue.eu_revenue)),
    );
    push_line(
        out,
        &format!("Market Cap: {}", format_usd(company.profile.market_cap)),
    );
    if company.eu_revenue.estimated {
        push_line(out, "(EU Revenue Estimated)");
    }
    push_line(out, "");
}

fn push_line(out: &mut String, line: &str) {
    let _ = writeln!(out, "{line}");
}

fn met_label(met: bool) -> &'static str {
    if met {
        "Met"
    } else {
        "Not Met"
    }
}

fn format_usd(amount: f64) -> String {
    format!("${}", group_thousands(amount))
}

fn format_eur(amount: f64) -> String {
    format!("\u{20ac}{}", group_thousands(amount))
}

/// Two-decimal rendering with comma thousands separators.
fn group_thousands(amount: f64) -> String {
    let rendered = format!("{amount:.2}");
    let (int_part, frac_part) = rendered
        .split_once('.')
        .expect("two-decimal format always contains a separator");

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.iter().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    format!("{grouped}.{frac_part}")
}
