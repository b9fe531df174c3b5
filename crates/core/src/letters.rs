//! Outreach letter templates.
//!
//! Three styles are supported:
//! - `formal`: a generic partnership letter built only from the report parameters;
//! - `precedent_based`: cites the best-matching historical case as evidence;
//! - `strategic`: the precedent-based letter plus a phased roadmap sized to the expansion
//!   timeline and the precedent's risk factors.
//!
//! Generation is pure string formatting. The only non-deterministic input, the current date, is
//! read once per call from the injected [`Clock`]. Missing parameters never fail generation; they
//! fall back to the defaults in [`crate::constants`]. When no precedent qualifies, the
//! evidence-based styles fall back to the formal letter so no precedent data is invented.

use crate::cases::OutcomeResult;
use crate::clock::Clock;
use crate::constants::{
    ANALYSIS_SPAN_YEARS, DEFAULT_BUDGET_CAP, DEFAULT_COUNTERPART, DEFAULT_COUNTRY,
    DEFAULT_DECISION_AUTHORITY, DEFAULT_EXPANSION_TIMELINE, DEFAULT_HORIZON_MONTHS,
    DEFAULT_ORGANIZATION_NAME, DEFAULT_REVENUE_BAND, DEFAULT_STRATEGIC_INTENT,
    LETTER_SUCCESS_FACTORS,
};
use crate::error::NexusError;
use crate::matching::MatchResult;
use crate::parameters::ReportParameters;
use chrono::NaiveDate;
use nexus_types::NonEmptyText;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterType {
    Formal,
    PrecedentBased,
    Strategic,
}

impl LetterType {
    pub const ALL: [LetterType; 3] = [
        LetterType::Formal,
        LetterType::PrecedentBased,
        LetterType::Strategic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterType::Formal => "formal",
            LetterType::PrecedentBased => "precedent_based",
            LetterType::Strategic => "strategic",
        }
    }

    /// Human-facing label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            LetterType::Formal => "Formal",
            LetterType::PrecedentBased => "Precedent-Based",
            LetterType::Strategic => "Strategic Roadmap",
        }
    }

    /// Whether this style cites a precedent and therefore needs matching.
    pub fn uses_precedents(&self) -> bool {
        !matches!(self, LetterType::Formal)
    }
}

impl std::fmt::Display for LetterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LetterType {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "formal" => Ok(LetterType::Formal),
            "precedent_based" | "precedent" => Ok(LetterType::PrecedentBased),
            "strategic" => Ok(LetterType::Strategic),
            other => Err(NexusError::InvalidInput(format!(
                "unknown letter type `{other}` (expected formal, precedent_based or strategic)"
            ))),
        }
    }
}

/// A generated letter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    /// Style the caller asked for.
    pub requested: LetterType,
    /// Style actually rendered; differs from `requested` after a no-precedent fallback.
    pub rendered: LetterType,
    /// Id of the cited precedent, if any.
    pub precedent_id: Option<NonEmptyText>,
    pub dated: NaiveDate,
    pub body: String,
}

impl Letter {
    pub fn is_fallback(&self) -> bool {
        self.requested != self.rendered
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }
}

/// Renders letters, reading the date from `C`.
#[derive(Clone, Debug, Default)]
pub struct LetterGenerator<C> {
    clock: C,
}

impl<C: Clock> LetterGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Renders `letter_type` for `parameters`, citing `matches[0]` where the style needs it.
    ///
    /// `matches` must be ordered best first, as returned by the matching engine. Its length is
    /// reported as the number of qualifying precedents.
    pub fn generate(
        &self,
        parameters: &ReportParameters,
        matches: &[MatchResult],
        letter_type: LetterType,
    ) -> Letter {
        let dated = self.clock.today();
        let ctx = LetterContext::new(parameters, dated);

        let (rendered, precedent_id, body) = match (letter_type, matches.first()) {
            (LetterType::Formal, _) => (LetterType::Formal, None, render_formal(&ctx)),
            (_, None) => {
                tracing::info!(
                    requested = letter_type.as_str(),
                    "no qualifying precedent, falling back to formal letter"
                );
                (LetterType::Formal, None, render_formal(&ctx))
            }
            (LetterType::PrecedentBased, Some(best)) => (
                LetterType::PrecedentBased,
                Some(best.historical_case.id.clone()),
                render_precedent(&ctx, best, matches.len(), None),
            ),
            (LetterType::Strategic, Some(best)) => (
                LetterType::Strategic,
                Some(best.historical_case.id.clone()),
                render_precedent(&ctx, best, matches.len(), Some(render_roadmap(&ctx, best))),
            ),
        };

        Letter {
            requested: letter_type,
            rendered,
            precedent_id,
            dated,
            body,
        }
    }
}

/// Parameter values with defaults already substituted.
struct LetterContext<'a> {
    today: String,
    organization: &'a str,
    country: &'a str,
    strategic_intent: &'a str,
    budget_cap: String,
    counterpart: &'a str,
    timeline: &'a str,
    revenue_band: &'a str,
    decision_authority: &'a str,
    horizon_months: u32,
}

impl<'a> LetterContext<'a> {
    fn new(p: &'a ReportParameters, dated: NaiveDate) -> Self {
        Self {
            today: format_letter_date(dated),
            organization: p.organization_name().unwrap_or(DEFAULT_ORGANIZATION_NAME),
            country: p.country().unwrap_or(DEFAULT_COUNTRY),
            strategic_intent: p.strategic_intent().unwrap_or(DEFAULT_STRATEGIC_INTENT),
            budget_cap: p
                .budget_cap()
                .map(ToString::to_string)
                .unwrap_or_else(|| DEFAULT_BUDGET_CAP.to_string()),
            counterpart: p.target_counterpart_type().unwrap_or(DEFAULT_COUNTERPART),
            timeline: p.expansion_timeline().unwrap_or(DEFAULT_EXPANSION_TIMELINE),
            revenue_band: p.revenue_band().unwrap_or(DEFAULT_REVENUE_BAND),
            decision_authority: p.decision_authority().unwrap_or(DEFAULT_DECISION_AUTHORITY),
            horizon_months: horizon_months(p.expansion_timeline()),
        }
    }

    fn signature(&self) -> String {
        format!(
            "Best regards,\n\n[Your Name]\n{}\n[Your Title]\n[Your Contact Information]\n",
            self.organization
        )
    }
}

fn render_formal(ctx: &LetterContext<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\nTo Whom It May Concern,\n\n", ctx.today));
    out.push_str(&format!(
        "PARTNERSHIP OPPORTUNITY: Strategic Investment in {}\n\n",
        ctx.country
    ));
    out.push_str(&format!(
        "{} is exploring partnership opportunities in {} and believes your organization would be an excellent match for this initiative.\n\n",
        ctx.organization, ctx.country
    ));
    out.push_str(&format!(
        "OPPORTUNITY OVERVIEW:\nWe are seeking to establish operations in {} with the strategic intent to {}. This represents a significant opportunity for mutual value creation.\n\n",
        ctx.country, ctx.strategic_intent
    ));
    out.push_str("KEY CONSIDERATIONS:\n");
    out.push_str(&format!("• Target Region: {}\n", ctx.country));
    out.push_str(&format!("• Investment Scale: {}\n", ctx.budget_cap));
    out.push_str(&format!("• Target Partners: {}\n", ctx.counterpart));
    out.push_str(&format!("• Timeline: {} to positive ROI\n\n", ctx.timeline));
    out.push_str(
        "NEXT STEPS:\n\
         We would like to propose an initial meeting to discuss:\n\
         1. Your organization's capabilities and interest in this market\n\
         2. Potential areas of collaboration and partnership structure\n\
         3. Commercial terms and mutual value creation\n\n\
         We anticipate reaching a framework agreement within 60 days.\n\n\
         ENGAGEMENT:\n\
         Please respond to indicate your availability for a call or meeting within the next two weeks.\n\n",
    );
    out.push_str(&ctx.signature());
    out
}

fn render_precedent(
    ctx: &LetterContext<'_>,
    best: &MatchResult,
    qualifying: usize,
    roadmap: Option<String>,
) -> String {
    let case = &best.historical_case;
    let outcomes = &case.outcomes;

    let jobs = outcomes
        .jobs_created
        .map(group_thousands)
        .unwrap_or_else(|| "Significant".to_string());
    let roi = match outcomes.roi_achieved {
        Some(roi) if roi > 0.0 => format!("{roi}x ROI"),
        _ => "significant value creation".to_string(),
    };
    let outcome_line = match outcomes.result {
        OutcomeResult::Success => "Sustainable, long-term operations",
        OutcomeResult::Mixed | OutcomeResult::Failure => "Important lessons for success",
    };
    let precedent_kind = match outcomes.result {
        OutcomeResult::Success => "successful precedent",
        OutcomeResult::Mixed | OutcomeResult::Failure => "a comparable precedent",
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n\nTo Whom It May Concern,\n\n", ctx.today));
    out.push_str(&format!(
        "STRATEGIC OPPORTUNITY: Investment Partnership in {}\n\n",
        ctx.country
    ));
    out.push_str(&format!(
        "{} is exploring strategic expansion opportunities in {} and would value your partnership in this initiative. Our analysis suggests remarkable alignment with successful historical precedents.\n\n",
        ctx.organization, ctx.country
    ));
    out.push_str(&format!(
        "EVIDENCE-BASED FOUNDATION:\nOur due diligence team has analyzed historical investment patterns across {} years and identified a particularly relevant precedent: the {} in {} ({}).\n\n",
        ANALYSIS_SPAN_YEARS, case.id, case.country, case.year
    ));
    out.push_str("That initiative achieved:\n");
    out.push_str(&format!("• {jobs} jobs created\n"));
    out.push_str(&format!("• {roi}\n"));
    out.push_str(&format!("• {outcome_line}\n\n"));

    out.push_str("APPLICABLE SUCCESS FACTORS:\n");
    out.push_str("Based on this historical precedent, we identify these as critical to your engagement:\n");
    let factors = &best.applicable_factors.success_factors;
    if factors.is_empty() {
        out.push_str("No specific success factors were recorded for this precedent.\n");
    }
    for (i, factor) in factors.iter().take(LETTER_SUCCESS_FACTORS).enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, factor));
    }
    out.push('\n');

    out.push_str(&format!(
        "STRATEGIC ALIGNMENT:\nYour organization's profile ({} revenue scale, {} decision authority) aligns exceptionally well with organizations that succeed in this phase of market development.\n\n",
        ctx.revenue_band, ctx.decision_authority
    ));
    // The roadmap replaces the standard engagement so the letter carries one phase schedule.
    match roadmap {
        Some(roadmap) => out.push_str(&roadmap),
        None => out.push_str(
            "PROPOSED ENGAGEMENT:\n\
             We propose a phased partnership:\n\
             • Phase 1 (Months 1-3): Strategic partnership framework and regulatory pathway\n\
             • Phase 2 (Months 4-12): Operational launch and initial market entry\n\
             • Phase 3 (Months 13+): Scaling and optimization based on historical timelines\n\n",
        ),
    }
    out.push_str(
        "TIMELINE & NEXT STEPS:\n\
         We recommend an initial exploratory meeting within the next 30 days to:\n\
         ✓ Validate market assumptions from our precedent analysis\n\
         ✓ Discuss government partnership opportunities\n\
         ✓ Outline resource requirements and ROI projections\n\n\
         Our analysis indicates that organizations that engage within this timeframe achieve their investment milestones ahead of schedule.\n\n",
    );
    out.push_str(&format!(
        "CONFIDENCE & SUPPORT:\nWith {}% similarity to {}, we approach this partnership with high confidence. Our team has deep expertise in implementing the identified success factors.\n\n",
        best.similarity.overall.rounded(),
        precedent_kind
    ));
    out.push_str("We look forward to partnering with you on this strategic opportunity.\n\n");
    out.push_str(&ctx.signature());
    out.push_str(&format!(
        "\n---\nThis letter is grounded in historical evidence analysis of {} similar investment {}.\nConfidence Level: {}\n",
        qualifying,
        if qualifying == 1 { "case" } else { "cases" },
        best.confidence_level.as_str().to_uppercase()
    ));
    out
}

/// Roadmap section for the strategic letter. Phase boundaries scale with the horizon in the same
/// proportions as the standard engagement (1/8 and 1/2 of the horizon).
fn render_roadmap(ctx: &LetterContext<'_>, best: &MatchResult) -> String {
    let (p1_end, p2_end) = phase_bounds(ctx.horizon_months);
    let factors = &best.applicable_factors.success_factors;
    let focus = |i: usize, fallback: &str| -> String {
        factors
            .get(i)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    let mut out = String::new();
    out.push_str("STRATEGIC ROADMAP:\n");
    out.push_str(&format!("Target counterparts: {}\n", ctx.counterpart));
    out.push_str(&format!("Investment envelope: {}\n", ctx.budget_cap));
    out.push_str(&format!(
        "Planning horizon: {} months ({})\n\n",
        ctx.horizon_months, ctx.timeline
    ));
    out.push_str(&format!(
        "Phase 1 - Foundation (Months 1-{}): {}\n",
        p1_end,
        focus(0, "Partnership framework and regulatory pathway")
    ));
    out.push_str(&format!(
        "Phase 2 - Launch (Months {}-{}): {}\n",
        p1_end + 1,
        p2_end,
        focus(1, "Operational launch and initial market entry")
    ));
    out.push_str(&format!(
        "Phase 3 - Scale (Months {}+): {}\n\n",
        p2_end + 1,
        focus(2, "Scaling and optimization")
    ));

    out.push_str(&format!(
        "Risks to mitigate (from the {} experience):\n",
        best.historical_case.id
    ));
    let risks = &best.applicable_factors.risk_factors;
    if risks.is_empty() {
        out.push_str("• No material risks were recorded for this precedent.\n");
    }
    for risk in risks {
        out.push_str(&format!("• {risk}\n"));
    }
    out.push('\n');
    out
}

fn phase_bounds(horizon: u32) -> (u32, u32) {
    let p1 = horizon.div_ceil(8).max(1);
    let p2 = horizon.div_ceil(2).max(p1 + 1);
    (p1, p2)
}

/// Reads a planning horizon in months from text such as "18-24 months" or "6 months to 2 years".
///
/// Each number takes the unit word that follows it (a range like "12-18 months" shares one unit;
/// a bare number counts as months). Four-digit numbers are calendar years, not durations. The
/// longest duration wins; the default applies when none is found.
fn horizon_months(timeline: Option<&str>) -> u32 {
    let Some(text) = timeline else {
        return DEFAULT_HORIZON_MONTHS;
    };

    let mut longest: Option<u32> = None;
    let mut pending: Vec<u32> = Vec::new();
    let mut settle = |pending: &mut Vec<u32>, per_unit: u32| {
        for n in pending.drain(..) {
            let months = n.saturating_mul(per_unit);
            longest = Some(longest.map_or(months, |m| m.max(months)));
        }
    };

    for token in text.split(|c: char| !c.is_ascii_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        if let Ok(n) = token.parse::<u32>() {
            if token.len() < 4 {
                pending.push(n);
            }
            continue;
        }
        let word = token.to_ascii_lowercase();
        if word.starts_with("year") || word.starts_with("yr") {
            settle(&mut pending, 12);
        } else if word.starts_with("month") || word == "mo" || word == "mos" {
            settle(&mut pending, 1);
        }
    }
    settle(&mut pending, 1);

    longest.map_or(DEFAULT_HORIZON_MONTHS, |m| m.clamp(3, 120))
}

/// "October 19, 2026".
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// en-US digit grouping: 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{HistoricalCase, Outcomes};
    use crate::clock::FixedClock;
    use crate::matching::{ApplicableFactors, ConfidenceLevel, Similarity};
    use nexus_types::Percentage;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn case_a() -> HistoricalCase {
        HistoricalCase::new(
            NonEmptyText::new("Case-A").unwrap(),
            NonEmptyText::new("Testland").unwrap(),
            2010,
            Outcomes {
                jobs_created: Some(5000),
                roi_achieved: Some(3.2),
                result: OutcomeResult::Success,
            },
        )
    }

    fn match_of(case: HistoricalCase, overall: f64) -> MatchResult {
        let overall = Percentage::new(overall).unwrap();
        MatchResult {
            historical_case: case,
            similarity: Similarity {
                overall,
                country: Percentage::FULL,
                scale: Percentage::ZERO,
                intent: Percentage::ZERO,
                outcome: Percentage::FULL,
            },
            confidence_level: ConfidenceLevel::from_similarity(overall),
            applicable_factors: ApplicableFactors {
                success_factors: vec![
                    "Anchor tenant commitment".into(),
                    "Government fast-track permits".into(),
                    "Local supplier development".into(),
                    "Export incentives".into(),
                ],
                risk_factors: vec!["Skills shortages in year two".into()],
            },
        }
    }

    fn acme() -> ReportParameters {
        ReportParameters {
            organization_name: Some("Acme Co".into()),
            country: Some("Testland".into()),
            ..Default::default()
        }
    }

    #[test]
    fn precedent_letter_embeds_case_details() {
        let generator = LetterGenerator::new(clock());
        let letter = generator.generate(
            &acme(),
            &[match_of(case_a(), 80.0)],
            LetterType::PrecedentBased,
        );
        let body = letter.as_str();

        assert!(body.contains("Case-A"));
        assert!(body.contains("Testland (2010)"));
        assert!(body.contains("5,000 jobs created"));
        assert!(body.contains("3.2x ROI"));
        assert!(body.contains("With 80% similarity"));
        assert!(body.contains("Confidence Level: HIGH"));
        assert!(body.contains("analysis of 1 similar investment case."));
        assert!(body.starts_with("October 19, 2026\n"));
        assert_eq!(letter.rendered, LetterType::PrecedentBased);
        assert_eq!(letter.precedent_id.as_ref().map(|id| id.as_str()), Some("Case-A"));
    }

    #[test]
    fn precedent_letter_quotes_top_three_factors() {
        let generator = LetterGenerator::new(clock());
        let body = generator
            .generate(&acme(), &[match_of(case_a(), 80.0)], LetterType::PrecedentBased)
            .body;
        assert!(body.contains("1. Anchor tenant commitment\n"));
        assert!(body.contains("3. Local supplier development\n"));
        assert!(!body.contains("Export incentives"));
    }

    #[test]
    fn missing_outcome_figures_degrade_gracefully() {
        let mut case = case_a();
        case.outcomes.jobs_created = None;
        case.outcomes.roi_achieved = None;
        case.outcomes.result = OutcomeResult::Mixed;
        let body = LetterGenerator::new(clock())
            .generate(&acme(), &[match_of(case, 70.0)], LetterType::PrecedentBased)
            .body;
        assert!(body.contains("• Significant jobs created"));
        assert!(body.contains("• significant value creation"));
        assert!(body.contains("• Important lessons for success"));
        assert!(body.contains("similarity to a comparable precedent"));
        assert!(body.contains("Confidence Level: MEDIUM"));
        assert!(body.contains("we approach this partnership with high confidence."));
    }

    #[test]
    fn formal_ignores_matches() {
        let generator = LetterGenerator::new(clock());
        let without = generator.generate(&acme(), &[], LetterType::Formal);
        let with = generator.generate(&acme(), &[match_of(case_a(), 90.0)], LetterType::Formal);
        assert_eq!(without.body, with.body);
        assert!(with.precedent_id.is_none());
        assert!(!with.body.contains("Case-A"));
    }

    #[test]
    fn evidence_styles_fall_back_to_formal_without_matches() {
        let generator = LetterGenerator::new(clock());
        let formal = generator.generate(&acme(), &[], LetterType::Formal);
        for style in [LetterType::PrecedentBased, LetterType::Strategic] {
            let letter = generator.generate(&acme(), &[], style);
            assert_eq!(letter.body, formal.body);
            assert_eq!(letter.rendered, LetterType::Formal);
            assert!(letter.is_fallback());
        }
    }

    #[test]
    fn formal_defaults_fill_missing_fields() {
        let body = LetterGenerator::new(clock())
            .generate(&ReportParameters::default(), &[], LetterType::Formal)
            .body;
        assert!(body.contains("Strategic Investment in your target market"));
        assert!(body.contains("Our Organization is exploring"));
        assert!(body.contains("strategic intent to expand our market presence."));
        assert!(body.contains("• Investment Scale: TBD"));
        assert!(body.contains("• Target Partners: Strategic partners"));
        assert!(body.contains("• Timeline: 18-24 months to positive ROI"));
        assert!(body.contains("[Your Name]\nOur Organization\n[Your Title]"));
    }

    #[test]
    fn generation_is_repeatable_for_fixed_date() {
        let generator = LetterGenerator::new(clock());
        let matches = [match_of(case_a(), 80.0)];
        for style in LetterType::ALL {
            let a = generator.generate(&acme(), &matches, style);
            let b = generator.generate(&acme(), &matches, style);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn strategic_adds_roadmap() {
        let generator = LetterGenerator::new(clock());
        let mut params = acme();
        params.expansion_timeline = Some("3 years".into());
        params.target_counterpart_type = Some("Provincial development banks".into());
        let matches = [match_of(case_a(), 80.0)];

        let precedent = generator.generate(&params, &matches, LetterType::PrecedentBased);
        let strategic = generator.generate(&params, &matches, LetterType::Strategic);

        assert!(!precedent.body.contains("STRATEGIC ROADMAP"));
        assert!(precedent
            .body
            .contains("• Phase 1 (Months 1-3): Strategic partnership framework"));
        assert_eq!(strategic.body.matches("Phase 1").count(), 1);
        assert!(!strategic.body.contains("PROPOSED ENGAGEMENT"));
        assert!(strategic.body.contains("STRATEGIC ROADMAP:"));
        assert!(strategic.body.contains("Target counterparts: Provincial development banks"));
        assert!(strategic.body.contains("Planning horizon: 36 months (3 years)"));
        assert!(strategic
            .body
            .contains("Phase 1 - Foundation (Months 1-5): Anchor tenant commitment"));
        assert!(strategic.body.contains("Phase 2 - Launch (Months 6-18)"));
        assert!(strategic.body.contains("Phase 3 - Scale (Months 19+)"));
        assert!(strategic.body.contains("• Skills shortages in year two"));
        assert_eq!(strategic.rendered, LetterType::Strategic);
    }

    #[test]
    fn letter_type_parses_variants() {
        assert_eq!("formal".parse::<LetterType>().unwrap(), LetterType::Formal);
        assert_eq!(
            "Precedent-Based".parse::<LetterType>().unwrap(),
            LetterType::PrecedentBased
        );
        assert_eq!("strategic".parse::<LetterType>().unwrap(), LetterType::Strategic);
        assert!("poem".parse::<LetterType>().is_err());
    }

    #[test]
    fn horizon_parsing() {
        assert_eq!(horizon_months(None), 24);
        assert_eq!(horizon_months(Some("18-24 months")), 24);
        assert_eq!(horizon_months(Some("2 years")), 24);
        assert_eq!(horizon_months(Some("ASAP")), 24);
        assert_eq!(horizon_months(Some("1 month")), 3);
        assert_eq!(horizon_months(Some("36")), 36);
    }

    #[test]
    fn horizon_pairs_numbers_with_their_units() {
        assert_eq!(horizon_months(Some("6 months to 2 years")), 24);
        assert_eq!(horizon_months(Some("12-18 months, launch by 2027")), 18);
        assert_eq!(horizon_months(Some("1-2 yrs")), 24);
        assert_eq!(horizon_months(Some("by 2030")), 24);
        assert_eq!(phase_bounds(24), (3, 12));
        assert_eq!(phase_bounds(3), (1, 2));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5000), "5,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn date_format_is_long_us() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_letter_date(d), "March 5, 2026");
    }
}
