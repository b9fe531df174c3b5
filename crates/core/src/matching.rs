//! Precedent matching.
//!
//! Each historical case is scored against the report parameters on four dimensions:
//!
//! | dimension | weight | full credit | partial credit |
//! |-----------|--------|-------------|----------------|
//! | country   | 40     | same country | same region (0.6) |
//! | scale     | 20     | same tier | adjacent tier (0.5) |
//! | intent    | 25     | all intent keywords in sector tags | overlap coefficient |
//! | outcome   | 15     | success | mixed (0.5), failure (0.2) |
//!
//! A dimension that cannot be compared because either side lacks data earns neutral credit
//! (0.5), so sparse parameters neither inflate nor sink a score. Weights sum to 100, which keeps
//! the overall score within `0..=100` without rescaling.

use crate::cases::{CaseStore, HistoricalCase, OutcomeResult};
use crate::constants::{
    COUNTRY_WEIGHT, DEFAULT_MIN_SIMILARITY, HIGH_CONFIDENCE_FROM, INTENT_WEIGHT,
    MEDIUM_CONFIDENCE_FROM, NEUTRAL_CREDIT, OUTCOME_WEIGHT, SAME_REGION_CREDIT, SCALE_WEIGHT,
};
use crate::error::NexusResult;
use crate::parameters::ReportParameters;
use crate::regions::{canonical_country, region_of};
use nexus_types::Percentage;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Minimum overall similarity a case needs to be returned as a precedent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinSimilarity(Percentage);

impl MinSimilarity {
    /// From a fraction in `0.0..=1.0`, e.g. `0.65`.
    pub fn from_fraction(fraction: f64) -> NexusResult<Self> {
        Ok(Self(Percentage::from_fraction(fraction)?))
    }

    /// From a percentage in `0.0..=100.0`, e.g. `65.0`.
    pub fn from_percent(percent: f64) -> NexusResult<Self> {
        Ok(Self(Percentage::new(percent)?))
    }

    pub fn percent(self) -> Percentage {
        self.0
    }

    pub fn admits(self, score: Percentage) -> bool {
        score.value() >= self.0.value()
    }
}

impl Default for MinSimilarity {
    fn default() -> Self {
        Self(Percentage::saturating(DEFAULT_MIN_SIMILARITY * 100.0))
    }
}

/// Per-dimension similarity, each in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Similarity {
    pub overall: Percentage,
    pub country: Percentage,
    pub scale: Percentage,
    pub intent: Percentage,
    pub outcome: Percentage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_similarity(overall: Percentage) -> Self {
        let v = overall.value();
        if v >= HIGH_CONFIDENCE_FROM {
            ConfidenceLevel::High
        } else if v >= MEDIUM_CONFIDENCE_FROM {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Factors from the precedent that carry over to the current scenario.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableFactors {
    /// Most relevant first.
    pub success_factors: Vec<String>,
    pub risk_factors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub historical_case: HistoricalCase,
    pub similarity: Similarity,
    pub confidence_level: ConfidenceLevel,
    pub applicable_factors: ApplicableFactors,
}

/// Scores cases from an injected store against report parameters.
#[derive(Clone, Debug)]
pub struct PrecedentMatchingEngine<S> {
    store: S,
}

impl<S: CaseStore> PrecedentMatchingEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns every case scoring at least `min_similarity`, best first.
    ///
    /// Equal scores are ordered by the more recent `year`, then by id, so the result is fully
    /// deterministic. An empty vector means no precedent qualified; it is not an error.
    ///
    /// # Errors
    ///
    /// Propagates failures from the case store.
    pub fn find_matches(
        &self,
        parameters: &ReportParameters,
        min_similarity: MinSimilarity,
    ) -> NexusResult<Vec<MatchResult>> {
        let cases = self.store.historical_cases()?;
        let intent = keywords(parameters.strategic_intent().unwrap_or_default());

        let mut matches: Vec<MatchResult> = cases
            .iter()
            .filter_map(|case| {
                let similarity = score_case(parameters, case);
                tracing::debug!(
                    case = case.id.as_str(),
                    overall = similarity.overall.value(),
                    "scored historical case"
                );
                min_similarity
                    .admits(similarity.overall)
                    .then(|| MatchResult {
                        historical_case: case.clone(),
                        similarity,
                        confidence_level: ConfidenceLevel::from_similarity(similarity.overall),
                        applicable_factors: applicable_factors(case, &intent),
                    })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .overall
                .value()
                .total_cmp(&a.similarity.overall.value())
                .then_with(|| b.historical_case.year.cmp(&a.historical_case.year))
                .then_with(|| a.historical_case.id.cmp(&b.historical_case.id))
        });

        tracing::info!(
            "{} of {} historical cases matched at >= {}",
            matches.len(),
            cases.len(),
            min_similarity.percent()
        );
        Ok(matches)
    }
}

/// Computes the similarity of one case to the parameters.
pub fn score_case(parameters: &ReportParameters, case: &HistoricalCase) -> Similarity {
    let country = country_credit(parameters, case);
    let scale = scale_credit(parameters, case);
    let intent = intent_credit(parameters, case);
    let outcome = outcome_credit(case.outcomes.result);

    let overall = COUNTRY_WEIGHT * country
        + SCALE_WEIGHT * scale
        + INTENT_WEIGHT * intent
        + OUTCOME_WEIGHT * outcome;

    Similarity {
        overall: Percentage::saturating(overall),
        country: Percentage::saturating(country * 100.0),
        scale: Percentage::saturating(scale * 100.0),
        intent: Percentage::saturating(intent * 100.0),
        outcome: Percentage::saturating(outcome * 100.0),
    }
}

fn country_credit(parameters: &ReportParameters, case: &HistoricalCase) -> f64 {
    let Some(country) = parameters.country() else {
        return NEUTRAL_CREDIT;
    };
    if canonical_country(country) == canonical_country(case.country.as_str()) {
        return 1.0;
    }
    match (region_of(country), case.region()) {
        (Some(a), Some(b)) if a == b => SAME_REGION_CREDIT,
        _ => 0.0,
    }
}

fn scale_credit(parameters: &ReportParameters, case: &HistoricalCase) -> f64 {
    match (parameters.scale_tier(), case.scale) {
        (Some(a), Some(b)) => match a.distance(b) {
            0 => 1.0,
            1 => 0.5,
            _ => 0.0,
        },
        _ => NEUTRAL_CREDIT,
    }
}

fn intent_credit(parameters: &ReportParameters, case: &HistoricalCase) -> f64 {
    let intent = keywords(parameters.strategic_intent().unwrap_or_default());
    let tags = keywords(&case.sectors.join(" "));
    if intent.is_empty() || tags.is_empty() {
        return NEUTRAL_CREDIT;
    }
    let shared = intent.intersection(&tags).count();
    shared as f64 / intent.len().min(tags.len()) as f64
}

fn outcome_credit(result: OutcomeResult) -> f64 {
    match result {
        OutcomeResult::Success => 1.0,
        OutcomeResult::Mixed => 0.5,
        OutcomeResult::Failure => 0.2,
    }
}

/// Success factors ordered by how many intent keywords they mention; ties keep dataset order.
fn applicable_factors(case: &HistoricalCase, intent: &BTreeSet<String>) -> ApplicableFactors {
    let mut success_factors = case.success_factors.clone();
    if !intent.is_empty() {
        success_factors
            .sort_by_key(|factor| Reverse(keywords(factor).intersection(intent).count()));
    }
    ApplicableFactors {
        success_factors,
        risk_factors: case.risk_factors.clone(),
    }
}

const STOPWORDS: &[&str] = &[
    "and", "the", "for", "with", "into", "from", "our", "their", "its", "new", "via", "per",
    "market", "markets", "expand", "expansion", "presence", "strategic", "strategy",
];

/// Lowercased content words of at least three characters, with a naive plural strip.
fn keywords(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() >= 3 && !STOPWORDS.contains(&w.as_str()))
        .map(|w| {
            if w.len() > 4 && w.ends_with("ies") {
                format!("{}y", &w[..w.len() - 3])
            } else if w.len() > 4 && w.ends_with('s') && !w.ends_with("ss") {
                w[..w.len() - 1].to_string()
            } else {
                w
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{InMemoryCaseStore, Outcomes};
    use crate::parameters::ScaleTier;
    use nexus_types::NonEmptyText;

    fn case(id: &str, country: &str, year: i32, result: OutcomeResult) -> HistoricalCase {
        HistoricalCase::new(
            NonEmptyText::new(id).unwrap(),
            NonEmptyText::new(country).unwrap(),
            year,
            Outcomes {
                jobs_created: None,
                roi_achieved: None,
                result,
            },
        )
    }

    fn params(country: &str) -> ReportParameters {
        ReportParameters {
            organization_name: Some("Acme Co".into()),
            country: Some(country.into()),
            ..Default::default()
        }
    }

    fn engine(cases: Vec<HistoricalCase>) -> PrecedentMatchingEngine<InMemoryCaseStore> {
        PrecedentMatchingEngine::new(InMemoryCaseStore::new(cases).unwrap())
    }

    #[test]
    fn min_similarity_constructors_agree() {
        assert_eq!(
            MinSimilarity::from_fraction(0.65).unwrap().percent().rounded(),
            MinSimilarity::from_percent(65.0).unwrap().percent().rounded()
        );
        assert_eq!(MinSimilarity::default().percent().rounded(), 65);
        assert!(MinSimilarity::from_fraction(65.0).is_err());
        assert!(MinSimilarity::from_percent(f64::INFINITY).is_err());
    }

    #[test]
    fn exact_country_with_sparse_data() {
        let s = score_case(&params("Testland"), &case("A", "Testland", 2010, OutcomeResult::Success));
        assert_eq!(s.country, Percentage::FULL);
        assert!((s.overall.value() - 77.5).abs() < 1e-9);
    }

    #[test]
    fn same_region_earns_partial_credit() {
        let s = score_case(&params("Ghana"), &case("K", "Kenya", 2010, OutcomeResult::Success));
        assert!((s.country.value() - 60.0).abs() < 1e-9);

        let s = score_case(&params("Japan"), &case("K", "Kenya", 2010, OutcomeResult::Success));
        assert_eq!(s.country, Percentage::ZERO);
    }

    #[test]
    fn scale_distance_scoring() {
        let mut c = case("S", "Testland", 2010, OutcomeResult::Success);
        c.scale = Some(ScaleTier::Large);
        let mut p = params("Testland");

        p.revenue_band = Some("$250M+".into());
        assert_eq!(score_case(&p, &c).scale, Percentage::FULL);

        p.revenue_band = Some("$50M".into());
        assert!((score_case(&p, &c).scale.value() - 50.0).abs() < 1e-9);

        p.revenue_band = Some("$500K".into());
        assert_eq!(score_case(&p, &c).scale, Percentage::ZERO);
    }

    #[test]
    fn intent_overlap_uses_sector_tags() {
        let mut c = case("I", "Testland", 2010, OutcomeResult::Success);
        c.sectors = vec!["renewable energy".into(), "grid infrastructure".into()];
        let mut p = params("Testland");

        p.strategic_intent = Some("Build renewable energy capacity".into());
        let s = score_case(&p, &c);
        // {build, renewable, energy, capacity} vs {renewable, energy, grid, infrastructure}
        assert!((s.intent.value() - 50.0).abs() < 1e-9);

        p.strategic_intent = Some("Expand market presence".into());
        assert!((score_case(&p, &c).intent.value() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn outcome_weights_success_highest() {
        let p = params("Testland");
        let success = score_case(&p, &case("a", "Testland", 2000, OutcomeResult::Success));
        let mixed = score_case(&p, &case("b", "Testland", 2000, OutcomeResult::Mixed));
        let failure = score_case(&p, &case("c", "Testland", 2000, OutcomeResult::Failure));
        assert!(success.overall > mixed.overall);
        assert!(mixed.overall > failure.overall);
    }

    #[test]
    fn results_are_bounded_and_sorted() {
        let store = InMemoryCaseStore::builtin().unwrap();
        let engine = PrecedentMatchingEngine::new(store);
        let scenarios = [
            ReportParameters::default(),
            params("Vietnam"),
            ReportParameters {
                country: Some("Kenya".into()),
                strategic_intent: Some("agritech supply chain".into()),
                revenue_band: Some("$10M-$50M".into()),
                ..Default::default()
            },
        ];

        for p in &scenarios {
            let matches = engine
                .find_matches(p, MinSimilarity::from_percent(0.0).unwrap())
                .unwrap();
            assert_eq!(matches.len(), engine.store().len());
            for m in &matches {
                let v = m.similarity.overall.value();
                assert!((0.0..=100.0).contains(&v));
            }
            for pair in matches.windows(2) {
                assert!(pair[0].similarity.overall >= pair[1].similarity.overall);
            }
        }
    }

    #[test]
    fn higher_threshold_returns_subset() {
        let engine = PrecedentMatchingEngine::new(InMemoryCaseStore::builtin().unwrap());
        let p = ReportParameters {
            country: Some("Malaysia".into()),
            strategic_intent: Some("electronics manufacturing".into()),
            ..Default::default()
        };

        let mut previous: Option<Vec<String>> = None;
        for t in [90.0, 75.0, 65.0, 50.0, 25.0, 0.0] {
            let ids: Vec<String> = engine
                .find_matches(&p, MinSimilarity::from_percent(t).unwrap())
                .unwrap()
                .into_iter()
                .map(|m| m.historical_case.id.into_inner())
                .collect();
            if let Some(stricter) = &previous {
                assert!(stricter.iter().all(|id| ids.contains(id)));
            }
            previous = Some(ids);
        }
    }

    #[test]
    fn ties_prefer_recent_year_then_id() {
        let engine = engine(vec![
            case("Old", "Testland", 1999, OutcomeResult::Success),
            case("New-B", "Testland", 2015, OutcomeResult::Success),
            case("New-A", "Testland", 2015, OutcomeResult::Success),
        ]);
        let ids: Vec<String> = engine
            .find_matches(&params("Testland"), MinSimilarity::default())
            .unwrap()
            .into_iter()
            .map(|m| m.historical_case.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["New-A", "New-B", "Old"]);
    }

    #[test]
    fn threshold_of_one_hundred_without_perfect_case_is_empty() {
        let engine = engine(vec![case("A", "Testland", 2010, OutcomeResult::Success)]);
        let matches = engine
            .find_matches(&params("Testland"), MinSimilarity::from_percent(100.0).unwrap())
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn below_threshold_cases_are_dropped() {
        let engine = engine(vec![
            case("Home", "Testland", 2010, OutcomeResult::Success),
            case("Away", "Elsewhere", 2010, OutcomeResult::Failure),
        ]);
        let matches = engine
            .find_matches(&params("Testland"), MinSimilarity::default())
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].historical_case.id.as_str(), "Home");
        assert_eq!(matches[0].confidence_level, ConfidenceLevel::Medium);
    }

    #[test]
    fn success_factors_follow_intent() {
        let mut c = case("F", "Testland", 2010, OutcomeResult::Success);
        c.success_factors = vec![
            "Government partnership".into(),
            "Workforce training programmes".into(),
            "Export logistics corridor".into(),
        ];
        let engine = engine(vec![c]);
        let p = ReportParameters {
            country: Some("Testland".into()),
            strategic_intent: Some("export logistics hub".into()),
            ..Default::default()
        };
        let m = &engine.find_matches(&p, MinSimilarity::default()).unwrap()[0];
        assert_eq!(
            m.applicable_factors.success_factors,
            vec![
                "Export logistics corridor".to_string(),
                "Government partnership".to_string(),
                "Workforce training programmes".to_string(),
            ]
        );
    }

    #[test]
    fn confidence_levels_follow_cutoffs() {
        let level = |v| ConfidenceLevel::from_similarity(Percentage::new(v).unwrap());
        assert_eq!(level(80.0), ConfidenceLevel::High);
        assert_eq!(level(79.9), ConfidenceLevel::Medium);
        assert_eq!(level(65.0), ConfidenceLevel::Medium);
        assert_eq!(level(64.9), ConfidenceLevel::Low);
    }

    #[test]
    fn country_aliases_count_as_same_country() {
        let store = InMemoryCaseStore::builtin().unwrap();
        let gulf = store.get("Gulf Logistics Free Zone Expansion").unwrap();
        let mekong = store.get("Mekong Delta Agri-Processing Zone").unwrap();

        assert_eq!(score_case(&params("UAE"), gulf).country, Percentage::FULL);
        assert_eq!(
            score_case(&params("United Arab Emirates"), gulf).country,
            Percentage::FULL
        );
        assert_eq!(score_case(&params("Viet Nam"), mekong).country, Percentage::FULL);
    }

    #[test]
    fn ies_plurals_match_singular_tags() {
        assert_eq!(keywords("batteries"), keywords("battery"));
        assert_eq!(keywords("Economies"), keywords("economy"));

        let mut c = case("B", "Testland", 2010, OutcomeResult::Success);
        c.sectors = vec!["battery".into()];
        let mut p = params("Testland");
        p.strategic_intent = Some("batteries".into());
        assert_eq!(score_case(&p, &c).intent, Percentage::FULL);
    }

    #[test]
    fn keywords_drop_stopwords_and_plurals() {
        let k = keywords("Expand into new markets with Solar panels and batteries");
        let expected: BTreeSet<String> = ["solar", "panel", "battery"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(k, expected);
    }
}
