//! Request and response bodies.
//!
//! Core types are carried as-is and documented as opaque objects in the OpenAPI schema; their
//! JSON shape is defined by their serde derives in `nexus-core`.

use nexus_core::{HistoricalCase, Letter, LetterType, MatchResult, ReportParameters};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
    pub cases_loaded: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCasesRes {
    #[schema(value_type = Vec<Object>)]
    pub cases: Vec<HistoricalCase>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesReq {
    #[schema(value_type = Object)]
    pub parameters: ReportParameters,
    /// Fraction between 0 and 1; the server default applies when omitted.
    #[serde(default)]
    pub min_similarity: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesRes {
    /// Threshold actually applied, as a percentage.
    pub min_similarity: f64,
    #[schema(value_type = Vec<Object>)]
    pub matches: Vec<MatchResult>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLetterReq {
    #[schema(value_type = Object)]
    pub parameters: ReportParameters,
    #[schema(value_type = String, example = "precedent_based")]
    pub letter_type: LetterType,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLetterRes {
    #[schema(value_type = String)]
    pub requested: LetterType,
    #[schema(value_type = String)]
    pub rendered: LetterType,
    pub precedent_id: Option<String>,
    /// ISO 8601 date embedded in the letter.
    pub dated: String,
    pub body: String,
}

impl From<Letter> for GenerateLetterRes {
    fn from(letter: Letter) -> Self {
        Self {
            requested: letter.requested,
            rendered: letter.rendered,
            precedent_id: letter.precedent_id.map(|id| id.into_inner()),
            dated: letter.dated.to_string(),
            body: letter.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_request_uses_snake_case_letter_type() {
        let req: GenerateLetterReq = serde_json::from_str(
            r#"{"parameters":{"country":"Kenya"},"letterType":"precedent_based"}"#,
        )
        .unwrap();
        assert_eq!(req.letter_type, LetterType::PrecedentBased);
        assert_eq!(req.parameters.country(), Some("Kenya"));
    }

    #[test]
    fn match_request_threshold_is_optional() {
        let req: FindMatchesReq = serde_json::from_str(r#"{"parameters":{}}"#).unwrap();
        assert_eq!(req.min_similarity, None);
    }
}
