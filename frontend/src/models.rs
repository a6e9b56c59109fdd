//! Request / response payloads exchanged with the resume service, plus the
//! small value types the view derives from them.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ATS_KEYWORDS, SCORE_GOOD_COLOR, SCORE_GOOD_THRESHOLD, SCORE_POOR_COLOR, SCORE_WARNING_COLOR,
    SCORE_WARNING_THRESHOLD, TARGET_ROLE,
};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `/login` answers 200 in both cases: `{"access_token": ...}` on success,
/// `{"error": ...}` on bad credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenOut {
    pub access_token: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupOut {
    pub message: Option<String>,
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct UploadOut {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub extracted_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsScoreRequest {
    pub resume_text: String,
    pub job_keywords: Vec<String>,
}

impl AtsScoreRequest {
    /// Score request against the fixed keyword list.
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_keywords: ATS_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AtsScoreOut {
    pub score: f64,
    pub matched_keywords: Option<u32>,
    pub total_keywords: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhanceRequest {
    pub resume_text: String,
    pub target_role: String,
}

impl EnhanceRequest {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self { resume_text: resume_text.into(), target_role: TARGET_ROLE.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceOut {
    pub enhanced_resume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRequest {
    pub resume_text: String,
}

/// The generated file stays on the server; the path is only logged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportOut {
    pub pdf_file: Option<String>,
    pub docx_file: Option<String>,
}

impl ExportOut {
    pub fn generated_path(&self, format: ExportFormat) -> Option<&str> {
        match format {
            ExportFormat::Pdf => self.pdf_file.as_deref(),
            ExportFormat::Docx => self.docx_file.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "/generate-pdf",
            ExportFormat::Docx => "/generate-docx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Docx => "DOCX",
        }
    }

    pub fn success_message(&self) -> String {
        format!("{} generated (check backend/generated)", self.label())
    }

    pub fn failure_message(&self) -> String {
        format!("{} export failed", self.label())
    }
}

// ---------------------------------------------------------------------------
// ATS score
// ---------------------------------------------------------------------------

/// Compatibility score, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtsScore(u8);

impl AtsScore {
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Clamp whatever number the service sent into range.  NaN maps to 0.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(0);
        }
        Self(raw.clamp(0.0, 100.0).round() as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.0)
    }

    /// Display form, e.g. `"82%"`.
    pub fn percent(&self) -> String {
        format!("{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warning,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= SCORE_GOOD_THRESHOLD {
            ScoreBand::Good
        } else if score >= SCORE_WARNING_THRESHOLD {
            ScoreBand::Warning
        } else {
            ScoreBand::Poor
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Good => SCORE_GOOD_COLOR,
            ScoreBand::Warning => SCORE_WARNING_COLOR,
            ScoreBand::Poor => SCORE_POOR_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(75), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(74), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(50), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(49), ScoreBand::Poor);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Poor);
    }

    proptest! {
        #[test]
        fn band_is_a_step_function(s in 0u8..=100) {
            let band = AtsScore::new(s).band();
            prop_assert_eq!(band == ScoreBand::Good, s >= 75);
            prop_assert_eq!(band == ScoreBand::Warning, (50..75).contains(&s));
            prop_assert_eq!(band == ScoreBand::Poor, s < 50);
        }

        #[test]
        fn raw_scores_are_clamped(raw in -1000.0f64..1000.0) {
            prop_assert!(AtsScore::from_raw(raw).value() <= 100);
        }
    }

    #[test]
    fn score_display() {
        assert_eq!(AtsScore::from_raw(82.0).percent(), "82%");
        assert_eq!(AtsScore::from_raw(40.0).band().color(), "#dc2626");
        assert_eq!(AtsScore::from_raw(f64::NAN).value(), 0);
    }

    #[test]
    fn score_request_carries_fixed_keywords() {
        let body = serde_json::to_value(AtsScoreRequest::new("Experienced engineer")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "resume_text": "Experienced engineer",
                "job_keywords": ["python", "fastapi", "sql", "react"]
            })
        );
    }

    #[test]
    fn enhance_request_targets_fixed_role() {
        let body = serde_json::to_value(EnhanceRequest::new("cv")).unwrap();
        assert_eq!(body["target_role"], "Software Developer");
    }

    #[test]
    fn login_error_body_has_no_token() {
        let out: TokenOut = serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
        assert!(out.access_token.is_none());
        assert_eq!(out.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn upload_response_ignores_extra_fields() {
        let out: UploadOut =
            serde_json::from_str(r#"{"filename": "cv.pdf", "extracted_text": "hello"}"#).unwrap();
        assert_eq!(out.extracted_text, "hello");
        assert_eq!(out.filename.as_deref(), Some("cv.pdf"));
    }

    #[test]
    fn export_messages_and_paths() {
        let out: ExportOut = serde_json::from_str(r#"{"docx_file": "generated/x.docx"}"#).unwrap();
        assert_eq!(out.generated_path(ExportFormat::Docx), Some("generated/x.docx"));
        assert_eq!(out.generated_path(ExportFormat::Pdf), None);
        assert_eq!(ExportFormat::Pdf.success_message(), "PDF generated (check backend/generated)");
        assert_eq!(ExportFormat::Docx.endpoint(), "/generate-docx");
    }
}
