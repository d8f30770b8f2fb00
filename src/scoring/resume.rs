// src/scoring/resume.rs

/// Default keyword set the heuristic looks for.
pub const DEFAULT_KEYWORDS: [&str; 7] =
    ["Python", "Django", "SQL", "React", "AWS", "Docker", "API"];

const BASE_SCORE: i64 = 50;
const KEYWORD_BONUS: i64 = 5;
const DENSITY_PENALTY: i64 = 10;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 700;

/// Supported upload formats, sniffed from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    /// Page-sequence document, text pulled out of each page.
    Pdf,
    /// Paragraph-sequence plain-text document.
    Text,
    /// Anything else: accepted, but extraction yields no text.
    Unsupported,
}

impl ResumeFormat {
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
        match ext.as_str() {
            "pdf" => ResumeFormat::Pdf,
            "txt" | "md" => ResumeFormat::Text,
            _ => ResumeFormat::Unsupported,
        }
    }
}

/// Result of scoring one extracted resume text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAnalysis {
    pub score: i64,
    pub feedback: String,
}

/// Extracts plain text from an uploaded document.
///
/// Whitespace is collapsed to single spaces. Extraction never fails:
/// unreadable or unsupported input degrades to an empty string, which the
/// heuristic below turns into a low score rather than an error.
pub fn extract_text(bytes: &[u8], format: ResumeFormat) -> String {
    let raw = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes).unwrap_or_default(),
        ResumeFormat::Text => String::from_utf8_lossy(bytes).into_owned(),
        ResumeFormat::Unsupported => String::new(),
    };

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Scores extracted resume text against length bands and a keyword list.
///
/// Base 50; under 200 words or over 700 words costs 10 each with a warning;
/// each distinct keyword found (case-insensitive substring) adds 5. The
/// result is clamped to 0..=100. Pure function of its inputs.
pub fn score_resume(text: &str, keywords: &[&str]) -> ResumeAnalysis {
    let mut score = BASE_SCORE;
    let mut feedback: Vec<String> = Vec::new();

    let word_count = text.split_whitespace().count();
    if word_count < MIN_WORDS {
        score -= DENSITY_PENALTY;
        feedback.push("Content density too low.".to_string());
    } else if word_count > MAX_WORDS {
        score -= DENSITY_PENALTY;
        feedback.push("Content too verbose.".to_string());
    }

    let haystack = text.to_lowercase();
    let found: Vec<&str> = keywords
        .iter()
        .copied()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .collect();
    score += found.len() as i64 * KEYWORD_BONUS;

    feedback.push(format!("Found keys: {}", found.join(", ")));

    ResumeAnalysis {
        score: score.clamp(0, 100),
        feedback: feedback.join(" | "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_penalized_with_warning() {
        let analysis = score_resume("short resume", &DEFAULT_KEYWORDS);
        assert_eq!(analysis.score, 40);
        assert!(analysis.feedback.contains("Content density too low."));
    }

    #[test]
    fn verbose_text_penalized() {
        let text = "word ".repeat(800);
        let analysis = score_resume(&text, &DEFAULT_KEYWORDS);
        assert_eq!(analysis.score, 40);
        assert!(analysis.feedback.contains("Content too verbose."));
    }

    #[test]
    fn mid_band_text_keeps_base_score() {
        let text = "filler ".repeat(300);
        let analysis = score_resume(&text, &DEFAULT_KEYWORDS);
        assert_eq!(analysis.score, 50);
        assert!(!analysis.feedback.contains("too"));
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let upper = format!("{} PYTHON", "pad ".repeat(300));
        let lower = format!("{} python", "pad ".repeat(300));
        let a = score_resume(&upper, &DEFAULT_KEYWORDS);
        let b = score_resume(&lower, &DEFAULT_KEYWORDS);
        assert_eq!(a.score, b.score);
        assert_eq!(a.score, 55);
    }

    #[test]
    fn each_distinct_keyword_adds_five() {
        let text = format!("{} Python Django SQL", "pad ".repeat(300));
        let analysis = score_resume(&text, &DEFAULT_KEYWORDS);
        assert_eq!(analysis.score, 65);
        assert!(analysis.feedback.contains("Found keys: Python, Django, SQL"));
    }

    #[test]
    fn duplicate_keyword_counted_once() {
        let text = format!("{} Python Python Python", "pad ".repeat(300));
        let analysis = score_resume(&text, &DEFAULT_KEYWORDS);
        assert_eq!(analysis.score, 55);
    }

    #[test]
    fn score_clamped_to_100() {
        // All 7 keywords on a mid-band text: 50 + 35 = 85; pile on a custom
        // keyword list long enough to exceed 100.
        let keywords: Vec<&str> = vec![
            "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota",
            "kappa", "lambda", "mu",
        ];
        let text = format!("{} {}", "pad ".repeat(300), keywords.join(" "));
        let analysis = score_resume(&text, &keywords);
        assert_eq!(analysis.score, 100);
    }

    #[test]
    fn empty_text_clamps_at_floor() {
        let analysis = score_resume("", &DEFAULT_KEYWORDS);
        assert_eq!(analysis.score, 40);
        assert!(analysis.score >= 0);
    }

    #[test]
    fn scoring_is_pure() {
        let text = format!("{} Docker AWS", "pad ".repeat(250));
        let a = score_resume(&text, &DEFAULT_KEYWORDS);
        let b = score_resume(&text, &DEFAULT_KEYWORDS);
        assert_eq!(a, b);
    }

    #[test]
    fn unsupported_format_extracts_nothing() {
        assert_eq!(extract_text(b"\x00\x01\x02", ResumeFormat::Unsupported), "");
    }

    #[test]
    fn text_format_collapses_whitespace() {
        let out = extract_text(b"one\n\ntwo   three\t", ResumeFormat::Text);
        assert_eq!(out, "one two three");
    }

    #[test]
    fn format_sniffing_from_extension() {
        assert_eq!(ResumeFormat::from_filename("cv.PDF"), ResumeFormat::Pdf);
        assert_eq!(ResumeFormat::from_filename("cv.txt"), ResumeFormat::Text);
        assert_eq!(
            ResumeFormat::from_filename("cv.docx"),
            ResumeFormat::Unsupported
        );
        assert_eq!(ResumeFormat::from_filename("noext"), ResumeFormat::Unsupported);
    }
}
