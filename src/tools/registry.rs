// src/tools/registry.rs
// Registry of specialist strategies the classifier can dispatch to.

use std::fmt;

/// A specialist learning strategy with its own prompt and output budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialist {
    // STEM
    MathSolver,
    ScienceExplainer,
    CodingHelper,
    FormulaReference,

    // Language
    WritingAssistant,
    LiteratureAnalysis,
    LanguagePractice,
    GrammarChecker,

    // Social studies
    HistoryTimeline,
    GeographyHelper,
    EconomicsExplainer,
    PoliticalAnalysis,

    // Arts
    MusicTheory,
    ArtAnalysis,
    CreativeWriting,

    // Test prep
    TestStrategy,
    PracticeProblems,
    StudySchedule,
}

impl Specialist {
    pub const ALL: [Specialist; 18] = [
        Specialist::MathSolver,
        Specialist::ScienceExplainer,
        Specialist::CodingHelper,
        Specialist::FormulaReference,
        Specialist::WritingAssistant,
        Specialist::LiteratureAnalysis,
        Specialist::LanguagePractice,
        Specialist::GrammarChecker,
        Specialist::HistoryTimeline,
        Specialist::GeographyHelper,
        Specialist::EconomicsExplainer,
        Specialist::PoliticalAnalysis,
        Specialist::MusicTheory,
        Specialist::ArtAnalysis,
        Specialist::CreativeWriting,
        Specialist::TestStrategy,
        Specialist::PracticeProblems,
        Specialist::StudySchedule,
    ];

    /// Wire name the classifier is asked to return.
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialist::MathSolver => "math_solver",
            Specialist::ScienceExplainer => "science_explainer",
            Specialist::CodingHelper => "coding_helper",
            Specialist::FormulaReference => "formula_reference",
            Specialist::WritingAssistant => "writing_assistant",
            Specialist::LiteratureAnalysis => "literature_analysis",
            Specialist::LanguagePractice => "language_practice",
            Specialist::GrammarChecker => "grammar_checker",
            Specialist::HistoryTimeline => "history_timeline",
            Specialist::GeographyHelper => "geography_helper",
            Specialist::EconomicsExplainer => "economics_explainer",
            Specialist::PoliticalAnalysis => "political_analysis",
            Specialist::MusicTheory => "music_theory",
            Specialist::ArtAnalysis => "art_analysis",
            Specialist::CreativeWriting => "creative_writing",
            Specialist::TestStrategy => "test_strategy",
            Specialist::PracticeProblems => "practice_problems",
            Specialist::StudySchedule => "study_schedule",
        }
    }

    /// Looks up a specialist by its wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == s)
    }

    /// One-line capability description advertised to the classifier.
    pub fn description(&self) -> &'static str {
        match self {
            Specialist::MathSolver => "For solving mathematical problems, equations, calculations",
            Specialist::ScienceExplainer => "For explaining physics, chemistry, biology concepts",
            Specialist::CodingHelper => "For programming questions, debugging, algorithms",
            Specialist::FormulaReference => "For mathematical and scientific formula lookups",
            Specialist::WritingAssistant => "For essay writing, composition, writing improvement",
            Specialist::LiteratureAnalysis => "For analyzing poems, novels, literary works",
            Specialist::LanguagePractice => "For foreign language learning and practice",
            Specialist::GrammarChecker => "For checking grammar, style, and clarity of text",
            Specialist::HistoryTimeline => "For historical events, chronology, historical analysis",
            Specialist::GeographyHelper => "For geography, locations, climate, spatial questions",
            Specialist::EconomicsExplainer => "For explaining economic concepts and principles",
            Specialist::PoliticalAnalysis => "For political systems, concepts, balanced analysis",
            Specialist::MusicTheory => "For music theory concepts and notation",
            Specialist::ArtAnalysis => "For analyzing artworks and art history",
            Specialist::CreativeWriting => "For creative writing projects, stories, poetry",
            Specialist::TestStrategy => "For test preparation, exam strategies, study tips",
            Specialist::PracticeProblems => "For generating practice questions and exercises",
            Specialist::StudySchedule => "For building personalized study schedules",
        }
    }

    /// Header line prefixed to every specialist reply.
    pub fn header(&self) -> &'static str {
        match self {
            Specialist::MathSolver => "🔢 **Math Problem Solver**",
            Specialist::ScienceExplainer => "🔬 **Science Concept Explainer**",
            Specialist::CodingHelper => "💻 **Coding Helper**",
            Specialist::FormulaReference => "📐 **Formula Reference**",
            Specialist::WritingAssistant => "✍️ **Writing Assistant**",
            Specialist::LiteratureAnalysis => "📚 **Literature Analysis**",
            Specialist::LanguagePractice => "🌍 **Language Practice**",
            Specialist::GrammarChecker => "✅ **Grammar Check**",
            Specialist::HistoryTimeline => "📜 **History Timeline & Analysis**",
            Specialist::GeographyHelper => "🌍 **Geography Helper**",
            Specialist::EconomicsExplainer => "💰 **Economics Explainer**",
            Specialist::PoliticalAnalysis => "🏛️ **Political Analysis**",
            Specialist::MusicTheory => "🎵 **Music Theory Guide**",
            Specialist::ArtAnalysis => "🎨 **Art Analysis**",
            Specialist::CreativeWriting => "🖋️ **Creative Writing Assistant**",
            Specialist::TestStrategy => "🎯 **Test Preparation Strategy**",
            Specialist::PracticeProblems => "📝 **Practice Problems**",
            Specialist::StudySchedule => "📅 **Study Schedule Planner**",
        }
    }

    /// Output token budget for this specialist's completion.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Specialist::MathSolver
            | Specialist::ScienceExplainer
            | Specialist::CodingHelper
            | Specialist::WritingAssistant
            | Specialist::LiteratureAnalysis
            | Specialist::HistoryTimeline
            | Specialist::TestStrategy
            | Specialist::PracticeProblems => 800,
            Specialist::FormulaReference | Specialist::GrammarChecker => 600,
            Specialist::LanguagePractice
            | Specialist::GeographyHelper
            | Specialist::EconomicsExplainer
            | Specialist::PoliticalAnalysis
            | Specialist::MusicTheory
            | Specialist::ArtAnalysis
            | Specialist::CreativeWriting
            | Specialist::StudySchedule => 700,
        }
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_complete() {
        assert_eq!(Specialist::ALL.len(), 18);
    }

    #[test]
    fn test_wire_name_round_trip() {
        for tool in Specialist::ALL {
            assert_eq!(Specialist::from_str(tool.as_str()), Some(tool));
        }
        assert_eq!(Specialist::from_str("nonexistent_tool"), None);
    }

    #[test]
    fn test_token_budgets() {
        assert_eq!(Specialist::MathSolver.max_tokens(), 800);
        assert_eq!(Specialist::FormulaReference.max_tokens(), 600);
        assert_eq!(Specialist::GrammarChecker.max_tokens(), 600);
        assert_eq!(Specialist::MusicTheory.max_tokens(), 700);
    }

    #[test]
    fn test_headers_are_bold_titles() {
        for tool in Specialist::ALL {
            assert!(tool.header().contains("**"), "{} header missing title", tool);
        }
    }
}
