// src/annotate/mod.rs
// Keyword-driven annotation of student queries: topics, difficulty,
// subject, and question type. Matching is plain substring matching on
// the lowercased query; declaration order breaks ties.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on topics extracted from a single query.
const MAX_TOPICS: usize = 3;

/// Academic subject assigned to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    English,
    History,
    Geography,
    Art,
    Music,
    General,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::ComputerScience => "Computer Science",
            Subject::English => "English",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Art => "Art",
            Subject::Music => "Music",
            Subject::General => "General",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated difficulty of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Ordinal used for trend comparison.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of the question being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ProblemSolving,
    Conceptual,
    Analytical,
    Assistance,
    General,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ProblemSolving => "problem_solving",
            QuestionType::Conceptual => "conceptual",
            QuestionType::Analytical => "analytical",
            QuestionType::Assistance => "assistance",
            QuestionType::General => "general",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topic vocabulary, scanned in order. Grouped by loose domain but
/// matched as one flat list.
const TOPIC_KEYWORDS: &[&str] = &[
    // math
    "equation",
    "algebra",
    "geometry",
    "calculus",
    "trigonometry",
    "statistics",
    "probability",
    "derivative",
    "integral",
    "formula",
    // science
    "physics",
    "chemistry",
    "biology",
    "atom",
    "molecule",
    "cell",
    "force",
    "energy",
    "reaction",
    "evolution",
    // language
    "grammar",
    "essay",
    "writing",
    "literature",
    "poem",
    "analysis",
    "thesis",
    "paragraph",
    "vocabulary",
    // history
    "war",
    "revolution",
    "empire",
    "civilization",
    "timeline",
    "ancient",
    "medieval",
    "modern",
    "century",
];

const ADVANCED_INDICATORS: &[&str] = &[
    "advanced",
    "complex",
    "analyze",
    "evaluate",
    "synthesize",
    "derivative",
    "integral",
    "quantum",
    "molecular",
    "theorem",
];

const BASIC_INDICATORS: &[&str] = &["what is", "how to", "explain", "simple", "basic", "introduction"];

/// Subject vocabularies, scanned in declaration order. On a score tie
/// the earlier subject wins.
const SUBJECT_KEYWORDS: &[(Subject, &[&str])] = &[
    (
        Subject::Mathematics,
        &["math", "algebra", "geometry", "calculus", "equation", "formula", "solve"],
    ),
    (
        Subject::Physics,
        &["physics", "force", "energy", "momentum", "wave", "electricity", "magnetism"],
    ),
    (
        Subject::Chemistry,
        &["chemistry", "atom", "molecule", "reaction", "compound", "element"],
    ),
    (
        Subject::Biology,
        &["biology", "cell", "dna", "evolution", "organism", "genetics", "anatomy"],
    ),
    (
        Subject::ComputerScience,
        &["programming", "code", "algorithm", "software", "computer", "python", "java"],
    ),
    (
        Subject::English,
        &["essay", "writing", "grammar", "literature", "poem", "analysis", "thesis"],
    ),
    (
        Subject::History,
        &["history", "war", "empire", "revolution", "ancient", "medieval", "timeline"],
    ),
    (
        Subject::Geography,
        &["geography", "map", "climate", "country", "continent", "ocean", "mountain"],
    ),
    (
        Subject::Art,
        &["art", "painting", "sculpture", "artist", "museum", "drawing", "design"],
    ),
    (
        Subject::Music,
        &["music", "note", "chord", "rhythm", "melody", "instrument", "composer"],
    ),
];

/// Question-type vocabularies, checked in order; the first group with
/// any hit wins.
const QUESTION_TYPE_KEYWORDS: &[(QuestionType, &[&str])] = &[
    (QuestionType::ProblemSolving, &["solve", "calculate", "find", "compute"]),
    (QuestionType::Conceptual, &["explain", "what is", "how does", "why"]),
    (QuestionType::Analytical, &["analyze", "compare", "evaluate", "discuss"]),
    (QuestionType::Assistance, &["help", "check", "review", "feedback"]),
];

/// Extracts up to three topic keywords from the query, in vocabulary
/// scan order. Each keyword appears at most once.
pub fn extract_topics(query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();

    let mut topics = Vec::new();
    for keyword in TOPIC_KEYWORDS {
        if query_lower.contains(keyword) {
            topics.push((*keyword).to_string());
            if topics.len() == MAX_TOPICS {
                break;
            }
        }
    }
    topics
}

/// Estimates difficulty from indicator counts. Advanced must strictly
/// outnumber basic; any basic hit otherwise means beginner.
pub fn estimate_difficulty(query: &str) -> Difficulty {
    let query_lower = query.to_lowercase();

    let advanced = ADVANCED_INDICATORS.iter().filter(|kw| query_lower.contains(*kw)).count();
    let basic = BASIC_INDICATORS.iter().filter(|kw| query_lower.contains(*kw)).count();

    if advanced > basic {
        Difficulty::Advanced
    } else if basic > 0 {
        Difficulty::Beginner
    } else {
        Difficulty::Intermediate
    }
}

/// Picks the subject with the highest keyword score. Zero scores fall
/// through to General; the first subject to reach the maximum keeps it.
pub fn identify_subject(query: &str) -> Subject {
    let query_lower = query.to_lowercase();

    let mut best = (Subject::General, 0usize);
    for (subject, keywords) in SUBJECT_KEYWORDS {
        let score = keywords.iter().filter(|kw| query_lower.contains(*kw)).count();
        if score > best.1 {
            best = (*subject, score);
        }
    }
    best.0
}

/// Classifies the question shape by the first matching keyword group.
pub fn classify_question_type(query: &str) -> QuestionType {
    let query_lower = query.to_lowercase();

    for (question_type, keywords) in QUESTION_TYPE_KEYWORDS {
        if keywords.iter().any(|kw| query_lower.contains(kw)) {
            return *question_type;
        }
    }
    QuestionType::General
}
