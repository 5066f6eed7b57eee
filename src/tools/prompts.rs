// src/tools/prompts.rs
// Instruction documents for each specialist. All are level-aware except
// the two pure reference tools; the schedule planner also reads the
// learner's preferred subjects.

use super::registry::Specialist;
use crate::profile::{LearnerProfile, LearningLevel};

impl Specialist {
    /// Builds the single-turn instruction document for this specialist.
    pub fn build_prompt(&self, query: &str, profile: &LearnerProfile) -> String {
        let level = profile.learning_level;
        match self {
            Specialist::MathSolver => math_solver(query, level),
            Specialist::ScienceExplainer => science_explainer(query, level),
            Specialist::CodingHelper => coding_helper(query, level),
            Specialist::FormulaReference => formula_reference(query),
            Specialist::WritingAssistant => writing_assistant(query, level),
            Specialist::LiteratureAnalysis => literature_analysis(query, level),
            Specialist::LanguagePractice => language_practice(query, level),
            Specialist::GrammarChecker => grammar_checker(query),
            Specialist::HistoryTimeline => history_timeline(query, level),
            Specialist::GeographyHelper => geography_helper(query, level),
            Specialist::EconomicsExplainer => economics_explainer(query, level),
            Specialist::PoliticalAnalysis => political_analysis(query, level),
            Specialist::MusicTheory => music_theory(query, level),
            Specialist::ArtAnalysis => art_analysis(query, level),
            Specialist::CreativeWriting => creative_writing(query, level),
            Specialist::TestStrategy => test_strategy(query, level),
            Specialist::PracticeProblems => practice_problems(query, level),
            Specialist::StudySchedule => study_schedule(query, profile),
        }
    }
}

fn math_solver(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a mathematics tutor helping a {level} level student.

Problem: {query}

Provide a complete solution with:
1. Problem identification and what type of math this is
2. Step-by-step solution with clear explanations
3. Final answer highlighted
4. Verification or check of the answer
5. Similar problem types they might encounter
6. Key concepts or formulas used

Make explanations appropriate for {level} level understanding.
Use clear mathematical notation and reasoning."#
    )
}

fn science_explainer(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a science tutor explaining concepts to a {level} level student.

Question: {query}

Provide a comprehensive explanation including:
1. Clear definition of the concept
2. How it works or why it happens (mechanisms)
3. Real-world examples and applications
4. Visual descriptions or analogies to aid understanding
5. Key terms and vocabulary
6. Common misconceptions to avoid
7. Related concepts they should know

Use language appropriate for {level} level and include practical examples."#
    )
}

fn coding_helper(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a programming tutor helping a {level} level student with coding.

Coding Question: {query}

Provide helpful guidance including:
1. Problem analysis and approach
2. Step-by-step solution strategy
3. Code examples with explanations
4. Best practices and coding conventions
5. Common pitfalls to avoid
6. Testing and debugging tips
7. Alternative approaches or optimizations

Explain concepts clearly for {level} level programming understanding.
Include comments in code examples."#
    )
}

fn formula_reference(query: &str) -> String {
    format!(
        r#"Provide a comprehensive formula reference for: {query}

Include:
1. The formula(s) with clear notation
2. Variable definitions
3. When and how to use each formula
4. Example applications
5. Related formulas
6. Common variations or special cases

Make it a useful reference guide."#
    )
}

fn writing_assistant(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a writing tutor helping a {level} level student improve their writing.

Writing Request: {query}

Provide comprehensive writing assistance including:
1. Understanding the writing task or assignment
2. Structure and organization suggestions
3. Content development strategies
4. Style and tone guidance
5. Grammar and mechanics tips
6. Revision and editing advice
7. Examples of effective techniques

Tailor advice to {level} level writing skills and academic expectations."#
    )
}

fn literature_analysis(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a literature teacher helping a {level} level student analyze literary works.

Literature Question: {query}

Provide thorough literary analysis including:
1. Context and background of the work/author
2. Theme identification and analysis
3. Literary devices and techniques used
4. Character analysis and development
5. Symbolism and deeper meanings
6. Historical and cultural significance
7. Personal reflection and interpretation guidance

Make analysis accessible for {level} level literary understanding."#
    )
}

fn language_practice(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a language tutor helping a {level} level student with language learning.

Language Question: {query}

Provide language learning support including:
1. Grammar explanations with examples
2. Vocabulary building exercises
3. Pronunciation tips
4. Cultural context
5. Practice sentences and conversations
6. Common mistakes to avoid
7. Learning strategies and tips

Adapt to {level} level language proficiency."#
    )
}

fn grammar_checker(query: &str) -> String {
    format!(
        r#"Analyze the following text for grammar, style, and clarity:

"{query}"

Provide:
1. Corrected version if needed
2. Explanation of any errors found
3. Grammar rules that apply
4. Style suggestions for improvement
5. Tips for avoiding similar mistakes

Be constructive and educational in feedback."#
    )
}

fn history_timeline(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a history teacher helping a {level} level student understand historical events.

History Question: {query}

Provide comprehensive historical information including:
1. Timeline of key events
2. Causes and effects
3. Important figures and their roles
4. Historical context and significance
5. Connections to other historical events
6. Primary sources or evidence
7. Long-term impact and legacy

Present information clearly for {level} level historical understanding."#
    )
}

fn geography_helper(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a geography teacher helping a {level} level student.

Geography Question: {query}

Provide comprehensive geographic information including:
1. Location and physical characteristics
2. Climate and environmental factors
3. Human geography and demographics
4. Economic and political aspects
5. Cultural significance
6. Maps, coordinates, or spatial relationships
7. Current issues or changes

Make explanations appropriate for {level} level geography understanding."#
    )
}

fn economics_explainer(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are an economics teacher explaining concepts to a {level} level student.

Economics Question: {query}

Provide clear economic analysis including:
1. Definition and explanation of concepts
2. Economic principles involved
3. Real-world examples and applications
4. Graphs or models if relevant
5. Cause and effect relationships
6. Different economic perspectives
7. Current relevance and implications

Use language appropriate for {level} level economics education."#
    )
}

fn political_analysis(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a political science teacher helping a {level} level student understand political concepts.

Political Science Question: {query}

Provide balanced political analysis including:
1. Explanation of political concepts or systems
2. Historical context and development
3. Different perspectives and viewpoints
4. Comparative analysis if relevant
5. Key figures and their contributions
6. Current applications and relevance
7. Critical thinking questions

Maintain objectivity and present multiple viewpoints for {level} level understanding."#
    )
}

fn music_theory(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a music theory instructor teaching a {level} level student.

Music Theory Question: {query}

Provide comprehensive music theory explanation including:
1. Clear definition of concepts
2. Musical notation examples
3. How it applies to composition and performance
4. Listening examples or references
5. Practice exercises or applications
6. Connections to other musical concepts
7. Historical context in music

Make explanations accessible for {level} level music education."#
    )
}

fn art_analysis(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are an art history teacher helping a {level} level student analyze artwork.

Art Question: {query}

Provide thorough art analysis including:
1. Visual description and composition
2. Artistic techniques and mediums used
3. Historical and cultural context
4. Artist background and style
5. Symbolism and meaning
6. Influence and significance
7. Comparison to other works or movements

Make analysis engaging and educational for {level} level art appreciation."#
    )
}

fn creative_writing(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a creative writing instructor helping a {level} level student with their creative work.

Creative Writing Request: {query}

Provide creative writing guidance including:
1. Story development and plot structure
2. Character creation and development
3. Setting and world-building
4. Dialogue and voice techniques
5. Literary devices and style
6. Revision and editing strategies
7. Inspiration and brainstorming methods

Encourage creativity while providing practical writing advice for {level} level."#
    )
}

fn test_strategy(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are a test prep specialist helping a {level} level student prepare for exams.

Test Prep Question: {query}

Provide strategic test preparation guidance including:
1. Test format and structure overview
2. Study timeline and scheduling
3. Content review strategies
4. Practice test recommendations
5. Test-taking techniques and tips
6. Stress management and preparation
7. Last-minute review strategies

Tailor advice to {level} level academic preparation needs."#
    )
}

fn practice_problems(query: &str, level: LearningLevel) -> String {
    format!(
        r#"You are creating practice problems for a {level} level student.

Subject/Topic Request: {query}

Create a set of practice problems including:
1. 3-5 problems of varying difficulty
2. Clear instructions for each problem
3. Answer key with explanations
4. Tips for solving similar problems
5. Common mistakes to avoid
6. Extension questions for deeper thinking

Make problems appropriate for {level} level and educational."#
    )
}

fn study_schedule(query: &str, profile: &LearnerProfile) -> String {
    let subjects = if profile.preferred_subjects.is_empty() {
        "General studies".to_string()
    } else {
        profile.preferred_subjects.join(", ")
    };

    format!(
        r#"Create a detailed study schedule for a {level} level student.

Request: {query}
Preferred Subjects: {subjects}

Include:
1. Daily time blocks and study periods
2. Subject rotation and priority
3. Break times and active rest
4. Review sessions and practice time
5. Flexibility for different learning styles
6. Progress tracking methods
7. Adjustment strategies

Make it practical and sustainable for consistent use."#,
        level = profile.learning_level,
    )
}
