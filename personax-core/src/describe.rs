//! Static description tables
//!
//! Display-only lookup tables attached to results by the caller. These
//! carry no computed logic and are not part of the scorer's contract.

/// Short summary for a four-letter type code, if it is one of the sixteen
/// known combinations
pub fn type_summary(code: &str) -> Option<&'static str> {
    let summary = match code {
        "ISTJ" => "Responsible, practical, and organized - prefers clear plans.",
        "ISFJ" => "Warm, responsible, and attentive to others' needs.",
        "INFJ" => "Insightful, idealistic, and focused on meaningful connections.",
        "INTJ" => "Strategic, independent, and future-focused.",
        "ISTP" => "Practical, hands-on problem solver who values flexibility.",
        "ISFP" => "Gentle, creative, and tuned to personal values.",
        "INFP" => "Idealistic, value-driven, and imaginative.",
        "INTP" => "Analytical, curious, and theoretical.",
        "ESTP" => "Action-oriented, adaptable, and enjoys lively experiences.",
        "ESFP" => "Sociable, spontaneous, and present-focused.",
        "ENFP" => "Enthusiastic, imaginative, and people-centered.",
        "ENTP" => "Inventive, idea-focused, and enjoys debate.",
        "ESTJ" => "Organized, decisive, and likes to lead.",
        "ESFJ" => "Caring, cooperative, and community-focused.",
        "ENFJ" => "Charismatic, organized, and helps others develop.",
        "ENTJ" => "Confident, strategic leader who drives projects forward.",
        _ => return None,
    };
    Some(summary)
}

/// Fallback summary for codes outside the sixteen known combinations
/// (possible with substitute catalogs)
pub const UNKNOWN_TYPE_SUMMARY: &str =
    "A unique combination - your score suggests traits across the spectrum.";

/// One-line explanation of a single trait letter
pub fn letter_explanation(letter: char) -> Option<&'static str> {
    let explanation = match letter {
        'E' => "Extraversion: energized by social interaction, outgoing.",
        'I' => "Introversion: energized by quiet time, reflective.",
        'S' => "Sensing: focuses on facts, details, and practical reality.",
        'N' => "Intuition: focuses on patterns, possibilities, and big-picture ideas.",
        'T' => "Thinking: decisions guided by logic and objective analysis.",
        'F' => "Feeling: decisions guided by values and people's feelings.",
        'J' => "Judging: prefers structure, plans, and settled decisions.",
        'P' => "Perceiving: prefers flexibility, spontaneity, and open options.",
        _ => return None,
    };
    Some(explanation)
}
