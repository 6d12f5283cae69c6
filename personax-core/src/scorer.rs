//! The scorer: answers in, four-letter type out
//!
//! Pure function of (catalog, weights). Validation happens before any
//! accumulation so an invalid submission never yields a partial result.

use crate::axis::Axis;
use crate::catalog::Catalog;
use crate::report::{PerAxis, TypeResult};
use crate::scale::Response;
use crate::{Error, Result};

/// Score an answer set against a catalog.
///
/// `answers` must align positionally with the catalog: same length, same
/// order, each entry one of the five scale weights. Each question's weight
/// accumulates toward its axis total with the question's explicit sign
/// (+1 when the favored letter is the axis's primary letter, -1 otherwise),
/// so a positive total means the primary letter wins.
///
/// Tie-break: a total of exactly 0 resolves to the secondary letter. The
/// strict greater-than test is deliberate and must not be relaxed.
pub fn score(catalog: &Catalog, answers: &[i32]) -> Result<TypeResult> {
    if answers.len() != catalog.len() {
        return Err(Error::InvalidInput(format!(
            "Expected {} answers, got {}",
            catalog.len(),
            answers.len()
        )));
    }
    for (index, &weight) in answers.iter().enumerate() {
        Response::from_weight(weight).map_err(|_| {
            Error::InvalidInput(format!(
                "Answer {} has weight {} outside recognized range -2..=2",
                index + 1,
                weight
            ))
        })?;
    }

    let mut totals = PerAxis::<i32>::default();
    for (question, &weight) in catalog.questions().iter().zip(answers) {
        totals[question.axis] += question.sign() * weight;
    }

    let mut code = String::with_capacity(4);
    let mut strengths = PerAxis::<u8>::default();
    for axis in Axis::ALL {
        let total = totals[axis];
        code.push(if total > 0 { axis.primary() } else { axis.secondary() });
        strengths[axis] = strength_percent(total, catalog.count_for(axis));
    }

    Ok(TypeResult { code, totals, strengths })
}

/// Normalized strength: |total| as a percentage of the axis maximum
/// (2 per question). An axis with no questions reports 0 rather than
/// failing on a zero denominator.
fn strength_percent(total: i32, question_count: usize) -> u8 {
    if question_count == 0 {
        return 0;
    }
    let max = 2 * question_count as i32;
    (100.0 * total.unsigned_abs() as f64 / max as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Question;

    fn builtin() -> Catalog {
        Catalog::builtin()
    }

    /// All-Neutral submission: every total is 0, every axis falls to its
    /// secondary letter, every strength is 0.
    #[test]
    fn test_all_neutral_resolves_to_infp() {
        let catalog = builtin();
        let answers = vec![0; catalog.len()];
        let result = score(&catalog, &answers).unwrap();

        assert_eq!(result.code, "INFP");
        for axis in Axis::ALL {
            assert_eq!(result.totals[axis], 0);
            assert_eq!(result.strengths[axis], 0);
        }
    }

    /// All-StronglyAgree submission against the builtin bank, verified
    /// against hand-computed totals (E/I favored counts 6/5, S/N 5/6,
    /// T/F 5/4, J/P 5/4).
    #[test]
    fn test_all_strongly_agree_on_builtin_bank() {
        let catalog = builtin();
        let answers = vec![2; catalog.len()];
        let result = score(&catalog, &answers).unwrap();

        assert_eq!(result.code, "ENTJ");
        assert_eq!(result.totals[Axis::EI], 2);
        assert_eq!(result.totals[Axis::SN], -2);
        assert_eq!(result.totals[Axis::TF], 2);
        assert_eq!(result.totals[Axis::JP], 2);
        // 11 EI/SN questions (max 22), 9 TF/JP questions (max 18)
        assert_eq!(result.strengths[Axis::EI], 9);
        assert_eq!(result.strengths[Axis::SN], 9);
        assert_eq!(result.strengths[Axis::TF], 11);
        assert_eq!(result.strengths[Axis::JP], 11);
    }

    #[test]
    fn test_mismatched_length_rejected() {
        let catalog = builtin();
        let short = vec![0; catalog.len() - 1];
        let long = vec![0; catalog.len() + 1];
        assert!(matches!(score(&catalog, &short), Err(Error::InvalidInput(_))));
        assert!(matches!(score(&catalog, &long), Err(Error::InvalidInput(_))));
        assert!(matches!(score(&catalog, &[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let catalog = builtin();
        let mut answers = vec![0; catalog.len()];
        answers[7] = 3;
        assert!(matches!(score(&catalog, &answers), Err(Error::InvalidInput(_))));
        answers[7] = -3;
        assert!(matches!(score(&catalog, &answers), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_code_shape_invariant() {
        let catalog = builtin();
        // A spread of valid submissions, including asymmetric ones
        let patterns: [i32; 5] = [2, -1, 0, 1, -2];
        for offset in 0..patterns.len() {
            let answers: Vec<i32> = (0..catalog.len())
                .map(|i| patterns[(i + offset) % patterns.len()])
                .collect();
            let result = score(&catalog, &answers).unwrap();

            assert_eq!(result.code.len(), 4);
            for (ch, axis) in result.code.chars().zip(Axis::ALL) {
                assert!(axis.contains(ch), "code {} letter {} outside axis {}", result.code, ch, axis);
            }
        }
    }

    #[test]
    fn test_totals_bounded_by_axis_maximum() {
        let catalog = builtin();
        for weight in [-2, -1, 0, 1, 2] {
            let answers = vec![weight; catalog.len()];
            let result = score(&catalog, &answers).unwrap();
            for axis in Axis::ALL {
                let max = 2 * catalog.count_for(axis) as i32;
                assert!(result.totals[axis].abs() <= max);
                assert!(result.strengths[axis] <= 100);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let catalog = builtin();
        let answers: Vec<i32> = (0..catalog.len()).map(|i| (i as i32 % 5) - 2).collect();
        let first = score(&catalog, &answers).unwrap();
        for _ in 0..10 {
            assert_eq!(score(&catalog, &answers).unwrap(), first);
        }
    }

    /// A zero total on one axis must fall to the secondary letter even when
    /// the other axes are strongly positive.
    #[test]
    fn test_zero_total_tie_break_favors_secondary() {
        let catalog = Catalog::new(vec![
            Question { text: "Crowds energize me.".to_string(), axis: Axis::EI, favors: 'E' },
            Question { text: "Quiet restores me.".to_string(), axis: Axis::EI, favors: 'I' },
            Question { text: "Facts first.".to_string(), axis: Axis::SN, favors: 'S' },
            Question { text: "Logic first.".to_string(), axis: Axis::TF, favors: 'T' },
            Question { text: "Plans first.".to_string(), axis: Axis::JP, favors: 'J' },
        ])
        .unwrap();

        // Both EI answers agree equally: +2 toward E, +2 toward I, net 0
        let result = score(&catalog, &[2, 2, 2, 2, 2]).unwrap();
        assert_eq!(result.totals[Axis::EI], 0);
        assert_eq!(result.code, "ISTJ");
        assert_eq!(result.strengths[Axis::EI], 0);
    }

    /// Strength denominator of zero (axis with no questions) reports 0.
    #[test]
    fn test_axis_without_questions_has_zero_strength() {
        let catalog = Catalog::new(vec![
            Question { text: "Crowds energize me.".to_string(), axis: Axis::EI, favors: 'E' },
        ])
        .unwrap();

        let result = score(&catalog, &[2]).unwrap();
        assert_eq!(result.code, "ENFP");
        assert_eq!(result.strengths[Axis::EI], 100);
        for axis in [Axis::SN, Axis::TF, Axis::JP] {
            assert_eq!(result.totals[axis], 0);
            assert_eq!(result.strengths[axis], 0);
        }
    }

    /// Opposite-pole questions accumulate with opposite signs: agreeing
    /// with an I-favoring statement must pull the EI total negative.
    #[test]
    fn test_secondary_favoring_question_subtracts() {
        let catalog = Catalog::new(vec![
            Question { text: "Quiet restores me.".to_string(), axis: Axis::EI, favors: 'I' },
        ])
        .unwrap();

        let result = score(&catalog, &[2]).unwrap();
        assert_eq!(result.totals[Axis::EI], -2);
        assert!(result.code.starts_with('I'));
    }

    #[test]
    fn test_strength_rounds_to_nearest() {
        // 11 questions, |total| = 2: 100 * 2/22 = 9.09... -> 9
        assert_eq!(strength_percent(2, 11), 9);
        // 9 questions, |total| = 2: 100 * 2/18 = 11.11... -> 11
        assert_eq!(strength_percent(-2, 9), 11);
        // exact half rounds away from zero: 100 * 1/8 = 12.5 -> 13
        assert_eq!(strength_percent(1, 4), 13);
        assert_eq!(strength_percent(0, 9), 0);
        assert_eq!(strength_percent(5, 0), 0);
        assert_eq!(strength_percent(-22, 11), 100);
    }
}
