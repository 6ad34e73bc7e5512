//! Recommendation generator. At most five, in priority order:
//! title, dropped skills, quantified metrics, dates, acronym dual forms,
//! skills-gap note.

use crate::scoring::ats::TierScores;
use crate::text::boundary::contains_term;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Skills listed inline before the rest are summarised as "+N more".
const MAX_LISTED_SKILLS: usize = 5;

pub fn build_recommendations(jd_title: &str, tailored: &str, tiers: &TierScores) -> Vec<String> {
    let mut recs = Vec::new();

    let title = jd_title.trim();
    if !title.is_empty() && tiers.job_title_alignment.score < 85.0 && !contains_term(tailored, title) {
        recs.push(format!(
            "Add the target job title \"{title}\" to your headline so ATS title matching picks it up."
        ));
    }

    let hard = &tiers.hard_skill_match;
    if !hard.missing.is_empty() {
        recs.push(format!(
            "Restore skills from your original resume that the tailored version dropped: {}.",
            list_skills(&hard.missing)
        ));
    }

    if !tiers.experience_relevance.has_quantified_achievement {
        recs.push(
            "Add quantified achievements (percentages, dollar amounts, team sizes) to your experience bullets."
                .to_string(),
        );
    }

    let structure = &tiers.structural_compliance;
    if structure.date_formats.len() > 1 {
        recs.push(format!(
            "Use a single date format throughout; found {} different formats.",
            structure.date_formats.len()
        ));
    }

    let supplementary = &tiers.supplementary_factors;
    if !supplementary.missing_dual_forms.is_empty() {
        recs.push(format!(
            "Write both the acronym and the full term at least once for: {}.",
            list_skills(&supplementary.missing_dual_forms)
        ));
    }

    if !hard.skills_gap.is_empty() {
        recs.push(format!(
            "{} job requirement(s) are not in your original resume ({}). Add them only if you genuinely have that experience.",
            hard.skills_gap.len(),
            list_skills(&hard.skills_gap)
        ));
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

fn list_skills(skills: &[String]) -> String {
    let shown = skills
        .iter()
        .take(MAX_LISTED_SKILLS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if skills.len() > MAX_LISTED_SKILLS {
        format!("{shown} (+{} more)", skills.len() - MAX_LISTED_SKILLS)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::experience::ExperienceTier;
    use crate::scoring::hard_skills::HardSkillTier;
    use crate::scoring::structure::StructureTier;
    use crate::scoring::title_alignment::TitleAlignmentTier;
    use crate::text::dates::DateFormat;

    fn healthy() -> TierScores {
        TierScores {
            job_title_alignment: TitleAlignmentTier {
                score: 100.0,
                ..Default::default()
            },
            experience_relevance: ExperienceTier {
                has_quantified_achievement: true,
                ..Default::default()
            },
            structural_compliance: StructureTier {
                reverse_chronological: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_healthy_resume_has_no_recommendations() {
        assert!(build_recommendations("Backend Engineer", "", &healthy()).is_empty());
    }

    #[test]
    fn test_priority_order_and_cap() {
        let mut tiers = healthy();
        tiers.job_title_alignment.score = 0.0;
        tiers.hard_skill_match = HardSkillTier {
            missing: vec!["Rust".to_string()],
            skills_gap: vec!["Haskell".to_string()],
            ..Default::default()
        };
        tiers.experience_relevance.has_quantified_achievement = false;
        tiers.structural_compliance.date_formats = vec![DateFormat::MonthAbbrev, DateFormat::Numeric];
        tiers.structural_compliance.reverse_chronological = false;
        tiers.supplementary_factors.missing_dual_forms = vec!["AWS".to_string()];

        let recs = build_recommendations("Backend Engineer", "Jane Doe", &tiers);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert!(recs[0].contains("Backend Engineer"));
        assert!(recs[1].contains("Rust"));
        assert!(recs[2].contains("quantified"));
        assert!(recs[3].contains("date format"));
        assert!(recs[4].contains("AWS"), "dual-form advice outranks ordering: {recs:?}");
        assert!(recs.iter().all(|r| !r.contains("reverse-chronological")));
    }

    #[test]
    fn test_skills_gap_note_survives_without_earlier_items() {
        let mut tiers = healthy();
        tiers.structural_compliance.reverse_chronological = false;
        tiers.supplementary_factors.missing_dual_forms = vec!["GCP".to_string()];
        tiers.hard_skill_match.skills_gap = vec!["Haskell".to_string()];

        let recs = build_recommendations("Backend Engineer", "Backend Engineer", &tiers);
        assert_eq!(recs.len(), 2, "{recs:?}");
        assert!(recs[0].contains("GCP"));
        assert!(recs[1].contains("Haskell"));
    }

    #[test]
    fn test_title_already_present_is_not_recommended() {
        let mut tiers = healthy();
        tiers.job_title_alignment.score = 30.0;
        let recs = build_recommendations("Data Scientist", "Acme: Data Scientist", &tiers);
        assert!(recs.is_empty(), "{recs:?}");
    }

    #[test]
    fn test_skill_lists_are_summarised() {
        let skills: Vec<String> = (0..8).map(|i| format!("S{i}")).collect();
        assert_eq!(list_skills(&skills), "S0, S1, S2, S3, S4 (+3 more)");
    }
}
