use std::env;

use serial_test::serial;

use super::*;
use crate::analysis::{ContentSignals, analyze_content};
use crate::registry::{MatchKind, SourceAssessment, SourceCategory, SourceRecord};
use crate::scoring::{ContentAssessment, Label};

fn source_with_score(score: u8) -> SourceAssessment {
    let category = if score >= 60 {
        SourceCategory::Mainstream
    } else {
        SourceCategory::Misinformation
    };
    let record = SourceRecord::new("example.com", "Example News", score, category);
    SourceAssessment::matched("example.com".to_string(), &record, MatchKind::Exact)
}

fn content(label: Label, confidence: u8) -> ContentAssessment {
    ContentAssessment::new(label, confidence)
}

mod content_score_tests {
    use super::*;

    #[test]
    fn test_real_keeps_confidence() {
        assert_eq!(content_score(&content(Label::Real, 83)), 83);
    }

    #[test]
    fn test_fake_inverts_confidence() {
        assert_eq!(content_score(&content(Label::Fake, 83)), 17);
        assert_eq!(content_score(&content(Label::Fake, 100)), 0);
    }

    #[test]
    fn test_uncertain_is_neutral() {
        assert_eq!(content_score(&content(Label::Uncertain, 95)), 50);
        assert_eq!(content_score(&content(Label::Uncertain, 0)), 50);
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_credible_source_overrides_low_confidence_fake() {
        let result = resolve(
            &content(Label::Fake, 60),
            &source_with_score(90),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.final_verdict, Verdict::LikelyReal);
        assert!(result.is_uncertain);
        assert_eq!(result.hybrid_score, 55);
    }

    #[test]
    fn test_untrustworthy_source_overrides_low_confidence_real() {
        let result = resolve(
            &content(Label::Real, 55),
            &source_with_score(20),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.final_verdict, Verdict::LikelyFake);
        assert!(result.is_uncertain);
    }

    #[test]
    fn test_unknown_source_confident_real() {
        let result = resolve(
            &content(Label::Real, 90),
            &SourceAssessment::unknown("someblog.net".to_string(), false),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.hybrid_score, 78);
        assert_eq!(result.final_verdict, Verdict::Real);
        assert!(!result.is_uncertain);
    }

    #[test]
    fn test_unknown_source_confident_fake() {
        let result = resolve(
            &content(Label::Fake, 90),
            &SourceAssessment::unresolved(),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.hybrid_score, 22);
        assert_eq!(result.final_verdict, Verdict::Fake);
        assert!(!result.is_uncertain);
    }

    #[test]
    fn test_neutral_inputs_are_uncertain() {
        let result = resolve(
            &ContentAssessment::neutral(),
            &SourceAssessment::unresolved(),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.hybrid_score, 50);
        assert_eq!(result.final_verdict, Verdict::Uncertain);
        assert!(result.is_uncertain);
    }
}

mod override_boundary_tests {
    use super::*;

    #[test]
    fn test_likely_real_floor_is_inclusive() {
        let policy = VerdictPolicy::default();
        let fake = content(Label::Fake, 60);

        assert_eq!(
            resolve(&fake, &source_with_score(80), &policy).final_verdict,
            Verdict::LikelyReal
        );
        let below = resolve(&fake, &source_with_score(79), &policy);
        assert_eq!(below.final_verdict, Verdict::Uncertain);
        assert_eq!(below.hybrid_score, 52);
    }

    #[test]
    fn test_likely_fake_ceiling_is_exclusive() {
        let policy = VerdictPolicy::default();
        let real = content(Label::Real, 55);

        assert_eq!(
            resolve(&real, &source_with_score(39), &policy).final_verdict,
            Verdict::LikelyFake
        );
        assert_eq!(
            resolve(&real, &source_with_score(40), &policy).final_verdict,
            Verdict::Uncertain
        );
        let above = resolve(&real, &source_with_score(41), &policy);
        assert_eq!(above.final_verdict, Verdict::Uncertain);
        assert_eq!(above.hybrid_score, 51);
    }

    #[test]
    fn test_confident_scorer_is_not_overridden() {
        let result = resolve(
            &content(Label::Fake, 70),
            &source_with_score(90),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.hybrid_score, 48);
        assert_eq!(result.final_verdict, Verdict::Uncertain);
    }

    #[test]
    fn test_override_requires_matching_label() {
        let policy = VerdictPolicy::default();

        let uncertain = resolve(&content(Label::Uncertain, 10), &source_with_score(95), &policy);
        assert!(!uncertain.final_verdict.is_override());

        let real = resolve(&content(Label::Real, 60), &source_with_score(95), &policy);
        assert!(!real.final_verdict.is_override());
    }
}

mod threshold_tests {
    use super::*;

    #[test]
    fn test_real_threshold_is_inclusive() {
        let result = resolve(
            &content(Label::Real, 80),
            &source_with_score(30),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.hybrid_score, 65);
        assert_eq!(result.final_verdict, Verdict::Real);
    }

    #[test]
    fn test_fake_threshold_is_inclusive() {
        let result = resolve(
            &content(Label::Fake, 80),
            &source_with_score(70),
            &VerdictPolicy::default(),
        );

        assert_eq!(result.hybrid_score, 35);
        assert_eq!(result.final_verdict, Verdict::Fake);
    }

    #[test]
    fn test_result_reports_policy_weights() {
        let policy = VerdictPolicy::new(0.6, 65, 35).unwrap();
        let result = resolve(&content(Label::Real, 100), &source_with_score(0), &policy);

        assert_eq!(result.ai_weight, 0.6);
        assert!((result.source_weight - 0.4).abs() < 1e-9);
        assert_eq!(result.hybrid_score, 60);
        assert_eq!(result.final_confidence, result.hybrid_score);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let policy = VerdictPolicy::default();
        let c = content(Label::Fake, 64);
        let s = source_with_score(72);

        assert_eq!(resolve(&c, &s, &policy), resolve(&c, &s, &policy));
    }
}

mod policy_tests {
    use super::*;

    fn clear_policy_env() {
        unsafe {
            env::remove_var(policy::ENV_AI_WEIGHT);
            env::remove_var(policy::ENV_REAL_THRESHOLD);
            env::remove_var(policy::ENV_FAKE_THRESHOLD);
        }
    }

    #[test]
    fn test_default_policy_is_valid() {
        assert!(VerdictPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_new_derives_source_weight() {
        let policy = VerdictPolicy::new(0.8, 70, 30).unwrap();
        assert!((policy.source_weight - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_weight_out_of_range() {
        assert!(matches!(
            VerdictPolicy::new(1.2, 65, 35),
            Err(PolicyError::WeightOutOfRange { .. })
        ));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let policy = VerdictPolicy {
            ai_weight: 0.7,
            source_weight: 0.4,
            ..VerdictPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::WeightsDoNotSum { .. })
        ));
    }

    #[test]
    fn test_thresholds_out_of_order() {
        assert_eq!(
            VerdictPolicy::new(0.7, 40, 60),
            Err(PolicyError::ThresholdsOutOfOrder { real: 40, fake: 60 })
        );
    }

    #[test]
    fn test_threshold_above_scale() {
        assert!(matches!(
            VerdictPolicy::new(0.7, 120, 35),
            Err(PolicyError::ThresholdOutOfRange { name: "real_threshold", .. })
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_policy_env();
        assert_eq!(VerdictPolicy::from_env().unwrap(), VerdictPolicy::default());
    }

    #[test]
    fn test_weights_error_message() {
        let policy = VerdictPolicy {
            ai_weight: 0.7,
            source_weight: 0.4,
            ..VerdictPolicy::default()
        };
        let err = policy.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "weights must sum to 1.0 (ai=0.7, source=0.4)"
        );
    }

    #[test]
    fn test_whole_percent_weights_are_exact() {
        assert_eq!(VerdictPolicy::new(0.7, 65, 35).unwrap(), VerdictPolicy::default());
        assert_eq!(VerdictPolicy::new(0.7, 65, 35).unwrap().source_weight, 0.3);
        assert_eq!(VerdictPolicy::new(0.6, 65, 35).unwrap().source_weight, 0.4);
        assert_eq!(VerdictPolicy::new(0.85, 65, 35).unwrap().source_weight, 0.15);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_resolve_like_default_policy() {
        clear_policy_env();
        let from_env = VerdictPolicy::from_env().unwrap();

        assert_eq!(from_env.source_weight, 0.3);

        // 0.7 * 46 + 0.3 * 11 sits right on the rounding edge of 35.
        let content = content(Label::Fake, 54);
        let source = source_with_score(11);
        let expected = resolve(&content, &source, &VerdictPolicy::default());
        let actual = resolve(&content, &source, &from_env);

        assert_eq!(actual, expected);
        assert_eq!(actual.hybrid_score, 35);
        assert_eq!(actual.final_verdict, Verdict::Fake);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_policy_env();
        unsafe {
            env::set_var(policy::ENV_AI_WEIGHT, "0.5");
            env::set_var(policy::ENV_REAL_THRESHOLD, "70");
        }

        let policy = VerdictPolicy::from_env().unwrap();
        clear_policy_env();

        assert_eq!(policy.ai_weight, 0.5);
        assert_eq!(policy.source_weight, 0.5);
        assert_eq!(policy.real_threshold, 70);
        assert_eq!(policy.fake_threshold, 35);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_policy_env();
        unsafe {
            env::set_var(policy::ENV_FAKE_THRESHOLD, "low");
        }

        let result = VerdictPolicy::from_env();
        clear_policy_env();

        assert!(matches!(result, Err(PolicyError::InvalidEnvValue { .. })));
    }
}

mod recommendation_tests {
    use super::*;

    #[test]
    fn test_reliable_source_is_named() {
        let source = source_with_score(90);
        let result = resolve(&content(Label::Real, 85), &source, &VerdictPolicy::default());
        let text = recommendation(&result, &source, &ContentSignals::empty(), false);

        assert!(text.starts_with("The article appears credible."));
        assert!(text.contains("Example News is a generally reliable source."));
    }

    #[test]
    fn test_unreliable_source_warning() {
        let source = source_with_score(10);
        let result = resolve(&content(Label::Fake, 90), &source, &VerdictPolicy::default());
        let text = recommendation(&result, &source, &ContentSignals::empty(), false);

        assert!(text.contains("Warning: Example News is known for unreliable content."));
    }

    #[test]
    fn test_flags_are_mentioned() {
        let source = SourceAssessment::unresolved();
        let signals = analyze_content("SHOCKING!!!! You won't believe this");
        let result = resolve(&content(Label::Fake, 75), &source, &VerdictPolicy::default());
        let text = recommendation(&result, &source, &signals, false);

        assert!(text.contains("concerning patterns: Contains 2 clickbait/sensational phrase(s)"));
    }

    #[test]
    fn test_degraded_is_distinguished_from_uncertain() {
        let source = SourceAssessment::unresolved();
        let result = resolve(
            &ContentAssessment::neutral(),
            &source,
            &VerdictPolicy::default(),
        );

        let degraded = recommendation(&result, &source, &ContentSignals::empty(), true);
        let uncertain = recommendation(&result, &source, &ContentSignals::empty(), false);

        assert!(degraded.starts_with("Automated content analysis was unavailable"));
        assert!(!uncertain.contains("unavailable"));
        assert!(uncertain.contains("evidence is mixed"));
    }
}
