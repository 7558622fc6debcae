use mood_engine::lexicon::{Intensity, Lexicon, Tier};
use mood_engine::scoring::{
    BayesClassifier, BayesConfig, BayesModel, EmotionDetector, FusionConfig, FusionScorer,
    HeuristicConfig, HeuristicScorer,
};
use mood_engine::text::{normalize, normalize_opt};
use mood_engine::{BayesProbs, Emotion, Mood};

fn tokens(text: &str) -> Vec<String> {
    normalize(text)
}

fn heuristic(text: &str) -> f64 {
    HeuristicScorer::new(HeuristicConfig::default()).score(&Lexicon::spanish(), &tokens(text))
}

fn classifier() -> BayesClassifier {
    BayesClassifier::new(BayesModel::seeded(), BayesConfig::default())
}

#[test]
fn normalize_strips_punctuation_and_lowercases() {
    assert_eq!(
        normalize("Hoy fue un día EXCELENTE, me siento feliz!!"),
        vec!["hoy", "fue", "un", "día", "excelente", "me", "siento", "feliz"]
    );
}

#[test]
fn normalize_keeps_spanish_letters() {
    assert_eq!(normalize("Ñandú   ÜBER\tcorazón"), vec!["ñandú", "über", "corazón"]);
}

#[test]
fn normalize_removes_stripped_characters_in_place() {
    assert_eq!(normalize("hola,mundo 123 ¿qué?"), vec!["holamundo", "qué"]);
}

#[test]
fn normalize_empty_inputs() {
    assert!(normalize("").is_empty());
    assert!(normalize("   \n ").is_empty());
    assert!(normalize("123 !!! ...").is_empty());
    assert!(normalize_opt(None).is_empty());
    assert_eq!(normalize_opt(Some("Bien")), vec!["bien"]);
}

#[test]
fn lexicon_tiers_are_disjoint() {
    for (i, a) in Tier::ALL.iter().enumerate() {
        for b in Tier::ALL.iter().skip(i + 1) {
            for word in Lexicon::tier_words(*a) {
                assert!(
                    !Lexicon::tier_words(*b).contains(word),
                    "{} appears in {:?} and {:?}",
                    word,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn lexicon_intensifiers_are_disjoint() {
    let high = Lexicon::intensifier_words(Intensity::High);
    for word in Lexicon::intensifier_words(Intensity::Low) {
        assert!(!high.contains(word), "{} is both high and low", word);
    }
}

#[test]
fn lexicon_lookups() {
    let lexicon = Lexicon::spanish();
    assert_eq!(lexicon.tier("excelente"), Some(Tier::VeryPositive));
    assert_eq!(lexicon.tier("bien"), Some(Tier::Positive));
    assert_eq!(lexicon.tier("triste"), Some(Tier::Negative));
    assert_eq!(lexicon.tier("terrible"), Some(Tier::VeryNegative));
    assert_eq!(lexicon.tier("mesa"), None);
    assert!(lexicon.is_negator("nunca"));
    assert_eq!(lexicon.intensity("muy"), Some(Intensity::High));
    assert_eq!(lexicon.intensity("poco"), Some(Intensity::Low));
    assert!(lexicon.has_emotion(Emotion::Love, "agradecido"));
    assert!(lexicon.has_emotion(Emotion::Joy, "agradecido"));
}

#[test]
fn heuristic_empty_is_zero() {
    assert_eq!(heuristic(""), 0.0);
}

#[test]
fn heuristic_negation_flips_polarity() {
    assert!((heuristic("bueno") - 1.0).abs() < 1e-6);
    assert!((heuristic("no bueno") + 1.0).abs() < 1e-6);
}

#[test]
fn heuristic_negation_window_is_bounded() {
    // "bueno" sits four tokens after the negator.
    assert!((heuristic("no fue un día bueno") - 1.0).abs() < 1e-6);

    let wide = HeuristicScorer::new(HeuristicConfig {
        negation_window: 4,
        ..HeuristicConfig::default()
    });
    let score = wide.score(&Lexicon::spanish(), &tokens("no fue un día bueno"));
    assert!((score + 1.0).abs() < 1e-6);
}

#[test]
fn heuristic_unbounded_window_reaches_end_of_text() {
    let scorer = HeuristicScorer::new(HeuristicConfig {
        negation_window: usize::MAX,
        ..HeuristicConfig::default()
    });
    let lexicon = Lexicon::spanish();
    let text = tokens("hoy no estoy bueno");

    assert_eq!(
        scorer.negated_positions(&lexicon, &text),
        vec![false, false, true, true]
    );
    assert!((scorer.score(&lexicon, &text) + 1.0).abs() < 1e-6);
}

#[test]
fn heuristic_overlapping_negations_do_not_double_flip() {
    assert!((heuristic("no nunca bien") + 1.0).abs() < 1e-6);
}

#[test]
fn heuristic_negator_at_end_is_clipped() {
    let scorer = HeuristicScorer::new(HeuristicConfig::default());
    let negated = scorer.negated_positions(&Lexicon::spanish(), &tokens("bien no"));
    assert_eq!(negated, vec![false, false]);
}

#[test]
fn heuristic_averages_matched_words_only() {
    let expected = (1.0 - 1.0 - 2.0) / 3.0;
    assert!((heuristic("bien hoy triste mesa terrible") - expected).abs() < 1e-6);
}

#[test]
fn heuristic_low_intensifier_dampens() {
    assert!((heuristic("poco bueno") - 0.85).abs() < 1e-6);
}

#[test]
fn heuristic_result_is_clamped() {
    assert!((heuristic("muy muy excelente") - 1.0).abs() < 1e-6);
    assert!((heuristic("muy muy terrible") + 1.0).abs() < 1e-6);
}

#[test]
fn intensity_modifier_is_clamped() {
    let scorer = HeuristicScorer::new(HeuristicConfig::default());
    let lexicon = Lexicon::spanish();

    assert!((scorer.intensity_modifier(&lexicon, &tokens("muy muy bastante")) - 1.9).abs() < 1e-6);
    assert!((scorer.intensity_modifier(&lexicon, &tokens("muy muy muy muy")) - 2.0).abs() < 1e-6);
    assert!((scorer.intensity_modifier(&lexicon, &tokens("poco")) - 0.85).abs() < 1e-6);
    let many_low = tokens("poco algo apenas casi medio ligeramente relativamente");
    assert!((scorer.intensity_modifier(&lexicon, &many_low) - 0.1).abs() < 1e-6);
}

#[test]
fn bayes_empty_is_uniform_default() {
    let probs = classifier().predict(&[]);
    assert_eq!(probs, BayesProbs::uniform());
    assert!((probs.total() - 1.0).abs() < 1e-6);
}

#[test]
fn bayes_unseen_words_fall_back_to_priors() {
    let probs = classifier().predict(&tokens("mesa silla ventana"));
    assert!((probs.positive - 0.4).abs() < 1e-9);
    assert!((probs.negative - 0.3).abs() < 1e-9);
    assert!((probs.neutral - 0.3).abs() < 1e-9);
}

#[test]
fn bayes_single_word_matches_hand_computation() {
    let probs = classifier().predict(&tokens("feliz"));
    let positive = 0.4 * 0.09;
    let negative = 0.3 * 0.01;
    let neutral = 0.3 * 0.01;
    let sum = positive + negative + neutral;

    assert!((probs.positive - positive / sum).abs() < 1e-9);
    assert!((probs.negative - negative / sum).abs() < 1e-9);
    assert!((probs.neutral - neutral / sum).abs() < 1e-9);
}

#[test]
fn bayes_long_text_does_not_underflow() {
    let text = vec!["triste"; 400].join(" ");
    let probs = classifier().predict(&tokens(&text));
    assert!((probs.total() - 1.0).abs() < 1e-6);
    assert!(probs.negative > 0.99);
}

#[test]
fn emotions_empty_has_all_keys_at_zero() {
    let profile = EmotionDetector::new().detect(&Lexicon::spanish(), &[]);
    let values: Vec<_> = profile.iter().collect();
    assert_eq!(values.len(), 6);
    assert!(values.iter().all(|(_, value)| *value == 0.0));
    assert_eq!(profile.dominant(), None);
}

#[test]
fn emotions_short_text_saturates() {
    let profile = EmotionDetector::new().detect(&Lexicon::spanish(), &tokens("feliz y triste con miedo"));
    assert!((profile.joy - 1.0).abs() < 1e-6);
    assert!((profile.sadness - 1.0).abs() < 1e-6);
    assert!((profile.fear - 1.0).abs() < 1e-6);
    assert_eq!(profile.anger, 0.0);
}

#[test]
fn emotions_scale_with_text_length() {
    let mut words = vec!["día"; 19];
    words.push("feliz");
    let profile = EmotionDetector::new().detect(&Lexicon::spanish(), &tokens(&words.join(" ")));
    assert!((profile.joy - 0.5).abs() < 1e-6);
    assert_eq!(profile.dominant(), Some(Emotion::Joy));
}

#[test]
fn fusion_combines_scores_and_confidence() {
    let fusion = FusionScorer::new(FusionConfig::default());
    let probs = BayesProbs {
        positive: 0.8,
        negative: 0.1,
        neutral: 0.1,
    };
    let fused = fusion.fuse(1.0, &probs);

    assert!((fused.score - 0.91).abs() < 1e-6);
    assert!((fused.confidence - 0.76).abs() < 1e-6);
    assert_eq!(fused.mood, Mood::VeryHappy);
}

#[test]
fn fusion_mood_uses_unrounded_score() {
    let fused = FusionScorer::new(FusionConfig::default()).fuse(0.07137, &BayesProbs::uniform());
    let reported = (fused.score * 1000.0).round() / 1000.0;

    assert!(fused.score < 0.05);
    assert_eq!(fused.mood, Mood::Neutral);
    assert!((reported - 0.05).abs() < 1e-9);
    assert_eq!(Mood::from_score(reported), Mood::SlightlyHappy);
}

#[test]
fn fusion_negative_and_neutral() {
    let fusion = FusionScorer::new(FusionConfig::default());
    let sad = fusion.fuse(
        -1.0,
        &BayesProbs {
            positive: 0.1,
            negative: 0.8,
            neutral: 0.1,
        },
    );
    assert!((sad.score + 0.91).abs() < 1e-6);
    assert_eq!(sad.mood, Mood::Sad);

    let neutral = fusion.fuse(0.0, &BayesProbs::uniform());
    assert!(neutral.score.abs() < 1e-6);
    assert!((neutral.confidence - 0.604).abs() < 1e-6);
    assert_eq!(neutral.mood, Mood::Neutral);
}

#[test]
fn mood_thresholds_are_asymmetric() {
    assert_eq!(Mood::from_score(0.4), Mood::VeryHappy);
    assert_eq!(Mood::from_score(0.39), Mood::Happy);
    assert_eq!(Mood::from_score(0.15), Mood::Happy);
    assert_eq!(Mood::from_score(0.149), Mood::SlightlyHappy);
    assert_eq!(Mood::from_score(0.05), Mood::SlightlyHappy);
    assert_eq!(Mood::from_score(0.049), Mood::Neutral);
    assert_eq!(Mood::from_score(-0.199), Mood::Neutral);
    assert_eq!(Mood::from_score(-0.2), Mood::Sad);
}

#[test]
fn mood_emoji_round_trip() {
    for mood in [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::SlightlyHappy,
        Mood::Neutral,
        Mood::Sad,
    ] {
        let json = serde_json::to_string(&mood).expect("serialize mood");
        assert_eq!(json, format!("\"{}\"", mood.emoji()));
        let parsed: Mood = serde_json::from_str(&json).expect("parse mood");
        assert_eq!(parsed, mood);
    }
    assert!(serde_json::from_str::<Mood>("\"🤖\"").is_err());
}
