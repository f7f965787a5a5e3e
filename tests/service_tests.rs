//! Integration tests for the emotion analysis engine

use std::sync::Arc;

use afecto::{AnalysisConfig, AnalysisError, Corpus, LabeledExample, TextEmotionService};

fn service() -> TextEmotionService {
    TextEmotionService::new(AnalysisConfig::default()).expect("builtin corpus must fit")
}

#[test]
fn test_short_inputs_return_fixed_neutral() {
    let svc = service();

    for input in ["", "a", "   ", "hola", "¡!"] {
        let result = svc.analyze(input).expect("short input is not an error");
        assert_eq!(result.dominant_emotion, "neutral", "input {:?}", input);
        assert_eq!(result.emotions.len(), 1, "input {:?}", input);
        assert_eq!(result.emotions[0].emotion, "neutral");
        assert_eq!(result.emotions[0].percent, 100.0);
    }
}

#[test]
fn test_percentages_sum_to_one_hundred() {
    let svc = service();

    for input in [
        "estoy muy feliz hoy",
        "qué día tan horrible",
        "tengo miedo de lo que pueda pasar",
        "palabras que el modelo nunca vio",
    ] {
        let result = svc.analyze(input).unwrap();
        let total = result.total_percent();
        assert!(
            (total - 100.0).abs() <= 0.2,
            "percentages for {:?} sum to {}, expected ~100",
            input,
            total
        );
    }
}

#[test]
fn test_dominant_is_maximum() {
    let svc = service();
    let result = svc.analyze("vaya sorpresa tan inesperada").unwrap();

    let max = result
        .emotions
        .iter()
        .max_by(|a, b| a.percent.partial_cmp(&b.percent).unwrap())
        .unwrap();
    assert_eq!(result.dominant_emotion, max.emotion);
    assert_eq!(result.dominant_emotion, result.emotions[0].emotion);
}

#[test]
fn test_distribution_non_increasing() {
    let svc = service();
    let result = svc.analyze("no sé qué hacer ahora").unwrap();

    for pair in result.emotions.windows(2) {
        assert!(
            pair[0].percent >= pair[1].percent,
            "distribution out of order: {:?}",
            result.emotions
        );
    }
}

#[test]
fn test_analyze_is_deterministic() {
    let svc = service();
    let a = svc.analyze("estoy muy feliz hoy").unwrap();
    let b = svc.analyze("estoy muy feliz hoy").unwrap();
    assert_eq!(a, b);

    // A second, independently fitted service agrees as well
    let other = service();
    let c = other.analyze("estoy muy feliz hoy").unwrap();
    assert_eq!(a, c);
}

#[test]
fn test_verbatim_corpus_texts_recover_labels() {
    let svc = service();

    let feliz = svc.analyze("estoy muy feliz hoy").unwrap();
    assert_eq!(feliz.dominant_emotion, "feliz");

    let triste = svc.analyze("qué día tan horrible").unwrap();
    assert_eq!(triste.dominant_emotion, "triste");
}

#[test]
fn test_distribution_covers_every_class_once() {
    let svc = service();
    let result = svc.analyze("esto me molesta mucho").unwrap();

    let mut seen: Vec<&str> = result.emotions.iter().map(|s| s.emotion.as_str()).collect();
    seen.sort_unstable();
    let mut expected: Vec<&str> = svc.labels().iter().map(String::as_str).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn test_single_label_corpus_fails_startup() {
    let corpus = Corpus::new(vec![
        LabeledExample::new("todo está bien", "neutral"),
        LabeledExample::new("nada especial hoy", "neutral"),
        LabeledExample::new("sin novedades", "neutral"),
    ]);
    let result = TextEmotionService::with_corpus(&corpus, AnalysisConfig::default());
    assert!(matches!(result, Err(AnalysisError::CorpusError(_))));
}

#[test]
fn test_empty_corpus_fails_startup() {
    let result = TextEmotionService::with_corpus(&Corpus::new(vec![]), AnalysisConfig::default());
    assert!(matches!(result, Err(AnalysisError::CorpusError(_))));
}

#[test]
fn test_custom_corpus_round_trip() {
    let corpus = Corpus::new(vec![
        LabeledExample::new("el partido fue increíble y ganamos", "contento"),
        LabeledExample::new("ganamos el torneo increíble", "contento"),
        LabeledExample::new("perdimos otra vez qué desastre", "molesto"),
        LabeledExample::new("qué desastre de arbitraje perdimos", "molesto"),
    ]);
    let svc = TextEmotionService::with_corpus(&corpus, AnalysisConfig::default()).unwrap();

    assert_eq!(svc.labels(), vec!["contento", "molesto"]);

    let result = svc.analyze("ganamos el torneo increíble").unwrap();
    assert_eq!(result.dominant_emotion, "contento");
    assert_eq!(result.emotions.len(), 2);
}

#[test]
fn test_concurrent_reads_share_one_service() {
    let svc = Arc::new(service());
    let expected = svc.analyze("estoy muy feliz hoy").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let svc = Arc::clone(&svc);
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    let result = svc.analyze("estoy muy feliz hoy").unwrap();
                    assert_eq!(result, expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}

#[test]
fn test_unseen_vocabulary_still_yields_full_distribution() {
    let svc = service();
    let result = svc.analyze("xylophone quantum dinosaurio").unwrap();

    assert_eq!(result.emotions.len(), svc.labels().len());
    assert!((result.total_percent() - 100.0).abs() <= 0.2);
}
