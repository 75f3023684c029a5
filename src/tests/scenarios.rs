use crate::{
    compare, document_similarity, CompareConfig, CompareError, Comparator, Document, DocumentSide,
    MarkStyle, Verdict, VerdictBands,
};

const CAT_SUNNY: &str = "The cat sat on the mat. It was sunny.";
const CAT_RAIN: &str = "The cat sat on the mat. It rained all day.";

#[test]
fn test_near_identical_first_sentence() {
    let result = compare(CAT_SUNNY, CAT_RAIN, &CompareConfig::default()).unwrap();

    assert_eq!(result.sentences_a, vec!["The cat sat on the mat.", "It was sunny."]);
    assert_eq!(result.sentences_b, vec!["The cat sat on the mat.", "It rained all day."]);
    assert_eq!(result.matched_a, vec![true, false]);
    assert_eq!(result.matched_b, vec![true, false]);
    assert_eq!(result.sentence_match_pct, 50.0);
    assert_eq!(result.pairs.len(), 1);
    assert_eq!((result.pairs[0].a_index, result.pairs[0].b_index), (0, 0));

    assert_eq!(result.overall_similarity_pct, 64.73);
    assert_eq!(result.verdict, Verdict::Moderate);

    insta::assert_snapshot!(result.annotated_a, @"<mark>The cat sat on the mat.</mark> It was sunny.");
    insta::assert_snapshot!(result.annotated_b, @"<mark>The cat sat on the mat.</mark> It rained all day.");
}

#[test]
fn test_identical_documents() {
    let text = "Plagiarism checks compare documents. Each sentence is scored! \
                Matching sentences are highlighted?";
    let result = compare(text, text, &CompareConfig::default()).unwrap();

    assert_eq!(result.overall_similarity_pct, 100.0);
    assert_eq!(result.sentence_match_pct, 100.0);
    assert_eq!(result.verdict, Verdict::High);
    assert!(result.matched_b.iter().all(|m| *m));
    for pair in &result.pairs {
        assert_eq!(pair.a_index, pair.b_index);
    }
}

#[test]
fn test_disjoint_vocabularies() {
    let result = compare(
        "Alpha beta gamma. Delta epsilon.",
        "Zeta theta iota. Kappa lambda.",
        &CompareConfig::default(),
    )
    .unwrap();

    assert_eq!(result.overall_similarity_pct, 0.0);
    assert_eq!(result.verdict, Verdict::Low);
    assert_eq!(result.matched_a, vec![false, false]);
    assert_eq!(result.matched_b, vec![false, false]);
    assert!(result.pairs.is_empty());
    assert_eq!(result.annotated_a, "Alpha beta gamma. Delta epsilon.");
}

#[test]
fn test_blank_reference_is_input_error() {
    let err = compare("   ", "hello", &CompareConfig::default()).unwrap_err();
    assert!(matches!(err, CompareError::EmptyInput { side: DocumentSide::A }));
}

#[test]
fn test_single_character_text_has_no_sentences() {
    // "x" is not blank, so it passes the input check, but it segments to nothing.
    let result = compare("x", "x marks the spot.", &CompareConfig::default()).unwrap();
    assert!(result.sentences_a.is_empty());
    assert!(result.matched_a.is_empty());
    assert_eq!(result.matched_b, vec![false]);
    assert_eq!(result.sentence_match_pct, 0.0);
    assert_eq!(result.annotated_a, "");
}

#[test]
fn test_many_to_one_matching_preserved() {
    let a = "The report was filed on time. The report was filed on time today.";
    let b = "The report was filed on time. Unrelated closing remarks follow.";
    let result = compare(a, b, &CompareConfig::default()).unwrap();

    assert_eq!(result.matched_a, vec![true, true]);
    assert_eq!(result.matched_b, vec![true, false]);
    assert!(result.pairs.iter().all(|p| p.b_index == 0));
}

#[test]
fn test_lower_threshold_accepts_weaker_matches() {
    let strict = compare(CAT_SUNNY, CAT_RAIN, &CompareConfig::new().with_threshold(0.9)).unwrap();
    let loose = compare(CAT_SUNNY, CAT_RAIN, &CompareConfig::new().with_threshold(0.1)).unwrap();

    assert_eq!(strict.matched_a, vec![true, false]);
    assert_eq!(loose.matched_a, vec![true, true]);
    assert_eq!(loose.sentence_match_pct, 100.0);
}

#[test]
fn test_custom_bands() {
    let config = CompareConfig::new().with_bands(VerdictBands::new(0.6, 0.3));
    let result = compare(CAT_SUNNY, CAT_RAIN, &config).unwrap();
    assert_eq!(result.verdict, Verdict::High);
}

#[test]
fn test_rendered_fields() {
    let comparator = Comparator::new(CompareConfig::default()).unwrap();
    let result = comparator
        .compare_documents(
            &Document::new("original.txt", CAT_SUNNY),
            &Document::new("suspect.txt", CAT_RAIN),
        )
        .unwrap();
    let rendered = result.render();

    assert_eq!(rendered.result, "64.73");
    assert_eq!(rendered.verdict, "Moderate similarity");
    assert_eq!(rendered.sent_match_pct, 50.0);
    assert_eq!(rendered.highlighted1, result.annotated_a);
    assert_eq!(rendered.filename1, "original.txt");
    assert_eq!(rendered.filename2, "suspect.txt");
}

#[test]
fn test_result_serializes_to_json() {
    let config = CompareConfig::new().with_mark_style(MarkStyle::brackets());
    let result = compare(CAT_SUNNY, CAT_RAIN, &config).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["verdict"], "MODERATE");
    assert_eq!(json["sentence_match_pct"], 50.0);
    assert_eq!(json["annotated_a"], "[[The cat sat on the mat.]] It was sunny.");
    assert_eq!(json["pairs"][0]["b_index"], 0);
}

#[test]
fn test_document_similarity_newlines_do_not_matter() {
    let a = "first line\nsecond line";
    let b = "first line second line";
    assert!((document_similarity(a, b) - 1.0).abs() < 1e-9);
}

#[test]
fn test_unspaced_scripts_match_their_copy() {
    let texts = [
        "我们今天去学校上课。老师讲了很多有趣的故事。",
        "今日はいい天気です。散歩に行きましょう。",
        "สวัสดีครับ ยินดีต้อนรับ",
    ];
    for text in texts {
        let result = compare(text, text, &CompareConfig::default()).unwrap();
        assert_eq!(result.overall_similarity_pct, 100.0, "{text}");
        assert_eq!(result.verdict, Verdict::High, "{text}");
        assert_eq!(result.sentence_match_pct, 100.0, "{text}");
        assert!(result.matched_b.iter().all(|m| *m), "{text}");
    }
}

#[test]
fn test_unspaced_script_against_different_text() {
    let result = compare(
        "我们今天去学校上课。",
        "老师讲了很多有趣的故事。",
        &CompareConfig::default(),
    )
    .unwrap();
    assert_eq!(result.overall_similarity_pct, 0.0);
    assert_eq!(result.verdict, Verdict::Low);
}
