//! Normalization behaviour through the public library API.

use captext::normalizer::{Normalizer, SrtNormalizer, TranscriptNormalizer};
use captext::subtitle::{SubtitleDocument, SubtitleFormat};

fn normalize(input: &str) -> String {
    SrtNormalizer::new().unwrap().normalize(input)
}

const LECTURE: &str = "\
1
00:00:00,000 --> 00:00:02,500
(upbeat music)

2
00:00:02,500 --> 00:00:05,000
<font color=\"#E5E5E5\">Welcome back to</font>
the lecture.

3
00:00:05,000 --> 00:00:07,250
\u{266a} Today we cover \u{266a}

10
00:00:07,250 --> 00:00:09,000
<i>parsers</i>  (audience laughs)   and 42 lexers.
";

#[test]
fn test_hello_world_cue() {
    assert_eq!(
        normalize("1\n00:00:01,000 --> 00:00:02,000\nHello world\n\n"),
        "Hello world"
    );
}

#[test]
fn test_sound_description_then_speech() {
    assert_eq!(normalize("(gentle music) Hello"), "Hello");
}

#[test]
fn test_music_notes() {
    assert_eq!(normalize("\u{266a} la la \u{266a}"), "la la");
}

#[test]
fn test_inline_tag() {
    assert_eq!(normalize("<i>emphasis</i> text"), "emphasis text");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_full_document() {
    assert_eq!(
        normalize(LECTURE),
        "Welcome back to the lecture. Today we cover parsers and 42 lexers."
    );
}

#[test]
fn test_output_has_no_structure_or_markup() {
    let output = normalize(LECTURE);

    assert!(!output.contains("-->"));
    assert!(!output.contains('<') && !output.contains('>'));
    assert!(!output.contains("  "));
    assert!(!output.contains('\n'));
    assert_eq!(output, output.trim());
    assert!(!output.contains("00:00"));
}

#[test]
fn test_cue_order_preserved() {
    let output = normalize(LECTURE);
    let welcome = output.find("Welcome").unwrap();
    let today = output.find("Today").unwrap();
    let lexers = output.find("lexers").unwrap();

    assert!(welcome < today && today < lexers);
}

#[test]
fn test_renormalizing_is_a_no_op() {
    let once = normalize(LECTURE);
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_malformed_input_does_not_fail() {
    let inputs = [
        "-->",
        "((((",
        "<unclosed tag and text",
        "1\n2\n3\n",
        "\u{266a}\u{266a}\u{266a}",
        "text without any cue structure\nsecond line",
    ];
    for input in inputs {
        let output = normalize(input);
        assert_eq!(output, output.trim());
        assert!(!output.contains("  "));
    }
    assert_eq!(
        normalize("text without any cue structure\nsecond line"),
        "text without any cue structure second line"
    );
    assert_eq!(normalize("<unclosed tag and text"), "<unclosed tag and text");
}

#[test]
fn test_document_cues_match_input() {
    let document = SubtitleDocument::new(LECTURE);
    let cues = document.cues();

    assert_eq!(cues.len(), 4);
    assert_eq!(cues[3].index, Some(10));
    assert_eq!(cues[3].start, "00:00:07,250");
}

#[test]
fn test_vtt_through_normalizer_enum() {
    let normalizer = Normalizer::create(SubtitleFormat::Vtt).unwrap();
    let input = "WEBVTT\nKind: captions\nLanguage: en\n\n\
                 00:00:00.000 --> 00:00:02.000\nHello <b>there</b>\n\n\
                 00:00:02.000 --> 00:00:04.000\n[Music] (cheering) friend\n";

    assert_eq!(normalizer.run(input), "Hello there [Music] friend");
}
