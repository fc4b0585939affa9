use plagiarism_checker::{format_score, normalize_text, score};

const SAMPLE_TEXTS: &[&str] = &[
    "",
    "   ",
    "今天是星期天，天气晴，今天晚上我要去看电影。",
    "今天是周天，天气晴朗，我晚上要去看电影。",
    "Hello, World! 123",
    "The quick brown fox jumps over the lazy dog.",
    "床前明月光，疑是地上霜。举头望明月，低头思故乡。",
    "Rust 1.80 / LazyLock",
    "ありがとう",
    "0000",
];

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        for text in SAMPLE_TEXTS {
            assert_eq!(score(text, text), 1.0, "{:?} vs itself", text);
        }
    }

    #[test]
    fn test_score_is_symmetric() {
        for text1 in SAMPLE_TEXTS {
            for text2 in SAMPLE_TEXTS {
                assert_eq!(
                    score(text1, text2),
                    score(text2, text1),
                    "{:?} vs {:?}",
                    text1,
                    text2
                );
            }
        }
    }

    #[test]
    fn test_score_is_bounded() {
        for text1 in SAMPLE_TEXTS {
            for text2 in SAMPLE_TEXTS {
                let similarity = score(text1, text2);
                assert!(
                    (0.0..=1.0).contains(&similarity),
                    "{:?} vs {:?} gave {}",
                    text1,
                    text2,
                    similarity
                );
            }
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(score("", ""), 1.0);
        assert_eq!(score("", "abc"), 0.0);
        assert_eq!(score("abc", ""), 0.0);
    }

    #[test]
    fn test_texts_empty_after_normalization() {
        // Both sides normalize to nothing, so they are treated as identical
        assert_eq!(score("，。！", "... ???"), 1.0);
        assert_eq!(score("ありがとう", "Thanks"), 0.0);
    }

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        assert_eq!(score("Hello, World!", "hello world"), 1.0);
    }

    #[test]
    fn test_identical_chinese_text_formats_to_one() {
        let text = "今天是星期天天气晴";
        assert_eq!(format_score(score(text, text), 2), "1.00");
    }

    #[test]
    fn test_partially_matching_chinese_text() {
        let similarity = score("今天是星期天天气晴", "今天是周天天气晴朗");

        assert!(similarity > 0.0 && similarity < 1.0);
        // 今 天 是 气 晴 are shared; 星 期 周 朗 are not
        assert_eq!(similarity, 5.0 / 9.0);
    }

    #[test]
    fn test_different_days_share_some_characters() {
        let similarity = score("今天是星期天", "明天是星期一");
        assert!(similarity >= 0.0);
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(
            normalize_text("今天是星期天，天气晴，今天晚上我要去看电影。"),
            "今天是星期天天气晴今天晚上我要去看电影"
        );
        assert_eq!(normalize_text("Hello, World! 123"), "helloworld123");
    }
}
