#[cfg(test)]
mod tests {
    use crate::nlp::{HeuristicAnalyzer, LanguageAnalyzer, PosTag};

    fn tags_for(text: &str) -> Vec<(String, PosTag)> {
        HeuristicAnalyzer::new().tag_parts_of_speech(text)
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let analyzer = HeuristicAnalyzer::new();

        let tokens = analyzer.tokenize("This   text   has\tmultiple\t\tspaces.");

        assert_eq!(tokens, vec!["This", "text", "has", "multiple", "spaces."]);
    }

    #[test]
    fn test_tagger_strips_token_punctuation() {
        let tagged = tags_for("The lazy dog.");

        assert_eq!(tagged[2].0, "dog");
        assert_eq!(tagged[2].1, PosTag::Noun);
    }

    #[test]
    fn test_tagger_closed_classes() {
        let tagged = tags_for("The fox ran over it and hid.");

        let tags: Vec<PosTag> = tagged.iter().map(|(_, tag)| *tag).collect();
        assert_eq!(tags[0], PosTag::Determiner);
        assert_eq!(tags[2], PosTag::Noun);
        assert_eq!(tags[3], PosTag::Adposition);
        assert_eq!(tags[4], PosTag::Pronoun);
        assert_eq!(tags[5], PosTag::Conjunction);
    }

    #[test]
    fn test_tagger_marks_punctuation_only_tokens() {
        let tagged = tags_for(".,?!;");

        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].1, PosTag::Punctuation);
    }

    #[test]
    fn test_tagger_marks_numerals() {
        let tagged = tags_for("The 3 little pigs");

        assert_eq!(tagged[1].1, PosTag::Numeral);
    }

    #[test]
    fn test_tagger_suffix_rules() {
        let tagged = tags_for("slowly jumping beautiful");

        assert_eq!(tagged[0].1, PosTag::Adverb);
        assert_eq!(tagged[1].1, PosTag::Verb);
        assert_eq!(tagged[2].1, PosTag::Adjective);
    }

    #[test]
    fn test_tagger_proper_noun_mid_sentence_only() {
        let tagged = tags_for("Criteria of Diophantine equations. Systems matter.");

        // Capitalized mid-sentence word is a proper noun.
        assert_eq!(tagged[2].1, PosTag::ProperNoun);
        // Sentence-initial capitalization proves nothing.
        assert_eq!(tagged[0].1, PosTag::Noun);
        assert_eq!(tagged[4].1, PosTag::Noun);
    }

    #[test]
    fn test_remove_stopwords() {
        let analyzer = HeuristicAnalyzer::new();

        let filtered = analyzer.remove_stopwords("the set of natural numbers");

        assert_eq!(filtered, "set natural numbers");
    }

    #[test]
    fn test_split_sentences() {
        let analyzer = HeuristicAnalyzer::new();

        let sentences =
            analyzer.split_sentences("Compatibility of systems. Criteria are considered. Done!");

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Compatibility of systems.");
        assert_eq!(sentences[2], "Done!");
    }

    #[test]
    fn test_split_sentences_empty_text() {
        let analyzer = HeuristicAnalyzer::new();

        assert!(analyzer.split_sentences("").is_empty());
    }

    #[test]
    fn test_similarity_bounds_and_symmetry() {
        let analyzer = HeuristicAnalyzer::new();
        let a = "linear constraints over natural numbers";
        let b = "linear equations over natural numbers";

        let forward = analyzer.similarity(a, b);
        let backward = analyzer.similarity(b, a);

        assert!(forward > 0.0);
        assert!(forward <= 1.0);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_similarity_disjoint_sentences() {
        let analyzer = HeuristicAnalyzer::new();

        let score = analyzer.similarity("apples grow on trees", "stock markets fell sharply");

        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_similarity_degenerate_short_sentences() {
        let analyzer = HeuristicAnalyzer::new();

        // A single-word sentence would zero the log denominator.
        assert_eq!(analyzer.similarity("word", "word"), 0.0);
    }
}
