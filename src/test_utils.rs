use std::sync::LazyLock;

use crate::dictionary_data::{DictionaryForm, RawEntry, RawJapanese, RawPage, RawSense, WordEntry};
use crate::language::conjugation_d::{FormSet, Lexeme, WordGroup};
use crate::{kana_to_romaji, Conjugator};

/// Builds a lookup-service entry with a single sense.
pub(crate) fn raw_entry(
    word: Option<&str>,
    reading: &str,
    parts_of_speech: &[&str],
    definitions: &[&str],
) -> RawEntry {
    RawEntry {
        japanese: vec![RawJapanese {
            word: word.map(str::to_string),
            reading: Some(reading.to_string()),
        }],
        senses: vec![RawSense {
            parts_of_speech: parts_of_speech.iter().map(|s| s.to_string()).collect(),
            english_definitions: definitions.iter().map(|s| s.to_string()).collect(),
        }],
    }
}

pub(crate) fn forms_of(kanji: &str, kana: &str, group: WordGroup) -> FormSet {
    let lexeme = Lexeme::new(kanji, kana, group)
        .unwrap_or_else(|e| panic!("{kanji} ({kana}) should be a valid {group}: {e}"));
    Conjugator::new()
        .generate(&lexeme)
        .unwrap_or_else(|e| panic!("{kanji} ({kana}) should conjugate: {e}"))
}

/// A lexicon entry as the builder would emit it.
pub(crate) fn word_entry(kanji: &str, kana: &str, group: WordGroup) -> WordEntry {
    let word_type = group.word_type();
    let romaji = kana_to_romaji(kana);
    WordEntry {
        id: format!("{}_{romaji}", word_type.id_prefix()),
        level: "N5".to_string(),
        group,
        word_type,
        dictionary_form: DictionaryForm {
            kanji: kanji.to_string(),
            kana: kana.to_string(),
            romaji,
        },
        meaning: String::new(),
        conjugations: forms_of(kanji, kana, group),
    }
}

/// A saved page from the lookup service, trimmed to the fields we read.
pub(crate) const SAMPLE_PAGE_JSON: &str = r#"{
  "meta": {"status": 200},
  "data": [
    {"slug": "行く", "japanese": [{"word": "行く", "reading": "いく"}],
     "senses": [{"english_definitions": ["to go", "to move", "to head (towards)"], "parts_of_speech": ["Godan verb - Iku/Yuku special class", "Intransitive verb"]}]},
    {"slug": "帰る", "japanese": [{"word": "帰る", "reading": "かえる"}],
     "senses": [{"english_definitions": ["to return", "to come home"], "parts_of_speech": ["Godan verb with 'ru' ending", "Intransitive verb"]}]},
    {"slug": "食べる", "japanese": [{"word": "食べる", "reading": "たべる"}],
     "senses": [{"english_definitions": ["to eat"], "parts_of_speech": ["Ichidan verb", "Transitive verb"]}]},
    {"slug": "来る", "japanese": [{"word": "来る", "reading": "くる"}],
     "senses": [{"english_definitions": ["to come"], "parts_of_speech": ["Kuru verb - special class", "Intransitive verb"]}]},
    {"slug": "良い", "japanese": [{"word": "良い", "reading": "いい"}],
     "senses": [{"english_definitions": ["good", "excellent", "fine"], "parts_of_speech": ["I-adjective (keiyoushi) - yoi/ii class"]}]},
    {"slug": "勉強", "japanese": [{"word": "勉強", "reading": "べんきょう"}],
     "senses": [{"english_definitions": ["study"], "parts_of_speech": ["Noun", "Suru verb"]}]},
    {"slug": "静か", "japanese": [{"word": "静か", "reading": "しずか"}],
     "senses": [{"english_definitions": ["quiet", "silent"], "parts_of_speech": ["Na-adjective (keiyodoshi)"]}]},
    {"slug": "本", "japanese": [{"word": "本", "reading": "ほん"}],
     "senses": [{"english_definitions": ["book"], "parts_of_speech": ["Noun"]}]}
  ]
}"#;

pub(crate) static SAMPLE_PAGE: LazyLock<RawPage> = LazyLock::new(|| {
    RawPage::from_json(SAMPLE_PAGE_JSON).expect("sample page must be valid json")
});
