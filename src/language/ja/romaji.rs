//! Kana to Latin transliteration used for word identifiers.
//!
//! Greedy longest match against [`ROMAJI_TABLE`]; `っ` doubles the leading
//! consonant of the grapheme after it and `ー` is dropped. Characters outside
//! the table pass through unchanged, so transliteration never fails.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::japanese::{convert_katakana_to_hiragana, HIRAGANA_SMALL_TSU};
use crate::settings::TransliterationOptions;

/// Kana graphemes and their romanization. Digraphs come first; on duplicate
/// keys the first declaration wins.
#[rustfmt::skip]
pub const ROMAJI_TABLE: &[(&str, &str)] = &[
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "di"), ("づ", "du"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("ー", ""),
];

pub static TRANSLITERATION_TABLE: LazyLock<TransliterationTable> =
    LazyLock::new(|| TransliterationTable::new(ROMAJI_TABLE));

#[derive(Clone, Debug)]
pub struct TransliterationTable {
    graphemes: IndexMap<&'static str, &'static str>,
    /// Length in chars of the longest grapheme.
    longest: usize,
}

impl TransliterationTable {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        let mut graphemes = IndexMap::with_capacity(entries.len());
        for &(kana, romaji) in entries {
            graphemes.entry(kana).or_insert(romaji);
        }
        let longest = graphemes
            .keys()
            .map(|kana| kana.chars().count())
            .max()
            .unwrap_or(0);
        Self { graphemes, longest }
    }

    /// The longest grapheme `text` starts with, and its romanization.
    pub fn longest_match<'t>(&self, text: &'t str) -> Option<(&'t str, &'static str)> {
        let ends: Vec<usize> = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(self.longest)
            .collect();
        ends.into_iter().rev().find_map(|end| {
            let kana = &text[..end];
            self.graphemes.get(kana).map(|&romaji| (kana, romaji))
        })
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[derive(Clone, Debug)]
pub struct Transliterator<'a> {
    table: &'a TransliterationTable,
    options: TransliterationOptions,
}

impl Default for Transliterator<'static> {
    fn default() -> Self {
        Self::new(TransliterationOptions::default())
    }
}

impl Transliterator<'static> {
    pub fn new(options: TransliterationOptions) -> Self {
        Self {
            table: &TRANSLITERATION_TABLE,
            options,
        }
    }
}

impl<'a> Transliterator<'a> {
    pub fn with_table(table: &'a TransliterationTable, options: TransliterationOptions) -> Self {
        Self { table, options }
    }

    pub fn transliterate(&self, text: &str) -> String {
        let folded;
        let text = if *self.options.fold_katakana() {
            folded = convert_katakana_to_hiragana(text);
            folded.as_str()
        } else {
            text
        };

        let mut result = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            if c == HIRAGANA_SMALL_TSU {
                rest = &rest[c.len_utf8()..];
                if let Some((kana, romaji)) = self.table.longest_match(rest) {
                    if let Some(consonant) = romaji.chars().next().filter(|c| !is_vowel(*c)) {
                        result.push(consonant);
                        result.push_str(romaji);
                        rest = &rest[kana.len()..];
                    }
                }
                continue;
            }
            match self.table.longest_match(rest) {
                Some((kana, romaji)) => {
                    result.push_str(romaji);
                    rest = &rest[kana.len()..];
                }
                None => {
                    result.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        result
    }
}

/// Transliterates `text` with the default table and options.
pub fn kana_to_romaji<T: AsRef<str>>(text: T) -> String {
    Transliterator::default().transliterate(text.as_ref())
}
