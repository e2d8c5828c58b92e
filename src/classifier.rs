use crate::dictionary_data::RawEntry;
use crate::language::conjugation_d::WordGroup;

/// Maps an entry's parts of speech to a conjugation group.
///
/// Verb tags win over adjective tags; among verb tags the first one listed
/// decides. Returns `None` for words that do not conjugate.
pub fn classify(entry: &RawEntry) -> Option<WordGroup> {
    let is_kuru = entry.display_form() == "来る"
        || (entry.reading() == "くる"
            && entry.parts_of_speech().any(|pos| pos.contains("Kuru verb")));
    if is_kuru {
        return Some(WordGroup::Kuru);
    }

    let verb = entry.parts_of_speech().find_map(|pos| {
        if pos.starts_with("Godan verb") {
            Some(WordGroup::Godan)
        } else if pos.starts_with("Ichidan verb") {
            Some(WordGroup::Ichidan)
        } else if pos.starts_with("Suru verb") {
            Some(WordGroup::Suru)
        } else {
            None
        }
    });
    if verb.is_some() {
        return verb;
    }

    if entry.parts_of_speech().any(|pos| pos.contains("I-adjective")) {
        return Some(WordGroup::IAdjective);
    }
    if entry.parts_of_speech().any(|pos| pos.contains("Na-adjective")) {
        return Some(WordGroup::NaAdjective);
    }
    None
}
