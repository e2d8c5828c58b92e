//! Regular suffix rules for every conjugation class.
//!
//! Each class owns an ordered table of `(form, ending)` pairs; the table order
//! is the canonical key order of the resulting [`FormSet`](crate::language::conjugation_d::FormSet).

use super::stems::{GodanRow, Stem};
use crate::language::conjugation_d::{ConjugationClass, FormName};

/// Vowel column of a godan row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowVowel {
    A,
    I,
    E,
    O,
}

/// How a single form is built from a [`Stem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    /// stem (or prefix) + suffix
    Stem(&'static str),
    /// unmodified reading + suffix
    Dictionary(&'static str),
    /// stem + row kana for the vowel + suffix
    Row(RowVowel, &'static str),
    /// stem + the row's euphonic te ending
    Te,
    /// stem + the row's euphonic ta ending
    Ta,
    /// past_plain + suffix
    Past(&'static str),
}

pub type RuleTable = [(FormName, Ending)];

impl GodanRow {
    pub fn kana(&self, vowel: RowVowel) -> char {
        #[rustfmt::skip]
        let [a, i, e, o] = match self {
            GodanRow::U => ['わ', 'い', 'え', 'お'],
            GodanRow::K => ['か', 'き', 'け', 'こ'],
            GodanRow::G => ['が', 'ぎ', 'げ', 'ご'],
            GodanRow::S => ['さ', 'し', 'せ', 'そ'],
            GodanRow::T => ['た', 'ち', 'て', 'と'],
            GodanRow::N => ['な', 'に', 'ね', 'の'],
            GodanRow::B => ['ば', 'び', 'べ', 'ぼ'],
            GodanRow::M => ['ま', 'み', 'め', 'も'],
            GodanRow::R => ['ら', 'り', 'れ', 'ろ'],
        };
        match vowel {
            RowVowel::A => a,
            RowVowel::I => i,
            RowVowel::E => e,
            RowVowel::O => o,
        }
    }

    /// Lexicalized te/ta endings; these do not follow from the row vowels.
    pub fn te_ta(&self) -> (&'static str, &'static str) {
        match self {
            GodanRow::U | GodanRow::T | GodanRow::R => ("って", "った"),
            GodanRow::K => ("いて", "いた"),
            GodanRow::G => ("いで", "いだ"),
            GodanRow::S => ("して", "した"),
            GodanRow::N | GodanRow::B | GodanRow::M => ("んで", "んだ"),
        }
    }
}

#[rustfmt::skip]
pub const ICHIDAN_RULES: [(FormName, Ending); 16] = [
    (FormName::Polite,             Ending::Stem("ます")),
    (FormName::NegativePlain,      Ending::Stem("ない")),
    (FormName::NegativePolite,     Ending::Stem("ません")),
    (FormName::PastPlain,          Ending::Stem("た")),
    (FormName::PastPolite,         Ending::Stem("ました")),
    (FormName::PastNegativePlain,  Ending::Stem("なかった")),
    (FormName::PastNegativePolite, Ending::Stem("ませんでした")),
    (FormName::TeForm,             Ending::Stem("て")),
    (FormName::Potential,          Ending::Stem("られる")),
    (FormName::Passive,            Ending::Stem("られる")),
    (FormName::Causative,          Ending::Stem("させる")),
    (FormName::CausativePassive,   Ending::Stem("させられる")),
    (FormName::Imperative,         Ending::Stem("ろ")),
    (FormName::Volitional,         Ending::Stem("よう")),
    (FormName::ConditionalBa,      Ending::Stem("れば")),
    (FormName::ConditionalTara,    Ending::Past("ら")),
];

#[rustfmt::skip]
pub const GODAN_RULES: [(FormName, Ending); 16] = [
    (FormName::Polite,             Ending::Row(RowVowel::I, "ます")),
    (FormName::NegativePlain,      Ending::Row(RowVowel::A, "ない")),
    (FormName::NegativePolite,     Ending::Row(RowVowel::I, "ません")),
    (FormName::PastPlain,          Ending::Ta),
    (FormName::PastPolite,         Ending::Row(RowVowel::I, "ました")),
    (FormName::PastNegativePlain,  Ending::Row(RowVowel::A, "なかった")),
    (FormName::PastNegativePolite, Ending::Row(RowVowel::I, "ませんでした")),
    (FormName::TeForm,             Ending::Te),
    (FormName::Potential,          Ending::Row(RowVowel::E, "る")),
    (FormName::Passive,            Ending::Row(RowVowel::A, "れる")),
    (FormName::Causative,          Ending::Row(RowVowel::A, "せる")),
    (FormName::CausativePassive,   Ending::Row(RowVowel::A, "せられる")),
    (FormName::Imperative,         Ending::Row(RowVowel::E, "")),
    (FormName::Volitional,         Ending::Row(RowVowel::O, "う")),
    (FormName::ConditionalBa,      Ending::Row(RowVowel::E, "ば")),
    (FormName::ConditionalTara,    Ending::Past("ら")),
];

#[rustfmt::skip]
pub const SURU_RULES: [(FormName, Ending); 16] = [
    (FormName::Polite,             Ending::Stem("します")),
    (FormName::NegativePlain,      Ending::Stem("しない")),
    (FormName::NegativePolite,     Ending::Stem("しません")),
    (FormName::PastPlain,          Ending::Stem("した")),
    (FormName::PastPolite,         Ending::Stem("しました")),
    (FormName::PastNegativePlain,  Ending::Stem("しなかった")),
    (FormName::PastNegativePolite, Ending::Stem("しませんでした")),
    (FormName::TeForm,             Ending::Stem("して")),
    (FormName::Potential,          Ending::Stem("できる")),
    (FormName::Passive,            Ending::Stem("される")),
    (FormName::Causative,          Ending::Stem("させる")),
    (FormName::CausativePassive,   Ending::Stem("させられる")),
    (FormName::Imperative,         Ending::Stem("しろ")),
    (FormName::Volitional,         Ending::Stem("しよう")),
    (FormName::ConditionalBa,      Ending::Stem("すれば")),
    (FormName::ConditionalTara,    Ending::Stem("したら")),
];

/// Potential and passive share one surface form.
#[rustfmt::skip]
pub const KURU_RULES: [(FormName, Ending); 16] = [
    (FormName::Polite,             Ending::Stem("きます")),
    (FormName::NegativePlain,      Ending::Stem("こない")),
    (FormName::NegativePolite,     Ending::Stem("きません")),
    (FormName::PastPlain,          Ending::Stem("きた")),
    (FormName::PastPolite,         Ending::Stem("きました")),
    (FormName::PastNegativePlain,  Ending::Stem("こなかった")),
    (FormName::PastNegativePolite, Ending::Stem("きませんでした")),
    (FormName::TeForm,             Ending::Stem("きて")),
    (FormName::Potential,          Ending::Stem("こられる")),
    (FormName::Passive,            Ending::Stem("こられる")),
    (FormName::Causative,          Ending::Stem("こさせる")),
    (FormName::CausativePassive,   Ending::Stem("こさせられる")),
    (FormName::Imperative,         Ending::Stem("こい")),
    (FormName::Volitional,         Ending::Stem("こよう")),
    (FormName::ConditionalBa,      Ending::Stem("くれば")),
    (FormName::ConditionalTara,    Ending::Stem("きたら")),
];

/// The polite form keeps the original orthography, so irregular stems never
/// reach it.
#[rustfmt::skip]
pub const I_ADJECTIVE_RULES: [(FormName, Ending); 10] = [
    (FormName::Polite,             Ending::Dictionary("です")),
    (FormName::NegativePlain,      Ending::Stem("くない")),
    (FormName::NegativePolite,     Ending::Stem("くないです")),
    (FormName::PastPlain,          Ending::Stem("かった")),
    (FormName::PastPolite,         Ending::Stem("かったです")),
    (FormName::PastNegativePlain,  Ending::Stem("くなかった")),
    (FormName::PastNegativePolite, Ending::Stem("くなかったです")),
    (FormName::TeForm,             Ending::Stem("くて")),
    (FormName::ConditionalBa,      Ending::Stem("ければ")),
    (FormName::ConditionalTara,    Ending::Stem("かったら")),
];

#[rustfmt::skip]
pub const NA_ADJECTIVE_RULES: [(FormName, Ending); 10] = [
    (FormName::Polite,             Ending::Stem("です")),
    (FormName::NegativePlain,      Ending::Stem("じゃない")),
    (FormName::NegativePolite,     Ending::Stem("じゃありません")),
    (FormName::PastPlain,          Ending::Stem("だった")),
    (FormName::PastPolite,         Ending::Stem("でした")),
    (FormName::PastNegativePlain,  Ending::Stem("じゃなかった")),
    (FormName::PastNegativePolite, Ending::Stem("じゃありませんでした")),
    (FormName::TeForm,             Ending::Stem("で")),
    (FormName::ConditionalBa,      Ending::Stem("であれば")),
    (FormName::ConditionalTara,    Ending::Stem("だったら")),
];

pub fn rules(class: &ConjugationClass) -> &'static RuleTable {
    match class {
        ConjugationClass::Ichidan => &ICHIDAN_RULES,
        ConjugationClass::Godan(_) => &GODAN_RULES,
        ConjugationClass::SuruCompound { .. } => &SURU_RULES,
        ConjugationClass::Kuru { .. } => &KURU_RULES,
        ConjugationClass::IAdjective => &I_ADJECTIVE_RULES,
        ConjugationClass::NaAdjective => &NA_ADJECTIVE_RULES,
    }
}

/// Realizes a single `form` from `table`, deriving `past_plain` first when
/// the form is built on it. `None` if the table has no such form.
pub fn realize_form(
    table: &RuleTable,
    stem: &Stem<'_>,
    base: &str,
    form: FormName,
) -> Option<String> {
    let &(_, ending) = table.iter().find(|(name, _)| *name == form)?;
    let past = match ending {
        Ending::Past(_) => Some(realize_form(table, stem, base, FormName::PastPlain)?),
        _ => None,
    };
    ending.realize(stem, base, past.as_deref())
}

impl Ending {
    /// Realizes this ending on `base`.
    ///
    /// Returns `None` when the ending needs data the stem does not carry: a
    /// godan row, or a past form that has not been realized yet.
    pub fn realize(&self, stem: &Stem<'_>, base: &str, past: Option<&str>) -> Option<String> {
        let realized = match *self {
            Ending::Stem(suffix) => format!("{base}{suffix}"),
            Ending::Dictionary(suffix) => format!("{}{suffix}", stem.dictionary),
            Ending::Row(vowel, suffix) => format!("{base}{}{suffix}", stem.row?.kana(vowel)),
            Ending::Te => format!("{base}{}", stem.row?.te_ta().0),
            Ending::Ta => format!("{base}{}", stem.row?.te_ta().1),
            Ending::Past(suffix) => format!("{}{suffix}", past?),
        };
        Some(realized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::conjugation_d::WordType;
    use pretty_assertions::assert_eq;

    fn forms_of(table: &RuleTable) -> Vec<FormName> {
        table.iter().map(|(form, _)| *form).collect()
    }

    #[test]
    fn tables_cover_canonical_forms() {
        for (table, word_type) in [
            (&ICHIDAN_RULES[..], WordType::Verb),
            (&GODAN_RULES[..], WordType::Verb),
            (&SURU_RULES[..], WordType::Verb),
            (&KURU_RULES[..], WordType::Verb),
            (&I_ADJECTIVE_RULES[..], WordType::IAdjective),
            (&NA_ADJECTIVE_RULES[..], WordType::NaAdjective),
        ] {
            assert_eq!(forms_of(table), word_type.forms().to_vec());
        }
    }

    #[test]
    fn past_precedes_tara() {
        for table in [&ICHIDAN_RULES, &GODAN_RULES] {
            let forms = forms_of(table);
            let past = forms.iter().position(|f| *f == FormName::PastPlain);
            let tara = forms.iter().position(|f| *f == FormName::ConditionalTara);
            assert!(past < tara);
        }
    }

    #[test]
    fn te_ta_pairs_by_row() {
        assert_eq!(GodanRow::U.te_ta(), ("って", "った"));
        assert_eq!(GodanRow::K.te_ta(), ("いて", "いた"));
        assert_eq!(GodanRow::G.te_ta(), ("いで", "いだ"));
        assert_eq!(GodanRow::S.te_ta(), ("して", "した"));
        assert_eq!(GodanRow::M.te_ta(), ("んで", "んだ"));
    }

    #[test]
    fn u_row_negative_uses_wa() {
        assert_eq!(GodanRow::U.kana(RowVowel::A), 'わ');
        assert_eq!(GodanRow::T.kana(RowVowel::I), 'ち');
    }

    #[test]
    fn single_forms_from_any_table() {
        let stem = Stem {
            dictionary: "たべる",
            base: "たべ",
            row: Some(GodanRow::R),
        };
        assert_eq!(
            realize_form(&GODAN_RULES, &stem, stem.base, FormName::ConditionalTara),
            Some("たべったら".to_string())
        );
        assert_eq!(
            realize_form(&ICHIDAN_RULES, &stem, stem.base, FormName::ConditionalTara),
            Some("たべたら".to_string())
        );
        assert_eq!(
            realize_form(&NA_ADJECTIVE_RULES, &stem, stem.base, FormName::Potential),
            None
        );
    }

    #[test]
    fn row_ending_without_row_is_unrealizable() {
        let stem = Stem {
            dictionary: "たべる",
            base: "たべ",
            row: None,
        };
        assert_eq!(Ending::Te.realize(&stem, stem.base, None), None);
        assert_eq!(Ending::Past("ら").realize(&stem, stem.base, None), None);
        assert_eq!(
            Ending::Stem("て").realize(&stem, stem.base, None),
            Some("たべて".to_string())
        );
    }
}
