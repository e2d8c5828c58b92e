use pretty_assertions::assert_eq;

use crate::language::conjugation_d::{FormName, WordGroup, WordType};
use crate::language::ja::stems::GodanRow;
use crate::test_utils::forms_of;
use crate::{kana_to_romaji, Conjugator, Lexeme};

const ICHIDAN: &[(&str, &str)] = &[
    ("食べる", "たべる"),
    ("見る", "みる"),
    ("起きる", "おきる"),
    ("寝る", "ねる"),
    ("教える", "おしえる"),
];

const GODAN: &[(&str, &str)] = &[
    ("買う", "かう"),
    ("書く", "かく"),
    ("泳ぐ", "およぐ"),
    ("話す", "はなす"),
    ("待つ", "まつ"),
    ("死ぬ", "しぬ"),
    ("遊ぶ", "あそぶ"),
    ("読む", "よむ"),
    ("帰る", "かえる"),
    ("行く", "いく"),
    ("有る", "ある"),
];

#[test]
fn ichidan_past_and_te_follow_stem() {
    for &(kanji, kana) in ICHIDAN {
        let stem = kana.strip_suffix('る').unwrap();
        let forms = forms_of(kanji, kana, WordGroup::Ichidan);
        assert_eq!(forms.form(FormName::PastPlain), Some(format!("{stem}た").as_str()));
        assert_eq!(forms.form(FormName::TeForm), Some(format!("{stem}て").as_str()));
    }
}

#[test]
fn godan_te_ta_pair_depends_only_on_ending() {
    const PAIRS: [(&str, &str); 5] = [
        ("って", "った"),
        ("いて", "いた"),
        ("いで", "いだ"),
        ("して", "した"),
        ("んで", "んだ"),
    ];
    for &(kanji, kana) in GODAN {
        let forms = forms_of(kanji, kana, WordGroup::Godan);
        let (stem, ending) = kana.split_at(kana.len() - 'る'.len_utf8());
        let te = forms.form(FormName::TeForm).unwrap();
        let ta = forms.form(FormName::PastPlain).unwrap();
        let matching: Vec<_> = PAIRS
            .iter()
            .filter(|(te_suffix, ta_suffix)| {
                te == format!("{stem}{te_suffix}") && ta == format!("{stem}{ta_suffix}")
            })
            .collect();
        assert_eq!(matching.len(), 1, "{kana}");

        let row = GodanRow::from_ending(ending.chars().next().unwrap()).unwrap();
        let expected = if kana == "いく" { ("って", "った") } else { row.te_ta() };
        assert_eq!(*matching[0], expected, "{kana}");
    }
}

#[test]
fn generation_is_idempotent() {
    let conjugator = Conjugator::new();
    for &(kanji, kana) in GODAN {
        let lexeme = Lexeme::new(kanji, kana, WordGroup::Godan).unwrap();
        assert_eq!(
            conjugator.generate(&lexeme).unwrap(),
            conjugator.generate(&lexeme).unwrap()
        );
    }
}

#[test]
fn aru_overrides_only_negatives() {
    let forms = forms_of("有る", "ある", WordGroup::Godan);
    let regular = forms_of("取る", "とる", WordGroup::Godan);
    assert_eq!(forms.form(FormName::NegativePlain), Some("ない"));
    assert_eq!(forms.form(FormName::PastNegativePlain), Some("なかった"));
    for form in FormName::VERB {
        if matches!(form, FormName::NegativePlain | FormName::PastNegativePlain) {
            continue;
        }
        // same r-row rule with stem あ instead of と
        let expected = regular.form(form).unwrap().replacen('と', "あ", 1);
        assert_eq!(forms.form(form), Some(expected.as_str()), "{form}");
    }
}

#[test]
fn both_spellings_of_good_differ_only_in_polite() {
    let ii = forms_of("良い", "いい", WordGroup::IAdjective);
    let yoi = forms_of("良い", "よい", WordGroup::IAdjective);
    assert_eq!(ii.form(FormName::Polite), Some("いいです"));
    assert_eq!(yoi.form(FormName::Polite), Some("よいです"));
    for form in FormName::ADJECTIVE {
        if form != FormName::Polite {
            assert_eq!(ii.form(form), yoi.form(form), "{form}");
        }
    }
    assert_eq!(ii.form(FormName::TeForm), Some("よくて"));
    assert_eq!(ii.form(FormName::NegativePlain), Some("よくない"));
    assert_eq!(ii.form(FormName::ConditionalTara), Some("よかったら"));
}

#[test]
fn adjectives_never_carry_verb_moods() {
    for (kanji, kana, group) in [
        ("高い", "たかい", WordGroup::IAdjective),
        ("良い", "いい", WordGroup::IAdjective),
        ("格好いい", "かっこいい", WordGroup::IAdjective),
        ("静か", "しずか", WordGroup::NaAdjective),
    ] {
        let forms = forms_of(kanji, kana, group);
        let keys: Vec<FormName> = forms.keys().copied().collect();
        assert_eq!(keys, WordType::IAdjective.forms().to_vec(), "{kana}");
        for form in [
            FormName::Potential,
            FormName::Passive,
            FormName::Causative,
            FormName::CausativePassive,
            FormName::Imperative,
            FormName::Volitional,
        ] {
            assert!(!forms.contains_key(&form), "{kana} has {form}");
        }
    }
}

#[test]
fn verbs_carry_all_sixteen_keys() {
    for (kanji, kana, group) in [
        ("食べる", "たべる", WordGroup::Ichidan),
        ("帰る", "かえる", WordGroup::Godan),
        ("勉強する", "べんきょうする", WordGroup::Suru),
        ("来る", "くる", WordGroup::Kuru),
    ] {
        let forms = forms_of(kanji, kana, group);
        let keys: Vec<FormName> = forms.keys().copied().collect();
        assert_eq!(keys, FormName::VERB.to_vec(), "{kana}");
        assert!(forms.values().all(|surface| !surface.is_empty()));
    }
}

#[test]
fn form_set_serializes_with_stable_keys() {
    let forms = forms_of("来る", "くる", WordGroup::Kuru);
    let json = serde_json::to_value(&forms).unwrap();
    assert_eq!(json["te_form"], "きて");
    assert_eq!(json["negative_plain"], "こない");
    assert_eq!(json["potential"], json["passive"]);
    assert_eq!(json["causative_passive"], "こさせられる");
    assert_eq!(json.as_object().unwrap().len(), 16);
}

#[test]
fn end_to_end_spot_checks() {
    for (kanji, kana, group, te, negative) in [
        ("行く", "いく", WordGroup::Godan, "いって", "いかない"),
        ("帰る", "かえる", WordGroup::Godan, "かえって", "かえらない"),
        ("食べる", "たべる", WordGroup::Ichidan, "たべて", "たべない"),
        ("来る", "くる", WordGroup::Kuru, "きて", "こない"),
        ("良い", "いい", WordGroup::IAdjective, "よくて", "よくない"),
    ] {
        let forms = forms_of(kanji, kana, group);
        assert_eq!(forms.form(FormName::TeForm), Some(te), "{kana}");
        assert_eq!(forms.form(FormName::NegativePlain), Some(negative), "{kana}");
    }
}

#[test]
fn romanized_readings() {
    assert_eq!(kana_to_romaji("しゃしん"), "shashin");
    assert_eq!(kana_to_romaji("がっこう"), "gakkou");
    assert_eq!(kana_to_romaji("びょういん"), "byouin");
    assert_eq!(kana_to_romaji("すきー"), "suki");
}
