use super::*;

#[test]
fn test_to_romaji_mixed_scripts() {
    assert_eq!(to_romaji("ひらがな", false), "hiragana");
    assert_eq!(to_romaji("カタカナ", false), "katakana");
    assert_eq!(to_romaji("ひらがな and カタカナ", false), "hiragana and katakana");
}

#[test]
fn test_to_romaji_cased() {
    assert_eq!(to_romaji_cased("ひらがな", false), "hiragana");
    assert_eq!(to_romaji_cased("カタカナ", false), "KATAKANA");
    assert_eq!(
        to_romaji_cased("ひらがな and カタカナ", false),
        "hiragana and KATAKANA"
    );
}

#[test]
fn test_to_hiragana_swaps_leftover_katakana() {
    assert_eq!(to_hiragana("hiragana"), "ひらがな");
    assert_eq!(to_hiragana("hiragana + カタカナ"), "ひらがな + かたかな");
    assert_eq!(to_hiragana("HIRAGANA"), "ひらがな");
}

#[test]
fn test_to_katakana_swaps_leftover_hiragana() {
    assert_eq!(to_katakana("katakana"), "カタカナ");
    assert_eq!(to_katakana("katakana + ひらがな"), "カタカナ + ヒラガナ");
}

#[test]
fn test_to_kana_by_case() {
    assert_eq!(to_kana("hiragana + KATAKANA"), "ひらがな + カタカナ");
    assert_eq!(to_kana("kyouha TEREBI"), "きょうは テレビ");
}

#[test]
fn test_to_kana_partial_on_case_change() {
    assert_eq!(to_kana("OnaJi"), "オなJい");
    assert_eq!(to_kana("OnaJI"), "オなジ");
}

#[test]
fn test_small_kana_to_romaji() {
    let cases = [
        ("ァ", "xa"),
        ("ィ", "xi"),
        ("ゥ", "xu"),
        ("ェ", "xe"),
        ("ォ", "xo"),
        ("ァッァ", "xaxxa"),
        ("ッッ", "xx"),
        ("ぁ", "xa"),
        ("ぃ", "xi"),
        ("ぅ", "xu"),
        ("ぇ", "xe"),
        ("ぉ", "xo"),
        ("ぁっぁ", "xaxxa"),
        ("っっ", "xx"),
    ];
    for (kana, romaji) in cases {
        assert_eq!(to_romaji(kana, false), romaji, "{kana}");
    }
}

#[test]
fn test_x_prefix_to_small_kana() {
    let cases = [
        ("xa", "ぁ", "ァ"),
        ("xi", "ぃ", "ィ"),
        ("xu", "ぅ", "ゥ"),
        ("xe", "ぇ", "ェ"),
        ("xo", "ぉ", "ォ"),
        ("xya", "ゃ", "ャ"),
        ("xtsu", "っ", "ッ"),
        ("xtu", "っ", "ッ"),
        ("xwa", "ゎ", "ヮ"),
        ("xka", "ゕ", "ヵ"),
        ("xke", "ゖ", "ヶ"),
        ("xaxxa", "ぁっぁ", "ァッァ"),
        ("xx", "っっ", "ッッ"),
    ];
    for (romaji, hiragana, katakana) in cases {
        assert_eq!(to_hiragana(romaji), hiragana, "{romaji}");
        assert_eq!(to_katakana(romaji), katakana, "{romaji}");
    }
}

#[test]
fn test_longest_match_keeps_natural_sequences() {
    let cases = [
        ("フォト", "foto"),
        ("ふぉと", "foto"),
        ("パーティィ", "pa-tixi"),
        ("ぱーてぃぃ", "pa-tixi"),
        ("パーティー", "pa-ti-"),
        ("ぱーてぃー", "pa-ti-"),
    ];
    for (kana, romaji) in cases {
        assert_eq!(to_romaji(kana, false), romaji, "{kana}");
    }
}

#[test]
fn test_dashes_to_long_vowel_mark() {
    assert_eq!(to_hiragana("pa-ti-"), "ぱーてぃー");
    assert_eq!(to_katakana("ra\u{2014}men"), "ラーメン");
    assert_eq!(to_kana("PA\u{2212}TI-"), "パーティー");
}

#[test]
fn test_phonetic_only_changes_di_du_family() {
    let literal = to_romaji("ちぢむ つづく ぢゃ ヂュ", false);
    let phonetic = to_romaji("ちぢむ つづく ぢゃ ヂュ", true);
    assert_eq!(literal, "chidimu tsuduku dya dyu");
    assert_eq!(phonetic, "chijimu tsuzuku ja ju");
    assert_eq!(to_romaji_cased("ヂョ", true), "JO");

    let ordinary = "しんぶん を よみます";
    assert_eq!(to_romaji(ordinary, true), to_romaji(ordinary, false));
}

#[test]
fn test_register_specific_spellings() {
    assert_eq!(to_hiragana("wi"), "ゐ");
    assert_eq!(to_katakana("wi"), "ウィ");
    assert_eq!(to_hiragana("tyu"), "ちゅ");
    assert_eq!(to_katakana("tyu"), "テュ");
    assert_eq!(to_katakana("fye"), "フィェ");
    assert_eq!(to_katakana("vye"), "ヴィェ");
}

#[test]
fn test_unmapped_text_passes_through() {
    let text = "漢字、「東京」。123";
    assert_eq!(to_romaji(text, false), text);
    assert_eq!(to_romaji_cased(text, true), text);
    assert_eq!(to_hiragana(text), text);
    assert_eq!(to_katakana(text), text);
    assert_eq!(to_kana(text), text);
}

#[test]
fn test_kanji_is_kept_among_kana() {
    assert_eq!(to_romaji("食べる", false), "食beru");
    assert_eq!(to_hiragana("食beru"), "食べる");
}

#[test]
fn test_empty_input() {
    assert_eq!(to_romaji("", false), "");
    assert_eq!(to_hiragana(""), "");
    assert_eq!(to_katakana(""), "");
    assert_eq!(to_kana(""), "");
}

#[test]
fn test_concurrent_conversions() {
    let cases = [
        ("kakka", "かっか", "カッカ"),
        ("zen'in", "ぜんいん", "ゼンイン"),
        ("matcha", "まっちゃ", "マッチャ"),
        ("pa-ti-", "ぱーてぃー", "パーティー"),
        ("shinbun", "しんぶん", "シンブン"),
    ];
    std::thread::scope(|scope| {
        for worker in 0..8 {
            scope.spawn(move || {
                for round in 0..200 {
                    let (romaji, hiragana, katakana) = cases[(worker + round) % cases.len()];
                    assert_eq!(to_hiragana(romaji), hiragana);
                    assert_eq!(to_katakana(romaji), katakana);
                    assert_eq!(to_romaji(hiragana, false), romaji);
                    assert_eq!(to_romaji_cased(katakana, false), romaji.to_uppercase());
                }
            });
        }
    });
}

#[test]
fn test_custom_rule_set() {
    let toml = r#"
[romaji]
ka = "か"
a = "あ"
n = "ん"
x = "っ"

[kana]
"か" = "ca"
"あ" = "a"
"ん" = "n"
"#;
    let rules = RuleSet::from_toml(toml).unwrap();
    assert_eq!(rules.to_romaji("かあ", false), "caa");
    assert_eq!(rules.to_hiragana("kakka"), "かっか");
    assert_eq!(rules.to_katakana("kan"), "カン");
    assert_eq!(rules.to_kana("kaKA"), "かカ");
    // the global set is unaffected
    assert_eq!(to_romaji("かあ", false), "kaa");
}
