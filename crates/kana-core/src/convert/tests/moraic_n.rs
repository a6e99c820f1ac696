use super::*;

#[test]
fn test_to_hiragana_moraic_n() {
    let cases = [
        ("n'a", "んあ"),
        ("n'i", "んい"),
        ("n'u", "んう"),
        ("n'e", "んえ"),
        ("n'o", "んお"),
        ("zen'in", "ぜんいん"),
        ("zennin", "ぜんにん"),
        ("nanna", "なんな"),
        ("shin'you", "しんよう"),
        ("kan'i", "かんい"),
        ("annai", "あんない"),
    ];
    for (romaji, kana) in cases {
        assert_eq!(to_hiragana(romaji), kana, "{romaji}");
    }
}

#[test]
fn test_to_katakana_moraic_n() {
    let cases = [
        ("n'a", "ンア"),
        ("n'i", "ンイ"),
        ("n'u", "ンウ"),
        ("n'e", "ンエ"),
        ("n'o", "ンオ"),
        ("zen'in", "ゼンイン"),
        ("zennin", "ゼンニン"),
        ("nanna", "ナンナ"),
        ("shin'you", "シンヨウ"),
        ("kan'i", "カンイ"),
        ("annai", "アンナイ"),
    ];
    for (romaji, kana) in cases {
        assert_eq!(to_katakana(romaji), kana, "{romaji}");
    }
}

#[test]
fn test_to_romaji_moraic_n() {
    let cases = [
        ("んあ", "n'a"),
        ("んい", "n'i"),
        ("んう", "n'u"),
        ("んえ", "n'e"),
        ("んお", "n'o"),
        ("んや", "n'ya"),
        ("んよ", "n'yo"),
        ("んゆ", "n'yu"),
        ("ンア", "n'a"),
        ("ンイ", "n'i"),
        ("ンウ", "n'u"),
        ("ンエ", "n'e"),
        ("ンオ", "n'o"),
        ("ンヤ", "n'ya"),
        ("ンヨ", "n'yo"),
        ("ンユ", "n'yu"),
        ("ゼンイン", "zen'in"),
        ("ゼンニン", "zennin"),
        ("ナンナ", "nanna"),
        ("シンヨウ", "shin'you"),
        ("カンイ", "kan'i"),
        ("アンナイ", "annai"),
        ("きんにく", "kinniku"),
    ];
    for (kana, romaji) in cases {
        assert_eq!(to_romaji(kana, false), romaji, "{kana}");
    }
}

#[test]
fn test_to_romaji_cased_moraic_n() {
    assert_eq!(to_romaji_cased("ゼンイン", false), "ZEN'IN");
    assert_eq!(to_romaji_cased("ぜんいん", false), "zen'in");
}

#[test]
fn test_moraic_n_before_consonant_and_at_end() {
    assert_eq!(to_hiragana("shinbun"), "しんぶん");
    assert_eq!(to_hiragana("kin"), "きん");
    assert_eq!(to_katakana("pan"), "パン");
    assert_eq!(to_hiragana("konnichiha"), "こんにちは");
    assert_eq!(to_hiragana("kon'nichiha"), "こんにちは");
}

#[test]
fn test_to_kana_moraic_n() {
    assert_eq!(to_kana("zen'in"), "ぜんいん");
    assert_eq!(to_kana("ZEN'IN"), "ゼンイン");
    assert_eq!(to_kana("PAN to gohan"), "パン と ごはん");
}
