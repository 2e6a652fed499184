use super::to_hiragana;

#[test]
fn katakana_rows() {
    assert_eq!(to_hiragana("アイウエオ"), "あいうえお");
    assert_eq!(to_hiragana("カキクケコ"), "かきくけこ");
    assert_eq!(to_hiragana("サシスセソ"), "さしすせそ");
    assert_eq!(to_hiragana("タチツテト"), "たちつてと");
    assert_eq!(to_hiragana("ナニヌネノ"), "なにぬねの");
    assert_eq!(to_hiragana("ハヒフヘホ"), "はひふへほ");
    assert_eq!(to_hiragana("マミムメモ"), "まみむめも");
    assert_eq!(to_hiragana("ヤユヨ"), "やゆよ");
    assert_eq!(to_hiragana("ラリルレロ"), "らりるれろ");
    assert_eq!(to_hiragana("ワヲン"), "わをん");
}

#[test]
fn voiced_and_small() {
    assert_eq!(to_hiragana("ガギグゲゴ"), "がぎぐげご");
    assert_eq!(to_hiragana("ダヂヅデド"), "だぢづでど");
    assert_eq!(to_hiragana("パピプペポ"), "ぱぴぷぺぽ");
    assert_eq!(to_hiragana("ァィゥェォ"), "ぁぃぅぇぉ");
    assert_eq!(to_hiragana("ッャュョ"), "っゃゅょ");
    assert_eq!(to_hiragana("ヴ"), "ゔ");
}

#[test]
fn iteration_marks() {
    assert_eq!(to_hiragana("ヽヾ"), "ゝゞ");
}

#[test]
fn prolonged_sound_mark_is_kept() {
    assert_eq!(to_hiragana("ラーメン"), "らーめん");
}

#[test]
fn idempotent() {
    assert_eq!(to_hiragana("test"), "test");
    assert_eq!(to_hiragana("てすと"), "てすと");

    let once = to_hiragana("テスト");
    assert_eq!(once, "てすと");
    assert_eq!(to_hiragana(&once), once);
}

#[test]
fn mixed_scripts() {
    assert_eq!(to_hiragana("食べル"), "食べる");
    assert_eq!(to_hiragana("オ茶 (おちゃ)"), "お茶 (おちゃ)");
}
