//! Unicode handling: case operations work on whole characters, never bytes

use recase_core::{convert, to_camel, to_kebab, to_pascal, to_snake, FormatId};

fn assert_table(input: &str, expected: [&str; 14]) {
    for (id, output) in FormatId::ALL.into_iter().zip(expected) {
        assert_eq!(
            convert(input, id).unwrap(),
            output,
            "{id} conversion failed for {input:?}"
        );
    }
}

#[test]
fn test_greek() {
    assert_table(
        "πολύ-Καλό",
        [
            "πολύΚαλό", "ΠολύΚαλό", "πολύ_καλό", "πολύ-καλό", "ΠΟΛΎ_ΚΑΛΌ", "Πολύ-Καλό",
            "πολύ.καλό", "πολύ καλό", "ΠΟΛΎ ΚΑΛΌ", "Πολύ Καλό", "πολύ/καλό", "Πολύ_Καλό",
            "ΠΟΛΎ-ΚΑΛΌ", "Πολύ καλό",
        ],
    );
}

#[test]
fn test_cyrillic_caps_are_not_acronyms() {
    assert_table(
        "ОЧЕНЬ_ПРИЯТНО",
        [
            "оченьПриятно", "ОченьПриятно", "очень_приятно", "очень-приятно", "ОЧЕНЬ_ПРИЯТНО",
            "Очень-Приятно", "очень.приятно", "очень приятно", "ОЧЕНЬ ПРИЯТНО", "Очень Приятно",
            "очень/приятно", "Очень_Приятно", "ОЧЕНЬ-ПРИЯТНО", "Очень приятно",
        ],
    );
}

#[test]
fn test_arabic_has_no_case() {
    assert_table(
        "مرحبا-بالعالم",
        [
            "مرحبابالعالم", "مرحبابالعالم", "مرحبا_بالعالم", "مرحبا-بالعالم", "مرحبا_بالعالم",
            "مرحبا-بالعالم", "مرحبا.بالعالم", "مرحبا بالعالم", "مرحبا بالعالم", "مرحبا بالعالم",
            "مرحبا/بالعالم", "مرحبا_بالعالم", "مرحبا-بالعالم", "مرحبا بالعالم",
        ],
    );
}

#[test]
fn test_chinese_has_no_case() {
    assert_table(
        "你好-世界",
        [
            "你好世界", "你好世界", "你好_世界", "你好-世界", "你好_世界", "你好-世界",
            "你好.世界", "你好 世界", "你好 世界", "你好 世界", "你好/世界", "你好_世界",
            "你好-世界", "你好 世界",
        ],
    );
}

#[test]
fn test_japanese_has_no_case() {
    assert_table(
        "こんにちは-世界",
        [
            "こんにちは世界", "こんにちは世界", "こんにちは_世界", "こんにちは-世界",
            "こんにちは_世界", "こんにちは-世界", "こんにちは.世界", "こんにちは 世界",
            "こんにちは 世界", "こんにちは 世界", "こんにちは/世界", "こんにちは_世界",
            "こんにちは-世界", "こんにちは 世界",
        ],
    );
}

#[test]
fn test_mixed_scripts() {
    assert_table(
        "user-имя",
        [
            "userИмя", "UserИмя", "user_имя", "user-имя", "USER_ИМЯ", "User-Имя", "user.имя",
            "user имя", "USER ИМЯ", "User Имя", "user/имя", "User_Имя", "USER-ИМЯ", "User имя",
        ],
    );
}

#[test]
fn test_acronyms_next_to_unicode_words() {
    assert_eq!(to_snake("XMLParserРусский"), "xml_parser_русский");
    assert_eq!(to_camel("xml_parser_русский"), "xmlParserРусский");
    assert_eq!(to_pascal("xml_parser_русский"), "XmlParserРусский");
}

#[test]
fn test_pascal_cyrillic() {
    assert_eq!(to_pascal("мой-дом"), "МойДом");
}

#[test]
fn test_emoji_and_multibyte_survive() {
    // A symbol is not lowercase, so it never opens a capital boundary
    assert_eq!(to_snake("rocket🚀Launch"), "rocket🚀launch");
    assert_eq!(to_snake("rocket🚀_Launch"), "rocket🚀_launch");
    assert_eq!(to_kebab("café_Crème"), "café-crème");
}
