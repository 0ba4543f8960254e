//! Case transforms for clipboard text
//!
//! Before splitting, apostrophes are dropped and Latin-1 and Latin Extended-A
//! accents are folded. Words then break on non-alphanumeric characters
//! (including the Latin-1 symbols U+007B..U+00BF), lower-to-upper
//! transitions, the end of an acronym (`XMLHttp` -> `XML`, `Http`) and
//! letter/digit boundaries.
//! English ordinals such as `1st` or `42nd` stay a single word.

/// One rendering offered in the paste menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Original,
    Camel,
    Pascal,
    Snake,
    UpperSnake,
    Kebab,
    UpperKebab,
}

impl CaseStyle {
    /// Menu order of the variants
    pub const ALL: [CaseStyle; 7] = [
        CaseStyle::Original,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::UpperSnake,
        CaseStyle::Kebab,
        CaseStyle::UpperKebab,
    ];

    pub fn apply(self, text: &str) -> String {
        self.render(text, &words(text))
    }

    fn render(self, text: &str, words: &[String]) -> String {
        match self {
            CaseStyle::Original => text.to_string(),
            CaseStyle::Camel => join_camel(words),
            CaseStyle::Pascal => upper_first(&join_camel(words)),
            CaseStyle::Snake => join_lower(words, "_"),
            CaseStyle::UpperSnake => join_lower(words, "_").to_uppercase(),
            CaseStyle::Kebab => join_lower(words, "-"),
            CaseStyle::UpperKebab => join_lower(words, "-").to_uppercase(),
        }
    }
}

/// All distinct, non-empty renderings of `text` in `CaseStyle::ALL` order
pub fn case_variants(text: &str) -> Vec<String> {
    let words = words(text);
    let mut variants: Vec<String> = Vec::with_capacity(CaseStyle::ALL.len());

    for style in CaseStyle::ALL {
        let variant = style.render(text, &words);
        if !variant.is_empty() && !variants.contains(&variant) {
            variants.push(variant);
        }
    }

    variants
}

/// Upper-case the first character, leaving the rest untouched
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    upper_first(&word.to_lowercase())
}

fn join_camel(words: &[String]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { word.to_lowercase() } else { capitalize(word) })
        .collect()
}

fn join_lower(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Upper,
    Lower,
    Digit,
    /// Letters without case, e.g. CJK
    Caseless,
}

fn char_kind(c: char) -> Option<CharKind> {
    if c.is_ascii_digit() {
        Some(CharKind::Digit)
    } else if matches!(c, '\u{7b}'..='\u{bf}' | '×' | '÷') {
        // Latin-1 symbols always break words
        None
    } else if c.is_uppercase() {
        Some(CharKind::Upper)
    } else if c.is_lowercase() {
        Some(CharKind::Lower)
    } else if c.is_alphanumeric() {
        Some(CharKind::Caseless)
    } else {
        None
    }
}

/// Split `text` into words
pub fn words(text: &str) -> Vec<String> {
    let folded = deburr(text);
    let mut words = Vec::new();
    let mut run: Vec<(char, CharKind)> = Vec::new();

    for c in folded.chars() {
        match char_kind(c) {
            Some(kind) => run.push((c, kind)),
            None => {
                split_run(&run, &mut words);
                run.clear();
            }
        }
    }
    split_run(&run, &mut words);

    words
}

// Splits one run of alphanumeric characters
fn split_run(run: &[(char, CharKind)], words: &mut Vec<String>) {
    let mut i = 0;
    while i < run.len() {
        if run[i].1 == CharKind::Digit {
            let start = i;
            while i < run.len() && run[i].1 == CharKind::Digit {
                i += 1;
            }
            i += ordinal_suffix_len(&run[start..i], &run[i..]);
            words.push(run[start..i].iter().map(|(c, _)| c).collect());
        } else {
            let start = i;
            while i < run.len() && run[i].1 != CharKind::Digit {
                i += 1;
            }
            split_letters(&run[start..i], words);
        }
    }
}

fn split_letters(letters: &[(char, CharKind)], words: &mut Vec<String>) {
    let mut word = String::new();

    for (k, &(c, kind)) in letters.iter().enumerate() {
        if k > 0 && kind == CharKind::Upper {
            let prev = letters[k - 1].1;
            let next = letters.get(k + 1).map(|&(_, kind)| kind);
            let ends_acronym = matches!(prev, CharKind::Upper | CharKind::Caseless)
                && next == Some(CharKind::Lower);
            if prev == CharKind::Lower || ends_acronym {
                words.push(std::mem::take(&mut word));
            }
        }
        word.push(c);
    }

    if !word.is_empty() {
        words.push(word);
    }
}

/// Length of an ordinal suffix ("st", "ND", ...) directly after `digits`, or 0
fn ordinal_suffix_len(digits: &[(char, CharKind)], rest: &[(char, CharKind)]) -> usize {
    let expected = match digits.last() {
        Some(('1', _)) => "st",
        Some(('2', _)) => "nd",
        Some(('3', _)) => "rd",
        Some((d, _)) if d.is_ascii_digit() => "th",
        _ => return 0,
    };

    let suffix: String = rest.iter().take(2).map(|(c, _)| c).collect();
    let case = if suffix == expected {
        CharKind::Lower
    } else if suffix == expected.to_uppercase() {
        CharKind::Upper
    } else {
        return 0;
    };

    // The suffix must end the word: end of run, or a case change into the next word
    match rest.get(2) {
        None => 2,
        Some((_, CharKind::Upper)) if case == CharKind::Lower => 2,
        Some((_, CharKind::Lower)) if case == CharKind::Upper => 2,
        _ => 0,
    }
}

/// Drop apostrophes, fold accented Latin letters and strip combining marks
fn deburr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' | '\u{2019}' => {}
            '\u{0300}'..='\u{036f}' | '\u{fe20}'..='\u{fe2f}' | '\u{20d0}'..='\u{20ff}' => {}
            _ => match fold_latin1(c).or_else(|| fold_latin_extended_a(c)) {
                Some(folded) => out.push_str(folded),
                None => out.push(c),
            },
        }
    }
    out
}

fn fold_latin1(c: char) -> Option<&'static str> {
    let folded = match c {
        'À'..='Å' => "A",
        'à'..='å' => "a",
        'Ç' => "C",
        'ç' => "c",
        'Ð' => "D",
        'ð' => "d",
        'È'..='Ë' => "E",
        'è'..='ë' => "e",
        'Ì'..='Ï' => "I",
        'ì'..='ï' => "i",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò'..='Ö' | 'Ø' => "O",
        'ò'..='ö' | 'ø' => "o",
        'Ù'..='Ü' => "U",
        'ù'..='ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'Æ' => "Ae",
        'æ' => "ae",
        'Þ' => "Th",
        'þ' => "th",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

fn fold_latin_extended_a(c: char) -> Option<&'static str> {
    let folded = match c {
        '\u{100}' | '\u{102}' | '\u{104}' => "A",
        '\u{101}' | '\u{103}' | '\u{105}' => "a",
        '\u{106}' | '\u{108}' | '\u{10a}' | '\u{10c}' => "C",
        '\u{107}' | '\u{109}' | '\u{10b}' | '\u{10d}' => "c",
        '\u{10e}' | '\u{110}' => "D",
        '\u{10f}' | '\u{111}' => "d",
        '\u{112}' | '\u{114}' | '\u{116}' | '\u{118}' | '\u{11a}' => "E",
        '\u{113}' | '\u{115}' | '\u{117}' | '\u{119}' | '\u{11b}' => "e",
        '\u{11c}' | '\u{11e}' | '\u{120}' | '\u{122}' => "G",
        '\u{11d}' | '\u{11f}' | '\u{121}' | '\u{123}' => "g",
        '\u{124}' | '\u{126}' => "H",
        '\u{125}' | '\u{127}' => "h",
        '\u{128}' | '\u{12a}' | '\u{12c}' | '\u{12e}' | '\u{130}' => "I",
        '\u{129}' | '\u{12b}' | '\u{12d}' | '\u{12f}' | '\u{131}' => "i",
        '\u{132}' => "IJ",
        '\u{133}' => "ij",
        '\u{134}' => "J",
        '\u{135}' => "j",
        '\u{136}' => "K",
        '\u{137}' | '\u{138}' => "k",
        '\u{139}' | '\u{13b}' | '\u{13d}' | '\u{13f}' | '\u{141}' => "L",
        '\u{13a}' | '\u{13c}' | '\u{13e}' | '\u{140}' | '\u{142}' => "l",
        '\u{143}' | '\u{145}' | '\u{147}' | '\u{14a}' => "N",
        '\u{144}' | '\u{146}' | '\u{148}' | '\u{14b}' => "n",
        // ŉ folds to 'n and the apostrophe is dropped with the rest
        '\u{149}' => "n",
        '\u{14c}' | '\u{14e}' | '\u{150}' => "O",
        '\u{14d}' | '\u{14f}' | '\u{151}' => "o",
        '\u{152}' => "Oe",
        '\u{153}' => "oe",
        '\u{154}' | '\u{156}' | '\u{158}' => "R",
        '\u{155}' | '\u{157}' | '\u{159}' => "r",
        '\u{15a}' | '\u{15c}' | '\u{15e}' | '\u{160}' => "S",
        '\u{15b}' | '\u{15d}' | '\u{15f}' | '\u{161}' | '\u{17f}' => "s",
        '\u{162}' | '\u{164}' | '\u{166}' => "T",
        '\u{163}' | '\u{165}' | '\u{167}' => "t",
        '\u{168}' | '\u{16a}' | '\u{16c}' | '\u{16e}' | '\u{170}' | '\u{172}' => "U",
        '\u{169}' | '\u{16b}' | '\u{16d}' | '\u{16f}' | '\u{171}' | '\u{173}' => "u",
        '\u{174}' => "W",
        '\u{175}' => "w",
        '\u{176}' | '\u{178}' => "Y",
        '\u{177}' => "y",
        '\u{179}' | '\u{17b}' | '\u{17d}' => "Z",
        '\u{17a}' | '\u{17c}' | '\u{17e}' => "z",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camel_case(text: &str) -> String {
        CaseStyle::Camel.apply(text)
    }

    fn pascal_case(text: &str) -> String {
        CaseStyle::Pascal.apply(text)
    }

    fn snake_case(text: &str) -> String {
        CaseStyle::Snake.apply(text)
    }

    fn kebab_case(text: &str) -> String {
        CaseStyle::Kebab.apply(text)
    }

    #[test]
    fn test_hello_world() {
        let text = "hello world";
        assert_eq!(camel_case(text), "helloWorld");
        assert_eq!(pascal_case(text), "HelloWorld");
        assert_eq!(snake_case(text), "hello_world");
        assert_eq!(CaseStyle::UpperSnake.apply(text), "HELLO_WORLD");
        assert_eq!(kebab_case(text), "hello-world");
        assert_eq!(CaseStyle::UpperKebab.apply(text), "HELLO-WORLD");
    }

    #[test]
    fn test_empty_input() {
        for style in CaseStyle::ALL {
            assert_eq!(style.apply(""), "");
        }
        assert!(case_variants("").is_empty());
    }

    #[test]
    fn test_case_transitions() {
        assert_eq!(words("fooBar"), vec!["foo", "Bar"]);
        assert_eq!(words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(words("ABCd"), vec!["AB", "Cd"]);
        assert_eq!(words("fooBAR"), vec!["foo", "BAR"]);
        assert_eq!(snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(camel_case("XMLHttpRequest"), "xmlHttpRequest");
    }

    #[test]
    fn test_separators() {
        assert_eq!(camel_case("__FOO_BAR__"), "fooBar");
        assert_eq!(kebab_case("Foo Bar.baz/qux"), "foo-bar-baz-qux");
        assert_eq!(snake_case("some-kebab-text"), "some_kebab_text");
        assert_eq!(pascal_case("  leading and trailing  "), "LeadingAndTrailing");
    }

    #[test]
    fn test_digits_split_from_letters() {
        assert_eq!(words("abc123def"), vec!["abc", "123", "def"]);
        assert_eq!(camel_case("abc123def"), "abc123Def");
        assert_eq!(snake_case("version2"), "version_2");
    }

    #[test]
    fn test_ordinals_stay_whole() {
        assert_eq!(snake_case("1st place"), "1st_place");
        assert_eq!(camel_case("the 42nd street"), "the42ndStreet");
        assert_eq!(words("4thFloor"), vec!["4th", "Floor"]);
        assert_eq!(words("21STcentury"), vec!["21ST", "century"]);
        assert_eq!(words("1stplace"), vec!["1", "stplace"]);
        assert_eq!(words("3th"), vec!["3", "th"]);
    }

    #[test]
    fn test_apostrophes_and_accents() {
        assert_eq!(camel_case("don't stop"), "dontStop");
        assert_eq!(snake_case("it’s fine"), "its_fine");
        assert_eq!(camel_case("Crème Brûlée"), "cremeBrulee");
        assert_eq!(snake_case("Straße"), "strasse");
        assert_eq!(snake_case("cafe\u{0301} au lait"), "cafe_au_lait");
    }

    #[test]
    fn test_caseless_letters() {
        assert_eq!(words("日本語"), vec!["日本語"]);
        assert_eq!(words("日本Tokyo"), vec!["日本", "Tokyo"]);
        assert_eq!(words("日本TOKYO"), vec!["日本TOKYO"]);
        assert_eq!(case_variants("日本語"), vec!["日本語"]);
    }

    #[test]
    fn test_variants_deduplicated_in_order() {
        assert_eq!(case_variants("hello"), vec!["hello", "Hello", "HELLO"]);
        assert_eq!(
            case_variants("Hello World!"),
            vec![
                "Hello World!",
                "helloWorld",
                "HelloWorld",
                "hello_world",
                "HELLO_WORLD",
                "hello-world",
                "HELLO-WORLD",
            ]
        );
    }

    #[test]
    fn test_variants_without_words_keep_original_only() {
        assert_eq!(case_variants("!!! ???"), vec!["!!! ???"]);
    }

    #[test]
    fn test_variants_never_duplicate_or_empty() {
        let inputs = [
            "hello world",
            "HELLO_WORLD",
            "helloWorld",
            "a",
            "A",
            "1",
            "snake_case_text",
            "MiXeD cAsE 99 items",
            "--",
            "ß",
        ];
        for input in inputs {
            let variants = case_variants(input);
            assert!(variants.iter().all(|v| !v.is_empty()), "{input}");
            for (i, v) in variants.iter().enumerate() {
                assert!(!variants[i + 1..].contains(v), "{input}: duplicate {v}");
            }
        }
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first(""), "");
        assert_eq!(upper_first("abc"), "Abc");
        assert_eq!(upper_first("ßa"), "SSa");
    }

    #[test]
    fn test_latin_extended_a_accents() {
        assert_eq!(camel_case("Łódź"), "lodz");
        assert_eq!(snake_case("Dvořák"), "dvorak");
        assert_eq!(kebab_case("Győr Škoda"), "gyor-skoda");
        assert_eq!(pascal_case("œuvre"), "Oeuvre");
    }

    #[test]
    fn test_latin1_symbols_break_words() {
        assert_eq!(snake_case("x²"), "x");
        assert_eq!(snake_case("aµb"), "a_b");
        assert_eq!(snake_case("3×4"), "3_4");
        assert_eq!(camel_case("10º grado"), "10Grado");
        assert_eq!(words("«quoted»"), vec!["quoted"]);
    }

    #[test]
    fn test_non_ascii_digits_are_letters() {
        assert_eq!(words("a٣b"), vec!["a٣b"]);
    }
}
