//! Dictionary shipped with the application.
//!
//! English carries the full base phrases. Every other language is present
//! with its metadata only, so it can be listed and credited before its
//! language pack has been merged in.

use crate::dictionary::{
    BASE_LANGUAGE,
    Dictionary,
    LanguageEntry,
    LanguageMeta,
};

/// Date stamp of the built-in table.
pub const MODULE_VERSION: &str = "2025-May-05";

/// Metadata record of a shipped language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub translator: &'static str,
    pub email: &'static str,
    pub last_changed: &'static str,
}

impl BuiltinLanguage {
    fn entry(&self) -> LanguageEntry {
        LanguageEntry::with_meta(LanguageMeta {
            language_name: Some(self.name.to_string()),
            language_translator: Some(self.translator.to_string()),
            translator_email: Some(self.email.to_string()),
            last_changed: Some(self.last_changed.to_string()),
        })
    }
}

/// English metadata.
const ENGLISH: BuiltinLanguage = BuiltinLanguage {
    code: BASE_LANGUAGE,
    name: "English",
    translator: "Jens M\u{f6}nig",
    email: "jens@moenig.org",
    last_changed: "2023-02-15",
};

/// English phrases that differ from their key.
///
/// Dropdown symbols and long texts are looked up by a short key.
const ENGLISH_PHRASES: &[(&str, &str)] = &[
    ("__shout__go__", "green flag clicked"),
    (
        "file menu import hint",
        "load an exported project file\nor block library, a costume\nor a sound",
    ),
    (
        "settings menu prefer empty slots hint",
        "check to focus on empty slots\nwhen dragging & dropping reporters",
    ),
    (
        "costumes tab help",
        "import a picture from another web page or from\n\
         a file on your computer by dropping it here\n",
    ),
    (
        "block deletion dialog text",
        "Are you sure you want to delete this\ncustom block and all its instances?",
    ),
    (
        "download to disk text",
        "This item could not be opened in a new tab.\n\
         It has been saved to your browser's downloads folder.",
    ),
    (
        "unable to export text",
        "This item could not be exported from Snap!.\n\
         It's likely that your project may contain a lot of media \
         (sounds and images) or that you are using an older browser.\
         Please try using a recent version of Chrome, Firefox, or Safari.",
    ),
];

/// Shipped languages other than English.
pub const BUILTIN_LANGUAGES: &[BuiltinLanguage] = &[
    BuiltinLanguage {
        code: "de",
        name: "Deutsch",
        translator: "Jens Mönig, Jadga Hügle",
        email: "jens@moenig.org, jadga.huegle@sap.com",
        last_changed: "2025-03-24",
    },
    BuiltinLanguage {
        code: "it",
        name: "Italiano",
        translator: "Stefano Federici, Alberto Firpo, Massimo Ghisalberti",
        email: "s_federici@yahoo.com, albertofirpo12@gmail.com, zairik@gmail.com",
        last_changed: "2023-11-04",
    },
    BuiltinLanguage {
        code: "ja",
        name: "日本語",
        translator: "Kazuhiro Abe",
        email: "abee@squeakland.jp",
        last_changed: "2024-12-12",
    },
    BuiltinLanguage {
        code: "ja_HIRA",
        name: "にほんご",
        translator: "Kazuhiro Abe",
        email: "abee@squeakland.jp",
        last_changed: "2024-12-09",
    },
    BuiltinLanguage {
        code: "ko",
        name: "한국어",
        translator: "Yunjae Jang",
        email: "janggoons@gmail.com",
        last_changed: "2015-01-21",
    },
    BuiltinLanguage {
        code: "pt",
        name: "Português",
        translator: "Manuel Menezes de Sequeira",
        email: "mmsequeira@gmail.com",
        last_changed: "2020-08-03",
    },
    BuiltinLanguage {
        code: "cs",
        name: "Česky",
        translator: "Michal Moc, Jan Tomsa",
        email: "info@iguru.eu, jan.tomsa.1976@gmail.com",
        last_changed: "2015-11-16",
    },
    BuiltinLanguage {
        code: "zh_CN",
        name: "简体中文",
        translator: "五百刀/邓江华/孟锡峰/曹儒林/moodykeke",
        email: "ubertao@qq.com/djh@rhjxx.cn/simon@snapontop.org",
        last_changed: "2024-12-09",
    },
    BuiltinLanguage {
        code: "eo",
        name: "Esperanto",
        translator: "Sebastian Cyprych",
        email: "sebacyp(heliko)gmail(punkto)com",
        last_changed: "2017-10-01",
    },
    BuiltinLanguage {
        code: "fr",
        name: "Français",
        translator: "Jean-Jacques Valliet, Mark Rafter, Martin Quinson, Damien Caselli",
        email: "i.scool@mac.com",
        last_changed: "2020-10-28",
    },
    BuiltinLanguage {
        code: "si",
        name: "Slovenščina",
        translator: "Sasa Divjak, Gorazd Breskvar",
        email: "sasa.divjak@fri.uni-lj.si",
        last_changed: "2016-04-22",
    },
    BuiltinLanguage {
        code: "ru",
        name: "Русский",
        translator: "Svetlana Ptashnaya, Проскурнёв Артём, Pavel Belousov",
        email: "svetlanap@berkeley.edu, tema@school830.ru, pbsite@mail.ru",
        last_changed: "2020-12-22",
    },
    BuiltinLanguage {
        code: "es",
        name: "Español",
        translator: "Víctor Manuel Muratalla Morales / Cristián Rizzi Iribarren / Alfonso Ruzafa / David Martín",
        email: "victor.muratalla@yahoo.com / rizzi.cristian@gmail.com",
        last_changed: "2025-05-05",
    },
    BuiltinLanguage {
        code: "nl",
        name: "Nederlands",
        translator: "Joek van Montfort, Sjoerd Dirk Meijer, Frank Sierens, Jan-Gerard van der Toorn, Jule Rapp, Nykki Rusticus",
        email: "joek@xota.nl, sjoerddirk@fromScratchEd.nl, frank.sierens@telenet.be, jg.2019@xs4all.nl, zonykki@gmail.com",
        last_changed: "2024-04-15",
    },
    BuiltinLanguage {
        code: "pl",
        name: "Polski",
        translator: "Witek Kranas & deKrain & Andrzej Batorski & P1neF0rest935",
        email: "witek@oeiizk.waw.pl",
        last_changed: "2024-08-23",
    },
    BuiltinLanguage {
        code: "zh_TW",
        name: "繁體中文",
        translator: "cch",
        email: "cchuang2009@gmail.com",
        last_changed: "2013-8-14",
    },
    BuiltinLanguage {
        code: "no",
        name: "Norsk",
        translator: "Olav A Marschall",
        email: "olavmarschall@gmail.com",
        last_changed: "2020-08-19",
    },
    BuiltinLanguage {
        code: "dk",
        name: "Dansk",
        translator: "FAB, Pelle Hjek",
        email: "fab@nielsen.mail.dk, hjek@mail.com",
        last_changed: "2016-11-16",
    },
    BuiltinLanguage {
        code: "el",
        name: "Ελληνικά",
        translator: "Ino Samaras, Alexandros Prekates, HM100",
        email: "ino.samaras@berkeley.edu, aprekates@sch.gr",
        last_changed: "2025-01-23",
    },
    BuiltinLanguage {
        code: "ca",
        name: "Català",
        translator: "Joan Guillén i Pelegay, Bernat Romagosa Carrasquer",
        email: "jguille2@xtec.cat, bernat@snap4arduino.rocks",
        last_changed: "2024-12-28",
    },
    BuiltinLanguage {
        code: "ca_VA",
        name: "Català - Valencià",
        translator: "Bernat Romagosa Carrasquer, Joan Guillén i Pelegay, Pilar Embid",
        email: "bernat@snap4arduino.rocks, jguille2@xtec.cat, embid_mar@gva.es",
        last_changed: "2018-02-08",
    },
    BuiltinLanguage {
        code: "fi",
        name: "suomi",
        translator: "Jouni K. Seppänen",
        email: "jks@iki.fi",
        last_changed: "2014-04-18",
    },
    BuiltinLanguage {
        code: "sv",
        name: "svenska",
        translator: "Erik A. Olsson",
        email: "eolsson@gmail.com",
        last_changed: "2016-06-09",
    },
    BuiltinLanguage {
        code: "pt_BR",
        name: "Português do Brasil",
        translator: "Aldo von Wangenheim, Cassiano D'Andrea, Artur Arnhold-Müller",
        email: "awangenh@inf.ufsc.br, cassiano.dandrea@tagview.com.br",
        last_changed: "2023-01-25",
    },
    BuiltinLanguage {
        code: "bn",
        name: "বাংলা",
        translator: "Dr. Mokter Hossain, Radman Siddiki",
        email: "mokter@gmail.com, radman.siddiki@outlook.com",
        last_changed: "2020-07-04",
    },
    BuiltinLanguage {
        code: "kn",
        name: "ಕನ್ನಡ",
        translator: "Vinayakumar R",
        email: "vnkmr7620@gmail.com",
        last_changed: "2014-12-02",
    },
    BuiltinLanguage {
        code: "ml",
        name: "Malayalam",
        translator: "vinayakumar R",
        email: "vnkmr7620@gmail.com",
        last_changed: "2015-02-20",
    },
    BuiltinLanguage {
        code: "ta",
        name: "Tamil",
        translator: "vinayakumar R, Barthdry",
        email: "vnkmr7620@gmail.com",
        last_changed: "2021-01-25",
    },
    BuiltinLanguage {
        code: "te",
        name: "Telagu",
        translator: "vinayakumar R",
        email: "vnkmr7620@gmail.com",
        last_changed: "2015-02-20",
    },
    BuiltinLanguage {
        code: "tr",
        name: "Türkçe",
        translator: "Turgut Güneysu, Hakan Atas",
        email: "tguneysu@msn.com",
        last_changed: "2021-01-26",
    },
    BuiltinLanguage {
        code: "hu",
        name: "Magyar",
        translator: "Makány György, Faragó Attila",
        email: "makany.gyorgy@gmail.com, attila.farago@sap.com",
        last_changed: "2022-01-25",
    },
    BuiltinLanguage {
        code: "ia",
        name: "Interlingua",
        translator: "Ken Dickey",
        email: "Ken.Dickey@whidbey.com",
        last_changed: "2015-08-09",
    },
    BuiltinLanguage {
        code: "hr",
        name: "Hrvatski",
        translator: "Željko Hrvoj",
        email: "zeljko.hrvoj@zg.t-com.hr",
        last_changed: "2017-08-15",
    },
    BuiltinLanguage {
        code: "bg",
        name: "Български",
        translator: "Ivan Savov",
        email: "ivan.savov@gmail.com",
        last_changed: "2015-11-16",
    },
    BuiltinLanguage {
        code: "ro",
        name: "Român",
        translator: "Cristian Macarascu",
        email: "",
        last_changed: "2015-10-24",
    },
    BuiltinLanguage {
        code: "ar",
        name: "العربية",
        translator: "طارق جلال",
        email: "tarekgalal46@hotmail.com",
        last_changed: "2016-02-24",
    },
    BuiltinLanguage {
        code: "id",
        name: "Bahasa Indonesia",
        translator: "Alexander Raphael Liu, Emmanuella Rumanti",
        email: "raphaxander@gmail.com",
        last_changed: "2019-01-21",
    },
    BuiltinLanguage {
        code: "et",
        name: "Eesti",
        translator: "Hasso Tepper",
        email: "hasso.tepper@gmail.com",
        last_changed: "2016-05-03",
    },
    BuiltinLanguage {
        code: "gl",
        name: "Galego",
        translator: "tecnoloxia <2016>,Miguel A. Bouzada <2019>",
        email: "mbouzada@gmail.com",
        last_changed: "2019-07-29",
    },
    BuiltinLanguage {
        code: "eu",
        name: "Euskara",
        translator: "Asier Iturralde Sarasola",
        email: "aiturralde@iametza.eus",
        last_changed: "2018-06-26",
    },
    BuiltinLanguage {
        code: "ua",
        name: "Українська",
        translator: "Serhiy Kryzhanovsky",
        email: "kseryj@gmail.com",
        last_changed: "2024-06-04",
    },
    BuiltinLanguage {
        code: "sk",
        name: "Slovenčina",
        translator: "Peter Lukačovič",
        email: "peter_lukacovic@outlook.com",
        last_changed: "2019-12-10",
    },
    BuiltinLanguage {
        code: "he",
        name: "עברית",
        translator: "יוסי כהן",
        email: "cohenyossi81@gmail.com",
        last_changed: "2020-04-21",
    },
    BuiltinLanguage {
        code: "hi",
        name: "हिंदी",
        translator: "Barthdry",
        email: "barathkumarbasker2007@gmail.com",
        last_changed: "2021-05-08",
    },
    BuiltinLanguage {
        code: "ti",
        name: "ትግርኛ",
        translator: "ተስፋልደት ነጋሽ እያሱ, ሄራን ተወልደ ስዩም",
        email: "winna.programming@gmail.com",
        last_changed: "2024-03-25",
    },
    BuiltinLanguage {
        code: "hy",
        name: "Հայերեն",
        translator: "Symotec LLC, Armath team and Antrohoos Education Foundation",
        email: "info@symotec.am and info@armath.am",
        last_changed: "2025-03-13",
    },
];

/// Builds the English entry.
#[must_use]
pub fn english() -> LanguageEntry {
    let mut entry = ENGLISH.entry();
    for (key, value) in ENGLISH_PHRASES {
        entry.set(*key, *value);
    }
    entry
}

/// Builds the dictionary populated at startup.
#[must_use]
pub fn builtin_dictionary() -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert(BASE_LANGUAGE.to_string(), english());
    for language in BUILTIN_LANGUAGES {
        dict.insert(language.code.to_string(), language.entry());
    }
    dict
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn codes_are_unique_and_exclude_english() {
        let codes: HashSet<&str> = BUILTIN_LANGUAGES.iter().map(|l| l.code).collect();

        expect_that!(codes.len(), eq(BUILTIN_LANGUAGES.len()));
        expect_that!(codes.contains(BASE_LANGUAGE), eq(false));
    }

    #[googletest::test]
    fn dictionary_holds_every_language() {
        let dict = builtin_dictionary();

        expect_that!(dict.len(), eq(BUILTIN_LANGUAGES.len() + 1));
        expect_that!(dict.contains_key(BASE_LANGUAGE), eq(true));
    }

    #[googletest::test]
    fn english_carries_long_strings() {
        let entry = english();

        expect_that!(entry.meta().language_name.as_deref(), some(eq("English")));
        expect_that!(entry.lookup("__shout__go__"), some(eq("green flag clicked")));
        expect_that!(
            entry.lookup("block deletion dialog text"),
            some(eq("Are you sure you want to delete this\ncustom block and all its instances?"))
        );
        expect_that!(
            entry.lookup("costumes tab help"),
            some(ends_with("by dropping it here\n"))
        );
    }

    #[rstest]
    #[case::german("de", "Deutsch")]
    #[case::japanese("ja", "日本語")]
    #[case::hiragana("ja_HIRA", "にほんご")]
    #[case::simplified_chinese("zh_CN", "简体中文")]
    #[case::valencian("ca_VA", "Català - Valencià")]
    fn other_languages_are_metadata_only(#[case] code: &str, #[case] name: &str) {
        let dict = builtin_dictionary();
        let entry = dict.get(code).unwrap();

        assert_that!(entry.meta().language_name.as_deref(), some(eq(name)));
        assert_that!(entry.phrase_count(), eq(0));
    }
}
