use super::{both, write, CatalogParams, KanaType};
use crate::error::LexError;
use crate::format::hooks::PostProcess;
use crate::format::settings::{rules, FormatSettingsBuilder};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

/// Consonants are spelled with a `u` kana; the cleanup passes then fuse each
/// consonant with the vowel that follows it (`ぶ`+`あ` becomes `ば`, and so on).
/// Spellings are hiragana; katakana output is a post-processing step.
pub(super) fn declare(p: &Phonemes, params: &CatalogParams) -> Result<FormatDecl, LexError> {
    let mut settings = FormatSettingsBuilder::default();
    settings
        .lex_filename("words-kana-approx.txt")
        .lex_header(
            "Kana approxmations (very approximate!)\n\
             --------------------------------------\n",
        )
        .lex_entry_format("%s ~= %s\n")
        .space_separates_words_not_phonemes(true)
        .stress_comes_before_vowel(true)
        .cleanup_regexps(rules(&[
            // a stressed vowel is lengthened
            ("double-(.)", "${1}ー"),
            ("ぬ$", "んー"),
            ("ぶあ", "ば"),
            ("ぶい", "び"),
            ("ぶう", "ぶ"),
            ("ぶえ", "べ"),
            ("ぶお", "ぼ"),
            ("ちゅあ", "ちゃ"),
            ("ちゅい", "ち"),
            ("ちゅう", "ちゅ"),
            ("ちゅえ", "ちぇ"),
            ("ちゅお", "ちょ"),
            ("づあ", "だ"),
            ("づい", "ぢ"),
            ("づう", "づ"),
            ("づえ", "で"),
            ("づお", "ど"),
            ("てゅあ", "てゃ"),
            ("てゅい", "てぃ"),
            ("てぃう", "てゅ"),
            ("てゅえ", "てぇ"),
            ("てゅお", "てょ"),
            ("ふあ", "ふぁ"),
            ("ふい", "ふぃ"),
            ("ふう", "ふ"),
            ("ふえ", "ふぇ"),
            ("ふお", "ふぉ"),
            ("はあ", "は"),
            ("はい", "ひ"),
            ("はう", "ふ"),
            ("はえ", "へ"),
            ("はお", "ほ"),
            ("ぐあ", "が"),
            ("ぐい", "ぎ"),
            ("ぐう", "ぐ"),
            ("ぐえ", "げ"),
            ("ぐお", "ご"),
            ("じゅあ", "じゃ"),
            ("じゅい", "じ"),
            ("じゅう", "じゅ"),
            ("じゅえ", "じぇ"),
            ("じゅお", "じょ"),
            ("くあ", "か"),
            ("くい", "き"),
            ("くう", "く"),
            ("くえ", "け"),
            ("くお", "こ"),
            ("るあ", "ら"),
            ("るい", "り"),
            ("るう", "る"),
            ("るえ", "れ"),
            ("るお", "ろ"),
            ("むあ", "ま"),
            ("むい", "み"),
            ("むう", "む"),
            ("むえ", "め"),
            ("むお", "も"),
            ("ぬあ", "な"),
            ("ぬい", "に"),
            ("ぬう", "ぬ"),
            ("ぬえ", "ね"),
            ("ぬお", "の"),
            ("ぷあ", "ぱ"),
            ("ぷい", "ぴ"),
            ("ぷう", "ぷ"),
            ("ぷえ", "ぺ"),
            ("ぷお", "ぽ"),
            ("すあ", "さ"),
            ("すう", "す"),
            ("すえ", "せ"),
            ("すお", "そ"),
            ("しゅあ", "しゃ"),
            ("しゅい", "し"),
            ("しゅう", "しゅ"),
            ("しゅえ", "しぇ"),
            ("しゅお", "しょ"),
            ("つあ", "た"),
            ("つい", "ち"),
            ("つう", "つ"),
            ("つえ", "て"),
            ("つお", "と"),
            ("ゆあ", "や"),
            ("ゆう", "ゆ"),
            ("ゆえ", "いぇ"),
            ("ゆお", "よ"),
            ("ずあ", "ざ"),
            ("ずい", "じ"),
            ("ずう", "ず"),
            ("ずえ", "ぜ"),
            ("ずお", "ぞ"),
            ("わあ", "わ"),
            ("わい", "うぃ"),
            ("わう", "う"),
            ("わえ", "うぇ"),
            ("わお", "を"),
            // "with" and friends
            ("うぃてゅ", "うぃづ"),
            // gl- clusters
            ("ぐぐ", "ぐ"),
        ]));
    if params.kana_type == KanaType::Katakana {
        settings.post_process(PostProcess::HiraganaToKatakana);
    }

    Ok(FormatDecl {
        description: "Rough approximation using kana, for getting Japanese voices to speak some English words"
            .to_string(),
        entries: vec![
            both("double-", p.primary_stress),
            write(p.secondary_stress, ""),
            both("あ", p.a_as_in_apple),
            both("い", p.e_as_in_eat),
            both("う", p.oo_as_in_food),
            both("え", p.e_as_in_them),
            both("お", p.o_as_in_orange),
            both("あい", p.eye),
            both("あお", p.o_as_in_now),
            both("えい", p.a_as_in_ate),
            both("おい", p.oy_as_in_toy),
            both("おう", p.o_as_in_go),
            write(p.a_as_in_ah, "あ"),
            write(p.a_as_in_ago, "あ"),
            write(p.e_as_in_herd, "あ"),
            write(p.i_as_in_it, "い"),
            write(p.u_as_in_but, "う"),
            write(p.ar_as_in_year, "え"),
            write(p.a_as_in_air, "え"),
            write(p.ear, "いお"),
            write(p.oor_as_in_poor, "お"),
            both("おー", p.close_to_or),
            both("ぶ", p.b),
            both("ちゅ", p.ch),
            both("づ", p.d),
            both("てゅ", p.th),
            write(p.th_as_in_them, "てゅ"),
            both("ふ", p.f),
            both("ぐ", p.g),
            // ha, since hu sounds like fu
            both("は", p.h),
            both("じゅ", p.j_as_in_jump),
            write(p.ge_of_blige_etc, "じゅ"),
            both("く", p.k),
            both("る", p.l),
            write(p.r, "る"),
            both("む", p.m),
            both("ぬ", p.n),
            both("んぐ", p.ng),
            both("ぷ", p.p),
            both("す", p.s),
            both("しゅ", p.sh),
            both("つ", p.t),
            both("ゔ", p.v),
            // wa, since wu sounds like u
            both("わ", p.w),
            both("ゆ", p.y),
            both("ず", p.z),
        ],
        settings: settings.build()?,
    })
}

/// Delta for `kana-approx-moreemph`: secondary stress also lengthens its vowel.
pub(super) fn more_emphasis(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Rough approximation using kana, lengthening secondary-stressed vowels as well"
            .to_string(),
        entries: vec![write(p.secondary_stress, "double-")],
        settings: FormatSettingsBuilder::default().build()?,
    })
}
