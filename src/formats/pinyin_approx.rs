use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{rules, FormatSettingsBuilder};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

/// Each consonant is spelled as a syllable with tone 0; the cleanup passes
/// then merge consonant+vowel pairs into real Pinyin syllables.
pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Rough approximation using roughly the spelling rules of Chinese Pinyin"
            .to_string(),
        entries: vec![
            both("4", p.primary_stress),
            both("2", p.secondary_stress),
            both("a5", p.a_as_in_ah),
            both("ya5", p.a_as_in_apple),
            both("e5", p.u_as_in_but),
            both("yo5", p.o_as_in_orange),
            both("ao5", p.o_as_in_now),
            write(p.a_as_in_ago, "e5"),
            write(p.e_as_in_herd, "e5"),
            both("ai5", p.eye),
            both("bu0", p.b),
            both("che0", p.ch),
            both("de0", p.d),
            both("ze0", p.th_as_in_them),
            both("ye5", p.e_as_in_them),
            write(p.ar_as_in_year, "e5"),
            write(p.a_as_in_air, "ye5"),
            both("ei5", p.a_as_in_ate),
            both("fu0", p.f),
            both("ge0", p.g),
            both("he0", p.h),
            both("yi5", p.i_as_in_it),
            both("yi3re5", p.ear),
            write(p.e_as_in_eat, "yi5"),
            both("zhe0", p.j_as_in_jump),
            both("ke0", p.k),
            both("le0", p.l),
            both("me0", p.m),
            both("ne0", p.n),
            both("eng0", p.ng),
            both("ou5", p.o_as_in_go),
            both("ruo2yi5", p.oy_as_in_toy),
            both("pu0", p.p),
            both("re0", p.r),
            both("se0", p.s),
            both("she0", p.sh),
            both("te0", p.t),
            write(p.th, "zhe0"),
            write(p.oor_as_in_poor, "wu5"),
            both("yu5", p.oo_as_in_food),
            both("huo5", p.close_to_or),
            write(p.v, "fu0"),
            both("wu0", p.w),
            both("yu0", p.y),
            write(p.z, "ze0"),
            write(p.ge_of_blige_etc, "zhe0"),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("words-pinyin-approx.txt")
            .lex_header(
                "Pinyin approxmations (very approximate!)\n\
                 ----------------------------------------\n",
            )
            .lex_entry_format("%s ~= %s\n")
            .space_separates_words_not_phonemes(true)
            .cleanup_regexps(rules(&[
                ("te0ye", "tie"),
                ("e0e5", "e5"),
                ("([^aeiou][uo])0e(5)", "${1}${2}"),
                ("yu0y", "y"),
                ("wu0yo5", "wo5"),
                ("([bdfghklmnpwz])[euo]0ei", "${1}ei"),
                ("([bdghklmnpstwz])[euo]0ai", "${1}ai"),
                ("([ghklmnpstyz])[euo]0ya", "${1}a"),
                ("([ghklmnpstz])a([0-5]*)ne0", "${1}an${2}"),
                ("([bdfghklmnpstwyz])[euo]0a([1-5])", "${1}a${2}"),
                ("([bdjlmnpt])[euo]0yi", "${1}i"),
                ("([bjlmnp])i([1-5]*)ne0", "${1}in${2}"),
                ("([zs])he0ei", "${1}hei"),
                ("([dfghklmnprstyz])[euo]0ou", "${1}ou"),
                ("([dghklnrst])[euo]0huo", "${1}uo"),
                ("([bfpm])[euo]0huo", "${1}o"),
                ("([bdghklmnprstyz])[euo]0ao", "${1}ao"),
                ("([zcs])h[eu]0ao", "${1}hao"),
                ("re0r", "r"),
                ("zhe0ne0", "zhun5"),
                ("54", "4"),
                ("52", "2"),
                ("([bdjlmnpty])i([1-9])eng0", "${1}ing${2}"),
                ("ya([1-9])eng0", "yang${1}"),
                ("ya([1-9])ne0", "an${1}"),
                ("ye([1-9])ne0", "yan${1}"),
                ("([wr])[eu]0yan", "${1}en"),
                ("yi([1-9])ne0", "yin${1}"),
                // unvoiced consonants get a neutral vowel
                ("yu0", "yu5"),
                ("eng0", "eng5"),
                ("0", "5"),
            ]))
            .build()?,
    })
}
