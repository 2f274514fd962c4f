use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{rules, FormatSettingsBuilder, SafeToDrop, WordCase};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Cepstral's British English SSML phoneset".to_string(),
        entries: vec![
            both("0", p.syllable_separator),
            both("1", p.primary_stress),
            both("a", p.a_as_in_ah),
            both("ae", p.a_as_in_apple),
            both("ah", p.u_as_in_but),
            both("oa", p.o_as_in_orange),
            both("aw", p.o_as_in_now),
            write(p.a_as_in_ago, "ah"),
            both("er", p.e_as_in_herd),
            both("ay", p.eye),
            both("b", p.b),
            both("ch", p.ch),
            both("d", p.d),
            both("dh", p.th_as_in_them),
            both("eh", p.e_as_in_them),
            write(p.ar_as_in_year, "er"),
            both("e@", p.a_as_in_air),
            both("ey", p.a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("ih", p.i_as_in_it),
            both("i ah", p.ear),
            both("i", p.e_as_in_eat),
            both("jh", p.j_as_in_jump),
            both("k", p.k),
            both("l", p.l),
            both("m", p.m),
            both("n", p.n),
            both("ng", p.ng),
            both("ow", p.o_as_in_go),
            both("oy", p.oy_as_in_toy),
            both("p", p.p),
            both("r", p.r),
            both("s", p.s),
            both("sh", p.sh),
            both("t", p.t),
            both("th", p.th),
            both("uh", p.oor_as_in_poor),
            both("uw", p.oo_as_in_food),
            both("ao", p.close_to_or),
            both("v", p.v),
            both("w", p.w),
            both("j", p.y),
            both("z", p.z),
            both("zh", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("lexicon.txt")
            .lex_entry_format("%s 0 %s\n")
            .lex_word_case(WordCase::Lower)
            .inline_format("<phoneme ph='%s'>p</phoneme>")
            .safe_to_drop_characters(SafeToDrop::All)
            // stress and syllable digits attach to the preceding vowel
            .cleanup_regexps(rules(&[(" 1", "1"), (" 0", "0")]))
            .build()?,
    })
}
