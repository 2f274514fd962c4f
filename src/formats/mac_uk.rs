use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{rules, FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Scansoft/Nuance British voices for Mac OS 10.7+".to_string(),
        entries: vec![
            both(".", p.syllable_separator),
            both("'", p.primary_stress),
            // secondary stress is not written
            both("", p.secondary_stress),
            both("A", p.a_as_in_ah),
            both("@", p.a_as_in_apple),
            both("$", p.u_as_in_but),
            write(p.a_as_in_ago, "$"),
            both("A+", p.o_as_in_orange),
            both("a&U", p.o_as_in_now),
            both("E0", p.e_as_in_herd),
            both("a&I", p.eye),
            both("b", p.b),
            both("t&S", p.ch),
            both("d", p.d),
            both("D", p.th_as_in_them),
            both("E", p.e_as_in_them),
            both("0", p.ar_as_in_year),
            both("E&$", p.a_as_in_air),
            both("e&I", p.a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("I", p.i_as_in_it),
            write(p.ear, "E0"),
            both("i", p.e_as_in_eat),
            both("d&Z", p.j_as_in_jump),
            both("k", p.k),
            both("l", p.l),
            both("m", p.m),
            both("n", p.n),
            both("nK", p.ng),
            both("o&U", p.o_as_in_go),
            both("O&I", p.oy_as_in_toy),
            both("p", p.p),
            both("R+", p.r),
            both("s", p.s),
            both("S", p.sh),
            both("t", p.t),
            both("T", p.th),
            both("O", p.oor_as_in_poor),
            both("U", p.opt_u_as_in_pull),
            write(p.oo_as_in_food, "U"),
            write(p.close_to_or, "O"),
            both("v", p.v),
            both("w", p.w),
            both("j", p.y),
            both("z", p.z),
            both("Z", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .inline_header(
                "mac-uk phonemes output is for information only; \
                 the system lexicon must be patched to use it\n",
            )
            .space_separates_words_not_phonemes(true)
            .stress_comes_before_vowel(true)
            .safe_to_drop_characters(SafeToDrop::All)
            .cleanup_regexps(rules(&[(r"o&U\.Ol", "o&Ul")]))
            .build()?,
    })
}
