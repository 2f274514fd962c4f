use super::{both, read, write};
use crate::error::LexError;
use crate::format::settings::{rules, FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "eSpeak's default British voice".to_string(),
        entries: vec![
            both("%", p.syllable_separator),
            both("'", p.primary_stress),
            both(",", p.secondary_stress),
            both("A:", p.a_as_in_ah),
            read("A@", p.a_as_in_ah),
            both("A", p.var1_a_as_in_ah),
            both("a", p.a_as_in_apple),
            read("aa", p.a_as_in_apple),
            read("a2", p.a_as_in_apple),
            read("&", p.a_as_in_apple),
            both("V", p.u_as_in_but),
            both("0", p.o_as_in_orange),
            both("aU", p.o_as_in_now),
            both("@", p.a_as_in_ago),
            read("a#", p.a_as_in_ago),
            both("3:", p.e_as_in_herd),
            both("3", p.var1_a_as_in_ago),
            read("@2", p.a_as_in_ago),
            read("@-", p.a_as_in_ago),
            both("aI", p.eye),
            read("aI2", p.eye),
            read("aI;", p.eye),
            read("aI2;", p.eye),
            both("b", p.b),
            both("tS", p.ch),
            both("d", p.d),
            both("D", p.th_as_in_them),
            both("E", p.e_as_in_them),
            write(p.ar_as_in_year, "3:"),
            both("e@", p.a_as_in_air),
            both("eI", p.a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("I", p.i_as_in_it),
            read("I;", p.i_as_in_it),
            read("i", p.i_as_in_it),
            read("I2", p.var2_i_as_in_it),
            read("I2;", p.var2_i_as_in_it),
            both("i@", p.ear),
            both("i@3", p.var2_ear),
            both("i:", p.e_as_in_eat),
            read("i:;", p.e_as_in_eat),
            both("dZ", p.j_as_in_jump),
            both("k", p.k),
            both("x", p.opt_scottish_loch),
            both("l", p.l),
            read("L", p.l),
            both("m", p.m),
            both("n", p.n),
            both("N", p.ng),
            both("oU", p.o_as_in_go),
            // a destination without this gets o_as_in_go followed by l
            both("oUl", p.opt_ol_as_in_gold),
            both("OI", p.oy_as_in_toy),
            both("p", p.p),
            both("r", p.r),
            read("r-", p.r),
            both("s", p.s),
            both("S", p.sh),
            both("t", p.t),
            both("T", p.th),
            both("U@", p.oor_as_in_poor),
            both("U", p.opt_u_as_in_pull),
            read("@5", p.opt_u_as_in_pull),
            both("Ul", p.opt_ul_as_in_pull),
            both("u:", p.oo_as_in_food),
            both("O:", p.close_to_or),
            both("O@", p.var3_close_to_or),
            read("o@", p.var3_close_to_or),
            read("O", p.var3_close_to_or),
            both("v", p.v),
            both("w", p.w),
            both("j", p.y),
            both("z", p.z),
            both("Z", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("en_extra")
            .lex_entry_format("%s %s\n")
            .inline_format("[[%s]]")
            .space_separates_words_not_phonemes(true)
            .stress_comes_before_vowel(true)
            .safe_to_drop_characters(SafeToDrop::Chars("_: !".to_string()))
            .cleanup_regexps(rules(&[
                ("k'a2n", "k'@n"),
                ("ka2n", "k@n"),
                ("gg", "g"),
                // eSpeak writes the @U diphthong as oU; the accent decides how it sounds
                ("@U", "oU"),
                ("([iU]|([AO]:))@r$", "${1}@"),
                ("([^e])@r", "${1}_remove_3"),
                ("_remove_", ""),
                ("rr$", "r"),
                ("3:r$", "3:"),
            ]))
            // other synths leave the r implicit unless another vowel follows
            .cvt_out_regexps(rules(&[
                ("e@r$", "e@"),
                ("e@r([bdDfghklmnNprsStTvwjzZ])", "e@${1}"),
            ]))
            .build()?,
    })
}
