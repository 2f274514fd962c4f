use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "General X-SAMPA notation".to_string(),
        entries: vec![
            both(".", p.syllable_separator),
            both("\"", p.primary_stress),
            both("%", p.secondary_stress),
            both("A", p.a_as_in_ah),
            both(":", p.var2_a_as_in_ah),
            both("A:", p.var3_a_as_in_ah),
            both(r"Ar\", p.var4_a_as_in_ah),
            both("a:", p.var5_a_as_in_ah),
            both("{", p.a_as_in_apple),
            both("V", p.u_as_in_but),
            both("Q", p.o_as_in_orange),
            write(p.var1_o_as_in_orange, "A"),
            both("O", p.var2_o_as_in_orange),
            both("aU", p.o_as_in_now),
            both("{O", p.var1_o_as_in_now),
            both("@", p.a_as_in_ago),
            both("3:", p.e_as_in_herd),
            both("aI", p.eye),
            both("Ae", p.var1_eye),
            both("b", p.b),
            both("tS", p.ch),
            both("d", p.d),
            both("D", p.th_as_in_them),
            both("E", p.e_as_in_them),
            both("e", p.var1_e_as_in_them),
            write(p.ar_as_in_year, "3:"),
            both("E@", p.a_as_in_air),
            both(r"Er\", p.var1_a_as_in_air),
            both("e:", p.var2_a_as_in_air),
            both("E:", p.var3_a_as_in_air),
            both("e@", p.var4_a_as_in_air),
            both("eI", p.a_as_in_ate),
            both("{I", p.var1_a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("I", p.i_as_in_it),
            both("1", p.var1_i_as_in_it),
            both("I@", p.ear),
            both(r"Ir\", p.var1_ear),
            both("i", p.e_as_in_eat),
            both("i:", p.var1_e_as_in_eat),
            both("dZ", p.j_as_in_jump),
            both("k", p.k),
            both("x", p.opt_scottish_loch),
            both("l", p.l),
            both("m", p.m),
            both("n", p.n),
            both("N", p.ng),
            both("@U", p.o_as_in_go),
            both("oU", p.var2_o_as_in_go),
            both("@}", p.var3_o_as_in_go),
            both("OI", p.oy_as_in_toy),
            both("oI", p.var1_oy_as_in_toy),
            both("p", p.p),
            both(r"r\", p.r),
            write(p.var1_r, "r"),
            both("s", p.s),
            both("S", p.sh),
            both("t", p.t),
            both("T", p.th),
            both("U@", p.oor_as_in_poor),
            both(r"Ur\", p.var1_oor_as_in_poor),
            both("U", p.opt_u_as_in_pull),
            both("}:", p.oo_as_in_food),
            both("u:", p.var1_oo_as_in_food),
            write(p.var2_oo_as_in_food, "u:"),
            both("O:", p.close_to_or),
            write(p.var1_close_to_or, "O"),
            both("o:", p.var2_close_to_or),
            both("v", p.v),
            both("w", p.w),
            both("W", p.var1_w),
            both("j", p.y),
            both("z", p.z),
            both("Z", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("acapela.txt")
            .lex_entry_format("%s\t#%s\tUNKNOWN\n")
            .space_separates_words_not_phonemes(true)
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
