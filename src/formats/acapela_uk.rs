use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Acapela-optimised X-SAMPA for UK English voices (e.g. \"Peter\")".to_string(),
        entries: vec![
            both("A:", p.a_as_in_ah),
            both("{", p.a_as_in_apple),
            both("V", p.u_as_in_but),
            both("Q", p.o_as_in_orange),
            both("A", p.var1_o_as_in_orange),
            both("O", p.var2_o_as_in_orange),
            both("aU", p.o_as_in_now),
            both("{O", p.var1_o_as_in_now),
            both("@", p.a_as_in_ago),
            both("3:", p.e_as_in_herd),
            both("aI", p.eye),
            both("A e", p.var1_eye),
            both("b", p.b),
            both("t S", p.ch),
            both("d", p.d),
            both("D", p.th_as_in_them),
            both("e", p.e_as_in_them),
            write(p.ar_as_in_year, "3:"),
            both("e @", p.a_as_in_air),
            both("e r", p.var1_a_as_in_air),
            both("e :", p.var2_a_as_in_air),
            write(p.var3_a_as_in_air, "e :"),
            both("eI", p.a_as_in_ate),
            both("{I", p.var1_a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("I", p.i_as_in_it),
            both("1", p.var1_i_as_in_it),
            both("I@", p.ear),
            both("I r", p.var1_ear),
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
            both("o U", p.var2_o_as_in_go),
            both("@ }", p.var3_o_as_in_go),
            both("OI", p.oy_as_in_toy),
            both("o I", p.var1_oy_as_in_toy),
            both("p", p.p),
            both("r", p.r),
            both("s", p.s),
            both("S", p.sh),
            both("t", p.t),
            both("T", p.th),
            both("U@", p.oor_as_in_poor),
            both("U r", p.var1_oor_as_in_poor),
            both("U", p.opt_u_as_in_pull),
            both("u:", p.oo_as_in_food),
            both("O:", p.close_to_or),
            write(p.var1_close_to_or, "O"),
            both("v", p.v),
            both("w", p.w),
            both("j", p.y),
            both("z", p.z),
            both("Z", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("acapela.txt")
            .lex_entry_format("%s\t#%s\tUNKNOWN\n")
            .inline_format("\\Prn=%s\\")
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
