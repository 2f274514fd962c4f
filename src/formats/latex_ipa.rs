use super::{both, read, write};
use crate::error::LexError;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "LaTeX IPA package (for typesetting custom pronunciations)".to_string(),
        entries: vec![
            read(".", p.syllable_separator),
            both("\"", p.primary_stress),
            both(r"\textsecstress{}", p.secondary_stress),
            both(r"\#", p.text_sharp),
            both(r"\_", p.text_underline),
            both("?", p.text_question),
            both("!", p.text_exclamation),
            both(",", p.text_comma),
            both("A", p.a_as_in_ah),
            both(":", p.var2_a_as_in_ah),
            both("A:", p.var3_a_as_in_ah),
            both(r"A\textturnr{}", p.var4_a_as_in_ah),
            both("a:", p.var5_a_as_in_ah),
            both(r"\ae{}", p.a_as_in_apple),
            both("2", p.u_as_in_but),
            both("6", p.o_as_in_orange),
            write(p.var1_o_as_in_orange, "A"),
            both("O", p.var2_o_as_in_orange),
            both("aU", p.o_as_in_now),
            both(r"\ae{}O", p.var1_o_as_in_now),
            both("@", p.a_as_in_ago),
            both("@:", p.e_as_in_herd),
            both(r"\textrhookschwa{}", p.var1_a_as_in_ago),
            both("aI", p.eye),
            both("Ae", p.var1_eye),
            both("b", p.b),
            both("tS", p.ch),
            both("d", p.d),
            both("D", p.th_as_in_them),
            both("E", p.e_as_in_them),
            both("e", p.var1_e_as_in_them),
            both("3:", p.ar_as_in_year),
            both("E@", p.a_as_in_air),
            both(r"E\textturnr{}", p.var1_a_as_in_air),
            both("e:", p.var2_a_as_in_air),
            both("E:", p.var3_a_as_in_air),
            both("e@", p.var4_a_as_in_air),
            both("eI", p.a_as_in_ate),
            both(r"\ae{}I", p.var1_a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("I", p.i_as_in_it),
            both("1", p.var1_i_as_in_it),
            both("I@", p.ear),
            both(r"I\textturnr{}", p.var1_ear),
            both(r"I@\textturnr{}", p.var2_ear),
            both("i", p.e_as_in_eat),
            both("i:", p.var1_e_as_in_eat),
            both("dZ", p.j_as_in_jump),
            both("k", p.k),
            both("x", p.opt_scottish_loch),
            both("l", p.l),
            both(r"d\textltilde{}", p.var1_l),
            both("m", p.m),
            both("n", p.n),
            both("N", p.ng),
            both("@U", p.o_as_in_go),
            both("o", p.var1_o_as_in_go),
            both("oU", p.var2_o_as_in_go),
            both("@0", p.var3_o_as_in_go),
            both("OI", p.oy_as_in_toy),
            both("oI", p.var1_oy_as_in_toy),
            both("p", p.p),
            both(r"\textturnr{}", p.r),
            write(p.var1_r, "r"),
            both("s", p.s),
            both("S", p.sh),
            both("t", p.t),
            both("R", p.var1_t),
            both("T", p.th),
            both("U@", p.oor_as_in_poor),
            both(r"U\textturnr{}", p.var1_oor_as_in_poor),
            both("U", p.opt_u_as_in_pull),
            both("0:", p.oo_as_in_food),
            both("u:", p.var1_oo_as_in_food),
            both("u", p.var2_oo_as_in_food),
            both("O:", p.close_to_or),
            write(p.var1_close_to_or, "O"),
            both("o:", p.var2_close_to_or),
            both("v", p.v),
            both("w", p.w),
            both(r"\textturnw{}", p.var1_w),
            both("j", p.y),
            both("z", p.z),
            both("Z", p.ge_of_blige_etc),
            both("P", p.glottal_stop),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("words-ipa.tex")
            .lex_header(
                r"\documentclass[12pt,a4paper]{article} \usepackage[safe]{tipa} \usepackage{longtable} \begin{document} \begin{longtable}{ll}",
            )
            .lex_entry_format("%s & \\textipa{%s}\\\\\n")
            .lex_footer("\\end{longtable}\\end{document}\n")
            .inline_format(r"\textipa{%s}")
            .inline_header(r"% In preamble, put \usepackage[safe]{tipa}")
            .space_separates_words_not_phonemes(true)
            .stress_comes_before_vowel(true)
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
