use super::{both, read, write};
use crate::error::LexError;
use crate::format::hooks::PreProcess;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

const LEX_HEADER: &str = "<html><head><meta name=\"mobileoptimized\" content=\"0\">\
<meta name=\"viewport\" content=\"width=device-width\">\
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"></head><body><table>";

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Unicode IPA (as used in an increasing number of dictionary programs, websites etc)"
            .to_string(),
        entries: vec![
            read(".", p.syllable_separator),
            both("\u{2c8}", p.primary_stress),
            both("\u{2cc}", p.secondary_stress),
            both("#", p.text_sharp),
            both("_", p.text_underline),
            both("?", p.text_question),
            both("!", p.text_exclamation),
            both(",", p.text_comma),
            both("\u{251}", p.a_as_in_ah),
            both("\u{2d0}", p.var2_a_as_in_ah),
            both("\u{251}\u{2d0}", p.var3_a_as_in_ah),
            both("\u{251}\u{279}", p.var4_a_as_in_ah),
            both("a\u{2d0}", p.var5_a_as_in_ah),
            both("\u{e6}", p.a_as_in_apple),
            read("a", p.a_as_in_apple),
            both("\u{28c}", p.u_as_in_but),
            both("\u{252}", p.o_as_in_orange),
            write(p.var1_o_as_in_orange, "\u{251}"),
            both("\u{254}", p.var2_o_as_in_orange),
            both("a\u{28a}", p.o_as_in_now),
            both("\u{e6}\u{254}", p.var1_o_as_in_now),
            both("\u{259}", p.a_as_in_ago),
            both("\u{259}\u{2d0}", p.e_as_in_herd),
            both("\u{25a}", p.var1_a_as_in_ago),
            both("a\u{26a}", p.eye),
            both("\u{251}e", p.var1_eye),
            both("b", p.b),
            both("t\u{283}", p.ch),
            read("\u{2a7}", p.ch),
            both("d", p.d),
            both("\u{f0}", p.th_as_in_them),
            both("\u{25b}", p.e_as_in_them),
            both("e", p.var1_e_as_in_them),
            both("\u{25d}", p.ar_as_in_year),
            read("\u{25c}\u{2d0}", p.ar_as_in_year),
            both("\u{25b}\u{259}", p.a_as_in_air),
            both("\u{25b}\u{279}", p.var1_a_as_in_air),
            both("e\u{2d0}", p.var2_a_as_in_air),
            both("\u{25b}\u{2d0}", p.var3_a_as_in_air),
            both("e\u{259}", p.var4_a_as_in_air),
            both("e\u{26a}", p.a_as_in_ate),
            both("\u{e6}\u{26a}", p.var1_a_as_in_ate),
            both("f", p.f),
            both("\u{261}", p.g),
            both("h", p.h),
            both("\u{26a}", p.i_as_in_it),
            both("\u{268}", p.var1_i_as_in_it),
            both("\u{26a}\u{259}", p.ear),
            both("\u{26a}\u{279}", p.var1_ear),
            both("\u{26a}\u{279}\u{259}", p.var2_ear),
            both("i", p.e_as_in_eat),
            both("i\u{2d0}", p.var1_e_as_in_eat),
            both("d\u{292}", p.j_as_in_jump),
            read("\u{2a4}", p.j_as_in_jump),
            both("k", p.k),
            both("x", p.opt_scottish_loch),
            both("l", p.l),
            both("d\u{26b}", p.var1_l),
            both("m", p.m),
            both("n", p.n),
            both("\u{14b}", p.ng),
            both("\u{259}\u{28a}", p.o_as_in_go),
            both("o", p.var1_o_as_in_go),
            both("o\u{28a}", p.var2_o_as_in_go),
            both("\u{259}\u{289}", p.var3_o_as_in_go),
            both("\u{254}\u{26a}", p.oy_as_in_toy),
            both("o\u{26a}", p.var1_oy_as_in_toy),
            both("p", p.p),
            both("\u{279}", p.r),
            write(p.var1_r, "r"),
            both("s", p.s),
            both("\u{283}", p.sh),
            both("t", p.t),
            both("\u{27e}", p.var1_t),
            both("\u{3b8}", p.th),
            both("\u{28a}\u{259}", p.oor_as_in_poor),
            both("\u{28a}\u{279}", p.var1_oor_as_in_poor),
            both("\u{28a}", p.opt_u_as_in_pull),
            both("\u{289}\u{2d0}", p.oo_as_in_food),
            both("u\u{2d0}", p.var1_oo_as_in_food),
            both("u", p.var2_oo_as_in_food),
            both("\u{254}\u{2d0}", p.close_to_or),
            write(p.var1_close_to_or, "\u{254}"),
            both("o\u{2d0}", p.var2_close_to_or),
            both("v", p.v),
            both("w", p.w),
            both("\u{28d}", p.var1_w),
            both("j", p.y),
            both("z", p.z),
            both("\u{292}", p.ge_of_blige_etc),
            both("\u{294}", p.glottal_stop),
        ],
        settings: FormatSettingsBuilder::default()
            .pre_process(PreProcess::DecodeUnicodeEscapes)
            .lex_filename("words-ipa.html")
            .lex_header(LEX_HEADER)
            .lex_entry_format("<tr><td>%s</td><td>%s</td></tr>\n")
            .lex_footer("</table></body></html>\n")
            .space_separates_words_not_phonemes(true)
            .stress_comes_before_vowel(true)
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
