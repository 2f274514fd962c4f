use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Microsoft Speech API (American English)".to_string(),
        entries: vec![
            both("-", p.syllable_separator),
            both("1", p.primary_stress),
            both("2", p.secondary_stress),
            both("aa", p.a_as_in_ah),
            both("ae", p.a_as_in_apple),
            both("ah", p.u_as_in_but),
            both("ao", p.o_as_in_orange),
            both("aw", p.o_as_in_now),
            both("ax", p.a_as_in_ago),
            both("er", p.e_as_in_herd),
            both("ay", p.eye),
            both("b", p.b),
            both("ch", p.ch),
            both("d", p.d),
            both("dh", p.th_as_in_them),
            both("eh", p.e_as_in_them),
            both("ey", p.var1_e_as_in_them),
            write(p.ar_as_in_year, "er"),
            both("eh r", p.a_as_in_air),
            write(p.a_as_in_ate, "ey"),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("ih", p.i_as_in_it),
            both("iy ah", p.ear),
            both("iy", p.e_as_in_eat),
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
            both("AO", p.close_to_or),
            both("v", p.v),
            both("w", p.w),
            both("y", p.y),
            both("z", p.z),
            both("zh", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("run-ptts.bat")
            .lex_header(
                "rem  You have to run this file\n\
                 rem  with ptts.exe in the same directory\n\
                 rem  to add these words to the SAPI lexicon\n\n",
            )
            .lex_entry_format("ptts -la %s \"%s\"\n")
            .inline_format("<pron sym=\"%s\"/>")
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
