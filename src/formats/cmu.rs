use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

// Single-letter consonants carry a trailing space so that the two-letter
// symbols sharing their first letter stay unambiguous.
pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "format of the US-English Carnegie Mellon University Pronouncing Dictionary"
            .to_string(),
        entries: vec![
            both("0", p.syllable_separator),
            both("1", p.primary_stress),
            both("2", p.secondary_stress),
            both("AA", p.a_as_in_ah),
            write(p.var1_a_as_in_ah, "2"),
            write(p.var2_a_as_in_ah, "1"),
            both("AE", p.a_as_in_apple),
            both("AH", p.u_as_in_but),
            write(p.o_as_in_orange, "AA"),
            both("AW", p.o_as_in_now),
            write(p.a_as_in_ago, "AH"),
            both("ER", p.e_as_in_herd),
            both("AY", p.eye),
            both("B ", p.b),
            both("CH", p.ch),
            both("D ", p.d),
            both("DH", p.th_as_in_them),
            both("EH", p.e_as_in_them),
            write(p.ar_as_in_year, "ER"),
            write(p.a_as_in_air, "ER"),
            both("EY", p.a_as_in_ate),
            both("F ", p.f),
            both("G ", p.g),
            both("HH", p.h),
            both("IH", p.i_as_in_it),
            both("EY AH", p.ear),
            both("IY", p.e_as_in_eat),
            both("JH", p.j_as_in_jump),
            both("K ", p.k),
            both("L ", p.l),
            both("M ", p.m),
            both("N ", p.n),
            both("NG", p.ng),
            both("OW", p.o_as_in_go),
            both("OY", p.oy_as_in_toy),
            both("P ", p.p),
            both("R ", p.r),
            both("S ", p.s),
            both("SH", p.sh),
            both("T ", p.t),
            both("TH", p.th),
            both("UH", p.oor_as_in_poor),
            both("UW", p.oo_as_in_food),
            both("AO", p.close_to_or),
            both("V ", p.v),
            both("W ", p.w),
            both("Y ", p.y),
            both("Z ", p.z),
            both("ZH", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
