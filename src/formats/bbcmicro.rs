use super::{both, read, write, CatalogParams};
use crate::error::LexError;
use crate::format::settings::{rules, FormatSettingsBuilder, SafeToDrop, WordCase};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

/// The BBC Micro "Speech" program by David J. Hoskins (Superior Software, 1985).
///
/// Stress marks are pitch numbers: normal pitch is 6 and lower numbers are
/// higher, so 4 and 5 stand in for primary and secondary stress. Lexicon
/// entries match whole words, and the entry separator is byte 0x80.
pub(super) fn declare(p: &Phonemes, params: &CatalogParams) -> Result<FormatDecl, LexError> {
    let lex_filename = if params.bbc_speech_rom {
        "SPEECH.ROM"
    } else {
        "BBCLEX"
    };
    Ok(FormatDecl {
        description: "BBC Micro Speech program from 1985".to_string(),
        entries: vec![
            both("4", p.primary_stress),
            both("5", p.secondary_stress),
            both("AA", p.a_as_in_ah),
            both("AE", p.a_as_in_apple),
            both("AH", p.u_as_in_but),
            both("O", p.o_as_in_orange),
            both("AW", p.o_as_in_now),
            write(p.a_as_in_ago, "AH"),
            both("ER", p.e_as_in_herd),
            both("IY", p.eye),
            both("B", p.b),
            both("CH", p.ch),
            both("D", p.d),
            both("DH", p.th_as_in_them),
            both("EH", p.e_as_in_them),
            write(p.ar_as_in_year, "ER"),
            both("AI", p.a_as_in_air),
            both("AY", p.a_as_in_ate),
            both("F", p.f),
            both("G", p.g),
            both("/H", p.h),
            both("IH", p.i_as_in_it),
            both("IX", p.var2_i_as_in_it),
            both("IXAH", p.ear),
            both("EER", p.var2_ear),
            both("EE", p.e_as_in_eat),
            both("J", p.j_as_in_jump),
            both("K", p.k),
            // CT as in "fact" is read out as K+T
            read("C", p.k),
            both("L", p.l),
            both("M", p.m),
            both("N", p.n),
            both("NX", p.ng),
            both("OW", p.o_as_in_go),
            both("OL", p.opt_ol_as_in_gold),
            both("OY", p.oy_as_in_toy),
            both("P", p.p),
            both("R", p.r),
            both("S", p.s),
            both("SH", p.sh),
            both("T", p.t),
            both("TH", p.th),
            both("AOR", p.oor_as_in_poor),
            read("UH", p.oor_as_in_poor),
            write(p.opt_u_as_in_pull, "UH"),
            read("/U", p.opt_u_as_in_pull),
            both("/UL", p.opt_ul_as_in_pull),
            both("UW", p.oo_as_in_food),
            read("UX", p.oo_as_in_food),
            both("AO", p.close_to_or),
            both("V", p.v),
            both("W", p.w),
            both("Y", p.y),
            both("Z", p.z),
            both("ZH", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename(lex_filename)
            .lex_entry_format("> %s_\u{80}%s")
            .lex_word_case(WordCase::Upper)
            .lex_footer(">**")
            .space_separates_words_not_phonemes(true)
            .safe_to_drop_characters(SafeToDrop::All)
            .cleanup_regexps(rules(&[
                ("KT", "CT"),
                ("DYUW", "DUX"),
                ("AHR$", "AH"),
            ]))
            .cvt_out_regexps(rules(&[("DUX", "DYUW")]))
            .build()?,
    })
}
