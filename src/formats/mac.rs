use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "approximation in American English using the [[inpt PHON]] notation of Apple's US voices".to_string(),
        entries: vec![
            both("=", p.syllable_separator),
            both("1", p.primary_stress),
            both("2", p.secondary_stress),
            both("AA", p.a_as_in_ah),
            both("aa", p.var5_a_as_in_ah),
            both("AE", p.a_as_in_apple),
            both("UX", p.u_as_in_but),
            write(p.o_as_in_orange, "AA"),
            both("AW", p.o_as_in_now),
            both("AX", p.a_as_in_ago),
            write(p.e_as_in_herd, "AX"),
            both("AY", p.eye),
            both("b", p.b),
            both("C", p.ch),
            both("d", p.d),
            both("D", p.th_as_in_them),
            both("EH", p.e_as_in_them),
            write(p.ar_as_in_year, "AX"),
            both("EH r", p.a_as_in_air),
            both("EY", p.a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("IH", p.i_as_in_it),
            both("IX", p.var2_i_as_in_it),
            both("IY UX", p.ear),
            both("IY", p.e_as_in_eat),
            both("J", p.j_as_in_jump),
            both("k", p.k),
            both("l", p.l),
            both("m", p.m),
            both("n", p.n),
            both("N", p.ng),
            both("OW", p.o_as_in_go),
            both("OY", p.oy_as_in_toy),
            both("p", p.p),
            both("r", p.r),
            both("s", p.s),
            both("S", p.sh),
            both("t", p.t),
            both("T", p.th),
            both("UH", p.oor_as_in_poor),
            both("UW", p.oo_as_in_food),
            both("AO", p.close_to_or),
            both("v", p.v),
            both("w", p.w),
            both("y", p.y),
            both("z", p.z),
            both("Z", p.ge_of_blige_etc),
        ],
        settings: FormatSettingsBuilder::default()
            .lex_filename("substitute.sh")
            .lex_header(
                "# I don't yet know how to add to the Apple US lexicon,\n\
                 # so here is a 'sed' command you can run on your text\n\
                 # to put the pronunciation inline:\n\nsed",
            )
            .lex_entry_format(" -e \"s/%s/[[inpt PHON]]%s[[inpt TEXT]]/g\"")
            .lex_footer("\n")
            .inline_format("[[inpt PHON]]%s[[inpt TEXT]]")
            .space_separates_words_not_phonemes(true)
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
