use super::{both, write};
use crate::error::LexError;
use crate::format::settings::{FormatSettingsBuilder, SafeToDrop};
use crate::format::table::FormatDecl;
use crate::phonemes::Phonemes;

pub(super) fn declare(p: &Phonemes) -> Result<FormatDecl, LexError> {
    Ok(FormatDecl {
        description: "Festival's British voice".to_string(),
        entries: vec![
            both("0", p.syllable_separator),
            both("1", p.primary_stress),
            both("2", p.secondary_stress),
            both("aa", p.a_as_in_ah),
            both("a", p.a_as_in_apple),
            both("uh", p.u_as_in_but),
            both("o", p.o_as_in_orange),
            both("au", p.o_as_in_now),
            both("@", p.a_as_in_ago),
            both("@@", p.e_as_in_herd),
            both("ai", p.eye),
            both("b", p.b),
            both("ch", p.ch),
            both("d", p.d),
            both("dh", p.th_as_in_them),
            both("e", p.e_as_in_them),
            write(p.ar_as_in_year, "@@"),
            both("e@", p.a_as_in_air),
            both("ei", p.a_as_in_ate),
            both("f", p.f),
            both("g", p.g),
            both("h", p.h),
            both("i", p.i_as_in_it),
            both("i@", p.ear),
            both("ii", p.e_as_in_eat),
            both("jh", p.j_as_in_jump),
            both("k", p.k),
            both("l", p.l),
            both("m", p.m),
            both("n", p.n),
            both("ng", p.ng),
            both("ou", p.o_as_in_go),
            both("oi", p.oy_as_in_toy),
            both("p", p.p),
            both("r", p.r),
            both("s", p.s),
            both("sh", p.sh),
            both("t", p.t),
            both("th", p.th),
            both("u@", p.oor_as_in_poor),
            both("u", p.opt_u_as_in_pull),
            both("uu", p.oo_as_in_food),
            both("oo", p.close_to_or),
            both("v", p.v),
            both("w", p.w),
            both("y", p.y),
            both("z", p.z),
            both("zh", p.ge_of_blige_etc),
        ],
        // no lexicon writer yet; .festivalrc entries are read by an external reader
        settings: FormatSettingsBuilder::default()
            .safe_to_drop_characters(SafeToDrop::All)
            .build()?,
    })
}
