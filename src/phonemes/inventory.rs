use super::registry::{PhonemeId, PhonemeRegistry};
use crate::error::LexError;

/// Declares the inventory struct and allocates every phoneme on a registry
/// in the listed order. Each field name doubles as the phoneme's symbolic name.
macro_rules! inventory {
    ($($field:ident = $alloc:ident;)*) => {
        /// The canonical phoneme inventory shared by every format table.
        ///
        /// Variants follow the base they refine; when a destination format
        /// lacks a variant, conversion falls back to that base.
        #[derive(Debug, Clone, Copy)]
        pub struct Phonemes {
            $(pub $field: PhonemeId,)*
        }

        impl Phonemes {
            pub fn declare(reg: &mut PhonemeRegistry) -> Result<Self, LexError> {
                $(let $field = reg.$alloc(stringify!($field))?;)*
                Ok(Self { $($field,)* })
            }
        }
    };
}

inventory! {
    a_as_in_ah = new_vowel;
    var1_a_as_in_ah = new_variant;
    var2_a_as_in_ah = new_variant;
    var3_a_as_in_ah = new_variant;
    var4_a_as_in_ah = new_variant;
    var5_a_as_in_ah = new_variant;
    a_as_in_apple = new_vowel;
    u_as_in_but = new_vowel;
    o_as_in_orange = new_vowel;
    var1_o_as_in_orange = new_variant;
    var2_o_as_in_orange = new_variant;
    o_as_in_now = new_vowel;
    var1_o_as_in_now = new_variant;
    a_as_in_ago = new_vowel;
    var1_a_as_in_ago = new_variant;
    e_as_in_herd = new_vowel;
    eye = new_vowel;
    var1_eye = new_variant;
    b = new_consonant;
    ch = new_consonant;
    d = new_consonant;
    th_as_in_them = new_consonant;
    e_as_in_them = new_vowel;
    var1_e_as_in_them = new_variant;
    ar_as_in_year = new_vowel;
    a_as_in_air = new_vowel;
    var1_a_as_in_air = new_variant;
    var2_a_as_in_air = new_variant;
    var3_a_as_in_air = new_variant;
    var4_a_as_in_air = new_variant;
    a_as_in_ate = new_vowel;
    var1_a_as_in_ate = new_variant;
    f = new_consonant;
    g = new_consonant;
    h = new_consonant;
    i_as_in_it = new_vowel;
    var1_i_as_in_it = new_variant;
    var2_i_as_in_it = new_variant;
    ear = new_vowel;
    var1_ear = new_variant;
    var2_ear = new_variant;
    e_as_in_eat = new_vowel;
    var1_e_as_in_eat = new_variant;
    j_as_in_jump = new_consonant;
    k = new_consonant;
    opt_scottish_loch = new_variant;
    l = new_consonant;
    var1_l = new_variant;
    m = new_consonant;
    n = new_consonant;
    ng = new_consonant;
    o_as_in_go = new_vowel;
    var1_o_as_in_go = new_variant;
    var2_o_as_in_go = new_variant;
    var3_o_as_in_go = new_variant;
    opt_ol_as_in_gold = new_optional_vowel;
    oy_as_in_toy = new_vowel;
    var1_oy_as_in_toy = new_variant;
    p = new_consonant;
    r = new_consonant;
    var1_r = new_variant;
    s = new_consonant;
    sh = new_consonant;
    t = new_consonant;
    var1_t = new_variant;
    th = new_consonant;
    oor_as_in_poor = new_vowel;
    var1_oor_as_in_poor = new_variant;
    opt_u_as_in_pull = new_variant;
    opt_ul_as_in_pull = new_optional_vowel;
    oo_as_in_food = new_vowel;
    var1_oo_as_in_food = new_variant;
    var2_oo_as_in_food = new_variant;
    close_to_or = new_vowel;
    var1_close_to_or = new_variant;
    var2_close_to_or = new_variant;
    var3_close_to_or = new_variant;
    v = new_consonant;
    w = new_consonant;
    var1_w = new_variant;
    y = new_consonant;
    z = new_consonant;
    ge_of_blige_etc = new_consonant;
    glottal_stop = new_other;
    syllable_separator = new_other;
    primary_stress = new_variant;
    secondary_stress = new_variant;
    text_sharp = new_other;
    text_underline = new_other;
    text_question = new_other;
    text_exclamation = new_other;
    text_comma = new_other;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemes::registry::Category;

    #[test]
    fn stress_marks_are_variants_of_the_syllable_separator() {
        let mut reg = PhonemeRegistry::new();
        let p = Phonemes::declare(&mut reg).unwrap();
        assert_eq!(reg.base(p.primary_stress), p.syllable_separator);
        assert_eq!(reg.base(p.secondary_stress), p.syllable_separator);
        assert_eq!(reg.category(p.primary_stress), Category::Other);
    }

    #[test]
    fn loch_is_a_consonant_variant_of_k() {
        let mut reg = PhonemeRegistry::new();
        let p = Phonemes::declare(&mut reg).unwrap();
        assert_eq!(reg.base(p.opt_scottish_loch), p.k);
        assert!(reg.is_consonant(p.opt_scottish_loch));
        assert_eq!(reg.name(p.opt_scottish_loch), "opt_scottish_loch");
    }

    #[test]
    fn optional_vowels_are_exempt_from_completeness() {
        let mut reg = PhonemeRegistry::new();
        let p = Phonemes::declare(&mut reg).unwrap();
        let required: Vec<_> = reg.required().collect();
        assert!(required.contains(&p.e_as_in_herd));
        assert!(required.contains(&p.ge_of_blige_etc));
        assert!(!required.contains(&p.opt_ol_as_in_gold));
        assert!(!required.contains(&p.opt_ul_as_in_pull));
        assert!(!required.contains(&p.glottal_stop));
    }
}
