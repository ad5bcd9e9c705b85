//! Compression function (FIPS 180-4 Section 6.2.2, steps 2-4).

use super::constants::{K, ROUNDS};
use super::ops::{big_sigma0, big_sigma1, ch, maj};
use super::state::DigestState;

/// Run the 64 rounds over one block's schedule and fold the result into
/// `state`.
pub fn compress(state: &mut DigestState, words: &[u32; ROUNDS]) {
    let working = rounds(*state.words(), words);
    state.add_block(working);
}

/// The round loop on its own, returning the working variables a..h after
/// round 63 (before they are added back into the state).
pub(crate) fn rounds(initial: [u32; 8], words: &[u32; ROUNDS]) -> [u32; 8] {
    // Initialize working variables
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = initial;

    for i in 0..ROUNDS {
        let s1 = big_sigma1(e);
        let ch = ch(e, f, g);
        let temp1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(K[i])
            .wrapping_add(words[i]);
        let s0 = big_sigma0(a);
        let maj = maj(a, b, c);
        let temp2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    [a, b, c, d, e, f, g, h]
}
