//! Built-in mosaic design expressed as symbol rows
//!
//! Symbols: `0` background, `r` cap red, `b` hair and moustache brown,
//! `t` skin tan, `w` white highlights, `m` the cap emblem.

/// Symbol used to pad the design out to the target grid
pub const BACKGROUND_SYMBOL: char = '0';

/// Rows of the built-in design, top row first
///
/// Rows have uneven lengths and there are fewer rows than a full-size
/// grid; [`crate::pattern::source::Pattern::fit`] pads or truncates them.
pub const DESIGN: &[&str] = &[
    "000000rrrrr000000000000000000000000000000000000000000000000000",
    "0000rrrrrrrrrr0000000000000000000000000000000000000000000000000",
    "000rrrrrrrrrrrr000000000000000000000000000000000000000000000000",
    "00rrrbttttttbrr00000000000000000000000000000000000000000000000",
    "0rrbbtttttttbbr0000000000000000000000000000000000000000000000000",
    "0rbbtttttttttbr0000000000000000000000000000000000000000000000000",
    "rbbtttbbbbtttbr0000000000000000000000000000000000000000000000000",
    "rbttbbbbbbbbttbr000000000000000000000000000000000000000000000000",
    "rbtbbwwwwwwwbbtr000000000000000000000000000000000000000000000000",
    "rbtbwwbwwbwwbbtr000000000000000000000000000000000000000000000000",
    "rbtbwbbwwbbwbbtr000000000000000000000000000000000000000000000000",
    "rbtbwwbwwbwwbbtr000000000000000000000000000000000000000000000000",
    "rbtbbwwwwwwwbbtr000000000000000000000000000000000000000000000000",
    "rbtttbbbbbbbtttbr00000000000000000000000000000000000000000000000",
    "rbttttttttttttbr00000000000000000000000000000000000000000000000",
    "0rbttttttttttbr000000000000000000000000000000000000000000000000",
    "0rrbbtttttbbbrr000000000000000000000000000000000000000000000000",
    "00rrrbbbbbbrr0000000000000000000000000000000000000000000000000",
    "000rrrrrrrrrr0000000000000000000000000000000000000000000000000",
    "0000rrrrrrrr00000000000000000000000000000000000000000000000000",
    // Cap emblem
    "000000rrrrr000000000000000000000000000000000000000000000000000",
    "00000rrrrrr000000000000000000000000000000000000000000000000000",
    "0000rrwwwrr000000000000000000000000000000000000000000000000000",
    "000rrwwmwwrr00000000000000000000000000000000000000000000000000",
    "00rrwwmmmwwrr0000000000000000000000000000000000000000000000000",
    "0rrwwmmmmmwwrr000000000000000000000000000000000000000000000000",
    "rrwwmmwwmmmwwrr00000000000000000000000000000000000000000000000",
    "rwwmmwwwwmmwwwr00000000000000000000000000000000000000000000000",
    "rwwmwwwwwwmwwwr00000000000000000000000000000000000000000000000",
    "rwwwwwwwwwwwwwr00000000000000000000000000000000000000000000000",
    "0rwwwwwwwwwwwr000000000000000000000000000000000000000000000000",
    "00rrwwwwwwwrr0000000000000000000000000000000000000000000000000",
    "000rrrrrrrr000000000000000000000000000000000000000000000000000",
];
