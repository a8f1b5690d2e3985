/// Bits in one digit word.
pub const WORD_BITS: u32 = u32::BITS;

/// Largest power of ten that fits in a word, used to move decimal text
/// in and out of the magnitude one group at a time.
pub const DECIMAL_GROUP_RADIX: u32 = 1_000_000_000;

/// Decimal digits per group, `log10(DECIMAL_GROUP_RADIX)`.
pub const DECIMAL_GROUP_DIGITS: usize = 9;

/// Values `0..=MAX_CONSTANT` (and their negations) come from the cache.
pub const MAX_CONSTANT: usize = 16;

/// Largest magnitude, in words, a left shift may produce.
pub const MAX_SHIFT_WORDS: usize = u32::MAX as usize;
