/// `start` and `end` are 0-based from LSB (least significant bit).
/// `start` is inclusive and `end` is exclusive.
pub fn get_bits(bits: u64, start: u32, end: u32) -> u64 {
    // !0 is equal to 0xffff_ffff_ffff_ffff
    let width = end - start;
    let mask = if width >= 64 { !0 } else { !(!0u64 << width) };
    (bits >> start) & mask
}

/// Places `value` into the field starting at `start`. Bits of `value` above `width` are dropped.
pub fn put_bits(bits: u64, value: u64, start: u32, width: u32) -> u64 {
    let mask = !(!0u64 << width);
    (bits & !(mask << start)) | ((value & mask) << start)
}

pub fn set_bit(bits: u64, bit_index: u32) -> u64 {
    let mask = 1 << bit_index;
    bits | mask
}

pub fn is_bit_set(bits: u64, bit_index: u32) -> bool {
    get_bits(bits, bit_index, bit_index + 1) == 1
}
