/// A contiguous group of bits inside an 8-bit register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Field {
    mask: u8,
    pos: u8,
}

impl Field {
    pub(crate) const fn new(mask: u8, pos: u8) -> Self {
        Field { mask, pos }
    }

    pub(crate) const fn mask(&self) -> u8 {
        self.mask
    }

    /// Extracts the field from `reg` and shifts it down to bit 0.
    pub(crate) const fn get(&self, reg: u8) -> u8 {
        (reg & self.mask) >> self.pos
    }

    /// Shifts `value` into place; bits that do not fit are dropped.
    pub(crate) const fn set(&self, value: u8) -> u8 {
        (value << self.pos) & self.mask
    }
}

/// Replaces the bits selected by `mask` in `current` with `bits`.
pub(crate) const fn modify(current: u8, mask: u8, bits: u8) -> u8 {
    (current & !mask) | (bits & mask)
}
