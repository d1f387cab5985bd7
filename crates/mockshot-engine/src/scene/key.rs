/// Paint layer. Lower layers are drawn first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Canvas-wide background fill.
    pub const BACKGROUND: ZIndex = ZIndex(0);
    /// Template ops, icon elements and their text, in declaration order.
    pub const CONTENT: ZIndex = ZIndex(10);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable sort key for draw items.
///
/// Ordered by `z` first, then by `order` (insertion index), so equal layers
/// keep declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
