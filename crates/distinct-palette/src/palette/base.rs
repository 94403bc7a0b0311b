//! The base palette.

use crate::color::HexColor;

const fn c(value: u32) -> HexColor {
    HexColor::from_rgb24(value)
}

/// Colors pre-selected with the CIEDE2000 color difference formula so that
/// neighbours in this order are as far apart as possible
/// (<https://en.wikipedia.org/wiki/Color_difference#CIEDE2000>).
///
/// Order matters: dynamic picking walks it front to back and static picking
/// indexes into it.
pub const BASE_COLORS: [HexColor; 65] = [
    c(0x000000), c(0xFFFFFF), c(0x00FF00), c(0x0000FF), c(0xFF0000), c(0x01FFFE), c(0xFFA6FE),
    c(0xFFDB66), c(0x006401), c(0x010067), c(0x95003A), c(0x007DB5), c(0xFF00F6), c(0xFFEEE8),
    c(0x774D00), c(0x90FB92), c(0x0076FF), c(0xD5FF00), c(0xFF937E), c(0x6A826C), c(0xFF029D),
    c(0xFE8900), c(0x7A4782), c(0x7E2DD2), c(0x85A900), c(0xFF0056), c(0xA42400), c(0x00AE7E),
    c(0x683D3B), c(0xBDC6FF), c(0x263400), c(0xBDD393), c(0x00B917), c(0x9E008E), c(0x001544),
    c(0xC28C9F), c(0xFF74A3), c(0x01D0FF), c(0x004754), c(0xE56FFE), c(0x788231), c(0x0E4CA1),
    c(0x91D0CB), c(0xBE9970), c(0x968AE8), c(0xBB8800), c(0x43002C), c(0xDEFF74), c(0x00FFC6),
    c(0xFFE502), c(0x620E00), c(0x008F9C), c(0x98FF52), c(0x7544B1), c(0xB500FF), c(0x00FF78),
    c(0xFF6E41), c(0x005F39), c(0x6B6882), c(0x5FAD4E), c(0xA75740), c(0xA5FFD2), c(0xFFB167),
    c(0x009BFF), c(0xE85EBE),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_colors_are_unique() {
        let unique: HashSet<_> = BASE_COLORS.iter().collect();
        assert_eq!(unique.len(), BASE_COLORS.len());
    }

    #[test]
    fn test_base_colors_anchor_entries() {
        assert_eq!(BASE_COLORS[0], HexColor::from_rgb24(0x000000));
        assert_eq!(BASE_COLORS[1], HexColor::from_rgb24(0xFFFFFF));
        assert_eq!(BASE_COLORS[42], HexColor::from_rgb24(0x91D0CB));
        assert_eq!(BASE_COLORS[46], HexColor::from_rgb24(0x43002C));
        assert_eq!(BASE_COLORS[64], HexColor::from_rgb24(0xE85EBE));
    }
}
