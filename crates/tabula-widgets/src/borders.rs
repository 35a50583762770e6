#![forbid(unsafe_code)]

//! Border masks and box-drawing glyph sets.

use tabula_style::TextStyle;
use tabula_text::Span;

bitflags::bitflags! {
    /// Which edges of a cell draw a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Borders: u8 {
        const NONE = 0b0000;
        const LEFT = 0b0001;
        const TOP = 0b0010;
        const RIGHT = 0b0100;
        const BOTTOM = 0b1000;

        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
        const TOP_BOTTOM = Self::TOP.bits() | Self::BOTTOM.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const TOP_RIGHT_BOTTOM = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
        const LEFT_BOTTOM = Self::LEFT.bits() | Self::BOTTOM.bits();
        const LEFT_RIGHT = Self::LEFT.bits() | Self::RIGHT.bits();
        const LEFT_RIGHT_BOTTOM = Self::LEFT.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
        const LEFT_TOP = Self::LEFT.bits() | Self::TOP.bits();
        const LEFT_TOP_BOTTOM = Self::LEFT.bits() | Self::TOP.bits() | Self::BOTTOM.bits();
        const LEFT_TOP_RIGHT = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits();
        const ALL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

impl Borders {
    #[inline]
    pub const fn left(self) -> bool {
        self.contains(Self::LEFT)
    }

    #[inline]
    pub const fn top(self) -> bool {
        self.contains(Self::TOP)
    }

    #[inline]
    pub const fn right(self) -> bool {
        self.contains(Self::RIGHT)
    }

    #[inline]
    pub const fn bottom(self) -> bool {
        self.contains(Self::BOTTOM)
    }
}

const GLYPH_COUNT: usize = 15;

const POS_ES: usize = 0;
const POS_ESW: usize = 1;
const POS_SW: usize = 2;
const POS_NES: usize = 3;
const POS_NESW: usize = 4;
const POS_NSW: usize = 5;
const POS_NE: usize = 6;
const POS_NEW: usize = 7;
const POS_NW: usize = 8;
const POS_EW: usize = 9;
const POS_NS: usize = 10;
const POS_S: usize = 11;
const POS_N: usize = 12;
const POS_W: usize = 13;
const POS_E: usize = 14;

/// Glyph position for each `n<<3 | e<<2 | s<<1 | w` mask.
const MASK_TO_POS: [Option<usize>; 16] = [
    None,
    Some(POS_W),
    Some(POS_S),
    Some(POS_SW),
    Some(POS_E),
    Some(POS_EW),
    Some(POS_ES),
    Some(POS_ESW),
    Some(POS_N),
    Some(POS_NW),
    Some(POS_NS),
    Some(POS_NSW),
    Some(POS_NE),
    Some(POS_NEW),
    Some(POS_NES),
    Some(POS_NESW),
];

/// The fifteen glyphs for one section of a border.
///
/// The string lists, in order: `es esw sw nes nesw nsw ne new nw ew ns s n w e`,
/// where each name is the set of compass directions the glyph connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderGlyphSet {
    glyphs: &'static str,
}

impl BorderGlyphSet {
    /// # Panics
    ///
    /// Panics if `glyphs` does not hold exactly fifteen characters.
    pub const fn new(glyphs: &'static str) -> Self {
        let bytes = glyphs.as_bytes();
        let mut count = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] & 0xC0 != 0x80 {
                count += 1;
            }
            i += 1;
        }
        assert!(count == GLYPH_COUNT, "border glyph sets need exactly 15 characters");
        Self { glyphs }
    }

    fn glyph(&self, pos: usize) -> char {
        self.glyphs.chars().nth(pos).unwrap_or(' ')
    }

    pub fn es(&self) -> char {
        self.glyph(POS_ES)
    }

    pub fn esw(&self) -> char {
        self.glyph(POS_ESW)
    }

    pub fn sw(&self) -> char {
        self.glyph(POS_SW)
    }

    pub fn nes(&self) -> char {
        self.glyph(POS_NES)
    }

    pub fn nesw(&self) -> char {
        self.glyph(POS_NESW)
    }

    pub fn nsw(&self) -> char {
        self.glyph(POS_NSW)
    }

    pub fn ne(&self) -> char {
        self.glyph(POS_NE)
    }

    /// North, east and west; the `new` glyph.
    pub fn nwe(&self) -> char {
        self.glyph(POS_NEW)
    }

    pub fn nw(&self) -> char {
        self.glyph(POS_NW)
    }

    /// Horizontal line.
    pub fn ew(&self) -> char {
        self.glyph(POS_EW)
    }

    /// Vertical line.
    pub fn ns(&self) -> char {
        self.glyph(POS_NS)
    }

    pub fn s(&self) -> char {
        self.glyph(POS_S)
    }

    pub fn n(&self) -> char {
        self.glyph(POS_N)
    }

    pub fn w(&self) -> char {
        self.glyph(POS_W)
    }

    pub fn e(&self) -> char {
        self.glyph(POS_E)
    }

    /// The glyph joining the given directions; a space when none are set.
    pub fn corner(&self, n: bool, e: bool, s: bool, w: bool) -> char {
        let mask = (usize::from(n) << 3) | (usize::from(e) << 2) | (usize::from(s) << 1) | usize::from(w);
        MASK_TO_POS[mask].map_or(' ', |pos| self.glyph(pos))
    }

    /// [`corner`](Self::corner) as a one-cell span.
    pub fn corner_span(&self, n: bool, e: bool, s: bool, w: bool, style: &TextStyle) -> Span {
        let c = self.corner(n, e, s, w);
        if c == ' ' {
            Span::space(1, style.clone())
        } else {
            Span::word(c.to_string(), style.clone())
        }
    }
}

/// Glyphs for every section of a bordered box or table.
///
/// Tables use `head` above and inside the header, `head_bottom` for the rule
/// under the header, `body` and `body_bottom` likewise for the body, and
/// `foot` for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderType {
    pub head: BorderGlyphSet,
    pub head_bottom: BorderGlyphSet,
    pub body: BorderGlyphSet,
    pub body_bottom: BorderGlyphSet,
    pub foot: BorderGlyphSet,
}

impl BorderType {
    /// One glyph set for every section.
    pub const fn uniform(glyphs: &'static str) -> Self {
        let set = BorderGlyphSet::new(glyphs);
        Self {
            head: set,
            head_bottom: set,
            body: set,
            body_bottom: set,
            foot: set,
        }
    }

    pub const fn sections(
        head: &'static str,
        head_bottom: &'static str,
        body: &'static str,
        body_bottom: &'static str,
        foot: &'static str,
    ) -> Self {
        Self {
            head: BorderGlyphSet::new(head),
            head_bottom: BorderGlyphSet::new(head_bottom),
            body: BorderGlyphSet::new(body),
            body_bottom: BorderGlyphSet::new(body_bottom),
            foot: BorderGlyphSet::new(foot),
        }
    }

    /// ```text
    /// ┌──┬──┐
    /// │  │  │
    /// ├──┼──┤
    /// │  │  │
    /// └──┴──┘
    /// ```
    pub const SQUARE: Self = Self::uniform("┌┬┐├┼┤└┴┘─│╷╵╴╶");

    /// Square, with double rules under the header and above the footer.
    pub const SQUARE_DOUBLE_SECTION_SEPARATOR: Self = Self::sections(
        "┌┬┐├┼┤└┴┘─│╷╵╴╶",
        "╒╤╕╞╪╡╘╧╛═│╷╵  ",
        "┌┬┐├┼┤└┴┘─│╷╵╴╶",
        "╒╤╕╞╪╡╘╧╛═│╷╵  ",
        "┌┬┐├┼┤└┴┘─│╷╵╴╶",
    );

    /// ```text
    /// ╭──┬──╮
    /// │  │  │
    /// ╰──┴──╯
    /// ```
    pub const ROUNDED: Self = Self::uniform("╭┬╮├┼┤╰┴╯─│╷╵╴╶");

    pub const HEAVY: Self = Self::uniform("┏┳┓┣╋┫┗┻┛━┃╻╹╸╺");

    pub const DOUBLE: Self = Self::uniform("╔╦╗╠╬╣╚╩╝═║    ");

    /// Heavy lines around the header and footer, light lines in the body.
    pub const HEAVY_HEAD_FOOT: Self = Self::sections(
        "┏┳┓┣╋┫┗┻┛━┃╻╹╸╺",
        "┍┯┑┡╇┩┗┻┛━╿╷╹╸╺",
        "┌┬┐├┼┤└┴┘─│╷╵╴╶",
        "┏┳┓┢╈┪┕┷┙━╽╻╵╸╺",
        "┏┳┓┣╋┫┗┻┛━┃╻╹╸╺",
    );

    pub const ASCII: Self = Self::uniform("+++++++++-|    ");

    pub const ASCII_DOUBLE_SECTION_SEPARATOR: Self = Self::sections(
        "+++++++++-|    ",
        "+++++++++=|    ",
        "+++++++++-|    ",
        "+++++++++=|    ",
        "+++++++++-|    ",
    );

    /// Spaces everywhere; keeps the layout of borders without drawing them.
    pub const BLANK: Self = Self::uniform("               ");
}

impl Default for BorderType {
    fn default() -> Self {
        Self::SQUARE
    }
}
