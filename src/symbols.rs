//! The fixed symbol set printed on every reel strip.
//!
//! Symbols are laid out along a single axis: cell `i` holds symbol `i`. The
//! strip is bracketed by wrap siblings (the last symbol sits above cell 0 and
//! symbol 0 sits after the last cell) so a reel scrolling past either end
//! never shows a seam.

/// A displayable reel symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub id: u8,
    pub name: &'static str,
    /// Terminal asset drawn on the payline.
    pub glyph: &'static str,
    /// RGB tint used when the symbol is rendered.
    pub tint: (u8, u8, u8),
}

const STANDARD_SYMBOLS: [Symbol; 8] = [
    Symbol { id: 1, name: "Cherry", glyph: "🍒", tint: (220, 40, 60) },
    Symbol { id: 2, name: "Lemon", glyph: "🍋", tint: (240, 220, 60) },
    Symbol { id: 3, name: "Orange", glyph: "🍊", tint: (245, 150, 40) },
    Symbol { id: 4, name: "Grapes", glyph: "🍇", tint: (150, 70, 200) },
    Symbol { id: 5, name: "Bell", glyph: "🔔", tint: (250, 200, 30) },
    Symbol { id: 6, name: "Star", glyph: "⭐", tint: (255, 235, 120) },
    Symbol { id: 7, name: "Diamond", glyph: "💎", tint: (80, 200, 240) },
    Symbol { id: 8, name: "Seven", glyph: "7️⃣", tint: (230, 30, 30) },
];

/// Ordered, immutable set of symbols shared by all reels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
    /// Strip layout including both wrap siblings.
    strip: Vec<usize>,
}

impl SymbolSet {
    /// The eight-symbol set the game ships with.
    pub fn standard() -> Self {
        Self::new(STANDARD_SYMBOLS.to_vec())
    }

    pub fn new(symbols: Vec<Symbol>) -> Self {
        let strip = build_strip(symbols.len());
        Self { symbols, strip }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Strip order from top to bottom: `[last, 0, 1, .., last, 0]`.
    pub fn strip(&self) -> &[usize] {
        &self.strip
    }

    /// Symbol index shown in strip cell `cell` (cell 0 holds symbol 0).
    ///
    /// Cells `-1` and `len` resolve to the wrap siblings; anything further
    /// out keeps wrapping around the strip.
    pub fn symbol_at_cell(&self, cell: i64) -> usize {
        let n = self.symbols.len() as i64;
        if n == 0 {
            return 0;
        }
        match usize::try_from(cell + 1) {
            Ok(strip_index) if strip_index < self.strip.len() => self.strip[strip_index],
            _ => cell.rem_euclid(n) as usize,
        }
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::standard()
    }
}

fn build_strip(count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let mut strip = Vec::with_capacity(count + 2);
    strip.push(count - 1);
    strip.extend(0..count);
    strip.push(0);
    strip
}
