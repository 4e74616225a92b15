//! # Standard Fonts
//!
//! The report only uses the Helvetica family, one of the fourteen standard
//! Type1 fonts every PDF reader provides, so no font program is embedded.
//! Glyph widths for the printable ASCII range come from the Adobe font
//! metrics and drive text wrapping and alignment. Other characters are
//! measured at the width of a digit.
//!
//! Text is written in WinAnsi (Windows-1252), which covers Western
//! European scripts only. Characters outside it, such as Cyrillic, Greek
//! or CJK names, print as `?`; the PDF writer logs a warning when a
//! document contains any.

/// Fonts available to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
    Oblique,
}

/// Width of characters outside the ASCII table, in 1/1000 em.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl Font {
    pub const ALL: [Font; 3] = [Self::Regular, Self::Bold, Self::Oblique];

    /// Resource name inside page dictionaries.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
            Self::Oblique => "F3",
        }
    }

    /// PostScript name of the standard font.
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Oblique => "Helvetica-Oblique",
        }
    }

    fn glyph_width(&self, c: char) -> u16 {
        let table = match self {
            Self::Bold => &HELVETICA_BOLD,
            Self::Regular | Self::Oblique => &HELVETICA,
        };
        match c {
            ' '..='~' => table[c as usize - 32],
            _ => FALLBACK_WIDTH,
        }
    }

    /// Rendered width of `text` at `size` points.
    pub fn width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.glyph_width(c))).sum();
        f64::from(units) * size / 1000.0
    }
}

/// Encode text as WinAnsi bytes. Characters the encoding lacks become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}

/// Number of characters in `text` that WinAnsi cannot represent.
pub fn unencodable(text: &str) -> usize {
    text.chars().filter(|&c| win_ansi_byte(c).is_none()).count()
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\t' => b' ',
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}
