//! Helvetica text measurement and `WinAnsiEncoding`.
//!
//! The report uses the standard Type1 font Helvetica, which every PDF reader
//! provides, so no font program is embedded. Advance widths are the AFM
//! values in 1/1000 em. Characters WinAnsi cannot encode are replaced by `?`
//! both when measuring and when drawing, so measured and drawn text agree.
//!
//! The substitution is lossy: text outside Latin-1 and the WinAnsi extras
//! (Greek, Cyrillic, CJK, emoji, most math symbols) prints as `?`. Model
//! replies are requested in English, which keeps this rare in practice.

/// PDF base font name of the report font.
pub const BASE_FONT: &str = "Helvetica";

const REPLACEMENT: u8 = b'?';

/// Advance widths for the printable ASCII range `0x20..=0x7E`.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Advance widths for the Latin-1 range `0xA0..=0xFF`.
const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // nbsp..macron
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // degree..questiondown
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // Agrave..Idieresis
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // Eth..germandbls
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // agrave..idieresis
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // eth..ydieresis
];

/// Encode a character as a single WinAnsi byte, if it has one.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

/// Encode text for a `Tj` operand, substituting `?` for unencodable characters.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(REPLACEMENT))
        .collect()
}

/// Advance width of one encoded byte in 1/1000 em.
fn byte_width(byte: u8) -> u16 {
    match byte {
        0x20..=0x7e => ASCII_WIDTHS[(byte - 0x20) as usize],
        0x82 | 0x91 | 0x92 => 222,
        0x84 | 0x88 | 0x8b | 0x93 | 0x94 | 0x98 | 0x9b => 333,
        0x95 => 350,
        0x9a | 0x9e => 500,
        0x80 | 0x83 | 0x86 | 0x87 | 0x96 => 556,
        0x8e => 611,
        0x8a | 0x9f => 667,
        0x9c => 944,
        0x85 | 0x89 | 0x8c | 0x97 | 0x99 => 1000,
        0xa0..=0xff => LATIN1_WIDTHS[(byte - 0xa0) as usize],
        // 0x81, 0x8D, 0x8F, 0x90 and 0x9D are never produced by the encoder.
        _ => ASCII_WIDTHS[(REPLACEMENT - 0x20) as usize],
    }
}

/// Width of a single character at `size` points.
pub fn char_width(c: char, size: f32) -> f32 {
    let byte = win_ansi_byte(c).unwrap_or(REPLACEMENT);
    f32::from(byte_width(byte)) * size / 1000.0
}

/// Width of `text` at `size` points.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().map(|c| char_width(c, size)).sum()
}

/// Break `text` into lines no wider than `max_width` at `size` points.
///
/// Greedy word wrap on whitespace. A word wider than a whole line is broken
/// between characters. Always returns at least one (possibly empty) line.
pub fn wrap_text(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let space = char_width(' ', size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = text_width(word, size);

        if !current.is_empty() && current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let w = char_width(c, size);
            if !current.is_empty() && current_width + w > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
