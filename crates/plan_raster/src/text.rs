//! Eingebetteter 5×7 Bitmap-Font für Maßbeschriftungen und Schriftfeld.
//!
//! Nur ASCII 32–126; andere Zeichen werden als Leerraum übersprungen.

use image::{Rgb, RgbImage};

use crate::draw::blend_pixel;

const CHAR_WIDTH: usize = 5;
const CHAR_HEIGHT: usize = 7;

/// Zeichnet `text` mit der oberen linken Ecke bei (`x`, `y`).
///
/// `scale` vervielfacht jedes Font-Pixel zu einem `scale`×`scale`-Block,
/// Pixel außerhalb des Bildes werden verworfen.
pub fn draw_text(image: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>, scale: u32) {
    let scale = scale.max(1);
    let advance = (CHAR_WIDTH as i32 + 1) * scale as i32;

    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = glyph_for(ch) else {
            continue;
        };
        let origin_x = x + i as i32 * advance;
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..CHAR_WIDTH {
                if bits & (1 << (CHAR_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = origin_x + (col as u32 * scale) as i32;
                let py = y + (row as u32 * scale) as i32;
                fill_block(image, px, py, scale, color);
            }
        }
    }
}

/// Pixelbreite von `text` bei gegebener Skalierung (ohne abschließenden Abstand).
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    let scale = scale.max(1);
    count * CHAR_WIDTH as u32 * scale + (count - 1) * scale
}

/// Pixelhöhe einer Textzeile.
pub fn text_height(scale: u32) -> u32 {
    CHAR_HEIGHT as u32 * scale.max(1)
}

fn fill_block(image: &mut RgbImage, x: i32, y: i32, size: u32, color: Rgb<u8>) {
    for dy in 0..size as i32 {
        for dx in 0..size as i32 {
            blend_pixel(image, x + dx, y + dy, color, 1.0);
        }
    }
}

fn glyph_for(ch: char) -> Option<&'static [u8; CHAR_HEIGHT]> {
    let code = ch as usize;
    if !(32..=126).contains(&code) {
        return None;
    }
    Some(&FONT_5X7[code - 32])
}

/// 5×7 Bitmap-Font (ASCII 32–126).
/// Jede Zeile ist ein Byte, Bits 4–0 repräsentieren die 5 Spalten.
#[rustfmt::skip]
static FONT_5X7: [[u8; 7]; 95] = [
    // 32: ' ' (Space)
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 33: '!'
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100, 0b00000],
    // 34: '"'
    [0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 35: '#'
    [0b01010, 0b11111, 0b01010, 0b01010, 0b11111, 0b01010, 0b00000],
    // 36: '$'
    [0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100],
    // 37: '%'
    [0b11001, 0b11010, 0b00100, 0b01000, 0b01011, 0b10011, 0b00000],
    // 38: '&'
    [0b01100, 0b10010, 0b01100, 0b10101, 0b10010, 0b01101, 0b00000],
    // 39: '\''
    [0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 40: '('
    [0b00010, 0b00100, 0b01000, 0b01000, 0b00100, 0b00010, 0b00000],
    // 41: ')'
    [0b01000, 0b00100, 0b00010, 0b00010, 0b00100, 0b01000, 0b00000],
    // 42: '*'
    [0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000],
    // 43: '+'
    [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
    // 44: ','
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000],
    // 45: '-'
    [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
    // 46: '.'
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000],
    // 47: '/'
    [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000],
    // 48: '0'
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 49: '1'
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 50: '2'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
    // 51: '3'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
    // 52: '4'
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 53: '5'
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 54: '6'
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 55: '7'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 56: '8'
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 57: '9'
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
    // 58: ':'
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
    // 59: ';'
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000],
    // 60: '<'
    [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
    // 61: '='
    [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
    // 62: '>'
    [0b10000, 0b01000, 0b00100, 0b00010, 0b00100, 0b01000, 0b10000],
    // 63: '?'
    [0b01110, 0b10001, 0b00010, 0b00100, 0b00000, 0b00100, 0b00000],
    // 64: '@'
    [0b01110, 0b10001, 0b10111, 0b10101, 0b10110, 0b10000, 0b01110],
    // 65: 'A'
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    // 66: 'B'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
    // 67: 'C'
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
    // 68: 'D'
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
    // 69: 'E'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
    // 70: 'F'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
    // 71: 'G'
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
    // 72: 'H'
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    // 73: 'I'
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 74: 'J'
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
    // 75: 'K'
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
    // 76: 'L'
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
    // 77: 'M'
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
    // 78: 'N'
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
    // 79: 'O'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    // 80: 'P'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
    // 81: 'Q'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
    // 82: 'R'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
    // 83: 'S'
    [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
    // 84: 'T'
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    // 85: 'U'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    // 86: 'V'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
    // 87: 'W'
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
    // 88: 'X'
    [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001],
    // 89: 'Y'
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
    // 90: 'Z'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
    // 91: '['
    [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
    // 92: '\'
    [0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000, 0b00000],
    // 93: ']'
    [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
    // 94: '^'
    [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000],
    // 95: '_'
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
    // 96: '`'
    [0b01000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 97: 'a'
    [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
    // 98: 'b'
    [0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
    // 99: 'c'
    [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
    // 100: 'd'
    [0b00001, 0b00001, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111],
    // 101: 'e'
    [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
    // 102: 'f'
    [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
    // 103: 'g'
    [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
    // 104: 'h'
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
    // 105: 'i'
    [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 106: 'j'
    [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
    // 107: 'k'
    [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
    // 108: 'l'
    [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 109: 'm'
    [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10101, 0b10001],
    // 110: 'n'
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
    // 111: 'o'
    [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
    // 112: 'p'
    [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
    // 113: 'q'
    [0b00000, 0b00000, 0b01111, 0b10001, 0b01111, 0b00001, 0b00001],
    // 114: 'r'
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
    // 115: 's'
    [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
    // 116: 't'
    [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
    // 117: 'u'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
    // 118: 'v'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
    // 119: 'w'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
    // 120: 'x'
    [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
    // 121: 'y'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
    // 122: 'z'
    [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
    // 123: '{'
    [0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010],
    // 124: '|'
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    // 125: '}'
    [0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000],
    // 126: '~'
    [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000],
];
