//! Helvetica metrics for heading centring.
//!
//! Headings use the built-in Type1 Helvetica font, which PDF viewers ship
//! without embedding. Centring a string requires its advance width, so the
//! standard AFM widths for the printable ASCII range are reproduced here
//! (units of 1/1000 em, indexed from space).

/// Advance widths for ASCII 32..=126, in 1/1000 em.
const WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // ' ' ! " # $ % & ' ( )
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // * + , - . / 0 1 2 3
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // 4 5 6 7 8 9 : ; < =
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // > ? @ A B C D E F G
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // H I J K L M N O P Q
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // R S T U V W X Y Z [
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // \ ] ^ _ ` a b c d e
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // f g h i j k l m n o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // p q r s t u v w x y
    500, 334, 260, 334, 584, // z { | } ~
];

/// Fallback width for characters outside the table. Matches the figure
/// width, which keeps centring reasonable for stray symbols.
const FALLBACK_WIDTH: u16 = 556;

/// Computes the advance width of `text` at the given font size.
#[must_use]
pub fn text_width(text: &str, size: f64) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (32..=126).contains(&code) {
                u32::from(WIDTHS[(code - 32) as usize])
            } else {
                u32::from(FALLBACK_WIDTH)
            }
        })
        .sum();
    f64::from(units) * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_width() {
        assert!(text_width("", 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn digits_are_figure_width() {
        // All digits share the 556/1000 em figure width.
        let w = text_width("0123456789", 10.0);
        assert!((w - 55.6).abs() < 1e-9);
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let small = text_width("V = 10k", 5.0);
        let large = text_width("V = 10k", 10.0);
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn non_ascii_uses_fallback() {
        let w = text_width("µ", 10.0);
        assert!((w - 5.56).abs() < 1e-9);
    }
}
