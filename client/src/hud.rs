//! Score display as seven-segment digits built from rectangles

use game_core::{Rect, Score};
use glam::IVec2;

pub const DIGIT_WIDTH: i32 = 24;
pub const DIGIT_HEIGHT: i32 = 44;
pub const SEGMENT_THICKNESS: i32 = 6;
pub const DIGIT_SPACING: i32 = 8;
pub const MARGIN: i32 = 8;

// Segment bits: a (top), b (top right), c (bottom right), d (bottom),
// e (bottom left), f (top left), g (middle)
const SEG_A: u8 = 1 << 6;
const SEG_B: u8 = 1 << 5;
const SEG_C: u8 = 1 << 4;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 2;
const SEG_F: u8 = 1 << 1;
const SEG_G: u8 = 1;

const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
    SEG_B | SEG_C | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Rectangles for one digit with its top-left corner at `origin`
fn digit_rects(digit: u8, origin: IVec2, out: &mut Vec<Rect>) {
    let mask = DIGITS[(digit % 10) as usize];
    let (w, h, t) = (DIGIT_WIDTH, DIGIT_HEIGHT, SEGMENT_THICKNESS);
    let half = h / 2;

    let segments = [
        (SEG_A, IVec2::new(0, 0), IVec2::new(w, t)),
        (SEG_B, IVec2::new(w - t, 0), IVec2::new(t, half)),
        (SEG_C, IVec2::new(w - t, half), IVec2::new(t, h - half)),
        (SEG_D, IVec2::new(0, h - t), IVec2::new(w, t)),
        (SEG_E, IVec2::new(0, half), IVec2::new(t, h - half)),
        (SEG_F, IVec2::new(0, 0), IVec2::new(t, half)),
        (SEG_G, IVec2::new(0, half - t / 2), IVec2::new(w, t)),
    ];

    for (bit, offset, size) in segments {
        if mask & bit != 0 {
            out.push(Rect::new(origin + offset, size));
        }
    }
}

fn decimal_digits(value: u8) -> Vec<u8> {
    value.to_string().bytes().map(|b| b - b'0').collect()
}

/// Width in court units of a rendered number
pub fn number_width(value: u8) -> i32 {
    let count = decimal_digits(value).len() as i32;
    count * DIGIT_WIDTH + (count - 1) * DIGIT_SPACING
}

/// Rectangles for a number whose left edge is at `origin.x`
pub fn number_rects(value: u8, origin: IVec2, out: &mut Vec<Rect>) {
    let mut x = origin.x;
    for digit in decimal_digits(value) {
        digit_rects(digit, IVec2::new(x, origin.y), out);
        x += DIGIT_WIDTH + DIGIT_SPACING;
    }
}

/// Score rectangles: left player's score in the top-left corner, right
/// player's score right-aligned in the top-right corner
pub fn score_rects(score: Score, court_width: i32) -> Vec<Rect> {
    let mut rects = Vec::new();
    number_rects(score.left, IVec2::new(MARGIN, MARGIN), &mut rects);

    let right_x = court_width - MARGIN - number_width(score.right);
    number_rects(score.right, IVec2::new(right_x, MARGIN), &mut rects);
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(value: u8) -> usize {
        let mut rects = Vec::new();
        number_rects(value, IVec2::ZERO, &mut rects);
        rects.len()
    }

    #[test]
    fn test_segment_counts() {
        assert_eq!(count(8), 7);
        assert_eq!(count(1), 2);
        assert_eq!(count(0), 6);
        assert_eq!(count(7), 3);
        assert_eq!(count(11), 4);
    }

    #[test]
    fn test_digits_stay_inside_their_cell() {
        for digit in 0..10 {
            let mut rects = Vec::new();
            digit_rects(digit, IVec2::new(100, 50), &mut rects);
            for rect in rects {
                assert!(rect.left() >= 100 && rect.right() <= 100 + DIGIT_WIDTH);
                assert!(rect.top() >= 50 && rect.bottom() <= 50 + DIGIT_HEIGHT);
            }
        }
    }

    #[test]
    fn test_number_width() {
        assert_eq!(number_width(3), DIGIT_WIDTH);
        assert_eq!(number_width(10), 2 * DIGIT_WIDTH + DIGIT_SPACING);
    }

    #[test]
    fn test_score_rects_are_placed_in_corners() {
        let rects = score_rects(Score { left: 8, right: 11 }, 500);
        assert_eq!(rects.len(), 7 + 4);

        let (left, right) = rects.split_at(7);
        assert_eq!(left.iter().map(|r| r.left()).min(), Some(MARGIN));
        assert_eq!(right.iter().map(|r| r.right()).max(), Some(500 - MARGIN));
        assert!(rects.iter().all(|r| r.top() >= MARGIN));
    }
}
