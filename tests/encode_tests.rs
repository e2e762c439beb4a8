//! Encoding tests — the segment table is a protocol constant, so every row
//! is asserted verbatim, place by place, alongside the range edge cases.

use glyphlib::{encode, segments_for, GlyphError, Place, Segment};
use pretty_assertions::assert_eq;

fn segs(pairs: &[(u8, u8)]) -> Vec<Segment> {
    pairs.iter().map(|&(a, b)| Segment::new(a, b)).collect()
}

fn assert_table(place: Place, expected: [&[(u8, u8)]; 9]) {
    for (i, row) in expected.iter().enumerate() {
        let digit = i as i32 + 1;
        assert_eq!(
            segments_for(place, digit),
            segs(row).as_slice(),
            "{:?} digit {}",
            place,
            digit
        );
    }
}

// ─── Table rows, verbatim ───────────────────────────────────────────

#[test]
fn units_rows_match_the_convention() {
    assert_table(
        Place::Units,
        [
            &[(1, 2)],
            &[(4, 5)],
            &[(1, 5)],
            &[(4, 2)],
            &[(1, 2), (4, 2)],
            &[(2, 5)],
            &[(1, 2), (2, 5)],
            &[(2, 5), (4, 5)],
            &[(1, 2), (2, 5), (4, 5)],
        ],
    );
}

#[test]
fn tens_rows_match_the_convention() {
    assert_table(
        Place::Tens,
        [
            &[(0, 1)],
            &[(3, 4)],
            &[(3, 1)],
            &[(0, 4)],
            &[(0, 1), (0, 4)],
            &[(0, 3)],
            &[(0, 3), (0, 1)],
            &[(0, 3), (3, 4)],
            &[(0, 1), (0, 3), (3, 4)],
        ],
    );
}

#[test]
fn hundreds_rows_match_the_convention() {
    assert_table(
        Place::Hundreds,
        [
            &[(10, 11)],
            &[(7, 8)],
            &[(10, 8)],
            &[(7, 11)],
            &[(7, 11), (10, 11)],
            &[(8, 11)],
            &[(10, 11), (8, 11)],
            &[(7, 8), (8, 11)],
            &[(7, 8), (10, 11), (8, 11)],
        ],
    );
}

#[test]
fn thousands_rows_match_the_convention() {
    assert_table(
        Place::Thousands,
        [
            &[(9, 10)],
            &[(6, 7)],
            &[(6, 10)],
            &[(9, 7)],
            &[(9, 7), (9, 10)],
            &[(6, 9)],
            &[(6, 9), (9, 10)],
            &[(6, 9), (6, 7)],
            &[(6, 9), (6, 7), (9, 10)],
        ],
    );
}

// ─── Concrete encodings ─────────────────────────────────────────────

#[test]
fn zero_encodes_to_nothing() {
    assert_eq!(encode(0).unwrap(), Vec::<Segment>::new());
}

#[test]
fn five_encodes_to_the_two_unit_strokes() {
    assert_eq!(encode(5).unwrap(), segs(&[(1, 2), (4, 2)]));
}

#[test]
fn twelve_thirty_four_encodes_place_by_place() {
    // 1000 → (9,10); 200 → (7,8); 30 → (3,1); 4 → (4,2)
    assert_eq!(encode(1234).unwrap(), segs(&[(9, 10), (7, 8), (3, 1), (4, 2)]));
}

#[test]
fn nines_across_all_places_use_twelve_strokes() {
    let segments = encode(9999).unwrap();
    assert_eq!(segments.len(), 12, "four groups of three strokes");
    assert_eq!(
        segments,
        segs(&[
            (6, 9), (6, 7), (9, 10),   // thousands
            (7, 8), (10, 11), (8, 11), // hundreds
            (0, 1), (0, 3), (3, 4),    // tens
            (1, 2), (2, 5), (4, 5),    // units
        ])
    );
}

// ─── Range properties ───────────────────────────────────────────────

/// Stroke count per digit: 0 draws nothing; 5, 7, 8 are two-stroke digits;
/// 9 is the only three-stroke digit.
const STROKES_PER_DIGIT: [usize; 10] = [0, 1, 1, 1, 1, 2, 1, 2, 2, 3];

#[test]
fn every_number_encodes_its_nonzero_digits() {
    for n in 0..=9999 {
        let segments = encode(n).unwrap();

        let digits = [n / 1000, (n % 1000) / 100, (n % 100) / 10, n % 10];
        let expected_len: usize = digits.iter().map(|&d| STROKES_PER_DIGIT[d as usize]).sum();
        assert_eq!(segments.len(), expected_len, "stroke count of {}", n);

        for seg in &segments {
            assert!(seg.start <= 11 && seg.end <= 11, "anchors of {} on grid", n);
        }

        // The list is exactly the table rows of the nonzero digits, in
        // thousands → hundreds → tens → units order.
        let mut expected = Vec::new();
        for place in Place::DRAW_ORDER {
            expected.extend_from_slice(segments_for(place, place.digit_of(n)));
        }
        assert_eq!(segments, expected, "group order of {}", n);
    }
}

#[test]
fn out_of_range_fails_with_the_offending_number() {
    assert_eq!(encode(-1), Err(GlyphError::OutOfRange(-1)));
    assert_eq!(encode(-9999), Err(GlyphError::OutOfRange(-9999)));
    assert_eq!(encode(10000), Err(GlyphError::OutOfRange(10000)));
    assert_eq!(encode(i32::MAX), Err(GlyphError::OutOfRange(i32::MAX)));
}
