//! Tests for postage classification - dimensional fits and girth brackets

use postrate::{classify, Category, MailPiece};
use rstest::rstest;

fn piece(length: f64, height: f64, thickness: f64) -> MailPiece {
    MailPiece {
        length,
        height,
        thickness,
        origin: "100".into(),
        destination: "200".into(),
    }
}

#[rstest]
// regular card, low and high edge of every band
#[case(3.5, 3.5, 0.007, Category::RegularCard)]
#[case(4.25, 6.0, 0.016, Category::RegularCard)]
#[case(4.0, 5.0, 0.01, Category::RegularCard)]
// large card (height pushed past the regular-card band)
#[case(4.25, 7.0, 0.007, Category::LargeCard)]
#[case(6.0, 11.5, 0.015, Category::LargeCard)]
// regular envelope (thickness rules out both cards)
#[case(3.5, 5.0, 0.16, Category::RegularEnvelope)]
#[case(6.125, 11.5, 0.25, Category::RegularEnvelope)]
// large envelope (height past the regular-envelope band)
#[case(6.125, 12.0, 0.25, Category::LargeEnvelope)]
#[case(24.0, 18.0, 0.5, Category::LargeEnvelope)]
fn test_regular_category_boundaries(
    #[case] length: f64,
    #[case] height: f64,
    #[case] thickness: f64,
    #[case] expected: Category,
) {
    assert_eq!(classify(&piece(length, height, thickness)), expected);
}

#[test]
fn test_declaration_order_wins_on_overlap() {
    // the card bands share the (4.25, 6, 0.007) corner; the regular card is
    // declared first and takes it
    assert_eq!(classify(&piece(4.25, 6.0, 0.007)), Category::RegularCard);

    // same for the envelope corner at (6.125, 11, 0.25)
    assert_eq!(classify(&piece(6.125, 11.0, 0.25)), Category::RegularEnvelope);
}

#[test]
fn test_just_outside_every_regular_band_is_a_package() {
    // thickness below every regular band, small girth
    assert_eq!(classify(&piece(4.0, 9.0, 0.01)), Category::Package);
    // length below the card bands
    assert_eq!(classify(&piece(3.4, 3.5, 0.007)), Category::Package);
}

#[test]
fn test_girth_bracket_edges() {
    // girth = 2 * height + 2 * length; thickness 3.0 fits no regular band
    assert_eq!(classify(&piece(21.0, 21.0, 3.0)), Category::Package); // exactly 84
    assert_eq!(
        classify(&piece(21.0, 21.00000005, 3.0)), // a hair over 84
        Category::LargePackage
    );
    assert_eq!(classify(&piece(32.5, 32.5, 3.0)), Category::LargePackage); // exactly 130
    assert_eq!(classify(&piece(32.5, 32.6, 3.0)), Category::Unmailable); // over 130
    assert_eq!(classify(&piece(40.0, 40.0, 3.0)), Category::Unmailable);
}

#[test]
fn test_zero_girth_is_still_a_package() {
    assert_eq!(classify(&piece(0.0, 0.0, 3.0)), Category::Package);
}

#[test]
fn test_girth_ignores_thickness() {
    // a very thick but otherwise small piece stays a plain package
    assert_eq!(classify(&piece(10.0, 10.0, 100.0)), Category::Package);
}
