use super::*;

#[test]
fn empty_input_yields_neutral_gray() {
    let empty: [&str; 0] = [];
    assert_eq!(combine_colors(empty, BlendMode::Naive).unwrap(), NEUTRAL_HEX);
    assert_eq!(combine_colors(empty, BlendMode::Linear).unwrap(), NEUTRAL_HEX);
}

#[test]
fn naive_midpoint_of_black_and_white() {
    let combined = combine_colors(["#000000", "#ffffff"], BlendMode::Naive).unwrap();
    assert_eq!(combined, "#808080");
}

#[test]
fn linear_midpoint_of_black_and_white() {
    // Linear average of 0.0 and 1.0 is 0.5; encoding 0.5 through the sRGB
    // OETF gives 1.055 * 0.5^(1/2.4) - 0.055 = 0.7354, i.e. channel 188.
    let combined = combine_colors(["#000000", "#ffffff"], BlendMode::Linear).unwrap();
    assert_eq!(combined, "#bcbcbc");
    assert_ne!(combined, "#808080");
}

#[test]
fn linear_midpoint_of_red_and_blue() {
    assert_eq!(
        combine_colors(["#ff0000", "#0000ff"], BlendMode::Naive).unwrap(),
        "#800080"
    );
    assert_eq!(
        combine_colors(["#ff0000", "#0000ff"], BlendMode::Linear).unwrap(),
        "#bc00bc"
    );
}

#[test]
fn single_color_is_identity_naive() {
    for hex in ["#000000", "#ffffff", "#ff0000", "#1a2b3c", "#808080"] {
        assert_eq!(combine_colors([hex], BlendMode::Naive).unwrap(), hex);
    }
}

#[test]
fn single_color_round_trips_within_one_step_linear() {
    for hex in ["#000000", "#ffffff", "#ff0000", "#1a2b3c", "#808080", "#0a0b0c"] {
        let expected = Rgb::parse(hex).unwrap();
        let combined = combine_colors([hex], BlendMode::Linear).unwrap();
        let actual = Rgb::parse(&combined).unwrap();
        for (a, b) in [
            (actual.r, expected.r),
            (actual.g, expected.g),
            (actual.b, expected.b),
        ] {
            assert!(
                a.abs_diff(b) <= 1,
                "{hex} drifted to {combined} through a linear round trip"
            );
        }
    }
}

#[test]
fn result_does_not_depend_on_input_order() {
    let colors = ["#ff0000", "#00ff00", "#0000ff", "#123456"];
    let mut permuted = colors;
    permuted.reverse();
    let rotated = ["#123456", "#ff0000", "#00ff00", "#0000ff"];
    for mode in [BlendMode::Naive, BlendMode::Linear] {
        let base = combine_colors(colors, mode).unwrap();
        assert_eq!(combine_colors(permuted, mode).unwrap(), base);
        assert_eq!(combine_colors(rotated, mode).unwrap(), base);
    }
}

#[test]
fn output_is_always_seven_lowercase_chars() {
    let inputs = [
        vec!["#FFFFFF"],
        vec!["ABCDEF", "#012345"],
        vec!["#ff00aa", "#00ff00", "#123456"],
    ];
    for hexes in &inputs {
        for mode in [BlendMode::Naive, BlendMode::Linear] {
            let combined = combine_colors(hexes.iter().copied(), mode).unwrap();
            assert_eq!(combined.len(), 7);
            assert!(combined.starts_with('#'));
            assert!(combined[1..]
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}

#[test]
fn uppercase_and_unprefixed_inputs_parse() {
    assert_eq!(Rgb::parse("A1B2C3").unwrap(), Rgb::parse("#a1b2c3").unwrap());
    assert_eq!(
        combine_colors(["CCCCCC"], BlendMode::Naive).unwrap(),
        "#cccccc"
    );
}

#[test]
fn malformed_hex_is_rejected() {
    for bad in ["", "#", "12345", "#1234567", "xxyyzz", "#12 456", "##12345"] {
        let err = combine_colors([bad], BlendMode::Naive).unwrap_err();
        assert_eq!(err, InvalidColorFormat(bad.to_string()));
        assert!(combine_colors([bad], BlendMode::Linear).is_err());
    }
}

#[test]
fn one_bad_record_poisons_the_whole_combination() {
    let err = combine_colors(["#ffffff", "nope", "#000000"], BlendMode::Naive).unwrap_err();
    assert_eq!(err.0, "nope");
}

#[test]
fn naive_rounding_is_half_up() {
    // 255 + 0 + 128 = 383; 383 / 3 = 127.67 -> 128. 0 + 0 + 1 = 1/3 -> 0.
    assert_eq!(
        combine_colors(["#ff0001", "#000000", "#800000"], BlendMode::Naive).unwrap(),
        "#800000"
    );
}
