use ascii_julia::{
    ASCII_GRADIENT, AsciiGradient, Cell, Complex, GlyphMap, GridSize, JuliaSeed, escape_iterations,
    render_julia, render_julia_parallel,
};
use proptest::prelude::*;

fn seed_strategy() -> impl Strategy<Value = JuliaSeed> {
    (-1.0f32..1.0, -1.0f32..1.0).prop_map(|(real, imag)| JuliaSeed::new(real, imag))
}

fn render_text(columns: i64, rows: i64, seed: JuliaSeed) -> String {
    render_julia(GridSize::clamped(columns, rows), seed, &AsciiGradient::new())
        .expect("ascii gradient render should succeed")
        .to_text()
}

proptest! {
    #[test]
    fn output_has_rows_lines_of_columns_glyphs(
        columns in 1i64..=100,
        rows in 1i64..=100,
        seed in seed_strategy(),
    ) {
        let text = render_text(columns, rows, seed);

        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(text.split_terminator('\n').count(), rows as usize);
        for line in text.split_terminator('\n') {
            prop_assert_eq!(line.len(), columns as usize);
        }
    }

    #[test]
    fn every_glyph_is_in_the_palette(
        columns in 1i64..=100,
        rows in 1i64..=100,
        seed in seed_strategy(),
    ) {
        let text = render_text(columns, rows, seed);

        for byte in text.bytes().filter(|&b| b != b'\n') {
            prop_assert!(ASCII_GRADIENT.contains(&byte), "unexpected glyph {:?}", byte as char);
        }
    }

    #[test]
    fn non_positive_extents_behave_like_one(
        columns in i64::MIN..=0,
        rows in i64::MIN..=0,
        seed in seed_strategy(),
    ) {
        prop_assert_eq!(render_text(columns, 7, seed), render_text(1, 7, seed));
        prop_assert_eq!(render_text(7, rows, seed), render_text(7, 1, seed));
    }

    #[test]
    fn oversized_extents_behave_like_one_hundred(
        columns in 101i64..=i64::MAX,
        rows in 101i64..=i64::MAX,
        seed in seed_strategy(),
    ) {
        prop_assert_eq!(render_text(columns, 3, seed), render_text(100, 3, seed));
        prop_assert_eq!(render_text(3, rows, seed), render_text(3, 100, seed));
    }

    #[test]
    fn fixed_seed_output_is_deterministic(
        columns in 1i64..=100,
        rows in 1i64..=100,
        seed in seed_strategy(),
    ) {
        prop_assert_eq!(render_text(columns, rows, seed), render_text(columns, rows, seed));
    }

    #[test]
    fn parallel_render_matches_sequential(
        columns in 1i64..=100,
        rows in 1i64..=100,
        seed in seed_strategy(),
    ) {
        let size = GridSize::clamped(columns, rows);
        let gradient = AsciiGradient::new();

        prop_assert_eq!(
            render_julia_parallel(size, seed, &gradient).unwrap(),
            render_julia(size, seed, &gradient).unwrap()
        );
    }

    #[test]
    fn iteration_counts_never_reach_the_densest_glyph(
        real in -2.0f32..2.0,
        imag in -2.0f32..2.0,
        seed in seed_strategy(),
    ) {
        let gradient = AsciiGradient::new();
        let max = gradient.max_iterations();
        let count = escape_iterations(Complex::new(real, imag), seed.into(), max);

        prop_assert!(count < gradient.max_iterations());
        prop_assert_ne!(gradient.glyph(count), b'@');
    }
}

#[test]
fn non_escaping_origin_renders_ampersand_not_at_sign() {
    let gradient = AsciiGradient::new();
    let count = escape_iterations(Complex::ZERO, Complex::ZERO, gradient.max_iterations());

    assert_eq!(count, 8);
    assert_eq!(gradient.glyph(count), b'&');
}

#[test]
fn zero_seed_fills_the_unit_disc_with_ampersands() {
    let grid = render_julia(
        GridSize::clamped(100, 100),
        JuliaSeed::new(0.0, 0.0),
        &AsciiGradient::new(),
    )
    .unwrap();

    // Row 50 and column 50 map to 4 * 100 / 201 - 2, just short of zero.
    assert_eq!(grid.glyph_at(Cell { row: 50, column: 50 }), Some(b'&'));
    // Row 0 / column 0 map to -2 - 2i, which leaves on the first step.
    assert_eq!(grid.glyph_at(Cell { row: 0, column: 0 }), Some(b' '));
}

#[test]
fn zero_seed_two_by_two_reference() {
    let text = render_text(2, 2, JuliaSeed::new(0.0, 0.0));

    assert_eq!(text, "  \n &\n");
}

#[test]
fn fixed_seed_twenty_by_ten_matches_historical_output() {
    let text = render_text(20, 10, JuliaSeed::new(-0.7, 0.27));

    let expected = concat!(
        "                    \n",
        "          ...       \n",
        "       ..:=&=:.     \n",
        "      ..:&&&&=:.    \n",
        "     ..:~&&&&&:..   \n",
        "     .~&&&&&&&&:.   \n",
        "     .~*&&&&*=:.    \n",
        "     .:~*&&&=:..    \n",
        "     ..:&&&=:..     \n",
        "       ..~~..       \n",
    );
    assert_eq!(text, expected);
}

#[test]
fn fixed_seed_thirty_two_by_twelve_matches_historical_output() {
    let size = GridSize::clamped(32, 12);
    let seed = JuliaSeed::new(-0.8, 0.156);
    let gradient = AsciiGradient::new();

    let expected = concat!(
        "                                \n",
        "                                \n",
        "            ...:+&&:...         \n",
        "          ...:=&&&&&&:...       \n",
        "         ...:~&&&&&#=~:..       \n",
        "        ..::~=*&&&&&&*::..      \n",
        "        .:~*&&&&&&&&&&&=..      \n",
        "        .:~+&&&&&&&&&+~:.       \n",
        "        ..::=&&&&&&=~::..       \n",
        "        ...:~&&&&&&#:...        \n",
        "         ...:~+&&=~:...         \n",
        "            ..:~~:..            \n",
    );
    assert_eq!(render_julia(size, seed, &gradient).unwrap().to_text(), expected);
    assert_eq!(
        render_julia_parallel(size, seed, &gradient).unwrap().to_text(),
        expected
    );
}
