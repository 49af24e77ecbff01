//! Property-based tests for the round-trip guarantees of both codecs.

use proptest::prelude::*;
use rle_codec::*;

/// Text with long runs, so counts above 9 show up.
fn runny_text(alphabet: &'static str) -> impl Strategy<Value = String> {
    let chars: Vec<char> = alphabet.chars().collect();
    prop::collection::vec((prop::sample::select(chars), 1usize..30), 0..20).prop_map(
        |runs| {
            runs.into_iter()
                .flat_map(|(c, n)| std::iter::repeat(c).take(n))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_plain_roundtrip(s in "[^0-9,:]{0,64}") {
        let encoded = encode_text(&s, Format::Plain);
        prop_assert_eq!(decode_text(&encoded, Format::Plain), s);
    }

    #[test]
    fn prop_plain_roundtrip_long_runs(s in runny_text("ab .ж")) {
        let encoded = encode_text(&s, Format::Plain);
        prop_assert_eq!(decode_text(&encoded, Format::Plain), s);
    }

    #[test]
    fn prop_annotated_roundtrip(s in "[^,:]{0,64}") {
        let encoded = encode_text(&s, Format::Annotated);
        prop_assert_eq!(decode_text(&encoded, Format::Annotated), s);
    }

    #[test]
    fn prop_annotated_roundtrip_long_runs(s in runny_text("a1b2 9ж")) {
        let encoded = encode_text(&s, Format::Annotated);
        prop_assert_eq!(decode_text(&encoded, Format::Annotated), s);
    }

    #[test]
    fn prop_prepared_text_roundtrips(s in "[^,:]{0,64}") {
        let prepared = prepare_text(&s, Format::Plain);
        let encoded = encode_text(&prepared, Format::Plain);
        prop_assert_eq!(decode_text(&encoded, Format::Plain), prepared.into_owned());
    }

    #[test]
    fn prop_strip_digits_idempotent(s in any::<String>()) {
        let once = strip_digits(&s);
        prop_assert!(!has_digits(&once));
        prop_assert_eq!(strip_digits(&once), once);
    }

    #[test]
    fn prop_runs_are_maximal(s in runny_text("xyz")) {
        let found = runs(s.chars());
        prop_assert!(found.iter().all(|run| run.count >= 1));
        prop_assert!(found.windows(2).all(|w| w[0].value != w[1].value));
        prop_assert_eq!(found.iter().map(|run| run.count).sum::<usize>(), s.chars().count());
    }

    #[test]
    fn prop_tokens_roundtrip(tokens in prop::collection::vec("[^|]{0,8}", 0..40)) {
        let encoded = encode_tokens(&tokens);
        prop_assert_eq!(decode_tokens(&encoded), tokens.clone());
        prop_assert_eq!(decode_tokens_strict(&encoded).unwrap(), tokens);
    }

    #[test]
    fn prop_raster_roundtrip(
        (width, height, rgba) in (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
            (Just(w), Just(h), prop::collection::vec(any::<u8>(), w * h * 4))
        })
    ) {
        let tokens = pixels_to_tokens(&rgba, width, height).unwrap();
        prop_assert_eq!(tokens.len(), width * height);
        prop_assert_eq!(tokens_to_pixels(&tokens, width, height).unwrap(), rgba.clone());

        let image = decode_image(&encode_image(&rgba, width, height).unwrap()).unwrap();
        prop_assert_eq!(image.pixels, rgba);
    }

    #[test]
    fn prop_decoders_never_panic(s in "([0-9]{0,3}[:,|a-c]){0,12}") {
        let _ = decode_text(&s, Format::Plain);
        let _ = decode_text(&s, Format::Annotated);
        let _ = decode_tokens(&s);
        let _ = decode_image(&s);
    }
}
