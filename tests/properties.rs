//! Property tests over arbitrary input

use jsonlex::{Lexer, TokenKind};
use proptest::prelude::*;

/// Bytes biased toward JSON punctuation so the scanners get exercised
fn json_ish() -> impl Strategy<Value = Vec<u8>> {
    let byte = prop_oneof![
        3 => prop::sample::select(b"{}[]:,\"\\-+.eE0123456789 \n\ttrufalsn/bu".to_vec()),
        1 => any::<u8>(),
    ];
    prop::collection::vec(byte, 0..64)
}

proptest! {
    #[test]
    fn every_call_makes_progress(input in json_ish()) {
        let mut lexer = Lexer::new(&input);
        // each token consumes at least one byte
        for _ in 0..=input.len() {
            let before = lexer.offset();
            let token = lexer.next_token();
            if token.is_eof() {
                prop_assert_eq!(lexer.offset(), input.len());
                return Ok(());
            }
            prop_assert!(lexer.offset() > before);
        }
        prop_assert!(false, "no EndOfInput within {} calls", input.len() + 1);
    }

    #[test]
    fn end_of_input_repeats(input in json_ish()) {
        let mut lexer = Lexer::new(&input);
        while !lexer.next_token().is_eof() {}
        for _ in 0..3 {
            let token = lexer.next_token();
            prop_assert_eq!(token.kind, TokenKind::EndOfInput);
            prop_assert_eq!(token.literal, "");
        }
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(input in json_ish()) {
        let tokens = Lexer::new(&input).tokenize();
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end <= input.len());
            if !token.is_eof() {
                prop_assert!(!token.span.is_empty());
            }
            last_end = token.span.end;
        }
    }

    #[test]
    fn literals_are_substrings_of_valid_input(input in "[ -~\n\tŧ€]{0,48}") {
        let tokens = Lexer::new(input.as_bytes()).tokenize();
        for token in tokens {
            let raw = &input[token.span.start..token.span.end];
            prop_assert!(raw.contains(token.literal.as_str()), "{:?} not in {:?}", token.literal, raw);
            if token.kind == TokenKind::String {
                prop_assert_eq!(format!("\"{}\"", token.literal), raw);
            } else if token.kind != TokenKind::Illegal {
                prop_assert_eq!(token.literal.as_str(), raw);
            }
        }
    }

    #[test]
    fn legal_literals_are_verbatim(input in json_ish()) {
        for token in Lexer::new(&input).tokenize() {
            let raw = &input[token.span.start..token.span.end];
            match token.kind {
                TokenKind::Illegal => {}
                TokenKind::String => {
                    prop_assert_eq!(token.literal.as_bytes(), &raw[1..raw.len() - 1]);
                }
                _ => {
                    prop_assert_eq!(token.literal.as_bytes(), raw);
                }
            }
        }
    }

    #[test]
    fn legal_numbers_round_trip(
        int in "-?[0-9]{1,6}",
        frac in proptest::option::of("[0-9]{1,4}"),
        exp in proptest::option::of("[eE][+-]?[0-9]{1,3}"),
    ) {
        let mut text = int;
        if let Some(frac) = frac {
            text.push('.');
            text.push_str(&frac);
        }
        if let Some(exp) = exp {
            text.push_str(&exp);
        }
        let tokens = Lexer::new(text.as_bytes()).tokenize();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].literal, &text);
    }
}
