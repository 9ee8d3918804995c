#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_frontend::{parse_source, Error};

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fuzz_target!(|data: &[u8]| {
    let source = decode_source(data);
    match parse_source(&source) {
        Ok(parse) => {
            // Success or failure, the tree keeps every byte.
            assert_eq!(parse.syntax().text().to_string(), source);
            if let Some(failure) = parse.failure() {
                assert!(usize::from(failure.offset) <= source.len());
            }
        }
        Err(Error::Lex(_) | Error::Engine(_)) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }
});
