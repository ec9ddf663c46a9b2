#![no_main]
use jsonlint::validate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let first = validate(data);

    // Validation is a pure function: same bytes, same answer.
    assert_eq!(first, validate(data));

    // Offsets never escape the input.
    match first {
        Ok(offset) => assert!(offset <= data.len()),
        Err(err) => assert!(err.offset <= data.len()),
    }

    // On backslash-free inputs the string boundary scanner is exact, so any
    // document the reference parser accepts must validate. (Backslash runs
    // are excluded: the lookback approximation intentionally rejects some
    // documents with trailing escaped backslashes.)
    if !data.contains(&b'\\') {
        if let Ok(text) = core::str::from_utf8(data) {
            if serde_json::from_str::<serde_json::Value>(text).is_ok() {
                assert!(first.is_ok(), "reference-accepted input rejected: {text:?}");
            }
        }
    }
});
