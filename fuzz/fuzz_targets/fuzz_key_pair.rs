#![no_main]

use libfuzzer_sys::fuzz_target;
use strkey::KeyPair;

fuzz_target!(|data: &str| {
    // Classify and build from arbitrary text; should never panic
    if let Ok(pair) = KeyPair::try_from(data) {
        if let Ok(signature) = pair.sign(b"fuzz") {
            assert!(pair.verify(b"fuzz", &signature).is_ok());
        }
        let _ = pair.verify(b"fuzz", data.as_bytes());
    }
});
