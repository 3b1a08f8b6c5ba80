#![no_main]

use libfuzzer_sys::fuzz_target;
use strkey::{parse_decorated_key_pair, parse_decorated_token, parse_decorated_user_key_pair};

fuzz_target!(|data: &str| {
    let _ = parse_decorated_token(data);
    let _ = parse_decorated_key_pair(data);
    let _ = parse_decorated_user_key_pair(data);
});
