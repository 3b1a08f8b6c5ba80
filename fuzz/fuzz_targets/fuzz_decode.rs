#![no_main]

use libfuzzer_sys::fuzz_target;
use strkey::codec;
use strkey::PrefixByte;

fuzz_target!(|data: &str| {
    // Decoding against every category should never panic
    for prefix in [
        PrefixByte::Operator,
        PrefixByte::Account,
        PrefixByte::User,
        PrefixByte::Server,
        PrefixByte::Cluster,
        PrefixByte::Private,
    ] {
        if let Ok(payload) = codec::decode(prefix, data) {
            // A successful decode must re-encode to the same text
            assert_eq!(codec::encode(prefix, &payload).ok().as_deref(), Some(data));
        }
    }
    let _ = codec::prefix(data);
    let _ = codec::is_valid_encoding(data);
});
