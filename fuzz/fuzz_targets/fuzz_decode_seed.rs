#![no_main]

use libfuzzer_sys::fuzz_target;
use strkey::codec;

fuzz_target!(|data: &str| {
    if let Ok((public, raw)) = codec::decode_seed(data) {
        assert!(public.is_public());
        assert_eq!(codec::encode_seed(public, &raw).ok().as_deref(), Some(data));
    }
});
