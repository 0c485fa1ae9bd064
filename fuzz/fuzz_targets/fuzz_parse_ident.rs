#![no_main]

use inicore::parse_ident::is_valid_name;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        _ = is_valid_name(s);
    }
});
