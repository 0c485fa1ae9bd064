#![no_main]

use inicore::parse_shorthand::parse_shorthand;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        _ = parse_shorthand(s);
    }
});
