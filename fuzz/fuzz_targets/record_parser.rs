#![no_main]

use libfuzzer_sys::fuzz_target;
use trazar::config::TraceConfig;
use trazar::site::CallSite;
use trazar::stack::CallStack;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes may or may not be a valid observation record; neither
    // parsing nor observing a parsed record may panic.
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(site) = serde_json::from_str::<CallSite>(input) {
            let mut stack = CallStack::new();
            let _ = stack.observe(&site, &TraceConfig::default());
        }
    }
});
