#![no_main]

use libfuzzer_sys::fuzz_target;
use strest_dapr::resolver::PreparedRequest;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(request) = strest_dapr::fuzzing::prepare_detached_input(input, data) {
            debug_assert_eq!(request, PreparedRequest::Empty);
        }
    }
});
