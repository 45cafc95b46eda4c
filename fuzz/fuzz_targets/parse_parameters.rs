#![no_main]

use libfuzzer_sys::fuzz_target;
use strest_dapr::params::{ParameterSet, parse_parameters};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(params) = parse_parameters(input) {
            debug_assert_eq!(params.method(), params.method().trim());
            let rendered = params.to_string();
            if !rendered.is_empty() {
                let reparsed: Result<ParameterSet, _> = rendered.parse();
                debug_assert_eq!(reparsed.ok(), Some(params));
            }
        }
    }
});
