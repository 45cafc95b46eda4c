#![no_main]

use libfuzzer_sys::fuzz_target;
use strest_dapr::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed: Option<ConfigFile> = toml::from_str(input).ok();
        if let Ok(args) = strest_dapr::fuzzing::apply_config_from_toml(input) {
            debug_assert!(args.requests.get() > 0);
            if let Some(config) = parsed {
                debug_assert!(config.payload.is_none() || config.payload_file.is_none());
                if config.url.is_some() {
                    debug_assert_eq!(args.url, config.url);
                }
            }
        }
    }
});
