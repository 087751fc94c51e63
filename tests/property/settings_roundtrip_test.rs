//! Property-based tests for AppSettings serialization round-trip.

use proptest::prelude::*;
use quickurl::types::settings::{AppSettings, LoggingSettings, MenuSettings, StorageSettings};

fn arb_settings() -> impl Strategy<Value = AppSettings> {
    (
        proptest::option::of("[a-zA-Z0-9/._-]{1,40}"),
        "[a-zA-Z]{1,20}",
        prop_oneof![Just("trace"), Just("debug"), Just("info"), Just("warn"), Just("error")],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(database_path, slot_key, level, manage, quit)| AppSettings {
            storage: StorageSettings {
                database_path,
                slot_key,
            },
            logging: LoggingSettings {
                level: level.to_string(),
            },
            menu: MenuSettings {
                show_manage_item: manage,
                show_quit_item: quit,
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn settings_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).expect("serialize");
        let back: AppSettings = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back, settings);
    }
}
