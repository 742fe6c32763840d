use apis_domain::config::{MissingKeyPolicy, PopoverConfig};
use serde_json::json;

#[test]
fn config_defaults_fail_fast() {
    let cfg = PopoverConfig::default();
    assert_eq!(cfg.missing_key, MissingKeyPolicy::FailFast);
}

#[test]
fn popover_config_deserializes() {
    let cfg: PopoverConfig =
        serde_json::from_value(json!({ "missing_key": "blank" })).expect("config deserialize");
    assert_eq!(cfg.missing_key, MissingKeyPolicy::Blank);

    let cfg: PopoverConfig = serde_json::from_value(json!({})).expect("empty config deserialize");
    assert_eq!(cfg.missing_key, MissingKeyPolicy::FailFast);
}

#[test]
fn unknown_policy_is_rejected() {
    let result = serde_json::from_value::<PopoverConfig>(json!({ "missing_key": "ignore" }));
    assert!(result.is_err());
}
