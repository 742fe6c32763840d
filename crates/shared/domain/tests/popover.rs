use apis_domain::popover::{PopoverForm, PopoverKey};
use strum::{EnumCount, IntoEnumIterator};

const IDENTIFIERS: [&str; 19] = [
    "resource-server-name",
    "resource-server-description",
    "resource-server-key",
    "resource-server-secret",
    "client-key",
    "client-secret",
    "resource-server-scope",
    "resource-server-thumbNailUrl",
    "resource-server-contactName",
    "resource-server-contactEmail",
    "client-name",
    "client-description",
    "client-resource-server",
    "client-scope",
    "client-thumbNailUrl",
    "client-contactName",
    "client-contactEmail",
    "client-redirectUri",
    "client-attributes",
];

#[test]
fn identifiers_match_form_fields_in_order() {
    assert_eq!(PopoverKey::COUNT, IDENTIFIERS.len());
    let keys: Vec<&str> = PopoverKey::iter().map(PopoverKey::as_str).collect();
    assert_eq!(keys, IDENTIFIERS);
}

#[test]
fn identifiers_parse_back_to_keys() {
    for id in IDENTIFIERS {
        let key: PopoverKey = id.parse().expect("known identifier");
        assert_eq!(key.to_string(), id);
    }
}

#[test]
fn parsing_is_case_sensitive() {
    assert!("Client-Name".parse::<PopoverKey>().is_err());
    assert!("client-thumbnailurl".parse::<PopoverKey>().is_err());
    assert!("".parse::<PopoverKey>().is_err());
}

#[test]
fn forms_follow_the_identifier_prefix() {
    assert_eq!(PopoverKey::ClientKey.form(), PopoverForm::Client);
    assert_eq!(PopoverKey::ClientSecret.form(), PopoverForm::Client);
    assert_eq!(PopoverKey::ResourceServerKey.form(), PopoverForm::ResourceServer);
    assert_eq!(PopoverKey::ClientName.form(), PopoverForm::Client);

    for key in PopoverKey::iter() {
        let prefix = format!("{}-", key.form());
        assert!(key.as_str().starts_with(&prefix), "{key} is not on the {} form", key.form());
    }

    let client_fields = PopoverKey::iter().filter(|k| k.form() == PopoverForm::Client).count();
    assert_eq!(client_fields, 11);
}

#[test]
fn form_names_are_kebab_case() {
    assert_eq!(PopoverForm::ResourceServer.to_string(), "resource-server");
    assert_eq!("client".parse::<PopoverForm>().ok(), Some(PopoverForm::Client));
}

#[test]
fn help_text_is_never_empty() {
    for key in PopoverKey::iter() {
        let text = key.help_text();
        assert!(!text.title.is_empty(), "{key} has an empty title");
        assert!(!text.description.is_empty(), "{key} has an empty description");
    }
}

#[test]
fn keys_serialize_as_identifiers() {
    let json = serde_json::to_string(&PopoverKey::ResourceServerThumbNailUrl).unwrap();
    assert_eq!(json, "\"resource-server-thumbNailUrl\"");

    let key: PopoverKey = serde_json::from_str("\"client-redirectUri\"").unwrap();
    assert_eq!(key, PopoverKey::ClientRedirectUri);

    let err = serde_json::from_str::<PopoverKey>("\"client-unknown\"").unwrap_err();
    assert!(err.to_string().contains("client-unknown"));
}
