//! Identifiers and texts of the help popovers shown next to the console form fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Title and long description rendered inside a single popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HelpText {
    pub title: &'static str,
    pub description: &'static str,
}

impl HelpText {
    const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }
}

/// The console form a popover belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PopoverForm {
    ResourceServer,
    Client,
}

/// Form-field identifier with an attached help popover.
///
/// The string form is the identifier used by the web form (`"client-name"`,
/// `"resource-server-thumbNailUrl"`, ...). Matching is case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
pub enum PopoverKey {
    #[strum(serialize = "resource-server-name")]
    ResourceServerName,
    #[strum(serialize = "resource-server-description")]
    ResourceServerDescription,
    #[strum(serialize = "resource-server-key")]
    ResourceServerKey,
    #[strum(serialize = "resource-server-secret")]
    ResourceServerSecret,
    #[strum(serialize = "client-key")]
    ClientKey,
    #[strum(serialize = "client-secret")]
    ClientSecret,
    #[strum(serialize = "resource-server-scope")]
    ResourceServerScope,
    #[strum(serialize = "resource-server-thumbNailUrl")]
    ResourceServerThumbNailUrl,
    #[strum(serialize = "resource-server-contactName")]
    ResourceServerContactName,
    #[strum(serialize = "resource-server-contactEmail")]
    ResourceServerContactEmail,
    #[strum(serialize = "client-name")]
    ClientName,
    #[strum(serialize = "client-description")]
    ClientDescription,
    #[strum(serialize = "client-resource-server")]
    ClientResourceServer,
    #[strum(serialize = "client-scope")]
    ClientScope,
    #[strum(serialize = "client-thumbNailUrl")]
    ClientThumbNailUrl,
    #[strum(serialize = "client-contactName")]
    ClientContactName,
    #[strum(serialize = "client-contactEmail")]
    ClientContactEmail,
    #[strum(serialize = "client-redirectUri")]
    ClientRedirectUri,
    #[strum(serialize = "client-attributes")]
    ClientAttributes,
}

const AUTH_WITH_SECRET: &str =
    "The key is needed together with the secret to authenticate with the Authorization Server";
const AUTH_WITH_KEY: &str =
    "The secret is needed together with the key to authenticate with the Authorization Server";
const CONTACT_NAME: &str = "The name of the person who can be contacted in case of information and/ or trouble shooting";
const CONTACT_EMAIL: &str = "The email address of the person who can be contacted in case of information and/ or trouble shooting";

impl PopoverKey {
    /// Returns the identifier as used by the web form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Which form renders this field.
    #[must_use]
    pub const fn form(self) -> PopoverForm {
        match self {
            Self::ResourceServerName
            | Self::ResourceServerDescription
            | Self::ResourceServerKey
            | Self::ResourceServerSecret
            | Self::ResourceServerScope
            | Self::ResourceServerThumbNailUrl
            | Self::ResourceServerContactName
            | Self::ResourceServerContactEmail => PopoverForm::ResourceServer,
            Self::ClientKey
            | Self::ClientSecret
            | Self::ClientName
            | Self::ClientDescription
            | Self::ClientResourceServer
            | Self::ClientScope
            | Self::ClientThumbNailUrl
            | Self::ClientContactName
            | Self::ClientContactEmail
            | Self::ClientRedirectUri
            | Self::ClientAttributes => PopoverForm::Client,
        }
    }

    #[must_use]
    pub const fn help_text(self) -> HelpText {
        match self {
            Self::ResourceServerName => HelpText::new(
                "Resource server name",
                "The unique name of the Resource Server",
            ),
            Self::ResourceServerDescription => HelpText::new(
                "Resource server description",
                "The long description of the Resource Server",
            ),
            Self::ResourceServerKey => HelpText::new("Resource server key", AUTH_WITH_SECRET),
            Self::ResourceServerSecret => HelpText::new("Resource server secret", AUTH_WITH_KEY),
            Self::ClientKey => HelpText::new("Client key", AUTH_WITH_SECRET),
            Self::ClientSecret => HelpText::new("Client secret", AUTH_WITH_KEY),
            Self::ResourceServerScope => HelpText::new(
                "Resource server scopes",
                "Scopes represent the different functionality your API offers to Client apps (e.g. read, update). Resource owners will have to grant access to the scopes of a client app which usually substitutes of a sub-set of the scopes of a resource server",
            ),
            Self::ResourceServerThumbNailUrl => HelpText::new(
                "Resource server thumbnail url",
                "The thumbnail url is displayed on the consent screen and it can be used - as this client does - to aid in the visual representation of a resource server",
            ),
            Self::ResourceServerContactName => {
                HelpText::new("Resource server contact name", CONTACT_NAME)
            },
            Self::ResourceServerContactEmail => {
                HelpText::new("Resource server contact email", CONTACT_EMAIL)
            },
            Self::ClientName => {
                HelpText::new("Client app name", "The unique name of the Client application")
            },
            Self::ClientDescription => HelpText::new(
                "Client app description",
                "The long description of the Client application",
            ),
            Self::ClientResourceServer => HelpText::new(
                "Client app - Resource server",
                "Every client app belongs to one (and only one) resource server",
            ),
            Self::ClientScope => HelpText::new(
                "Client app scopes",
                "Scopes represent the different functionality the API of the resource server offers to Client apps (e.g. read, update). Resource owners will have to grant access to the scopes of a client app which usually substitutes of a sub-set (or all) of the scopes of a resource server",
            ),
            Self::ClientThumbNailUrl => HelpText::new(
                "Client app thumbnail url",
                "The thumbnail url is displayed on the consent screen and it can be used - as this client does - to aid in the visual representation of client applications",
            ),
            Self::ClientContactName => HelpText::new("Client app contact name", CONTACT_NAME),
            Self::ClientContactEmail => HelpText::new("Client app contact email", CONTACT_EMAIL),
            Self::ClientRedirectUri => HelpText::new(
                "Client app redirect uri's",
                "A client app has to provide a redirect uri at runtime when obtaining an access token. The provided redirect uri at runtime is checked against the configured redirect uri here. Although this is not a required field, we strongly advice to configure the redirect uri to prevent possible client frauds to tamper with the authorization server",
            ),
            Self::ClientAttributes => HelpText::new(
                "Client app attributes",
                "A client may have additional attributes (key -value pairs) to configure extra info for the client app. The additional data can be used to add extra (OAuth) validation checks on the authorization server prior to granting a client app an access token and/ or enrichen the user consent form",
            ),
        }
    }
}

impl Serialize for PopoverKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PopoverKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|_| serde::de::Error::custom(format!("unknown popover key `{raw}`")))
    }
}
