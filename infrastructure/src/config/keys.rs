//! Key normalisation for configuration sources
//!
//! Records accept the front-end spelling of their keys (`apiServerUrl`,
//! `auth0.clientId`, `auth0.callbackURL`). figment merges sources key by
//! key and the preset layer always carries the snake_case spelling, so each
//! source is rewritten to the canonical spelling before it is merged.

use brewenv_domain::{ConfigKeyInfo, Environment, ValueKind, known_keys};
use figment::{
    Error, Metadata, Profile, Provider,
    providers::Env,
    value::{Dict, Map, Value},
};

/// Wraps a file provider and rewrites record keys to their canonical spelling.
pub(super) struct CanonicalKeys<P>(pub P);

impl<P: Provider> Provider for CanonicalKeys<P> {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut data = self.0.data()?;
        for dict in data.values_mut() {
            canonicalize(dict)?;
        }
        Ok(data)
    }

    fn profile(&self) -> Option<Profile> {
        self.0.profile()
    }
}

/// `BREWENV_*` overrides.
///
/// figment parses environment values into typed scalars; text fields of a
/// record get the raw string back, so `..._AUDIENCE=007` stays `"007"`.
pub(super) struct EnvOverrides {
    env: Env,
}

impl EnvOverrides {
    pub(super) fn new(prefix: &str) -> Self {
        Self {
            env: Env::prefixed(prefix).split("__"),
        }
    }
}

impl Provider for EnvOverrides {
    fn metadata(&self) -> Metadata {
        self.env.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut data = self.env.data()?;
        for dict in data.values_mut() {
            for (key, raw) in self.env.iter() {
                let path: Vec<String> = key
                    .as_str()
                    .split('.')
                    .map(|segment| segment.to_ascii_lowercase())
                    .collect();
                if is_text_field(&path) {
                    set_path(dict, &path, Value::from(raw));
                }
            }
            canonicalize(dict)?;
        }
        Ok(data)
    }
}

/// Key metadata for any accepted spelling of a record key.
///
/// Spellings match when they agree ignoring case and underscores, which
/// covers `clientId`, `clientid` and `callbackUrl` alike.
fn lookup_spelling(key: &str) -> Option<&'static ConfigKeyInfo> {
    let wanted = squash(key);
    known_keys().iter().find(|info| squash(info.key) == wanted)
}

fn squash(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn is_text_field(path: &[String]) -> bool {
    match path {
        [variant, rest @ ..] if is_variant(variant) && !rest.is_empty() => {
            lookup_spelling(&rest.join(".")).is_some_and(|info| info.kind != ValueKind::Boolean)
        }
        [section, field] => section == "probe" && field == "user_agent",
        _ => false,
    }
}

fn is_variant(name: &str) -> bool {
    Environment::ALL.iter().any(|env| env.as_str() == name)
}

fn set_path(dict: &mut Dict, path: &[String], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };
    let Some(key) = dict.keys().find(|k| k.eq_ignore_ascii_case(head)).cloned() else {
        return;
    };
    if rest.is_empty() {
        dict.insert(key, value);
    } else if let Some(Value::Dict(_, inner)) = dict.get_mut(&key) {
        set_path(inner, rest, value);
    }
}

fn canonicalize(dict: &mut Dict) -> Result<(), Error> {
    for env in Environment::ALL {
        let Some(Value::Dict(_, record)) = dict.get_mut(env.as_str()) else {
            continue;
        };
        rename_keys(record, "", env)?;
        if let Some(Value::Dict(_, auth0)) = record.get_mut("auth0") {
            rename_keys(auth0, "auth0.", env)?;
        }
    }
    Ok(())
}

fn rename_keys(dict: &mut Dict, prefix: &str, env: Environment) -> Result<(), Error> {
    let keys: Vec<String> = dict.keys().cloned().collect();
    for key in keys {
        let Some(info) = lookup_spelling(&format!("{prefix}{key}")) else {
            continue;
        };
        let canonical = info.key.rsplit('.').next().unwrap_or(info.key);
        if key == canonical {
            continue;
        }
        if dict.contains_key(canonical) {
            return Err(Error::from(format!(
                "[{env}] sets both `{prefix}{key}` and `{}`; keep one",
                info.key
            )));
        }
        if let Some(value) = dict.remove(&key) {
            dict.insert(canonical.to_string(), value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::value::Tag;

    #[test]
    fn test_lookup_spelling_variants() {
        for key in ["auth0.clientId", "auth0.clientid", "auth0.client_id", "AUTH0.CLIENT_ID"] {
            assert_eq!(lookup_spelling(key).map(|i| i.key), Some("auth0.client_id"));
        }
        assert_eq!(
            lookup_spelling("auth0.callbackUrl").map(|i| i.key),
            Some("auth0.callback_url")
        );
        assert!(lookup_spelling("auth0.secret").is_none());
    }

    #[test]
    fn test_text_fields() {
        let path = |s: &str| s.split('.').map(String::from).collect::<Vec<_>>();
        assert!(is_text_field(&path("development.auth0.audience")));
        assert!(is_text_field(&path("production.apiserverurl")));
        assert!(is_text_field(&path("probe.user_agent")));
        assert!(!is_text_field(&path("production.production")));
        assert!(!is_text_field(&path("probe.timeout_seconds")));
        assert!(!is_text_field(&path("environment")));
    }

    fn table(entries: Vec<(&str, Value)>) -> Dict {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    fn section(entries: Vec<(&str, Value)>) -> Value {
        Value::Dict(Tag::Default, table(entries))
    }

    #[test]
    fn test_canonicalize_renames_nested_keys() {
        let mut dict = table(vec![(
            "development",
            section(vec![
                ("apiServerUrl", Value::from("http://api.example.com")),
                (
                    "auth0",
                    section(vec![("callbackURL", Value::from("http://localhost:4200"))]),
                ),
            ]),
        )]);
        canonicalize(&mut dict).unwrap();

        let Some(Value::Dict(_, record)) = dict.get("development") else {
            panic!("development section missing");
        };
        assert!(record.contains_key("api_server_url"));
        assert!(!record.contains_key("apiServerUrl"));
        let Some(Value::Dict(_, auth0)) = record.get("auth0") else {
            panic!("auth0 section missing");
        };
        assert!(auth0.contains_key("callback_url"));
    }

    #[test]
    fn test_canonicalize_rejects_both_spellings() {
        let mut dict = table(vec![(
            "production",
            section(vec![
                ("api_server_url", Value::from("https://a.example.com")),
                ("apiServerUrl", Value::from("https://b.example.com")),
            ]),
        )]);
        let err = canonicalize(&mut dict).unwrap_err();
        assert!(err.to_string().contains("`apiServerUrl` and `api_server_url`"));
    }
}
