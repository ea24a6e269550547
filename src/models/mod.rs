use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Entities exposed by the backend.
///
/// The lowercase form doubles as the client route segment (`/grafikon/...`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum EntityKind {
    Grafikon,
    Tabela,
}

impl EntityKind {
    /// Resource path relative to the API base, e.g. `api/grafikons`.
    pub fn resource_path(self) -> String {
        format!("api/{}s", self.as_ref())
    }

    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Grafikon => "Grafikon",
            EntityKind::Tabela => "Tabela",
        }
    }

    pub fn title_plural(self) -> &'static str {
        match self {
            EntityKind::Grafikon => "Grafikons",
            EntityKind::Tabela => "Tabelas",
        }
    }

    pub fn list_path(self) -> String {
        format!("/{}", self.as_ref())
    }

    pub fn new_path(self) -> String {
        format!("/{}/new", self.as_ref())
    }

    pub fn view_path(self, id: i64) -> String {
        format!("/{}/{}/view", self.as_ref(), id)
    }

    pub fn edit_path(self, id: i64) -> String {
        format!("/{}/{}/edit", self.as_ref(), id)
    }
}

/// A region/promet record as stored by the backend.
///
/// A record is persisted iff it carries an `id`; everything that branches on
/// create vs update goes through [`Entity::is_persisted`].
pub(crate) trait Entity:
    Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: EntityKind;

    fn from_parts(id: Option<i64>, region: Option<String>, promet: Option<i32>) -> Self;

    fn identifier(&self) -> Option<i64>;

    fn region(&self) -> Option<&str>;

    fn promet(&self) -> Option<i32>;

    fn is_persisted(&self) -> bool {
        self.identifier().is_some()
    }

    /// Identity comparison: two records are the same entity only when both
    /// carry the same id.
    fn same_entity(&self, other: &Self) -> bool {
        matches!((self.identifier(), other.identifier()), (Some(a), Some(b)) if a == b)
    }
}

macro_rules! region_entity {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
        pub(crate) struct $name {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub id: Option<i64>,
            #[serde(default)]
            pub region: Option<String>,
            #[serde(default)]
            pub promet: Option<i32>,
        }

        impl Entity for $name {
            const KIND: EntityKind = $kind;

            fn from_parts(id: Option<i64>, region: Option<String>, promet: Option<i32>) -> Self {
                Self { id, region, promet }
            }

            fn identifier(&self) -> Option<i64> {
                self.id
            }

            fn region(&self) -> Option<&str> {
                self.region.as_deref()
            }

            fn promet(&self) -> Option<i32> {
                self.promet
            }
        }
    };
}

region_entity!(
    /// Region/turnover pair charted on the list screen.
    Grafikon,
    EntityKind::Grafikon
);

region_entity!(
    /// Tabular region/turnover record, same shape as [`Grafikon`].
    Tabela,
    EntityKind::Tabela
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grafikon_contract_deserialize() {
        let json = r#"{"id": 7, "region": "Zagreb", "promet": 120}"#;
        let parsed: Grafikon = serde_json::from_str(json).expect("grafikon should parse");
        assert_eq!(parsed.id, Some(7));
        assert_eq!(parsed.region.as_deref(), Some("Zagreb"));
        assert_eq!(parsed.promet, Some(120));
    }

    #[test]
    fn test_grafikon_deserialize_tolerates_missing_and_null_fields() {
        let parsed: Grafikon =
            serde_json::from_str(r#"{"region": null}"#).expect("partial grafikon should parse");
        assert_eq!(parsed, Grafikon::default());
    }

    #[test]
    fn test_new_record_serialization_omits_id() {
        let g = Grafikon::from_parts(None, Some("Split".to_string()), None);
        let v = serde_json::to_value(&g).expect("should serialize");
        assert!(v.get("id").is_none());
        assert_eq!(v["region"], "Split");
        assert!(v["promet"].is_null());
    }

    #[test]
    fn test_is_persisted_follows_identifier() {
        assert!(!Tabela::default().is_persisted());
        assert!(Tabela::from_parts(Some(1), None, None).is_persisted());
    }

    #[test]
    fn test_same_entity_requires_both_ids() {
        let a = Grafikon::from_parts(Some(123), None, None);
        let b = Grafikon::from_parts(Some(123), Some("other".to_string()), Some(3));
        let c = Grafikon::from_parts(Some(456), None, None);
        assert!(a.same_entity(&b));
        assert!(!a.same_entity(&c));
        assert!(!Grafikon::default().same_entity(&Grafikon::default()));
    }

    #[test]
    fn test_entity_kind_paths() {
        assert_eq!(EntityKind::Grafikon.resource_path(), "api/grafikons");
        assert_eq!(EntityKind::Tabela.resource_path(), "api/tabelas");
        assert_eq!(EntityKind::Grafikon.to_string(), "grafikon");
        assert_eq!(EntityKind::Tabela.view_path(5), "/tabela/5/view");
        assert_eq!(EntityKind::Grafikon.edit_path(9), "/grafikon/9/edit");
        assert_eq!(EntityKind::Grafikon.new_path(), "/grafikon/new");
    }
}
