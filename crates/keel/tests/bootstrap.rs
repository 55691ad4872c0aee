//! Host start-up flow against the process-wide registry and subscriber.
//! Both are global, so the whole flow runs in one test.

#![allow(dead_code)]

use keel::{KeelConfig, KeelError, ObjectValue, RegistryError, SchemaCatalog, registry};
use pretty_assertions::assert_eq;

keel::model! {
    pub struct Site {
        pub name: String = ",required",
        pub host: String = ",required",
        pub port: i64 = ",default:22",
    }
}

keel::model! {
    pub struct Account {
        pub id: String = ",computed,state",
        pub name: String = ",required",
        pub site: ObjectValue = ",elementtype:site,optional",
    }
}

#[test]
fn bootstrap_seals_registry_and_catalog_builds() {
    registry::global::register_model::<Site>("site").expect("registers");

    let before = SchemaCatalog::builder().resource::<Account>("st_account").build_global();
    assert!(matches!(
        before,
        Err(KeelError::Registry(RegistryError::NotSealed))
    ));

    let config = KeelConfig::default();
    keel::bootstrap(&config).expect("bootstraps");
    assert_eq!(registry::global::is_sealed(), Ok(true));

    let catalog = SchemaCatalog::builder()
        .resource::<Account>("st_account")
        .build_global()
        .expect("catalog builds");
    let account = catalog.get("st_account").expect("cached");
    let site = account
        .get("site")
        .and_then(|a| a.children())
        .expect("site object");
    let keys: Vec<&str> = site.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["host", "name", "port"]);

    let direct = {
        let registry = registry::global::read().expect("sealed registry");
        keel::model_to_schema::<Account>(&registry).expect("maps")
    };
    assert_eq!(account, &direct);

    let again = keel::bootstrap(&config);
    assert!(matches!(again, Err(KeelError::Tracing(_))));
}
