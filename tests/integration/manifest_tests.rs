//! Lookup and status filtering

use pretty_assertions::assert_eq;
use scope_manifest::manifest::{self, Status};
use scope_manifest::ScopeError;

use crate::common::all_names;

#[test]
fn test_lookup_is_case_insensitive_and_trims() {
    let component = manifest::lookup("  Checkout-Walker ").unwrap();
    assert_eq!(component.name, "checkout-walker");
    assert_eq!(component.status, Status::Excluded);
}

#[test]
fn test_lookup_unknown_component() {
    let err = manifest::lookup("cart").unwrap_err();
    assert_eq!(
        err,
        ScopeError::UnknownComponent {
            name: "cart".to_string()
        }
    );
}

#[test]
fn test_lookup_empty_name() {
    assert_eq!(manifest::lookup("   ").unwrap_err(), ScopeError::EmptyName);
}

#[test]
fn test_every_listed_name_resolves() {
    for name in all_names() {
        assert_eq!(manifest::lookup(name).unwrap().name, name);
    }
}

#[test]
fn test_nothing_is_in_scope() {
    let excluded = manifest::with_status(Status::Excluded).count();
    let not_applicable = manifest::with_status(Status::NotApplicable).count();
    assert_eq!(excluded + not_applicable, manifest::components().len());
    assert!(excluded > 0);
}
