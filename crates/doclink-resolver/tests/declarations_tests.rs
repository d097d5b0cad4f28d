//! Tests for declaration indexing.

use crate::declarations::DeclarationIndexer;
use crate::doclet::Doclet;
use crate::registry::FileRegistry;
use crate::test_fixtures::{ROOT, assignment_doclet, class_doclet, file, function_doclet};

fn index_all(doclets: &[Doclet]) -> FileRegistry {
    let mut registry = FileRegistry::new();
    let mut indexer = DeclarationIndexer::new(&mut registry);
    for doclet in doclets {
        indexer.index(doclet);
    }
    registry
}

#[test]
fn test_function_records_code_name_and_simple_name() {
    let doclet = Doclet::new("function", "Widget", "pkg.Widget")
        .with_scope("static")
        .at(ROOT, "a.js", 3)
        .with_code("FunctionDeclaration", "makeWidget", None);
    let registry = index_all(&[doclet]);
    let info = registry.get(&file("a.js")).unwrap();

    assert_eq!(info.declared_names.get("Widget").unwrap(), "pkg.Widget");
    assert_eq!(info.declared_names.get("makeWidget").unwrap(), "pkg.Widget");
}

#[test]
fn test_class_is_indexed() {
    let registry = index_all(&[class_doclet("a.js", "Shape", "geom.Shape", 1)]);
    let info = registry.get(&file("a.js")).unwrap();

    assert_eq!(info.declared_names.get("Shape").unwrap(), "geom.Shape");
}

#[test]
fn test_name_equal_to_longname_is_not_recorded() {
    let registry = index_all(&[function_doclet("a.js", "helper", "helper", 1)]);
    let info = registry.get(&file("a.js")).unwrap();

    assert!(info.declared_names.is_empty());
    assert!(info.assignments.is_empty());
}

#[test]
fn test_non_exportable_scopes_are_ignored() {
    let inner = Doclet::new("function", "inner", "outer~inner")
        .with_scope("inner")
        .at(ROOT, "a.js", 5);
    let instance = Doclet::new("function", "draw", "Shape#draw")
        .with_scope("instance")
        .at(ROOT, "a.js", 6);
    let unscoped = Doclet::new("function", "f", "x.f").at(ROOT, "a.js", 7);
    let registry = index_all(&[inner, instance, unscoped]);

    assert!(registry.get(&file("a.js")).is_none());
}

#[test]
fn test_identifier_assignment_is_recorded_verbatim() {
    let registry = index_all(&[
        assignment_doclet("a.js", "module.exports", "Widget", 9),
        assignment_doclet("a.js", "exports.Label", "Label", 10),
    ]);
    let info = registry.get(&file("a.js")).unwrap();

    let assignments: Vec<_> = info
        .assignments
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        assignments,
        vec![("module.exports", "Widget"), ("exports.Label", "Label")]
    );
}

#[test]
fn test_non_identifier_assignment_is_skipped() {
    let object = Doclet::new("member", "exports", "module.exports")
        .with_scope("static")
        .at(ROOT, "a.js", 2)
        .with_code("ObjectExpression", "module.exports", Some("{}"));
    let registry = index_all(&[object]);
    let info = registry.get(&file("a.js")).unwrap();

    assert!(info.assignments.is_empty());
}

#[test]
fn test_doclet_is_not_modified() {
    let doclet = function_doclet("a.js", "Widget", "pkg.Widget", 1).with_param("w", &["Widget"]);
    let before = doclet.clone();
    index_all(std::slice::from_ref(&doclet));

    assert_eq!(doclet, before);
}
