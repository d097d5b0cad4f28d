//! End-to-end tests driving the host event surface with jsdoc-shaped doclets.

use doclink_resolver::{AliasSlot, DocLinker, Doclet, LinkError, WHOLE_MODULE};
use serde_json::json;
use std::path::{Path, PathBuf};

const ROOT: &str = "/proj/src";

fn path(name: &str) -> PathBuf {
    Path::new(ROOT).join(name)
}

fn doclet(value: serde_json::Value) -> Doclet {
    serde_json::from_value(value).expect("fixture doclet should deserialize")
}

/// Run a whole documentation pass over `(filename, source, doclets)` triples
/// and return the linker together with every doclet of the run.
fn run(files: Vec<(&str, &str, Vec<Doclet>)>) -> (DocLinker, Result<Vec<Doclet>, LinkError>) {
    let mut linker = DocLinker::new();
    let mut all = Vec::new();
    for (name, source, doclets) in files {
        let mut source = source.to_string();
        linker.parse_begin(&path(name), &mut source);
        for d in doclets {
            linker.new_doclet(&d);
            all.push(d);
        }
    }
    let result = linker.processing_complete(&mut all).map(|_| all);
    (linker, result)
}

fn widget_file() -> (&'static str, &'static str, Vec<Doclet>) {
    (
        "a.js",
        "/** @memberof pkg */\nfunction Widget() {}\nmodule.exports = Widget;\n",
        vec![
            doclet(json!({
                "kind": "function",
                "name": "Widget",
                "longname": "pkg.Widget",
                "memberof": "pkg",
                "scope": "static",
                "meta": {
                    "path": ROOT,
                    "filename": "a.js",
                    "lineno": 2,
                    "code": { "id": "astnode1", "name": "Widget", "type": "FunctionDeclaration" }
                }
            })),
            doclet(json!({
                "kind": "member",
                "name": "exports",
                "longname": "module.exports",
                "memberof": "module",
                "scope": "static",
                "undocumented": true,
                "meta": {
                    "path": ROOT,
                    "filename": "a.js",
                    "lineno": 3,
                    "code": { "name": "module.exports", "type": "Identifier", "value": "Widget" }
                }
            })),
        ],
    )
}

fn show_doclet(filename: &str, type_name: &str) -> Doclet {
    doclet(json!({
        "kind": "function",
        "name": "show",
        "longname": "show",
        "scope": "global",
        "description": "Show a widget.",
        "params": [{ "type": { "names": [type_name] }, "name": "w", "optional": true }],
        "meta": {
            "path": ROOT,
            "filename": filename,
            "lineno": 2,
            "code": { "name": "show", "type": "FunctionDeclaration" }
        }
    }))
}

fn param_type(doclet: &Doclet) -> &str {
    &doclet.params[0].type_spec.as_ref().unwrap().names[0]
}

#[test]
fn test_destructured_require_resolves_to_canonical_name() {
    let (linker, result) = run(vec![
        widget_file(),
        (
            "b.js",
            "const {Widget} = require('./a');\n/** @param {Widget} w */\nfunction show(w) {}\n",
            vec![show_doclet("b.js", "Widget")],
        ),
    ]);
    let doclets = result.unwrap();
    let show = doclets.iter().find(|d| d.longname == "show").unwrap();

    assert_eq!(param_type(show), "pkg.Widget");

    let a = linker.registry().get(&path("a.js")).unwrap();
    assert_eq!(
        a.export_table.get(WHOLE_MODULE).map(String::as_str),
        Some("pkg.Widget")
    );
}

#[test]
fn test_unknown_fields_survive_the_round_trip() {
    let (_, result) = run(vec![
        widget_file(),
        (
            "b.js",
            "const W = require('./a');\n",
            vec![show_doclet("b.js", "Array.<W>")],
        ),
    ]);
    let doclets = result.unwrap();
    let show = doclets.iter().find(|d| d.longname == "show").unwrap();
    let value = serde_json::to_value(show).unwrap();

    assert_eq!(value["description"], "Show a widget.");
    assert_eq!(value["params"][0]["optional"], true);
    assert_eq!(value["params"][0]["type"]["names"][0], "Array.<pkg.Widget>");
    assert_eq!(value["meta"]["lineno"], 2);
}

#[test]
fn test_module_without_exports_leaves_names_alone() {
    let (linker, result) = run(vec![
        (
            "a.js",
            "function Widget() {}\n",
            vec![doclet(json!({
                "kind": "function",
                "name": "Widget",
                "longname": "pkg.Widget",
                "scope": "static",
                "meta": {
                    "path": ROOT,
                    "filename": "a.js",
                    "lineno": 1,
                    "code": { "name": "Widget", "type": "FunctionDeclaration" }
                }
            }))],
        ),
        (
            "b.js",
            "const {Widget} = require('./a');\n",
            vec![show_doclet("b.js", "Widget")],
        ),
    ]);
    let doclets = result.unwrap();
    let show = doclets.iter().find(|d| d.longname == "show").unwrap();

    assert_eq!(param_type(show), "Widget");
    assert!(
        linker
            .registry()
            .get(&path("a.js"))
            .unwrap()
            .export_table
            .is_empty()
    );
    assert_eq!(
        linker
            .registry()
            .get(&path("b.js"))
            .unwrap()
            .local_aliases
            .get("Widget"),
        Some(&AliasSlot::Failed)
    );
}

#[test]
fn test_missing_target_file_leaves_alias_untouched() {
    let (_, result) = run(vec![(
        "b.js",
        "const Gadget = require('./never-parsed');\n",
        vec![show_doclet("b.js", "Array.<Gadget>")],
    )]);
    let doclets = result.unwrap();

    assert_eq!(param_type(&doclets[0]), "Array.<Gadget>");
}

#[test]
fn test_typedef_import_is_stripped_and_resolved() {
    let mut linker = DocLinker::new();

    let mut shapes = "class Circle {}\nexports.Circle = Circle;\n".to_string();
    linker.parse_begin(&path("geom/shapes.js"), &mut shapes);
    let circle = doclet(json!({
        "kind": "class",
        "name": "Circle",
        "longname": "geom.Circle",
        "scope": "static",
        "meta": {
            "path": "/proj/src/geom",
            "filename": "shapes.js",
            "lineno": 1,
            "code": { "name": "Circle", "type": "ClassDeclaration" }
        }
    }));
    let export = doclet(json!({
        "kind": "member",
        "name": "Circle",
        "longname": "exports.Circle",
        "scope": "static",
        "meta": {
            "path": "/proj/src/geom",
            "filename": "shapes.js",
            "lineno": 2,
            "code": { "name": "exports.Circle", "type": "Identifier", "value": "Circle" }
        }
    }));
    linker.new_doclet(&circle);
    linker.new_doclet(&export);

    let mut draw =
        "/**\n * @typedef {import(\"./geom/shapes\").Circle} Round\n */\n\n/** @param {Array.<Round>} w */\nfunction show(w) {}\n"
            .to_string();
    linker.parse_begin(&path("draw.js"), &mut draw);
    assert!(!draw.contains("@typedef"));
    assert_eq!(draw.lines().count(), 6);
    let show = show_doclet("draw.js", "Array.<Round>");
    linker.new_doclet(&show);

    let mut doclets = vec![circle, export, show];
    linker.processing_complete(&mut doclets).unwrap();

    assert_eq!(param_type(&doclets[2]), "Array.<geom.Circle>");
}

#[test]
fn test_malformed_type_aborts_with_location() {
    let (_, result) = run(vec![(
        "b.js",
        "function show(w) {}\n",
        vec![show_doclet("b.js", "Array.<Widget")],
    )]);

    let err = result.unwrap_err();
    assert_eq!(err.file(), &path("b.js"));
    assert_eq!(err.line(), 2);
}

#[test]
fn test_custom_default_extension() {
    let options = doclink_resolver::LinkerOptions::from_json(r#"{ "defaultExtension": ".mjs" }"#)
        .unwrap();
    let mut linker = DocLinker::with_options(options);
    assert_eq!(linker.options().default_extension, ".mjs");

    let mut source = "const Widget = require('./a');\n".to_string();
    linker.parse_begin(&path("b.mjs"), &mut source);

    let b = linker.registry().get(&path("b.mjs")).unwrap();
    assert_eq!(
        b.local_aliases.get("Widget"),
        Some(&AliasSlot::Unresolved {
            target: path("a.mjs"),
            exported_path: String::new(),
        })
    );
}
