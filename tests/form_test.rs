use blueprint_codec::form::{BlueprintForm, Row};
use blueprint_codec::{BlueprintDocument, Category, DependencyEntry, EnvVarEntry, RowShape};

/// Helper function to create a document with the given DEPEND and ENVVAR lines
fn document(depend: &[&str], envvar: &[&str]) -> BlueprintDocument {
    BlueprintDocument {
        name: "demo".to_string(),
        workdir: "/app".to_string(),
        cmd: vec!["python main.py".to_string()],
        depend: depend.iter().map(|s| s.to_string()).collect(),
        envvar: envvar.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Test loading a document into editable rows.
///
/// This test verifies that:
/// 1. Valid lines become parsed rows
/// 2. Invalid lines become invalid rows carrying their error
/// 3. Blank rows are dropped
#[test]
fn test_load_rows() {
    let form = BlueprintForm::load(document(
        &["- [PyPI] flask [3.0.0]", "", "nonsense", "| [Apt] git [] {} {}"],
        &["A=1", "BROKEN"],
    ));

    assert_eq!(form.dependencies.len(), 3);
    assert_eq!(form.dependencies[0].entry().unwrap().name, "flask");
    assert_eq!(
        form.dependencies[1].error().unwrap().kind(),
        "MalformedDependency"
    );
    assert!(form.dependencies[2].entry().unwrap().shape.is_extended());
    assert_eq!(form.env_vars.len(), 2);
    assert_eq!(form.invalid_rows(), 2);
    assert_eq!(form.fields().name, "demo");
}

/// Test that saving a form writes canonical lines and keeps invalid ones.
#[test]
fn test_to_document_preserves_order_and_invalid_rows() {
    let form = BlueprintForm::load(document(
        &["-[pypi]   flask[3.0.0]", "nonsense", "|[Apt] git [2.43]"],
        &["BROKEN", "A=1"],
    ));
    let saved = form.to_document();

    assert_eq!(
        saved.depend,
        vec![
            "- [PyPI] flask [3.0.0]",
            "nonsense",
            "| [Apt] git [2.43] {} {}"
        ]
    );
    assert_eq!(saved.envvar, vec!["BROKEN", "A=1"]);
    assert_eq!(saved.cmd, vec!["python main.py"]);
    assert_eq!(saved.workdir, "/app");
}

/// Test adding, editing and removing rows.
///
/// This test verifies that:
/// 1. Added entries are rendered at the end
/// 2. Editing a row re-parses it, turning it valid or invalid
/// 3. Removing a row returns it and out-of-range indices are ignored
#[test]
fn test_edit_rows() {
    let mut form = BlueprintForm::load(document(&["- [PyPI] a [1]"], &[]));

    form.add_dependency(DependencyEntry::extended(
        Category::DockerHub,
        "redis",
        "7",
        "",
        "deployable",
    ));
    form.add_env_var(EnvVarEntry::new("MODE", "prod"));

    let edited = form.set_dependency(0, "- [Conda] a [1]").unwrap();
    assert_eq!(edited.error().unwrap().kind(), "UnknownCategory");
    assert_eq!(form.invalid_rows(), 1);

    let edited = form.set_dependency(0, "- [PYTHON] a [1]").unwrap();
    assert_eq!(edited.entry().unwrap().category, Category::Python);
    assert_eq!(form.invalid_rows(), 0);

    assert!(form.set_dependency(5, "- [PyPI] a [1]").is_none());
    assert!(form.set_env_var(0, "MODE").unwrap().error().is_some());

    let saved = form.to_document();
    assert_eq!(
        saved.depend,
        vec!["- [PYTHON] a [1]", "| [DockerHub] redis [7] {} {deployable}"]
    );
    assert_eq!(saved.envvar, vec!["MODE"]);

    let removed = form.remove_dependency(0).unwrap();
    assert!(matches!(removed, Row::Parsed(ref e) if e.shape == RowShape::Basic));
    assert!(form.remove_dependency(3).is_none());
    assert!(form.remove_env_var(0).is_some());
    assert_eq!(form.dependencies.len(), 1);
    assert!(form.env_vars.is_empty());
}

/// Test editing the scalar fields and run commands of a form.
///
/// This test verifies that:
/// 1. Commands can be added and removed through the editable fields
/// 2. Scalar edits and command order are kept by `to_document`
#[test]
fn test_edit_fields() {
    let mut form = BlueprintForm::load(document(&["- [PyPI] a [1]"], &[]));

    let fields = form.fields_mut();
    fields.cmd.push("python -m pytest".to_string());
    fields.cmd.insert(0, "pip install -e .".to_string());
    fields.workdir = "/srv".to_string();
    fields.name.clear();

    form.fields_mut().cmd.remove(1);

    let saved = form.to_document();
    assert_eq!(saved.cmd, vec!["pip install -e .", "python -m pytest"]);
    assert_eq!(saved.workdir, "/srv");
    assert_eq!(saved.name, "");
    assert_eq!(saved.depend, vec!["- [PyPI] a [1]"]);
    assert_eq!(form.fields().cmd.len(), 2);
}
