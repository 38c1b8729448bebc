use blueprint_codec::{Category, DependencyCodec, DependencyEntry, FormatError, RowShape};

/// Test that a canonical basic row survives a parse/render round trip.
///
/// This test verifies that:
/// 1. The category, name and version are extracted
/// 2. The row is tagged as basic
/// 3. Rendering reproduces the original line exactly
#[test]
fn test_basic_round_trip() {
    let line = "- [PyPI] numpy [1.26.4]";
    let entry = DependencyCodec::parse(line).unwrap();

    assert_eq!(entry.category, Category::PyPI);
    assert_eq!(entry.name, "numpy");
    assert_eq!(entry.version_or_path, "1.26.4");
    assert_eq!(entry.shape, RowShape::Basic);
    assert_eq!(DependencyCodec::render(&entry), line);
}

/// Test that empty brace groups on an extended row are kept on render.
#[test]
fn test_extended_round_trip_with_empty_extras() {
    let line = "| [Apt] curl [7.81.0] {} {}";
    let entry = DependencyCodec::parse(line).unwrap();

    assert!(entry.shape.is_extended());
    assert_eq!(entry.extra1(), Some(""));
    assert_eq!(entry.extra2(), Some(""));
    assert_eq!(DependencyCodec::render(&entry), line);
}

/// Test that the row shape comes from the prefix and not the field contents.
///
/// This test verifies that:
/// 1. A `-` row is basic and has no extras
/// 2. A `|` row is extended with the brace contents as extras
#[test]
fn test_shape_disambiguation() {
    let basic = DependencyCodec::parse("- [LOCAL] ./vendor/lib [v2]").unwrap();
    assert_eq!(basic.shape, RowShape::Basic);
    assert_eq!(basic.category, Category::Local);
    assert_eq!(basic.name, "./vendor/lib");
    assert_eq!(basic.extra1(), None);

    let extended = DependencyCodec::parse("| [LOCAL] ./vendor/lib [v2] {offline} {}").unwrap();
    assert_eq!(
        extended.shape,
        RowShape::Extended {
            extra1: "offline".to_string(),
            extra2: String::new(),
        }
    );
}

#[test]
fn test_unknown_category() {
    let err = DependencyCodec::parse("- [Conda] numpy [1.0]").unwrap_err();
    assert_eq!(
        err,
        FormatError::UnknownCategory {
            value: "Conda".to_string()
        }
    );
}

/// Test that structural problems are reported as malformed lines.
#[test]
fn test_malformed_lines() {
    let lines = [
        "- [PyPI] numpy",
        "- [PyPI] numpy [1.0",
        "- PyPI numpy [1.0]",
        "- [PyPI] [1.0]",
        "- [PyPI] num py [1.0]",
        "| [Apt] curl [7.81.0] {a} {b} {c}",
        "| [Apt] curl [7.81.0] {a",
        "| [Apt] curl [7.81.0] trailing",
    ];

    for line in lines {
        let err = DependencyCodec::parse(line).unwrap_err();
        assert_eq!(
            err,
            FormatError::MalformedDependency {
                line: line.to_string()
            },
            "line: {}",
            line
        );
    }
}

#[test]
fn test_unknown_prefix() {
    let err = DependencyCodec::parse("+ [PyPI] numpy [1.0]").unwrap_err();
    assert_eq!(err.kind(), "UnknownPrefix");
}

/// Test every category in both shapes.
///
/// This test verifies that:
/// 1. Rendering uses the canonical spelling of every category
/// 2. Parsing the rendering gives back an equal entry
#[test]
fn test_parse_render_idempotence() {
    for category in Category::ALL {
        let entries = [
            DependencyEntry::basic(category, "pkg", ""),
            DependencyEntry::basic(category, "pkg", ">=1.0, <2.0"),
            DependencyEntry::extended(category, "pkg", "/opt/my lib", "mirror a", "on prem"),
            DependencyEntry::extended(category, "pkg", "1.0", "", ""),
        ];

        for entry in entries {
            let line = DependencyCodec::render(&entry);
            assert!(line.contains(&format!("[{}]", category.as_str())));
            assert_eq!(DependencyCodec::parse(&line).unwrap(), entry);
        }
    }
}

/// Test the `Display` and `FromStr` implementations delegate to the codec.
#[test]
fn test_display_and_from_str() {
    let entry: DependencyEntry = "| [DockerHub] python [3.12-slim] {ghcr.io} {yes}"
        .parse()
        .unwrap();
    assert_eq!(entry.category, Category::DockerHub);
    assert_eq!(
        entry.to_string(),
        "| [DockerHub] python [3.12-slim] {ghcr.io} {yes}"
    );
}

/// Test that rows written with the alternate `PyPi` spelling still load.
#[test]
fn test_legacy_category_spelling() {
    let entry = DependencyCodec::parse("| [PyPi] torch [2.3.0] {} {}").unwrap();
    assert_eq!(entry.category, Category::PyPI);
    assert_eq!(
        DependencyCodec::render(&entry),
        "| [PyPI] torch [2.3.0] {} {}"
    );
}

/// Test that whitespace-heavy input renders semantically the same.
#[test]
fn test_noncanonical_whitespace_round_trip() {
    let entry = DependencyCodec::parse("|[Apt]   libssl-dev[ 3.0 ]{ backports }{}").unwrap();
    assert_eq!(entry.name, "libssl-dev");
    assert_eq!(entry.version_or_path, "3.0");
    assert_eq!(entry.extra1(), Some("backports"));
    assert_eq!(
        DependencyCodec::render(&entry),
        "| [Apt] libssl-dev [3.0] {backports} {}"
    );
}
