use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::warning("IDE0050")
        .with_message("convert to tuple")
        .in_document(DocumentId::new(3), Span::new(10, 14));

    assert_eq!(diag.id.as_str(), "IDE0050");
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.message, "convert to tuple");
    assert_eq!(diag.document(), Some(DocumentId::new(3)));
    assert_eq!(diag.span(), Some(Span::new(10, 14)));
    assert!(!diag.is_error());
}

#[test]
fn test_project_location_has_no_span() {
    let diag = Diagnostic::error("CS0006").in_project(ProjectId::new(1));
    assert!(diag.is_error());
    assert_eq!(diag.location, Location::Project(ProjectId::new(1)));
    assert_eq!(diag.document(), None);
    assert_eq!(diag.span(), None);
}

#[test]
fn test_default_location_is_none() {
    let diag = Diagnostic::hidden("IDE0001");
    assert_eq!(diag.location, Location::None);
    assert_eq!(diag.severity, Severity::Hidden);
}

#[test]
fn test_severity_ordering() {
    assert!(Severity::Hidden < Severity::Info);
    assert!(Severity::Warning < Severity::Error);
}

#[test]
fn test_display() {
    let diag = Diagnostic::error("E1").with_message("bad thing");
    assert_eq!(diag.to_string(), "error[E1]: bad thing");
    assert_eq!(format!("{:?}", DiagnosticId::new("E1")), "E1");
}

#[test]
fn test_diagnostic_hash_dedup() {
    use rustc_hash::FxHashSet;

    let a = Diagnostic::hidden("IDE0050").in_document(DocumentId::new(1), Span::new(0, 3));
    let b = a.clone();
    let c = Diagnostic::hidden("IDE0050").in_document(DocumentId::new(1), Span::new(4, 7));

    let set: FxHashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}
