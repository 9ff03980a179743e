use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CloudError::space_exhausted("apple")
            .to_string()
            .contains("allocation space exhausted")
    );
    assert!(
        CloudError::unsupported_method("cubic")
            .to_string()
            .contains("'cubic'")
    );
    assert!(
        CloudError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CloudError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CloudError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: CloudError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CloudError::Serde(_)));
}
