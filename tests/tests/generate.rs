use embedgen_packer::{
    format::{FormatOptions, Rustfmt},
    output::store_file,
};
use embedgen_tests::{
    assets_path, assets_request, function_names, generate_parsed, rustfmt_available,
};
use std::fs;

#[test]
fn logo_with_prefix_and_suffix_is_named_logo() {
    let mut request = assets_request("assets", &["logo.png"]);
    request.derive_options.suffix = ".png".to_owned();

    let (_source, file) = generate_parsed(&request, &Rustfmt::default()).unwrap();

    assert_eq!(function_names(&file), ["logo"]);
}

#[test]
fn case_folded_collision_fails_without_reading() {
    // the second path does not exist, collision must be found before reading
    let mut request = assets_request("assets", &["hello-world.txt"]);
    request
        .inputs
        .push(assets_path().join("HELLO-WORLD.TXT"));

    let error = generate_parsed(&request, &Rustfmt::default()).unwrap_err();

    assert!(
        error
            .to_string()
            .contains("duplicate identifier \"hello_world_txt\""),
        "{error}"
    );
}

#[test]
fn generated_source_is_stored_once() {
    let directory = tempfile::tempdir().unwrap();
    let output_path = directory.path().join("data.rs");
    let request = assets_request("assets", &["logo.png", "hello-world.txt"]);

    let (source, _file) = generate_parsed(&request, &Rustfmt::default()).unwrap();
    store_file(&output_path, source.as_bytes(), false).unwrap();

    assert_eq!(fs::read_to_string(&output_path).unwrap(), source);
    assert!(store_file(&output_path, b"", false).is_err());
    assert_eq!(fs::read_to_string(&output_path).unwrap(), source);
}

#[test]
fn rustfmt_output_is_valid_source() {
    if !rustfmt_available() {
        eprintln!("rustfmt not available, skipping");
        return;
    }

    let mut request = assets_request("assets", &["logo.png", "hello-world.txt", "empty.bin"]);
    request.format_options = FormatOptions::default();

    let (source, file) = generate_parsed(&request, &Rustfmt::default()).unwrap();

    assert!(source.lines().count() > 10, "{source}");
    assert!(source.contains("pub fn logo_png() -> ::std::io::Result<::std::vec::Vec<u8>> {"), "{source}");
    assert_eq!(function_names(&file), ["logo_png", "hello_world_txt", "empty_bin"]);
}
