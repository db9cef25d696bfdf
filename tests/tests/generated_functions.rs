use std::io;
use test_case::test_case;

include!(concat!(env!("OUT_DIR"), "/base64_deflate.rs"));
include!(concat!(env!("OUT_DIR"), "/base64_raw.rs"));
include!(concat!(env!("OUT_DIR"), "/escaped_deflate.rs"));
include!(concat!(env!("OUT_DIR"), "/escaped_raw.rs"));

const LOGO: &[u8] = include_bytes!("../data/assets/logo.png");
const HELLO_WORLD: &[u8] = include_bytes!("../data/assets/hello-world.txt");

#[test_case(base64_deflate::logo, LOGO; "base64 deflate logo")]
#[test_case(base64_deflate::hello_world_txt, HELLO_WORLD; "base64 deflate text")]
#[test_case(base64_deflate::empty_bin, b""; "base64 deflate empty")]
#[test_case(base64_raw::logo, LOGO; "base64 raw logo")]
#[test_case(base64_raw::hello_world_txt, HELLO_WORLD; "base64 raw text")]
#[test_case(base64_raw::empty_bin, b""; "base64 raw empty")]
#[test_case(escaped_deflate::logo, LOGO; "escaped deflate logo")]
#[test_case(escaped_deflate::hello_world_txt, HELLO_WORLD; "escaped deflate text")]
#[test_case(escaped_deflate::empty_bin, b""; "escaped deflate empty")]
#[test_case(escaped_raw::logo, LOGO; "escaped raw logo")]
#[test_case(escaped_raw::hello_world_txt, HELLO_WORLD; "escaped raw text")]
#[test_case(escaped_raw::empty_bin, b""; "escaped raw empty")]
fn generated_function_returns_original_content(
    function: fn() -> io::Result<Vec<u8>>,
    expected: &[u8],
) {
    assert_eq!(function().unwrap(), expected);
}

#[test]
fn generated_function_decodes_on_every_call() {
    let first = base64_deflate::logo().unwrap();
    let second = base64_deflate::logo().unwrap();

    assert_eq!(first, second);
    assert_ne!(first.as_ptr(), second.as_ptr());
}
