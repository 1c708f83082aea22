use std::fs;
use std::io::Read;

use include_dir::{Dir, include_dir};
use resload::{ResourceError, register_bundle};
use tempfile::tempdir;

static DEFAULTS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/bundle");
static OVERLAY: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/overlay");

fn setup() {
	register_bundle(&DEFAULTS);
	register_bundle(&OVERLAY);
}

fn read_to_string(name: &str) -> String {
	let mut text = String::new();
	resload::get_reader(name)
		.unwrap()
		.read_to_string(&mut text)
		.unwrap();
	text
}

#[test]
fn local_file_overrides_bundled_default() {
	setup();
	// Present both on disk (relative to the package root) and in OVERLAY.
	assert_eq!(read_to_string("tests/fixtures/shadowed.txt"), "from disk\n");
}

#[test]
fn registered_bundles_are_found_by_crate_functions() {
	setup();
	assert_eq!(read_to_string("greeting.txt"), "hello from the bundle\n");
	assert_eq!(resload::load_text_file("lines.txt").unwrap(), "abc");
}

#[test]
fn registering_twice_is_harmless() {
	setup();
	setup();
	let mut lines = Vec::new();
	resload::load_text_lines("lines.txt", &mut lines).unwrap();
	assert_eq!(lines, vec!["a", "b", "c"]);
}

#[test]
fn three_line_file_on_disk() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("abc.txt");
	fs::write(&path, "a\r\nb\rc").unwrap();
	let name = path.to_str().unwrap();

	assert_eq!(resload::load_text_file(name).unwrap(), "abc");

	let mut lines = Vec::new();
	let returned = resload::load_text_lines(name, &mut lines).unwrap();
	assert_eq!(*returned, vec!["a", "b", "c"]);
}

#[test]
fn properties_from_name() {
	setup();
	let properties = resload::load_properties("config/app.properties").unwrap();
	assert_eq!(properties.get("name"), Some("bundled"));
}

#[test]
fn properties_from_missing_location() {
	setup();
	let err = resload::load_properties("does/not/exist.properties").unwrap_err();
	assert!(matches!(err, ResourceError::Processing { .. }));
	assert!(err.to_string().contains("does/not/exist.properties"));
}

#[test]
fn empty_name_is_rejected_everywhere() {
	assert!(matches!(resload::get_stream(""), Err(ResourceError::InvalidArgument(_))));
	assert!(matches!(resload::load_properties(""), Err(ResourceError::InvalidArgument(_))));
	assert!(matches!(resload::load_text_file(""), Err(ResourceError::InvalidArgument(_))));
}

#[test]
fn file_reader_reads_plain_paths() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("plain.txt");
	fs::write(&path, "plain").unwrap();

	let mut text = String::new();
	resload::file_reader(&path)
		.unwrap()
		.read_to_string(&mut text)
		.unwrap();
	assert_eq!(text, "plain");

	let err = resload::file_reader_with_encoding(&path, "nope").unwrap_err();
	assert!(matches!(err, ResourceError::UnsupportedEncoding { .. }));
}
