use std::sync::{PoisonError, RwLock};

use include_dir::Dir;
use log::debug;

static REGISTRY: RwLock<Vec<&'static Dir<'static>>> = RwLock::new(Vec::new());

/// Make an embedded directory tree visible to every loader created through
/// [`ResourceLoader::current`](super::ResourceLoader::current) and to the
/// crate-level loading functions.
///
/// Registering the same bundle twice has no effect.
///
/// ```ignore
/// static DEFAULTS: include_dir::Dir<'static> =
///     include_dir::include_dir!("$CARGO_MANIFEST_DIR/resources");
///
/// resload::register_bundle(&DEFAULTS);
/// ```
pub fn register_bundle(bundle: &'static Dir<'static>) {
	let mut bundles = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
	if bundles.iter().any(|known| std::ptr::eq(*known, bundle)) {
		return;
	}
	debug!("registered resource bundle #{}", bundles.len());
	bundles.push(bundle);
}

/// Snapshot of the registered bundles, in registration order.
pub(crate) fn registered() -> Vec<&'static Dir<'static>> {
	REGISTRY
		.read()
		.unwrap_or_else(PoisonError::into_inner)
		.clone()
}

/// Turn a resource name into a bundle-relative key.
///
/// Leading slashes are ignored; names that are empty or that climb out of
/// the bundle with `..` have no key.
pub(crate) fn resource_key(name: &str) -> Option<&str> {
	let key = name.trim_start_matches('/');
	if key.is_empty() || key.split(['/', '\\']).any(|part| part == "..") {
		None
	} else {
		Some(key)
	}
}

/// Find `key` in `bundle`, returning the embedded bytes.
pub(crate) fn lookup(bundle: &'static Dir<'static>, key: &str) -> Option<&'static [u8]> {
	bundle.get_file(key).map(|file| file.contents())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_drop_leading_slashes() {
		assert_eq!(resource_key("/conf/a.properties"), Some("conf/a.properties"));
		assert_eq!(resource_key("conf/a.properties"), Some("conf/a.properties"));
	}

	#[test]
	fn keys_never_escape_the_bundle() {
		assert_eq!(resource_key("../secret"), None);
		assert_eq!(resource_key("conf/../../secret"), None);
		assert_eq!(resource_key("conf\\..\\secret"), None);
		assert_eq!(resource_key("/"), None);
	}

	#[test]
	fn dotted_file_names_are_fine() {
		assert_eq!(resource_key("a..b.txt"), Some("a..b.txt"));
	}
}
