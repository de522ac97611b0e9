/// Stem used when sanitizing leaves nothing.
pub const FALLBACK_STEM: &str = "osm_export";

/// Turns user input into a safe file name stem.
///
/// ASCII alphanumerics, `-` and `_` are kept, everything else becomes `_`; runs of `_` are
/// collapsed and leading or trailing `_` removed.
#[must_use]
pub fn sanitize_filename_stem(name: &str) -> String {
	let mut stem = String::with_capacity(name.len());
	for c in name.chars() {
		let c = if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' };
		if c == '_' && stem.ends_with('_') {
			continue;
		}
		stem.push(c);
	}

	let stem = stem.trim_matches('_');
	if stem.is_empty() {
		FALLBACK_STEM.to_string()
	} else {
		stem.to_string()
	}
}
