//! City-name canonicalisation applied before querying the upstream.
//!
//! The dataset indexes counties by their official names, which use `臺`
//! where everyday writing uses `台` (`台北市` vs `臺北市`). Only that one
//! glyph pair is rewritten.

/// Everyday variant accepted from clients.
pub const VARIANT_GLYPH: char = '台';

/// Form the upstream dataset expects.
pub const CANONICAL_GLYPH: char = '臺';

/// Replace every [`VARIANT_GLYPH`] in `name` with [`CANONICAL_GLYPH`].
pub fn canonical_location_name(name: &str) -> String {
    name.replace(VARIANT_GLYPH, &CANONICAL_GLYPH.to_string())
}
