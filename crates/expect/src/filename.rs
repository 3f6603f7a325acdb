// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output filename rules used by glslc.

/// Extensions glslc recognizes as naming a shader stage.
pub const SHADER_STAGE_EXTENSIONS: &[&str] = &[".vert", ".frag", ".tesc", ".tese", ".geom", ".comp"];

/// Extension of compiled SPIR-V object files.
pub const OBJECT_EXTENSION: &str = "spv";

/// Extension of SPIR-V assembly files.
pub const ASSEMBLY_EXTENSION: &str = "s";

/// Substitute the extension of `filename`, respecting shader stage extensions.
///
/// ```text
/// foo.vert    -> foo.vert.<extension>   (likewise .frag, .comp, ...)
/// foo.glsl    -> foo.<extension>
/// foo.unknown -> foo.<extension>
/// foo         -> foo.<extension>
/// ```
pub fn substitute_file_extension(filename: &str, extension: &str) -> String {
    if has_stage_extension(filename) {
        return format!("{filename}.{extension}");
    }
    let stem = filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _)| stem);
    format!("{stem}.{extension}")
}

/// Whether `filename` ends in one of [`SHADER_STAGE_EXTENSIONS`].
pub fn has_stage_extension(filename: &str) -> bool {
    SHADER_STAGE_EXTENSIONS
        .iter()
        .any(|ext| filename.ends_with(ext))
}

/// Object filename glslc writes for `source_filename`.
pub fn object_filename(source_filename: &str) -> String {
    substitute_file_extension(source_filename, OBJECT_EXTENSION)
}

/// Assembly filename glslc writes for `source_filename`.
pub fn assembly_filename(source_filename: &str) -> String {
    substitute_file_extension(source_filename, ASSEMBLY_EXTENSION)
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;
