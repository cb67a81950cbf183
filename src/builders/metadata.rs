use crate::models::ProjectSettings;

/// Build the content of the package manifest (manifest.sii).
///
/// Declares the mod's identity to the game's mod manager: display name,
/// version, author, the fixed "paint_job" category, the icon file at the
/// package root, and the link to the description file.
///
/// Returns an empty string when the mod name is blank.
pub fn build_manifest_content(settings: &ProjectSettings) -> String {
    if settings.mod_name.trim().is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("SiiNunit\n");
    out.push_str("{\n");
    out.push_str("mod_package : .package_name\n");
    out.push_str("{\n");
    out.push_str(&format!("\tdisplay_name: \"{}\"\n", settings.mod_name));
    out.push_str(&format!("\tversion: \"{}\"\n", settings.mod_version));
    out.push_str(&format!("\tauthor: \"{}\"\n", settings.mod_author));
    out.push_str("\tcategory: \"paint_job\"\n");
    out.push_str("\tdescription: \"mod_description.txt\"\n");
    out.push_str(&format!("\ticon: \"{}\"\n", settings.mod_icon_file_name));
    out.push_str("}\n");
    out.push_str("}\n");
    out
}

/// Content of mod_description.txt, taken verbatim from the settings.
pub fn build_mod_description_content(settings: &ProjectSettings) -> String {
    settings.mod_description.clone()
}
