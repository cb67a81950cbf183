/// Build the content of a UI material (.mat) descriptor.
///
/// Binds the accessory icon material to its texture-reference descriptor so
/// the game can render the paint job's icon in the upgrade shop.
/// `base_name` is the icon's file stem, e.g. `skin0042_ui_accessory`.
///
/// Returns an empty string when the base name is blank.
pub fn build_ui_mat_content(base_name: &str) -> String {
    if base_name.trim().is_empty() {
        return String::new();
    }

    format!(
        "effect : \"ui.rfx\" {{\n\
         \ttexture : \"texture\" {{\n\
         \t\tsource : \"{base_name}.tobj\"\n\
         \t\tu_address : clamp\n\
         \t\tv_address : clamp\n\
         \t\tmip_filter : none\n\
         \t}}\n\
         }}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat_binds_tobj_source() {
        let content = build_ui_mat_content("skin0042_ui_accessory");
        assert!(content.starts_with("effect : \"ui.rfx\" {"));
        assert!(content.contains("source : \"skin0042_ui_accessory.tobj\""));
        assert!(content.contains("u_address : clamp"));
        assert!(content.contains("mip_filter : none"));
    }

    #[test]
    fn test_blank_base_name_yields_empty_content() {
        assert_eq!(build_ui_mat_content(""), "");
        assert_eq!(build_ui_mat_content(" \t"), "");
    }
}
