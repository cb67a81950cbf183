use crate::layout;
use crate::models::{ProjectSettings, VehicleType};

/// Build the content of an `accessory_paint_job_data` (.sui) descriptor.
///
/// This is the paint job's main data block: price, unlock level, UI display
/// name, icon references, fixed default flags, the per-type texture slot
/// bindings, and the metallic/mask override file references.
///
/// The UI display name is the mod name followed by the paint ID's suffix
/// (prefix stripped, upper-cased), e.g. mod "My Custom Skin" with ID
/// "skin0042" displays as "My Custom Skin 0042".
///
/// Returns an empty string when the paint ID or internal name is blank.
pub fn build_paint_job_data_content(
    paint_id: &str,
    internal_name: &str,
    vehicle_type: VehicleType,
    settings: &ProjectSettings,
) -> String {
    if paint_id.trim().is_empty() || internal_name.trim().is_empty() {
        return String::new();
    }

    let plan = layout::plan(vehicle_type, internal_name, paint_id);
    let accessory_name = format!("{paint_id}.{internal_name}.paint_job");

    let prefix = &settings.paint_job_prefix;
    let id_suffix = match paint_id.strip_prefix(prefix.as_str()) {
        Some(suffix) if !suffix.is_empty() => suffix,
        _ => paint_id,
    };
    let ui_display_name = format!("{} {}", settings.mod_name, id_suffix.to_uppercase());

    // Icon references carry no extension; the engine resolves the material.
    let icon_path = format!("material/ui/accessory/{paint_id}_ui_accessory");

    let mut out = String::new();
    out.push_str(&format!("accessory_paint_job_data : {accessory_name}\n"));
    out.push_str("{\n");
    out.push_str(&format!("\tname: \"{ui_display_name}\"\n"));
    out.push_str(&format!("\tprice: {}\n", settings.price));
    out.push_str(&format!("\tunlock: {}\n", settings.unlock_level));
    out.push_str(&format!("\ticon: \"{icon_path}\"\n"));
    out.push_str(&format!("\texterior_icon: \"{icon_path}\"\n"));
    out.push_str("\tairbrush: true\n");
    out.push_str(&format!("\tsuitable_for[]: \"{internal_name}\"\n"));
    out.push_str("\tbase_color_locked: false\n");
    out.push_str("\tbase_color: (1.0, 1.0, 1.0)\n");

    match vehicle_type {
        VehicleType::Truck => {
            // Trucks bind all six directional slots to the same texture.
            for slot in [
                "texture_frontal",
                "texture_frontal_low",
                "texture_sideral",
                "texture_sideral_low",
                "texture_rear",
                "texture_rear_low",
            ] {
                out.push_str(&format!("\t{slot}: \"{}\"\n", plan.tobj_game_path));
            }
        }
        VehicleType::TrailerOwned => {
            out.push_str(&format!("\ttexture: \"{}\"\n", plan.tobj_game_path));
        }
    }

    out.push_str("\talternate_uvset: false\n");
    out.push_str(&format!("\tdefaults[]: \"{}\"\n", plan.metallic_sui_game_path));
    out.push_str(&format!("\tdefaults[]: \"{}\"\n", plan.mask_sui_game_path));
    out.push_str("}\n");
    out
}
