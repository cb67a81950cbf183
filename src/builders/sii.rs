use crate::layout;
use crate::models::VehicleType;

/// Build the content of an `accessory_addon_data` (.sii) descriptor.
///
/// Declares the paint job's accessory identity, its look, the exterior and
/// interior model references, and a `data_path` link to the shared .sui
/// holding the actual paint job data.
///
/// A paint job conflicts only with itself; this matches the reference
/// behavior and is intentionally not widened to sibling paint jobs.
///
/// Returns an empty string when the paint ID or internal name is blank.
pub fn build_addon_data_content(
    paint_id: &str,
    internal_name: &str,
    vehicle_type: VehicleType,
) -> String {
    if paint_id.trim().is_empty() || internal_name.trim().is_empty() {
        return String::new();
    }

    let plan = layout::plan(vehicle_type, internal_name, paint_id);
    let accessory_name = format!("{paint_id}.{internal_name}.paint_job");

    let mut out = String::new();
    out.push_str(&format!("accessory_addon_data : {accessory_name}\n"));
    out.push_str("{\n");
    out.push_str(&format!("\tlook: {paint_id}\n"));
    out.push_str(&format!("\texterior_model: \"{}\"\n", plan.exterior_model));
    out.push_str(&format!("\tinterior_model: {}\n", plan.interior_model));
    out.push_str(&format!("\tconflicts_with[]: {paint_id}\n"));
    out.push_str(&format!("\tdata_path: \"{}\"\n", plan.shared_sui_game_path));
    out.push_str("}\n");
    out
}
