/// Build the content of a texture-reference (.tobj) descriptor.
///
/// A tobj binds a logical texture to the DDS file the engine should load.
/// `texture_game_path` is the virtual path of the texture, e.g.
/// `/vehicle/truck/upgrade/paintjob/scania.s_2016/skin0042/skin0042_0.dds`.
///
/// Returns an empty string when the path is blank.
pub fn build_tobj_content(texture_game_path: &str) -> String {
    if texture_game_path.trim().is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("map\t2d\n");
    out.push_str(&format!("\tsource\t\"{texture_game_path}\"\n"));
    out.push_str("\taddr\tclamp\tclamp\n");
    out.push_str("\tnomips\n");
    out
}
