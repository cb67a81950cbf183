//! Layout planning.
//!
//! Pure derivation of every path a paint job occupies, both on disk
//! (relative to the package root) and inside the game's virtual filesystem
//! (absolute, forward-slash paths embedded in descriptors). No I/O happens
//! here; the planner is a total function over (type, internal name, ID).

use crate::models::VehicleType;
use camino::Utf8PathBuf;

/// Internal names containing any of these resolve to the cistern paint job
/// model. Checked before the feldbinder group; first match wins.
const CISTERN_KEYWORDS: &[&str] = &[
    "cistern", "foodtank", "chemtank", "fueltank", "gastank", "silo",
];

/// Internal names containing any of these resolve to the feldbinder model.
const FELDBINDER_KEYWORDS: &[&str] = &["feldbinder", "eut", "kip", "tsalm", "tsaadr"];

const TRUCK_EXTERIOR_MODEL: &str = "/vehicle/truck/upgrade/paintjob/paintjob.pmd";
const TRAILER_EXTERIOR_MODEL: &str = "/vehicle/trailer_owned/upgrade/paintjob/paintjob.pmd";
const TRAILER_CISTERN_MODEL: &str = "/vehicle/trailer_owned/upgrade/paintjob/paintjob_cistern.pmd";
const TRAILER_FELDBINDER_MODEL: &str =
    "/vehicle/trailer_owned/upgrade/paintjob/paintjob_feldbinder.pmd";

/// All output locations for one (vehicle, paint ID) pair.
///
/// Disk paths are relative to the package root; `*_game_path` fields are the
/// virtual paths referenced from within descriptor files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintJobLayout {
    /// `vehicle/{type}/upgrade/paintjob/{internalName}/{paintId}`
    pub texture_dir: Utf8PathBuf,
    /// `{paintId}_0` for trucks, `{paintId}_shared` for owned trailers.
    pub texture_base_name: String,
    /// `def/vehicle/{type}/{internalName}/paint_job`
    pub def_dir: Utf8PathBuf,
    /// Virtual path of the DDS texture.
    pub texture_game_path: String,
    /// Virtual path of the texture-reference descriptor.
    pub tobj_game_path: String,
    /// Virtual path of the shared paint-job-data file.
    pub shared_sui_game_path: String,
    /// Virtual paths of the metallic and mask override stubs.
    pub metallic_sui_game_path: String,
    pub mask_sui_game_path: String,
    /// Exterior model reference for the addon-data descriptor.
    pub exterior_model: &'static str,
    /// Paint jobs carry no distinct interior model.
    pub interior_model: &'static str,
}

impl PaintJobLayout {
    pub fn dds_file_name(&self) -> String {
        format!("{}.dds", self.texture_base_name)
    }

    pub fn tobj_file_name(&self) -> String {
        format!("{}.tobj", self.texture_base_name)
    }
}

/// Derive the full layout for one vehicle and paint ID.
///
/// Deterministic and infallible; identical inputs always yield identical
/// paths.
pub fn plan(vehicle_type: VehicleType, internal_name: &str, paint_id: &str) -> PaintJobLayout {
    let segment = vehicle_type.path_segment();
    let texture_base_name = format!("{paint_id}{}", vehicle_type.texture_suffix());

    let texture_dir =
        Utf8PathBuf::from(format!("vehicle/{segment}/upgrade/paintjob/{internal_name}/{paint_id}"));
    let def_dir = Utf8PathBuf::from(format!("def/vehicle/{segment}/{internal_name}/paint_job"));

    let texture_game_dir = format!("/vehicle/{segment}/upgrade/paintjob/{internal_name}/{paint_id}");
    let def_game_dir = format!("/def/vehicle/{segment}/{internal_name}/paint_job");

    PaintJobLayout {
        texture_game_path: format!("{texture_game_dir}/{texture_base_name}.dds"),
        tobj_game_path: format!("{texture_game_dir}/{texture_base_name}.tobj"),
        shared_sui_game_path: format!("{def_game_dir}/{paint_id}_shared.sui"),
        metallic_sui_game_path: format!("{def_game_dir}/{paint_id}_metallic.sui"),
        mask_sui_game_path: format!("{def_game_dir}/{paint_id}_mask.sui"),
        exterior_model: exterior_model_for(vehicle_type, internal_name),
        interior_model: "null",
        texture_dir,
        texture_base_name,
        def_dir,
    }
}

/// Select the exterior paint job model for a vehicle.
///
/// Trucks share a single model. Trailers are classified by keyword match
/// against the internal name, cistern-like group first, then the feldbinder
/// group, then the generic trailer model.
pub fn exterior_model_for(vehicle_type: VehicleType, internal_name: &str) -> &'static str {
    match vehicle_type {
        VehicleType::Truck => TRUCK_EXTERIOR_MODEL,
        VehicleType::TrailerOwned => {
            if CISTERN_KEYWORDS.iter().any(|k| internal_name.contains(k)) {
                TRAILER_CISTERN_MODEL
            } else if FELDBINDER_KEYWORDS.iter().any(|k| internal_name.contains(k)) {
                TRAILER_FELDBINDER_MODEL
            } else {
                TRAILER_EXTERIOR_MODEL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_layout_paths() {
        let layout = plan(VehicleType::Truck, "scania.s_2016", "skin0042");
        assert_eq!(
            layout.texture_dir.as_str(),
            "vehicle/truck/upgrade/paintjob/scania.s_2016/skin0042"
        );
        assert_eq!(layout.texture_base_name, "skin0042_0");
        assert_eq!(layout.dds_file_name(), "skin0042_0.dds");
        assert_eq!(
            layout.def_dir.as_str(),
            "def/vehicle/truck/scania.s_2016/paint_job"
        );
        assert_eq!(
            layout.tobj_game_path,
            "/vehicle/truck/upgrade/paintjob/scania.s_2016/skin0042/skin0042_0.tobj"
        );
        assert_eq!(
            layout.shared_sui_game_path,
            "/def/vehicle/truck/scania.s_2016/paint_job/skin0042_shared.sui"
        );
        assert_eq!(layout.exterior_model, TRUCK_EXTERIOR_MODEL);
        assert_eq!(layout.interior_model, "null");
    }

    #[test]
    fn test_trailer_layout_uses_shared_suffix() {
        let layout = plan(VehicleType::TrailerOwned, "scs.box", "skin0001");
        assert_eq!(layout.texture_base_name, "skin0001_shared");
        assert_eq!(
            layout.texture_game_path,
            "/vehicle/trailer_owned/upgrade/paintjob/scs.box/skin0001/skin0001_shared.dds"
        );
        assert_eq!(
            layout.def_dir.as_str(),
            "def/vehicle/trailer_owned/scs.box/paint_job"
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let a = plan(VehicleType::TrailerOwned, "krone.profiliner", "skin9999");
        let b = plan(VehicleType::TrailerOwned, "krone.profiliner", "skin9999");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cistern_classification() {
        for name in [
            "scs.chemtank",
            "scs.foodtank",
            "scs.fueltank",
            "scs.gastank",
            "scs.silo",
            "schwmuller.cisternfood",
        ] {
            assert_eq!(
                exterior_model_for(VehicleType::TrailerOwned, name),
                TRAILER_CISTERN_MODEL,
                "{name}"
            );
        }
    }

    #[test]
    fn test_feldbinder_classification() {
        for name in ["feldbinder.eut", "feldbinder.kip", "feldbinder.tsalm", "feldbinder.tsaadr"] {
            assert_eq!(
                exterior_model_for(VehicleType::TrailerOwned, name),
                TRAILER_FELDBINDER_MODEL,
                "{name}"
            );
        }
    }

    #[test]
    fn test_default_trailer_classification() {
        for name in ["scs.box", "krone.coolliner", "wielton.curtainm"] {
            assert_eq!(
                exterior_model_for(VehicleType::TrailerOwned, name),
                TRAILER_EXTERIOR_MODEL,
                "{name}"
            );
        }
    }

    #[test]
    fn test_cistern_group_wins_over_feldbinder_group() {
        // "eut" is a feldbinder keyword but "silo" matches first.
        assert_eq!(
            exterior_model_for(VehicleType::TrailerOwned, "eut.silo"),
            TRAILER_CISTERN_MODEL
        );
    }

    #[test]
    fn test_trucks_ignore_keywords() {
        assert_eq!(
            exterior_model_for(VehicleType::Truck, "some.silo_truck"),
            TRUCK_EXTERIOR_MODEL
        );
    }
}
