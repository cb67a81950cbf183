//! Pipeline orchestration.
//!
//! A run is a fixed sequence of stages with no backward transitions:
//! validate, prepare directories, per-image processing, mod icon, metadata,
//! optional archive packaging. Validation and directory preparation are
//! fatal on failure; everything after that degrades per item, so a failed
//! image or vehicle is logged and skipped while the run continues.
//!
//! # Failure policy
//!
//! The overall success flag reflects the fatal stages only. A run can
//! report success while its transcript contains per-image or per-vehicle
//! errors; [`RunReport::summary`] calls this out so the asymmetry is never
//! silent. One asymmetry to note: a failure in the UI-asset branch skips
//! the rest of that image's processing (including its vehicles), unlike
//! the finer-grained per-vehicle skip.

use crate::builders;
use crate::catalog::VehicleCatalog;
use crate::ids::allocate_paint_id;
use crate::layout;
use crate::models::{MOD_ICON_RESOLUTION, ProjectSettings};
use crate::services::{ImageService, ScsArchiver, TextureConverter};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

/// Aggregated outcome of a run: ordered human-readable transcript plus a
/// single run-granularity success flag.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub success: bool,
    pub log: Vec<String>,
    pub warnings: usize,
    pub errors: usize,
}

impl RunReport {
    /// One-line outcome for user-facing output.
    ///
    /// The success flag covers the fatal stages only, so a successful run
    /// with a non-zero error count still needs the transcript checked.
    pub fn summary(&self) -> String {
        if !self.success {
            "Run aborted during validation or directory setup.".to_string()
        } else if self.errors > 0 || self.warnings > 0 {
            format!(
                "Run completed with {} error(s) and {} warning(s); \
                 some artifacts were skipped - review the transcript.",
                self.errors, self.warnings
            )
        } else {
            "Run completed successfully.".to_string()
        }
    }
}

/// Ordered transcript with severity counters. Every entry also goes to the
/// tracing log.
#[derive(Debug, Default)]
struct Transcript {
    entries: Vec<String>,
    warnings: usize,
    errors: usize,
}

impl Transcript {
    fn info(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::info!("{msg}");
        self.entries.push(msg);
    }

    fn warn(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!("{msg}");
        self.entries.push(format!("Warning: {msg}"));
        self.warnings += 1;
    }

    fn error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::error!("{msg}");
        self.entries.push(format!("Error: {msg}"));
        self.errors += 1;
    }

    fn finish(self, success: bool) -> RunReport {
        RunReport {
            success,
            log: self.entries,
            warnings: self.warnings,
            errors: self.errors,
        }
    }
}

/// Orchestrates a full mod generation run.
///
/// Owns the image and archive services and the injected texture converter;
/// borrows the settings and the vehicle catalog. Processing is strictly
/// sequential: one image at a time, one vehicle at a time, one converter
/// invocation at a time.
pub struct ModGenerator<C: TextureConverter> {
    images: ImageService,
    converter: C,
    archiver: ScsArchiver,
    catalog: Arc<VehicleCatalog>,
}

impl<C: TextureConverter> ModGenerator<C> {
    pub fn new(converter: C, catalog: Arc<VehicleCatalog>) -> Self {
        Self {
            images: ImageService::new(),
            converter,
            archiver: ScsArchiver::new(),
            catalog,
        }
    }

    /// Run the full pipeline for `settings` over `source_images`.
    pub async fn generate(
        &self,
        settings: &ProjectSettings,
        source_images: &[Utf8PathBuf],
    ) -> RunReport {
        let mut log = Transcript::default();

        // --- Stage 1: validate (fatal) ---
        if let Err(e) = settings.validate() {
            log.error(format!("Invalid settings: {e}"));
            return log.finish(false);
        }
        if !settings.output_directory.is_dir() {
            log.error(format!(
                "Output directory does not exist: {}",
                settings.output_directory
            ));
            return log.finish(false);
        }
        if let Err(e) = self.converter.validate() {
            log.error(format!("{e}"));
            return log.finish(false);
        }
        let sources: Vec<&Utf8PathBuf> = source_images
            .iter()
            .filter(|p| !p.as_str().trim().is_empty())
            .collect();
        if sources.is_empty() {
            log.error("No valid source images provided.");
            return log.finish(false);
        }

        log.info("Mod generation process started...");

        // --- Stage 2: prepare directories (fatal) ---
        for dir in settings.output_directories() {
            if let Err(e) = fs::create_dir_all(&dir) {
                log.error(format!("Failed to create output directory '{dir}': {e}"));
                return log.finish(false);
            }
        }
        let package_root = settings.package_root();
        log.info(format!("Package root: {package_root}"));
        log.info(format!("Temporary files in: {}", settings.temp_dir()));

        // --- Stage 3: per-image processing (recoverable per item) ---
        let mut issued_ids = HashSet::new();
        for source in &sources {
            self.process_image(settings, source, &mut issued_ids, &mut log)
                .await;
        }

        // --- Stage 4: mod icon (warning on failure) ---
        match sources.iter().find(|p| p.exists()) {
            Some(first_valid) => {
                log.info("Generating mod icon...");
                match self.images.resize_image(
                    first_valid,
                    &package_root,
                    &settings.mod_icon_file_name,
                    MOD_ICON_RESOLUTION,
                ) {
                    Ok(path) => log.info(format!("Mod icon saved to '{path}'.")),
                    Err(e) => log.warn(format!("Mod icon generation failed: {e:#}")),
                }
            }
            None => log.info("Skipping mod icon generation (no valid source image)."),
        }

        // --- Stage 5: manifest and description ---
        log.info("Generating manifest.sii and mod_description.txt...");
        let mut metadata_ok = true;
        let manifest = builders::build_manifest_content(settings);
        if manifest.is_empty() {
            log.error("Manifest generation produced no content.");
            metadata_ok = false;
        } else if let Err(e) =
            builders::save_descriptor(&package_root.join("manifest.sii"), &manifest)
        {
            log.error(format!("Failed to save manifest: {e:#}"));
            metadata_ok = false;
        }
        let description = builders::build_mod_description_content(settings);
        if let Err(e) =
            builders::save_text_with_bom(&package_root.join("mod_description.txt"), &description)
        {
            log.error(format!("Failed to save mod description: {e:#}"));
            metadata_ok = false;
        }
        if metadata_ok {
            log.info("Manifest and description files generated.");
        }

        // --- Stage 6: archive (warning on failure, run still completes) ---
        if settings.pack_to_scs_archive {
            let scs_name = format!("{}.scs", settings.package_folder_name());
            log.info(format!("Packaging mod into SCS archive: {scs_name}"));
            match self
                .archiver
                .pack_directory(&package_root, &settings.output_directory, &scs_name)
            {
                Ok(path) => log.info(format!("SCS archive created at: {path}")),
                Err(e) => log.warn(format!("SCS packaging failed: {e}")),
            }
        } else {
            log.info("SCS archive generation skipped as per settings.");
        }

        log.info("Mod generation process finished.");
        log.finish(true)
    }

    /// Process one source image: master resize, UI assets, then every
    /// selected vehicle. Returns early (skipping the rest of the image) on
    /// master or UI-branch failure; vehicle failures skip one vehicle only.
    async fn process_image(
        &self,
        settings: &ProjectSettings,
        source: &Utf8Path,
        issued_ids: &mut HashSet<String>,
        log: &mut Transcript,
    ) {
        if !source.exists() {
            log.warn(format!("Source image '{source}' not found. Skipping."));
            return;
        }

        let paint_id = allocate_paint_id(&settings.paint_job_prefix, issued_ids);
        log.info(format!(
            "--- Processing image '{}' as paint ID '{paint_id}' ---",
            source.file_name().unwrap_or(source.as_str())
        ));

        // Master asset, the DDS source for every vehicle texture.
        let master = match self.images.resize_image(
            source,
            &settings.temp_dir(),
            &format!("{paint_id}.png"),
            settings.main_image_resolution,
        ) {
            Ok(path) => path,
            Err(e) => {
                log.error(format!("Master resize failed: {e:#}"));
                log.info(format!("Skipping '{paint_id}' due to master resize failure."));
                return;
            }
        };

        // UI branch. Any failure here skips the whole image, vehicles
        // included. See the module docs.
        if !self.generate_ui_assets(settings, &master, &paint_id, log).await {
            return;
        }

        let vehicles = self
            .catalog
            .select(&settings.selected_trucks, &settings.selected_trailers);
        if vehicles.is_empty() {
            log.warn(format!(
                "No valid trucks or trailers selected/found for '{paint_id}'."
            ));
        }

        for vehicle in vehicles {
            self.generate_vehicle_assets(settings, &master, &paint_id, vehicle, log)
                .await;
        }

        log.info(format!("--- Finished processing for paint ID '{paint_id}' ---"));
    }

    /// Generate the UI accessory icon: resized variant, DDS conversion,
    /// texture-reference and material descriptors. Returns false on any
    /// failure so the caller can skip the rest of the image.
    async fn generate_ui_assets(
        &self,
        settings: &ProjectSettings,
        master: &Utf8Path,
        paint_id: &str,
        log: &mut Transcript,
    ) -> bool {
        log.info(format!("Generating UI assets for '{paint_id}'..."));
        let ui_base = format!("{paint_id}_ui_accessory");
        let ui_dir = settings.ui_accessory_dir();

        let ui_png = match self.images.resize_image(
            master,
            &settings.temp_dir(),
            &format!("{ui_base}.png"),
            settings.ui_accessory_resolution,
        ) {
            Ok(path) => path,
            Err(e) => {
                log.error(format!("UI icon resize failed: {e:#}"));
                log.info(format!("Skipping UI assets for '{paint_id}' due to resize failure."));
                return false;
            }
        };

        let ui_dds = match self.converter.convert_to_dds(&ui_png, &ui_dir, true).await {
            Ok(path) => path,
            Err(e) => {
                log.error(format!("UI DDS conversion failed: {e}"));
                log.info(format!(
                    "Skipping UI assets for '{paint_id}' due to DDS conversion failure."
                ));
                return false;
            }
        };

        let dds_name = ui_dds.file_name().unwrap_or_default();
        let tobj = builders::build_tobj_content(&format!("/material/ui/accessory/{dds_name}"));
        if tobj.is_empty() {
            log.error(format!("UI TOBJ generation produced no content for '{ui_base}'."));
            return false;
        }
        if let Err(e) = builders::save_descriptor(&ui_dir.join(format!("{ui_base}.tobj")), &tobj) {
            log.error(format!("Failed to save UI TOBJ for '{ui_base}': {e:#}"));
            return false;
        }
        log.info(format!("UI TOBJ for '{ui_base}' created."));

        let mat = builders::build_ui_mat_content(&ui_base);
        if mat.is_empty() {
            log.error(format!("UI MAT generation produced no content for '{ui_base}'."));
            return false;
        }
        if let Err(e) = builders::save_descriptor(&ui_dir.join(format!("{ui_base}.mat")), &mat) {
            log.error(format!("Failed to save UI MAT for '{ui_base}': {e:#}"));
            return false;
        }
        log.info(format!("UI MAT for '{ui_base}' created."));
        true
    }

    /// Generate one vehicle's texture and descriptors. All failures are
    /// local: they log and leave the remaining vehicles untouched.
    async fn generate_vehicle_assets(
        &self,
        settings: &ProjectSettings,
        master: &Utf8Path,
        paint_id: &str,
        vehicle: &crate::models::VehicleDefinition,
        log: &mut Transcript,
    ) {
        log.info(format!("Processing for vehicle: {vehicle}"));
        let plan = layout::plan(vehicle.vehicle_type, &vehicle.internal_name, paint_id);
        let package_root = settings.package_root();
        let texture_dir = package_root.join(&plan.texture_dir);
        let def_dir = package_root.join(&plan.def_dir);

        let produced = match self.converter.convert_to_dds(master, &texture_dir, false).await {
            Ok(path) => path,
            Err(e) => {
                log.error(format!(
                    "DDS conversion failed for {}/{paint_id}: {e}",
                    vehicle.internal_name
                ));
                return;
            }
        };

        // The tool names its output after the master's stem; the engine
        // expects the vehicle-specific convention.
        let final_dds = texture_dir.join(plan.dds_file_name());
        if produced != final_dds {
            match fs::rename(&produced, &final_dds) {
                Ok(()) => log.info(format!(
                    "Renamed '{}' to '{}'.",
                    produced.file_name().unwrap_or_default(),
                    plan.dds_file_name()
                )),
                Err(e) => log.warn(format!(
                    "Could not rename '{}' to '{}': {e}",
                    produced.file_name().unwrap_or_default(),
                    plan.dds_file_name()
                )),
            }
        }

        let tobj = builders::build_tobj_content(&plan.texture_game_path);
        if tobj.is_empty() {
            log.error(format!(
                "TOBJ generation produced no content for {}/{paint_id}.",
                vehicle.internal_name
            ));
            return;
        }
        if let Err(e) = builders::save_descriptor(&texture_dir.join(plan.tobj_file_name()), &tobj) {
            log.error(format!(
                "Failed to save TOBJ for {}/{paint_id}: {e:#}",
                vehicle.internal_name
            ));
            return;
        }
        log.info(format!("TOBJ for {}/{paint_id} created.", vehicle.internal_name));

        let sui = builders::build_paint_job_data_content(
            paint_id,
            &vehicle.internal_name,
            vehicle.vehicle_type,
            settings,
        );
        if sui.is_empty() {
            log.error(format!(
                "Paint job data generation produced no content for {}/{paint_id}.",
                vehicle.internal_name
            ));
            return;
        }
        if let Err(e) =
            builders::save_descriptor(&def_dir.join(format!("{paint_id}_shared.sui")), &sui)
        {
            log.error(format!(
                "Failed to save _shared.sui for {}/{paint_id}: {e:#}",
                vehicle.internal_name
            ));
            return;
        }
        log.info(format!(
            "_shared.sui for {}/{paint_id} created.",
            vehicle.internal_name
        ));

        let sii =
            builders::build_addon_data_content(paint_id, &vehicle.internal_name, vehicle.vehicle_type);
        if sii.is_empty() {
            log.error(format!(
                "Addon data generation produced no content for {}/{paint_id}.",
                vehicle.internal_name
            ));
            return;
        }
        if let Err(e) = builders::save_descriptor(&def_dir.join(format!("{paint_id}.sii")), &sii) {
            log.error(format!(
                "Failed to save .sii for {}/{paint_id}: {e:#}",
                vehicle.internal_name
            ));
            return;
        }
        log.info(format!(".sii for {}/{paint_id} created.", vehicle.internal_name));

        for stub in [
            def_dir.join(format!("{paint_id}_metallic.sui")),
            def_dir.join(format!("{paint_id}_mask.sui")),
        ] {
            if let Err(e) = builders::save_empty_stub(&stub) {
                log.warn(format!("Failed to create override stub '{stub}': {e:#}"));
            }
        }
        log.info(format!(
            "Empty metallic/mask SUI stubs for {}/{paint_id} created.",
            vehicle.internal_name
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TexconvError;
    use tempfile::TempDir;

    /// Converter that always succeeds by copying the input as a fake DDS.
    struct StubConverter;

    impl TextureConverter for StubConverter {
        fn validate(&self) -> Result<(), TexconvError> {
            Ok(())
        }

        async fn convert_to_dds(
            &self,
            input: &Utf8Path,
            output_dir: &Utf8Path,
            _ensure_lowercase_extension: bool,
        ) -> Result<Utf8PathBuf, TexconvError> {
            fs::create_dir_all(output_dir)?;
            let stem = input.file_stem().unwrap_or("out");
            let target = output_dir.join(format!("{stem}.dds"));
            fs::copy(input, &target)?;
            Ok(target)
        }
    }

    fn generator() -> ModGenerator<StubConverter> {
        ModGenerator::new(StubConverter, Arc::new(VehicleCatalog::default()))
    }

    #[tokio::test]
    async fn test_blank_settings_abort_the_run() {
        let report = generator()
            .generate(&ProjectSettings::default(), &[Utf8PathBuf::from("a.png")])
            .await;
        assert!(!report.success);
        assert_eq!(report.errors, 1);
        assert!(report.summary().contains("aborted"));
    }

    #[tokio::test]
    async fn test_missing_output_directory_aborts() {
        let settings = ProjectSettings {
            output_directory: Utf8PathBuf::from("/definitely/not/here"),
            texconv_path: Utf8PathBuf::from("texconv.exe"),
            ..Default::default()
        };
        let report = generator()
            .generate(&settings, &[Utf8PathBuf::from("a.png")])
            .await;
        assert!(!report.success);
        assert!(report.log.iter().any(|l| l.contains("Output directory")));
    }

    #[tokio::test]
    async fn test_no_source_images_aborts() {
        let dir = TempDir::new().unwrap();
        let out = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let settings = ProjectSettings {
            texconv_path: out.join("texconv.exe"),
            output_directory: out,
            ..Default::default()
        };
        let report = generator()
            .generate(&settings, &[Utf8PathBuf::from("  ")])
            .await;
        assert!(!report.success);
        assert!(report.log.iter().any(|l| l.contains("No valid source images")));
    }

    #[tokio::test]
    async fn test_missing_image_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let out = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let settings = ProjectSettings {
            texconv_path: out.join("anything"),
            output_directory: out.clone(),
            pack_to_scs_archive: false,
            ..Default::default()
        };
        let report = generator()
            .generate(&settings, &[out.join("ghost.png")])
            .await;
        // Missing image is a per-item warning; the run still completes.
        assert!(report.success);
        assert!(report.warnings >= 1);
        assert!(report.log.iter().any(|l| l.contains("ghost.png")));
    }
}
