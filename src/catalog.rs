//! Static vehicle catalog.
//!
//! The catalog is the read-only reference data the pipeline selects
//! vehicles from. It is built once at startup and shared by reference;
//! entries are kept in insertion order so generated logs and file trees
//! are stable across runs.

use crate::models::{VehicleDefinition, VehicleType};
use indexmap::IndexMap;

/// Immutable lookup table of known trucks and owned trailers, keyed by
/// internal name within each type.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    trucks: IndexMap<String, VehicleDefinition>,
    trailers: IndexMap<String, VehicleDefinition>,
}

impl VehicleCatalog {
    /// Build an empty catalog. Mostly useful for tests.
    pub fn empty() -> Self {
        Self {
            trucks: IndexMap::new(),
            trailers: IndexMap::new(),
        }
    }

    /// Insert a definition, replacing any previous entry with the same
    /// internal name and type.
    pub fn insert(&mut self, def: VehicleDefinition) {
        let map = match def.vehicle_type {
            VehicleType::Truck => &mut self.trucks,
            VehicleType::TrailerOwned => &mut self.trailers,
        };
        map.insert(def.internal_name.clone(), def);
    }

    pub fn truck(&self, internal_name: &str) -> Option<&VehicleDefinition> {
        self.trucks.get(internal_name)
    }

    pub fn trailer(&self, internal_name: &str) -> Option<&VehicleDefinition> {
        self.trailers.get(internal_name)
    }

    pub fn trucks(&self) -> impl Iterator<Item = &VehicleDefinition> {
        self.trucks.values()
    }

    pub fn trailers(&self) -> impl Iterator<Item = &VehicleDefinition> {
        self.trailers.values()
    }

    /// Resolve the run's vehicle selection: trucks first, then trailers,
    /// duplicates removed by internal name while preserving order.
    ///
    /// Unknown names are skipped; the caller is expected to warn about a
    /// selection that resolves to nothing.
    pub fn select<'a>(
        &'a self,
        truck_names: &[String],
        trailer_names: &[String],
    ) -> Vec<&'a VehicleDefinition> {
        let mut seen = std::collections::HashSet::new();
        let mut selected = Vec::new();

        for name in truck_names {
            if let Some(def) = self.truck(name)
                && seen.insert(def.internal_name.as_str())
            {
                selected.push(def);
            }
        }
        for name in trailer_names {
            if let Some(def) = self.trailer(name)
                && seen.insert(def.internal_name.as_str())
            {
                selected.push(def);
            }
        }
        selected
    }
}

impl Default for VehicleCatalog {
    /// The built-in catalog of known ETS2/ATS vehicles.
    fn default() -> Self {
        let mut catalog = Self::empty();

        let trucks: &[(&str, &str)] = &[
            ("daf.2021", "DAF 2021"),
            ("daf.xd", "DAF XD"),
            ("daf.xf", "DAF XF"),
            ("daf.xf_euro6", "DAF XF Euro 6"),
            ("iveco.hiway", "Iveco Hi-Way"),
            ("iveco.stralis", "Iveco Stralis"),
            ("iveco.sway", "Iveco S-Way"),
            ("man.tgx", "MAN TGX"),
            ("man.tgx_2020", "MAN TGX 2020"),
            ("man.tgx_euro6", "MAN TGX Euro 6"),
            ("mercedes.actros", "Mercedes Actros"),
            ("mercedes.actros2014", "Mercedes Actros 2014"),
            ("mercedes.actros_mp2", "Mercedes Actros MP2"),
            ("mercedes.actros_mp3", "Mercedes Actros MP3"),
            ("ram.3500", "RAM 3500"),
            ("renault.magnum", "Renault Magnum"),
            ("renault.premium", "Renault Premium"),
            ("renault.radiance", "Renault Radiance"),
            ("renault.t", "Renault T"),
            ("scania.r", "Scania R"),
            ("scania.r_2016", "Scania R 2016"),
            ("scania.spectr", "Scania Spectr (Custom/Mod?)"),
            ("scania.streamline", "Scania Streamline"),
            ("scania.s_2016", "Scania S 2016"),
            ("volvo.fh16", "Volvo FH16"),
            ("volvo.fh16_2012", "Volvo FH16 2012"),
            ("volvo.fh_2021", "Volvo FH 2021"),
            ("volvo.fh_2024", "Volvo FH 2024"),
        ];

        let trailers: &[(&str, &str)] = &[
            ("feldbinder.eut", "Feldbinder EUT"),
            ("feldbinder.kip", "Feldbinder KIP"),
            ("feldbinder.tsaadr", "Feldbinder TSA ADR"),
            ("feldbinder.tsalm", "Feldbinder TSA LM"),
            ("freight.casca", "Freightliner Cascadia (Trailer?)"),
            ("freight.xl", "Freightliner XL (Trailer?)"),
            ("koegel.cargo", "Kögel Cargo"),
            ("koegel.mega", "Kögel Mega"),
            ("koegel.multi", "Kögel Multi"),
            ("koegel.multi_mega", "Kögel Multi Mega"),
            ("krone.coolliner", "Krone Cool Liner"),
            ("krone.dryliner", "Krone Dry Liner"),
            ("krone.paperliner", "Krone Paper Liner"),
            ("krone.profiliner", "Krone Profi Liner"),
            ("krone.profilinerbm", "Krone Profi Liner BM"),
            ("krone.profilinerhd", "Krone Profi Liner HD"),
            ("schwmuller.cisternfood", "Schwarzmüller Food Cistern"),
            ("schwmuller.curtain", "Schwarzmüller Curtain"),
            ("schwmuller.reefer", "Schwarzmüller Reefer"),
            ("scs.box", "SCS Box Trailer"),
            ("scs.chemtank", "SCS Chemical Tank"),
            ("scs.dumper", "SCS Dumper"),
            ("scs.foodtank", "SCS Food Tank"),
            ("scs.fueltank", "SCS Fuel Tank"),
            ("scs.gastank", "SCS Gas Tank"),
            ("scs.livestock", "SCS Livestock Trailer"),
            ("scs.silo", "SCS Silo Trailer"),
            ("tirsan.scs", "Tirsan SCS"),
            ("tirsan.sks", "Tirsan SKS"),
            ("tirsan.sri", "Tirsan SRI"),
            ("wielton.bulkm", "Wielton Bulk Master"),
            ("wielton.curtainm", "Wielton Curtain Master"),
            ("wielton.dropsidem", "Wielton Dropside Master"),
            ("wielton.drym", "Wielton Dry Master"),
            ("wielton.strongm", "Wielton Strong Master"),
            ("wielton.weightm", "Wielton Weight Master"),
        ];

        for (internal, display) in trucks {
            catalog.insert(VehicleDefinition::new(*internal, *display, VehicleType::Truck));
        }
        for (internal, display) in trailers {
            catalog.insert(VehicleDefinition::new(
                *internal,
                *display,
                VehicleType::TrailerOwned,
            ));
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookups() {
        let catalog = VehicleCatalog::default();
        assert!(catalog.truck("scania.s_2016").is_some());
        assert!(catalog.trailer("scs.chemtank").is_some());
        // Types are kept separate
        assert!(catalog.truck("scs.chemtank").is_none());
        assert!(catalog.trailer("scania.s_2016").is_none());
    }

    #[test]
    fn test_default_catalog_includes_uncertain_entries() {
        // These internal names look odd but exist in game data, so
        // selecting them must resolve instead of silently skipping.
        let catalog = VehicleCatalog::default();
        assert!(catalog.truck("scania.spectr").is_some());
        assert!(catalog.trailer("freight.casca").is_some());
        assert!(catalog.trailer("freight.xl").is_some());

        let selected = catalog.select(
            &["scania.spectr".to_string()],
            &["freight.casca".to_string(), "freight.xl".to_string()],
        );
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0].internal_name, "scania.spectr");
    }

    #[test]
    fn test_select_orders_trucks_before_trailers() {
        let catalog = VehicleCatalog::default();
        let selected = catalog.select(
            &["volvo.fh16".to_string()],
            &["scs.box".to_string()],
        );
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].internal_name, "volvo.fh16");
        assert_eq!(selected[1].internal_name, "scs.box");
    }

    #[test]
    fn test_select_deduplicates_and_skips_unknown() {
        let catalog = VehicleCatalog::default();
        let selected = catalog.select(
            &[
                "volvo.fh16".to_string(),
                "volvo.fh16".to_string(),
                "not.a.truck".to_string(),
            ],
            &[],
        );
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut catalog = VehicleCatalog::empty();
        catalog.insert(VehicleDefinition::new("a.b", "First", VehicleType::Truck));
        catalog.insert(VehicleDefinition::new("a.b", "Second", VehicleType::Truck));
        assert_eq!(catalog.truck("a.b").unwrap().display_name, "Second");
        assert_eq!(catalog.trucks().count(), 1);
    }
}
