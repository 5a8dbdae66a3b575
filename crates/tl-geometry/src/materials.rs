//! Static conductor material properties.
//!
//! Two properties are tabulated per material: relative permeability (used to
//! derive GMR) and resistivity in Ω·m at 20 °C (used to derive resistance).

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub relative_permeability: f64,
    /// Ω·m
    pub resistivity: f64,
}

impl MaterialEntry {
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.canonical_id.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

const MATERIALS: [MaterialEntry; 2] = [
    MaterialEntry {
        canonical_id: "aluminum",
        display_name: "Aluminum",
        aliases: &["aluminium", "al"],
        relative_permeability: 1.000_022,
        resistivity: 2.82e-8,
    },
    MaterialEntry {
        canonical_id: "copper",
        display_name: "Copper",
        aliases: &["cu"],
        relative_permeability: 0.999_994,
        resistivity: 1.68e-8,
    },
];

pub fn catalog() -> &'static [MaterialEntry] {
    &MATERIALS
}

pub fn lookup(name: &str) -> Option<&'static MaterialEntry> {
    MATERIALS.iter().find(|entry| entry.matches(name))
}

pub fn relative_permeability(name: &str) -> Option<f64> {
    lookup(name).map(|entry| entry.relative_permeability)
}

pub fn resistivity(name: &str) -> Option<f64> {
    lookup(name).map(|entry| entry.resistivity)
}
